//! Child process execution for generator and package-manager commands.

use crate::commands::CommandSpec;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Executes structured commands.
///
/// The trait seam keeps the orchestration stages testable without spawning
/// real package managers.
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec, current_dir: &Path) -> Result<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, spec: &CommandSpec, current_dir: &Path) -> Result<()> {
        (**self).run(spec, current_dir)
    }
}

/// Runs commands on the host system with all output suppressed.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec, current_dir: &Path) -> Result<()> {
        run_command(spec, current_dir)
    }
}

/// Spawns `spec` in `current_dir` and waits for it to finish.
///
/// The command is never passed through a shell. Output is suppressed; the
/// surrounding spinner is the only progress reporting. A non-zero exit
/// status is an error.
pub fn run_command(spec: &CommandSpec, current_dir: &Path) -> Result<()> {
    log::debug!("Running command: {spec}");

    let status = Command::new(spec.program())
        .args(spec.args())
        .current_dir(current_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if !status.success() {
        return Err(Error::CommandFailed { command: spec.to_string(), status });
    }

    Ok(())
}
