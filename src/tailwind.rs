//! Installs and configures Tailwind CSS inside the generated project.

use crate::commands::{exec_command, install_command};
use crate::config::Config;
use crate::constants::{
    DEV_DEPENDENCY_FLAG, INDEX_CSS_CONTENT, INDEX_CSS_FILE, TAILWIND_CONFIG_CONTENT,
    TAILWIND_CONFIG_FILE, TAILWIND_PACKAGES,
};
use crate::error::Result;
use crate::ioutils::write_file;
use crate::process::CommandRunner;
use crate::ui::Spinner;
use std::path::Path;

/// Adds Tailwind CSS to the generated project, if requested.
///
/// Installs the framework and its peer dependencies as development
/// dependencies, runs the config initializer with the PostCSS option, and
/// writes the configuration file and stylesheet entry point.
pub fn setup(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    if !config.tailwind {
        return Ok(());
    }

    let project_dir = config.project_dir();
    let spinner = Spinner::start("Installing Tailwind CSS and its peer dependencies");

    match run_steps(config, &project_dir, runner, &spinner) {
        Ok(()) => {
            spinner.succeed("Added Tailwind CSS");
            Ok(())
        }
        Err(err) => {
            spinner.fail("There was an error while adding Tailwind CSS");
            Err(err)
        }
    }
}

fn run_steps(
    config: &Config,
    project_dir: &Path,
    runner: &dyn CommandRunner,
    spinner: &Spinner,
) -> Result<()> {
    let install = install_command(
        config.package_manager,
        TAILWIND_PACKAGES,
        &[DEV_DEPENDENCY_FLAG],
    );
    runner.run(&install, project_dir)?;

    spinner.update("Tailwind installed! Now generating configuration...");
    let init = exec_command(config.package_manager, &["tailwindcss", "init"], &["-p"]);
    runner.run(&init, project_dir)?;

    write_assets(project_dir)
}

/// Writes the Tailwind configuration file and the stylesheet entry point.
pub fn write_assets(project_dir: &Path) -> Result<()> {
    write_file(TAILWIND_CONFIG_CONTENT, project_dir.join(TAILWIND_CONFIG_FILE))?;
    write_file(INDEX_CSS_CONTENT, project_dir.join(INDEX_CSS_FILE))?;
    Ok(())
}
