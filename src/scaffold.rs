//! Generates the Vite project skeleton.

use crate::commands::scaffold_command;
use crate::config::Config;
use crate::error::Result;
use crate::process::CommandRunner;
use crate::ui::Spinner;

/// Runs the external generator for the resolved configuration.
///
/// The generator runs in the target path and creates the project directory
/// named after the application.
pub fn generate(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    let command =
        scaffold_command(config.package_manager, &config.app_name, config.variant);

    let spinner = Spinner::start("Generating a Vite app");
    match runner.run(&command, &config.path) {
        Ok(()) => {
            spinner.succeed("Vite app created successfully!");
            Ok(())
        }
        Err(err) => {
            spinner.fail("There was an error while generating the Vite app");
            Err(err)
        }
    }
}
