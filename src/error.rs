use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The user aborted at one of the prompts.
    #[error("Generation cancelled by user.")]
    Cancelled,

    /// When a child process has executed but finished with an error.
    #[error("Command '{command}' failed with status: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Cannot write '{path}'. Original error: {source}")]
    WriteError { path: String, source: std::io::Error },
}

/// Convenience type alias for Results with this crate's error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", crate::ui::error(&err.to_string()));
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
