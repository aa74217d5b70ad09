/// Handles argument parsing and workflow orchestration.
pub mod cli;

/// Package-manager command construction.
pub mod commands;

/// Configuration model for a generation run.
pub mod config;

/// Constants used throughout the application.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Child process execution.
pub mod process;

/// User input and interaction handling.
pub mod prompt;

/// Vite scaffold stage.
pub mod scaffold;

/// Tailwind CSS setup stage.
pub mod tailwind;

/// Spinner and styled console messages.
pub mod ui;
