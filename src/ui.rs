//! Console messages and the progress spinner.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn success(message: &str) -> String {
    format!("{} {}", style("✔").green(), style(message).green())
}

pub fn error(message: &str) -> String {
    format!("{} {}", style("✘").red(), style(message).red())
}

pub fn heading(message: &str) -> String {
    style(message).white().on_blue().bold().to_string()
}

/// Textual progress indicator with a start/update/stop lifecycle.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Starts the spinner with an initial message.
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner().template("{spinner:.green} {msg}").unwrap(),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(message.into());
        Self { bar }
    }

    /// Replaces the message mid-flight.
    pub fn update(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    /// Stops the spinner with a success message.
    pub fn succeed(self, message: &str) {
        self.bar.finish_and_clear();
        println!("{}", success(message));
    }

    /// Stops the spinner with a failure message.
    pub fn fail(self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{}", error(message));
    }
}
