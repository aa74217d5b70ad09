//! Dialoguer-based implementation of the prompt interfaces
//!
//! This module provides the terminal implementation of the prompt
//! interfaces using the dialoguer library. An interrupted read (Ctrl-C)
//! and an escaped selection both resolve to the cancellation sentinel.

use super::interface::{ConfirmationConfig, SingleChoiceConfig, TextPromptConfig};
use crate::error::Result;
use dialoguer::{Confirm, Input, Select};
use std::io::ErrorKind;

/// Terminal prompter backed by dialoguer
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps an interrupted terminal read to the cancellation sentinel.
fn catch_interrupt<T>(
    result: std::result::Result<Option<T>, dialoguer::Error>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>> {
        let validation_message = config.validation_message.clone();
        let result = Input::<String>::new()
            .with_prompt(&config.prompt)
            .validate_with(move |input: &String| {
                if input.trim().is_empty() {
                    Err(validation_message.clone())
                } else {
                    Ok(())
                }
            })
            .interact_text();

        catch_interrupt(result.map(Some))
    }
}

impl super::interface::SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(
        &self,
        config: &SingleChoiceConfig,
    ) -> Result<Option<usize>> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.choices);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        catch_interrupt(select.interact_opt())
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<Option<bool>> {
        let result = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact_opt();

        catch_interrupt(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catch_interrupt_turns_interrupted_reads_into_cancellation() {
        let interrupted: std::result::Result<Option<usize>, dialoguer::Error> =
            Err(dialoguer::Error::IO(std::io::Error::new(
                ErrorKind::Interrupted,
                "read interrupted",
            )));
        assert_eq!(catch_interrupt(interrupted).unwrap(), None);
    }

    #[test]
    fn catch_interrupt_propagates_other_io_errors() {
        let broken: std::result::Result<Option<usize>, dialoguer::Error> = Err(
            dialoguer::Error::IO(std::io::Error::new(ErrorKind::BrokenPipe, "gone")),
        );
        assert!(catch_interrupt(broken).is_err());
    }

    #[test]
    fn catch_interrupt_passes_answers_through() {
        let answered: std::result::Result<Option<usize>, dialoguer::Error> = Ok(Some(2));
        assert_eq!(catch_interrupt(answered).unwrap(), Some(2));
    }
}
