//! Prompt provider that gives predefined responses
//!
//! Useful for automation, testing, or CI environments where no terminal is
//! attached. Responses are keyed by prompt text; a prompt registered for
//! cancellation behaves like the user aborting at it.

use super::interface::*;
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text_responses: HashMap<String, String>,
    choice_responses: HashMap<String, usize>,
    confirmation_responses: HashMap<String, bool>,
    cancel_on: HashSet<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Add a predefined choice response (by index) for a specific prompt
    pub fn with_choice_response(mut self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(prompt.to_string(), choice_index);
        self
    }

    /// Add a predefined confirmation response for a specific prompt
    pub fn with_confirmation_response(mut self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses.insert(prompt.to_string(), response);
        self
    }

    /// Simulate the user cancelling at a specific prompt
    pub fn with_cancellation(mut self, prompt: &str) -> Self {
        self.cancel_on.insert(prompt.to_string());
        self
    }

    fn missing(prompt: &str) -> Error {
        Error::ValidationError(format!("no scripted response for prompt '{prompt}'"))
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>> {
        if self.cancel_on.contains(&config.prompt) {
            return Ok(None);
        }
        self.text_responses
            .get(&config.prompt)
            .map(|response| Some(response.clone()))
            .ok_or_else(|| Self::missing(&config.prompt))
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(
        &self,
        config: &SingleChoiceConfig,
    ) -> Result<Option<usize>> {
        if self.cancel_on.contains(&config.prompt) {
            return Ok(None);
        }
        self.choice_responses
            .get(&config.prompt)
            .map(|index| Some(*index))
            .ok_or_else(|| Self::missing(&config.prompt))
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<Option<bool>> {
        if self.cancel_on.contains(&config.prompt) {
            return Ok(None);
        }
        self.confirmation_responses
            .get(&config.prompt)
            .map(|response| Some(*response))
            .ok_or_else(|| Self::missing(&config.prompt))
    }
}
