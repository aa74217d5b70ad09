//! Pure interfaces for prompting without external dependencies
//!
//! This module defines abstract interfaces for the prompt types the flow
//! needs. These interfaces are independent of any specific UI library
//! implementation. Every prompt method returns `Ok(None)` when the user
//! cancels (interrupt or escape) instead of answering.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    /// Message shown when the submitted text is empty; the prompt re-asks.
    pub validation_message: String,
}

/// Configuration for single choice selection
#[derive(Debug, Clone)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub default_index: Option<usize>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>>;
}

/// Abstract interface for single choice selection
pub trait SingleChoicePrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig)
        -> Result<Option<usize>>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<Option<bool>>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + SingleChoicePrompter + ConfirmationPrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where
    T: TextPrompter + SingleChoicePrompter + ConfirmationPrompter
{
}
