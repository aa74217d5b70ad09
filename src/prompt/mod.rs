//! Interactive resolution of a complete configuration
//!
//! The flow asks only for fields missing from the command line, in a fixed
//! order: application name, variant, Tailwind confirmation, package
//! manager. Cancellation at any prompt aborts the whole resolution.

use crate::{
    config::{Config, Options, PackageManager, Variant},
    error::{Error, Result},
};

pub mod dialoguer;
pub mod interface;
pub mod scripted;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::{
    ConfirmationConfig, ConfirmationPrompter, PromptProvider, SingleChoiceConfig,
    SingleChoicePrompter, TextPromptConfig, TextPrompter,
};
pub use scripted::ScriptedPrompter;

pub const NAME_PROMPT: &str = "What is the name of the app";
pub const NAME_REQUIRED_MESSAGE: &str = "App name is required!";
pub const VARIANT_PROMPT: &str = "Which variant do you want";
pub const TAILWIND_PROMPT: &str = "Do you want to use Tailwind CSS";
pub const PACKAGE_MANAGER_PROMPT: &str = "Choose a package manager";

/// Fills the gaps of a partial [`Options`] by asking the user.
pub struct PromptFlow<P: PromptProvider> {
    provider: P,
}

impl<P: PromptProvider> PromptFlow<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolves `options` into a complete [`Config`].
    ///
    /// Fields already present are taken as-is; a fully populated `options`
    /// asks no questions at all. Returns [`Error::Cancelled`] as soon as
    /// any prompt reports cancellation.
    pub fn resolve(&self, options: Options) -> Result<Config> {
        let app_name = match options.app_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.ask_app_name()?,
        };

        let variant = match options.variant {
            Some(variant) => variant,
            None => self.ask_variant()?,
        };

        let tailwind = match options.tailwind {
            Some(tailwind) => tailwind,
            None => self.ask_tailwind()?,
        };

        let package_manager = match options.package_manager {
            Some(manager) => manager,
            None => self.ask_package_manager()?,
        };

        Ok(Config { app_name, path: options.path, package_manager, tailwind, variant })
    }

    fn ask_app_name(&self) -> Result<String> {
        let config = TextPromptConfig {
            prompt: NAME_PROMPT.to_string(),
            validation_message: NAME_REQUIRED_MESSAGE.to_string(),
        };
        let name = self.provider.prompt_text(&config)?.ok_or(Error::Cancelled)?;
        if name.trim().is_empty() {
            return Err(Error::ValidationError(NAME_REQUIRED_MESSAGE.to_string()));
        }
        Ok(name)
    }

    fn ask_variant(&self) -> Result<Variant> {
        let config = SingleChoiceConfig {
            prompt: VARIANT_PROMPT.to_string(),
            choices: Variant::MENU.iter().map(|v| v.label().to_string()).collect(),
            default_index: Some(0),
        };
        let index =
            self.provider.prompt_single_choice(&config)?.ok_or(Error::Cancelled)?;
        Variant::MENU.get(index).copied().ok_or_else(|| {
            Error::ValidationError(format!("invalid variant selection: {index}"))
        })
    }

    fn ask_tailwind(&self) -> Result<bool> {
        let config =
            ConfirmationConfig { prompt: TAILWIND_PROMPT.to_string(), default: false };
        self.provider.prompt_confirmation(&config)?.ok_or(Error::Cancelled)
    }

    fn ask_package_manager(&self) -> Result<PackageManager> {
        let config = SingleChoiceConfig {
            prompt: PACKAGE_MANAGER_PROMPT.to_string(),
            choices: PackageManager::ALL.iter().map(|m| m.label().to_string()).collect(),
            default_index: Some(0),
        };
        let index =
            self.provider.prompt_single_choice(&config)?.ok_or(Error::Cancelled)?;
        PackageManager::ALL.get(index).copied().ok_or_else(|| {
            Error::ValidationError(format!("invalid package manager selection: {index}"))
        })
    }
}
