use std::env;

/// Environment variable that overrides the fallback message
pub const DEFAULT_ERROR_ENV: &str = "VALIDATION_DEFAULT_ERROR";

/// Fallback shown for failures that carry neither a usable cause nor a message
pub const INVALID_INPUT: &str = "The input was not valid.";

/// Source of the pre-localized strings used by the report builder
#[cfg_attr(test, mockall::automock)]
pub trait DefaultMessages {
    fn invalid_input(&self) -> String;
}

/// Built-in English strings
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

impl DefaultMessages for EnglishMessages {
    fn invalid_input(&self) -> String {
        INVALID_INPUT.to_string()
    }
}

/// A fallback message chosen by the host application, English otherwise
#[derive(Debug, Clone, Default)]
pub struct ConfiguredMessages {
    invalid_input: Option<String>,
}

impl ConfiguredMessages {
    pub fn new(invalid_input: impl Into<String>) -> Self {
        Self::from_option(Some(invalid_input.into()))
    }

    /// Reads the override from `VALIDATION_DEFAULT_ERROR`
    pub fn from_env() -> Self {
        Self::from_env_var(DEFAULT_ERROR_ENV)
    }

    pub(crate) fn from_env_var(name: &str) -> Self {
        Self::from_option(env::var(name).ok())
    }

    /// Blank overrides are ignored
    pub fn from_option(invalid_input: Option<String>) -> Self {
        Self {
            invalid_input: invalid_input.filter(|message| !message.trim().is_empty()),
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.invalid_input.is_some()
    }
}

impl DefaultMessages for ConfiguredMessages {
    fn invalid_input(&self) -> String {
        match &self.invalid_input {
            Some(message) => message.clone(),
            None => EnglishMessages.invalid_input(),
        }
    }
}
