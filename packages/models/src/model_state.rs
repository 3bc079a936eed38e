use crate::failure::{FailureCause, ValidationFailure};
use serde::{Deserialize, Serialize};

/// Read access the report builder needs from a validation result
pub trait ModelStateView {
    /// Authoritative validity flag; entries are not consulted when it is true
    fn is_valid(&self) -> bool;

    /// Entries in the order their fields were recorded
    fn entries(&self) -> &[ValidationEntry];
}

/// One field's validation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationEntry {
    pub key: String,
    #[serde(default)]
    pub failures: Vec<ValidationFailure>,
}

impl ValidationEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            failures: Vec::new(),
        }
    }

    pub fn with_failures(key: impl Into<String>, failures: Vec<ValidationFailure>) -> Self {
        Self {
            key: key.into(),
            failures,
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Validation result for a whole model, keyed by field path.
///
/// Keys are compared exactly here, so `"Name"` and `"name"` are two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationState {
    is_valid: bool,
    entries: Vec<ValidationEntry>,
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationState {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            entries: Vec::new(),
        }
    }

    /// Build a state whose validity flag is taken as given
    pub fn from_parts(is_valid: bool, entries: Vec<ValidationEntry>) -> Self {
        Self { is_valid, entries }
    }

    /// Register a field that was validated without errors
    pub fn mark_field(&mut self, key: &str) -> &mut Self {
        self.entry_mut(key);
        self
    }

    pub fn add_model_error(&mut self, key: &str, message: impl Into<String>) -> &mut Self {
        self.add_failure(key, ValidationFailure::with_message(message))
    }

    pub fn add_exception(&mut self, key: &str, cause: FailureCause) -> &mut Self {
        self.add_failure(key, ValidationFailure::with_cause(cause))
    }

    pub fn add_failure(&mut self, key: &str, failure: ValidationFailure) -> &mut Self {
        self.entry_mut(key).failures.push(failure);
        self.is_valid = false;
        self
    }

    pub fn get(&self, key: &str) -> Option<&ValidationEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.failures.len()).sum()
    }

    fn entry_mut(&mut self, key: &str) -> &mut ValidationEntry {
        let index = match self.entries.iter().position(|entry| entry.key == key) {
            Some(index) => index,
            None => {
                self.entries.push(ValidationEntry::new(key));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }
}

impl ModelStateView for ValidationState {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn entries(&self) -> &[ValidationEntry] {
        &self.entries
    }
}
