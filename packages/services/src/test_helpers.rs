use models::{FailureCause, ValidationEntry, ValidationFailure, ValidationState};

pub fn message(text: &str) -> ValidationFailure {
    ValidationFailure::with_message(text)
}

pub fn exposed(text: &str) -> ValidationFailure {
    ValidationFailure::with_cause(FailureCause::exposed(text))
}

pub fn entry(key: &str, failures: Vec<ValidationFailure>) -> ValidationEntry {
    ValidationEntry::with_failures(key, failures)
}

/// An invalid state holding one field
pub fn single_field_state(key: &str, failures: Vec<ValidationFailure>) -> ValidationState {
    ValidationState::from_parts(false, vec![entry(key, failures)])
}
