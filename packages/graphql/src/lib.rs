pub mod errors;
pub mod utilities;

pub use errors::{report_message, report_to_error, FieldErrors, ValidationErrorType, VALIDATION_FAILED};
pub use utilities::RequiresValidState;

#[cfg(test)]
pub mod test_helpers;
