pub mod aggregator;
pub mod default_messages;
pub mod error;
pub mod error_report;

// Re-export common types and functions
pub use aggregator::Aggregator;
pub use default_messages::{ConfiguredMessages, DefaultMessages, EnglishMessages, DEFAULT_ERROR_ENV, INVALID_INPUT};
pub use error::ReportError;
pub use error_report::{ErrorReport, FieldKey};
