//! Model-state error reports for HTTP responses.
//!
//! A [`ValidationState`] collected while binding a request is turned into an
//! [`ErrorReport`], a case-insensitive map of field name to display messages,
//! and written back as a 400 body. Only messages that are safe for clients
//! end up in the report.

pub mod responses;
pub mod settings;
pub mod telemetry;

pub use graphql;
pub use models::{CauseKind, FailureCause, ModelStateView, ValidationEntry, ValidationFailure, ValidationState};
pub use responses::{bad_request, ensure_valid, json_error_handler, ValidationProblem, BODY_KEY};
pub use services::{Aggregator, ConfiguredMessages, DefaultMessages, EnglishMessages, ErrorReport, FieldKey, ReportError};
pub use settings::{LogFormat, Settings};
