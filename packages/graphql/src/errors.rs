use async_graphql::{Error, ErrorExtensions, SimpleObject};
use services::ErrorReport;

/// Value of `extensions.code` on validation errors
pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct FieldErrors {
    pub field: String,
    pub messages: Vec<String>,
}

/// Union member for resolvers that return validation problems as data
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct ValidationErrorType {
    pub message: String,
    pub fields: Vec<FieldErrors>,
}

impl From<&ErrorReport> for ValidationErrorType {
    fn from(report: &ErrorReport) -> Self {
        ValidationErrorType {
            message: report_message(report),
            fields: report
                .iter()
                .map(|(field, messages)| FieldErrors {
                    field: field.to_string(),
                    messages: messages.to_vec(),
                })
                .collect(),
        }
    }
}

impl From<ErrorReport> for ValidationErrorType {
    fn from(report: ErrorReport) -> Self {
        ValidationErrorType::from(&report)
    }
}

/// All messages joined with ", ", in field order
pub fn report_message(report: &ErrorReport) -> String {
    report
        .iter()
        .flat_map(|(_, messages)| messages.iter().cloned())
        .collect::<Vec<String>>()
        .join(", ")
}

/// A resolver error whose extensions carry the report:
/// `{"code": "VALIDATION_FAILED", "errors": {"Name": ["Required"]}}`
pub fn report_to_error(report: &ErrorReport) -> Error {
    let errors = async_graphql::to_value(report);
    Error::new(report_message(report)).extend_with(|_, extensions| {
        extensions.set("code", VALIDATION_FAILED);
        match errors {
            Ok(errors) => extensions.set("errors", errors),
            Err(e) => tracing::error!(error = %e, "failed to encode validation report"),
        }
    })
}
