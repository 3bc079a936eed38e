use std::fmt;

/// Errors raised while building an error report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A required input was not supplied
    InvalidArgument { name: &'static str },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::InvalidArgument { name } =>
                write!(f, "Invalid argument: `{}` must be provided", name),
        }
    }
}

impl std::error::Error for ReportError {}
