use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the text of a cause may be shown to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseKind {
    /// Raised while decoding the request body; the message is written for clients
    Exposed,
    /// Anything else; the message stays server side
    Internal,
}

/// The structured fault behind a validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureCause {
    pub kind: CauseKind,
    pub message: String,
}

impl FailureCause {
    pub fn exposed(message: impl Into<String>) -> Self {
        Self {
            kind: CauseKind::Exposed,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: CauseKind::Internal,
            message: message.into(),
        }
    }

    pub fn is_exposed(&self) -> bool {
        self.kind == CauseKind::Exposed
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// One error recorded against a field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<FailureCause>,
}

impl ValidationFailure {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(cause: FailureCause) -> Self {
        Self {
            message: String::new(),
            cause: Some(cause),
        }
    }

    /// Attach a cause to a failure that already has a plain message
    pub fn caused_by(mut self, cause: FailureCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// The cause, but only when it is tagged safe to expose
    pub fn exposed_cause(&self) -> Option<&FailureCause> {
        self.cause.as_ref().filter(|cause| cause.is_exposed())
    }
}
