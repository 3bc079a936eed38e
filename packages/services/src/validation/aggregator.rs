use super::default_messages::{DefaultMessages, EnglishMessages};
use super::error::ReportError;
use super::error_report::ErrorReport;
use models::{ModelStateView, ValidationFailure, ValidationState};
use std::fmt;
use std::sync::Arc;

/// Turns a validation state into an [`ErrorReport`].
///
/// Message selection per failure, first match wins:
/// 1. the cause's message, when the cause is tagged [`models::CauseKind::Exposed`]
/// 2. the failure's own message, when non-empty
/// 3. the provider's `invalid_input` string
///
/// Internal causes are never shown. Entries without failures add no field,
/// and fields whose keys differ only by case are merged under the first
/// spelling seen.
#[derive(Clone)]
pub struct Aggregator {
    messages: Arc<dyn DefaultMessages + Send + Sync>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(EnglishMessages)
    }
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator").finish_non_exhaustive()
    }
}

impl Aggregator {
    pub fn new(messages: impl DefaultMessages + Send + Sync + 'static) -> Self {
        Self {
            messages: Arc::new(messages),
        }
    }

    /// Fails with [`ReportError::InvalidArgument`] when no state is given
    pub fn aggregate<S>(&self, state: Option<&S>) -> Result<ErrorReport, ReportError>
    where
        S: ModelStateView + ?Sized,
    {
        let state = state.ok_or(ReportError::InvalidArgument { name: "state" })?;
        Ok(self.report(state))
    }

    pub fn report<S>(&self, state: &S) -> ErrorReport
    where
        S: ModelStateView + ?Sized,
    {
        let mut report = ErrorReport::new();
        if state.is_valid() {
            return report;
        }

        for entry in state.entries().iter().filter(|entry| entry.has_failures()) {
            let messages = entry
                .failures
                .iter()
                .map(|failure| self.display_message(failure))
                .collect();

            if report.append(&entry.key, messages) {
                tracing::warn!(field = %entry.key, "merged validation errors for keys differing only by case");
            }
        }

        tracing::debug!(
            fields = report.len(),
            messages = report.message_count(),
            "built validation error report"
        );
        report
    }

    fn display_message(&self, failure: &ValidationFailure) -> String {
        if let Some(cause) = failure.exposed_cause() {
            cause.message.clone()
        } else if !failure.message.is_empty() {
            failure.message.clone()
        } else {
            self.messages.invalid_input()
        }
    }
}

impl ErrorReport {
    /// Build a report with the English fallback message
    pub fn try_from_state<S>(state: Option<&S>) -> Result<Self, ReportError>
    where
        S: ModelStateView + ?Sized,
    {
        Aggregator::default().aggregate(state)
    }
}

impl From<&ValidationState> for ErrorReport {
    fn from(state: &ValidationState) -> Self {
        Aggregator::default().report(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::validation::default_messages::{MockDefaultMessages, INVALID_INPUT};
    use models::{FailureCause, ValidationEntry};
    use serde_json::json;

    #[test]
    fn test_valid_state_yields_empty_report() {
        let state = ValidationState::from_parts(
            true,
            vec![
                entry("Name", vec![message("Required")]),
                entry("Age", vec![message("Too low")]),
            ],
        );

        let report = Aggregator::default().aggregate(Some(&state)).unwrap();
        assert!(report.is_empty());
        assert_eq!(serde_json::to_value(&report).unwrap(), json!({}));
    }

    #[test]
    fn test_entries_without_failures_are_skipped() {
        let mut state = ValidationState::new();
        state.mark_field("Email").add_model_error("Name", "Required");

        let report = ErrorReport::from(&state);
        assert!(!report.contains_key("Email"));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_invalid_state_with_only_empty_entries_yields_empty_report() {
        let state = ValidationState::from_parts(false, vec![ValidationEntry::new("Email")]);
        assert!(ErrorReport::from(&state).is_empty());
    }

    #[test]
    fn test_exposed_cause_wins_over_message() {
        let state = single_field_state(
            "Age",
            vec![ValidationFailure::with_message("Age is required")
                .caused_by(FailureCause::exposed("bad format"))],
        );

        let report = ErrorReport::from(&state);
        assert_eq!(report.get("Age").unwrap(), &["bad format".to_string()][..]);
    }

    #[test]
    fn test_exposed_cause_with_empty_message_is_used_verbatim() {
        let state = single_field_state(
            "Age",
            vec![ValidationFailure::with_message("Age is required")
                .caused_by(FailureCause::exposed(""))],
        );

        let report = ErrorReport::from(&state);
        assert_eq!(report.get("Age").unwrap(), &[String::new()][..]);
    }

    #[test]
    fn test_internal_cause_is_never_shown() {
        let state = single_field_state(
            "Age",
            vec![
                ValidationFailure::with_message("Age is required")
                    .caused_by(FailureCause::internal("connection refused")),
                ValidationFailure::with_cause(FailureCause::internal("stack trace here")),
            ],
        );

        let report = ErrorReport::from(&state);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"Age": ["Age is required", INVALID_INPUT]})
        );
    }

    #[test]
    fn test_empty_failure_falls_back_to_default() {
        let state = single_field_state("Name", vec![ValidationFailure::default()]);
        let report = ErrorReport::from(&state);
        assert_eq!(report.get("Name").unwrap(), &[INVALID_INPUT.to_string()][..]);
    }

    #[test]
    fn test_message_order_is_preserved() {
        let state = single_field_state(
            "Password",
            vec![message("m1"), exposed("m2"), message("m3")],
        );

        let report = ErrorReport::from(&state);
        assert_eq!(report.get("Password").unwrap(), &["m1", "m2", "m3"].map(String::from)[..]);
    }

    #[test]
    fn test_missing_state_is_rejected() {
        let result = Aggregator::default().aggregate::<ValidationState>(None);
        assert_eq!(result, Err(ReportError::InvalidArgument { name: "state" }));

        let result = ErrorReport::try_from_state::<ValidationState>(None);
        assert!(matches!(result, Err(ReportError::InvalidArgument { .. })));
    }

    #[test]
    fn test_required_name() {
        let mut state = ValidationState::new();
        state.add_model_error("Name", "Required");

        let report = ErrorReport::try_from_state(Some(&state)).unwrap();
        assert_eq!(serde_json::to_value(&report).unwrap(), json!({"Name": ["Required"]}));
    }

    #[test]
    fn test_exposed_cause_then_default() {
        let state = single_field_state("Age", vec![exposed("must be a number"), ValidationFailure::default()]);

        let report = ErrorReport::from(&state);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"Age": ["must be a number", "The input was not valid."]})
        );
    }

    #[test]
    fn test_keys_differing_by_case_are_merged() {
        let state = ValidationState::from_parts(
            false,
            vec![
                entry("Name", vec![message("Required")]),
                entry("Email", vec![message("Email format is invalid")]),
                entry("name", vec![message("Too short")]),
            ],
        );

        let report = ErrorReport::from(&state);
        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["Name", "Email"]);
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"Name":["Required","Too short"],"Email":["Email format is invalid"]}"#
        );
    }

    #[test]
    fn test_custom_provider_used_only_for_fallback() {
        let mut provider = MockDefaultMessages::new();
        provider
            .expect_invalid_input()
            .times(1)
            .return_const("Ungültige Eingabe.".to_string());

        let state = single_field_state(
            "Name",
            vec![message("Required"), ValidationFailure::default()],
        );

        let report = Aggregator::new(provider).report(&state);
        assert_eq!(
            report.get("name").unwrap(),
            &["Required", "Ungültige Eingabe."].map(String::from)[..]
        );
    }

    #[test]
    fn test_valid_state_never_consults_provider() {
        let mut provider = MockDefaultMessages::new();
        provider.expect_invalid_input().times(0);

        let state = ValidationState::from_parts(true, vec![entry("Name", vec![ValidationFailure::default()])]);
        assert!(Aggregator::new(provider).report(&state).is_empty());
    }

    #[test]
    fn test_input_state_is_untouched() {
        let mut state = ValidationState::new();
        state.add_model_error("Name", "Required").mark_field("Email");
        let before = state.clone();

        let _ = ErrorReport::from(&state);
        assert_eq!(state, before);
    }
}
