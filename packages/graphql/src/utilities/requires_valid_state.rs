use crate::errors::{report_to_error, ValidationErrorType};
use async_graphql::{Context, Result};
use models::ModelStateView;
use services::Aggregator;

fn aggregator(ctx: &Context<'_>) -> Aggregator {
    ctx.data_opt::<Aggregator>().cloned().unwrap_or_default()
}

/// Resolver helpers that turn a failed validation state into a client response.
///
/// The schema's [`Aggregator`] is used when one was registered with `.data(..)`,
/// otherwise the English fallback message applies.
pub trait RequiresValidState {
    /// Errors with a `VALIDATION_FAILED` resolver error when the state is invalid
    fn require_valid_state<S>(&self, ctx: &Context<'_>, state: &S) -> Result<()>
    where
        S: ModelStateView + ?Sized,
    {
        if state.is_valid() {
            return Ok(());
        }

        let report = aggregator(ctx).report(state);
        tracing::info!(fields = report.len(), "rejecting invalid input");
        Err(report_to_error(&report))
    }

    /// The union-friendly form, `None` when the state is valid
    fn validation_error<S>(&self, ctx: &Context<'_>, state: &S) -> Option<ValidationErrorType>
    where
        S: ModelStateView + ?Sized,
    {
        if state.is_valid() {
            return None;
        }
        Some(ValidationErrorType::from(aggregator(ctx).report(state)))
    }
}
