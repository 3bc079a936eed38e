use async_graphql::{EmptyMutation, EmptySubscription, Object, Result, Schema, SimpleObject, Union};
use models::{FailureCause, ValidationFailure, ValidationState};
use services::Aggregator;

use crate::errors::ValidationErrorType;
use crate::utilities::RequiresValidState;

pub type TestSchema = Schema<TestQuery, EmptyMutation, EmptySubscription>;

#[derive(SimpleObject)]
pub struct Accepted {
    pub name: String,
}

#[derive(Union)]
pub enum CheckResult {
    Accepted(Accepted),
    ValidationError(ValidationErrorType),
}

#[derive(Default)]
pub struct TestQuery;

impl RequiresValidState for TestQuery {}

/// Stand-in for a real input pipeline. Empty names are `Required`, whitespace-only
/// names fail without a message, and unparsable ages carry an exposed cause.
fn validate(name: &str, age: &str) -> ValidationState {
    let mut state = ValidationState::new();
    if name.is_empty() {
        state.add_model_error("Name", "Required");
    } else if name.trim().is_empty() {
        state.add_failure("Name", ValidationFailure::default());
    } else {
        state.mark_field("Name");
    }

    if age.parse::<u32>().is_err() {
        state.add_exception("Age", FailureCause::exposed("must be a number"));
    }
    state
}

#[Object]
impl TestQuery {
    async fn check(&self, ctx: &async_graphql::Context<'_>, name: String, age: String) -> CheckResult {
        let state = validate(&name, &age);
        match self.validation_error(ctx, &state) {
            Some(error) => CheckResult::ValidationError(error),
            None => CheckResult::Accepted(Accepted { name }),
        }
    }

    async fn check_strict(&self, ctx: &async_graphql::Context<'_>, name: String, age: String) -> Result<Accepted> {
        let state = validate(&name, &age);
        self.require_valid_state(ctx, &state)?;
        Ok(Accepted { name })
    }
}

pub fn create_test_schema(aggregator: Option<Aggregator>) -> TestSchema {
    let builder = Schema::build(TestQuery, EmptyMutation, EmptySubscription);
    match aggregator {
        Some(aggregator) => builder.data(aggregator).finish(),
        None => builder.finish(),
    }
}
