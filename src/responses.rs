use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use models::{FailureCause, ModelStateView, ValidationState};
use services::{Aggregator, ErrorReport};
use std::fmt;

/// Field key for failures that concern the request body as a whole
pub const BODY_KEY: &str = "";

/// Build a 400 Bad Request response whose body is the report
pub fn bad_request(report: &ErrorReport) -> HttpResponse {
    HttpResponse::BadRequest().json(report)
}

/// A rejected request, rendered as a 400 with the report as JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationProblem {
    report: ErrorReport,
}

impl ValidationProblem {
    pub fn new(report: ErrorReport) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &ErrorReport {
        &self.report
    }

    pub fn into_report(self) -> ErrorReport {
        self.report
    }
}

impl From<ErrorReport> for ValidationProblem {
    fn from(report: ErrorReport) -> Self {
        Self::new(report)
    }
}

impl fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed for {} field(s)", self.report.len())
    }
}

impl ResponseError for ValidationProblem {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        bad_request(&self.report)
    }
}

/// `Ok(())` for a valid state, otherwise the problem to return from a handler
pub fn ensure_valid<S>(aggregator: &Aggregator, state: &S) -> Result<(), ValidationProblem>
where
    S: ModelStateView + ?Sized,
{
    if state.is_valid() {
        return Ok(());
    }
    let problem = ValidationProblem::new(aggregator.report(state));
    tracing::info!(fields = problem.report().len(), "rejecting invalid request");
    Err(problem)
}

/// Error handler for `web::JsonConfig`.
///
/// Decoding failures are safe to show, so they are reported as an exposed
/// cause under [`BODY_KEY`], built with the app's `web::Data<Aggregator>`
/// when one is registered.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let aggregator = req
        .app_data::<web::Data<Aggregator>>()
        .map(|data| data.get_ref().clone())
        .unwrap_or_default();

    tracing::debug!(path = %req.path(), error = %err, "request body could not be decoded");

    let mut state = ValidationState::new();
    state.add_exception(BODY_KEY, FailureCause::exposed(err.to_string()));
    ValidationProblem::new(aggregator.report(&state)).into()
}
