//! Waitlist signup routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    domain::entities::signup_view::SignupView,
    use_cases::waitlist::{EmailDelivery, SubmissionOutcome, WaitlistUseCases},
};

/// Fields default to empty so a missing one fails our validation with a
/// readable message instead of a deserialization error.
#[derive(Deserialize)]
struct JoinWaitlistPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    source: String,
}

#[derive(Serialize)]
struct JoinWaitlistResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_delivery: Option<EmailDelivery>,
    message: &'static str,
    view: &'static str,
    auto_close_ms: Option<u64>,
}

#[derive(Serialize)]
struct EmailStatusResponse {
    configured: bool,
    mode: &'static str,
}

/// POST /api/waitlist
/// 201 for a new entry, 200 when the email is already on the list.
async fn join_waitlist(
    State(use_cases): State<Arc<WaitlistUseCases>>,
    Json(payload): Json<JoinWaitlistPayload>,
) -> AppResult<impl IntoResponse> {
    let mut view = SignupView::default();
    view.submit();

    let outcome = use_cases
        .submit(&payload.name, &payload.email, &payload.source)
        .await?;
    view.resolve(&outcome);

    let (status_code, status, email_delivery) = match outcome {
        SubmissionOutcome::Accepted { email_delivery } => {
            (StatusCode::CREATED, "accepted", Some(email_delivery))
        }
        SubmissionOutcome::AlreadyExists => (StatusCode::OK, "already_exists", None),
    };

    Ok((
        status_code,
        Json(JoinWaitlistResponse {
            status,
            email_delivery,
            message: outcome.toast(),
            view: view.as_str(),
            auto_close_ms: view.auto_close_delay().map(|d| d.as_millis() as u64),
        }),
    ))
}

/// GET /api/waitlist/email-status
/// Tells the frontend whether welcome emails are really delivered.
async fn email_status(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(EmailStatusResponse {
        configured: app_state.config.email.is_configured(),
        mode: app_state.config.email.mode(),
    })
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", post(join_waitlist))
        .route("/waitlist/email-status", get(email_status))
}
