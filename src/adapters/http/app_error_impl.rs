use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const RETRY_MESSAGE: &str = "An error occurred. Please try again.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput(reason) => {
                // User mistakes are expected traffic, not failures.
                tracing::debug!(reason = %reason, "Signup rejected");
                let body = serde_json::json!({
                    "code": ErrorCode::InvalidInput.as_str(),
                    "message": reason.message(),
                    "toast": reason.toast(),
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            other => {
                // Log the error before it gets converted into a status response.
                tracing::error!(error = ?other, "Request failed");
                match other {
                    AppError::StoreMissing => error_resp(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::DatabaseError,
                        "Database table not found. Please contact support.",
                    ),
                    AppError::Database(_) => error_resp(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::DatabaseError,
                        RETRY_MESSAGE,
                    ),
                    AppError::Duplicate => error_resp(
                        StatusCode::CONFLICT,
                        ErrorCode::Duplicate,
                        "A record with this value already exists",
                    ),
                    AppError::Internal(_) | AppError::InvalidInput(_) => error_resp(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::InternalError,
                        RETRY_MESSAGE,
                    ),
                }
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({ "code": code.as_str(), "message": message });
    (status, Json(body)).into_response()
}
