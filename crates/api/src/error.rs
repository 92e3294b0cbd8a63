//! Mapping of application errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use laundry_shared::AppError;
use serde_json::json;
use tracing::error;

/// Builds the `{"error", "message"}` response for `err`.
///
/// Server-side failures are logged here with their detail and answered with
/// a generic message.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %err, "Request failed");
    }

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.public_message(),
        })),
    )
        .into_response()
}

/// Converts any error that maps to [`AppError`] into a response.
pub fn into_response<E: Into<AppError>>(err: E) -> Response {
    error_response(&err.into())
}
