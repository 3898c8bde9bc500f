use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

/// A custom error type for the server application.
///
/// Generation failures are not errors at this level: they reach the client as
/// content. The only request a handler rejects is one whose form cannot be read.
#[derive(Debug)]
pub enum AppError {
    /// The submitted form could not be turned into patient and clinical inputs.
    InvalidForm(serde_json::Error),
}

/// Conversion from a form deserialization failure to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidForm(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::InvalidForm(err) => {
                warn!("Rejected form payload: {}", err);
                (StatusCode::BAD_REQUEST, format!("Invalid form input: {err}"))
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
