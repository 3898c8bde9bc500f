//! # General Route Handlers
//!
//! The root, health check, and form option catalog endpoints.

use super::AppState;
use axum::{extract::State, Json};
use retina_edu::FormOptions;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "retina-edu server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for the `/options` endpoint.
///
/// Returns every option set the form offers, together with its defaults.
pub async fn options_handler(State(app_state): State<AppState>) -> Json<FormOptions> {
    Json(app_state.form_options.as_ref().clone())
}
