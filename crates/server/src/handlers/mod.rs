//! # Route Handlers
//!
//! The Axum handlers for the `retina-edu-server`, grouped by concern.

pub mod general;
pub mod generation_handlers;

pub use general::*;
pub use generation_handlers::*;

use crate::{
    errors::AppError,
    state::AppState,
    types::{ApiResponse, DebugParams},
};
use axum::{extract::Query, Json};
use serde_json::Value;

/// Wraps a handler result, attaching debug information when `?debug=true`.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}
