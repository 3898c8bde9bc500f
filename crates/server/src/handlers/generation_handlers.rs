//! # Generation Route Handlers
//!
//! This module contains the handlers that turn a submitted form into patient
//! education material. A failed generation is still a successful HTTP exchange: the
//! error text is returned, and offered for download, in place of the material.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::types::{EducationRequest, GenerationResponse};
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use retina_edu::GeneratedMaterial;
use serde_json::{json, Value};
use tracing::info;

/// Parses the form payload and runs the generation pipeline.
async fn generate_from_payload(
    app_state: &AppState,
    payload: Value,
) -> Result<GeneratedMaterial, AppError> {
    let request: EducationRequest = serde_json::from_value(payload)?;
    let (demographics, clinical) = request.into_parts();
    info!(
        diagnosis = %clinical.diagnosis,
        language = %demographics.language,
        "Received education material request."
    );

    Ok(app_state
        .generation_client
        .generate_material(&demographics, &clinical)
        .await)
}

/// The handler for the `/generate` endpoint.
pub async fn generate_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<GenerationResponse>>, AppError> {
    let material = generate_from_payload(&app_state, payload).await?;
    let download = material.outcome.to_download();

    let outcome_kind = if material.outcome.is_generated() {
        "generated"
    } else {
        "failed"
    };
    let debug_info = json!({
        "prompt": material.prompt,
        "outcome": outcome_kind,
        "model": app_state.config.generation.model,
    });

    Ok(wrap_response(
        GenerationResponse {
            text: download.body,
            file_name: download.file_name.to_string(),
        },
        debug_params,
        Some(debug_info),
    ))
}

/// The handler for the `/generate/download` endpoint.
///
/// Responds with the material as a plain-text attachment.
pub async fn download_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let material = generate_from_payload(&app_state, payload).await?;
    let download = material.outcome.to_download();

    let headers = [
        (
            header::CONTENT_TYPE,
            format!("{}; charset=utf-8", download.mime_type),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download.file_name),
        ),
    ];
    Ok((headers, download.body))
}
