//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic for
//! building it at startup. Everything in it is read-only once built, so handlers
//! share it without locks.

use crate::config::AppConfig;
use retina_edu::{FormOptions, GenerationClient};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The client for the configured generation service.
    pub generation_client: Arc<GenerationClient>,
    /// The option catalog served to the form.
    pub form_options: Arc<FormOptions>,
}

/// Builds the shared application state from the configuration.
///
/// The generation client is created here, once, from the immutable generation
/// settings. A missing API key is a startup error rather than a per-request one.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let generation_client = GenerationClient::from_config(&config.generation)?;
    info!(
        provider = %config.generation.provider,
        model = %config.generation.model,
        "Initialized generation client."
    );

    Ok(AppState {
        config: Arc::new(config),
        generation_client: Arc::new(generation_client),
        form_options: Arc::new(FormOptions::default()),
    })
}
