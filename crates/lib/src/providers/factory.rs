//! # AI Provider Factory
//!
//! Creates the provider described by a [`GenerationConfig`]. Any consumer (server,
//! CLI, tests) goes through this one function so that endpoint derivation and key
//! handling stay consistent.

use crate::{
    config::{GenerationConfig, ProviderKind},
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use tracing::info;

/// Creates an AI provider instance from the generation configuration.
pub fn create_provider(config: &GenerationConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let api_url = config.endpoint()?;
    info!(
        provider = %config.provider,
        model = %config.model,
        "Configuring AI provider with URL: {}",
        api_url
    );

    let provider: Box<dyn AiProvider> = match config.provider {
        ProviderKind::Gemini => {
            let api_key = config
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty())
                .ok_or(PromptError::MissingApiKey)?;
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        ProviderKind::Local => Box::new(LocalAiProvider::new(
            api_url,
            config.api_key.clone(),
            Some(config.model.clone()),
        )?),
    };

    Ok(provider)
}
