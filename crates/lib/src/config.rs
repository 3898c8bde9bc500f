//! # Generation Configuration
//!
//! The process-wide settings needed to reach the generation service. A
//! [`GenerationConfig`] is built once at start-up, handed to the client, and never
//! changed afterwards.

use crate::constants::{gemini_generate_url, DEFAULT_GEMINI_MODEL};
use crate::errors::PromptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of generation backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// The Google Gemini `generateContent` API.
    #[default]
    Gemini,
    /// An OpenAI-compatible chat completions endpoint.
    Local,
}

impl FromStr for ProviderKind {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "local" => Ok(ProviderKind::Local),
            other => Err(PromptError::UnsupportedProvider(other.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Gemini => f.write_str("gemini"),
            ProviderKind::Local => f.write_str("local"),
        }
    }
}

/// Immutable settings for the generation client.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Overrides the endpoint derived from `provider` and `model`.
    #[serde(default)]
    pub api_url: Option<String>,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key: None,
            model: default_model(),
            api_url: None,
        }
    }
}

impl GenerationConfig {
    /// A Gemini configuration for the default model.
    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// The endpoint requests are sent to.
    ///
    /// Gemini endpoints are derived from the model name; local providers require an
    /// explicit `api_url`.
    pub fn endpoint(&self) -> Result<String, PromptError> {
        match (&self.api_url, self.provider) {
            (Some(url), _) => Ok(url.clone()),
            (None, ProviderKind::Gemini) => Ok(gemini_generate_url(&self.model)),
            (None, ProviderKind::Local) => Err(PromptError::InvalidConfig(
                "api_url is required for the local provider".to_string(),
            )),
        }
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}
