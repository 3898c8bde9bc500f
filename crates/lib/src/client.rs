//! # Generation Client
//!
//! Wraps the single call to the external text-generation service. Whatever happens
//! during that call, the caller receives a [`GenerationOutcome`]: either the generated
//! text or a failure carrying a human-readable cause. Errors never escape this boundary.

use crate::{
    config::GenerationConfig,
    constants::{DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE, GENERATION_ERROR_PREFIX},
    errors::PromptError,
    prompts::education::build_education_prompt,
    providers::{ai::AiProvider, factory::create_provider},
    types::{ClinicalFindings, Download, PatientDemographics},
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// Why a generation request failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationFailure {
    pub cause: String,
}

impl From<PromptError> for GenerationFailure {
    fn from(err: PromptError) -> Self {
        let cause = err.to_string();
        let cause = if cause.trim().is_empty() {
            format!("{err:?}")
        } else {
            cause
        };
        Self { cause }
    }
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{GENERATION_ERROR_PREFIX}{}", self.cause)
    }
}

/// The result of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// The generated text, exactly as returned by the service.
    Generated { text: String },
    /// The request failed.
    Failed(GenerationFailure),
}

impl GenerationOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, GenerationOutcome::Generated { .. })
    }

    /// The text to show the user: the generated content, or
    /// `Error generating content: <cause>`.
    pub fn into_text(self) -> String {
        match self {
            GenerationOutcome::Generated { text } => text,
            GenerationOutcome::Failed(failure) => failure.to_string(),
        }
    }

    /// The downloadable file for this outcome. Its body is the displayed text.
    pub fn to_download(&self) -> Download {
        Download {
            file_name: DOWNLOAD_FILE_NAME,
            mime_type: DOWNLOAD_MIME_TYPE,
            body: self.to_string(),
        }
    }
}

impl fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationOutcome::Generated { text } => f.write_str(text),
            GenerationOutcome::Failed(failure) => write!(f, "{failure}"),
        }
    }
}

impl From<Result<String, PromptError>> for GenerationOutcome {
    fn from(result: Result<String, PromptError>) -> Self {
        match result {
            Ok(text) => GenerationOutcome::Generated { text },
            Err(err) => GenerationOutcome::Failed(err.into()),
        }
    }
}

/// A generated piece of education material together with the prompt that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedMaterial {
    pub prompt: String,
    pub outcome: GenerationOutcome,
}

/// A client that submits prompts to a configured AI provider.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    pub ai_provider: Box<dyn AiProvider>,
}

/// A builder for creating `GenerationClient` instances.
#[derive(Default)]
pub struct GenerationClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl GenerationClientBuilder {
    /// Creates a new `GenerationClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `GenerationClient`.
    ///
    /// Fails with `PromptError::MissingAiProvider` if no provider was set.
    pub fn build(self) -> Result<GenerationClient, PromptError> {
        let ai_provider = self.ai_provider.ok_or(PromptError::MissingAiProvider)?;
        Ok(GenerationClient { ai_provider })
    }
}

impl GenerationClient {
    /// Creates a client for the provider described by `config`.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, PromptError> {
        GenerationClientBuilder::new()
            .ai_provider(create_provider(config)?)
            .build()
    }

    /// Submits `prompt` to the provider and waits for the complete response.
    ///
    /// Exactly one request is made. There is no retry and no timeout beyond the HTTP
    /// client's own defaults.
    pub async fn generate_content(&self, prompt: &str) -> GenerationOutcome {
        if prompt.trim().is_empty() {
            warn!("[generate_content] Refusing to send an empty prompt.");
            return GenerationOutcome::Failed(PromptError::EmptyPrompt.into());
        }

        let outcome = GenerationOutcome::from(self.ai_provider.generate(prompt).await);
        match &outcome {
            GenerationOutcome::Generated { text } => {
                info!(chars = text.len(), "[generate_content] Content generated.")
            }
            GenerationOutcome::Failed(failure) => {
                warn!(cause = %failure.cause, "[generate_content] Generation failed.")
            }
        }
        outcome
    }

    /// Builds the education prompt for the given inputs and generates the material.
    pub async fn generate_material(
        &self,
        demographics: &PatientDemographics,
        clinical: &ClinicalFindings,
    ) -> GeneratedMaterial {
        info!(
            diagnosis = %clinical.diagnosis,
            language = %demographics.language,
            sections = clinical.sections.len(),
            "[generate_material] Building education prompt."
        );
        let prompt = build_education_prompt(demographics, clinical);
        debug!(prompt = %prompt, "--> Rendered education prompt");

        let outcome = self.generate_content(&prompt).await;
        GeneratedMaterial { prompt, outcome }
    }
}
