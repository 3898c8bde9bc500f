use thiserror::Error;

/// Custom error types for the library.
///
/// These never cross the [`GenerationClient`](crate::GenerationClient) boundary as
/// errors; the client folds them into a [`GenerationOutcome::Failed`](crate::GenerationOutcome)
/// cause. They are returned directly by the providers and by the form-layer conversions.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error (status {status}): {message}")]
    AiApi { status: u16, message: String },
    #[error("AI provider returned no generated text")]
    EmptyResponse,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("AI provider is not configured")]
    MissingAiProvider,
    #[error("Invalid generation configuration: {0}")]
    InvalidConfig(String),
    #[error("Unsupported AI provider: {0}")]
    UnsupportedProvider(String),
    #[error("Prompt is empty")]
    EmptyPrompt,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("JSON error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}
