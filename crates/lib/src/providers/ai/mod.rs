pub mod gemini;
pub mod local;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a text-generation provider.
///
/// This trait defines a common interface for sending a single prompt to different
/// Large Language Models (e.g., Gemini, local models) and receiving the complete
/// generated text.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response for the given prompt.
    ///
    /// Implementations issue exactly one request and return the generated text verbatim.
    async fn generate(&self, prompt: &str) -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);
