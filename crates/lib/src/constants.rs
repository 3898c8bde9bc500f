//! # Shared Constants
//!
//! Values shared between the library and the server and CLI front ends.

/// The model used when no other model is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// The base URL of the Google Generative Language API.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// The prefix placed before the cause of a failed generation.
pub const GENERATION_ERROR_PREFIX: &str = "Error generating content: ";

/// The file name offered when the material is downloaded.
pub const DOWNLOAD_FILE_NAME: &str = "patient_education_downloaded.txt";

/// The MIME type of the downloaded material.
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

/// Builds the `generateContent` endpoint URL for a Gemini model.
pub fn gemini_generate_url(model: &str) -> String {
    format!("{GEMINI_API_BASE_URL}/{model}:generateContent")
}
