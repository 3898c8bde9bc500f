//! # Provider Tests
//!
//! These tests run the Gemini and local providers against `wiremock` servers, checking
//! the wire format and how each kind of service failure is surfaced.

mod common;

use crate::common::setup_tracing;
use retina_edu::constants::GENERATION_ERROR_PREFIX;
use retina_edu::providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider};
use retina_edu::providers::factory::create_provider;
use retina_edu::{GenerationClient, GenerationConfig, PromptError, ProviderKind};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEMINI_PATH: &str = "/v1beta/models/gemini-2.0-flash-exp:generateContent";

fn gemini_body(parts: &[&str]) -> serde_json::Value {
    let parts: Vec<_> = parts.iter().map(|t| json!({ "text": t })).collect();
    json!({
        "candidates": [{ "content": { "role": "model", "parts": parts } }]
    })
}

#[tokio::test]
async fn test_gemini_sends_prompt_and_key() {
    // --- 1. Arrange ---
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Explain DME." }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(&["Hello ", "world"])))
        .expect(1)
        .mount(&server)
        .await;

    let provider =
        GeminiProvider::new(format!("{}{GEMINI_PATH}", server.uri()), "test-key".to_string())
            .unwrap();

    // --- 2. Act ---
    let result = provider.generate("Explain DME.").await;

    // --- 3. Assert ---
    assert_eq!(result.unwrap(), "Hello world");
}

#[tokio::test]
async fn test_gemini_error_status_is_reported() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("Resource has been exhausted"),
        )
        .mount(&server)
        .await;

    let provider =
        GeminiProvider::new(format!("{}{GEMINI_PATH}", server.uri()), "k".to_string()).unwrap();

    let err = provider.generate("prompt").await.unwrap_err();
    match err {
        PromptError::AiApi { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("exhausted"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_gemini_without_candidates_is_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(server.uri(), "k".to_string()).unwrap();

    let err = provider.generate("prompt").await.unwrap_err();
    assert!(matches!(err, PromptError::EmptyResponse));
}

#[tokio::test]
async fn test_gemini_malformed_body_is_a_deserialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(server.uri(), "k".to_string()).unwrap();

    let err = provider.generate("prompt").await.unwrap_err();
    assert!(matches!(err, PromptError::AiDeserialization(_)));
}

#[test]
fn test_gemini_requires_a_key() {
    let result = GeminiProvider::new("http://localhost".to_string(), "  ".to_string());
    assert!(matches!(result, Err(PromptError::MissingApiKey)));
}

#[tokio::test]
async fn test_local_provider_uses_chat_completions() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer local-key"))
        .and(body_partial_json(json!({
            "model": "llama3",
            "stream": false,
            "messages": [{ "role": "user", "content": "Explain RD." }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Retinal detachment is..." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = LocalAiProvider::new(
        format!("{}/v1/chat/completions", server.uri()),
        Some("local-key".to_string()),
        Some("llama3".to_string()),
    )
    .unwrap();

    let text = provider.generate("Explain RD.").await.unwrap();
    assert_eq!(text, "Retinal detachment is...");
}

#[test]
fn test_factory_rejects_gemini_without_key() {
    let config = GenerationConfig {
        api_key: None,
        ..GenerationConfig::gemini("")
    };
    assert!(matches!(
        create_provider(&config),
        Err(PromptError::MissingApiKey)
    ));
}

#[test]
fn test_factory_requires_url_for_local_provider() {
    let config = GenerationConfig {
        provider: ProviderKind::Local,
        ..GenerationConfig::gemini("k")
    };
    assert!(matches!(
        create_provider(&config),
        Err(PromptError::InvalidConfig(_))
    ));
}

#[tokio::test]
async fn test_client_from_config_end_to_end() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(&["Material"])))
        .expect(1)
        .mount(&server)
        .await;

    let config =
        GenerationConfig::gemini("k").with_api_url(format!("{}{GEMINI_PATH}", server.uri()));
    let client = GenerationClient::from_config(&config).unwrap();

    let outcome = client.generate_content("prompt").await;
    assert_eq!(outcome.into_text(), "Material");
}

#[tokio::test]
async fn test_unreachable_service_becomes_error_text() {
    setup_tracing();
    // Bind and immediately drop a listener to get a port nothing is listening on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = GenerationConfig::gemini("k").with_api_url(format!("http://127.0.0.1:{port}"));
    let client = GenerationClient::from_config(&config).unwrap();

    let text = client.generate_content("prompt").await.into_text();

    assert!(text.starts_with(GENERATION_ERROR_PREFIX), "got: {text}");
    assert!(text.len() > GENERATION_ERROR_PREFIX.len());
}

#[tokio::test]
async fn test_failure_text_never_contains_the_api_key() {
    setup_tracing();
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api_key = "AIza-retina-edu-secret-key";
    let config = GenerationConfig::gemini(api_key)
        .with_api_url(format!("http://127.0.0.1:{port}{GEMINI_PATH}"));
    let client = GenerationClient::from_config(&config).unwrap();

    let outcome = client.generate_content("prompt").await;
    let download = outcome.to_download();
    let text = outcome.into_text();

    assert!(text.starts_with(GENERATION_ERROR_PREFIX), "got: {text}");
    assert!(!text.contains(api_key), "key leaked into: {text}");
    assert!(!download.body.contains(api_key));
}

#[tokio::test]
async fn test_malformed_body_error_does_not_contain_the_api_key() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api_key = "AIza-retina-edu-secret-key";
    let provider =
        GeminiProvider::new(format!("{}{GEMINI_PATH}", server.uri()), api_key.to_string())
            .unwrap();

    let err = provider.generate("prompt").await.unwrap_err();
    assert!(!err.to_string().contains(api_key), "key leaked into: {err}");
}
