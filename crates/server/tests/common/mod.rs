//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port, with its generation client
//! pointed at a `wiremock` server standing in for the Gemini API.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use reqwest::Client;
use retina_edu::GenerationConfig;
use retina_edu_server::{config::AppConfig, router::create_router, state::build_app_state};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};
use wiremock::MockServer;

/// The path the mocked Gemini endpoint is mounted at.
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.0-flash-exp:generateContent";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start().await;
        let config = AppConfig {
            port: 0,
            generation: GenerationConfig::gemini("test-key")
                .with_api_url(format!("{}{GEMINI_PATH}", mock_server.uri())),
        };
        let app_state = build_app_state(config).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked,
            // so we ignore the result of send.
            let _ = tx.send(());
        }
    }
}

/// A Gemini `generateContent` response carrying `text`.
pub fn gemini_response(text: &str) -> Value {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
}

/// The form payload of the worked example.
pub fn hindi_form() -> Value {
    json!({
        "age": 50,
        "language": "Hindi",
        "education": "Secondary",
        "diagnosis": "Diabetic Retinopathy",
        "va_re": "6/9",
        "va_le": "6/6",
        "oct_findings": "mild edema",
        "sections": ["Disease Overview", "Treatment Options"]
    })
}
