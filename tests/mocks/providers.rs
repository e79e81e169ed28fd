//! Mock LLM providers for testing
//!
//! Mounted prefixes:
//! - `/openai/v1/chat/completions` - OpenAI chat completions
//! - `/deepseek/chat/completions` - DeepSeek chat completions
//! - `/gemini/v1beta/models/{model}:generateContent` - Gemini generate content

use serde_json::{json, Value};
use switchboard::{config::ProviderSettings, Config, ProviderKind};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const OPENAI_PATH: &str = "/openai/v1/chat/completions";
pub const DEEPSEEK_PATH: &str = "/deepseek/chat/completions";

/// Path of the Gemini generate endpoint for `model`
pub fn gemini_path(model: &str) -> String {
    format!("/gemini/v1beta/models/{}:generateContent", model)
}

/// Mock provider server wrapper
pub struct MockProviders {
    server: MockServer,
}

impl MockProviders {
    /// Start a new mock provider server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Config whose provider URLs all point at this server
    pub fn config(&self) -> Config {
        let settings = |kind: ProviderKind, prefix: &str, key: &str| ProviderSettings {
            api_url: format!("{}{}", self.uri(), prefix),
            api_key: Some(key.to_string()),
            default_model: kind.default_model().to_string(),
        };

        Config {
            openai: settings(ProviderKind::OpenAi, "/openai/v1", "test-openai-key"),
            gemini: settings(ProviderKind::Gemini, "/gemini/v1beta", "test-gemini-key"),
            deepseek: settings(ProviderKind::DeepSeek, "/deepseek", "test-deepseek-key"),
            request_timeout_seconds: 5,
            ..Config::default()
        }
    }

    /// Requests the server has received so far
    pub async fn received(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    // =========================================================================
    // Chat completions (OpenAI, DeepSeek)
    // =========================================================================

    /// Chat-completions success body with a single choice
    pub fn chat_completion_body(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "created": 1706745600,
            "model": "gpt-4o-mini",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        })
    }

    /// Mock a successful chat completion at `endpoint` for `api_key`
    pub async fn mock_chat_completion_success(&self, endpoint: &str, api_key: &str, content: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(header("Authorization", format!("Bearer {}", api_key).as_str()))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(Self::chat_completion_body(content)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock 401 Unauthorized for chat completions
    pub async fn mock_chat_completion_unauthorized(&self, endpoint: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            })))
            .mount(&self.server)
            .await;
    }

    // =========================================================================
    // Generate content (Gemini)
    // =========================================================================

    /// Mock a successful generate-content reply whose first candidate has `parts`
    pub async fn mock_generate_content_success(&self, model: &str, api_key: &str, parts: &[&str]) {
        let parts: Vec<Value> = parts.iter().map(|text| json!({ "text": text })).collect();

        Mock::given(method("POST"))
            .and(path(gemini_path(model)))
            .and(query_param("key", api_key))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    {
                        "content": {"role": "model", "parts": parts},
                        "finishReason": "STOP"
                    }
                ],
                "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 2}
            })))
            .mount(&self.server)
            .await;
    }

    // =========================================================================
    // Raw responses
    // =========================================================================

    /// Mock an arbitrary status and plain-text body at `endpoint`
    pub async fn mock_raw(&self, endpoint: &str, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_string(body)
                    .insert_header("Content-Type", "text/html"),
            )
            .mount(&self.server)
            .await;
    }
}
