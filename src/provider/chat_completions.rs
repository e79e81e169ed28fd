//! Chat-completions wire format (OpenAI, DeepSeek)
//!
//! Request: `{model, messages: [{role, content}], max_tokens?}` posted to
//! `{base}/chat/completions` with a bearer token.
//! Response: answer text at `choices[0].message.content`.

use serde::Serialize;
use serde_json::Value;

use super::adapter::{OutboundAuth, OutboundRequest};
use crate::{
    chat::ResolvedRequest,
    error::{AppError, AppResult},
};

/// Message in a chat-completions request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

/// Chat-completions request body
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionsBody {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Adapter for chat-completions style providers
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionsAdapter {
    base_url: String,
    max_tokens: Option<u32>,
}

impl ChatCompletionsAdapter {
    pub fn new(base_url: impl Into<String>, max_tokens: Option<u32>) -> Self {
        Self {
            base_url: base_url.into(),
            max_tokens,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Build the request body: optional system message, then the user message
    pub fn build_body(&self, request: &ResolvedRequest) -> ChatCompletionsBody {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(WireMessage {
                role: "system",
                content: system.clone(),
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: request.message.clone(),
        });

        ChatCompletionsBody {
            model: request.model.clone(),
            messages,
            max_tokens: self.max_tokens,
        }
    }

    pub fn build_request(&self, request: &ResolvedRequest) -> AppResult<OutboundRequest> {
        let body = serde_json::to_value(self.build_body(request)).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to serialize request: {}", e))
        })?;

        Ok(OutboundRequest {
            url: self.endpoint(),
            auth: OutboundAuth::Bearer(request.credential.key.clone()),
            body,
        })
    }

    /// Text of the first choice, empty when absent
    pub fn extract_text(&self, body: &Value) -> String {
        body.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}
