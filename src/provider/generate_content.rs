//! Generate-content wire format (Gemini)
//!
//! Request: `{contents: [{role, parts: [{text}]}]}` posted to
//! `{base}/models/{model}:generateContent?key=...`.
//! Response: the text parts of `candidates[0].content`, concatenated.

use serde::Serialize;
use serde_json::Value;

use super::adapter::{OutboundAuth, OutboundRequest};
use crate::{
    chat::ResolvedRequest,
    error::{AppError, AppResult},
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Part {
    pub text: String,
}

/// One turn of a generate-content request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

/// Generate-content request body
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerateContentBody {
    pub contents: Vec<Content>,
}

/// Adapter for generate-content style providers
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateContentAdapter {
    base_url: String,
}

impl GenerateContentAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Model-scoped endpoint; the key travels separately as a query parameter
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Build the request body; a system prompt becomes a leading system-role turn
    pub fn build_body(&self, request: &ResolvedRequest) -> GenerateContentBody {
        let mut contents = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            contents.push(Content {
                role: "system",
                parts: vec![Part {
                    text: system.clone(),
                }],
            });
        }
        contents.push(Content {
            role: "user",
            parts: vec![Part {
                text: request.message.clone(),
            }],
        });

        GenerateContentBody { contents }
    }

    pub fn build_request(&self, request: &ResolvedRequest) -> AppResult<OutboundRequest> {
        let body = serde_json::to_value(self.build_body(request)).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to serialize request: {}", e))
        })?;

        Ok(OutboundRequest {
            url: self.endpoint(&request.model),
            auth: OutboundAuth::QueryKey(request.credential.key.clone()),
            body,
        })
    }

    /// All text parts of the first candidate, joined without separator
    pub fn extract_text(&self, body: &Value) -> String {
        body.pointer("/candidates/0/content/parts")
            .and_then(Value::as_array)
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part.get("text").and_then(Value::as_str))
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
