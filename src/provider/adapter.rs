//! Provider adapters
//!
//! One tagged variant per wire format. Each variant knows how to shape the
//! outbound request and where the answer text lives in the reply.

use serde_json::Value;

use super::chat_completions::ChatCompletionsAdapter;
use super::generate_content::GenerateContentAdapter;
use super::ProviderKind;
use crate::{chat::ApiKey, chat::ResolvedRequest, config::Config, error::AppResult};

/// How the credential is attached to the outbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAuth {
    /// `Authorization: Bearer <key>`
    Bearer(ApiKey),
    /// `?key=<key>` query parameter
    QueryKey(ApiKey),
}

/// Fully shaped outbound call
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub url: String,
    pub auth: OutboundAuth,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Adapter {
    ChatCompletions(ChatCompletionsAdapter),
    GenerateContent(GenerateContentAdapter),
}

impl Adapter {
    /// Pick the adapter for `kind`, using the configured base URL
    pub fn for_provider(kind: ProviderKind, config: &Config) -> Self {
        let api_url = config.provider(kind).api_url.clone();
        match kind {
            ProviderKind::OpenAi => Adapter::ChatCompletions(ChatCompletionsAdapter::new(api_url, None)),
            ProviderKind::DeepSeek => Adapter::ChatCompletions(ChatCompletionsAdapter::new(
                api_url,
                Some(config.deepseek_max_tokens),
            )),
            ProviderKind::Gemini => Adapter::GenerateContent(GenerateContentAdapter::new(api_url)),
        }
    }

    /// Wire format name, as reported by the providers listing
    pub fn wire_format(&self) -> &'static str {
        match self {
            Adapter::ChatCompletions(_) => "chat-completions",
            Adapter::GenerateContent(_) => "generate-content",
        }
    }

    pub fn build_request(&self, request: &ResolvedRequest) -> AppResult<OutboundRequest> {
        match self {
            Adapter::ChatCompletions(adapter) => adapter.build_request(request),
            Adapter::GenerateContent(adapter) => adapter.build_request(request),
        }
    }

    pub fn extract_text(&self, body: &Value) -> String {
        match self {
            Adapter::ChatCompletions(adapter) => adapter.extract_text(body),
            Adapter::GenerateContent(adapter) => adapter.extract_text(body),
        }
    }
}
