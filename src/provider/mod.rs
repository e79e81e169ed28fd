//! Provider layer
//!
//! Routes a normalized chat request to one hosted LLM provider and turns the
//! provider's reply into a uniform [`ProviderResponse`](crate::chat::ProviderResponse).

pub mod adapter;
pub mod chat_completions;
pub mod client;
pub mod generate_content;
pub mod headers;
pub mod logging;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::chat::{ProviderResponse, ResolvedRequest};
use crate::error::AppResult;

pub use adapter::{Adapter, OutboundAuth, OutboundRequest};
pub use client::HttpProvider;

/// Supported upstream providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAi,
    Gemini,
    #[serde(rename = "deepseek")]
    DeepSeek,
}

impl ProviderKind {
    /// Every supported provider, in listing order
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
        ProviderKind::DeepSeek,
    ];

    /// Wire name used in requests, responses and metrics labels
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::DeepSeek => "deepseek",
        }
    }

    /// Built-in model used when neither the request nor configuration names one
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::Gemini => "gemini-1.5-flash",
            ProviderKind::DeepSeek => "deepseek-chat",
        }
    }

    /// Built-in API base URL
    pub fn default_api_url(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com/v1",
            ProviderKind::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            ProviderKind::DeepSeek => "https://api.deepseek.com",
        }
    }

    /// Prefix of this provider's environment variables
    pub(crate) fn env_prefix(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI",
            ProviderKind::Gemini => "GEMINI",
            ProviderKind::DeepSeek => "DEEPSEEK",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a provider name does not match any supported provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            "deepseek" => Ok(ProviderKind::DeepSeek),
            _ => Err(UnknownProvider(s.trim().to_string())),
        }
    }
}

/// Trait for the component that performs the outbound provider call
///
/// The production implementation is [`HttpProvider`]. Handlers only see this
/// trait so tests can swap in a recording double.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Name for logging
    fn name(&self) -> &'static str;

    /// Forward one resolved request and normalize the reply
    ///
    /// Fails with [`AppError::Provider`](crate::error::AppError::Provider) when
    /// the provider answers with a non-success status.
    async fn call(&self, request: &ResolvedRequest) -> AppResult<ProviderResponse>;
}
