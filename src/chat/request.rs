//! Inbound chat request and its normalization
//!
//! `normalize` turns the raw POST body into a [`ResolvedRequest`]: defaults
//! applied, fields validated, and the API key resolved against configuration.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use utoipa::ToSchema;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    provider::ProviderKind,
};

/// Chat request as sent by the client
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// `openai`, `gemini` or `deepseek`; the configured default when absent
    #[serde(default)]
    #[schema(example = "openai")]
    pub provider: Option<String>,
    /// Provider model; the provider's default model when absent
    #[serde(default)]
    pub model: Option<String>,
    /// Optional system prompt
    #[serde(default)]
    pub system: Option<String>,
    /// User message, must not be blank
    #[serde(default)]
    pub message: Option<String>,
    /// Per-request API key, overrides the configured key
    #[serde(default)]
    pub api_key: Option<String>,
}

/// API key actually used for a call
///
/// `Debug` is redacted so the key never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for the outbound request only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short SHA-256 fingerprint safe to log
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..4])
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self.fingerprint())
    }
}

/// Where the resolved key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Request,
    Configured,
}

impl KeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySource::Request => "request",
            KeySource::Configured => "configured",
        }
    }
}

/// Resolved credential: the key plus its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    pub key: ApiKey,
    pub source: KeySource,
}

/// Validated request handed to the provider layer
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub provider: ProviderKind,
    pub model: String,
    pub system: Option<String>,
    pub message: String,
    pub credential: ResolvedCredential,
}

/// Trim and drop empty strings
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Model names end up in outbound URL paths, so only plain identifier
/// characters are accepted (`gpt-4o`, `gemini-1.5-pro`, `ft:gpt-4o:org:id`)
fn validate_model(model: String) -> AppResult<String> {
    let valid = model
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        && !model.contains("..");
    if valid {
        Ok(model)
    } else {
        Err(AppError::InvalidModel(model))
    }
}

/// Resolve the key for `provider`: explicit override first, then configuration
pub fn resolve_credential(
    provider: ProviderKind,
    explicit: Option<String>,
    config: &Config,
) -> AppResult<ResolvedCredential> {
    if let Some(key) = non_blank(explicit) {
        return Ok(ResolvedCredential {
            key: ApiKey::new(key),
            source: KeySource::Request,
        });
    }

    config
        .default_api_key(provider)
        .map(|key| ResolvedCredential {
            key: ApiKey::new(key),
            source: KeySource::Configured,
        })
        .ok_or(AppError::MissingApiKey(provider))
}

impl ChatRequest {
    /// Apply defaults and validate against `config`
    pub fn resolve(self, config: &Config) -> AppResult<ResolvedRequest> {
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or(AppError::MissingMessage)?;

        let provider = match non_blank(self.provider) {
            Some(name) => name
                .parse::<ProviderKind>()
                .map_err(|e| AppError::UnsupportedProvider(e.0))?,
            None => config.default_provider,
        };

        let model = match non_blank(self.model) {
            Some(model) => validate_model(model)?,
            None => config.provider(provider).default_model.clone(),
        };

        let credential = resolve_credential(provider, self.api_key, config)?;

        Ok(ResolvedRequest {
            provider,
            model,
            system: non_blank(self.system),
            message,
            credential,
        })
    }
}

/// Parse a raw request body and resolve it
///
/// Bodies that are not a JSON object are rejected before any field checks.
pub fn normalize(body: &[u8], config: &Config) -> AppResult<ResolvedRequest> {
    let value: Value = serde_json::from_slice(body).map_err(AppError::InvalidJson)?;
    if !value.is_object() {
        return Err(AppError::InvalidJson(serde::de::Error::custom(
            "expected a JSON object",
        )));
    }

    let request: ChatRequest = serde_json::from_value(value).map_err(AppError::InvalidJson)?;
    request.resolve(config)
}
