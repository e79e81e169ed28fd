//! Configuration management for Switchboard
//!
//! Configuration is loaded from environment variables once at startup and
//! never mutated afterwards. Handlers receive it through `AppState`.

use anyhow::{anyhow, Context, Result};
use std::env;

use crate::provider::ProviderKind;

/// Default output token cap applied to DeepSeek requests
pub const DEFAULT_DEEPSEEK_MAX_TOKENS: u32 = 2048;

/// Per-provider settings
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Base URL of the provider API (no trailing slash)
    pub api_url: String,
    /// Process-wide default API key, used when a request carries none
    pub api_key: Option<String>,
    /// Model used when a request does not name one
    pub default_model: String,
}

impl ProviderSettings {
    fn from_env(kind: ProviderKind) -> Self {
        let prefix = kind.env_prefix();

        Self {
            api_url: env::var(format!("{prefix}_API_URL"))
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| kind.default_api_url().to_string()),
            api_key: env::var(format!("{prefix}_API_KEY"))
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            default_model: env::var(format!("{prefix}_DEFAULT_MODEL"))
                .unwrap_or_else(|_| kind.default_model().to_string()),
        }
    }

    /// Settings with the built-in URL and model and no default key
    pub fn defaults_for(kind: ProviderKind) -> Self {
        Self {
            api_url: kind.default_api_url().to_string(),
            api_key: None,
            default_model: kind.default_model().to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Provider used when a request omits `provider`
    pub default_provider: ProviderKind,
    /// Upper bound on a single outbound provider call (in seconds)
    pub request_timeout_seconds: u64,

    /// OpenAI settings
    pub openai: ProviderSettings,
    /// Gemini settings
    pub gemini: ProviderSettings,
    /// DeepSeek settings
    pub deepseek: ProviderSettings,
    /// Output token cap sent with every DeepSeek request
    pub deepseek_max_tokens: u32,

    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let default_provider = match env::var("SWITCHBOARD_DEFAULT_PROVIDER") {
            Ok(name) => name
                .parse()
                .map_err(|_| anyhow!("Invalid SWITCHBOARD_DEFAULT_PROVIDER: {name}"))?,
            Err(_) => ProviderKind::OpenAi,
        };

        Ok(Self {
            host: env::var("SWITCHBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SWITCHBOARD_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid SWITCHBOARD_PORT")?,

            default_provider,
            request_timeout_seconds: env::var("SWITCHBOARD_REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .context("Invalid SWITCHBOARD_REQUEST_TIMEOUT_SECONDS")?,

            openai: ProviderSettings::from_env(ProviderKind::OpenAi),
            gemini: ProviderSettings::from_env(ProviderKind::Gemini),
            deepseek: ProviderSettings::from_env(ProviderKind::DeepSeek),
            deepseek_max_tokens: env::var("DEEPSEEK_MAX_TOKENS")
                .unwrap_or_else(|_| DEFAULT_DEEPSEEK_MAX_TOKENS.to_string())
                .parse()
                .context("Invalid DEEPSEEK_MAX_TOKENS")?,

            log_json: env::var("SWITCHBOARD_LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    /// Settings for one provider
    pub fn provider(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::DeepSeek => &self.deepseek,
        }
    }

    /// Process-wide default key for a provider, if one is configured
    pub fn default_api_key(&self, kind: ProviderKind) -> Option<&str> {
        self.provider(kind).api_key.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            default_provider: ProviderKind::OpenAi,
            request_timeout_seconds: 120,
            openai: ProviderSettings::defaults_for(ProviderKind::OpenAi),
            gemini: ProviderSettings::defaults_for(ProviderKind::Gemini),
            deepseek: ProviderSettings::defaults_for(ProviderKind::DeepSeek),
            deepseek_max_tokens: DEFAULT_DEEPSEEK_MAX_TOKENS,
            log_json: false,
        }
    }
}
