//! Switchboard - chat forwarding shim for hosted LLM providers
//!
//! Accepts a single chat message, routes it to OpenAI, Gemini or DeepSeek
//! using each provider's wire format, and returns a uniform
//! `{text, provider, model, raw}` answer.

pub mod chat;
pub mod config;
pub mod docs;
pub mod error;
pub mod provider;
pub mod routes;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::Config;
pub use crate::provider::{ChatProvider, HttpProvider, ProviderKind};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Performs the outbound provider call
    pub provider: Arc<dyn ChatProvider>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        let provider: Arc<dyn ChatProvider> = Arc::new(HttpProvider::new(http_client, &config));

        Ok(Self::with_provider(config, provider))
    }

    /// Create a state around an existing provider implementation
    pub fn with_provider(config: Config, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            provider,
        }
    }
}
