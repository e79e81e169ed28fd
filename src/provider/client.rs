//! HTTP provider client
//!
//! Performs the single outbound call for a resolved request and normalizes
//! the reply. Decoding never fails: a body that is not JSON is kept as text.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::Instrument;

use super::{
    adapter::{Adapter, OutboundAuth},
    headers::build_provider_headers,
    logging::RequestContext,
    ChatProvider, ProviderKind,
};
use crate::{
    chat::{ProviderResponse, ResolvedRequest},
    config::Config,
    error::{AppError, AppResult},
};

/// Key under which a non-JSON upstream body is preserved
pub const RAW_TEXT_KEY: &str = "raw_text";

/// Decode an upstream body
///
/// Returns `Err` with `{"raw_text": <body>}` when the body is not JSON; the
/// wrapper is still a usable `raw` value.
pub fn decode_body(text: &str) -> Result<Value, Value> {
    serde_json::from_str(text).map_err(|_| json!({ RAW_TEXT_KEY: text }))
}

/// Provider client backed by `reqwest`
pub struct HttpProvider {
    client: reqwest::Client,
    openai: Adapter,
    gemini: Adapter,
    deepseek: Adapter,
}

impl HttpProvider {
    /// Create a new provider client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            openai: Adapter::for_provider(ProviderKind::OpenAi, config),
            gemini: Adapter::for_provider(ProviderKind::Gemini, config),
            deepseek: Adapter::for_provider(ProviderKind::DeepSeek, config),
        }
    }

    /// Adapter used for `kind`
    pub fn adapter(&self, kind: ProviderKind) -> &Adapter {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::DeepSeek => &self.deepseek,
        }
    }

    async fn send(&self, ctx: &RequestContext, request: &ResolvedRequest) -> AppResult<ProviderResponse> {
        let adapter = self.adapter(request.provider);
        let outbound = adapter.build_request(request)?;
        let headers = build_provider_headers(&outbound.auth)?;

        let payload = serde_json::to_vec(&outbound.body).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to serialize request: {}", e))
        })?;
        ctx.log_upstream_request(&outbound.url, payload.len());

        let mut builder = self.client.post(&outbound.url).headers(headers).body(payload);
        if let OutboundAuth::QueryKey(key) = &outbound.auth {
            builder = builder.query(&[("key", key.expose())]);
        }

        let response = builder.send().await.map_err(|e| {
            let err = AppError::from(e);
            ctx.log_connection_error(&err.to_string(), &outbound.url);
            err
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            let err = AppError::from(e);
            ctx.log_connection_error(&err.to_string(), &outbound.url);
            err
        })?;
        ctx.log_upstream_response(status.as_u16(), text.len());

        let raw = decode_body(&text).unwrap_or_else(|wrapped| {
            ctx.log_undecodable_body("body is not JSON");
            wrapped
        });

        if !status.is_success() {
            ctx.log_upstream_error(status.as_u16());
            return Err(AppError::Provider {
                provider: request.provider,
                status: status.as_u16(),
                body: raw,
            });
        }

        let text = adapter.extract_text(&raw);
        ctx.log_request_complete(text.len());

        Ok(ProviderResponse {
            text,
            provider: request.provider,
            model: request.model.clone(),
            raw,
        })
    }
}

#[async_trait]
impl ChatProvider for HttpProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn call(&self, request: &ResolvedRequest) -> AppResult<ProviderResponse> {
        let ctx = RequestContext::new(request);
        ctx.log_request_start(request.system.is_some());

        let span = ctx.create_span();
        self.send(&ctx, request).instrument(span).await
    }
}
