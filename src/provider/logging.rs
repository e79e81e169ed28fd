//! Structured logging for provider calls
//!
//! Each outbound call gets a short correlation ID so its start, upstream
//! exchange and outcome can be tied together in the logs.

use std::time::Instant;
use tracing::{debug, error, info, warn, Span};
use uuid::Uuid;

use crate::chat::{KeySource, ResolvedRequest};
use crate::provider::ProviderKind;

/// Context for tracking one provider call
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this call (for log correlation)
    pub trace_id: String,
    /// When the call started
    pub start_time: Instant,
    /// Provider handling this call
    pub provider: ProviderKind,
    /// Model being used
    pub model: String,
    /// Where the API key came from
    pub key_source: KeySource,
    /// Fingerprint of the API key, never the key itself
    pub key_fingerprint: String,
}

impl RequestContext {
    /// Create a context for a resolved request
    pub fn new(request: &ResolvedRequest) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(),
            start_time: Instant::now(),
            provider: request.provider,
            model: request.model.clone(),
            key_source: request.credential.source,
            key_fingerprint: request.credential.key.fingerprint(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log call initiation
    pub fn log_request_start(&self, has_system: bool) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = %self.model,
            key_source = %self.key_source.as_str(),
            key_fingerprint = %self.key_fingerprint,
            has_system = %has_system,
            "Provider call started"
        );
    }

    /// Log request being sent to upstream
    pub fn log_upstream_request(&self, url: &str, body_size: usize) {
        debug!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            url = %url,
            body_size = %body_size,
            elapsed_ms = %self.elapsed_ms(),
            "Sending request to upstream"
        );
    }

    /// Log response received from upstream
    pub fn log_upstream_response(&self, status: u16, body_size: usize) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            status = %status,
            body_size = %body_size,
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
    }

    /// Upstream body was not JSON and was wrapped as raw text
    pub fn log_undecodable_body(&self, error: &str) {
        warn!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            error = %error,
            "Upstream body is not valid JSON, keeping raw text"
        );
    }

    /// Log successful completion
    pub fn log_request_complete(&self, text_len: usize) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = %self.model,
            text_len = %text_len,
            elapsed_ms = %self.elapsed_ms(),
            "Provider call completed"
        );
    }

    /// Log a non-success status from the provider
    pub fn log_upstream_error(&self, status: u16) {
        warn!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = %self.model,
            status = %status,
            elapsed_ms = %self.elapsed_ms(),
            "Provider returned error status"
        );
    }

    /// Log connection error
    pub fn log_connection_error(&self, error: &str, url: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            url = %url,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Connection to upstream failed"
        );
    }

    /// Create a tracing span for this call
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "provider_call",
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = %self.model,
        )
    }
}
