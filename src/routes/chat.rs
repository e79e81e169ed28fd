//! Chat endpoint
//!
//! `POST /api/chat` normalizes the body, forwards it to the selected provider
//! and returns `{text, provider, model, raw}`.

use std::sync::Arc;
use std::time::Instant;

use axum::{body::Bytes, extract::State, http::Method, Json};
use tracing::{info, warn};

use crate::{
    chat::{normalize, ProviderResponse},
    error::{AppError, ErrorResponse},
    routes::metrics::{record_request, record_upstream_error},
    AppState,
};

/// Handle chat requests
///
/// Exactly one outbound call is made per valid request; invalid requests are
/// rejected before any provider is contacted.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "Chat",
    request_body = crate::chat::ChatRequest,
    responses(
        (status = 200, description = "Provider answered", body = ProviderResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Provider or internal failure", body = ErrorResponse)
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ProviderResponse>, AppError> {
    let start_time = Instant::now();

    let request = match normalize(&body, &state.config) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected chat request");
            record_request("none", e.label(), start_time.elapsed().as_secs_f64());
            return Err(e);
        }
    };

    let provider = request.provider;
    info!(
        provider = %provider,
        model = %request.model,
        message_len = %request.message.len(),
        backend = %state.provider.name(),
        "Processing chat request"
    );

    let result = state.provider.call(&request).await;
    let duration = start_time.elapsed().as_secs_f64();

    match result {
        Ok(response) => {
            record_request(provider.as_str(), "success", duration);
            info!(
                provider = %provider,
                duration_ms = %format!("{:.2}", duration * 1000.0),
                "Chat request completed"
            );
            Ok(Json(response))
        }
        Err(e) => {
            if let AppError::Provider { status, .. } = &e {
                record_upstream_error(provider.as_str(), *status);
            }
            record_request(provider.as_str(), e.label(), duration);
            Err(e)
        }
    }
}

/// Any method other than POST (OPTIONS is answered by the CORS layer)
pub async fn method_not_allowed(method: Method) -> AppError {
    warn!(method = %method, "Method not allowed on chat endpoint");
    AppError::MethodNotAllowed
}
