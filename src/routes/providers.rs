//! Provider listing endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    provider::{Adapter, ProviderKind},
    AppState,
};

/// One supported provider
#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderInfo {
    pub provider: ProviderKind,
    pub default_model: String,
    #[schema(example = "chat-completions")]
    pub wire_format: String,
    pub default_key_configured: bool,
}

/// Provider listing response
#[derive(Debug, Serialize, ToSchema)]
pub struct ProvidersResponse {
    pub default_provider: ProviderKind,
    pub providers: Vec<ProviderInfo>,
}

/// List supported providers
///
/// Reports whether a default key exists, never the key itself.
#[utoipa::path(
    get,
    path = "/api/providers",
    tag = "Providers",
    responses((status = 200, description = "Supported providers", body = ProvidersResponse))
)]
pub async fn list_providers(State(state): State<Arc<AppState>>) -> Json<ProvidersResponse> {
    let config = &state.config;

    let providers = ProviderKind::ALL
        .into_iter()
        .map(|provider| ProviderInfo {
            provider,
            default_model: config.provider(provider).default_model.clone(),
            wire_format: Adapter::for_provider(provider, config)
                .wire_format()
                .to_string(),
            default_key_configured: config.default_api_key(provider).is_some(),
        })
        .collect();

    Json(ProvidersResponse {
        default_provider: config.default_provider,
        providers,
    })
}
