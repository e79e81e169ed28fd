//! OpenAPI specification for the Switchboard API

use utoipa::OpenApi;

use crate::{
    chat::{ChatRequest, ProviderResponse},
    error::ErrorResponse,
    provider::ProviderKind,
    routes::providers::{ProviderInfo, ProvidersResponse},
};

/// OpenAPI specification for the Switchboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Switchboard API",
        version = "1.0.0",
        description = "Forwards a chat message to a hosted LLM provider and returns a normalized answer"
    ),
    paths(
        crate::routes::chat::chat,
        crate::routes::providers::list_providers
    ),
    components(
        schemas(
            ProviderKind,
            ChatRequest,
            ProviderResponse,
            ErrorResponse,
            ProviderInfo,
            ProvidersResponse,
        )
    ),
    tags(
        (name = "Chat", description = "Chat forwarding"),
        (name = "Providers", description = "Supported providers")
    )
)]
pub struct ApiDoc;
