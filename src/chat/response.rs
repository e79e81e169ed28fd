//! Uniform chat response
//!
//! Every provider's reply is flattened into the same four fields.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::provider::ProviderKind;

/// Normalized provider answer returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProviderResponse {
    /// Extracted answer text, empty when the reply carried none
    pub text: String,
    /// Provider that answered
    pub provider: ProviderKind,
    /// Model the request was sent to
    pub model: String,
    /// Provider body exactly as decoded
    #[schema(value_type = Object)]
    pub raw: Value,
}
