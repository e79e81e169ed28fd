//! Chat request/response types
//!
//! The inbound request shape, its normalization, and the uniform response.

pub mod request;
pub mod response;

pub use request::{
    normalize, resolve_credential, ApiKey, ChatRequest, KeySource, ResolvedCredential,
    ResolvedRequest,
};
pub use response::ProviderResponse;
