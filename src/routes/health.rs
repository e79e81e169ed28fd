//! Health check endpoints
//!
//! - `/health` - Full health check with provider key status
//! - `/health/ready` - Readiness probe
//! - `/health/live` - Liveness probe

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{provider::ProviderKind, AppState};

/// Health status enum
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Whether a provider can serve requests that carry no key of their own
#[derive(Debug, Serialize)]
pub struct ProviderCheck {
    pub provider: ProviderKind,
    pub default_key_configured: bool,
}

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub providers: Vec<ProviderCheck>,
}

/// Simple health response for liveness/readiness
#[derive(Debug, Serialize)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

fn provider_checks(state: &AppState) -> Vec<ProviderCheck> {
    ProviderKind::ALL
        .into_iter()
        .map(|provider| ProviderCheck {
            provider,
            default_key_configured: state.config.default_api_key(provider).is_some(),
        })
        .collect()
}

/// Overall status from provider checks
///
/// All keys configured is healthy, some is degraded, none is unhealthy:
/// requests may still succeed with per-request keys, but nothing works
/// without one.
fn overall_status(checks: &[ProviderCheck]) -> HealthStatus {
    let configured = checks.iter().filter(|c| c.default_key_configured).count();
    if configured == checks.len() {
        HealthStatus::Healthy
    } else if configured > 0 {
        HealthStatus::Degraded
    } else {
        HealthStatus::Unhealthy
    }
}

/// Full health check endpoint
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let providers = provider_checks(&state);
    let status = overall_status(&providers);

    let status_code = match status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        providers,
    };

    (status_code, Json(response))
}

/// Readiness probe endpoint
///
/// Ready once at least one provider has a default key.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SimpleHealthResponse>) {
    if overall_status(&provider_checks(&state)) == HealthStatus::Unhealthy {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(SimpleHealthResponse {
                status: HealthStatus::Unhealthy,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}

/// Liveness probe endpoint
pub async fn liveness_check() -> (StatusCode, Json<SimpleHealthResponse>) {
    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}
