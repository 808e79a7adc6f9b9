//! HTTP handlers for monitor endpoints.

use std::time::Instant;

use axum::{extract::State, Json};
use once_cell::sync::Lazy;

use crate::domain::foundation::Timestamp;

use super::dto::{HealthResponse, ServiceInfoResponse};

/// Anchor for the uptime counter. Forced when the router is built so the
/// count starts at server wiring, not at the first health probe.
pub(super) static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

const PLATFORM: &str = "SALOMÃO.AI";

const DESCRIPTION: &str = "Plataforma de IA conversacional que cria sistemas \
automáticos de vendas inteligentes em 60 segundos";

const FEATURES: &[&str] = &[
    "Chat conversacional com IA (Salomão)",
    "Geração automática de sistemas de vendas",
    "Dashboard com métricas e analytics",
    "Sistema de leads e conversão",
];

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct MonitorState {
    pub environment: String,
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/monitor/health - Liveness probe
pub async fn health(State(state): State<MonitorState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Timestamp::now().as_datetime().to_rfc3339(),
        uptime: STARTED_AT.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION"),
        platform: PLATFORM,
        environment: state.environment,
    })
}

/// GET /api/monitor/info - Static service description
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: PLATFORM,
        description: DESCRIPTION,
        version: env!("CARGO_PKG_VERSION"),
        features: FEATURES,
    })
}
