use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum ServiceStatus {
    Ok,
    Degraded,
}

/// Payload for the root-level health probe.
#[derive(Serialize)]
struct HealthResponse {
    status: ServiceStatus,
    service: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Probes the database so a dead pool surfaces as `degraded` rather than
/// as a failing endpoint. Always 200; orchestrators read the body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = tabletop_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy {
            ServiceStatus::Ok
        } else {
            ServiceStatus::Degraded
        },
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Health routes, mounted at the root rather than under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
