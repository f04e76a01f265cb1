//! Health and monitoring handlers

use crate::constants::{status, SERVICE_NAME};
use crate::state::ApiState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service identifier - always "pethub"
    pub service: String,
    pub status: String,
    pub uptime_seconds: u64,
    /// Number of pets currently in the catalog
    pub pets_total: u64,
}

/// Health check endpoint for monitoring and load balancer probes.
///
/// Returns server health status including uptime and catalog size.
/// Use this endpoint for liveness/readiness checks.
pub async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let uptime = state.uptime_seconds();

    // Health stays up even when the catalog cannot report its size
    let pets_total = match state.context.catalog_service.count().await {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, "Failed to count pets for health endpoint");
            0
        }
    };

    Json(HealthResponse {
        service: SERVICE_NAME.to_string(),
        status: status::OK.to_string(),
        uptime_seconds: uptime,
        pets_total,
    })
}
