//! Hit counter handlers

use crate::http::error::HttpError;
use crate::state::ApiState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Counter value response: `{"hits": N}`
#[derive(Debug, Serialize, Deserialize)]
pub struct HitsResponse {
    pub hits: u64,
}

/// Record a hit and return the new count.
pub async fn hit_counter(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HitsResponse>, HttpError> {
    let hits = state.context.counter_service.hit().await?;
    info!("REST: hit_counter (hits={})", hits);

    Ok(Json(HitsResponse { hits }))
}

/// Read the current count without mutating it.
pub async fn current_hits(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HitsResponse>, HttpError> {
    let hits = state.context.counter_service.current().await?;

    Ok(Json(HitsResponse { hits }))
}

/// Reset the counter to zero.
///
/// Always returns `{"hits": 0}`.
pub async fn reset_counter(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HitsResponse>, HttpError> {
    info!("REST: reset_counter");
    let hits = state.context.counter_service.reset().await?;

    Ok(Json(HitsResponse { hits }))
}
