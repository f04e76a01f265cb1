//! HTTP route configuration
//!
//! Wires up handlers into an axum Router.

use super::paths;
use crate::http::handlers::{
    create_pet, current_hits, delete_pet, get_pet, health_check, hit_counter, list_pets,
    reset_catalog, reset_counter, update_pet,
};
use crate::state::ApiState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Create the HTTP router with all routes
pub fn create_router(state: Arc<ApiState>) -> Router {
    info!("Creating HTTP router with all routes");

    // Static segments (/pets/reset) win over captures (/pets/{id}), so the
    // reset route can coexist with the by-id routes.
    let router = Router::new()
        // Health check
        .route(paths::HEALTH, get(health_check))
        // Pet catalog
        .route(paths::PETS, get(list_pets).post(create_pet))
        .route(
            paths::PET_BY_ID,
            get(get_pet).put(update_pet).delete(delete_pet),
        )
        .route(paths::PETS_RESET, post(reset_catalog))
        // Hit counter
        .route(paths::HIT, post(hit_counter))
        .route(paths::HITS, get(current_hits))
        .route(paths::COUNTER_RESET, post(reset_counter));

    // Permissive CORS: the demo services are exercised from browser-driven
    // test harnesses on arbitrary origins
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    router
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
