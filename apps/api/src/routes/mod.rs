pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::site::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-site", post(handlers::handle_generate_site))
        .with_state(state)
}
