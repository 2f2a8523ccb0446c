use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id;

use super::handlers;
use super::AppState;

/// Creates the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::homepage))
        .route("/knnrecomendation", get(handlers::recommendation_form))
        .route("/resultados", post(handlers::results))
        .route("/health", get(handlers::health_check))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
