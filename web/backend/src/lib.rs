pub mod config;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{Router, routing::get};
use chesspath_core::GameDataSource;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router<G: GameDataSource + 'static>(state: Arc<AppState<G>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/targets", get(handlers::list_targets::<G>))
        .route("/api/path", get(handlers::find_path::<G>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
