pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use catalog::Catalog;
pub use config::{ensure_directories, Config};
pub use error::{AppError, Result};

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self { config, catalog }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index_page))
        .route("/health", get(handlers::health_check))
        .route("/api/songs", get(handlers::songs::list_songs))
        .route("/api/songs/:id", get(handlers::songs::stream_song))
        .route("/api/gesture", post(handlers::gesture::record_gesture))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
