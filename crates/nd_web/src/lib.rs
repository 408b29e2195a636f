use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod render;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::front_page))
        .route("/api/news", get(handlers::proxy_news))
        .route("/healthz", get(handlers::health))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use nd_core::{Article, Error, Result};
    pub use crate::AppState;
}
