use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub mod docs;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Directory whose files are served verbatim at the document root.
pub const PUBLIC_DIR: &str = "public";

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/news", get(handlers::list_news))
        .route("/news/random", get(handlers::random_news))
        .route("/news/by-id/:id", get(handlers::news_by_id))
        .route("/news/by-date/:date", get(handlers::news_by_date))
        .route("/news/by-category/:category", get(handlers::news_by_category))
        .route("/news/by-author/:author", get(handlers::news_by_author))
        .route(
            "/news/by-author-partial/:partial",
            get(handlers::news_by_author_partial),
        )
        .route("/api-docs/openapi.json", get(handlers::api_docs))
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use nq_core::{Article, Dataset, Error, Result};
}
