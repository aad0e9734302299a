use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use nq_core::Article;

use crate::{docs, AppState};

/// Misses are plain text, not JSON. The asymmetry with success bodies is
/// part of the compatibility contract.
fn not_found(message: &'static str) -> Response {
    tracing::debug!("miss: {}", message);
    (StatusCode::NOT_FOUND, message).into_response()
}

fn matches_or_404(matches: Vec<&Article>, message: &'static str) -> Response {
    if matches.is_empty() {
        not_found(message)
    } else {
        Json(matches.into_iter().cloned().collect::<Vec<_>>()).into_response()
    }
}

pub async fn list_news(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dataset.articles().to_vec())
}

pub async fn random_news(State(state): State<Arc<AppState>>) -> Response {
    match state.dataset.random() {
        Some(article) => Json(article.clone()).into_response(),
        None => not_found("No articles loaded"),
    }
}

pub async fn news_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    // A non-numeric id fails the range check the same way an out-of-range
    // one does; it must never surface as a server error.
    let id = id.parse::<i64>().unwrap_or(0);
    match state.dataset.by_id(id) {
        Some(article) => Json(article.clone()).into_response(),
        None => not_found("Article not found"),
    }
}

pub async fn news_by_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Response {
    matches_or_404(
        state.dataset.by_date(&date),
        "No articles found for this date",
    )
}

pub async fn news_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Response {
    matches_or_404(
        state.dataset.by_category(&category),
        "No articles found for this category",
    )
}

/// Exact, case-sensitive author lookup. The path segment arrives already
/// percent-decoded.
pub async fn news_by_author(
    State(state): State<Arc<AppState>>,
    Path(author): Path<String>,
) -> Response {
    matches_or_404(
        state.dataset.by_author(&author),
        "No articles found for this author",
    )
}

/// Case-insensitive substring author lookup.
pub async fn news_by_author_partial(
    State(state): State<Arc<AppState>>,
    Path(partial): Path<String>,
) -> Response {
    matches_or_404(
        state.dataset.by_author_partial(&partial),
        "No articles found for this partial author name",
    )
}

pub async fn api_docs() -> impl IntoResponse {
    Json(docs::openapi())
}
