//! Page HTTP Routes
//!
//! Server-rendered pages: the landing page and the four search result lists.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::model::{AuthorId, QuoteFilter};
use crate::view::{LandingView, ResultsView};

use super::errors::PageError;
use super::state::GatewayState;

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorQuery {
    pub author_id: AuthorId,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesQuery {
    pub min_likes: i32,
    pub max_likes: i32,
}

// ==================
// Page Routes
// ==================

/// Create page routes
pub fn page_routes(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/", get(landing_handler))
        .route("/searchByKeyword", get(search_by_keyword_handler))
        .route("/searchByAuthor", get(search_by_author_handler))
        .route("/searchByCategory", get(search_by_category_handler))
        .route("/searchByLikes", get(search_by_likes_handler))
        .with_state(state)
}

async fn landing_handler(State(state): State<Arc<GatewayState>>) -> Result<Html<String>, PageError> {
    let authors = state.store.list_authors().await?;
    let categories = state.store.list_categories().await?;

    let page = state.views.landing(&LandingView {
        authors,
        categories,
    })?;
    Ok(Html(page))
}

async fn search_by_keyword_handler(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<KeywordQuery>,
) -> Result<Html<String>, PageError> {
    render_results(&state, QuoteFilter::Keyword(query.keyword)).await
}

async fn search_by_author_handler(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<AuthorQuery>,
) -> Result<Html<String>, PageError> {
    render_results(&state, QuoteFilter::Author(query.author_id)).await
}

async fn search_by_category_handler(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Html<String>, PageError> {
    render_results(&state, QuoteFilter::Category(query.category)).await
}

async fn search_by_likes_handler(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<LikesQuery>,
) -> Result<Html<String>, PageError> {
    let filter = QuoteFilter::Likes {
        min: query.min_likes,
        max: query.max_likes,
    };
    render_results(&state, filter).await
}

async fn render_results(state: &GatewayState, filter: QuoteFilter) -> Result<Html<String>, PageError> {
    let quotes = state.store.search_quotes(&filter).await?;
    debug!(filter = filter.kind(), matches = quotes.len(), "Rendering results");

    let page = state.views.results(&ResultsView { quotes })?;
    Ok(Html(page))
}
