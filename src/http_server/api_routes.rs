//! API HTTP Routes
//!
//! JSON and fragment endpoints used by the client-side modals, plus the
//! form posts that create and update rows.
//!
//! Write routes answer with a redirect to the landing page. Delete routes
//! report `{"success": true}` even when the id did not exist.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{delete, get, post},
    Form, Json, Router,
};
use tracing::info;

use crate::model::{Author, AuthorId, NewAuthor, QuoteFields, QuoteId};
use crate::view::EditQuoteView;

use super::errors::{ApiError, PageError, StatusError, StatusResponse};
use super::state::GatewayState;

/// Create API routes
pub fn api_routes(state: Arc<GatewayState>) -> Router {
    Router::new()
        // Authors
        .route("/author/:id", get(get_author_handler))
        .route("/authors", post(create_author_handler))
        .route("/authors/:id", delete(delete_author_handler))
        // Quotes
        .route("/quotes", post(create_quote_handler))
        .route("/quotes/:id/edit", get(edit_quote_form_handler))
        .route(
            "/quotes/:id",
            post(update_quote_handler).delete(delete_quote_handler),
        )
        .with_state(state)
}

// ==================
// Author Handlers
// ==================

/// Author detail. An unknown id answers 200 with a `null` body.
async fn get_author_handler(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<AuthorId>,
) -> Result<Json<Option<Author>>, ApiError> {
    let author = state.store.find_author(id).await?;
    Ok(Json(author))
}

async fn create_author_handler(
    State(state): State<Arc<GatewayState>>,
    Form(author): Form<NewAuthor>,
) -> Result<Redirect, PageError> {
    let id = state.store.create_author(&author).await?;
    info!(author_id = id, "Author created");
    Ok(Redirect::to("/"))
}

async fn delete_author_handler(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<AuthorId>,
) -> Result<Json<StatusResponse>, StatusError> {
    let removal = state.store.delete_author(id).await?;
    info!(
        author_id = id,
        quotes = removal.quotes,
        authors = removal.authors,
        "Author deleted"
    );
    Ok(Json(StatusResponse::success()))
}

// ==================
// Quote Handlers
// ==================

async fn create_quote_handler(
    State(state): State<Arc<GatewayState>>,
    Form(fields): Form<QuoteFields>,
) -> Result<Redirect, PageError> {
    let id = state.store.create_quote(&fields).await?;
    info!(quote_id = id, author_id = fields.author_id, "Quote created");
    Ok(Redirect::to("/"))
}

async fn edit_quote_form_handler(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<QuoteId>,
) -> Result<Html<String>, PageError> {
    let quote = state.store.find_quote(id).await?;
    let authors = state.store.list_authors().await?;

    let fragment = state.views.edit_quote(&EditQuoteView { quote, authors })?;
    Ok(Html(fragment))
}

async fn update_quote_handler(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<QuoteId>,
    Form(fields): Form<QuoteFields>,
) -> Result<Redirect, PageError> {
    let updated = state.store.update_quote(id, &fields).await?;
    info!(quote_id = id, rows = updated, "Quote updated");
    Ok(Redirect::to("/"))
}

async fn delete_quote_handler(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<QuoteId>,
) -> Result<Json<StatusResponse>, StatusError> {
    let removed = state.store.delete_quote(id).await?;
    info!(quote_id = id, rows = removed, "Quote deleted");
    Ok(Json(StatusResponse::success()))
}
