//! # Quote Store
//!
//! Data access for the `authors` and `quotes` tables. Handlers never touch
//! a pool directly; they receive an `Arc<dyn QuoteStore>` through router
//! state, so tests can swap in [`InMemoryQuoteStore`] or a failing fake.
//!
//! Every operation maps to one parameterized statement, except
//! [`QuoteStore::delete_author`], which removes the author's quotes before
//! the author row.

pub mod config;
pub mod errors;
pub mod memory;
pub mod postgres;
pub mod sql;

use async_trait::async_trait;

use crate::model::{
    Author, AuthorId, AuthorRemoval, AuthorSummary, NewAuthor, Quote, QuoteFields, QuoteFilter,
    QuoteId, QuoteMatch,
};

pub use config::DatabaseConfig;
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryQuoteStore;
pub use postgres::PgQuoteStore;

/// Handle to the quotes database
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// All authors, ordered by last name
    async fn list_authors(&self) -> StoreResult<Vec<AuthorSummary>>;

    /// Distinct category labels, ordered
    async fn list_categories(&self) -> StoreResult<Vec<String>>;

    /// Quotes joined with their authors, restricted by `filter`
    async fn search_quotes(&self, filter: &QuoteFilter) -> StoreResult<Vec<QuoteMatch>>;

    async fn find_author(&self, id: AuthorId) -> StoreResult<Option<Author>>;

    async fn create_author(&self, author: &NewAuthor) -> StoreResult<AuthorId>;

    /// Remove an author's quotes, then the author
    async fn delete_author(&self, id: AuthorId) -> StoreResult<AuthorRemoval>;

    async fn find_quote(&self, id: QuoteId) -> StoreResult<Option<Quote>>;

    /// Insert a quote. The author id is not checked.
    async fn create_quote(&self, fields: &QuoteFields) -> StoreResult<QuoteId>;

    /// Overwrite a quote in place, returning the number of rows touched
    async fn update_quote(&self, id: QuoteId, fields: &QuoteFields) -> StoreResult<u64>;

    /// Delete a quote, returning the number of rows removed (0 for an unknown id)
    async fn delete_quote(&self, id: QuoteId) -> StoreResult<u64>;

    /// Round-trip to the backend
    async fn ping(&self) -> StoreResult<()>;
}
