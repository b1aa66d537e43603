//! PostgreSQL-backed store on a sqlx connection pool

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use crate::model::{
    Author, AuthorId, AuthorRemoval, AuthorSummary, NewAuthor, Quote, QuoteFields, QuoteFilter,
    QuoteId, QuoteMatch,
};

use super::config::DatabaseConfig;
use super::errors::StoreResult;
use super::sql;
use super::QuoteStore;

/// Store over a shared `PgPool`.
///
/// The pool owns connection reuse; each call checks out a connection for
/// the duration of one statement (or one transaction for author deletion).
#[derive(Clone)]
pub struct PgQuoteStore {
    pool: PgPool,
}

impl PgQuoteStore {
    /// Open a pool and verify it with one round-trip
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = config.connect_options()?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!(
            max_connections = config.max_connections,
            ssl_mode = ?config.ssl_mode,
            "Connected to database"
        );

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuoteStore for PgQuoteStore {
    async fn list_authors(&self) -> StoreResult<Vec<AuthorSummary>> {
        let authors = sqlx::query_as::<_, AuthorSummary>(sql::LIST_AUTHORS)
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    async fn list_categories(&self) -> StoreResult<Vec<String>> {
        let categories = sqlx::query_scalar::<_, String>(sql::LIST_CATEGORIES)
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn search_quotes(&self, filter: &QuoteFilter) -> StoreResult<Vec<QuoteMatch>> {
        let query = match filter {
            QuoteFilter::Keyword(keyword) => {
                sqlx::query_as::<_, QuoteMatch>(sql::SEARCH_BY_KEYWORD)
                    .bind(sql::contains_pattern(keyword))
            }
            QuoteFilter::Author(id) => {
                sqlx::query_as::<_, QuoteMatch>(sql::SEARCH_BY_AUTHOR).bind(*id)
            }
            QuoteFilter::Category(category) => {
                sqlx::query_as::<_, QuoteMatch>(sql::SEARCH_BY_CATEGORY).bind(category.clone())
            }
            QuoteFilter::Likes { min, max } => sqlx::query_as::<_, QuoteMatch>(sql::SEARCH_BY_LIKES)
                .bind(*min)
                .bind(*max),
        };

        let rows = query.fetch_all(&self.pool).await?;
        debug!(filter = filter.kind(), rows = rows.len(), "Quote search");
        Ok(rows)
    }

    async fn find_author(&self, id: AuthorId) -> StoreResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(sql::FIND_AUTHOR)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    async fn create_author(&self, author: &NewAuthor) -> StoreResult<AuthorId> {
        let id = sqlx::query_scalar::<_, AuthorId>(sql::INSERT_AUTHOR)
            .bind(&author.first_name)
            .bind(&author.last_name)
            .bind(author.dob)
            .bind(author.dod)
            .bind(&author.country)
            .bind(&author.profession)
            .bind(&author.biography)
            .bind(&author.portrait)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn delete_author(&self, id: AuthorId) -> StoreResult<AuthorRemoval> {
        // Children first. Dropping `tx` on an early return rolls both back.
        let mut tx = self.pool.begin().await?;

        let quotes = sqlx::query(sql::DELETE_QUOTES_BY_AUTHOR)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let authors = sqlx::query(sql::DELETE_AUTHOR)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(AuthorRemoval { quotes, authors })
    }

    async fn find_quote(&self, id: QuoteId) -> StoreResult<Option<Quote>> {
        let quote = sqlx::query_as::<_, Quote>(sql::FIND_QUOTE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(quote)
    }

    async fn create_quote(&self, fields: &QuoteFields) -> StoreResult<QuoteId> {
        let id = sqlx::query_scalar::<_, QuoteId>(sql::INSERT_QUOTE)
            .bind(&fields.quote)
            .bind(fields.author_id)
            .bind(&fields.category)
            .bind(fields.likes)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update_quote(&self, id: QuoteId, fields: &QuoteFields) -> StoreResult<u64> {
        let result = sqlx::query(sql::UPDATE_QUOTE)
            .bind(&fields.quote)
            .bind(fields.author_id)
            .bind(&fields.category)
            .bind(fields.likes)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_quote(&self, id: QuoteId) -> StoreResult<u64> {
        let result = sqlx::query(sql::DELETE_QUOTE)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query(sql::PING).execute(&self.pool).await?;
        Ok(())
    }
}
