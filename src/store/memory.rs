//! In-memory store for tests
//!
//! Evaluates the same predicates as the SQL statements over two ordered maps.
//! Ordering follows the SQL: authors by last name, categories alphabetically,
//! search results by quote id. A quote whose author is missing drops out of
//! joined results, as it would from an inner join.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::{
    Author, AuthorId, AuthorRemoval, AuthorSummary, NewAuthor, Quote, QuoteFields, QuoteFilter,
    QuoteId, QuoteMatch,
};

use super::errors::{StoreError, StoreResult};
use super::QuoteStore;

#[derive(Default)]
struct Tables {
    authors: BTreeMap<AuthorId, Author>,
    quotes: BTreeMap<QuoteId, Quote>,
    next_author_id: AuthorId,
    next_quote_id: QuoteId,
}

impl Tables {
    fn next_author_id(&mut self) -> AuthorId {
        self.next_author_id += 1;
        self.next_author_id
    }

    fn next_quote_id(&mut self) -> QuoteId {
        self.next_quote_id += 1;
        self.next_quote_id
    }
}

pub struct InMemoryQuoteStore {
    tables: RwLock<Tables>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Number of stored quotes, regardless of author
    pub fn quote_count(&self) -> StoreResult<usize> {
        Ok(self.read()?.quotes.len())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for InMemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteStore for InMemoryQuoteStore {
    async fn list_authors(&self) -> StoreResult<Vec<AuthorSummary>> {
        let tables = self.read()?;
        let mut authors: Vec<AuthorSummary> =
            tables.authors.values().map(Author::summary).collect();
        authors.sort_by(|a, b| {
            (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name))
        });
        Ok(authors)
    }

    async fn list_categories(&self) -> StoreResult<Vec<String>> {
        let tables = self.read()?;
        let categories: BTreeSet<&String> = tables.quotes.values().map(|q| &q.category).collect();
        Ok(categories.into_iter().cloned().collect())
    }

    async fn search_quotes(&self, filter: &QuoteFilter) -> StoreResult<Vec<QuoteMatch>> {
        let tables = self.read()?;
        Ok(tables
            .quotes
            .values()
            .filter(|quote| filter.matches(quote))
            .filter_map(|quote| {
                tables
                    .authors
                    .get(&quote.author_id)
                    .map(|author| QuoteMatch::join(quote, author))
            })
            .collect())
    }

    async fn find_author(&self, id: AuthorId) -> StoreResult<Option<Author>> {
        Ok(self.read()?.authors.get(&id).cloned())
    }

    async fn create_author(&self, author: &NewAuthor) -> StoreResult<AuthorId> {
        let mut tables = self.write()?;
        let id = tables.next_author_id();
        tables.authors.insert(id, author.clone().into_author(id));
        Ok(id)
    }

    async fn delete_author(&self, id: AuthorId) -> StoreResult<AuthorRemoval> {
        let mut tables = self.write()?;
        let before = tables.quotes.len();
        tables.quotes.retain(|_, quote| quote.author_id != id);
        let quotes = (before - tables.quotes.len()) as u64;
        let authors = u64::from(tables.authors.remove(&id).is_some());
        Ok(AuthorRemoval { quotes, authors })
    }

    async fn find_quote(&self, id: QuoteId) -> StoreResult<Option<Quote>> {
        Ok(self.read()?.quotes.get(&id).cloned())
    }

    async fn create_quote(&self, fields: &QuoteFields) -> StoreResult<QuoteId> {
        let mut tables = self.write()?;
        let id = tables.next_quote_id();
        tables.quotes.insert(id, fields.clone().into_quote(id));
        Ok(id)
    }

    async fn update_quote(&self, id: QuoteId, fields: &QuoteFields) -> StoreResult<u64> {
        let mut tables = self.write()?;
        match tables.quotes.get_mut(&id) {
            Some(quote) => {
                *quote = fields.clone().into_quote(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_quote(&self, id: QuoteId) -> StoreResult<u64> {
        Ok(u64::from(self.write()?.quotes.remove(&id).is_some()))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.read().map(|_| ())
    }
}
