//! Quote rows, search matches and the quote form payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::author::{Author, AuthorId};
use crate::store::sql;

pub type QuoteId = i32;

/// A `quotes` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote_id: QuoteId,
    pub quote: String,
    pub author_id: AuthorId,
    pub category: String,
    pub likes: i32,
}

/// A quote joined with its author's name, one line of a results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuoteMatch {
    pub quote_id: QuoteId,
    pub quote: String,
    pub author_id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub category: String,
    pub likes: i32,
}

impl QuoteMatch {
    pub fn join(quote: &Quote, author: &Author) -> Self {
        Self {
            quote_id: quote.quote_id,
            quote: quote.quote.clone(),
            author_id: author.author_id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            category: quote.category.clone(),
            likes: quote.likes,
        }
    }
}

/// Form payload shared by `POST /api/quotes` and `POST /api/quotes/:id`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFields {
    pub quote: String,
    pub author_id: AuthorId,
    pub category: String,
    #[serde(default, deserialize_with = "crate::model::empty_string_as_zero")]
    pub likes: i32,
}

impl QuoteFields {
    pub fn into_quote(self, id: QuoteId) -> Quote {
        Quote {
            quote_id: id,
            quote: self.quote,
            author_id: self.author_id,
            category: self.category,
            likes: self.likes,
        }
    }
}

/// Which of the four search routes produced a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteFilter {
    /// Case-insensitive `%keyword%` match on the quote text; `%` and `_` in
    /// the keyword are wildcards
    Keyword(String),
    Author(AuthorId),
    Category(String),
    /// Inclusive on both ends
    Likes { min: i32, max: i32 },
}

impl QuoteFilter {
    /// Evaluate the filter against a joined row.
    ///
    /// Mirrors the SQL predicates for stores that do not speak SQL.
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            QuoteFilter::Keyword(keyword) => {
                sql::ilike(&quote.quote, &sql::contains_pattern(keyword))
            }
            QuoteFilter::Author(id) => quote.author_id == *id,
            QuoteFilter::Category(category) => quote.category == *category,
            QuoteFilter::Likes { min, max } => (*min..=*max).contains(&quote.likes),
        }
    }

    /// Short label for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteFilter::Keyword(_) => "keyword",
            QuoteFilter::Author(_) => "author",
            QuoteFilter::Category(_) => "category",
            QuoteFilter::Likes { .. } => "likes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str, likes: i32) -> Quote {
        Quote {
            quote_id: 1,
            quote: text.to_string(),
            author_id: 3,
            category: "Inspiration".to_string(),
            likes,
        }
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let q = quote("Hope is the thing with feathers", 0);
        assert!(QuoteFilter::Keyword("hope".into()).matches(&q));
        assert!(QuoteFilter::Keyword("FEATHER".into()).matches(&q));
        assert!(!QuoteFilter::Keyword("despair".into()).matches(&q));
    }

    #[test]
    fn test_keyword_wildcards() {
        let q = quote("Hope is the thing with feathers", 0);
        assert!(QuoteFilter::Keyword("H_pe".into()).matches(&q));
        assert!(QuoteFilter::Keyword("Hope%thing".into()).matches(&q));
        assert!(!QuoteFilter::Keyword("thing%Hope".into()).matches(&q));
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        assert!(QuoteFilter::Keyword(String::new()).matches(&quote("anything", 0)));
    }

    #[test]
    fn test_like_range_is_inclusive() {
        let range = QuoteFilter::Likes { min: 10, max: 20 };
        assert!(range.matches(&quote("a", 10)));
        assert!(range.matches(&quote("a", 20)));
        assert!(!range.matches(&quote("a", 9)));
        assert!(!range.matches(&quote("a", 21)));
    }

    #[test]
    fn test_inverted_like_range_matches_nothing() {
        let range = QuoteFilter::Likes { min: 20, max: 10 };
        assert!(!range.matches(&quote("a", 15)));
    }

    #[test]
    fn test_category_is_exact() {
        let q = quote("a", 0);
        assert!(QuoteFilter::Category("Inspiration".into()).matches(&q));
        assert!(!QuoteFilter::Category("inspiration".into()).matches(&q));
    }

    #[test]
    fn test_likes_default_to_zero() {
        let fields: QuoteFields = serde_json::from_value(serde_json::json!({
            "quote": "q",
            "authorId": 1,
            "category": "c"
        }))
        .unwrap();
        assert_eq!(fields.likes, 0);
    }

    #[test]
    fn test_blank_likes_default_to_zero() {
        let fields: QuoteFields = serde_json::from_value(serde_json::json!({
            "quote": "q",
            "authorId": 1,
            "category": "c",
            "likes": " "
        }))
        .unwrap();
        assert_eq!(fields.likes, 0);
    }

    #[test]
    fn test_likes_parsed_from_form_text() {
        let fields: QuoteFields = serde_json::from_value(serde_json::json!({
            "quote": "q",
            "authorId": 1,
            "category": "c",
            "likes": "42"
        }))
        .unwrap();
        assert_eq!(fields.likes, 42);

        let bad = serde_json::from_value::<QuoteFields>(serde_json::json!({
            "quote": "q",
            "authorId": 1,
            "category": "c",
            "likes": "lots"
        }));
        assert!(bad.is_err());
    }
}
