//! Author rows and author write payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub type AuthorId = i32;

/// A full `authors` row, as returned by the author detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub author_id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub dod: Option<NaiveDate>,
    pub country: String,
    pub profession: String,
    pub biography: String,
    pub portrait: String,
}

impl Author {
    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            author_id: self.author_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Id and name only, used for dropdowns on the landing page and edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub author_id: AuthorId,
    pub first_name: String,
    pub last_name: String,
}

/// Form payload of `POST /api/authors`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    #[serde(default, deserialize_with = "crate::model::empty_string_as_none")]
    pub dod: Option<NaiveDate>,
    pub country: String,
    pub profession: String,
    pub biography: String,
    pub portrait: String,
}

impl NewAuthor {
    /// Materialize the row this payload becomes once the database assigns `id`
    pub fn into_author(self, id: AuthorId) -> Author {
        Author {
            author_id: id,
            first_name: self.first_name,
            last_name: self.last_name,
            dob: self.dob,
            dod: self.dod,
            country: self.country,
            profession: self.profession,
            biography: self.biography,
            portrait: self.portrait,
        }
    }
}

/// Rows removed by an author deletion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorRemoval {
    pub quotes: u64,
    pub authors: u64,
}
