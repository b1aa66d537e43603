//! # Domain Model
//!
//! Rows of the `authors` and `quotes` tables, the payloads accepted by the
//! write routes, and the selector used by the search routes.

pub mod author;
pub mod quote;

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

pub use author::{Author, AuthorId, AuthorRemoval, AuthorSummary, NewAuthor};
pub use quote::{Quote, QuoteFields, QuoteFilter, QuoteId, QuoteMatch};

/// Deserialize an optional form field, treating an empty string as absent.
///
/// HTML forms submit untouched inputs as `field=`, which plain `Option<T>`
/// would try to parse.
pub(crate) fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

/// Deserialize a numeric form field, treating an empty string as zero.
pub(crate) fn empty_string_as_zero<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    empty_string_as_none(de).map(Option::unwrap_or_default)
}
