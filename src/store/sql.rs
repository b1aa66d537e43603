//! SQL text for every statement the gateway issues.
//!
//! Values are only ever bound to the `$n` placeholders below. Nothing in this
//! crate formats request data into statement text.

pub const LIST_AUTHORS: &str =
    "SELECT author_id, first_name, last_name FROM authors ORDER BY last_name, first_name";

pub const LIST_CATEGORIES: &str = "SELECT DISTINCT category FROM quotes ORDER BY category";

macro_rules! quote_join {
    ($predicate:literal) => {
        concat!(
            "SELECT q.quote_id, q.quote, q.author_id, a.first_name, a.last_name, ",
            "q.category, q.likes ",
            "FROM quotes q JOIN authors a ON a.author_id = q.author_id ",
            $predicate,
            " ORDER BY q.quote_id"
        )
    };
}

pub const SEARCH_BY_KEYWORD: &str = quote_join!("WHERE q.quote ILIKE $1");
pub const SEARCH_BY_AUTHOR: &str = quote_join!("WHERE q.author_id = $1");
pub const SEARCH_BY_CATEGORY: &str = quote_join!("WHERE q.category = $1");
pub const SEARCH_BY_LIKES: &str = quote_join!("WHERE q.likes BETWEEN $1 AND $2");

pub const FIND_AUTHOR: &str = "SELECT author_id, first_name, last_name, dob, dod, country, \
     profession, biography, portrait FROM authors WHERE author_id = $1";

pub const INSERT_AUTHOR: &str = "INSERT INTO authors \
     (first_name, last_name, dob, dod, country, profession, biography, portrait) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING author_id";

pub const DELETE_QUOTES_BY_AUTHOR: &str = "DELETE FROM quotes WHERE author_id = $1";
pub const DELETE_AUTHOR: &str = "DELETE FROM authors WHERE author_id = $1";

pub const FIND_QUOTE: &str =
    "SELECT quote_id, quote, author_id, category, likes FROM quotes WHERE quote_id = $1";

pub const INSERT_QUOTE: &str = "INSERT INTO quotes (quote, author_id, category, likes) \
     VALUES ($1, $2, $3, $4) RETURNING quote_id";

pub const UPDATE_QUOTE: &str = "UPDATE quotes SET quote = $1, author_id = $2, category = $3, \
     likes = $4 WHERE quote_id = $5";

pub const DELETE_QUOTE: &str = "DELETE FROM quotes WHERE quote_id = $1";

pub const PING: &str = "SELECT 1";

/// Bind value for a substring search: the keyword wrapped in `%` markers.
pub fn contains_pattern(keyword: &str) -> String {
    format!("%{keyword}%")
}

enum LikeToken {
    /// `%`
    AnyRun,
    /// `_`
    AnyChar,
    Literal(char),
}

fn like_tokens(pattern: &str) -> Vec<LikeToken> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => LikeToken::AnyRun,
            '_' => LikeToken::AnyChar,
            // PostgreSQL's default escape character. A trailing `\` is literal.
            '\\' => LikeToken::Literal(chars.next().unwrap_or('\\')),
            c => LikeToken::Literal(c),
        });
    }
    tokens
}

/// Evaluate `text ILIKE pattern` in process.
///
/// `%` matches any run of characters, `_` exactly one, and `\` escapes the
/// next character. Both sides are lowercased before comparison.
pub fn ilike(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let tokens = like_tokens(&pattern.to_lowercase());

    let (mut t, mut p) = (0, 0);
    // Last `%` seen and the text position it is currently stretched to
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match tokens.get(p) {
            Some(LikeToken::AnyRun) => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(LikeToken::AnyChar) => {
                p += 1;
                t += 1;
            }
            Some(LikeToken::Literal(c)) if *c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, stretched)) => {
                    p = star + 1;
                    t = stretched + 1;
                    backtrack = Some((star, t));
                }
                None => return false,
            },
        }
    }

    tokens[p..].iter().all(|token| matches!(token, LikeToken::AnyRun))
}
