//! Query classification
//!
//! The text a user types in the search box is read one of three ways:
//!
//! | Trimmed text | Query | Matches |
//! |--------------|-------|---------|
//! | empty / none | `Empty` | nothing |
//! | parses as `i32` | `IdPrefix` | id rendered in decimal starts with the text |
//! | anything else | `NameContains` | name contains the text, ignoring case |
//!
//! The id match is textual: `7` matches 7, 70 and 700 but not 17.

use roster_core::RecordId;
use serde::Serialize;
use std::fmt;

/// A classified search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Nothing typed; matches no record
    Empty,
    /// Integer text, matched as a prefix of the decimal id
    IdPrefix {
        /// Trimmed query text
        prefix: String,
    },
    /// Free text, matched as a case-insensitive substring of the name
    NameContains {
        /// Trimmed query text
        text: String,
        /// Case-folded form used for matching
        #[serde(skip)]
        folded: String,
    },
}

impl Query {
    /// Classify raw search text; `None` behaves like an empty string
    pub fn parse(raw: Option<&str>) -> Self {
        let text = raw.unwrap_or_default().trim();
        if text.is_empty() {
            Query::Empty
        } else if text.parse::<RecordId>().is_ok() {
            Query::IdPrefix {
                prefix: text.to_string(),
            }
        } else {
            Query::NameContains {
                text: text.to_string(),
                folded: text.to_lowercase(),
            }
        }
    }

    /// Check if this query can match anything
    pub fn is_empty(&self) -> bool {
        matches!(self, Query::Empty)
    }

    /// Check a single record against the query
    pub fn matches(&self, id: RecordId, name: &str) -> bool {
        match self {
            Query::Empty => false,
            Query::IdPrefix { prefix } => id.to_string().starts_with(prefix.as_str()),
            Query::NameContains { folded, .. } => name.to_lowercase().contains(folded.as_str()),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Empty => f.write_str("(empty)"),
            Query::IdPrefix { prefix } => write!(f, "id starts with {}", prefix),
            Query::NameContains { text, .. } => write!(f, "name contains \"{}\"", text),
        }
    }
}
