//! A single attributed quote.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An attributed quote.
///
/// Fields are private so a quote cannot change after it is built. The
/// catalog builder is what checks that `text` and `author` are non-blank and
/// that ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Quote {
    id: u32,
    text: String,
    author: String,
}

impl Quote {
    /// Create a new quote.
    pub fn new(id: u32, text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            author: author.into(),
        }
    }

    /// Catalog-wide unique id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.author)
    }
}
