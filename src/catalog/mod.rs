//! The quote catalog: a read-only table from [`Mood`] to an ordered list of
//! [`Quote`]s.
//!
//! The built-in catalog is built once on first access and lives for the rest
//! of the process:
//!
//! ```
//! use mood_quotes::{Catalog, Mood};
//!
//! let catalog = Catalog::builtin();
//! let sad = catalog.lookup(Mood::Sad);
//! assert_eq!(sad[0].id(), 3);
//! ```
//!
//! Other catalogs (mostly useful in tests) go through [`CatalogBuilder`],
//! which checks the quote invariants before handing out a `Catalog`.

mod builder;
mod builtin;

pub use builder::CatalogBuilder;

use crate::error::{CatalogErrorKind, MoodQuotesError, Result};
use crate::model::{Mood, Quote};
use std::collections::HashSet;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(builtin::catalog);

/// Immutable mapping from every mood to its quotes.
///
/// Every mood always has an entry; an empty slice is a valid state. The
/// order of quotes within a mood is the cycling order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    happy: Vec<Quote>,
    sad: Vec<Quote>,
    stressed: Vec<Quote>,
    tired: Vec<Quote>,
    motivated: Vec<Quote>,
}

impl Catalog {
    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Start building a custom catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Quotes for `mood`, in cycling order. Never fails.
    #[must_use]
    pub fn lookup(&self, mood: Mood) -> &[Quote] {
        match mood {
            Mood::Happy => &self.happy,
            Mood::Sad => &self.sad,
            Mood::Stressed => &self.stressed,
            Mood::Tired => &self.tired,
            Mood::Motivated => &self.motivated,
        }
    }

    fn entry_mut(&mut self, mood: Mood) -> &mut Vec<Quote> {
        match mood {
            Mood::Happy => &mut self.happy,
            Mood::Sad => &mut self.sad,
            Mood::Stressed => &mut self.stressed,
            Mood::Tired => &mut self.tired,
            Mood::Motivated => &mut self.motivated,
        }
    }

    /// Iterate over `(mood, quotes)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, &[Quote])> + '_ {
        Mood::ALL.into_iter().map(move |mood| (mood, self.lookup(mood)))
    }

    /// Total number of quotes across all moods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().map(|(_, quotes)| quotes.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a quote by id, together with the mood it is filed under.
    #[must_use]
    pub fn find(&self, id: u32) -> Option<(Mood, &Quote)> {
        self.iter().find_map(|(mood, quotes)| {
            quotes.iter().find(|q| q.id() == id).map(|q| (mood, q))
        })
    }

    /// Check the quote invariants: non-blank text and author, ids unique
    /// across the whole catalog.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (mood, quotes) in self.iter() {
            for quote in quotes {
                let context = format!("quote #{} under '{}'", quote.id(), mood);
                if quote.text().trim().is_empty() {
                    return Err(MoodQuotesError::catalog(
                        context,
                        CatalogErrorKind::EmptyText { id: quote.id() },
                    ));
                }
                if quote.author().trim().is_empty() {
                    return Err(MoodQuotesError::catalog(
                        context,
                        CatalogErrorKind::EmptyAuthor { id: quote.id() },
                    ));
                }
                if !seen.insert(quote.id()) {
                    return Err(MoodQuotesError::catalog(
                        context,
                        CatalogErrorKind::DuplicateId { id: quote.id() },
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_every_mood_has_two_builtin_quotes() {
        for (mood, quotes) in Catalog::builtin().iter() {
            assert_eq!(quotes.len(), 2, "mood {mood} should have two quotes");
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        let catalog = Catalog::builtin();
        for mood in Mood::ALL {
            let first = catalog.lookup(mood).to_vec();
            let second = catalog.lookup(mood).to_vec();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_builtin_order_by_mood() {
        let ids: Vec<(Mood, Vec<u32>)> = Catalog::builtin()
            .iter()
            .map(|(mood, quotes)| (mood, quotes.iter().map(Quote::id).collect()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (Mood::Happy, vec![1, 2]),
                (Mood::Sad, vec![3, 4]),
                (Mood::Stressed, vec![5, 6]),
                (Mood::Tired, vec![7, 8]),
                (Mood::Motivated, vec![9, 10]),
            ]
        );
    }

    #[test]
    fn test_find_by_id() {
        let (mood, quote) = Catalog::builtin().find(7).expect("quote 7 exists");
        assert_eq!(mood, Mood::Tired);
        assert_eq!(quote.author(), "John Lubbock");
        assert!(Catalog::builtin().find(99).is_none());
    }

    #[test]
    fn test_default_catalog_is_empty_but_total() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        for mood in Mood::ALL {
            assert!(catalog.lookup(mood).is_empty());
        }
    }
}
