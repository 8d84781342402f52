//! Fluent construction of validated catalogs.

use super::Catalog;
use crate::error::Result;
use crate::model::{Mood, Quote};

/// Builder for a [`Catalog`].
///
/// Quotes keep the order in which they are added. Moods that never receive a
/// quote end up with an empty list.
///
/// ```
/// use mood_quotes::{Catalog, Mood, Quote};
///
/// let catalog = Catalog::builder()
///     .quote(Mood::Happy, Quote::new(1, "Smile.", "Anonymous"))
///     .build()
///     .unwrap();
/// assert!(catalog.lookup(Mood::Sad).is_empty());
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Append one quote to `mood`.
    pub fn quote(mut self, mood: Mood, quote: Quote) -> Self {
        self.catalog.entry_mut(mood).push(quote);
        self
    }

    /// Append several quotes to `mood`.
    pub fn quotes(mut self, mood: Mood, quotes: impl IntoIterator<Item = Quote>) -> Self {
        self.catalog.entry_mut(mood).extend(quotes);
        self
    }

    /// Validate and return the catalog.
    pub fn build(self) -> Result<Catalog> {
        self.catalog.validate()?;
        tracing::debug!(quotes = self.catalog.len(), "Built quote catalog");
        Ok(self.catalog)
    }
}
