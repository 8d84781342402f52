//! Mood selection and quote cycling.
//!
//! [`SelectionController`] owns one [`SelectionState`] and is the only thing
//! allowed to change it. It borrows a [`Catalog`] for lookups, so a session
//! can run against the built-in catalog or any custom one.
//!
//! # State machine
//!
//! The controller is always in one of two phases, decided by the length of
//! the selected mood's quote list:
//!
//! - [`SelectionPhase::HasQuotes`]: `advance_quote` cycles through the list.
//! - [`SelectionPhase::Empty`]: `advance_quote` does nothing and
//!   `current_quote` returns `None`.
//!
//! Only `select_mood` (and the next/prev helpers built on it) can move
//! between phases.
//!
//! ```
//! use mood_quotes::{Catalog, Mood, SelectionController};
//!
//! let mut selection = SelectionController::new(Catalog::builtin());
//! assert_eq!(selection.current_quote().map(|q| q.id()), Some(1));
//!
//! selection.advance_quote();
//! assert_eq!(selection.current_quote().map(|q| q.id()), Some(2));
//!
//! selection.select_mood(Mood::Sad);
//! assert_eq!(selection.current_index(), 0);
//! assert_eq!(selection.current_quote().map(|q| q.id()), Some(3));
//! ```

mod state;
mod view;

pub use state::SelectionState;
pub use view::{MoodOption, QuotePosition, SelectionView};

use crate::catalog::Catalog;
use crate::model::{Mood, Quote};

/// Which of the two states the selection is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    HasQuotes,
    Empty,
}

/// Applies user actions to a [`SelectionState`].
#[derive(Debug, Clone)]
pub struct SelectionController<'a> {
    catalog: &'a Catalog,
    state: SelectionState,
}

impl<'a> SelectionController<'a> {
    /// Start a session on the first mood with the first quote.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            state: SelectionState::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub const fn selected_mood(&self) -> Mood {
        self.state.selected_mood()
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// Quotes of the selected mood.
    #[must_use]
    pub fn quotes(&self) -> &'a [Quote] {
        self.catalog.lookup(self.state.selected_mood())
    }

    /// Select `mood` and go back to its first quote.
    ///
    /// The reset happens even when `mood` is already selected.
    pub fn select_mood(&mut self, mood: Mood) {
        let previous = self.state.selected_mood();
        self.state.reset_to(mood);
        tracing::debug!(
            from = %previous,
            to = %mood,
            quotes = self.quotes().len(),
            "Selected mood"
        );
    }

    /// Select the mood after the current one, wrapping around.
    pub fn select_next_mood(&mut self) {
        self.select_mood(self.state.selected_mood().next());
    }

    /// Select the mood before the current one, wrapping around.
    pub fn select_prev_mood(&mut self) {
        self.select_mood(self.state.selected_mood().prev());
    }

    /// Move to the next quote, wrapping to the first after the last.
    ///
    /// Does nothing when the selected mood has no quotes. With a single
    /// quote the index stays at 0.
    pub fn advance_quote(&mut self) {
        let len = self.quotes().len();
        if len == 0 {
            tracing::debug!(mood = %self.selected_mood(), "No quotes to advance through");
            return;
        }
        let next = (self.state.current_index() + 1) % len;
        self.state.set_index(next);
        tracing::debug!(mood = %self.selected_mood(), index = next, "Advanced quote");
    }

    /// The quote to display, or `None` when the selected mood has no quotes.
    #[must_use]
    pub fn current_quote(&self) -> Option<&'a Quote> {
        self.quotes().get(self.state.current_index())
    }

    /// Whether a "next quote" action would show a different quote.
    #[must_use]
    pub fn has_multiple_quotes(&self) -> bool {
        self.quotes().len() > 1
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        if self.quotes().is_empty() {
            SelectionPhase::Empty
        } else {
            SelectionPhase::HasQuotes
        }
    }

    /// Build the render-ready view of the current state.
    #[must_use]
    pub fn view(&self) -> SelectionView<'a> {
        let selected = self.selected_mood();
        let moods = self
            .catalog
            .iter()
            .map(|(mood, quotes)| MoodOption {
                mood,
                label: mood.label(),
                selected: mood == selected,
                quote_count: quotes.len(),
            })
            .collect();
        let quote = self.current_quote();
        let position = quote.map(|_| QuotePosition {
            current: self.current_index() + 1,
            total: self.quotes().len(),
        });

        SelectionView {
            moods,
            selected_mood: selected,
            quote,
            position,
            can_advance: self.has_multiple_quotes(),
        }
    }
}
