//! The transient selection pair owned by one UI session.

use crate::model::Mood;
use serde::Serialize;

/// Currently selected mood and the position of the displayed quote within
/// that mood's list.
///
/// Only [`SelectionController`](super::SelectionController) mutates this.
/// When the selected mood has no quotes the index is always 0 and is never
/// used to index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected_mood: Mood,
    current_index: usize,
}

impl SelectionState {
    #[must_use]
    pub const fn selected_mood(&self) -> Mood {
        self.selected_mood
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    pub(super) const fn reset_to(&mut self, mood: Mood) {
        self.selected_mood = mood;
        self.current_index = 0;
    }

    pub(super) const fn set_index(&mut self, index: usize) {
        self.current_index = index;
    }
}
