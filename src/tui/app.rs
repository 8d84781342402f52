//! Application state for the interactive quote widget.

use super::clipboard::copy_to_clipboard;
use super::status::StatusMessage;
use super::theme::toggle_theme;
use crate::catalog::Catalog;
use crate::config::TuiConfig;
use crate::model::Mood;
use crate::selection::SelectionController;
use ratatui::layout::Rect;
use std::time::Duration;

/// How long a status message stays up without a key press.
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// One interactive session.
///
/// The session owns its [`SelectionController`]; nothing else holds the
/// selection state. Screen regions are recorded on every draw so mouse
/// clicks can be mapped back to mood buttons and the quote panel.
#[derive(Debug)]
pub struct MoodApp<'a> {
    pub selection: SelectionController<'a>,
    pub should_quit: bool,
    pub show_help: bool,
    pub status: StatusMessage,
    pub mouse_enabled: bool,
    pub show_hints: bool,
    pub(crate) mood_buttons: Vec<(Mood, Rect)>,
    pub(crate) quote_area: Rect,
}

impl<'a> MoodApp<'a> {
    /// Start a session on `catalog` with default settings.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, &TuiConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: &'a Catalog, config: &TuiConfig) -> Self {
        Self {
            selection: SelectionController::new(catalog),
            should_quit: false,
            show_help: false,
            status: StatusMessage::with_auto_clear(STATUS_TIMEOUT),
            mouse_enabled: config.mouse_enabled,
            show_hints: config.show_hints,
            mood_buttons: Vec::new(),
            quote_area: Rect::default(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn select_mood(&mut self, mood: Mood) {
        self.selection.select_mood(mood);
    }

    /// Handle the "next quote" action.
    ///
    /// The action is only offered when the mood has more than one quote;
    /// otherwise a status message explains why nothing changed.
    pub fn next_quote(&mut self) {
        if self.selection.has_multiple_quotes() {
            self.selection.advance_quote();
        } else if self.selection.current_quote().is_some() {
            self.status.set("Only one quote for this mood");
        } else {
            self.status.set("No quotes for this mood");
        }
    }

    /// Copy the displayed quote to the system clipboard.
    pub fn copy_current_quote(&mut self) {
        let Some(quote) = self.selection.current_quote() else {
            self.status.set("Nothing to copy");
            return;
        };
        if copy_to_clipboard(&quote.to_string()) {
            self.status.set(format!("Copied quote #{}", quote.id()));
        } else {
            self.status.set("Clipboard unavailable (needs pbcopy or xclip)");
        }
    }

    pub fn cycle_theme(&mut self) {
        let name = toggle_theme();
        tracing::debug!(theme = name, "Switched theme");
        self.status.set(format!("Theme: {name}"));
    }

    pub fn on_tick(&mut self) {
        self.status.expire();
    }

    /// Mood whose button covers the cell `(column, row)`, if any.
    #[must_use]
    pub fn mood_at(&self, column: u16, row: u16) -> Option<Mood> {
        self.mood_buttons
            .iter()
            .find(|(_, rect)| super::widgets::contains(*rect, column, row))
            .map(|(mood, _)| *mood)
    }

    /// Whether the cell `(column, row)` is inside the quote panel.
    #[must_use]
    pub const fn in_quote_area(&self, column: u16, row: u16) -> bool {
        super::widgets::contains(self.quote_area, column, row)
    }
}
