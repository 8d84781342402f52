//! Interactive terminal UI using ratatui.
//!
//! The TUI is the rendering side of the widget: it draws the
//! [`SelectionView`](crate::selection::SelectionView) produced by the
//! session's controller and turns key presses and mouse clicks back into
//! `select_mood` / `advance_quote` calls.

mod app;
pub(crate) mod clipboard;
mod events;
mod status;
pub mod theme;
mod ui;
pub(crate) mod widgets;

pub use app::MoodApp;
pub use events::{Event, handle_key_event, handle_mouse_event};
pub use status::StatusMessage;
pub use theme::{ColorScheme, FooterHints, Styles, Theme, colors, set_theme, toggle_theme};
pub use ui::{render, run_tui};
