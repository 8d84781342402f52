//! **A small terminal widget that answers "How are you feeling today?" with a quote.**
//!
//! `mood-quotes` pairs a fixed set of moods with short motivational quotes. Pick a
//! mood and the widget shows its first quote; ask for the next one and it cycles
//! through the quotes for that mood, wrapping back to the start.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The closed [`Mood`] enumeration and the immutable [`Quote`] record.
//! - **[`catalog`]**: The [`Catalog`] maps every mood to an ordered list of quotes. The
//!   built-in catalog is created once and never changes; custom catalogs are assembled
//!   with [`CatalogBuilder`], which rejects duplicate ids and blank fields.
//! - **[`selection`]**: The [`SelectionController`] owns the session's selection state
//!   (selected mood plus quote index) and exposes `select_mood`, `advance_quote` and
//!   `current_quote`. A [`SelectionView`] is the derived read used by every renderer.
//! - **[`tui`]**: The interactive ratatui front end: mood buttons, the quote panel and a
//!   "Next Quote" control shown only when the mood has more than one quote.
//! - **[`cli`]**: Handlers for the `show`, `moods`, `catalog` and `tui` subcommands.
//! - **[`config`]**: YAML configuration discovery, validation and JSON schema.
//!
//! ## Getting Started
//!
//! ```
//! use mood_quotes::{Catalog, Mood, SelectionController};
//!
//! let mut selection = SelectionController::new(Catalog::builtin());
//! assert_eq!(selection.selected_mood(), Mood::Happy);
//!
//! selection.select_mood(Mood::Motivated);
//! selection.advance_quote();
//!
//! let quote = selection.current_quote().unwrap();
//! assert_eq!(quote.author(), "Winston Churchill");
//! ```

#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod selection;
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogBuilder};
pub use config::{
    AppConfig, AppConfigBuilder, CliOverrides, OutputConfig, ShowConfig, TuiConfig,
};
pub use config::{ConfigError, Validatable};
pub use error::{CatalogErrorKind, MoodQuotesError, Result};
pub use model::{Mood, ParseMoodError, Quote};
pub use output::{OutputFormat, OutputTarget};
pub use selection::{
    MoodOption, QuotePosition, SelectionController, SelectionPhase, SelectionState, SelectionView,
};
pub use tui::{MoodApp, StatusMessage};
