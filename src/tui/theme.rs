//! Centralized theme and color scheme for the TUI.
//!
//! This module provides consistent styling across all TUI widgets.

use crate::model::Mood;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Mood colors
    pub happy: Color,
    pub sad: Color,
    pub stressed: Color,
    pub tired: Color,
    pub motivated: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub quote: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,

    // Badge foreground for text on colored backgrounds
    pub badge_fg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            happy: Color::Yellow,
            sad: Color::Blue,
            stressed: Color::Red,
            tired: Color::Magenta,
            motivated: Color::Green,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            quote: Color::Rgb(220, 220, 230),

            success: Color::Green,
            warning: Color::Yellow,

            badge_fg: Color::Black,
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            happy: Color::Rgb(180, 140, 0),
            sad: Color::Rgb(0, 0, 200),
            stressed: Color::Rgb(200, 0, 0),
            tired: Color::Rgb(128, 0, 128),
            motivated: Color::Rgb(0, 128, 0),

            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            quote: Color::Rgb(60, 60, 60),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),

            badge_fg: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            happy: Color::LightYellow,
            sad: Color::LightBlue,
            stressed: Color::LightRed,
            tired: Color::LightMagenta,
            motivated: Color::LightGreen,

            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            quote: Color::White,

            success: Color::LightGreen,
            warning: Color::LightYellow,

            badge_fg: Color::Black,
        }
    }

    /// Get color for a mood
    pub const fn mood_color(&self, mood: Mood) -> Color {
        match mood {
            Mood::Happy => self.happy,
            Mood::Sad => self.sad,
            Mood::Stressed => self.stressed,
            Mood::Tired => self.tired,
            Mood::Motivated => self.motivated,
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Named color scheme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Quote body style
    pub fn quote() -> Style {
        Style::default().fg(colors().quote).italic()
    }

    /// Author attribution style
    pub fn author() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Mood button style; the selected mood is filled with its color
    pub fn mood_button(mood: Mood, selected: bool) -> Style {
        let scheme = colors();
        let color = scheme.mood_color(mood);
        if selected {
            Style::default().fg(scheme.badge_fg).bg(color).bold()
        } else {
            Style::default().fg(color)
        }
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Footer key hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for the current selection. The next-quote hint only appears
    /// when there is another quote to show.
    pub fn for_selection(can_advance: bool) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();
        if can_advance {
            hints.insert(0, ("n", "next quote"));
        }
        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1-5", "mood"),
            ("←→", "switch"),
            ("y", "copy"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
