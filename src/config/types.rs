//! Configuration types for mood-quotes.

use super::defaults::{DEFAULT_THEME, DEFAULT_TICK_RATE_MS};
use crate::output::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI flags are merged over whatever the config file provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// Output configuration for the non-interactive commands
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the theme name.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    /// Enable or disable mouse support.
    pub const fn mouse_enabled(mut self, enabled: bool) -> Self {
        self.config.tui.mouse_enabled = enabled;
        self
    }

    /// Set the TUI tick rate.
    pub const fn tick_rate_ms(mut self, ms: u64) -> Self {
        self.config.tui.tick_rate_ms = ms;
        self
    }

    /// Show or hide the footer key hints.
    pub const fn show_hints(mut self, show: bool) -> Self {
        self.config.tui.show_hints = show;
        self
    }

    /// Set the default output format.
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Idle redraw interval in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
    /// Show key hints in the footer
    pub show_hints: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            mouse_enabled: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            show_hints: true,
        }
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output settings for `show`, `moods` and `catalog`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format when `-o` is not given
    pub format: OutputFormat,
    /// Disable colored output (also respects `NO_COLOR` env)
    pub no_color: bool,
}

/// Settings given on the command line.
///
/// `None` means the flag was not passed and the file value stays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub theme: Option<String>,
    pub mouse_enabled: Option<bool>,
    pub no_color: bool,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for the `show` command.
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    /// Mood to select after the session starts (the startup mood if unset)
    pub mood: Option<crate::model::Mood>,
    /// Number of "next quote" actions to apply
    pub advance: usize,
    pub output: OutputConfig,
    pub output_file: Option<std::path::PathBuf>,
    pub quiet: bool,
}
