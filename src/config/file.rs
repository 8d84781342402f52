//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, CliOverrides};
use crate::error::{MoodQuotesError, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".mood-quotes.yaml",
    ".mood-quotes.yml",
    "mood-quotes.yaml",
    "mood-quotes.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/mood-quotes/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir()
        && let Some(path) = find_config_in_dir(&config_dir.join("mood-quotes"))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> std::result::Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Apply command-line settings over this config.
    ///
    /// Only flags that were actually given replace a value, so passing the
    /// default theme on the command line still overrides the file.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(theme) = &overrides.theme {
            self.tui.theme.clone_from(theme);
        }
        if let Some(enabled) = overrides.mouse_enabled {
            self.tui.mouse_enabled = enabled;
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &CliOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# mood-quotes configuration
# Place this file at .mood-quotes.yaml in your working directory
# or at ~/.config/mood-quotes/mood-quotes.yaml.
#
# CLI arguments always override file settings.

# TUI configuration
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  # Click mood buttons and the quote panel
  mouse_enabled: true
  # Idle redraw interval (16-5000 ms)
  tick_rate_ms: 250
  # Show key hints in the footer
  show_hints: true

# Output for show / moods / catalog
output:
  # Format: auto, text, json
  format: auto
  # Disable colored output
  no_color: false
"
    .to_string()
}

/// Write the example config to `path`, refusing to overwrite an existing file.
pub fn write_example_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(MoodQuotesError::config(format!(
            "{} already exists, not overwriting",
            path.display()
        )));
    }
    std::fs::write(path, generate_example_config()).map_err(|e| MoodQuotesError::io(path, e))?;
    tracing::info!("Wrote example config to {}", path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
