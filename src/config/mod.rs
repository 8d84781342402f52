//! Configuration module for mood-quotes.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.mood-quotes.yaml` file in your working directory or
//! `~/.config/mood-quotes/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//!   mouse_enabled: false
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_THEME, DEFAULT_TICK_RATE_MS, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS, VALID_THEMES,
};
pub use types::{
    AppConfig, AppConfigBuilder, CliOverrides, OutputConfig, ShowConfig, TuiConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_example_config,
    load_config_file, load_or_default, write_example_config,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.mood-quotes.yaml`.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::error::MoodQuotesError::config(format!("schema serialization: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"tui\""));
        assert!(schema.contains("\"output\""));
        assert!(schema.contains("tick_rate_ms"));
    }
}
