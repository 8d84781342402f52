//! Configuration validation for mood-quotes.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::{MAX_TICK_RATE_MS, MIN_TICK_RATE_MS, VALID_THEMES};
use super::types::{AppConfig, OutputConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !VALID_THEMES.contains(&self.theme.to_lowercase().as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }

        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between {MIN_TICK_RATE_MS} and {MAX_TICK_RATE_MS} ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Every format/flag combination is meaningful.
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_theme_validation() {
        let mut config = TuiConfig::default();
        config.theme = "High-Contrast".to_string();
        assert!(config.is_valid());

        config.theme = "neon".to_string();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");
        assert!(errors[0].message.contains("neon"));
    }

    #[test]
    fn test_tick_rate_bounds() {
        let mut config = TuiConfig::default();
        config.tick_rate_ms = MIN_TICK_RATE_MS;
        assert!(config.is_valid());
        config.tick_rate_ms = MAX_TICK_RATE_MS + 1;
        assert!(!config.is_valid());
        config.tick_rate_ms = 0;
        assert_eq!(config.validate()[0].field, "tui.tick_rate_ms");
    }

    #[test]
    fn test_app_config_collects_nested_errors() {
        let config = AppConfig::builder().theme("sepia").tick_rate_ms(1).build();
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["tui.theme", "tui.tick_rate_ms"]);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError {
            field: "tui.theme".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "tui.theme: bad");
    }
}
