//! Default values shared by the configuration types.

/// Theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "dark";

/// How often the TUI wakes up when no input arrives, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Accepted bounds for `tui.tick_rate_ms`.
pub const MIN_TICK_RATE_MS: u64 = 16;
pub const MAX_TICK_RATE_MS: u64 = 5_000;

/// Theme names accepted in config files and on the command line.
pub const VALID_THEMES: &[&str] = &["dark", "light", "high-contrast"];
