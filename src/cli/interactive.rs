//! Interactive (TUI) command handler.

use super::exit_codes;
use crate::catalog::Catalog;
use crate::config::{AppConfig, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS, ShowConfig};
use crate::output::OutputTarget;
use crate::tui::{MoodApp, Theme, run_tui, set_theme};
use anyhow::{Context, Result};
use std::time::Duration;

/// Run the interactive quote widget.
///
/// Falls back to the plain `show` output when stdout is not a terminal.
pub fn run_interactive(config: &AppConfig) -> Result<i32> {
    if !OutputTarget::Stdout.is_terminal() {
        tracing::warn!("stdout is not a terminal; printing the startup quote instead");
        return super::run_show(ShowConfig {
            output: config.output.clone(),
            ..ShowConfig::default()
        });
    }

    set_theme(Theme::from_name(&config.tui.theme));

    let mut app = MoodApp::with_config(Catalog::builtin(), &config.tui);
    tracing::debug!(
        theme = %config.tui.theme,
        mouse = config.tui.mouse_enabled,
        "Starting TUI"
    );
    let tick_rate = config
        .tui
        .tick_rate_ms
        .clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS);
    run_tui(&mut app, Duration::from_millis(tick_rate)).context("Failed to run TUI")?;

    Ok(exit_codes::SUCCESS)
}
