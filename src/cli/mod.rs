//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the logic for one subcommand; the `render_*`
//! functions build the output without touching stdout.

mod catalog;
mod interactive;
mod show;

pub use catalog::{render_catalog, render_moods, run_catalog, run_moods};
pub use interactive::run_interactive;
pub use show::{render_show, run_show};

/// Process exit codes
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Turn a command result into the process exit code, printing any error.
pub fn exit_code(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    }
}
