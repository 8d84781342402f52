//! `moods` and `catalog` command handlers.

use super::exit_codes;
use crate::catalog::Catalog;
use crate::model::{Mood, Quote};
use crate::output::{OutputFormat, OutputTarget, resolve_format, write_output};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct MoodSummary {
    mood: Mood,
    label: &'static str,
    quote_count: usize,
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    mood: Mood,
    label: &'static str,
    quotes: &'a [Quote],
}

/// Run the moods command
pub fn run_moods(format: OutputFormat, output_file: Option<PathBuf>, quiet: bool) -> Result<i32> {
    let content = render_moods(Catalog::builtin(), format)?;
    write_output(&content, &OutputTarget::from_option(output_file), quiet)?;
    Ok(exit_codes::SUCCESS)
}

/// Run the catalog command
pub fn run_catalog(
    format: OutputFormat,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    let content = render_catalog(Catalog::builtin(), format)?;
    write_output(&content, &OutputTarget::from_option(output_file), quiet)?;
    Ok(exit_codes::SUCCESS)
}

/// List the moods with their labels and quote counts.
pub fn render_moods(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    let summaries: Vec<MoodSummary> = catalog
        .iter()
        .map(|(mood, quotes)| MoodSummary {
            mood,
            label: mood.label(),
            quote_count: quotes.len(),
        })
        .collect();

    if resolve_format(format) == OutputFormat::Json {
        return serde_json::to_string_pretty(&summaries).context("Failed to serialize moods");
    }

    let lines: Vec<String> = summaries
        .iter()
        .map(|s| {
            format!(
                "{}  {:<10} {:<14} {} {}",
                s.mood.index() + 1,
                s.mood.name(),
                s.label,
                s.quote_count,
                if s.quote_count == 1 { "quote" } else { "quotes" }
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Dump every quote grouped by mood.
pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    if resolve_format(format) == OutputFormat::Json {
        let entries: Vec<CatalogEntry<'_>> = catalog
            .iter()
            .map(|(mood, quotes)| CatalogEntry {
                mood,
                label: mood.label(),
                quotes,
            })
            .collect();
        return serde_json::to_string_pretty(&entries).context("Failed to serialize catalog");
    }

    let mut out = String::new();
    for (mood, quotes) in catalog.iter() {
        out.push_str(&format!("{}\n", mood.label()));
        if quotes.is_empty() {
            out.push_str("  (no quotes)\n");
        }
        for quote in quotes {
            out.push_str(&format!("  #{:<3} {quote}\n", quote.id()));
        }
        out.push('\n');
    }
    Ok(out.trim_end().to_string())
}
