//! Show command handler.
//!
//! Implements the `show` subcommand: run a selection session without a
//! terminal UI and print the resulting view.

use super::exit_codes;
use crate::catalog::Catalog;
use crate::config::ShowConfig;
use crate::output::{OutputFormat, OutputTarget, resolve_format, should_use_color, write_output};
use crate::selection::{SelectionController, SelectionView};
use anyhow::{Context, Result};
use crossterm::style::Stylize;

/// Run the show command
#[allow(clippy::needless_pass_by_value)]
pub fn run_show(config: ShowConfig) -> Result<i32> {
    let target = OutputTarget::from_option(config.output_file.clone());
    let color = should_use_color(config.output.no_color, config.output.format, &target);
    let content = render_show(Catalog::builtin(), &config, config.output.format, color)?;
    write_output(&content, &target, config.quiet)?;
    Ok(exit_codes::SUCCESS)
}

/// Build the output for `show` against `catalog`.
///
/// The session starts like the interactive one (first mood, first quote),
/// then applies the requested mood selection and "next quote" actions.
pub fn render_show(
    catalog: &Catalog,
    config: &ShowConfig,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    let mut selection = SelectionController::new(catalog);
    if let Some(mood) = config.mood {
        selection.select_mood(mood);
    }
    for _ in 0..config.advance {
        selection.advance_quote();
    }
    let view = selection.view();

    match resolve_format(format) {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&view).context("Failed to serialize selection to JSON")
        }
        _ if color => Ok(colored_text(&view)),
        _ => Ok(view.to_text()),
    }
}

fn colored_text(view: &SelectionView<'_>) -> String {
    let moods: Vec<String> = view
        .moods
        .iter()
        .map(|opt| {
            if opt.selected {
                format!(" {} ", opt.label).black().on_cyan().bold().to_string()
            } else {
                format!(" {} ", opt.label)
            }
        })
        .collect();

    let mut out = moods.join(" ");
    out.push_str("\n\n");
    match view.quote {
        Some(quote) => {
            out.push_str(&format!(
                "  {}\n",
                format!("\"{}\"", quote.text()).italic()
            ));
            out.push_str(&format!("    {}\n", format!("— {}", quote.author()).dark_grey()));
            if let Some(position) = view.position {
                let mut footer = format!("Quote {position}");
                if view.can_advance {
                    footer.push_str("  (next quote available)");
                }
                out.push_str(&format!("\n  {}\n", footer.dark_grey()));
            }
        }
        None => out.push_str(&format!(
            "  {}\n",
            "No quotes found for this mood.".dark_grey()
        )),
    }
    out
}
