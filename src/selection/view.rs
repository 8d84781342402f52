//! Derived, render-ready view of a selection.

use crate::model::{Mood, Quote};
use serde::Serialize;
use std::fmt;

/// Everything a renderer needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView<'a> {
    /// All moods in display order, with the selected one flagged
    pub moods: Vec<MoodOption>,
    pub selected_mood: Mood,
    /// `None` when the selected mood has no quotes
    pub quote: Option<&'a Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<QuotePosition>,
    /// More than one quote is available, so "next quote" should be offered
    pub can_advance: bool,
}

/// One mood button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodOption {
    pub mood: Mood,
    pub label: &'static str,
    pub selected: bool,
    pub quote_count: usize,
}

/// 1-based position of the displayed quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotePosition {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for QuotePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

impl SelectionView<'_> {
    /// Plain-text rendering used by the non-interactive `show` command.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let moods: Vec<String> = self
            .moods
            .iter()
            .map(|opt| {
                if opt.selected {
                    format!("[{}]", opt.label)
                } else {
                    opt.label.to_string()
                }
            })
            .collect();
        out.push_str(&moods.join("  "));
        out.push_str("\n\n");

        match self.quote {
            Some(quote) => {
                out.push_str(&format!("  \"{}\"\n", quote.text()));
                out.push_str(&format!("    — {}\n", quote.author()));
                if let Some(position) = self.position {
                    out.push_str(&format!("\n  Quote {position}"));
                    if self.can_advance {
                        out.push_str("  (next quote available)");
                    }
                    out.push('\n');
                }
            }
            None => out.push_str("  No quotes found for this mood.\n"),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(selected: Mood) -> Vec<MoodOption> {
        Mood::ALL
            .into_iter()
            .map(|mood| MoodOption {
                mood,
                label: mood.label(),
                selected: mood == selected,
                quote_count: 1,
            })
            .collect()
    }

    #[test]
    fn test_text_marks_selected_mood() {
        let quote = Quote::new(3, "This too shall pass.", "Persian Proverb");
        let view = SelectionView {
            moods: options(Mood::Sad),
            selected_mood: Mood::Sad,
            quote: Some(&quote),
            position: Some(QuotePosition { current: 1, total: 1 }),
            can_advance: false,
        };
        let text = view.to_text();
        assert!(text.contains("[Sad 😔]"));
        assert!(!text.contains("[Happy"));
        assert!(text.contains("\"This too shall pass.\""));
        assert!(text.contains("— Persian Proverb"));
        assert!(text.contains("Quote 1/1"));
        assert!(!text.contains("next quote available"));
    }

    #[test]
    fn test_text_empty_mood() {
        let view = SelectionView {
            moods: options(Mood::Tired),
            selected_mood: Mood::Tired,
            quote: None,
            position: None,
            can_advance: false,
        };
        assert!(view.to_text().contains("No quotes found for this mood."));
    }

    #[test]
    fn test_json_omits_position_when_empty() {
        let view = SelectionView {
            moods: options(Mood::Tired),
            selected_mood: Mood::Tired,
            quote: None,
            position: None,
            can_advance: false,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["selected_mood"], "tired");
        assert!(json["quote"].is_null());
        assert!(json.get("position").is_none());
    }
}
