//! Layout helpers and small reusable widgets for the TUI.

use crate::model::Mood;
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 16;

/// Horizontal gap between two mood buttons.
const BUTTON_GAP: u16 = 1;

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Text drawn on a mood button, e.g. ` 2 Sad 😔 `.
pub fn mood_button_text(mood: Mood) -> String {
    format!(" {} {} ", mood.index() + 1, mood.label())
}

/// Lay the mood buttons out left to right inside `area`, centered.
///
/// Buttons that would start past the right edge are dropped and the last
/// visible one is clipped, so every returned rect lies within `area`.
pub fn mood_button_rects(area: Rect, moods: &[Mood]) -> Vec<(Mood, Rect)> {
    let widths: Vec<u16> = moods
        .iter()
        .map(|m| u16::try_from(mood_button_text(*m).width()).unwrap_or(u16::MAX))
        .collect();
    let gaps = BUTTON_GAP.saturating_mul(u16::try_from(moods.len().saturating_sub(1)).unwrap_or(0));
    let total = widths
        .iter()
        .fold(gaps, |acc, w| acc.saturating_add(*w));

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let right = area.x.saturating_add(area.width);
    let mut rects = Vec::with_capacity(moods.len());

    for (mood, width) in moods.iter().zip(widths) {
        if x >= right {
            break;
        }
        let clipped = width.min(right - x);
        rects.push((*mood, Rect::new(x, area.y, clipped, area.height.min(1))));
        x = x.saturating_add(width).saturating_add(BUTTON_GAP);
    }

    rects
}

/// Whether the terminal cell `(column, row)` falls inside `rect`.
pub const fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled("☹", Style::default().fg(scheme.muted)),
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render a popup overlay.
pub fn render_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
) {
    let border_color = colors().primary;
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
