//! Terminal setup, main loop and rendering for the quote widget.

use super::app::MoodApp;
use super::events::{Event, EventHandler, handle_key_event, handle_mouse_event};
use super::theme::{FooterHints, Styles, colors, render_footer_hints};
use super::widgets::{
    MIN_HEIGHT, MIN_WIDTH, check_terminal_size, mood_button_rects, mood_button_text,
    render_empty_state, render_popup, render_size_warning,
};
use crate::model::Mood;
use crate::selection::SelectionView;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{self, stdout};
use std::time::Duration;

/// Run the interactive TUI until the user quits.
pub fn run_tui(app: &mut MoodApp<'_>, tick_rate: Duration) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, tick_rate);
    let restored = restore_terminal(&mut terminal, app.mouse_enabled);

    result.and(restored)
}

/// Undo the terminal setup, running every step even if an earlier one fails.
fn restore_terminal<B: Backend + io::Write>(
    terminal: &mut Terminal<B>,
    mouse_enabled: bool,
) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = if mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
    };
    let cursor = terminal.show_cursor();

    raw.and(screen).and(cursor)
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut MoodApp<'_>,
    tick_rate: Duration,
) -> io::Result<()> {
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            tracing::debug!("Quit requested");
            return Ok(());
        }
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &mut MoodApp<'_>) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        app.mood_buttons.clear();
        app.quote_area = Rect::default();
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, mood bar, quote panel, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Mood bar
            Constraint::Min(8),    // Quote panel
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let view = app.selection.view();

    render_header(frame, chunks[0]);
    app.mood_buttons = render_mood_bar(frame, chunks[1], &view);
    app.quote_area = chunks[2];
    render_quote_panel(frame, chunks[2], &view);
    render_status_bar(frame, chunks[3], app, &view);
    if app.show_hints {
        render_footer(frame, chunks[4], &view);
    }

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header_line = Line::from(vec![
        Span::styled("mood-quotes", Styles::header_title()),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(
            "How are you feeling today?",
            Style::default().fg(colors().text).bold(),
        ),
    ]);

    frame.render_widget(Paragraph::new(header_line), area);
}

/// Draw the mood buttons and return where each one landed.
fn render_mood_bar(frame: &mut Frame, area: Rect, view: &SelectionView<'_>) -> Vec<(Mood, Rect)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(" Mood ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let moods: Vec<Mood> = view.moods.iter().map(|opt| opt.mood).collect();
    let rects = mood_button_rects(inner, &moods);

    for ((mood, rect), option) in rects.iter().zip(&view.moods) {
        let button = Paragraph::new(Span::styled(
            mood_button_text(*mood),
            Styles::mood_button(*mood, option.selected),
        ));
        frame.render_widget(button, *rect);
    }

    rects
}

fn render_quote_panel(frame: &mut Frame, area: Rect, view: &SelectionView<'_>) {
    let mood_color = colors().mood_color(view.selected_mood);
    let title = match view.position {
        Some(position) => format!(" {} · {} ", view.selected_mood.label(), position),
        None => format!(" {} ", view.selected_mood.label()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(mood_color))
        .title(title)
        .title_style(Style::default().fg(mood_color).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(quote) = view.quote else {
        render_empty_state(
            frame,
            inner,
            "No quotes found for this mood.",
            Some("Pick another mood with 1-5"),
        );
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(format!("\"{}\"", quote.text()), Styles::quote()),
        Line::from(""),
        Line::styled(format!("— {}", quote.author()), Styles::author()),
    ];
    if view.can_advance {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[n] ", Styles::shortcut_key()),
            Span::styled("Next Quote →", Style::default().fg(mood_color)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &MoodApp<'_>, view: &SelectionView<'_>) {
    let text = match (app.status.peek(), view.quote) {
        (Some(message), _) => {
            Span::styled(format!(" {message}"), Style::default().fg(colors().success))
        }
        (None, Some(quote)) => Span::styled(
            format!(
                " quote #{} · {} quotes for {}",
                quote.id(),
                view.position.map_or(0, |p| p.total),
                view.selected_mood
            ),
            Styles::text_muted(),
        ),
        (None, None) => Span::styled(
            format!(" no quotes for {}", view.selected_mood),
            Styles::text_muted(),
        ),
    };

    frame.render_widget(Paragraph::new(Line::from(text)).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &SelectionView<'_>) {
    let hints = FooterHints::for_selection(view.can_advance);
    frame.render_widget(Paragraph::new(Line::from(render_footer_hints(&hints))), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("{k:>10}  "), Styles::shortcut_key()),
            Span::styled(desc, Styles::shortcut_desc()),
        ])
    };

    let content = vec![
        Line::from(""),
        key("1-5", "select a mood"),
        key("←/→ h/l", "previous / next mood"),
        key("Tab", "next mood"),
        key("n Enter", "next quote (when there is more than one)"),
        key("y", "copy quote to clipboard"),
        key("T", "cycle theme"),
        key("?", "toggle this help"),
        key("q Esc", "quit"),
        Line::from(""),
        Line::styled(
            "  Click a mood to select it; click the quote for the next one.",
            Styles::text_muted(),
        ),
    ];

    render_popup(frame, area, "Help", content, 60, 60);
}
