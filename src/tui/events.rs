//! Event handling for the quote widget.

use super::app::MoodApp;
use crate::model::Mood;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Polls the terminal on a helper thread and forwards events to the UI loop.
///
/// The helper thread never touches application state; it only sends
/// [`Event`]s over the channel.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || {
            loop {
                let forwarded = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => event_tx.send(Event::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) => event_tx.send(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(w, h)) => event_tx.send(Event::Resize(w, h)),
                        _ => Ok(()),
                    }
                } else {
                    event_tx.send(Event::Tick)
                };
                if forwarded.is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle key events for the quote widget.
pub fn handle_key_event(app: &mut MoodApp<'_>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    app.status.clear();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => app.show_help = false,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(mood) = Mood::from_index(index) {
                app.select_mood(mood);
            }
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.selection.select_next_mood(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.selection.select_prev_mood();
        }
        KeyCode::Char('n' | ' ') | KeyCode::Enter => app.next_quote(),
        KeyCode::Char('y') => app.copy_current_quote(),
        KeyCode::Char('T') => app.cycle_theme(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

/// Handle mouse events for the quote widget.
pub fn handle_mouse_event(app: &mut MoodApp<'_>, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if app.show_help {
            app.show_help = false;
            return;
        }

        let (x, y) = (mouse.column, mouse.row);
        if let Some(mood) = app.mood_at(x, y) {
            app.status.clear();
            app.select_mood(mood);
        } else if app.in_quote_area(x, y) && app.selection.has_multiple_quotes() {
            app.status.clear();
            app.selection.advance_quote();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::Quote;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn current_id(app: &MoodApp<'_>) -> Option<u32> {
        app.selection.current_quote().map(Quote::id)
    }

    #[test]
    fn test_digit_selects_mood() {
        let mut app = MoodApp::new(Catalog::builtin());
        handle_key_event(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.selection.selected_mood(), Mood::Sad);
        assert_eq!(current_id(&app), Some(3));

        handle_key_event(&mut app, press(KeyCode::Char('5')));
        assert_eq!(app.selection.selected_mood(), Mood::Motivated);
    }

    #[test]
    fn test_digit_out_of_range_is_ignored() {
        let mut app = MoodApp::new(Catalog::builtin());
        handle_key_event(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.selection.selected_mood(), Mood::Happy);
    }

    #[test]
    fn test_next_quote_keys() {
        let mut app = MoodApp::new(Catalog::builtin());
        handle_key_event(&mut app, press(KeyCode::Char('n')));
        assert_eq!(current_id(&app), Some(2));
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(current_id(&app), Some(1));
        handle_key_event(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(current_id(&app), Some(2));
    }

    #[test]
    fn test_arrow_keys_cycle_moods_and_reset() {
        let mut app = MoodApp::new(Catalog::builtin());
        handle_key_event(&mut app, press(KeyCode::Char('n')));
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.selection.selected_mood(), Mood::Sad);
        assert_eq!(app.selection.current_index(), 0);

        handle_key_event(&mut app, press(KeyCode::Left));
        handle_key_event(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.selection.selected_mood(), Mood::Motivated);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = MoodApp::new(Catalog::builtin());
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = MoodApp::new(Catalog::builtin());
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = MoodApp::new(Catalog::builtin());
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);

        handle_key_event(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.selection.selected_mood(), Mood::Happy);

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_theme_key_reports_new_theme() {
        let mut app = MoodApp::new(Catalog::builtin());
        handle_key_event(&mut app, press(KeyCode::Char('T')));
        let status = app.status.peek().expect("theme change sets status");
        assert!(status.starts_with("Theme: "));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = MoodApp::new(Catalog::builtin());
        let release = KeyEvent {
            code: KeyCode::Char('2'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert_eq!(app.selection.selected_mood(), Mood::Happy);
    }

    #[test]
    fn test_click_mood_button_and_quote_panel() {
        let mut app = MoodApp::new(Catalog::builtin());
        app.mood_buttons = vec![
            (Mood::Happy, Rect::new(5, 3, 12, 1)),
            (Mood::Tired, Rect::new(20, 3, 12, 1)),
        ];
        app.quote_area = Rect::new(0, 5, 80, 8);

        handle_mouse_event(&mut app, click(21, 3));
        assert_eq!(app.selection.selected_mood(), Mood::Tired);
        assert_eq!(current_id(&app), Some(7));

        handle_mouse_event(&mut app, click(40, 8));
        assert_eq!(current_id(&app), Some(8));
    }

    #[test]
    fn test_mouse_disabled_ignores_clicks() {
        let mut app = MoodApp::new(Catalog::builtin());
        app.mouse_enabled = false;
        app.mood_buttons = vec![(Mood::Sad, Rect::new(0, 0, 10, 1))];
        handle_mouse_event(&mut app, click(1, 0));
        assert_eq!(app.selection.selected_mood(), Mood::Happy);
    }
}
