//! TUI application state and logic

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::catalog::Industry;
use crate::core::Submission;
use crate::session::{Mode, Screen, Session};

/// Poll timeout for the event loop; a timeout is the display-refresh tick
/// that keeps the live timer current.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub menu_cursor: usize,
    pub message: Option<Message>,
    pub share_visible: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            menu_cursor: 0,
            message: None,
            share_visible: false,
            should_quit: false,
        }
    }

    fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }

    /// Reset per-screen UI state after a screen transition
    fn clear_transients(&mut self) {
        self.input_buffer.clear();
        self.menu_cursor = 0;
        self.message = None;
        self.share_visible = false;
    }

    /// Dispatch a key press to the current screen's handler
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.screen() {
            Screen::Home => self.handle_home_key(key.code),
            Screen::ModeSelect => self.handle_mode_key(key.code),
            Screen::Playing => self.handle_playing_key(key.code),
            Screen::Result => self.handle_result_key(key.code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_cursor = (self.menu_cursor + 1).min(Industry::ALL.len() - 1);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.session.select_industry(Industry::ALL[index]);
                self.clear_transients();
            }
            KeyCode::Enter => {
                self.session.select_industry(Industry::ALL[self.menu_cursor]);
                self.clear_transients();
            }
            _ => {}
        }
    }

    fn handle_mode_key(&mut self, code: KeyCode) {
        let mode = match code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.session.back();
                self.clear_transients();
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = 0;
                return;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_cursor = 1;
                return;
            }
            KeyCode::Char('d') => Mode::Daily,
            KeyCode::Char('i') => Mode::Infinite,
            KeyCode::Enter => {
                if self.menu_cursor == 0 {
                    Mode::Daily
                } else {
                    Mode::Infinite
                }
            }
            _ => return,
        };

        if self.session.select_mode(mode) {
            self.clear_transients();
        } else {
            self.set_message(
                "Daily already completed — come back tomorrow!",
                MessageStyle::Error,
            );
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.session.back();
                self.clear_transients();
            }
            KeyCode::Tab => {
                self.session.skip();
                self.clear_transients();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_current_guess(),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('p') | KeyCode::Enter => {
                self.session.play_again();
                self.clear_transients();
            }
            KeyCode::Char('h') | KeyCode::Esc => {
                self.session.go_home();
                self.clear_transients();
            }
            KeyCode::Char('s') => {
                self.share_visible = !self.share_visible;
            }
            _ => {}
        }
    }

    fn submit_current_guess(&mut self) {
        let guess = self.input_buffer.trim().to_string();
        if guess.is_empty() {
            // Submit is disabled for empty input.
            self.set_message("Type a guess first!", MessageStyle::Error);
            return;
        }

        match self.session.submit_guess(&guess) {
            Submission::Wrong { close: true } => {
                self.input_buffer.clear();
                self.set_message("🔥 So close! Not quite the title.", MessageStyle::Info);
            }
            Submission::Wrong { close: false } => {
                self.input_buffer.clear();
                self.set_message("❌ Not it — here comes a hint.", MessageStyle::Error);
            }
            Submission::Won | Submission::Lost => self.clear_transients(),
            Submission::Ignored => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // A poll timeout is a tick: the redraw above refreshes the live
        // timer even when no key arrives.
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn app() -> App {
        App::new(Session::new(Catalog::embedded()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn digit_selects_industry_from_home() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.screen(), Screen::ModeSelect);
        assert_eq!(app.session.industry(), Some(Industry::Bollywood));
    }

    #[test]
    fn cursor_and_enter_select_industry() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.industry(), Some(Industry::Tollywood));
    }

    #[test]
    fn cursor_clamps_at_menu_edges() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.menu_cursor, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.menu_cursor, Industry::ALL.len() - 1);
    }

    #[test]
    fn typing_and_submitting_a_guess() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('i'));

        for c in "wrong".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "wrong");
        press(&mut app, KeyCode::Enter);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.round().unwrap().attempts_used(), 1);
        assert!(app.message.is_some());
    }

    #[test]
    fn empty_submit_is_rejected_with_message() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.round().unwrap().attempts_used(), 0);
        assert_eq!(app.message.as_ref().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn tab_skips_to_result() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.screen(), Screen::Result);
    }

    #[test]
    fn locked_daily_shows_error_message() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Tab); // lose the daily
        press(&mut app, KeyCode::Char('p')); // back to mode select
        press(&mut app, KeyCode::Char('d')); // locked now
        assert_eq!(app.session.screen(), Screen::ModeSelect);
        assert_eq!(app.message.as_ref().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn escape_backs_out_of_round() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.screen(), Screen::ModeSelect);
        assert!(app.session.round().is_none());
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn share_panel_toggles_on_result_screen() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.share_visible);
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.share_visible);
    }
}
