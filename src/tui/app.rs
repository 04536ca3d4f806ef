//! Application state: which screen is up, the cursor, and the session.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use std::time::Duration;
use strum::IntoEnumIterator;
use tic_tac_toe::{GameMode, Position, SessionController};
use tracing::{debug, info};

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode selection.
    Menu,
    /// A game in progress or just finished.
    Playing,
}

/// Whether the main loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the main loop.
    Quit,
}

/// Main application state.
pub struct App {
    screen: Screen,
    session: SessionController,
    cursor: Position,
    menu_choice: GameMode,
}

impl App {
    /// Creates the application; with `start_mode` set the menu is skipped.
    pub fn new(session: SessionController, start_mode: Option<GameMode>) -> Self {
        let mut app = Self {
            screen: Screen::Menu,
            menu_choice: session.mode(),
            session,
            cursor: Position::Center,
        };
        if let Some(mode) = start_mode {
            app.start(mode);
        }
        app
    }

    /// Gets the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the session.
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the highlighted menu entry.
    pub fn menu_choice(&self) -> GameMode {
        self.menu_choice
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        if key == KeyCode::Char('q') {
            info!("User quit");
            return Flow::Quit;
        }
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
        Flow::Continue
    }

    /// Feeds elapsed time to the session.
    pub fn tick(&mut self, delta: Duration) {
        self.session.advance(delta);
    }

    /// One-line status for the current session.
    pub fn status_line(&self) -> String {
        let session = &self.session;
        if let Some(outcome) = session.status().outcome() {
            return outcome.to_string();
        }
        if !session.is_opponent_turn() {
            return format!("Turn of {}", session.current_player());
        }
        if session.pending_move().is_some() {
            "Computer is thinking...".to_string()
        } else {
            "Computer's turn...".to_string()
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down => {
                self.menu_choice = GameMode::iter()
                    .find(|mode| *mode != self.menu_choice)
                    .unwrap_or(self.menu_choice);
            }
            KeyCode::Enter => self.start(self.menu_choice),
            KeyCode::Char('1') => self.start(GameMode::HumanVsHuman),
            KeyCode::Char('2') => self.start(GameMode::HumanVsOpponent),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                debug!("Restarting game");
                self.session.reset_session();
            }
            KeyCode::Esc => {
                debug!("Back to menu");
                self.session.reset_session();
                self.screen = Screen::Menu;
            }
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            _ => {}
        }
    }

    fn place(&mut self, pos: Position) {
        self.session.submit_move(pos.row(), pos.col());
    }

    fn start(&mut self, mode: GameMode) {
        self.menu_choice = mode;
        self.session.start_session(mode);
        self.cursor = Position::Center;
        self.screen = Screen::Playing;
    }
}
