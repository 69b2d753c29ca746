//! Application state and key handling.

use crate::{OutcomeAlert, Scoreboard, ShellConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use kodeco_tictactoe::{Game, GameError, GameOutcome, GameRng, Player, Position};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

use super::input::{keypad_position, move_cursor};

/// Top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Tab {
    /// The board.
    Play,
    /// The scoreboard.
    Stats,
}

impl Tab {
    /// The other tab.
    pub fn toggle(self) -> Self {
        match self {
            Tab::Play => Tab::Stats,
            Tab::Stats => Tab::Play,
        }
    }

    /// Position of this tab in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Tab::Play => 0,
            Tab::Stats => 1,
        }
    }
}

/// Main application state.
///
/// Owns the game, the random source and the scoreboard. The event loop
/// feeds it key presses through [`App::handle_key`] and the clock through
/// [`App::tick`]; the computer's reply is applied by `tick` once its
/// delay has passed.
#[derive(Debug)]
pub struct App {
    game: Game,
    rng: GameRng,
    cursor: Position,
    tab: Tab,
    status: String,
    alert: Option<OutcomeAlert>,
    reply_due: Option<Instant>,
    delay: Duration,
    scoreboard: Scoreboard,
    should_quit: bool,
}

impl App {
    /// Creates the application from the shell configuration.
    #[instrument(skip(config))]
    pub fn new(config: &ShellConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_random(),
        };
        info!(seed = rng.seed(), first_player = %config.first_player(), "Starting session");

        let mut app = Self {
            game: Game::new(Player::from(*config.first_player())),
            rng,
            cursor: Position::CENTER,
            tab: Tab::Play,
            status: String::new(),
            alert: None,
            reply_due: None,
            delay: config.computer_delay(),
            scoreboard: Scoreboard::new(),
            should_quit: false,
        };
        app.start_turn();
        app
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the active tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Returns the status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the end-of-game alert, if one is showing.
    pub fn alert(&self) -> Option<&OutcomeAlert> {
        self.alert.as_ref()
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns true while the computer's reply is pending.
    pub fn is_awaiting_computer(&self) -> bool {
        self.reply_due.is_some()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code, tab = %self.tab))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.tab = self.tab.toggle();
                debug!(tab = %self.tab, "Switched tab");
                return;
            }
            _ => {}
        }

        if self.tab != Tab::Play {
            return;
        }

        if self.alert.is_some() {
            if key.code == KeyCode::Enter {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            code => {
                if let Some(position) = keypad_position(code) {
                    self.cursor = position;
                    self.select(position);
                }
            }
        }
    }

    /// Plays the human's mark at `position`.
    ///
    /// Ignored while the computer is thinking. An occupied cell is refused
    /// with a status message and the human keeps the turn.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) {
        if self.is_awaiting_computer() {
            debug!("Input ignored while the computer is thinking");
            return;
        }

        match self.game.play_human(position) {
            Ok(report) => {
                if report.outcome.is_over() {
                    self.finish(report.outcome);
                } else {
                    self.start_turn();
                }
            }
            Err(GameError::IllegalMove(e)) => {
                self.status = format!("{}. Pick another cell.", e);
            }
            Err(e) => {
                warn!(error = %e, "Human move refused");
                self.status = e.to_string();
            }
        }
    }

    /// Applies the computer's reply once it is due.
    #[instrument(skip(self))]
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.reply_due else {
            return;
        };
        if now < due {
            return;
        }
        self.reply_due = None;

        match self.game.play_computer(&mut self.rng) {
            Ok((decision, report)) => {
                debug!(tier = %decision.tier, "Computer reply applied");
                if report.outcome.is_over() {
                    self.finish(report.outcome);
                } else {
                    self.status = format!(
                        "Computer played {}. Your move.",
                        report.position.label()
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "Computer reply failed");
                self.status = e.to_string();
            }
        }
    }

    /// Closes the alert and starts a fresh game.
    #[instrument(skip(self))]
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.game.reset();
        self.cursor = Position::CENTER;
        info!("New game");
        self.start_turn();
    }

    fn start_turn(&mut self) {
        match self.game.to_move() {
            Player::Human => {
                self.status = "Your move.".to_string();
            }
            Player::Computer => {
                self.reply_due = Some(Instant::now() + self.delay);
                self.status = "Computer is thinking...".to_string();
            }
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        info!(%outcome, "Game over");
        self.scoreboard.record(outcome);
        self.alert = OutcomeAlert::for_outcome(outcome);
        self.status = outcome.to_string();
    }
}
