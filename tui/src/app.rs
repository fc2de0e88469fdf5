//! Scoreboard UI state: the engine plus the reset confirmation modal.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use kinball_core::ScoreEngine;
use kinball_types::{Team, UiOptions};

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Scoring,
    /// Reset was requested and waits for a yes/no answer.
    ConfirmReset,
}

/// A user intent, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Penalty(Team),
    Undo,
    Redo,
    RequestReset,
    ConfirmReset,
    CancelReset,
    Quit,
}

impl Action {
    /// Map a key press to an action for the given mode.
    ///
    /// `Ctrl+C` quits from anywhere. While the reset modal is open only `y`
    /// confirms; `n` and `Esc` cancel; every other key is ignored.
    #[must_use]
    pub fn from_key(mode: Mode, key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
        }

        match mode {
            Mode::Scoring => match key.code {
                KeyCode::Char('1') => Some(Action::Penalty(Team::A)),
                KeyCode::Char('2') => Some(Action::Penalty(Team::B)),
                KeyCode::Char('3') => Some(Action::Penalty(Team::C)),
                KeyCode::Char('u' | 'U') => Some(Action::Undo),
                KeyCode::Char('r' | 'R') => Some(Action::Redo),
                KeyCode::Char('x' | 'X') => Some(Action::RequestReset),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            Mode::ConfirmReset => match key.code {
                KeyCode::Char('y' | 'Y') => Some(Action::ConfirmReset),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CancelReset),
                _ => None,
            },
        }
    }
}

/// Key that charges a penalty against `team`.
#[must_use]
pub fn penalty_key(team: Team) -> char {
    match team {
        Team::A => '1',
        Team::B => '2',
        Team::C => '3',
    }
}

/// The presentation-side owner of a match.
#[derive(Debug)]
pub struct Scoreboard {
    engine: ScoreEngine,
    options: UiOptions,
    mode: Mode,
    should_quit: bool,
}

impl Scoreboard {
    #[must_use]
    pub fn new(engine: ScoreEngine, options: UiOptions) -> Self {
        Self {
            engine,
            options,
            mode: Mode::Scoring,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = Action::from_key(self.mode, key) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: Action) {
        debug!(?action, mode = ?self.mode, "Scoreboard action");
        match action {
            Action::Penalty(team) => {
                self.engine.apply_penalty(team);
            }
            Action::Undo => {
                self.engine.undo();
            }
            Action::Redo => {
                self.engine.redo();
            }
            Action::RequestReset => self.mode = Mode::ConfirmReset,
            Action::ConfirmReset => {
                if self.mode == Mode::ConfirmReset {
                    self.engine.reset();
                }
                self.mode = Mode::Scoring;
            }
            Action::CancelReset => self.mode = Mode::Scoring,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Advance time-driven state (the win flash) by one frame.
    pub fn tick(&mut self, delta: Duration) {
        self.engine.tick(delta);
    }
}
