//! The score engine: match state, history and the win flash in one owner.

use std::time::Duration;

use tracing::{debug, info};

use kinball_types::{MatchConfig, MatchSetup, MatchState, Scores, Team, TeamNames};

use crate::{FlashCue, History};

/// Owns one match from setup to reset.
///
/// All mutation goes through [`apply_penalty`](Self::apply_penalty),
/// [`undo`](Self::undo), [`redo`](Self::redo) and [`reset`](Self::reset).
/// Each returns the resulting state. Rejected actions are no-ops that return
/// the unchanged state; callers can compare before and after to detect them.
#[derive(Debug)]
pub struct ScoreEngine {
    names: TeamNames,
    config: MatchConfig,
    flash_interval: Duration,
    state: MatchState,
    history: History,
    flash: Option<FlashCue>,
}

impl ScoreEngine {
    #[must_use]
    pub fn new(setup: MatchSetup) -> Self {
        let (names, config, flash_interval) = setup.into_parts();
        info!(
            goal_score = config.goal_score(),
            final_score = config.final_score(),
            "Match initialized"
        );
        Self {
            names,
            config,
            flash_interval,
            state: MatchState::new(),
            history: History::new(),
            flash: None,
        }
    }

    /// Charge a penalty against `team`: every other eligible team scores.
    ///
    /// Ignored when the match is over or `team` is locked out; in that case
    /// nothing is recorded in history.
    pub fn apply_penalty(&mut self, team: Team) -> MatchState {
        let before = self.state;
        let Some(next) = before.penalize(team, &self.config) else {
            debug!(%team, "Penalty ignored");
            return self.state;
        };

        self.history.record(before);
        self.state = next;
        debug!(%team, scores = %next.scores(), "Penalty applied");

        if before.locked().is_none()
            && let Some(locked) = next.locked()
        {
            info!(%locked, scores = %next.scores(), "Team locked out");
        }

        if before.winner().is_none()
            && let Some(winner) = next.winner()
        {
            info!(%winner, scores = %next.scores(), "Match won");
            self.flash = Some(FlashCue::new(winner, self.flash_interval));
        }

        self.state
    }

    /// Restore the state before the most recent penalty.
    pub fn undo(&mut self) -> MatchState {
        let Some(previous) = self.history.undo(self.state) else {
            debug!("Nothing to undo");
            return self.state;
        };
        self.state = previous;
        self.cancel_flash();
        debug!(scores = %self.state.scores(), "Undo");
        self.state
    }

    /// Re-apply the most recently undone state.
    pub fn redo(&mut self) -> MatchState {
        let Some(next) = self.history.redo(self.state) else {
            debug!("Nothing to redo");
            return self.state;
        };
        self.state = next;
        self.cancel_flash();
        debug!(scores = %self.state.scores(), "Redo");
        self.state
    }

    /// Start the match over. Confirmation is the caller's job.
    pub fn reset(&mut self) -> MatchState {
        self.state = MatchState::new();
        self.history.clear();
        self.cancel_flash();
        info!("Match reset");
        self.state
    }

    /// Advance the flash cue by one frame. A finished cue is released.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(cue) = &mut self.flash {
            cue.advance(delta);
            if cue.is_finished() {
                debug!(team = %cue.team(), "Win flash finished");
                self.flash = None;
            }
        }
    }

    /// Stop the flash cue. Returns whether one was running.
    pub fn cancel_flash(&mut self) -> bool {
        self.flash.take().is_some()
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[must_use]
    pub fn scores(&self) -> Scores {
        self.state.scores()
    }

    #[must_use]
    pub fn locked(&self) -> Option<Team> {
        self.state.locked()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.state.winner()
    }

    /// Team whose box should be highlighted this frame.
    #[must_use]
    pub fn flash_signal(&self) -> Option<Team> {
        self.flash.as_ref().and_then(FlashCue::signal)
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    /// Whether the penalty button for `team` should be enabled.
    #[must_use]
    pub fn can_penalize(&self, team: Team) -> bool {
        self.state.can_penalize(team)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn names(&self) -> &TeamNames {
        &self.names
    }
}
