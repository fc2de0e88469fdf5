use serde::{Deserialize, Serialize};

use crate::{MatchConfig, Scores, Team};

/// Authoritative match state: scores, the locked-out team and the winner.
///
/// The value is `Copy`, so a capture of it is a complete snapshot for
/// undo/redo. Fields are private; the only way to move a state forward is
/// [`MatchState::penalize`], which keeps the lock-out and victory invariants:
///
/// - `locked` is only ever set to the lowest-scoring team, at the moment some
///   team first reaches the goal score.
/// - `winner` is only set while `locked` is set, and never equals it.
/// - Once `winner` is set the state is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatchState {
    scores: Scores,
    locked: Option<Team>,
    winner: Option<Team>,
}

/// A captured [`MatchState`] held on the undo or redo stack.
pub type Snapshot = MatchState;

impl MatchState {
    /// Fresh match: all scores zero, nobody locked, no winner.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scores: Scores::ZERO,
            locked: None,
            winner: None,
        }
    }

    #[must_use]
    pub const fn scores(&self) -> Scores {
        self.scores
    }

    #[must_use]
    pub const fn locked(&self) -> Option<Team> {
        self.locked
    }

    #[must_use]
    pub const fn winner(&self) -> Option<Team> {
        self.winner
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether a penalty against `team` would be accepted.
    #[must_use]
    pub fn can_penalize(&self, team: Team) -> bool {
        !self.is_finished() && self.locked != Some(team)
    }

    /// Charge a penalty against `team`.
    ///
    /// Every team other than `team` and the locked team gains one point. Then,
    /// on the updated scores:
    ///
    /// 1. if nobody is locked yet and any score reached the goal score, the
    ///    lowest team (earliest on ties) is locked out;
    /// 2. if a team is locked, the first remaining team in order that reached
    ///    the final score wins.
    ///
    /// Returns `None` when the penalty is not allowed (match over, or `team`
    /// is locked out).
    #[must_use]
    pub fn penalize(self, team: Team, config: &MatchConfig) -> Option<Self> {
        if !self.can_penalize(team) {
            return None;
        }

        let mut next = self;
        for other in Team::ALL {
            if other != team && Some(other) != self.locked {
                next.scores.increment(other);
            }
        }

        if next.locked.is_none() && next.scores.max() >= config.goal_score() {
            next.locked = Some(next.scores.lowest());
        }

        if let Some(locked) = next.locked
            && next.winner.is_none()
        {
            next.winner = Team::ALL
                .into_iter()
                .filter(|candidate| *candidate != locked)
                .find(|candidate| next.scores.get(*candidate) >= config.final_score());
        }

        Some(next)
    }
}
