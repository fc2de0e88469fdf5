use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Team;

/// Per-team scores, indexed by [`Team`].
///
/// Scores are unsigned, so they can never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores([u32; 3]);

impl Scores {
    pub const ZERO: Scores = Scores([0; 3]);

    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self([a, b, c])
    }

    #[must_use]
    pub const fn get(&self, team: Team) -> u32 {
        self.0[team.index()]
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.0.into_iter().max().unwrap_or(0)
    }

    /// The team with the strictly smallest score.
    ///
    /// Ties go to the earliest team in [`Team::ALL`]: a later team only
    /// replaces the current minimum when its score is strictly lower.
    #[must_use]
    pub fn lowest(&self) -> Team {
        let mut lowest = Team::A;
        for team in Team::ALL {
            if self.get(team) < self.get(lowest) {
                lowest = team;
            }
        }
        lowest
    }

    pub(crate) fn increment(&mut self, team: Team) {
        let slot = &mut self.0[team.index()];
        *slot = slot.saturating_add(1);
    }
}

impl Index<Team> for Scores {
    type Output = u32;

    fn index(&self, team: Team) -> &Self::Output {
        &self.0[team.index()]
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "A={a} B={b} C={c}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchConfigError {
    #[error("goal score must be positive")]
    ZeroGoalScore,
    #[error("final score must be positive")]
    ZeroFinalScore,
}

/// Validated thresholds for one match.
///
/// Invariant: both thresholds are positive. `final_score` is conventionally
/// above `goal_score` but that is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    goal_score: u32,
    final_score: u32,
}

impl MatchConfig {
    pub const DEFAULT_GOAL_SCORE: u32 = 10;
    /// Gap between the goal and final scores when no final score is given.
    pub const FINAL_SCORE_MARGIN: u32 = 5;

    pub fn new(goal_score: u32, final_score: u32) -> Result<Self, MatchConfigError> {
        if goal_score == 0 {
            return Err(MatchConfigError::ZeroGoalScore);
        }
        if final_score == 0 {
            return Err(MatchConfigError::ZeroFinalScore);
        }
        Ok(Self {
            goal_score,
            final_score,
        })
    }

    /// Config whose final score is `goal_score + FINAL_SCORE_MARGIN`.
    pub fn with_goal(goal_score: u32) -> Result<Self, MatchConfigError> {
        Self::new(
            goal_score,
            goal_score.saturating_add(Self::FINAL_SCORE_MARGIN),
        )
    }

    /// Score at which the lowest team is locked out.
    #[must_use]
    pub const fn goal_score(&self) -> u32 {
        self.goal_score
    }

    /// Score at which a team still in play wins.
    #[must_use]
    pub const fn final_score(&self) -> u32 {
        self.final_score
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            goal_score: Self::DEFAULT_GOAL_SCORE,
            final_score: Self::DEFAULT_GOAL_SCORE + Self::FINAL_SCORE_MARGIN,
        }
    }
}
