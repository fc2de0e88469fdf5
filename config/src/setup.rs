//! Match setup answers and their resolution into a [`MatchSetup`].
//!
//! Answers come from two places: the config file seeds them, then the setup
//! prompts may override them. A blank prompt answer keeps the seeded value;
//! an answer that is not a positive number clears it so the built-in default
//! applies.

use std::time::Duration;

use tracing::warn;

use kinball_types::{MatchConfig, MatchSetup, Team, TeamNames};

use crate::KinballConfig;

/// Parse a threshold the way a lenient number field would: leading digits
/// after an optional `+`, trailing junk ignored. Zero, negative and
/// non-numeric input yield `None`.
#[must_use]
pub fn parse_threshold(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse::<u32>().ok().filter(|value| *value > 0)
}

fn positive(value: Option<i64>, field: &str) -> Option<u32> {
    let value = value?;
    match u32::try_from(value) {
        Ok(value) if value > 0 => Some(value),
        _ => {
            warn!(field, value, "Ignoring non-positive threshold in config");
            None
        }
    }
}

/// Unresolved setup: any field may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupAnswers {
    pub names: [Option<String>; 3],
    pub goal_score: Option<u32>,
    pub final_score: Option<u32>,
}

impl SetupAnswers {
    /// Seed answers from the config file.
    #[must_use]
    pub fn from_config(config: &KinballConfig) -> Self {
        let mut answers = Self::default();
        if let Some(teams) = &config.teams {
            for team in Team::ALL {
                if let Some(name) = teams.name(team) {
                    answers.answer_name(team, name);
                }
            }
        }
        if let Some(rules) = &config.rules {
            answers.goal_score = positive(rules.goal_score, "goal_score");
            answers.final_score = positive(rules.final_score, "final_score");
        }
        answers
    }

    #[must_use]
    pub fn name(&self, team: Team) -> Option<&str> {
        self.names[team.index()].as_deref()
    }

    /// Record a name answer. Blank answers keep the current value.
    pub fn answer_name(&mut self, team: Team, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.names[team.index()] = Some(trimmed.to_string());
        }
    }

    /// Record a goal score answer.
    pub fn answer_goal_score(&mut self, raw: &str) {
        Self::answer_threshold(&mut self.goal_score, raw, "goal score");
    }

    /// Record a final score answer.
    pub fn answer_final_score(&mut self, raw: &str) {
        Self::answer_threshold(&mut self.final_score, raw, "final score");
    }

    fn answer_threshold(slot: &mut Option<u32>, raw: &str, label: &str) {
        if raw.trim().is_empty() {
            return;
        }
        *slot = parse_threshold(raw);
        if slot.is_none() {
            warn!(answer = raw.trim(), "Invalid {label}, using default");
        }
    }

    /// The goal score this setup will use.
    #[must_use]
    pub fn effective_goal_score(&self) -> u32 {
        self.goal_score.unwrap_or(MatchConfig::DEFAULT_GOAL_SCORE)
    }

    /// The final score this setup will use.
    #[must_use]
    pub fn effective_final_score(&self) -> u32 {
        self.final_score.unwrap_or_else(|| {
            self.effective_goal_score()
                .saturating_add(MatchConfig::FINAL_SCORE_MARGIN)
        })
    }

    /// Apply defaults: unnamed teams get `Team X`, a missing goal score is
    /// 10, a missing final score is the goal score plus 5.
    #[must_use]
    pub fn resolve(self, flash_interval: Duration) -> MatchSetup {
        let goal = self.effective_goal_score();
        let last = self.effective_final_score();
        if last <= goal {
            warn!(
                goal_score = goal,
                final_score = last,
                "Final score does not exceed goal score"
            );
        }
        let config = MatchConfig::new(goal, last).unwrap_or_else(|err| {
            warn!(%err, "Invalid thresholds, using defaults");
            MatchConfig::default()
        });
        MatchSetup::new(TeamNames::new(self.names), config).with_flash_interval(flash_interval)
    }
}
