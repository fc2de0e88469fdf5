use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// One of the three teams on the court.
///
/// The declaration order is the fixed team order used for every tie-break:
/// `A` before `B` before `C`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Team {
    A,
    B,
    C,
}

impl Team {
    /// All teams in tie-break order.
    pub const ALL: [Team; 3] = [Team::A, Team::B, Team::C];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Team::A => 0,
            Team::B => 1,
            Team::C => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
            Team::C => "C",
        }
    }

    /// Name shown when setup leaves a team unnamed.
    #[must_use]
    pub fn default_name(self) -> String {
        format!("Team {}", self.as_str())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display names for the three teams, fixed once the match is set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamNames([String; 3]);

impl TeamNames {
    /// Build names from optional answers; blank or missing answers fall back
    /// to [`Team::default_name`].
    #[must_use]
    pub fn new(names: [Option<String>; 3]) -> Self {
        let [a, b, c] = names;
        Self([
            Self::or_default(a, Team::A),
            Self::or_default(b, Team::B),
            Self::or_default(c, Team::C),
        ])
    }

    fn or_default(name: Option<String>, team: Team) -> String {
        match name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => team.default_name(),
        }
    }

    #[must_use]
    pub fn get(&self, team: Team) -> &str {
        &self.0[team.index()]
    }
}

impl Default for TeamNames {
    fn default() -> Self {
        Self::new([None, None, None])
    }
}

impl Index<Team> for TeamNames {
    type Output = str;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}
