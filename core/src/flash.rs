//! Blinking cue shown on the winning team's box.

use std::time::Duration;

use kinball_types::Team;

/// Number of on/off toggles before the cue settles to off.
pub const FLASH_TOGGLES: u32 = 6;

/// A finite on/off signal for one team, driven by elapsed time.
///
/// Toggle `k` (1-based) happens at `k * interval`; odd toggles switch the cue
/// on, even toggles switch it off. After [`FLASH_TOGGLES`] toggles the cue
/// is finished and stays off.
///
/// The cue does not run by itself. Its owner advances it from the frame loop
/// and drops it to cancel, so a cancelled cue can never touch a later team.
#[derive(Debug, Clone)]
pub struct FlashCue {
    team: Team,
    interval: Duration,
    elapsed: Duration,
}

impl FlashCue {
    #[must_use]
    pub fn new(team: Team, interval: Duration) -> Self {
        Self {
            team,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Toggles that have happened so far, capped at [`FLASH_TOGGLES`].
    #[must_use]
    pub fn toggles(&self) -> u32 {
        if self.interval.is_zero() {
            return FLASH_TOGGLES;
        }
        let done = self.elapsed.as_nanos() / self.interval.as_nanos();
        done.min(u128::from(FLASH_TOGGLES)) as u32
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.toggles() % 2 == 1
    }

    /// The team to highlight right now, if the cue is on.
    #[must_use]
    pub fn signal(&self) -> Option<Team> {
        self.is_on().then_some(self.team)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.toggles() >= FLASH_TOGGLES
    }
}
