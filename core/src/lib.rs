//! Scoring state machine for the Kinball scoreboard.
//!
//! [`ScoreEngine`] owns the match: the current [`MatchState`], the undo/redo
//! [`History`], and the [`FlashCue`] shown after a win. The presentation layer
//! calls the four operations and reads state back to render; it never
//! mutates state directly.
//!
//! [`MatchState`]: kinball_types::MatchState

mod engine;
mod flash;
mod history;

pub use engine::ScoreEngine;
pub use flash::{FLASH_TOGGLES, FlashCue};
pub use history::History;
