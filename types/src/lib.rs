//! Core domain types for the Kinball scoreboard.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.
//!
//! The scoring rule lives on [`MatchState::penalize`]: a pure transition that
//! takes a state and returns the next one, or `None` when the penalty is not
//! allowed. Ownership of history and timers is left to `kinball-core`.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod score;
mod settings;
mod state;
mod team;

pub use score::{MatchConfig, MatchConfigError, Scores};
pub use settings::{DEFAULT_FLASH_INTERVAL, MatchSetup, UiOptions};
pub use state::{MatchState, Snapshot};
pub use team::{Team, TeamNames};
