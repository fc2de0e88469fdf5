//! End-to-end match scenarios driven through the score engine.

use std::time::Duration;

use kinball_core::FLASH_TOGGLES;
use kinball_types::{MatchState, Scores, Team};

use crate::common::{default_engine, engine, finished_match, foul};

#[test]
fn repeated_fouls_by_one_team_trigger_lockout_at_goal() {
    let mut engine = default_engine();
    foul(&mut engine, Team::A, 9);
    assert_eq!(engine.scores(), Scores::new(0, 9, 9));
    assert_eq!(engine.locked(), None);

    engine.apply_penalty(Team::A);
    assert_eq!(engine.scores(), Scores::new(0, 10, 10));
    // The lowest score on the court is the fouling team's own zero.
    assert_eq!(engine.locked(), Some(Team::A));
    assert_eq!(engine.winner(), None);
}

#[test]
fn locked_team_is_skipped_until_someone_reaches_final() {
    let mut engine = default_engine();
    foul(&mut engine, Team::B, 10);
    assert_eq!(engine.scores(), Scores::new(10, 0, 10));
    assert_eq!(engine.locked(), Some(Team::B));

    for expected_a in 11..15 {
        engine.apply_penalty(Team::C);
        assert_eq!(engine.scores(), Scores::new(expected_a, 0, 10));
        assert_eq!(engine.winner(), None);
    }

    engine.apply_penalty(Team::C);
    assert_eq!(engine.scores(), Scores::new(15, 0, 10));
    assert_eq!(engine.winner(), Some(Team::A));
}

#[test]
fn undo_with_empty_history_is_a_silent_no_op() {
    let mut engine = default_engine();
    let before = engine.state();
    assert_eq!(engine.undo(), before);
    assert_eq!(engine.redo(), before);
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());
}

#[test]
fn reset_after_a_finished_match_clears_everything() {
    let mut engine = finished_match();
    engine.undo();
    assert!(engine.can_redo());

    engine.reset();
    assert_eq!(engine.state(), MatchState::new());
    assert_eq!(engine.locked(), None);
    assert_eq!(engine.winner(), None);
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());
    assert!(!engine.is_flashing());
}

#[test]
fn finished_match_rejects_all_penalties() {
    let mut engine = finished_match();
    let frozen = engine.state();
    let depth = engine.history().undo_len();
    for team in Team::ALL {
        assert!(!engine.can_penalize(team));
        assert_eq!(engine.apply_penalty(team), frozen);
    }
    assert_eq!(engine.history().undo_len(), depth);
}

#[test]
fn undoing_the_winning_penalty_reopens_the_match() {
    let mut engine = finished_match();
    engine.undo();
    assert_eq!(engine.scores(), Scores::new(14, 0, 10));
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.locked(), Some(Team::B));
    assert!(engine.can_penalize(Team::A));

    engine.redo();
    assert_eq!(engine.winner(), Some(Team::A));
    // Redo restores the win without replaying the celebration.
    assert!(!engine.is_flashing());
}

#[test]
fn undoing_past_the_lockout_releases_the_locked_team() {
    let mut engine = default_engine();
    foul(&mut engine, Team::B, 10);
    assert_eq!(engine.locked(), Some(Team::B));

    engine.undo();
    assert_eq!(engine.scores(), Scores::new(9, 0, 9));
    assert_eq!(engine.locked(), None);
    assert!(engine.can_penalize(Team::B));
}

#[test]
fn win_flash_blinks_then_stops() {
    let mut engine = finished_match();
    assert!(engine.is_flashing());
    assert_eq!(engine.flash_signal(), None);

    let interval = Duration::from_millis(300);
    let mut lit = 0;
    for _ in 0..FLASH_TOGGLES {
        engine.tick(interval);
        if engine.flash_signal() == Some(Team::A) {
            lit += 1;
        }
    }
    assert_eq!(lit, FLASH_TOGGLES / 2);
    assert!(!engine.is_flashing());
    assert_eq!(engine.flash_signal(), None);
}

#[test]
fn reset_cancels_a_running_flash() {
    let mut engine = finished_match();
    engine.tick(Duration::from_millis(300));
    assert_eq!(engine.flash_signal(), Some(Team::A));

    engine.reset();
    assert_eq!(engine.flash_signal(), None);
    engine.tick(Duration::from_secs(5));
    assert_eq!(engine.flash_signal(), None);
}

#[test]
fn lockout_and_win_in_one_penalty_with_tiny_thresholds() {
    let mut engine = engine(1, 1);
    engine.apply_penalty(Team::C);
    assert_eq!(engine.scores(), Scores::new(1, 1, 0));
    assert_eq!(engine.locked(), Some(Team::C));
    assert_eq!(engine.winner(), Some(Team::A));
}
