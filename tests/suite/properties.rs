//! Property tests over random penalty, undo and redo sequences.

use proptest::prelude::*;

use kinball_core::ScoreEngine;
use kinball_types::{MatchState, Team};

use crate::common::engine;

#[derive(Debug, Clone, Copy)]
enum Op {
    Penalty(Team),
    Undo,
    Redo,
}

fn team_strategy() -> impl Strategy<Value = Team> {
    prop_oneof![Just(Team::A), Just(Team::B), Just(Team::C)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => team_strategy().prop_map(Op::Penalty),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn thresholds() -> impl Strategy<Value = (u32, u32)> {
    (1u32..12, 1u32..20)
}

fn run(engine: &mut ScoreEngine, op: Op) -> MatchState {
    match op {
        Op::Penalty(team) => engine.apply_penalty(team),
        Op::Undo => engine.undo(),
        Op::Redo => engine.redo(),
    }
}

fn check_consistent(state: MatchState, goal: u32, last: u32) -> Result<(), TestCaseError> {
    if let Some(winner) = state.winner() {
        prop_assert!(state.locked().is_some(), "winner without lockout");
        prop_assert_ne!(state.locked(), Some(winner));
        prop_assert!(state.scores().get(winner) >= last);
    }
    if state.locked().is_some() {
        prop_assert!(state.scores().max() >= goal);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn scores_never_decrease_under_penalties(
        (goal, last) in thresholds(),
        fouls in prop::collection::vec(team_strategy(), 0..60),
    ) {
        let mut engine = engine(goal, last);
        let mut previous = engine.scores();
        for team in fouls {
            let scores = engine.apply_penalty(team).scores();
            for t in Team::ALL {
                prop_assert!(scores.get(t) >= previous.get(t));
            }
            previous = scores;
        }
    }

    #[test]
    fn penalty_scores_exactly_the_eligible_teams(
        (goal, last) in thresholds(),
        ops in prop::collection::vec(op_strategy(), 0..60),
        team in team_strategy(),
    ) {
        let mut engine = engine(goal, last);
        for op in ops {
            run(&mut engine, op);
        }

        let before = engine.state();
        let allowed = engine.can_penalize(team);
        let after = engine.apply_penalty(team);
        if !allowed {
            prop_assert_eq!(after, before);
            return Ok(());
        }
        for t in Team::ALL {
            let expected = if t == team || before.locked() == Some(t) {
                before.scores().get(t)
            } else {
                before.scores().get(t) + 1
            };
            prop_assert_eq!(after.scores().get(t), expected);
        }
    }

    #[test]
    fn lockout_picks_the_lowest_team_once_and_sticks(
        (goal, last) in thresholds(),
        fouls in prop::collection::vec(team_strategy(), 0..60),
    ) {
        let mut engine = engine(goal, last);
        let mut locked = None;
        for team in fouls {
            let state = engine.apply_penalty(team);
            match locked {
                None => {
                    if state.scores().max() >= goal {
                        prop_assert_eq!(state.locked(), Some(state.scores().lowest()));
                        locked = state.locked();
                    } else {
                        prop_assert_eq!(state.locked(), None);
                    }
                }
                Some(held) => prop_assert_eq!(state.locked(), Some(held)),
            }
        }
    }

    #[test]
    fn winner_is_set_once_and_is_eligible(
        (goal, last) in thresholds(),
        fouls in prop::collection::vec(team_strategy(), 0..80),
    ) {
        let mut engine = engine(goal, last);
        let mut winner = None;
        for team in fouls {
            let state = engine.apply_penalty(team);
            check_consistent(state, goal, last)?;
            if winner.is_some() {
                prop_assert_eq!(state.winner(), winner);
            } else if state.winner().is_some() {
                let first = Team::ALL
                    .into_iter()
                    .find(|t| state.locked() != Some(*t) && state.scores().get(*t) >= last);
                prop_assert_eq!(state.winner(), first);
                winner = state.winner();
            }
        }
    }

    #[test]
    fn undo_restores_and_redo_replays(
        (goal, last) in thresholds(),
        ops in prop::collection::vec(op_strategy(), 0..60),
        team in team_strategy(),
    ) {
        let mut engine = engine(goal, last);
        for op in ops {
            let state = run(&mut engine, op);
            check_consistent(state, goal, last)?;
        }

        let start = engine.state();
        if engine.can_penalize(team) {
            let after = engine.apply_penalty(team);
            prop_assert_eq!(engine.undo(), start);
            prop_assert_eq!(engine.redo(), after);
        }

        if engine.can_undo() {
            let current = engine.state();
            engine.undo();
            prop_assert_eq!(engine.redo(), current);
        }
    }

    #[test]
    fn fresh_penalty_discards_redo(
        (goal, last) in thresholds(),
        ops in prop::collection::vec(op_strategy(), 1..60),
        team in team_strategy(),
    ) {
        let mut engine = engine(goal, last);
        for op in ops {
            run(&mut engine, op);
        }
        prop_assume!(engine.can_undo());

        engine.undo();
        prop_assume!(engine.can_penalize(team));
        let after = engine.apply_penalty(team);

        prop_assert!(!engine.can_redo());
        prop_assert_eq!(engine.redo(), after);
    }
}
