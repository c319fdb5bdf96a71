//! Property-based tests for progression invariants over random caller actions.

use proptest::prelude::*;

use crate::domain::engine::ProgressionEngine;
use crate::domain::scoring::score;
use crate::domain::test_gens::{self, Op};
use crate::domain::{test_prelude, MatchState, ScoreDelta, MAX_KINGDOMS};
use crate::errors::domain::DomainError;

fn run(engine: &mut ProgressionEngine, op: &Op) -> Result<(), DomainError> {
    match op {
        Op::Select(mode) => engine.select_mode(*mode).map(|_| ()),
        Op::Score(mode, selection) => engine.score_selection(*mode, selection).map(|_| ()),
        Op::Undo => engine.undo_last().map(|_| ()),
        Op::CompleteKingdom => engine.complete_kingdom().map(|_| ()),
        Op::Reset => {
            engine.reset();
            Ok(())
        }
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: State consistency
    /// The sum-of-history and overall-total invariants hold after every action,
    /// and a rejected action leaves the state untouched.
    #[test]
    fn prop_invariants_hold_after_every_op(ops in test_gens::ops(60)) {
        let mut engine = ProgressionEngine::default();
        for op in &ops {
            let before = engine.state().clone();
            let result = run(&mut engine, op);
            prop_assert!(engine.state().verify().is_ok(),
                "op={:?} broke invariants: {:?}", op, engine.state().verify());
            if result.is_err() {
                prop_assert_eq!(engine.state(), &before, "failed op {:?} mutated state", op);
            }

            let state = engine.state();
            prop_assert!(state.current.kingdom_index >= 1);
            prop_assert!(state.current.kingdom_index <= MAX_KINGDOMS);
            prop_assert_eq!(state.archive.len() as u32, state.current.kingdom_index - 1);
            prop_assert!(state.current.completed_modes.len() <= 5);
        }
    }

    /// Property: Undo inverts apply
    /// From any reachable state, scoring an open mode and undoing it restores
    /// the state with no active mode.
    #[test]
    fn prop_apply_then_undo_is_identity(
        ops in test_gens::ops(30),
        (mode, selection) in test_gens::scored_mode(),
    ) {
        let mut engine = ProgressionEngine::default();
        for op in &ops {
            let _ = run(&mut engine, op);
        }
        let mut expected = engine.state().clone();
        expected.current.active_mode = None;

        if engine.score_selection(mode, &selection).is_ok() {
            let undone = engine.undo_last().unwrap();
            prop_assert_eq!(undone.record.mode, mode);
            prop_assert_eq!(engine.state(), &expected);
        }
    }

    /// Property: Archive totals
    /// Every archived kingdom's totals equal the sum of its games, and the
    /// overall score is the archive plus the current kingdom.
    #[test]
    fn prop_archive_totals_match_games(ops in test_gens::ops(80)) {
        let mut engine = ProgressionEngine::default();
        for op in &ops {
            let _ = run(&mut engine, op);
        }
        let state = engine.state();
        let mut overall = state.current.scores();
        for kingdom in &state.archive {
            let games: ScoreDelta = kingdom.games.iter().map(|g| g.delta()).sum();
            prop_assert_eq!(games, kingdom.points());
            prop_assert_eq!(kingdom.games.len(), 5);
            overall = overall + kingdom.points();
        }
        prop_assert_eq!(overall, state.overall());
    }

    /// Property: History replays
    /// Re-scoring each current-kingdom record yields the recorded delta.
    #[test]
    fn prop_history_records_match_calculator(
        selections in prop::collection::vec(test_gens::scored_mode(), 0..10),
    ) {
        let mut engine = ProgressionEngine::default();
        let mut expected = Vec::new();
        for (mode, selection) in &selections {
            if let Ok(applied) = engine.score_selection(*mode, selection) {
                expected.push((applied.record.clone(), score(*mode, selection).unwrap()));
            }
        }
        for (record, delta) in expected {
            prop_assert_eq!(record.delta(), delta);
        }
    }

    /// Property: Reset restores the initial state from anywhere
    #[test]
    fn prop_reset_restores_initial_state(ops in test_gens::ops(60)) {
        let mut engine = ProgressionEngine::default();
        for op in &ops {
            let _ = run(&mut engine, op);
        }
        engine.reset();
        prop_assert_eq!(engine.state(), &MatchState::new());
    }
}
