use std::num::NonZeroU32;

use serde_json::json;

use crate::config::{KingdomLimit, MatchConfig};
use crate::domain::engine::ProgressionEngine;
use crate::domain::test_state_helpers::{play_kingdoms, play_reference_kingdom};
use crate::domain::{GameMode, MatchSnapshot, PhaseSnapshot, RawSelection, ScoreDelta, Team};

#[test]
fn snapshot_idle_lists_available_modes() {
    let mut engine = ProgressionEngine::default();
    engine
        .score_selection(GameMode::Queen, &RawSelection::queen(2))
        .unwrap();

    let snap = engine.snapshot();
    assert_eq!(snap.header.kingdom_no, 1);
    assert_eq!(snap.header.round_no, 1);
    assert_eq!(snap.header.total_rounds, 5);
    assert_eq!(snap.header.max_kingdoms, Some(4));
    assert_eq!(snap.header.kingdom_scores, [-50, -50]);
    assert_eq!(snap.header.overall_scores, [-50, -50]);
    assert_eq!(snap.history.len(), 1);
    assert_eq!(
        snap.phase,
        PhaseSnapshot::Idle {
            available_modes: vec![
                GameMode::King,
                GameMode::Diamonds,
                GameMode::Ltoosh,
                GameMode::Trix,
            ]
        }
    );
}

#[test]
fn snapshot_mode_selected_counts_open_round() {
    let mut engine = ProgressionEngine::default();
    engine.select_mode(GameMode::Trix).unwrap();
    let snap = engine.snapshot();
    assert_eq!(snap.header.round_no, 1);
    assert_eq!(
        snap.phase,
        PhaseSnapshot::ModeSelected {
            mode: GameMode::Trix
        }
    );
}

#[test]
fn snapshot_kingdom_complete_names_next_kingdom() {
    let mut engine = ProgressionEngine::default();
    play_reference_kingdom(&mut engine);
    assert_eq!(
        engine.snapshot().phase,
        PhaseSnapshot::KingdomComplete { next_kingdom: 2 }
    );
}

#[test]
fn snapshot_game_complete_reports_winner() {
    let mut engine = ProgressionEngine::default();
    play_kingdoms(&mut engine, 4);
    let snap = engine.snapshot();
    assert_eq!(snap.archive.len(), 3);
    // Team two finishes on +180 against -180
    assert_eq!(
        snap.phase,
        PhaseSnapshot::GameComplete {
            winner: Some(Team::Two)
        }
    );
}

#[test]
fn snapshot_game_complete_tie_has_no_winner() {
    let config = MatchConfig::new(KingdomLimit::Capped(NonZeroU32::MIN));
    let mut engine = ProgressionEngine::new(config);
    for mode in GameMode::ALL {
        engine.apply_score(mode, ScoreDelta::new(-10, -10)).unwrap();
    }
    assert_eq!(
        engine.snapshot().phase,
        PhaseSnapshot::GameComplete { winner: None }
    );
}

#[test]
fn snapshot_unbounded_has_no_max() {
    let engine = ProgressionEngine::new(MatchConfig::unbounded());
    assert_eq!(engine.snapshot().header.max_kingdoms, None);
}

#[test]
fn snapshot_serializes_with_phase_tag() {
    let mut engine = ProgressionEngine::default();
    engine
        .score_selection(GameMode::King, &RawSelection::king(1))
        .unwrap();
    engine.select_mode(GameMode::Diamonds).unwrap();

    let value = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(
        value["phase"],
        json!({"phase": "ModeSelected", "data": {"mode": "diamonds"}})
    );
    assert_eq!(
        value["history"],
        json!([{"mode": "king", "label": "King", "team1_points": -75, "team2_points": 0}])
    );
    assert_eq!(value["header"]["kingdom_scores"], json!([-75, 0]));

    let back: MatchSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, engine.snapshot());
}

#[test]
fn snapshot_is_detached_from_engine() {
    let mut engine = ProgressionEngine::default();
    play_reference_kingdom(&mut engine);
    engine.complete_kingdom().unwrap();
    let snap = engine.snapshot();

    engine
        .score_selection(GameMode::Queen, &RawSelection::queen(0))
        .unwrap();
    engine.undo_last().unwrap();
    engine.reset();

    assert_eq!(snap.archive.len(), 1);
    assert_eq!(snap.archive[0].points(), ScoreDelta::new(-45, 45));
    assert_eq!(snap.header.kingdom_no, 2);
}
