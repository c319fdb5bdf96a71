//! Public snapshot API for rendering a match without exposing the engine.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::engine::ProgressionEngine;
use crate::domain::modes::{GameMode, Team};
use crate::domain::rules::TEAMS;
use crate::domain::state::{GameRecord, KingdomArchive, KingdomId, Phase, Points};

/// Match-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHeader {
    pub kingdom_no: KingdomId,
    pub round_no: usize,
    pub total_rounds: usize,
    /// `None` when kingdoms are unbounded.
    pub max_kingdoms: Option<KingdomId>,
    pub kingdom_scores: [Points; TEAMS],
    pub overall_scores: [Points; TEAMS],
}

/// Top-level snapshot combining header, history and phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub header: MatchHeader,
    /// Scores of the current kingdom, in play order.
    pub history: Vec<GameRecord>,
    /// Finished kingdoms, oldest first.
    pub archive: Vec<KingdomArchive>,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Idle { available_modes: Vec<GameMode> },
    ModeSelected { mode: GameMode },
    KingdomComplete { next_kingdom: KingdomId },
    /// `winner` is `None` on a tie.
    GameComplete { winner: Option<Team> },
}

impl MatchSnapshot {
    pub fn from_engine(engine: &ProgressionEngine) -> Self {
        let state = engine.state();
        let current = &state.current;

        let phase = match engine.phase() {
            Phase::Idle => PhaseSnapshot::Idle {
                available_modes: engine.available_modes(),
            },
            Phase::ModeSelected(mode) => PhaseSnapshot::ModeSelected { mode },
            Phase::KingdomComplete => PhaseSnapshot::KingdomComplete {
                next_kingdom: current.kingdom_index.saturating_add(1),
            },
            Phase::GameComplete => PhaseSnapshot::GameComplete {
                winner: leader(state.team1_overall, state.team2_overall),
            },
        };

        MatchSnapshot {
            header: MatchHeader {
                kingdom_no: current.kingdom_index,
                round_no: engine.current_round(),
                total_rounds: engine.total_rounds(),
                max_kingdoms: engine.config().kingdom_limit.max(),
                kingdom_scores: [current.team1_score, current.team2_score],
                overall_scores: [state.team1_overall, state.team2_overall],
            },
            history: current.history.clone(),
            archive: state.archive.clone(),
            phase,
        }
    }
}

// Higher is better: penalties are negative.
fn leader(team1: Points, team2: Points) -> Option<Team> {
    match team1.cmp(&team2) {
        Ordering::Greater => Some(Team::One),
        Ordering::Less => Some(Team::Two),
        Ordering::Equal => None,
    }
}
