use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::modes::GameMode;
use crate::domain::rules::TOTAL_ROUNDS_PER_KINGDOM;
use crate::domain::scoring::ScoreDelta;
use crate::errors::domain::DomainError;

pub type Points = i32;
pub type KingdomId = u32; // 1-based

/// Progression phases of the current kingdom.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// No mode is open; the caller picks the next one.
    Idle,
    /// A mode is open and awaiting its raw selection.
    ModeSelected(GameMode),
    /// All five modes scored; the next kingdom can start.
    KingdomComplete,
    /// All five modes scored in the last kingdom.
    GameComplete,
}

/// One scored mode-instance. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub mode: GameMode,
    pub label: String,
    pub team1_points: Points,
    pub team2_points: Points,
}

impl GameRecord {
    pub fn new(mode: GameMode, delta: ScoreDelta) -> Self {
        Self {
            mode,
            label: mode.label().to_string(),
            team1_points: delta.team1,
            team2_points: delta.team2,
        }
    }

    pub fn delta(&self) -> ScoreDelta {
        ScoreDelta::new(self.team1_points, self.team2_points)
    }
}

/// The kingdom currently being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomState {
    /// 1-based kingdom number.
    pub kingdom_index: KingdomId,
    pub team1_score: Points,
    pub team2_score: Points,
    /// Modes scored so far; always the set of modes in `history`.
    pub completed_modes: BTreeSet<GameMode>,
    /// Scored modes in play order.
    pub history: Vec<GameRecord>,
    /// Mode opened by the caller and not yet scored.
    pub active_mode: Option<GameMode>,
}

impl KingdomState {
    pub fn new(kingdom_index: KingdomId) -> Self {
        Self {
            kingdom_index,
            team1_score: 0,
            team2_score: 0,
            completed_modes: BTreeSet::new(),
            history: Vec::with_capacity(TOTAL_ROUNDS_PER_KINGDOM),
            active_mode: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed_modes.len() == TOTAL_ROUNDS_PER_KINGDOM
    }

    pub fn scores(&self) -> ScoreDelta {
        ScoreDelta::new(self.team1_score, self.team2_score)
    }
}

/// Frozen record of a finished kingdom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomArchive {
    pub id: KingdomId,
    /// Modes in the order they were played.
    pub modes: Vec<GameMode>,
    pub team1_points: Points,
    pub team2_points: Points,
    pub games: Vec<GameRecord>,
}

impl KingdomArchive {
    /// Consumes the finished kingdom; its history moves into the archive by value.
    pub fn seal(kingdom: KingdomState) -> Self {
        Self {
            id: kingdom.kingdom_index,
            modes: kingdom.history.iter().map(|g| g.mode).collect(),
            team1_points: kingdom.team1_score,
            team2_points: kingdom.team2_score,
            games: kingdom.history,
        }
    }

    pub fn points(&self) -> ScoreDelta {
        ScoreDelta::new(self.team1_points, self.team2_points)
    }
}

/// Entire match container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Cumulative scores across all kingdoms, current one included.
    pub team1_overall: Points,
    pub team2_overall: Points,
    pub current: KingdomState,
    /// Finished kingdoms, oldest first.
    pub archive: Vec<KingdomArchive>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            team1_overall: 0,
            team2_overall: 0,
            current: KingdomState::new(1),
            archive: Vec::new(),
        }
    }

    pub fn overall(&self) -> ScoreDelta {
        ScoreDelta::new(self.team1_overall, self.team2_overall)
    }

    /// Checks the sum-of-history, mode-set and overall-total invariants.
    pub fn verify(&self) -> Result<(), DomainError> {
        let current = &self.current;

        let history_sum: ScoreDelta = current.history.iter().map(GameRecord::delta).sum();
        if history_sum != current.scores() {
            return Err(DomainError::invariant(format!(
                "kingdom {} scores {:?} do not match history sum {:?}",
                current.kingdom_index,
                current.scores(),
                history_sum
            )));
        }

        let history_modes: BTreeSet<GameMode> = current.history.iter().map(|g| g.mode).collect();
        if history_modes.len() != current.history.len() {
            return Err(DomainError::invariant(format!(
                "kingdom {} history repeats a mode",
                current.kingdom_index
            )));
        }
        if history_modes != current.completed_modes {
            return Err(DomainError::invariant(format!(
                "kingdom {} completed modes {:?} do not match history {:?}",
                current.kingdom_index, current.completed_modes, history_modes
            )));
        }

        if let Some(active) = current.active_mode {
            if current.completed_modes.contains(&active) {
                return Err(DomainError::invariant(format!(
                    "active mode {active} is already completed"
                )));
            }
        }

        for kingdom in &self.archive {
            let games_sum: ScoreDelta = kingdom.games.iter().map(GameRecord::delta).sum();
            if games_sum != kingdom.points() {
                return Err(DomainError::invariant(format!(
                    "archived kingdom {} totals do not match its games",
                    kingdom.id
                )));
            }
        }

        let archived: ScoreDelta = self.archive.iter().map(KingdomArchive::points).sum();
        let expected = archived + current.scores();
        if expected != self.overall() {
            return Err(DomainError::invariant(format!(
                "overall {:?} does not match archive plus current {:?}",
                self.overall(),
                expected
            )));
        }

        Ok(())
    }
}
