//! Progression engine: owns the match state and applies every transition.
//!
//! All operations run to completion synchronously. A failed operation returns
//! its error before touching state, so the sum-of-history invariants hold
//! after every call, successful or not.

use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::domain::modes::GameMode;
use crate::domain::rules::TOTAL_ROUNDS_PER_KINGDOM;
use crate::domain::scoring::{self, ScoreDelta};
use crate::domain::selection::RawSelection;
use crate::domain::snapshot::MatchSnapshot;
use crate::domain::state::{GameRecord, KingdomArchive, KingdomId, KingdomState, MatchState, Phase};
use crate::domain::transition::{derive_transitions, MatchTransition, ProgressView};
use crate::errors::domain::DomainError;

/// Result of scoring a mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub record: GameRecord,
    pub transitions: Vec<MatchTransition>,
}

impl Applied {
    pub fn completes_kingdom(&self) -> bool {
        self.transitions
            .iter()
            .any(|t| matches!(t, MatchTransition::KingdomCompleted { .. }))
    }

    pub fn completes_game(&self) -> bool {
        self.transitions.contains(&MatchTransition::GameCompleted)
    }
}

/// Result of undoing the most recent score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Undone {
    pub record: GameRecord,
    pub transitions: Vec<MatchTransition>,
}

#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    config: MatchConfig,
    state: MatchState,
}

impl ProgressionEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            state: MatchState::new(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn kingdom_index(&self) -> KingdomId {
        self.state.current.kingdom_index
    }

    pub fn active_mode(&self) -> Option<GameMode> {
        self.state.current.active_mode
    }

    pub fn is_kingdom_complete(&self) -> bool {
        self.state.current.is_complete()
    }

    pub fn is_game_complete(&self) -> bool {
        self.config.kingdom_limit.is_last(self.kingdom_index()) && self.is_kingdom_complete()
    }

    /// 1-based round of the current kingdom, counting an open mode.
    pub fn current_round(&self) -> usize {
        let current = &self.state.current;
        current.completed_modes.len() + usize::from(current.active_mode.is_some())
    }

    pub fn total_rounds(&self) -> usize {
        TOTAL_ROUNDS_PER_KINGDOM
    }

    /// Modes not yet scored in the current kingdom, in canonical order.
    pub fn available_modes(&self) -> Vec<GameMode> {
        GameMode::ALL
            .into_iter()
            .filter(|m| !self.state.current.completed_modes.contains(m))
            .collect()
    }

    pub fn phase(&self) -> Phase {
        if self.is_game_complete() {
            Phase::GameComplete
        } else if self.is_kingdom_complete() {
            Phase::KingdomComplete
        } else if let Some(mode) = self.active_mode() {
            Phase::ModeSelected(mode)
        } else {
            Phase::Idle
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from_engine(self)
    }

    /// Open `mode` for scoring.
    pub fn select_mode(&mut self, mode: GameMode) -> Result<Vec<MatchTransition>, DomainError> {
        let current = &self.state.current;
        if current.is_complete() {
            return Err(DomainError::KingdomFull {
                kingdom: current.kingdom_index,
            });
        }
        if current.completed_modes.contains(&mode) || current.active_mode.is_some() {
            return Err(DomainError::ModeUnavailable { mode });
        }

        let before = self.progress_view();
        self.state.current.active_mode = Some(mode);
        debug!(kingdom = self.kingdom_index(), mode = %mode, "Mode selected");

        Ok(self.finish(&before))
    }

    /// Record `delta` as the result of `mode` in the current kingdom.
    ///
    /// Scoring an unselected mode is allowed while no mode is active; while one
    /// is active, only that mode can be scored. A delta that would overflow the
    /// kingdom or overall totals is rejected as an invalid selection.
    pub fn apply_score(
        &mut self,
        mode: GameMode,
        delta: ScoreDelta,
    ) -> Result<Applied, DomainError> {
        let current = &self.state.current;
        if current.is_complete() {
            return Err(DomainError::KingdomFull {
                kingdom: current.kingdom_index,
            });
        }
        if current.completed_modes.contains(&mode) {
            return Err(DomainError::ModeAlreadyScored { mode });
        }
        if current.active_mode.is_some_and(|active| active != mode) {
            return Err(DomainError::ModeAlreadyScored { mode });
        }
        let (Some(kingdom_total), Some(overall)) = (
            current.scores().checked_add(delta),
            self.state.overall().checked_add(delta),
        ) else {
            return Err(DomainError::invalid_selection(
                mode,
                format!("delta ({}, {}) overflows the running totals", delta.team1, delta.team2),
            ));
        };

        let before = self.progress_view();
        let record = GameRecord::new(mode, delta);

        let current = &mut self.state.current;
        current.team1_score = kingdom_total.team1;
        current.team2_score = kingdom_total.team2;
        current.completed_modes.insert(mode);
        current.history.push(record.clone());
        current.active_mode = None;
        self.state.team1_overall = overall.team1;
        self.state.team2_overall = overall.team2;

        debug!(
            kingdom = self.kingdom_index(),
            mode = %mode,
            team1 = delta.team1,
            team2 = delta.team2,
            round = self.current_round(),
            "Mode scored"
        );

        let transitions = self.finish(&before);
        Ok(Applied {
            record,
            transitions,
        })
    }

    /// Score `mode` from its raw selection. A rejected selection changes nothing.
    pub fn score_selection(
        &mut self,
        mode: GameMode,
        selection: &RawSelection,
    ) -> Result<Applied, DomainError> {
        let delta = scoring::score(mode, selection)?;
        self.apply_score(mode, delta)
    }

    /// Remove the most recent score of the current kingdom.
    ///
    /// Archived kingdoms are out of reach: undo stops at the kingdom boundary.
    pub fn undo_last(&mut self) -> Result<Undone, DomainError> {
        let before = self.progress_view();

        let current = &mut self.state.current;
        let record = current.history.pop().ok_or(DomainError::NothingToUndo)?;
        current.team1_score -= record.team1_points;
        current.team2_score -= record.team2_points;
        current.completed_modes.remove(&record.mode);
        current.active_mode = None;
        self.state.team1_overall -= record.team1_points;
        self.state.team2_overall -= record.team2_points;

        debug!(
            kingdom = self.kingdom_index(),
            mode = %record.mode,
            team1 = record.team1_points,
            team2 = record.team2_points,
            "Score undone"
        );

        let transitions = self.finish(&before);
        Ok(Undone {
            record,
            transitions,
        })
    }

    /// Archive the finished kingdom and start the next one.
    pub fn complete_kingdom(&mut self) -> Result<Vec<MatchTransition>, DomainError> {
        let current = &self.state.current;
        if !current.is_complete() {
            return Err(DomainError::KingdomIncomplete {
                completed: current.completed_modes.len(),
            });
        }
        if let Some(max) = self.config.kingdom_limit.max() {
            if current.kingdom_index >= max {
                return Err(DomainError::MaxKingdomsReached { max });
            }
        }
        let next = current
            .kingdom_index
            .checked_add(1)
            .ok_or(DomainError::MaxKingdomsReached { max: KingdomId::MAX })?;

        let before = self.progress_view();
        let finished = std::mem::replace(&mut self.state.current, KingdomState::new(next));
        let archived = KingdomArchive::seal(finished);

        info!(
            kingdom = archived.id,
            team1 = archived.team1_points,
            team2 = archived.team2_points,
            team1_overall = self.state.team1_overall,
            team2_overall = self.state.team2_overall,
            "Kingdom archived"
        );
        debug!(kingdom = next, "Transition: -> Idle");

        self.state.archive.push(archived);
        Ok(self.finish(&before))
    }

    /// Discard everything and start over at kingdom 1. Irreversible.
    pub fn reset(&mut self) -> Vec<MatchTransition> {
        let from_kingdom = self.kingdom_index();
        self.state = MatchState::new();
        info!(from_kingdom, "Match reset");
        vec![MatchTransition::MatchReset]
    }

    fn progress_view(&self) -> ProgressView {
        let current = &self.state.current;
        ProgressView {
            kingdom: current.kingdom_index,
            phase: self.phase(),
            completed: current.completed_modes.len(),
            history_len: current.history.len(),
            last_mode: current.history.last().map(|g| g.mode),
        }
    }

    fn finish(&self, before: &ProgressView) -> Vec<MatchTransition> {
        debug_assert!(
            self.state.verify().is_ok(),
            "match state invariants broken: {:?}",
            self.state.verify()
        );

        let transitions = derive_transitions(before, &self.progress_view());
        for transition in &transitions {
            match transition {
                MatchTransition::KingdomCompleted { kingdom } => {
                    info!(
                        kingdom,
                        team1 = self.state.current.team1_score,
                        team2 = self.state.current.team2_score,
                        "Kingdom complete"
                    );
                }
                MatchTransition::GameCompleted => {
                    info!(
                        team1_overall = self.state.team1_overall,
                        team2_overall = self.state.team2_overall,
                        "Game complete"
                    );
                }
                _ => {}
            }
        }
        transitions
    }
}
