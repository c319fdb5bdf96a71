use crate::domain::modes::GameMode;
use crate::domain::rules::TOTAL_ROUNDS_PER_KINGDOM;
use crate::domain::state::{KingdomId, Phase};

/// The slice of match state that transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub kingdom: KingdomId,
    pub phase: Phase,
    pub completed: usize,
    pub history_len: usize,
    pub last_mode: Option<GameMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTransition {
    /// Edge-triggered: the caller opened a mode.
    ModeSelected { mode: GameMode },

    /// Edge-triggered: a mode was scored into the current kingdom.
    ModeScored { mode: GameMode },

    /// Edge-triggered: the most recent score was removed.
    ScoreUndone { mode: GameMode },

    /// Edge-triggered: the fifth mode of a kingdom was scored.
    KingdomCompleted { kingdom: KingdomId },

    /// Edge-triggered: a finished kingdom was archived and the next began.
    KingdomStarted { kingdom: KingdomId },

    /// Edge-triggered: the last kingdom was completed.
    GameCompleted,

    /// Explicit: the match was wiped back to kingdom 1.
    MatchReset,
}

/// Derive transitions from before/after progress views.
pub fn derive_transitions(before: &ProgressView, after: &ProgressView) -> Vec<MatchTransition> {
    let mut transitions = Vec::new();
    let same_kingdom = before.kingdom == after.kingdom;

    // 1. Mode opened
    if let Phase::ModeSelected(mode) = after.phase {
        if before.phase != after.phase {
            transitions.push(MatchTransition::ModeSelected { mode });
        }
    }

    // 2. History grew or shrank by one within the kingdom
    if same_kingdom && after.history_len == before.history_len + 1 {
        if let Some(mode) = after.last_mode {
            transitions.push(MatchTransition::ModeScored { mode });
        }
    }
    if same_kingdom && after.history_len + 1 == before.history_len {
        if let Some(mode) = before.last_mode {
            transitions.push(MatchTransition::ScoreUndone { mode });
        }
    }

    // 3. Kingdom boundary reached
    if same_kingdom
        && before.completed < TOTAL_ROUNDS_PER_KINGDOM
        && after.completed == TOTAL_ROUNDS_PER_KINGDOM
    {
        transitions.push(MatchTransition::KingdomCompleted {
            kingdom: after.kingdom,
        });
    }

    // 4. Next kingdom began
    if before.kingdom.checked_add(1) == Some(after.kingdom) {
        transitions.push(MatchTransition::KingdomStarted {
            kingdom: after.kingdom,
        });
    }

    // 5. Game boundary reached
    if before.phase != Phase::GameComplete && after.phase == Phase::GameComplete {
        transitions.push(MatchTransition::GameCompleted);
    }

    transitions
}
