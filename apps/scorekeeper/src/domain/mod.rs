//! Domain layer: pure scoring and progression logic.

pub mod engine;
pub mod modes;
pub mod rules;
pub mod scoring;
pub mod selection;
pub mod snapshot;
pub mod state;
pub mod transition;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_engine;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use engine::{Applied, ProgressionEngine, Undone};
pub use modes::{GameMode, Team};
pub use rules::{mode_total, MAX_KINGDOMS, TOTAL_ROUNDS_PER_KINGDOM};
pub use scoring::{preview_options, score, ScoreDelta};
pub use selection::{RawSelection, TrixPick};
pub use snapshot::{MatchHeader, MatchSnapshot, PhaseSnapshot};
pub use state::{GameRecord, KingdomArchive, KingdomId, KingdomState, MatchState, Phase, Points};
pub use transition::MatchTransition;
