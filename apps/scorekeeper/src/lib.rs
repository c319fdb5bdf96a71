#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Scoring calculator and kingdom progression engine for the Trix card game.

pub mod config;
pub mod domain;
pub mod errors;
pub mod session;
pub mod telemetry;


pub use config::{KingdomLimit, MatchConfig};
pub use domain::{
    mode_total, preview_options, score, Applied, GameMode, GameRecord, KingdomArchive,
    MatchSnapshot, MatchState, MatchTransition, Phase, PhaseSnapshot, ProgressionEngine,
    RawSelection, ScoreDelta, Team, TrixPick, Undone,
};
pub use errors::{DomainError, ErrorCode};
pub use session::SharedMatch;
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
