//! Match configuration.

pub mod match_config;

pub use match_config::{KingdomLimit, MatchConfig, MAX_KINGDOMS_ENV};
