//! Domain-level error type used by the calculator and the progression engine.
//!
//! Every variant is caller-recoverable. An operation that returns an error
//! leaves the match state exactly as it was before the call.

use thiserror::Error;

use crate::domain::modes::GameMode;
use crate::errors::error_code::ErrorCode;

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Mode already completed in this kingdom, or another mode is active
    #[error("mode {mode} is not available")]
    ModeUnavailable { mode: GameMode },
    /// Mode already completed, or not the currently active mode
    #[error("mode {mode} cannot be scored")]
    ModeAlreadyScored { mode: GameMode },
    /// All five modes of the kingdom are scored
    #[error("kingdom {kingdom} is full")]
    KingdomFull { kingdom: u32 },
    /// Kingdom closed before all five modes were scored
    #[error("kingdom incomplete: {completed} of 5 modes scored")]
    KingdomIncomplete { completed: usize },
    /// Attempted to advance past the last kingdom
    #[error("maximum of {max} kingdoms reached")]
    MaxKingdomsReached { max: u32 },
    /// Undo requested with an empty current-kingdom history
    #[error("nothing to undo")]
    NothingToUndo,
    /// Malformed or incomplete raw input for a mode
    #[error("invalid {mode} selection: {detail}")]
    InvalidSelection { mode: GameMode, detail: String },
    /// Match state failed a consistency check
    #[error("invariant violated: {0}")]
    InvariantViolated(String),
    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn invalid_selection(mode: GameMode, detail: impl Into<String>) -> Self {
        Self::InvalidSelection {
            mode,
            detail: detail.into(),
        }
    }
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolated(detail.into())
    }
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Stable code for this error kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::ModeUnavailable { .. } => ErrorCode::ModeUnavailable,
            DomainError::ModeAlreadyScored { .. } => ErrorCode::ModeAlreadyScored,
            DomainError::KingdomFull { .. } => ErrorCode::KingdomFull,
            DomainError::KingdomIncomplete { .. } => ErrorCode::KingdomIncomplete,
            DomainError::MaxKingdomsReached { .. } => ErrorCode::MaxKingdomsReached,
            DomainError::NothingToUndo => ErrorCode::NothingToUndo,
            DomainError::InvalidSelection { .. } => ErrorCode::InvalidSelection,
            DomainError::InvariantViolated(_) => ErrorCode::InvariantViolated,
            DomainError::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// The mode this error is about, when it concerns one.
    pub fn mode(&self) -> Option<GameMode> {
        match self {
            DomainError::ModeUnavailable { mode }
            | DomainError::ModeAlreadyScored { mode }
            | DomainError::InvalidSelection { mode, .. } => Some(*mode),
            _ => None,
        }
    }
}
