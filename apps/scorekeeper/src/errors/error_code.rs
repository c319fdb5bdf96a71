//! Error codes reported by the scorekeeper.
//!
//! Every `DomainError` kind maps to exactly one code here. Callers that need
//! user-facing messaging match on these codes; never on `Display` output.
//!
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Stable error codes, one per `DomainError` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Mode selection and scoring
    /// Mode already completed, or another mode is active
    ModeUnavailable,
    /// Score applied for a completed or inactive mode
    ModeAlreadyScored,
    /// All five modes of the kingdom are already scored
    KingdomFull,
    /// Kingdom closed before all five modes were scored
    KingdomIncomplete,
    /// Advancing past the last kingdom
    MaxKingdomsReached,
    /// Undo with empty current-kingdom history
    NothingToUndo,

    // Input validation
    /// Malformed or incomplete raw selection
    InvalidSelection,

    // System
    /// Internal state consistency check failed
    InvariantViolated,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ModeUnavailable => "MODE_UNAVAILABLE",
            Self::ModeAlreadyScored => "MODE_ALREADY_SCORED",
            Self::KingdomFull => "KINGDOM_FULL",
            Self::KingdomIncomplete => "KINGDOM_INCOMPLETE",
            Self::MaxKingdomsReached => "MAX_KINGDOMS_REACHED",
            Self::NothingToUndo => "NOTHING_TO_UNDO",

            Self::InvalidSelection => "INVALID_SELECTION",

            Self::InvariantViolated => "INVARIANT_VIOLATED",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
