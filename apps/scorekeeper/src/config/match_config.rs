use std::env;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::rules::MAX_KINGDOMS;
use crate::domain::state::KingdomId;
use crate::errors::domain::DomainError;

/// Environment variable overriding the number of kingdoms in a match.
pub const MAX_KINGDOMS_ENV: &str = "TRIX_MAX_KINGDOMS";

/// How many kingdoms a match lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KingdomLimit {
    /// The match ends after this many kingdoms.
    Capped(NonZeroU32),
    /// Kingdoms keep coming; the game never completes on its own.
    Unbounded,
}

impl Default for KingdomLimit {
    fn default() -> Self {
        match NonZeroU32::new(MAX_KINGDOMS) {
            Some(max) => KingdomLimit::Capped(max),
            None => KingdomLimit::Unbounded,
        }
    }
}

impl KingdomLimit {
    pub fn max(&self) -> Option<KingdomId> {
        match self {
            KingdomLimit::Capped(max) => Some(max.get()),
            KingdomLimit::Unbounded => None,
        }
    }

    /// True when `kingdom` is the final one.
    pub fn is_last(&self, kingdom: KingdomId) -> bool {
        self.max() == Some(kingdom)
    }

    /// Parses a positive integer or `unbounded` (case-insensitive).
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("unbounded") {
            return Ok(KingdomLimit::Unbounded);
        }
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .map(KingdomLimit::Capped)
            .ok_or_else(|| {
                DomainError::config(format!(
                    "{MAX_KINGDOMS_ENV} must be a positive integer or 'unbounded', got '{raw}'"
                ))
            })
    }
}

/// Rules a single match is played under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default)]
    pub kingdom_limit: KingdomLimit,
}

impl MatchConfig {
    pub fn new(kingdom_limit: KingdomLimit) -> Self {
        Self { kingdom_limit }
    }

    pub fn unbounded() -> Self {
        Self::new(KingdomLimit::Unbounded)
    }

    /// Reads `TRIX_MAX_KINGDOMS`; unset means the default cap.
    pub fn from_env() -> Result<Self, DomainError> {
        match env::var(MAX_KINGDOMS_ENV) {
            Ok(raw) => Ok(Self::new(KingdomLimit::parse(&raw)?)),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(DomainError::config(format!(
                "{MAX_KINGDOMS_ENV} is not valid unicode"
            ))),
        }
    }

    /// Builds a config from a host-stored JSON value, e.g.
    /// `{"kingdom_limit": {"capped": 4}}` or `{"kingdom_limit": "unbounded"}`.
    pub fn from_json(config: &JsonValue) -> Result<Self, DomainError> {
        serde_json::from_value(config.clone())
            .map_err(|e| DomainError::config(format!("invalid match config: {e}")))
    }
}
