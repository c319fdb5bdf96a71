//! Core mode-related types: GameMode, Team

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five scoring variants played once per kingdom.
///
/// Declaration order is the canonical order used for listing available modes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    King,
    Queen,
    Diamonds,
    Ltoosh,
    Trix,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::King,
        GameMode::Queen,
        GameMode::Diamonds,
        GameMode::Ltoosh,
        GameMode::Trix,
    ];

    /// Stable lowercase identifier.
    pub const fn id(self) -> &'static str {
        match self {
            GameMode::King => "king",
            GameMode::Queen => "queen",
            GameMode::Diamonds => "diamonds",
            GameMode::Ltoosh => "ltoosh",
            GameMode::Trix => "trix",
        }
    }

    /// Display label stored on history records.
    pub const fn label(self) -> &'static str {
        match self {
            GameMode::King => "King",
            GameMode::Queen => "Queen",
            GameMode::Diamonds => "Diamonds",
            GameMode::Ltoosh => "Ltoosh",
            GameMode::Trix => "Trix",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a mode id does not name one of the five modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode: {0:?}")]
pub struct ParseModeError(pub String);

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// One of the two partnerships. Team one is the reference team whose raw
/// counts are collected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// Converts the raw team number (1 or 2).
    pub const fn from_number(n: u8) -> Option<Team> {
        match n {
            1 => Some(Team::One),
            2 => Some(Team::Two),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}
