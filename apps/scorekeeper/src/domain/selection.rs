//! Raw, unvalidated selections collected by the caller for one mode.
//!
//! Nothing here is checked; the calculator validates a selection when it is
//! scored. `TrixPick` is the caller-owned pending selection for trix, built
//! one position at a time before it is confirmed.

use serde::{Deserialize, Serialize};

use crate::domain::modes::{GameMode, Team};
use crate::domain::rules::TRIX_POSITIONS;
use crate::errors::domain::DomainError;

/// Raw input for one completed mode. Counts and positions are always team one's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RawSelection {
    /// Team number (1 or 2) that collected the king.
    King { team: u8 },
    Queen { count: u8 },
    Diamonds { count: u8 },
    Ltoosh { count: u8 },
    /// Finishing positions of team one's two players.
    Trix { positions: [u8; 2] },
}

impl RawSelection {
    pub const fn king(team: u8) -> Self {
        RawSelection::King { team }
    }

    pub const fn king_taken_by(team: Team) -> Self {
        RawSelection::King {
            team: team.number(),
        }
    }

    pub const fn queen(count: u8) -> Self {
        RawSelection::Queen { count }
    }

    pub const fn diamonds(count: u8) -> Self {
        RawSelection::Diamonds { count }
    }

    pub const fn ltoosh(count: u8) -> Self {
        RawSelection::Ltoosh { count }
    }

    pub const fn trix(first: u8, second: u8) -> Self {
        RawSelection::Trix {
            positions: [first, second],
        }
    }

    /// The mode whose input shape this selection has.
    pub const fn mode(&self) -> GameMode {
        match self {
            RawSelection::King { .. } => GameMode::King,
            RawSelection::Queen { .. } => GameMode::Queen,
            RawSelection::Diamonds { .. } => GameMode::Diamonds,
            RawSelection::Ltoosh { .. } => GameMode::Ltoosh,
            RawSelection::Trix { .. } => GameMode::Trix,
        }
    }
}

/// Pending trix selection: team one's finishing positions picked one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrixPick {
    positions: Vec<u8>,
}

impl TrixPick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    pub fn is_complete(&self) -> bool {
        self.positions.len() == 2
    }

    /// Adds a position. Rejects out-of-range, repeated, or a third position.
    pub fn pick(&mut self, position: u8) -> Result<(), DomainError> {
        if !TRIX_POSITIONS.contains(&position) {
            return Err(DomainError::invalid_selection(
                GameMode::Trix,
                format!("position {position} is outside 1..=4"),
            ));
        }
        if self.positions.contains(&position) {
            return Err(DomainError::invalid_selection(
                GameMode::Trix,
                format!("position {position} is already picked"),
            ));
        }
        if self.is_complete() {
            return Err(DomainError::invalid_selection(
                GameMode::Trix,
                "team one already holds two positions",
            ));
        }
        self.positions.push(position);
        Ok(())
    }

    /// Removes a previously picked position; returns whether it was held.
    pub fn unpick(&mut self, position: u8) -> bool {
        let before = self.positions.len();
        self.positions.retain(|&p| p != position);
        self.positions.len() != before
    }

    /// Confirms the pick. Missing or incomplete picks are rejected.
    pub fn finish(&self) -> Result<RawSelection, DomainError> {
        match self.positions.as_slice() {
            [first, second] => Ok(RawSelection::trix(*first, *second)),
            held => Err(DomainError::invalid_selection(
                GameMode::Trix,
                format!("two positions required, {} picked", held.len()),
            )),
        }
    }
}
