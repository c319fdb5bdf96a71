use std::ops::RangeInclusive;

use crate::domain::modes::GameMode;
use crate::domain::state::Points;

pub const TEAMS: usize = 2;
pub const TOTAL_ROUNDS_PER_KINGDOM: usize = 5;
pub const MAX_KINGDOMS: u32 = 4;

pub const KING_PENALTY: Points = -75;
pub const QUEEN_PENALTY: Points = -25;
pub const DIAMOND_PENALTY: Points = -10;
pub const LTOOSH_PENALTY: Points = -15;

pub const QUEENS_IN_PLAY: u8 = 4;
pub const DIAMONDS_IN_PLAY: u8 = 13;
pub const TRICKS_IN_PLAY: u8 = 13;

/// Finishing positions in a trix hand, 1-based.
pub const TRIX_POSITIONS: RangeInclusive<u8> = 1..=4;

// Bonus by finishing position: first out earns the most.
pub fn trix_bonus(position: u8) -> Option<Points> {
    match position {
        1 => Some(200),
        2 => Some(150),
        3 => Some(100),
        4 => Some(50),
        _ => None,
    }
}

/// Number of penalised items shared between both teams for a counting mode.
/// `None` for king (one card) and trix (positions, not counts).
pub fn items_in_play(mode: GameMode) -> Option<u8> {
    match mode {
        GameMode::Queen => Some(QUEENS_IN_PLAY),
        GameMode::Diamonds => Some(DIAMONDS_IN_PLAY),
        GameMode::Ltoosh => Some(TRICKS_IN_PLAY),
        GameMode::King | GameMode::Trix => None,
    }
}

pub fn valid_count_range(mode: GameMode) -> Option<RangeInclusive<u8>> {
    items_in_play(mode).map(|n| 0..=n)
}

/// Combined points both teams receive in one play of `mode`.
pub fn mode_total(mode: GameMode) -> Points {
    match mode {
        GameMode::King => KING_PENALTY,
        GameMode::Queen => QUEEN_PENALTY * Points::from(QUEENS_IN_PLAY),
        GameMode::Diamonds => DIAMOND_PENALTY * Points::from(DIAMONDS_IN_PLAY),
        GameMode::Ltoosh => LTOOSH_PENALTY * Points::from(TRICKS_IN_PLAY),
        GameMode::Trix => TRIX_POSITIONS.filter_map(trix_bonus).sum(),
    }
}
