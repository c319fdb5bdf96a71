use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::domain::modes::{GameMode, Team};
use crate::domain::rules::{
    items_in_play, trix_bonus, DIAMOND_PENALTY, KING_PENALTY, LTOOSH_PENALTY, QUEEN_PENALTY,
    TRIX_POSITIONS,
};
use crate::domain::selection::RawSelection;
use crate::domain::state::Points;
use crate::errors::domain::DomainError;

/// Points awarded to each team for one completed mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub team1: Points,
    pub team2: Points,
}

impl ScoreDelta {
    pub const ZERO: ScoreDelta = ScoreDelta::new(0, 0);

    pub const fn new(team1: Points, team2: Points) -> Self {
        Self { team1, team2 }
    }

    pub const fn total(&self) -> Points {
        self.team1 + self.team2
    }

    /// `None` when either team's points would leave the `Points` range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(ScoreDelta::new(
            self.team1.checked_add(rhs.team1)?,
            self.team2.checked_add(rhs.team2)?,
        ))
    }
}

impl Add for ScoreDelta {
    type Output = ScoreDelta;

    fn add(self, rhs: Self) -> Self::Output {
        ScoreDelta::new(self.team1 + rhs.team1, self.team2 + rhs.team2)
    }
}

impl Sub for ScoreDelta {
    type Output = ScoreDelta;

    fn sub(self, rhs: Self) -> Self::Output {
        ScoreDelta::new(self.team1 - rhs.team1, self.team2 - rhs.team2)
    }
}

impl Sum for ScoreDelta {
    fn sum<I: Iterator<Item = ScoreDelta>>(iter: I) -> Self {
        iter.fold(ScoreDelta::ZERO, Add::add)
    }
}

/// Score one completed mode from its raw selection.
///
/// Pure: identical inputs always give identical deltas. A selection whose
/// shape does not belong to `mode`, or whose values are out of range, is
/// rejected with `InvalidSelection`; no zero-score fallback is produced.
pub fn score(mode: GameMode, selection: &RawSelection) -> Result<ScoreDelta, DomainError> {
    match (mode, *selection) {
        (GameMode::King, RawSelection::King { team }) => king_delta(team),
        (GameMode::Queen, RawSelection::Queen { count }) => {
            count_delta(GameMode::Queen, count, QUEEN_PENALTY)
        }
        (GameMode::Diamonds, RawSelection::Diamonds { count }) => {
            count_delta(GameMode::Diamonds, count, DIAMOND_PENALTY)
        }
        (GameMode::Ltoosh, RawSelection::Ltoosh { count }) => {
            count_delta(GameMode::Ltoosh, count, LTOOSH_PENALTY)
        }
        (GameMode::Trix, RawSelection::Trix { positions }) => trix_delta(positions),
        (mode, other) => Err(DomainError::invalid_selection(
            mode,
            format!("expected a {mode} selection, got a {} selection", other.mode()),
        )),
    }
}

fn king_delta(team_no: u8) -> Result<ScoreDelta, DomainError> {
    match Team::from_number(team_no) {
        Some(Team::One) => Ok(ScoreDelta::new(KING_PENALTY, 0)),
        Some(Team::Two) => Ok(ScoreDelta::new(0, KING_PENALTY)),
        None => Err(DomainError::invalid_selection(
            GameMode::King,
            format!("team must be 1 or 2, got {team_no}"),
        )),
    }
}

fn count_delta(mode: GameMode, count: u8, penalty: Points) -> Result<ScoreDelta, DomainError> {
    let in_play = items_in_play(mode).ok_or_else(|| {
        DomainError::invariant(format!("{mode} is not a counting mode"))
    })?;
    if count > in_play {
        return Err(DomainError::invalid_selection(
            mode,
            format!("count must be within 0..={in_play}, got {count}"),
        ));
    }
    Ok(ScoreDelta::new(
        penalty * Points::from(count),
        penalty * Points::from(in_play - count),
    ))
}

fn trix_delta([first, second]: [u8; 2]) -> Result<ScoreDelta, DomainError> {
    if first == second {
        return Err(DomainError::invalid_selection(
            GameMode::Trix,
            format!("positions must differ, got {first} and {second}"),
        ));
    }
    let bonus = |position: u8| {
        trix_bonus(position).ok_or_else(|| {
            DomainError::invalid_selection(
                GameMode::Trix,
                format!("position {position} is outside 1..=4"),
            )
        })
    };
    let team1 = bonus(first)? + bonus(second)?;
    let team2: Points = TRIX_POSITIONS
        .filter(|p| *p != first && *p != second)
        .filter_map(trix_bonus)
        .sum();
    Ok(ScoreDelta::new(team1, team2))
}

/// Every valid raw selection for `mode`, in ascending raw order, with its delta.
///
/// Lets a caller label its choices (`2 (-50)`) without re-implementing the rules.
pub fn preview_options(mode: GameMode) -> Vec<(RawSelection, ScoreDelta)> {
    let selections: Vec<RawSelection> = match mode {
        GameMode::King => vec![RawSelection::king(1), RawSelection::king(2)],
        GameMode::Queen | GameMode::Diamonds | GameMode::Ltoosh => {
            let in_play = items_in_play(mode).unwrap_or(0);
            (0..=in_play)
                .map(|count| match mode {
                    GameMode::Queen => RawSelection::queen(count),
                    GameMode::Diamonds => RawSelection::diamonds(count),
                    _ => RawSelection::ltoosh(count),
                })
                .collect()
        }
        GameMode::Trix => TRIX_POSITIONS
            .flat_map(|a| TRIX_POSITIONS.filter(move |b| *b > a).map(move |b| (a, b)))
            .map(|(a, b)| RawSelection::trix(a, b))
            .collect(),
    };
    selections
        .into_iter()
        .filter_map(|sel| score(mode, &sel).ok().map(|delta| (sel, delta)))
        .collect()
}
