// Proptest generators for domain types.
// Selections are valid by construction unless the generator name says otherwise.

use proptest::prelude::*;

use crate::domain::{GameMode, RawSelection};

/// Generate a random GameMode
pub fn mode() -> impl Strategy<Value = GameMode> {
    prop_oneof![
        Just(GameMode::King),
        Just(GameMode::Queen),
        Just(GameMode::Diamonds),
        Just(GameMode::Ltoosh),
        Just(GameMode::Trix),
    ]
}

/// Two distinct trix positions in 1..=4, in either order
pub fn trix_positions() -> impl Strategy<Value = (u8, u8)> {
    (1u8..=4, 1u8..=3).prop_map(|(a, offset)| {
        let b = (a - 1 + offset) % 4 + 1;
        (a, b)
    })
}

/// Generate a valid raw selection for `mode`
pub fn selection_for(mode: GameMode) -> BoxedStrategy<RawSelection> {
    match mode {
        GameMode::King => (1u8..=2).prop_map(RawSelection::king).boxed(),
        GameMode::Queen => (0u8..=4).prop_map(RawSelection::queen).boxed(),
        GameMode::Diamonds => (0u8..=13).prop_map(RawSelection::diamonds).boxed(),
        GameMode::Ltoosh => (0u8..=13).prop_map(RawSelection::ltoosh).boxed(),
        GameMode::Trix => trix_positions()
            .prop_map(|(a, b)| RawSelection::trix(a, b))
            .boxed(),
    }
}

/// A mode paired with a valid selection for it
pub fn scored_mode() -> impl Strategy<Value = (GameMode, RawSelection)> {
    mode().prop_flat_map(|m| selection_for(m).prop_map(move |sel| (m, sel)))
}

/// Trix selections that must be rejected: duplicates or positions outside 1..=4
pub fn invalid_trix() -> impl Strategy<Value = RawSelection> {
    prop_oneof![
        (0u8..=6).prop_map(|p| RawSelection::trix(p, p)),
        (5u8..=u8::MAX, 1u8..=4).prop_map(|(bad, ok)| RawSelection::trix(bad, ok)),
        (1u8..=4).prop_map(|ok| RawSelection::trix(ok, 0)),
    ]
}

/// Counts beyond the items in play for a counting mode
pub fn out_of_range_count() -> impl Strategy<Value = (GameMode, RawSelection)> {
    prop_oneof![
        (5u8..=u8::MAX).prop_map(|c| (GameMode::Queen, RawSelection::queen(c))),
        (14u8..=u8::MAX).prop_map(|c| (GameMode::Diamonds, RawSelection::diamonds(c))),
        (14u8..=u8::MAX).prop_map(|c| (GameMode::Ltoosh, RawSelection::ltoosh(c))),
        (3u8..=u8::MAX).prop_map(|t| (GameMode::King, RawSelection::king(t))),
        Just((GameMode::King, RawSelection::king(0))),
    ]
}

/// One caller action against the engine
#[derive(Debug, Clone)]
pub enum Op {
    Select(GameMode),
    Score(GameMode, RawSelection),
    Undo,
    CompleteKingdom,
    Reset,
}

/// Caller actions weighted towards scoring so kingdoms actually fill up
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => mode().prop_map(Op::Select),
        6 => scored_mode().prop_map(|(m, sel)| Op::Score(m, sel)),
        2 => Just(Op::Undo),
        2 => Just(Op::CompleteKingdom),
        1 => Just(Op::Reset),
    ]
}

pub fn ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..=max_len)
}
