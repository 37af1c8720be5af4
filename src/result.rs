//! Score breakdowns returned by the scoring steps.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Seat;

/// Points scored by a hand or crib, by rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandScore {
    /// Points for combinations summing to 15.
    pub fifteens: u8,
    /// Points for pairs.
    pub pairs: u8,
    /// Points for runs.
    pub runs: u8,
    /// Points for a flush.
    pub flush: u8,
    /// Point for the nob.
    pub nob: u8,
}

impl HandScore {
    /// Returns the total points.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.fifteens + self.pairs + self.runs + self.flush + self.nob
    }
}

/// A single card played during pegging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PegPlay {
    /// Who played the card.
    pub seat: Seat,
    /// The card played.
    pub card: Card,
    /// The count after the card was played (31 is reported before the reset).
    pub count: u8,
    /// Points scored by the play.
    pub points: u8,
}

/// Outcome of the pegging phase.
#[derive(Debug, Clone, Default)]
pub struct PeggingResult {
    /// Every card played, in order.
    pub plays: Vec<PegPlay>,
    /// Points pegged by the non-dealer, including go and last card.
    pub non_dealer_points: u32,
    /// Points pegged by the dealer, including go and last card.
    pub dealer_points: u32,
    /// Whether pegging stopped early because a player reached the winning score.
    pub ended_by_win: bool,
}
