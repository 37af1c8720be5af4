//! Hand scoring for the show.
//!
//! Every function here is pure and treats its input as a snapshot. When a
//! starter card is included it must be the last of five cards: the flush and
//! nob rules depend on its position.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Face};
use crate::result::HandScore;

/// Number of cards in a hand scored together with its starter.
pub const HAND_WITH_STARTER: usize = 5;

/// Number of cards in a hand or crib without the starter.
pub const HAND_WITHOUT_STARTER: usize = 4;

/// Shortest run that scores.
const MIN_RUN: usize = 3;

/// Yields every subset of `0..n` as a bit mask, smallest first.
fn subsets(n: usize) -> impl Iterator<Item = u32> {
    debug_assert!(n < 32, "hand too large to enumerate");
    1..(1u32 << n)
}

fn selected(cards: &[Card], mask: u32) -> impl Iterator<Item = &Card> {
    cards
        .iter()
        .enumerate()
        .filter(move |(i, _)| mask & (1 << i) != 0)
        .map(|(_, card)| card)
}

/// Returns whether the ranks form a strictly consecutive sequence.
///
/// The slice is sorted in place.
pub(crate) fn is_run(ranks: &mut [u8]) -> bool {
    ranks.sort_unstable();
    ranks.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Scores 2 for every subset of cards whose values sum to 15.
#[must_use]
pub fn fifteens(cards: &[Card]) -> u8 {
    let count = subsets(cards.len())
        .filter(|&mask| {
            selected(cards, mask)
                .map(|card| u32::from(card.value()))
                .sum::<u32>()
                == 15
        })
        .count();
    (count * 2) as u8
}

/// Scores 2 for every pair of cards sharing a face.
#[must_use]
pub fn pairs(cards: &[Card]) -> u8 {
    let mut score = 0;
    for (i, card) in cards.iter().enumerate() {
        for other in &cards[i + 1..] {
            if card.same_face(other) {
                score += 2;
            }
        }
    }
    score
}

/// Scores the longest runs in the hand.
///
/// Only the maximal run length scores, once per distinct set of cards that
/// forms it: 3-4-5-5-6 holds two runs of four and scores 8, never the runs
/// of three inside them.
#[must_use]
pub fn runs(cards: &[Card]) -> u8 {
    let mut ranks = Vec::with_capacity(cards.len());
    for length in (MIN_RUN..=cards.len()).rev() {
        let found = subsets(cards.len())
            .filter(|mask| mask.count_ones() as usize == length)
            .filter(|&mask| {
                ranks.clear();
                ranks.extend(selected(cards, mask).map(Card::rank));
                is_run(&mut ranks)
            })
            .count();
        if found > 0 {
            log::trace!("{found} run(s) of {length}");
            return (found * length) as u8;
        }
    }
    0
}

/// Scores a flush.
///
/// Five of a suit including the starter scores 5. Four of a suit in the hand
/// scores 4 whether or not a starter is present. Anything else scores 0.
#[must_use]
pub fn flush(cards: &[Card]) -> u8 {
    let same_suit = |hand: &[Card]| hand.windows(2).all(|pair| pair[0].suit == pair[1].suit);
    match cards {
        [hand @ .., starter] if cards.len() == HAND_WITH_STARTER => {
            if !same_suit(hand) {
                0
            } else if hand[0].suit == starter.suit {
                5
            } else {
                4
            }
        }
        hand if hand.len() == HAND_WITHOUT_STARTER && same_suit(hand) => 4,
        _ => 0,
    }
}

/// Scores 1 for holding the Jack of the starter's suit.
///
/// Only applies to a five-card hand whose last card is the starter.
#[must_use]
pub fn nob(cards: &[Card]) -> u8 {
    match cards {
        [hand @ .., starter] if cards.len() == HAND_WITH_STARTER => u8::from(
            hand.iter()
                .any(|card| card.face == Face::Jack && card.suit == starter.suit),
        ),
        _ => 0,
    }
}

/// Scores a hand, returning each component.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Face, Suit};
/// use cribrs::scoring::score_cards;
///
/// let hand = [
///     Card::new(Face::Five, Suit::Diamonds),
///     Card::new(Face::Five, Suit::Spades),
///     Card::new(Face::Five, Suit::Clubs),
///     Card::new(Face::Jack, Suit::Hearts),
///     Card::new(Face::Five, Suit::Hearts),
/// ];
/// assert_eq!(score_cards(&hand).total(), 29);
/// ```
#[must_use]
pub fn score_cards(cards: &[Card]) -> HandScore {
    let score = HandScore {
        fifteens: fifteens(cards),
        pairs: pairs(cards),
        runs: runs(cards),
        flush: flush(cards),
        nob: nob(cards),
    };
    log::trace!("scored {} cards: {score:?}", cards.len());
    score
}
