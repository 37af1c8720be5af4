//! Player strategies.
//!
//! The engine asks a [`Player`] to choose discards and pegging cards and
//! validates every answer. Strategies never see engine state beyond the
//! cards and scores passed to them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::PeggingError;
use crate::hand::Hand;
use crate::pegging::PeggingPile;

/// Decision-making capability consumed by the game.
pub trait Player {
    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Chooses `count` cards from `hand` to lay away to the crib.
    ///
    /// Returning the wrong number of cards, or cards not in `hand`, is
    /// rejected by the game.
    fn select_discards(
        &mut self,
        hand: &Hand,
        count: usize,
        is_dealer: bool,
        opponent_score: u32,
    ) -> Vec<Card>;

    /// Chooses a card from `hand` to play on the pile.
    ///
    /// # Errors
    ///
    /// Returns [`PeggingError::NoLegalPlay`] when every card would overplay 31.
    fn select_peg_card(
        &mut self,
        hand: &Hand,
        pile: &PeggingPile,
        opponent_score: u32,
    ) -> Result<Card, PeggingError>;
}

/// A player that discards and pegs at random.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    /// Creates a random player with the given seed.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_discards(
        &mut self,
        hand: &Hand,
        count: usize,
        _is_dealer: bool,
        _opponent_score: u32,
    ) -> Vec<Card> {
        let mut cards = hand.cards().to_vec();
        cards.shuffle(&mut self.rng);
        cards.truncate(count);
        cards
    }

    fn select_peg_card(
        &mut self,
        hand: &Hand,
        pile: &PeggingPile,
        _opponent_score: u32,
    ) -> Result<Card, PeggingError> {
        pile.legal_plays(hand.cards())
            .choose(&mut self.rng)
            .copied()
            .ok_or(PeggingError::NoLegalPlay)
    }
}
