//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, full_deck};
use crate::error::DeckError;

/// An ordered deck of cards with its own random number generator.
///
/// The top of the deck is the end of the card list: [`Deck::deal`] pops from
/// it and [`Deck::top`] peeks at it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck in canonical order with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::deck::Deck;
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), cribrs::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_cards(full_deck(), seed)
    }

    /// Creates a deck holding exactly `cards`, last card on top.
    ///
    /// Useful for stacking a deck in tests. The caller is responsible for
    /// passing a set of distinct cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the deck uniformly.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Cuts the deck at a random point, moving the cards below it to the top.
    pub fn cut(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let cut_point = self.rng.random_range(0..self.cards.len());
        self.cards.rotate_left(cut_point);
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Puts cards back into the deck.
    ///
    /// Returned cards go underneath; their position is irrelevant once the
    /// deck is shuffled for the next round.
    pub fn return_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        let mut returned: Vec<Card> = cards.into_iter().collect();
        let count = returned.len();
        returned.append(&mut self.cards);
        self.cards = returned;
        debug_assert!(
            self.cards.len() <= crate::card::DECK_SIZE,
            "returned more cards than a deck holds"
        );
        log::trace!("returned {count} cards to the deck");
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

