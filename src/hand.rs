//! Hands and the crib.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;
use crate::result::HandScore;
use crate::scoring;

/// An unordered collection of cards held by a player, or the crib.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        debug_assert!(!self.cards.contains(&card), "{card} is already held");
        self.cards.push(card);
    }

    /// Adds several cards to the hand.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.add_card(card);
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the first of `cards` that the hand does not hold, if any.
    ///
    /// A card listed twice must be held twice, so a duplicated selection is
    /// reported as missing.
    #[must_use]
    pub fn find_missing(&self, cards: &[Card]) -> Option<Card> {
        let mut remaining = self.cards.clone();
        for card in cards {
            match remaining.iter().position(|held| held == card) {
                Some(index) => {
                    remaining.swap_remove(index);
                }
                None => return Some(*card),
            }
        }
        None
    }

    /// Removes a single card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotFound`] if the card is not held.
    pub fn remove(&mut self, card: &Card) -> Result<Card, HandError> {
        let index = self
            .cards
            .iter()
            .position(|held| held == card)
            .ok_or(HandError::CardNotFound(*card))?;
        Ok(self.cards.remove(index))
    }

    /// Removes all of `cards` from the hand.
    ///
    /// Either every card is removed or none is.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotFound`] for the first card that is not held.
    pub fn discard(&mut self, cards: &[Card]) -> Result<(), HandError> {
        if let Some(missing) = self.find_missing(cards) {
            return Err(HandError::CardNotFound(missing));
        }
        for card in cards {
            self.remove(card)?;
        }
        Ok(())
    }

    /// Removes and returns every card.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Scores the hand as it stands.
    #[must_use]
    pub fn score(&self) -> HandScore {
        scoring::score_cards(&self.cards)
    }

    /// Scores the hand with the starter appended as its last card.
    ///
    /// The hand itself is left untouched.
    #[must_use]
    pub fn score_with_starter(&self, starter: Card) -> HandScore {
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        cards.extend_from_slice(&self.cards);
        cards.push(starter);
        scoring::score_cards(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        f.write_str(" ]")
    }
}
