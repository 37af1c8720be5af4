//! The pegging pile used during live play.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::PeggingError;
use crate::scoring::is_run;

/// Highest count the pile may reach.
pub const MAX_COUNT: u8 = 31;

/// Count that scores two points mid-play.
const FIFTEEN: u8 = 15;

/// Shortest run that scores during play.
const MIN_RUN: usize = 3;

/// The shared pile of cards played during pegging.
///
/// Cards played since the last reset are live and make up the count. A count
/// of exactly 31 moves them to the dead cards immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeggingPile {
    cards_in_play: Vec<Card>,
    dead_cards: Vec<Card>,
}

impl PeggingPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards_in_play: Vec::new(),
            dead_cards: Vec::new(),
        }
    }

    /// Returns the live cards in play order.
    #[must_use]
    pub fn cards_in_play(&self) -> &[Card] {
        &self.cards_in_play
    }

    /// Returns the cards already played and reset away.
    #[must_use]
    pub fn dead_cards(&self) -> &[Card] {
        &self.dead_cards
    }

    /// Returns the total number of cards held by the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards_in_play.len() + self.dead_cards.len()
    }

    /// Returns whether the pile holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards_in_play.is_empty() && self.dead_cards.is_empty()
    }

    /// Returns the current count.
    #[must_use]
    pub fn current_total(&self) -> u8 {
        self.cards_in_play.iter().map(Card::value).sum()
    }

    /// Returns whether the card can be played without exceeding 31.
    #[must_use]
    pub fn can_play(&self, card: &Card) -> bool {
        self.current_total() + card.value() <= MAX_COUNT
    }

    /// Returns the cards from `hand` that can be played on the current count.
    #[must_use]
    pub fn legal_plays(&self, hand: &[Card]) -> Vec<Card> {
        hand.iter().copied().filter(|card| self.can_play(card)).collect()
    }

    /// Plays a card onto the pile and returns the points it scores.
    ///
    /// The card is appended first and the live stack is then scored. Reaching
    /// 31 scores and then resets the count.
    ///
    /// # Errors
    ///
    /// Returns [`PeggingError::Overplay`] if the card would push the count past
    /// 31. The pile is left unchanged.
    pub fn play(&mut self, card: Card) -> Result<u8, PeggingError> {
        let total = self.current_total();
        if total + card.value() > MAX_COUNT {
            return Err(PeggingError::Overplay { card, total });
        }

        self.cards_in_play.push(card);
        let points = self.score();
        log::trace!(
            "pegged {card} for a count of {}: {points} points",
            total + card.value()
        );

        if self.current_total() == MAX_COUNT {
            self.end_current_play();
        }

        Ok(points)
    }

    /// Scores the live stack as it stands.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.of_a_kind() + self.count_bonus() + self.run()
    }

    /// 2, 6 or 12 points for the last two, three or four cards sharing a face.
    fn of_a_kind(&self) -> u8 {
        let Some(last) = self.cards_in_play.last() else {
            return 0;
        };
        let matching = self
            .cards_in_play
            .iter()
            .rev()
            .take_while(|card| card.same_face(last))
            .count() as u8;
        matching * (matching - 1)
    }

    fn count_bonus(&self) -> u8 {
        match self.current_total() {
            FIFTEEN | MAX_COUNT => 2,
            _ => 0,
        }
    }

    /// Longest run formed by the trailing cards, in any order.
    ///
    /// The window is bounded by the live stack, which the 31 cap keeps short.
    fn run(&self) -> u8 {
        let mut ranks = Vec::with_capacity(self.cards_in_play.len());
        for window in (MIN_RUN..=self.cards_in_play.len()).rev() {
            ranks.clear();
            ranks.extend(
                self.cards_in_play[self.cards_in_play.len() - window..]
                    .iter()
                    .map(Card::rank),
            );
            if is_run(&mut ranks) {
                return window as u8;
            }
        }
        0
    }

    /// Ends the current count, moving the live cards to the dead cards.
    ///
    /// Used on 31 and when neither player can play.
    pub fn end_current_play(&mut self) {
        self.dead_cards.append(&mut self.cards_in_play);
    }

    /// Ends pegging and returns every card the pile held.
    pub fn end_pegging(&mut self) -> Vec<Card> {
        self.end_current_play();
        core::mem::take(&mut self.dead_cards)
    }
}

impl fmt::Display for PeggingPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ in play:")?;
        for card in &self.cards_in_play {
            write!(f, " {card}")?;
        }
        f.write_str(" | dead:")?;
        for card in &self.dead_cards {
            write!(f, " {card}")?;
        }
        f.write_str(" ]")
    }
}
