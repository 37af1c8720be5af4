//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;
use crate::game::Seat;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when removing cards from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not held in the hand.
    #[error("card {0} is not in the hand")]
    CardNotFound(Card),
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for starting a round.
    #[error("invalid game state for starting a round")]
    InvalidState,
    /// A prepared deck is not a complete pack of distinct cards.
    #[error("prepared deck is not a complete pack ({0} cards)")]
    IncompleteDeck(usize),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck: need {needed}, have {remaining}")]
    NotEnoughCards {
        /// Cards required for the deal.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur while collecting discards for the crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// Invalid game state for discarding.
    #[error("invalid game state for discarding")]
    InvalidState,
    /// A player returned the wrong number of discards.
    #[error("{seat} discarded {actual} cards, expected {expected}")]
    InvalidDiscardCount {
        /// The offending player.
        seat: Seat,
        /// Required number of discards.
        expected: usize,
        /// Number of cards returned.
        actual: usize,
    },
    /// A player discarded a card it does not hold.
    #[error("{seat} does not hold {card}")]
    CardNotFound {
        /// The offending player.
        seat: Seat,
        /// The missing card.
        card: Card,
    },
}

/// Errors that can occur during pegging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeggingError {
    /// Invalid game state for pegging.
    #[error("invalid game state for pegging")]
    InvalidState,
    /// The card would push the count past 31.
    #[error("playing {card} on a count of {total} exceeds 31")]
    Overplay {
        /// The rejected card.
        card: Card,
        /// The count before the play.
        total: u8,
    },
    /// Every card in the hand would overplay ("go").
    #[error("no legal card to play")]
    NoLegalPlay,
    /// A player selected a card it does not hold.
    #[error("card {0} is not in the player's hand")]
    CardNotInHand(Card),
}

/// Errors that can occur while scoring hands and the crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Invalid game state for this scoring step.
    #[error("invalid game state for scoring")]
    InvalidState,
    /// The deck holds no starter card.
    #[error("no starter card left in the deck")]
    NoStarter,
}
