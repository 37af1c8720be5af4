//! A cribbage game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a two-player round: shuffle
//! and cut, deal, discard to the crib, optional pegging, and the show
//! (non-dealer, dealer, crib). Hand scoring lives in [`scoring`] and live
//! play scoring in [`PeggingPile`]; both can be used on their own.
//!
//! # Example
//!
//! ```no_run
//! use cribrs::{Game, GameOptions, RandomPlayer};
//!
//! let mut game = Game::new(
//!     Box::new(RandomPlayer::new("North", 1)),
//!     Box::new(RandomPlayer::new("South", 2)),
//!     GameOptions::default(),
//!     42,
//! );
//! game.initialize_round().unwrap();
//! game.deal_cards().unwrap();
//! game.handle_discards().unwrap();
//! let score = game.score_non_dealer(true).unwrap();
//! println!("non-dealer shows {}", score.total());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pegging;
pub mod player;
pub mod result;
pub mod scoring;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use deck::Deck;
pub use error::{
    DealError, DeckError, DiscardError, HandError, PeggingError, RoundError, ScoringError,
};
pub use game::{Game, GameState, Seat};
pub use hand::Hand;
pub use options::GameOptions;
pub use pegging::PeggingPile;
pub use player::{Player, RandomPlayer};
pub use result::{HandScore, PegPlay, PeggingResult};
