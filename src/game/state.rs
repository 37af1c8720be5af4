//! Game state types.

use core::fmt;

/// Round state.
///
/// A round moves through these states in order. [`Game::peg`] is optional:
/// the show may start straight from `DiscardsHandled`.
///
/// [`Game::peg`]: crate::Game::peg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds; all cards are in the deck.
    Idle,
    /// The deck has been shuffled and cut.
    RoundInitialized,
    /// Both players hold their dealt cards.
    CardsDealt,
    /// Discards are in the crib.
    DiscardsHandled,
    /// Pegging has finished and the hands are back with their owners.
    Pegged,
    /// The non-dealer's hand has been scored.
    NonDealerScored,
    /// The dealer's hand has been scored.
    DealerScored,
    /// The round is finished, either after the crib or because a player won.
    RoundOver,
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// Player one.
    One,
    /// Player two.
    Two,
}

impl Seat {
    /// Both seats, player one first.
    pub const BOTH: [Self; 2] = [Self::One, Self::Two];

    /// Returns the opposite seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("player one"),
            Self::Two => f.write_str("player two"),
        }
    }
}
