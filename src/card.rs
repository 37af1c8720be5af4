//! Card types and deck utilities.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// Card suit.
///
/// The declaration order is the suit ordinal used as a tiebreak when
/// ordering cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Spades, Self::Clubs, Self::Hearts];

    /// Returns the display symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Spades => '♠',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card face.
///
/// A face has two independent attributes: its [`rank`](Face::rank) (1-13,
/// Ace low) used for runs, and its [`value`](Face::value) (1-10) used for
/// fifteens and pegging counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Face {
    /// All faces from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the sequence rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the counting value (face cards count 10).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self.rank(),
        }
    }

    /// Returns the display symbol of the face.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Equality is card identity (face and suit). Scoring rules that only care
/// about the face use [`Card::same_face`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The face of the card.
    pub face: Face,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }

    /// Returns the sequence rank of the card.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.face.rank()
    }

    /// Returns the counting value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.face.value()
    }

    /// Returns whether both cards share a face, ignoring suit.
    #[must_use]
    pub fn same_face(&self, other: &Self) -> bool {
        self.face == other.face
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        // Value first, then rank so that 10/J/Q/K stay distinct, then suit.
        self.value()
            .cmp(&other.value())
            .then_with(|| self.face.cmp(&other.face))
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns all 52 cards in canonical order (suit by suit, Ace to King).
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for face in Face::ALL {
            cards.push(Card::new(face, suit));
        }
    }
    cards
}
