//! Shared helpers for integration tests.

use cribrs::{Card, Face, Suit};

/// Parses a card such as `"10H"` or `"QS"`.
pub fn card(text: &str) -> Card {
    let (face, suit) = text.split_at(text.len() - 1);
    let face = match face {
        "A" => Face::Ace,
        "2" => Face::Two,
        "3" => Face::Three,
        "4" => Face::Four,
        "5" => Face::Five,
        "6" => Face::Six,
        "7" => Face::Seven,
        "8" => Face::Eight,
        "9" => Face::Nine,
        "10" => Face::Ten,
        "J" => Face::Jack,
        "Q" => Face::Queen,
        "K" => Face::King,
        other => panic!("bad face {other}"),
    };
    let suit = match suit {
        "D" => Suit::Diamonds,
        "S" => Suit::Spades,
        "C" => Suit::Clubs,
        "H" => Suit::Hearts,
        other => panic!("bad suit {other}"),
    };
    Card::new(face, suit)
}

/// Parses whitespace separated cards.
pub fn cards(text: &str) -> Vec<Card> {
    text.split_whitespace().map(card).collect()
}
