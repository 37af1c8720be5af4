//! Game engine and round state management.

extern crate alloc;

use alloc::boxed::Box;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pegging::PeggingPile;
use crate::player::Player;

mod deal;
mod discard;
mod pegging;
mod show;
pub mod state;

pub use state::{GameState, Seat};

/// A player's seat: the strategy, the cards it holds and its score.
struct Contestant {
    player: Box<dyn Player>,
    hand: Hand,
    score: u32,
}

impl Contestant {
    fn new(player: Box<dyn Player>) -> Self {
        Self {
            player,
            hand: Hand::new(),
            score: 0,
        }
    }
}

/// A two-player cribbage game that manages dealing, the crib and scoring.
///
/// The game owns the deck, both hands, the crib and the pegging pile, so every
/// card is always in exactly one of them. Rounds advance through explicit
/// calls in the order given by [`GameState`]; calls out of order are rejected.
pub struct Game {
    deck: Deck,
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    seats: [Contestant; 2],
    crib: Hand,
    pegging_pile: PeggingPile,
    dealer: Seat,
    turn: Seat,
    /// Random number generator for choosing the first dealer.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The seed fixes the first dealer and every shuffle and cut.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Game, GameOptions, RandomPlayer};
    ///
    /// let game = Game::new(
    ///     Box::new(RandomPlayer::new("North", 1)),
    ///     Box::new(RandomPlayer::new("South", 2)),
    ///     GameOptions::default(),
    ///     42,
    /// );
    /// assert_eq!(game.deck().len(), cribrs::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
        options: GameOptions,
        seed: u64,
    ) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(rng.random());
        let dealer = Self::random_seat(&mut rng);

        Self {
            deck,
            options,
            state: GameState::Idle,
            seats: [Contestant::new(player_one), Contestant::new(player_two)],
            crib: Hand::new(),
            pegging_pile: PeggingPile::new(),
            dealer,
            turn: dealer.other(),
            rng,
        }
    }

    fn random_seat(rng: &mut ChaCha8Rng) -> Seat {
        if rng.random_bool(0.5) {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// Returns the current round state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the dealer's seat.
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Returns the non-dealer's seat.
    pub const fn non_dealer(&self) -> Seat {
        self.dealer.other()
    }

    /// Returns the seat whose turn it is to play.
    pub const fn turn(&self) -> Seat {
        self.turn
    }

    /// Returns the name of the player in the seat.
    pub fn player_name(&self, seat: Seat) -> &str {
        self.seats[seat.index()].player.name()
    }

    /// Returns the hand held by the seat.
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.seats[seat.index()].hand
    }

    /// Returns the seat's score.
    pub fn score(&self, seat: Seat) -> u32 {
        self.seats[seat.index()].score
    }

    /// Returns the deck. Its top card is the starter once cards are dealt.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the shuffled deck with a prepared one.
    ///
    /// Only allowed straight after [`Game::initialize_round`], and the new
    /// deck must hold each of the 52 cards exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not freshly initialized or the deck
    /// is not a complete pack.
    #[doc(hidden)]
    pub fn stack_deck(&mut self, deck: Deck) -> Result<(), RoundError> {
        if self.state != GameState::RoundInitialized {
            return Err(RoundError::InvalidState);
        }
        let complete = deck.len() == DECK_SIZE
            && full_deck().iter().all(|card| deck.cards().contains(card));
        if !complete {
            return Err(RoundError::IncompleteDeck(deck.len()));
        }

        self.deck = deck;
        log::trace!("deck stacked");
        Ok(())
    }

    /// Returns the crib.
    pub const fn crib(&self) -> &Hand {
        &self.crib
    }

    /// Returns the pegging pile.
    pub const fn pegging_pile(&self) -> &PeggingPile {
        &self.pegging_pile
    }

    /// Returns the starter card: the top of the deck.
    ///
    /// Only meaningful once cards have been dealt.
    pub fn starter(&self) -> Option<Card> {
        self.deck.top().copied()
    }

    /// Returns the winner, if any.
    ///
    /// Player one is checked first, so if both seats have reached the winning
    /// score player one wins.
    pub fn get_winner(&self) -> Option<Seat> {
        Seat::BOTH
            .into_iter()
            .find(|&seat| self.score(seat) >= self.options.winning_score)
    }

    /// Adds points to a seat and ends the round if that decides the game.
    ///
    /// Returns `true` if the game now has a winner.
    fn award(&mut self, seat: Seat, points: u32) -> bool {
        if points > 0 {
            let contestant = &mut self.seats[seat.index()];
            contestant.score += points;
            log::debug!("{seat} scores {points}, now {}", contestant.score);
        }

        match self.get_winner() {
            Some(winner) => {
                log::debug!("{winner} has won the game");
                self.state = GameState::RoundOver;
                true
            }
            None => false,
        }
    }

    /// Returns every card to the deck and passes the deal.
    ///
    /// The crib, both hands and the pegging pile are emptied and the old
    /// dealer leads the next round. Calling this twice in a row leaves the
    /// deck unchanged the second time apart from the dealer moving again.
    pub fn reset_game(&mut self) {
        for seat in Seat::BOTH {
            let cards = self.seats[seat.index()].hand.take_all();
            self.deck.return_cards(cards);
        }
        self.deck.return_cards(self.crib.take_all());
        self.deck.return_cards(self.pegging_pile.end_pegging());

        self.turn = self.dealer;
        self.dealer = self.dealer.other();
        self.state = GameState::Idle;
        log::debug!("round reset, {} deals next", self.dealer);
    }

    /// Starts a fresh match: resets the round, zeroes both scores and picks a
    /// new first dealer at random.
    pub fn start_new_game(&mut self) {
        self.reset_game();
        for contestant in &mut self.seats {
            contestant.score = 0;
        }
        self.dealer = Self::random_seat(&mut self.rng);
        self.turn = self.dealer.other();
        log::debug!("new game, {} deals first", self.dealer);
    }
}
