extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DiscardError, HandError};

use super::{Game, GameState, Seat};

impl Game {
    /// Asks both players for their discards and moves them into the crib.
    ///
    /// Player one is asked first. Both selections are validated before any
    /// card moves.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have not been dealt, a player returns the
    /// wrong number of cards, or a player returns a card it does not hold.
    pub fn handle_discards(&mut self) -> Result<(), DiscardError> {
        if self.state != GameState::CardsDealt {
            return Err(DiscardError::InvalidState);
        }

        let selections = [
            self.select_discards(Seat::One)?,
            self.select_discards(Seat::Two)?,
        ];

        for (seat, selection) in Seat::BOTH.into_iter().zip(selections) {
            self.seats[seat.index()]
                .hand
                .discard(&selection)
                .map_err(|HandError::CardNotFound(card)| DiscardError::CardNotFound { seat, card })?;
            log::trace!("{seat} lays away {} cards", selection.len());
            self.crib.add_cards(selection);
        }

        self.state = GameState::DiscardsHandled;
        log::debug!("crib holds {} cards", self.crib.len());

        Ok(())
    }

    fn select_discards(&mut self, seat: Seat) -> Result<Vec<Card>, DiscardError> {
        let expected = self.options.discards_per_player;
        let is_dealer = seat == self.dealer;
        let opponent_score = self.score(seat.other());

        let contestant = &mut self.seats[seat.index()];
        let selection = contestant.player.select_discards(
            &contestant.hand,
            expected,
            is_dealer,
            opponent_score,
        );

        if selection.len() != expected {
            return Err(DiscardError::InvalidDiscardCount {
                seat,
                expected,
                actual: selection.len(),
            });
        }
        if let Some(card) = contestant.hand.find_missing(&selection) {
            return Err(DiscardError::CardNotFound { seat, card });
        }

        Ok(selection)
    }
}
