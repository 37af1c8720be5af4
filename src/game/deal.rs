use crate::error::{DealError, RoundError};

use super::{Game, GameState, Seat};

impl Game {
    /// Starts a round by shuffling and cutting the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the previous round has not been reset.
    pub fn initialize_round(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::Idle {
            return Err(RoundError::InvalidState);
        }

        self.deck.shuffle();
        self.deck.cut();
        self.state = GameState::RoundInitialized;
        log::debug!("round initialized, {} deals", self.dealer);

        Ok(())
    }

    /// Deals each player their cards from the top of the deck.
    ///
    /// Player one receives all of their cards first, then player two.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been initialized or the deck
    /// cannot cover both hands. Nothing is dealt in either case.
    pub fn deal_cards(&mut self) -> Result<(), DealError> {
        if self.state != GameState::RoundInitialized {
            return Err(DealError::InvalidState);
        }

        let per_player = self.options.cards_per_player;
        let needed = per_player * Seat::BOTH.len();
        let remaining = self.deck.len();
        if remaining < needed {
            return Err(DealError::NotEnoughCards { needed, remaining });
        }

        for seat in Seat::BOTH {
            for _ in 0..per_player {
                let card = self
                    .deck
                    .deal()
                    .map_err(|_| DealError::NotEnoughCards { needed, remaining })?;
                self.seats[seat.index()].hand.add_card(card);
            }
        }

        self.state = GameState::CardsDealt;
        log::debug!("dealt {per_player} cards to each player");

        Ok(())
    }
}
