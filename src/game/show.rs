use crate::card::Card;
use crate::error::ScoringError;
use crate::hand::Hand;
use crate::result::HandScore;

use super::{Game, GameState, Seat};

impl Game {
    fn starter_for_show(&self, include_starter: bool) -> Result<Option<Card>, ScoringError> {
        if include_starter {
            self.starter().map(Some).ok_or(ScoringError::NoStarter)
        } else {
            Ok(None)
        }
    }

    fn score_cards(hand: &Hand, starter: Option<Card>) -> HandScore {
        starter.map_or_else(|| hand.score(), |starter| hand.score_with_starter(starter))
    }

    fn score_seat(
        &mut self,
        seat: Seat,
        include_starter: bool,
        next: GameState,
    ) -> Result<HandScore, ScoringError> {
        let starter = self.starter_for_show(include_starter)?;
        let score = Self::score_cards(self.hand(seat), starter);
        log::debug!("{seat} shows {} for {}", self.hand(seat), score.total());

        self.state = next;
        self.award(seat, u32::from(score.total()));

        Ok(score)
    }

    /// Scores the non-dealer's hand, with the starter unless told otherwise.
    ///
    /// The starter stays on top of the deck; the hand is not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if discards have not been handled (or pegging has not
    /// finished), or the starter is requested and the deck is empty.
    pub fn score_non_dealer(&mut self, include_starter: bool) -> Result<HandScore, ScoringError> {
        if !matches!(self.state, GameState::DiscardsHandled | GameState::Pegged) {
            return Err(ScoringError::InvalidState);
        }
        self.score_seat(self.non_dealer(), include_starter, GameState::NonDealerScored)
    }

    /// Scores the dealer's hand, with the starter unless told otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the non-dealer has not been scored (or the game was
    /// won during that step), or the starter is requested and the deck is
    /// empty.
    pub fn score_dealer(&mut self, include_starter: bool) -> Result<HandScore, ScoringError> {
        if self.state != GameState::NonDealerScored {
            return Err(ScoringError::InvalidState);
        }
        self.score_seat(self.dealer, include_starter, GameState::DealerScored)
    }

    /// Scores the crib for the dealer, with the starter unless told otherwise.
    ///
    /// This ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not been scored (or the game was won
    /// during that step), or the starter is requested and the deck is empty.
    pub fn score_crib(&mut self, include_starter: bool) -> Result<HandScore, ScoringError> {
        if self.state != GameState::DealerScored {
            return Err(ScoringError::InvalidState);
        }

        let starter = self.starter_for_show(include_starter)?;
        let score = Self::score_cards(&self.crib, starter);
        log::debug!("crib {} scores {}", self.crib, score.total());

        self.state = GameState::RoundOver;
        self.award(self.dealer, u32::from(score.total()));

        Ok(score)
    }
}
