extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PeggingError;
use crate::result::{PegPlay, PeggingResult};

use super::{Game, GameState, Seat};

impl Game {
    fn has_legal_play(&self, seat: Seat) -> bool {
        self.hand(seat)
            .cards()
            .iter()
            .any(|card| self.pegging_pile.can_play(card))
    }

    /// Asks the seat for a card and takes it out of its hand.
    fn take_peg_card(&mut self, seat: Seat) -> Result<Card, PeggingError> {
        let opponent_score = self.score(seat.other());
        let contestant = &mut self.seats[seat.index()];
        let card = contestant.player.select_peg_card(
            &contestant.hand,
            &self.pegging_pile,
            opponent_score,
        )?;

        if !contestant.hand.contains(&card) {
            return Err(PeggingError::CardNotInHand(card));
        }
        if !self.pegging_pile.can_play(&card) {
            return Err(PeggingError::Overplay {
                card,
                total: self.pegging_pile.current_total(),
            });
        }
        contestant
            .hand
            .remove(&card)
            .map_err(|_| PeggingError::CardNotInHand(card))
    }

    fn award_pegging(&mut self, seat: Seat, points: u8, result: &mut PeggingResult) -> bool {
        let points = u32::from(points);
        if seat == self.dealer {
            result.dealer_points += points;
        } else {
            result.non_dealer_points += points;
        }
        self.award(seat, points)
    }

    /// Plays out the pegging phase.
    ///
    /// The non-dealer leads and the players alternate. A player who cannot
    /// play without passing 31 says "go" and the opponent keeps playing. When
    /// neither can play, the last player to play scores 1 and the count starts
    /// again with the other player. The last card of the phase also scores 1
    /// unless it made exactly 31.
    ///
    /// Afterwards each player picks their cards back up for the show. If a
    /// player reaches the winning score, pegging stops at once and the round
    /// is over; the played cards stay on the pile until [`Game::reset_game`].
    ///
    /// # Errors
    ///
    /// Returns an error if discards have not been handled, or a player
    /// chooses a card it does not hold or one that would overplay 31. On
    /// error the hands, the pile and both scores are restored to how they
    /// were before the call.
    pub fn peg(&mut self) -> Result<PeggingResult, PeggingError> {
        if self.state != GameState::DiscardsHandled {
            return Err(PeggingError::InvalidState);
        }

        let hands = self.seats.each_ref().map(|contestant| contestant.hand.clone());
        let scores = self.seats.each_ref().map(|contestant| contestant.score);
        let turn = self.turn;

        self.play_out().inspect_err(|err| {
            log::debug!("pegging failed ({err}), restoring hands");
            self.pegging_pile.end_pegging();
            for ((contestant, hand), score) in self.seats.iter_mut().zip(hands).zip(scores) {
                contestant.hand = hand;
                contestant.score = score;
            }
            self.turn = turn;
        })
    }

    fn play_out(&mut self) -> Result<PeggingResult, PeggingError> {
        let mut result = PeggingResult::default();
        let mut played: [Vec<Card>; 2] = [Vec::new(), Vec::new()];
        let mut last_player: Option<Seat> = None;
        self.turn = self.non_dealer();

        loop {
            if self.seats.iter().all(|contestant| contestant.hand.is_empty()) {
                if self.pegging_pile.current_total() > 0 {
                    if let Some(last) = last_player {
                        log::trace!("{last} pegs 1 for last card");
                        let won = self.award_pegging(last, 1, &mut result);
                        result.ended_by_win = won;
                    }
                }
                break;
            }

            let seat = self.turn;
            if self.has_legal_play(seat) {
                let card = self.take_peg_card(seat)?;
                let count = self.pegging_pile.current_total() + card.value();
                let points = self.pegging_pile.play(card)?;
                played[seat.index()].push(card);
                last_player = Some(seat);
                result.plays.push(PegPlay {
                    seat,
                    card,
                    count,
                    points,
                });

                if self.award_pegging(seat, points, &mut result) {
                    result.ended_by_win = true;
                    return Ok(result);
                }
                self.turn = seat.other();
            } else if self.has_legal_play(seat.other()) {
                log::trace!("{seat} says go");
                self.turn = seat.other();
            } else {
                // Neither player can add to the count.
                if let Some(last) = last_player {
                    log::trace!("{last} pegs 1 for go");
                    if self.award_pegging(last, 1, &mut result) {
                        result.ended_by_win = true;
                        return Ok(result);
                    }
                    self.turn = last.other();
                }
                self.pegging_pile.end_current_play();
            }
        }

        if result.ended_by_win {
            return Ok(result);
        }

        let returned = self.pegging_pile.end_pegging();
        debug_assert_eq!(
            returned.len(),
            played.iter().map(Vec::len).sum::<usize>(),
            "pile and played cards disagree"
        );
        for (seat, cards) in Seat::BOTH.into_iter().zip(played) {
            self.seats[seat.index()].hand.add_cards(cards);
        }

        self.state = GameState::Pegged;
        log::debug!(
            "pegging over: non-dealer {}, dealer {}",
            result.non_dealer_points,
            result.dealer_points
        );

        Ok(result)
    }
}
