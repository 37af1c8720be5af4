//! Game integration tests.

use cribrs::card::full_deck;
use cribrs::{
    Card, DECK_SIZE, DealError, Deck, DiscardError, Game, GameOptions, GameState, Hand,
    PeggingError, PeggingPile, Player, RandomPlayer, RoundError, ScoringError, Seat,
};

mod common;

use common::{card, cards};

const PLAYER_ONE: &str = "5D 5S 5C JH KS QS";
const PLAYER_TWO: &str = "AD 2D 3D 4D 9C 8C";
const STARTER: &str = "5H";

/// Builds a deck that deals `player_one` then `player_two` and leaves
/// `starter` on top.
fn stacked_deck(player_one: &str, player_two: &str, starter: &str) -> Deck {
    let mut top_down = cards(player_one);
    top_down.extend(cards(player_two));
    top_down.push(card(starter));
    let rest: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !top_down.contains(c))
        .collect();
    top_down.extend(rest);
    top_down.reverse();
    Deck::from_cards(top_down, 0)
}

/// Counts every card the game holds, wherever it is.
fn total_cards(game: &Game) -> usize {
    game.deck().len()
        + game.hand(Seat::One).len()
        + game.hand(Seat::Two).len()
        + game.crib().len()
        + game.pegging_pile().len()
}

/// A player that discards fixed cards and pegs its first legal card.
struct ScriptedPlayer {
    discards: Vec<Card>,
}

impl ScriptedPlayer {
    fn boxed(discards: &str) -> Box<dyn Player> {
        Box::new(Self {
            discards: cards(discards),
        })
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        "scripted"
    }

    fn select_discards(
        &mut self,
        _hand: &Hand,
        _count: usize,
        _is_dealer: bool,
        _opponent_score: u32,
    ) -> Vec<Card> {
        self.discards.clone()
    }

    fn select_peg_card(
        &mut self,
        hand: &Hand,
        pile: &PeggingPile,
        _opponent_score: u32,
    ) -> Result<Card, PeggingError> {
        pile.legal_plays(hand.cards())
            .first()
            .copied()
            .ok_or(PeggingError::NoLegalPlay)
    }
}

fn scripted_game(options: GameOptions) -> Game {
    let mut game = Game::new(
        ScriptedPlayer::boxed("KS QS"),
        ScriptedPlayer::boxed("9C 8C"),
        options,
        7,
    );
    // Player two deals, so player one shows first.
    if game.dealer() != Seat::Two {
        game.reset_game();
    }
    game
}

fn stack(game: &mut Game, player_one: &str, player_two: &str, starter: &str) {
    game.initialize_round().unwrap();
    game.stack_deck(stacked_deck(player_one, player_two, starter))
        .expect("fresh round takes a full pack");
}

fn dealt_game(options: GameOptions) -> Game {
    let mut game = scripted_game(options);
    stack(&mut game, PLAYER_ONE, PLAYER_TWO, STARTER);
    game.deal_cards().unwrap();
    game
}

#[test]
fn full_round_scores_hands_and_crib() {
    let mut game = dealt_game(GameOptions::default());
    assert_eq!(game.state(), GameState::CardsDealt);
    assert_eq!(game.hand(Seat::One).cards(), cards(PLAYER_ONE).as_slice());
    assert_eq!(game.hand(Seat::Two).cards(), cards(PLAYER_TWO).as_slice());
    assert_eq!(game.deck().len(), DECK_SIZE - 12);

    game.handle_discards().unwrap();
    assert_eq!(game.state(), GameState::DiscardsHandled);
    assert_eq!(game.hand(Seat::One).len(), 4);
    assert_eq!(game.hand(Seat::Two).len(), 4);
    assert_eq!(game.crib().cards(), cards("KS QS 9C 8C").as_slice());
    assert_eq!(game.starter(), Some(card(STARTER)));

    let non_dealer = game.score_non_dealer(true).unwrap();
    assert_eq!(non_dealer.total(), 29);
    assert_eq!(game.score(Seat::One), 29);
    assert_eq!(game.hand(Seat::One).len(), 4);
    assert_eq!(game.starter(), Some(card(STARTER)));

    let dealer = game.score_dealer(true).unwrap();
    assert_eq!(dealer.total(), 11);
    assert_eq!(dealer.flush, 4);

    let crib = game.score_crib(true).unwrap();
    assert_eq!(crib.total(), 4);
    assert_eq!(game.score(Seat::Two), 15);
    assert_eq!(game.score(Seat::One), 29);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.get_winner(), None);
    assert_eq!(total_cards(&game), DECK_SIZE);
}

#[test]
fn scoring_without_starter() {
    let mut game = dealt_game(GameOptions::default());
    game.handle_discards().unwrap();

    assert_eq!(game.score_non_dealer(false).unwrap().total(), 14);
    assert_eq!(game.score_dealer(false).unwrap().total(), 8);
    assert_eq!(game.score_crib(false).unwrap().total(), 0);
}

#[test]
fn transitions_out_of_order_are_rejected() {
    let mut game = scripted_game(GameOptions::default());

    assert_eq!(game.deal_cards(), Err(DealError::InvalidState));
    assert_eq!(game.handle_discards(), Err(DiscardError::InvalidState));
    assert_eq!(
        game.score_non_dealer(true).unwrap_err(),
        ScoringError::InvalidState
    );

    stack(&mut game, PLAYER_ONE, PLAYER_TWO, STARTER);
    assert_eq!(game.initialize_round(), Err(RoundError::InvalidState));
    game.deal_cards().unwrap();
    assert_eq!(game.peg().unwrap_err(), PeggingError::InvalidState);
    assert_eq!(game.score_dealer(true).unwrap_err(), ScoringError::InvalidState);

    game.handle_discards().unwrap();
    assert_eq!(game.score_crib(true).unwrap_err(), ScoringError::InvalidState);
    game.score_non_dealer(true).unwrap();
    assert_eq!(game.peg().unwrap_err(), PeggingError::InvalidState);
    assert_eq!(
        game.score_non_dealer(true).unwrap_err(),
        ScoringError::InvalidState
    );
}

#[test]
fn deal_needs_enough_cards() {
    let mut game = scripted_game(GameOptions::default().with_cards_per_player(27));
    game.initialize_round().unwrap();

    assert_eq!(
        game.deal_cards(),
        Err(DealError::NotEnoughCards {
            needed: 54,
            remaining: DECK_SIZE,
        })
    );
    assert_eq!(game.deck().len(), DECK_SIZE);
    assert!(game.hand(Seat::One).is_empty());
    assert_eq!(game.state(), GameState::RoundInitialized);
}

#[test]
fn wrong_discard_count_is_rejected() {
    let mut game = Game::new(
        ScriptedPlayer::boxed("KS"),
        ScriptedPlayer::boxed("9C 8C"),
        GameOptions::default(),
        7,
    );
    stack(&mut game, PLAYER_ONE, PLAYER_TWO, STARTER);
    game.deal_cards().unwrap();

    assert_eq!(
        game.handle_discards(),
        Err(DiscardError::InvalidDiscardCount {
            seat: Seat::One,
            expected: 2,
            actual: 1,
        })
    );
    assert_eq!(game.hand(Seat::One).len(), 6);
    assert!(game.crib().is_empty());
    assert_eq!(game.state(), GameState::CardsDealt);
}

#[test]
fn discarding_a_card_not_held_is_rejected() {
    let mut game = Game::new(
        ScriptedPlayer::boxed("KS QS"),
        ScriptedPlayer::boxed("9C 7H"),
        GameOptions::default(),
        7,
    );
    stack(&mut game, PLAYER_ONE, PLAYER_TWO, STARTER);
    game.deal_cards().unwrap();

    assert_eq!(
        game.handle_discards(),
        Err(DiscardError::CardNotFound {
            seat: Seat::Two,
            card: card("7H"),
        })
    );
    // Player one's valid discards were not applied either.
    assert_eq!(game.hand(Seat::One).len(), 6);
    assert!(game.crib().is_empty());
    assert_eq!(total_cards(&game), DECK_SIZE);
}

#[test]
fn discarding_the_same_card_twice_is_rejected() {
    let mut game = Game::new(
        ScriptedPlayer::boxed("KS KS"),
        ScriptedPlayer::boxed("9C 8C"),
        GameOptions::default(),
        7,
    );
    stack(&mut game, PLAYER_ONE, PLAYER_TWO, STARTER);
    game.deal_cards().unwrap();

    assert_eq!(
        game.handle_discards(),
        Err(DiscardError::CardNotFound {
            seat: Seat::One,
            card: card("KS"),
        })
    );
}

#[test]
fn winning_mid_round_stops_scoring() {
    let mut game = dealt_game(GameOptions::default().with_winning_score(20));
    game.handle_discards().unwrap();

    game.score_non_dealer(true).unwrap();
    assert_eq!(game.get_winner(), Some(Seat::One));
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.score_dealer(true).unwrap_err(), ScoringError::InvalidState);
    assert_eq!(game.score(Seat::Two), 0);
}

#[test]
fn player_one_wins_ties() {
    let game = scripted_game(GameOptions::default().with_winning_score(0));
    assert_eq!(game.get_winner(), Some(Seat::One));
}

#[test]
fn score_needs_a_starter() {
    // Dealing the whole pack leaves no starter behind.
    let options = GameOptions::default()
        .with_cards_per_player(DECK_SIZE / 2)
        .with_discards_per_player(DECK_SIZE / 2 - 4);
    let mut game = Game::new(
        Box::new(RandomPlayer::new("one", 1)),
        Box::new(RandomPlayer::new("two", 2)),
        options,
        7,
    );
    game.initialize_round().unwrap();
    game.deal_cards().unwrap();
    game.handle_discards().unwrap();
    assert!(game.deck().is_empty());
    assert_eq!(game.starter(), None);

    assert_eq!(
        game.score_non_dealer(true).unwrap_err(),
        ScoringError::NoStarter
    );
    assert_eq!(game.state(), GameState::DiscardsHandled);
    game.score_non_dealer(false).unwrap();
    assert_eq!(game.state(), GameState::NonDealerScored);
}

#[test]
fn stacking_needs_a_fresh_round_and_a_full_pack() {
    let mut game = scripted_game(GameOptions::default());
    let deck = stacked_deck(PLAYER_ONE, PLAYER_TWO, STARTER);
    assert_eq!(game.stack_deck(deck.clone()), Err(RoundError::InvalidState));

    game.initialize_round().unwrap();
    let short = Deck::from_cards(deck.cards()[1..].to_vec(), 0);
    assert_eq!(game.stack_deck(short), Err(RoundError::IncompleteDeck(51)));
    let mut doubled = deck.cards()[1..].to_vec();
    doubled.push(deck.cards()[1]);
    assert_eq!(
        game.stack_deck(Deck::from_cards(doubled, 0)),
        Err(RoundError::IncompleteDeck(DECK_SIZE))
    );

    game.stack_deck(deck).unwrap();
    assert_eq!(game.deck().top(), Some(&card("5D")));
    assert_eq!(total_cards(&game), DECK_SIZE);
}

#[test]
fn reset_returns_every_card_and_passes_the_deal() {
    let mut game = dealt_game(GameOptions::default());
    game.handle_discards().unwrap();
    game.score_non_dealer(true).unwrap();

    let dealer = game.dealer();
    game.reset_game();
    assert_eq!(game.deck().len(), DECK_SIZE);
    assert!(game.hand(Seat::One).is_empty());
    assert!(game.hand(Seat::Two).is_empty());
    assert!(game.crib().is_empty());
    assert!(game.pegging_pile().is_empty());
    assert_eq!(game.dealer(), dealer.other());
    assert_eq!(game.turn(), dealer);
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.score(Seat::One), 29);

    game.reset_game();
    assert_eq!(game.deck().len(), DECK_SIZE);
}

#[test]
fn start_new_game_clears_scores() {
    let mut game = dealt_game(GameOptions::default());
    game.handle_discards().unwrap();
    game.score_non_dealer(true).unwrap();

    game.start_new_game();
    assert_eq!(game.score(Seat::One), 0);
    assert_eq!(game.score(Seat::Two), 0);
    assert_eq!(game.deck().len(), DECK_SIZE);
    assert_eq!(game.turn(), game.non_dealer());
    assert_eq!(game.state(), GameState::Idle);
}

#[test]
fn pegging_scores_thirty_one_and_last_card() {
    let mut game = dealt_game(GameOptions::default());
    game.handle_discards().unwrap();

    let result = game.peg().unwrap();
    let played: Vec<Card> = result.plays.iter().map(|play| play.card).collect();
    assert_eq!(played, cards("5D AD 5S 2D 5C 3D JH 4D"));
    assert_eq!(result.plays[6].count, 31);
    assert_eq!(result.plays[6].points, 2);
    assert_eq!(result.plays[7].count, 4);
    assert_eq!(result.non_dealer_points, 2);
    assert_eq!(result.dealer_points, 1);
    assert!(!result.ended_by_win);

    assert_eq!(game.state(), GameState::Pegged);
    assert!(game.pegging_pile().is_empty());
    assert_eq!(game.hand(Seat::One).len(), 4);
    assert_eq!(game.hand(Seat::Two).len(), 4);
    assert_eq!(total_cards(&game), DECK_SIZE);

    game.score_non_dealer(true).unwrap();
    game.score_dealer(true).unwrap();
    game.score_crib(true).unwrap();
    assert_eq!(game.score(Seat::One), 31);
    assert_eq!(game.score(Seat::Two), 16);
}

#[test]
fn pegging_go_gives_the_last_player_a_point() {
    let mut game = Game::new(
        ScriptedPlayer::boxed("2C 3C"),
        ScriptedPlayer::boxed("4C 5C"),
        GameOptions::default(),
        7,
    );
    if game.dealer() != Seat::Two {
        game.reset_game();
    }
    stack(&mut game, "KS QS JS 10S 2C 3C", "9H 8H 7H 6H 4C 5C", "AC");
    game.deal_cards().unwrap();
    game.handle_discards().unwrap();

    let result = game.peg().unwrap();
    let played: Vec<Card> = result.plays.iter().map(|play| play.card).collect();
    assert_eq!(played, cards("KS 9H QS 8H JS 7H 6H 10S"));
    assert_eq!(result.non_dealer_points, 2);
    assert_eq!(result.dealer_points, 2);
    assert_eq!(game.score(Seat::One), 2);
    assert_eq!(game.score(Seat::Two), 2);
}

#[test]
fn pegging_can_end_the_game() {
    let mut game = dealt_game(GameOptions::default().with_winning_score(2));
    game.handle_discards().unwrap();

    let result = game.peg().unwrap();
    assert!(result.ended_by_win);
    assert_eq!(game.get_winner(), Some(Seat::One));
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(total_cards(&game), DECK_SIZE);

    game.reset_game();
    assert_eq!(game.deck().len(), DECK_SIZE);
}

struct Overplayer;

impl Player for Overplayer {
    fn name(&self) -> &str {
        "overplayer"
    }

    fn select_discards(&mut self, hand: &Hand, count: usize, _: bool, _: u32) -> Vec<Card> {
        hand.cards()[..count].to_vec()
    }

    fn select_peg_card(
        &mut self,
        hand: &Hand,
        _pile: &PeggingPile,
        _opponent_score: u32,
    ) -> Result<Card, PeggingError> {
        hand.cards()
            .iter()
            .copied()
            .max()
            .ok_or(PeggingError::NoLegalPlay)
    }
}

#[test]
fn illegal_peg_choice_is_rejected() {
    let mut game = Game::new(
        Box::new(Overplayer),
        Box::new(Overplayer),
        GameOptions::default(),
        7,
    );
    if game.dealer() != Seat::Two {
        game.reset_game();
    }
    // On a count of 29 player two could play its ace but picks the nine.
    stack(&mut game, "2C 3C KS QS JS 10S", "4C 5C AH 9H 8H 7H", "AC");
    game.deal_cards().unwrap();
    game.handle_discards().unwrap();

    let err = game.peg().unwrap_err();
    assert!(matches!(err, PeggingError::Overplay { total: 29, .. }));
    assert_eq!(total_cards(&game), DECK_SIZE);
}

#[test]
fn failed_pegging_restores_the_round() {
    let mut game = Game::new(
        Box::new(Overplayer),
        Box::new(Overplayer),
        GameOptions::default(),
        7,
    );
    if game.dealer() != Seat::Two {
        game.reset_game();
    }
    stack(&mut game, "2C 3C KS QS JS 10S", "4C 5C AH 9H 8H 7H", "AC");
    game.deal_cards().unwrap();
    game.handle_discards().unwrap();
    let one_before = game.hand(Seat::One).clone();
    let two_before = game.hand(Seat::Two).clone();

    // Three cards are played before player two overplays.
    assert!(game.peg().is_err());
    assert_eq!(game.state(), GameState::DiscardsHandled);
    assert_eq!(game.hand(Seat::One), &one_before);
    assert_eq!(game.hand(Seat::Two), &two_before);
    assert!(game.pegging_pile().is_empty());
    assert_eq!(game.score(Seat::One), 0);
    assert_eq!(game.score(Seat::Two), 0);
    assert_eq!(total_cards(&game), DECK_SIZE);

    // The show still sees the full four-card hand: a run of four and a
    // four-card flush.
    let shown = game.score_non_dealer(true).unwrap();
    assert_eq!(shown.total(), 8);
    assert_eq!(game.hand(Seat::One).len(), 4);
}

#[test]
fn random_players_play_a_full_match() {
    let mut game = Game::new(
        Box::new(RandomPlayer::new("one", 1)),
        Box::new(RandomPlayer::new("two", 2)),
        GameOptions::default(),
        99,
    );

    let mut rounds = 0;
    while game.get_winner().is_none() {
        game.initialize_round().unwrap();
        game.deal_cards().unwrap();
        game.handle_discards().unwrap();
        assert_eq!(total_cards(&game), DECK_SIZE);
        game.peg().unwrap();
        assert_eq!(total_cards(&game), DECK_SIZE);
        if game.state() != GameState::RoundOver {
            game.score_non_dealer(true).unwrap();
        }
        if game.state() != GameState::RoundOver {
            game.score_dealer(true).unwrap();
        }
        if game.state() != GameState::RoundOver {
            game.score_crib(true).unwrap();
        }
        assert_eq!(total_cards(&game), DECK_SIZE);
        game.reset_game();
        assert_eq!(game.deck().len(), DECK_SIZE);
        rounds += 1;
        assert!(rounds < 200, "match did not finish");
    }

    let winner = game.get_winner().unwrap();
    assert!(game.score(winner) >= 121);
}
