//! CLI cribbage example.
//!
//! Plays a match between two random players, or between you and a random
//! player with `--human`. Set `RUST_LOG=debug` to follow the engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{
    Card, Game, GameOptions, GameState, Hand, PeggingError, PeggingPile, Player, RandomPlayer,
    Seat,
};

struct HumanPlayer {
    name: String,
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_discards(
        &mut self,
        hand: &Hand,
        count: usize,
        is_dealer: bool,
        opponent_score: u32,
    ) -> Vec<Card> {
        let owner = if is_dealer { "your" } else { "the opponent's" };
        println!("\nOpponent has {opponent_score}. Discarding to {owner} crib.");
        loop {
            print_choices(hand.cards());
            let picked = prompt_indices(&format!("Select {count} cards: "), hand.cards());
            if picked.len() == count {
                return picked;
            }
            println!("Please pick exactly {count} different cards.");
        }
    }

    fn select_peg_card(
        &mut self,
        hand: &Hand,
        pile: &PeggingPile,
        _opponent_score: u32,
    ) -> Result<Card, PeggingError> {
        if pile.legal_plays(hand.cards()).is_empty() {
            return Err(PeggingError::NoLegalPlay);
        }
        println!("\nPile {pile} count {}", pile.current_total());
        loop {
            print_choices(hand.cards());
            match prompt_indices("Play a card: ", hand.cards()).as_slice() {
                [card] if pile.can_play(card) => return Ok(*card),
                [card] => println!("{card} would take the count past 31."),
                _ => println!("Please pick one card."),
            }
        }
    }
}

fn main() {
    env_logger::init();

    let human = std::env::args().any(|arg| arg == "--human");
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let player_one: Box<dyn Player> = if human {
        Box::new(HumanPlayer {
            name: "You".to_owned(),
        })
    } else {
        Box::new(RandomPlayer::new("Random 1", seed.wrapping_add(1)))
    };
    let player_two = Box::new(RandomPlayer::new("Random 2", seed.wrapping_add(2)));
    let mut game = Game::new(player_one, player_two, GameOptions::default(), seed);

    let mut round = 1;
    while game.get_winner().is_none() {
        println!("\n=== Round {round}: {} deals ===", name(&game, game.dealer()));
        if let Err(err) = play_round(&mut game) {
            println!("Round aborted: {err}");
            return;
        }
        print_scores(&game);
        game.reset_game();
        round += 1;
    }

    if let Some(winner) = game.get_winner() {
        println!("\nThe winner is {}!", name(&game, winner));
    }
}

fn play_round(game: &mut Game) -> Result<(), Box<dyn std::error::Error>> {
    game.initialize_round()?;
    game.deal_cards()?;
    game.handle_discards()?;
    if let Some(starter) = game.starter() {
        println!("Starter: {starter}");
    }

    let pegging = game.peg()?;
    println!(
        "Pegging: non-dealer {}, dealer {}",
        pegging.non_dealer_points, pegging.dealer_points
    );
    if game.state() == GameState::RoundOver {
        return Ok(());
    }

    let non_dealer = game.non_dealer();
    let score = game.score_non_dealer(true)?;
    println!("{} shows {} for {}", name(game, non_dealer), game.hand(non_dealer), score.total());
    if game.state() == GameState::RoundOver {
        return Ok(());
    }

    let dealer = game.dealer();
    let score = game.score_dealer(true)?;
    println!("{} shows {} for {}", name(game, dealer), game.hand(dealer), score.total());
    if game.state() == GameState::RoundOver {
        return Ok(());
    }

    let score = game.score_crib(true)?;
    println!("Crib {} scores {}", game.crib(), score.total());
    Ok(())
}

fn name(game: &Game, seat: Seat) -> String {
    game.player_name(seat).to_owned()
}

fn print_scores(game: &Game) {
    for seat in Seat::BOTH {
        println!("  {}: {}", name(game, seat), game.score(seat));
    }
}

fn print_choices(cards: &[Card]) {
    for (index, card) in cards.iter().enumerate() {
        println!("({}) {card}", index + 1);
    }
}

fn prompt_indices(prompt: &str, cards: &[Card]) -> Vec<Card> {
    let input = prompt_line(prompt);
    let mut picked = Vec::new();
    for token in input.split_whitespace() {
        match token.parse::<usize>() {
            Ok(index) if (1..=cards.len()).contains(&index) => {
                let card = cards[index - 1];
                if !picked.contains(&card) {
                    picked.push(card);
                }
            }
            _ => println!("{token} is an invalid selection."),
        }
    }
    picked
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
