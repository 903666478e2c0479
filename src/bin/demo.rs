//! Demo binary
//!
//! Deals one match and autoplays it to completion with a greedy
//! singles-only policy: lead your lowest card, beat the binding
//! single with your cheapest stronger card, otherwise pass.

use clap::Parser;
use colored::Colorize;
use landlord::gameplay::Game;
use landlord::gameplay::Shape;

#[derive(Parser)]
#[command(about = "autoplay one landlord match")]
struct Args {
    /// number of seats at the table (2-6)
    #[arg(long, default_value_t = 3)]
    seats: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let mut game = Game::new(args.seats);
    println!(
        "landlord is seat {} holding bonus {}",
        game.landlord().to_string().yellow(),
        game.bonus()
    );
    while game.winner().is_none() {
        let seat = game.state().turn();
        match next_single(&game, seat) {
            Some(card) => {
                let played = game
                    .play(seat, vec![card])
                    .expect("policy only proposes legal plays")
                    .clone();
                println!("seat {} plays {:<4} {}", seat, card.to_string(), played);
            }
            None => {
                game.pass(seat).expect("round is active when policy passes");
                println!("seat {} passes", seat);
            }
        }
    }
    let winner = game.winner().expect("loop ended on a win");
    let verdict = if winner == game.landlord() {
        "the landlord wins".green()
    } else {
        "the peasants win".red()
    };
    println!("seat {} empties first: {}", winner, verdict);
}

/// lowest legal single for this seat, or None to pass
fn next_single(game: &Game, seat: usize) -> Option<landlord::cards::Card> {
    let state = game.state();
    let floor = match (state.is_open(), state.binding()) {
        (true, _) => None,
        (false, Some(binding)) if binding.shape() == Shape::Single => Some(binding.strength()),
        (false, _) => return None, // never try to beat wider shapes
    };
    game.cards(seat)
        .iter()
        .filter(|card| floor.is_none_or(|f| u8::from(card.rank()) > f))
        .min_by_key(|card| card.rank())
        .copied()
}
