//! Prints a card to the terminal.
//!
//! Usage: `cargo run --example print_card -- [RANK] [SUIT]`, for example
//! `cargo run --example print_card -- QUEEN heart`. Set `RUST_LOG=debug` to see
//! rank normalization messages.

use std::env;

use termcard::{Card, Suit};

fn parse_suit(name: &str) -> Suit {
    match name.to_ascii_lowercase().as_str() {
        "heart" | "hearts" | "h" => Suit::Heart,
        "club" | "clubs" | "c" => Suit::Club,
        "spade" | "spades" | "s" => Suit::Spade,
        _ => Suit::Diamond,
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .parse_default_env()
        .init();

    let mut args = env::args().skip(1);
    let rank = args.next().unwrap_or_else(|| "5".to_string());
    let suit = args.next().map_or(Suit::Diamond, |name| parse_suit(&name));

    let card = Card::new(suit, &rank);
    card.display();
    println!("rank {} value {}", card.rank(), card.value());
}
