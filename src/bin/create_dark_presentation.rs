//! Writes the four-slide dark-themed CharacterLock AI deck.
use pitchdeck::decks::Deck;
use std::process::ExitCode;

fn main() -> ExitCode {
    pitchdeck::cli::main(Deck::Dark)
}
