//! Pitchdeck - build PowerPoint pitch decks from Rust
//!
//! This crate contains a small PresentationML (.pptx) writer and the three
//! CharacterLock AI hackathon decks built with it.
//!
//! # Features
//!
//! - **PPTX writer**: presentations, slides on the stock 4:3 layouts,
//!   placeholders, text boxes and auto shapes with fills, outlines and
//!   paragraph-level formatting
//! - **Package inspection**: read a written deck back into a structural summary
//! - **Decks**: the original, honest and dark-themed pitch decks, each with
//!   its own binary
//!
//! # Example - Writing a deck
//!
//! ```no_run
//! use pitchdeck::decks::Deck;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = Deck::Honest;
//! let pres = deck.build()?;
//! pres.save(deck.output_file())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a deck
//!
//! ```no_run
//! use pitchdeck::inspect::DeckSummary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = DeckSummary::open("CharacterLock_Dark_Theme.pptx")?;
//! for (index, title) in summary.titles().iter().enumerate() {
//!     println!("{}: {}", index + 1, title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod common;
pub mod decks;
pub mod inspect;
pub mod pptx;

pub use common::error::{DeckError, Result};
pub use decks::Deck;
pub use pptx::Presentation;
