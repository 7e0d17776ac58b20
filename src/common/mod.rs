//! Types and helpers shared by the writer, the inspector and the decks.

pub mod color;
pub mod error;
pub mod unit;
pub mod xml;

pub use color::RGBColor;
pub use error::{DeckError, Result};
pub use unit::{inches, pt};
