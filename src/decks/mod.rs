//! The CharacterLock AI pitch decks.
//!
//! Each deck module builds a complete [`Presentation`] in memory;
//! [`Deck`] ties a deck to its output file and the summary printed after
//! writing it.

pub mod common;
pub mod dark;
pub mod honest;
pub mod original;

use crate::common::error::Result;
use crate::pptx::Presentation;
use std::fmt;

/// One of the buildable decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deck {
    /// Sixteen slides, light template
    Original,
    /// Sixteen slides with sourced claims and footnotes
    Honest,
    /// Four slides, black background with neon accents
    Dark,
}

impl Deck {
    pub const ALL: [Deck; 3] = [Deck::Original, Deck::Honest, Deck::Dark];

    pub fn name(&self) -> &'static str {
        match self {
            Deck::Original => "original",
            Deck::Honest => "honest",
            Deck::Dark => "dark",
        }
    }

    /// Default output file name, relative to the working directory.
    pub fn output_file(&self) -> &'static str {
        match self {
            Deck::Original => original::OUTPUT_FILE,
            Deck::Honest => honest::OUTPUT_FILE,
            Deck::Dark => dark::OUTPUT_FILE,
        }
    }

    pub fn build(&self) -> Result<Presentation> {
        self.build_with_progress(|_| {})
    }

    /// Build the deck, passing progress lines to `progress`.
    ///
    /// Only the dark deck reports per-slide progress.
    pub fn build_with_progress(&self, progress: impl FnMut(&str)) -> Result<Presentation> {
        match self {
            Deck::Original => original::build(),
            Deck::Honest => honest::build(),
            Deck::Dark => dark::build_with_progress(progress),
        }
    }

    /// Lines printed after the deck was written to `location`.
    pub fn summary_lines(&self, location: &str, slide_count: usize) -> Vec<String> {
        let total = format!("  Total slides: {}", slide_count);
        let location_line = format!("  Location: {}", location);

        match self {
            Deck::Original => vec![
                format!("✓ Presentation created successfully: {}", location),
                total,
                location_line,
            ],
            Deck::Honest => vec![
                format!("✓ HONEST presentation created: {}", location),
                total,
                "  All claims are sourced or testable!".to_string(),
                location_line,
            ],
            Deck::Dark => vec![
                String::new(),
                format!("✓ Dark-themed presentation created: {}", location),
                total,
                "  Theme: Black background with neon yellow accents".to_string(),
                "  Style: Matches HTML design".to_string(),
                location_line,
            ],
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_files_are_distinct() {
        let files: std::collections::HashSet<_> =
            Deck::ALL.iter().map(|deck| deck.output_file()).collect();
        assert_eq!(files.len(), 3);
        assert_eq!(Deck::Honest.output_file(), "CharacterLock_AI_Presentation_HONEST.pptx");
    }

    #[test]
    fn test_summary_lines() {
        let lines = Deck::Honest.summary_lines("out.pptx", 16);
        assert_eq!(lines[0], "✓ HONEST presentation created: out.pptx");
        assert_eq!(lines[1], "  Total slides: 16");
        assert_eq!(lines[3], "  Location: out.pptx");

        let lines = Deck::Dark.summary_lines("dark.pptx", 4);
        assert_eq!(lines[0], "");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_slide_counts() {
        let counts: Vec<usize> = Deck::ALL
            .iter()
            .map(|deck| deck.build().unwrap().slide_count())
            .collect();
        assert_eq!(counts, vec![16, 16, 4]);
    }
}
