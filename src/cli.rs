//! Command line front end shared by the deck binaries.

use crate::common::error::Result;
use crate::decks::Deck;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Build a CharacterLock AI pitch deck", long_about = None)]
pub struct Cli {
    /// Output path (defaults to the deck's file name in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress and summary lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Path the deck is written to.
    pub fn output_path(&self, deck: Deck) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(deck.output_file()))
    }
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Build `deck`, write it, and print what the deck prints.
pub fn run(deck: Deck, cli: &Cli) -> Result<PathBuf> {
    let output = cli.output_path(deck);
    let quiet = cli.quiet;

    log::debug!("building {} deck", deck);
    let pres = deck.build_with_progress(|line| {
        if !quiet {
            println!("{}", line);
        }
    })?;
    pres.save(&output)?;

    if !quiet {
        for line in deck.summary_lines(&output.display().to_string(), pres.slide_count()) {
            println!("{}", line);
        }
    }

    Ok(output)
}

/// Entry point of every deck binary.
pub fn main(deck: Deck) -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(deck, &cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["create_dark_presentation", "-o", "deck.pptx", "-q"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("deck.pptx")));
        assert!(cli.quiet);

        let cli = Cli::try_parse_from(["create_presentation"]).unwrap();
        assert_eq!(cli.output_path(Deck::Original), PathBuf::from("CharacterLock_AI_Presentation.pptx"));
        assert!(!cli.quiet);
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            output: Some(dir.path().join("dark.pptx")),
            quiet: true,
        };
        let path = run(Deck::Dark, &cli).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_run_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            output: Some(dir.path().join("missing").join("deck.pptx")),
            quiet: true,
        };
        assert!(matches!(
            run(Deck::Dark, &cli),
            Err(crate::common::error::DeckError::Io(_))
        ));
    }
}
