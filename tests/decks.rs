//! Integration tests for the pitch decks
//!
//! Each deck is written to disk and read back to verify its structure.

use std::io::{Cursor, Read};

use pitchdeck::decks::{Deck, dark};
use pitchdeck::inspect::DeckSummary;
use quick_xml::Reader;
use quick_xml::events::Event;
use tempfile::TempDir;
use zip::ZipArchive;

fn write_and_inspect(deck: Deck) -> (TempDir, DeckSummary) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(deck.output_file());

    deck.build()
        .expect("Failed to build deck")
        .save(&path)
        .expect("Failed to save deck");

    let summary = DeckSummary::open(&path).expect("Failed to inspect deck");
    (temp_dir, summary)
}

fn assert_well_formed(name: &str, xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("{} is not well-formed: {}", name, e),
        }
    }
}

// =============================================================================
// Slide counts and titles
// =============================================================================

#[test]
fn test_slide_counts() {
    for (deck, expected) in [(Deck::Original, 16), (Deck::Honest, 16), (Deck::Dark, 4)] {
        let (_dir, summary) = write_and_inspect(deck);
        assert_eq!(summary.slide_count(), expected, "{} deck", deck);
    }
}

#[test]
fn test_original_titles() {
    let (_dir, summary) = write_and_inspect(Deck::Original);
    let titles = summary.titles();

    assert_eq!(titles[0], "CharacterLock AI");
    assert_eq!(
        titles[1],
        "1. The Problem: Character Inconsistency in AI Film Production"
    );
    assert_eq!(titles[2], "The Cost of Inconsistency");
    assert_eq!(titles[5], "4. How It Works: Technical Innovation");
    assert_eq!(titles[14], "Join Us in Transforming Film Production");
    assert_eq!(titles[15], "Thank You!");
}

#[test]
fn test_honest_titles_and_footnotes() {
    let (_dir, summary) = write_and_inspect(Deck::Honest);
    let titles = summary.titles();

    assert_eq!(titles[1], "1. The Problem: AI Character Inconsistency");
    assert_eq!(titles[2], "The Real Cost of Inconsistency");
    assert_eq!(titles[8], "5. Expected Impact: Proven Consistency");

    let footnoted: Vec<usize> = summary
        .slides
        .iter()
        .enumerate()
        .filter(|(_, slide)| {
            slide
                .texts()
                .iter()
                .any(|text| text.trim_start().starts_with("* Source") || text.trim_start().starts_with("Sources:"))
        })
        .map(|(index, _)| index + 1)
        .collect();
    assert_eq!(footnoted, vec![2, 3, 11]);

    assert!(summary.slides[1].contains_text("* Source: AIStudios, Pyxeljam (2025)"));
}

#[test]
fn test_title_slide_subtitle() {
    let (_dir, summary) = write_and_inspect(Deck::Original);
    let subtitle = summary.slides[0]
        .shapes
        .iter()
        .find(|shape| shape.placeholder.as_deref() == Some("subTitle"))
        .expect("title slide has a subtitle");
    assert_eq!(
        subtitle.text,
        "Persistent Character Memory for Film Production\nCine AI Hackathon 2026"
    );
}

// =============================================================================
// Dark deck
// =============================================================================

#[test]
fn test_dark_slides_are_black() {
    let (_dir, summary) = write_and_inspect(Deck::Dark);

    for slide in &summary.slides {
        assert_eq!(slide.background.as_deref(), Some("000000"), "{}", slide.part_name);
    }
    assert_eq!(
        summary.titles(),
        vec![
            "01. THE PROBLEM",
            "02. THE SOLUTION",
            "03. THE IMPACT",
            "04. THE ENGINE"
        ]
    );
    assert!(summary.slides[3].contains_text("proprietary \"Identity Scoring\" logic"));
}

#[test]
fn test_dark_progress_lines() {
    let mut lines = Vec::new();
    dark::build_with_progress(|line| lines.push(line.to_string())).expect("Failed to build deck");
    assert_eq!(
        lines,
        vec![
            "Creating slide 1: The Problem...",
            "Creating slide 2: The Solution...",
            "Creating slide 3: The Impact...",
            "Creating slide 4: The Engine...",
        ]
    );
}

// =============================================================================
// Package structure
// =============================================================================

#[test]
fn test_shapes_fit_the_canvas() {
    for deck in Deck::ALL {
        let pres = deck.build().expect("Failed to build deck");
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);

        let outside: Vec<String> = pres
            .out_of_bounds_shapes()
            .iter()
            .map(|(index, shape)| format!("slide {} {} {}", index + 1, shape.name(), shape.rect()))
            .collect();
        assert!(outside.is_empty(), "{} deck: {:?}", deck, outside);
    }
}

#[test]
fn test_package_parts_are_well_formed() {
    for deck in Deck::ALL {
        let pres = deck.build().expect("Failed to build deck");
        let bytes = pres.to_bytes().expect("Failed to serialize deck");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("not a zip archive");

        let first = archive.by_index(0).expect("archive is empty").name().to_string();
        assert_eq!(first, "[Content_Types].xml");

        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"ppt/presentation.xml".to_string()));
        for n in 1..=pres.slide_count() {
            assert!(names.contains(&format!("ppt/slides/slide{}.xml", n)));
        }

        for name in &names {
            let mut xml = String::new();
            archive
                .by_name(name)
                .expect("listed part exists")
                .read_to_string(&mut xml)
                .expect("part is UTF-8");
            assert_well_formed(name, &xml);
        }
    }
}
