//! Four-slide dark deck: black backgrounds, neon yellow accents and drawn
//! shapes instead of layout placeholders.

use super::common::{self, at, new_presentation};
use crate::common::RGBColor;
use crate::common::error::Result;
use crate::common::unit::pt;
use crate::pptx::{
    Alignment, Anchor, AutoShapeType, Fill, Line, LineDash, Presentation, Rect, Shape, Slide,
    SlideLayout,
};

pub const OUTPUT_FILE: &str = "CharacterLock_Dark_Theme.pptx";

pub const BACKGROUND: RGBColor = RGBColor::BLACK;
/// Neon yellow
pub const ACCENT: RGBColor = RGBColor::new(204, 255, 0);

const CARD: RGBColor = RGBColor::new(30, 30, 30);
const BORDER: RGBColor = RGBColor::new(60, 60, 60);
const MUTED: RGBColor = RGBColor::new(120, 120, 120);
const BODY: RGBColor = RGBColor::new(180, 180, 180);
const IMPACT: RGBColor = RGBColor::new(200, 200, 200);
const DIM: RGBColor = RGBColor::new(100, 100, 100);
const SCENE_FILL: RGBColor = RGBColor::new(40, 40, 40);
const RED: RGBColor = RGBColor::new(239, 68, 68);
const ORANGE: RGBColor = RGBColor::new(251, 146, 60);

/// Slide builders with the name printed while building.
const SLIDES: [(&str, fn(&mut Presentation)); 4] = [
    ("The Problem", problem_slide),
    ("The Solution", solution_slide),
    ("The Impact", impact_slide),
    ("The Engine", engine_slide),
];

/// Styling of a single-paragraph text box.
#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size: f64,
    bold: bool,
    color: RGBColor,
    alignment: Alignment,
}

impl TextStyle {
    /// White, regular, left aligned.
    const fn new(size: f64) -> Self {
        Self {
            size,
            bold: false,
            color: RGBColor::WHITE,
            alignment: Alignment::Left,
        }
    }

    const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    const fn color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }

    const fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

pub fn build() -> Result<Presentation> {
    build_with_progress(|_| {})
}

/// Build the deck, reporting "Creating slide N: ..." before each slide.
pub fn build_with_progress(mut progress: impl FnMut(&str)) -> Result<Presentation> {
    let mut pres = new_presentation("CharacterLock AI (Dark Theme)");

    for (index, (name, build_slide)) in SLIDES.iter().enumerate() {
        progress(&format!("Creating slide {}: {}...", index + 1, name));
        build_slide(&mut pres);
    }

    Ok(pres)
}

fn new_slide(pres: &mut Presentation) -> &mut Slide {
    let slide = pres.add_slide(SlideLayout::Blank);
    set_slide_background(slide, BACKGROUND);
    slide
}

pub fn set_slide_background(slide: &mut Slide, color: RGBColor) {
    slide.set_background(color);
}

/// Word-wrapped text box whose first paragraph carries `text`.
fn add_text_box<'a>(slide: &'a mut Slide, rect: Rect, text: &str, style: TextStyle) -> &'a mut Shape {
    let shape = common::add_text_box(slide, rect);
    let frame = shape.text_frame_mut();
    frame.set_word_wrap(true);
    frame
        .first_paragraph_mut()
        .set_text(text)
        .font_size(style.size)
        .bold(style.bold)
        .color(style.color)
        .set_alignment(style.alignment);
    shape
}

/// Filled rectangle with an optional border (color, width in points) and
/// optional centred white text.
///
/// Without a border the outline is hidden.
pub fn add_card<'a>(
    slide: &'a mut Slide,
    rect: Rect,
    fill: RGBColor,
    text: Option<&str>,
    border: Option<(RGBColor, f64)>,
) -> &'a mut Shape {
    let shape = slide.add_shape(AutoShapeType::Rectangle, rect.x, rect.y, rect.width, rect.height);
    shape.set_fill(Fill::Solid(fill));
    match border {
        Some((color, width)) => shape.set_line(Line::solid(color, pt(width))),
        None => shape.set_line(Line::none()),
    };

    if let Some(text) = text {
        let frame = shape.text_frame_mut();
        frame.clear();
        frame
            .add_paragraph()
            .set_text(text)
            .color(RGBColor::WHITE)
            .set_alignment(Alignment::Center);
        frame.set_vertical_anchor(Anchor::Middle);
    }

    shape
}

/// Dark oval with a 4pt colored ring and a bold label in the ring color.
fn scene_circle<'a>(
    slide: &'a mut Slide,
    rect: Rect,
    ring: RGBColor,
    label: &str,
    size: f64,
    italic: bool,
) -> &'a mut Shape {
    let shape = slide.add_shape(AutoShapeType::Oval, rect.x, rect.y, rect.width, rect.height);
    shape
        .set_fill(Fill::Solid(SCENE_FILL))
        .set_line(Line::solid(ring, pt(4.0)));

    let frame = shape.text_frame_mut();
    let paragraph = frame.first_paragraph_mut();
    paragraph
        .set_text(label)
        .font_size(size)
        .bold(true)
        .color(ring)
        .set_alignment(Alignment::Center);
    if italic {
        paragraph.italic(true);
    }
    frame.set_vertical_anchor(Anchor::Middle);

    shape
}

/// Yellow square with a black step number.
fn number_badge(slide: &mut Slide, left: f64, top: f64, number: &str) {
    add_card(slide, at(left, top, 0.4, 0.4), ACCENT, None, None)
        .text_frame_mut()
        .first_paragraph_mut()
        .set_text(number)
        .font_size(14.0)
        .bold(true)
        .color(RGBColor::BLACK);
}

/// Black box with a dashed 2pt border.
fn flow_box(slide: &mut Slide, left: f64, top: f64) {
    let card = add_card(slide, at(left, top, 2.0, 1.2), BACKGROUND, None, Some((BORDER, 2.0)));
    card.line_mut().dash = Some(LineDash::SquareDot);
}

fn header(slide: &mut Slide, text: &str) {
    add_text_box(
        slide,
        at(0.5, 0.5, 6.0, 0.5),
        text,
        TextStyle::new(36.0).bold().color(ACCENT),
    );
}

fn problem_slide(pres: &mut Presentation) {
    let slide = new_slide(pres);
    header(slide, "01. THE PROBLEM");

    add_text_box(
        slide,
        at(7.0, 0.5, 2.5, 0.5),
        "LOSS: $200,000 / PROJECT",
        TextStyle::new(10.0).color(MUTED).align(Alignment::Right),
    );

    add_text_box(slide, at(0.8, 2.0, 5.0, 1.5), "AI Storyboards are", TextStyle::new(60.0).bold());
    add_text_box(
        slide,
        at(0.8, 3.2, 5.0, 1.0),
        "Broken.",
        TextStyle::new(60.0).bold().color(ACCENT),
    );

    add_text_box(
        slide,
        at(0.8, 4.5, 4.5, 0.8),
        "Characters change in every frame. This \"Character Drift\" makes AI unusable for professional film sets.",
        TextStyle::new(18.0).color(BODY),
    );

    for (left, value, label) in [(0.8, "60%", "Time Wasted Fixing"), (2.5, "30%", "Error Rate")] {
        add_text_box(slide, at(left, 5.5, 1.5, 0.8), value, TextStyle::new(48.0).bold());
        add_text_box(
            slide,
            at(left, 6.2, 1.5, 0.3),
            label,
            TextStyle::new(10.0).color(MUTED),
        );
    }

    add_card(slide, at(6.0, 2.5, 3.5, 3.5), CARD, None, None);
    scene_circle(slide, at(6.8, 3.0, 1.2, 1.2), RED, "SCENE 1", 10.0, false);
    scene_circle(slide, at(6.8, 4.5, 1.2, 1.2), ORANGE, "? SCENE 2", 9.0, true);
}

fn solution_slide(pres: &mut Presentation) {
    let slide = new_slide(pres);
    header(slide, "02. THE SOLUTION");

    add_text_box(slide, at(0.8, 1.8, 5.0, 0.8), "Meet", TextStyle::new(60.0).bold());
    add_text_box(
        slide,
        at(2.5, 1.8, 5.0, 0.8),
        "CharacterLock.",
        TextStyle::new(60.0).bold().color(ACCENT),
    );

    let card_y = 3.2;
    let cards = [
        (0.8, "01", "Digital Identity", "Lock the character's facial DNA so they never change."),
        (3.8, "02", "Auto-Checker", "Our AI scores every frame. If it's not perfect, we flag it."),
        (6.8, "03", "Smart Repair", "One-click regeneration to fix inconsistencies instantly."),
    ];

    for (left, number, title, blurb) in cards {
        let inner = left + 0.2;
        add_card(slide, at(left, card_y, 2.8, 2.5), CARD, None, Some((BORDER, 1.0)));
        number_badge(slide, inner, card_y + 0.3, number);
        add_text_box(
            slide,
            at(inner, card_y + 0.9, 2.5, 0.4),
            title,
            TextStyle::new(20.0).bold(),
        );
        add_text_box(
            slide,
            at(inner, card_y + 1.4, 2.5, 0.8),
            blurb,
            TextStyle::new(12.0).color(BODY),
        );
    }
}

fn impact_slide(pres: &mut Presentation) {
    let slide = new_slide(pres);
    header(slide, "03. THE IMPACT");

    add_text_box(slide, at(0.8, 1.8, 5.0, 0.8), "From Weeks to", TextStyle::new(60.0).bold());
    add_text_box(
        slide,
        at(0.8, 2.5, 5.0, 0.8),
        "Hours.",
        TextStyle::new(60.0).bold().color(ACCENT),
    );

    let impact_y = 3.8;
    let points = [
        ("01.", "90% Reduction in storyboard costs."),
        ("02.", "Studio-quality continuity for indie budgets."),
        ("03.", "Tapping into a $2.8B global market."),
    ];

    for (row, (number, text)) in points.into_iter().enumerate() {
        let top = impact_y + 0.7 * row as f64;
        add_text_box(
            slide,
            at(0.8, top, 0.5, 0.5),
            number,
            TextStyle::new(48.0).bold().color(BORDER),
        );
        add_text_box(
            slide,
            at(1.5, top + 0.1, 4.0, 0.4),
            text,
            TextStyle::new(18.0).color(IMPACT),
        );
    }

    add_card(slide, at(6.0, 3.5, 3.5, 3.0), CARD, None, Some((BORDER, 1.0)));
    add_text_box(
        slide,
        at(6.3, 3.8, 3.0, 0.3),
        "EFFICIENCY GAIN",
        TextStyle::new(9.0).bold().color(MUTED),
    );

    // Traditional AI bar is tall and gray, CharacterLock short and yellow
    add_card(slide, at(6.5, 4.5, 1.0, 1.5), BORDER, None, None);
    add_card(slide, at(7.7, 5.8, 1.0, 0.2), ACCENT, None, None);

    add_text_box(
        slide,
        at(6.3, 6.2, 1.3, 0.2),
        "TRADITIONAL AI",
        TextStyle::new(8.0).bold().color(MUTED),
    );
    add_text_box(
        slide,
        at(7.7, 6.2, 1.5, 0.2),
        "CHARACTERLOCK",
        TextStyle::new(8.0).bold().color(MUTED),
    );
}

fn engine_slide(pres: &mut Presentation) {
    let slide = new_slide(pres);
    header(slide, "04. THE ENGINE");

    add_text_box(
        slide,
        at(0.5, 1.8, 9.0, 0.8),
        "Simple. Scalable. Powerful.",
        TextStyle::new(44.0).bold().align(Alignment::Center),
    );

    let flow_y = 3.5;

    flow_box(slide, 1.5, flow_y);
    add_text_box(
        slide,
        at(1.6, flow_y + 0.1, 1.8, 0.3),
        "INPUT",
        TextStyle::new(10.0).color(MUTED).align(Alignment::Center),
    );
    add_text_box(
        slide,
        at(1.6, flow_y + 0.5, 1.8, 0.5),
        "Script + Character",
        TextStyle::new(16.0).bold().align(Alignment::Center),
    );

    add_text_box(
        slide,
        at(3.6, flow_y + 0.4, 0.5, 0.5),
        "→",
        TextStyle::new(32.0).color(ACCENT),
    );

    add_card(slide, at(4.2, flow_y, 2.0, 1.2), ACCENT, None, None);
    add_text_box(
        slide,
        at(4.3, flow_y + 0.1, 1.8, 0.3),
        "ENGINE",
        TextStyle::new(10.0).color(DIM).align(Alignment::Center),
    );
    add_text_box(
        slide,
        at(4.3, flow_y + 0.5, 1.8, 0.5),
        "CHARACTERLOCK",
        TextStyle::new(16.0)
            .bold()
            .color(RGBColor::BLACK)
            .align(Alignment::Center),
    );

    add_text_box(
        slide,
        at(6.3, flow_y + 0.4, 0.5, 0.5),
        "→",
        TextStyle::new(32.0).color(ACCENT),
    );

    flow_box(slide, 6.9, flow_y);
    add_text_box(
        slide,
        at(7.0, flow_y + 0.1, 1.8, 0.3),
        "OUTPUT",
        TextStyle::new(10.0).color(MUTED).align(Alignment::Center),
    );
    add_text_box(
        slide,
        at(7.0, flow_y + 0.5, 1.8, 0.5),
        "Consistent Storyboard",
        TextStyle::new(16.0).bold().align(Alignment::Center),
    );

    add_text_box(
        slide,
        at(2.0, 5.5, 6.5, 0.8),
        "Built on top of OpenAI's Vision and Generation infrastructure, optimized with our proprietary \"Identity Scoring\" logic.",
        TextStyle::new(14.0).color(MUTED).align(Alignment::Center),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::inches;
    use crate::pptx::ShapeKind;

    #[test]
    fn test_build_reports_progress() {
        let mut lines = Vec::new();
        let pres = build_with_progress(|line| lines.push(line.to_string())).unwrap();
        assert_eq!(pres.slide_count(), 4);
        assert_eq!(lines[0], "Creating slide 1: The Problem...");
        assert_eq!(lines[3], "Creating slide 4: The Engine...");
    }

    #[test]
    fn test_every_slide_is_black_and_in_bounds() {
        let pres = build().unwrap();
        assert!(pres.slides().iter().all(|s| s.background() == Some(BACKGROUND)));
        assert!(pres.out_of_bounds_shapes().is_empty());
    }

    #[test]
    fn test_card_without_border_hides_line() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide(SlideLayout::Blank);
        let card = add_card(slide, at(1.0, 1.0, 2.0, 1.0), CARD, Some("Engine"), None);
        assert_eq!(card.line().fill, Fill::NoFill);
        assert_eq!(card.text(), "\nEngine");
        assert_eq!(card.text_frame().vertical_anchor(), Some(Anchor::Middle));

        let card = add_card(slide, at(1.0, 1.0, 2.0, 1.0), CARD, None, Some((BORDER, 2.0)));
        assert_eq!(card.line().width, Some(pt(2.0)));
        assert_eq!(card.text(), "");
    }

    #[test]
    fn test_scene_circles_and_dashed_flow_boxes() {
        let pres = build().unwrap();

        let problem = &pres.slides()[0];
        let ovals: Vec<_> = problem
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::AutoShape(AutoShapeType::Oval))
            .collect();
        assert_eq!(ovals.len(), 2);
        assert_eq!(ovals[0].line().width, Some(pt(4.0)));
        assert_eq!(ovals[1].text_frame().paragraphs()[0].font().italic, Some(true));

        let engine = &pres.slides()[3];
        let dashed = engine
            .shapes()
            .iter()
            .filter(|s| s.line().dash == Some(LineDash::SquareDot))
            .count();
        assert_eq!(dashed, 2);
        assert!(engine.shapes().iter().all(|s| s.rect().right() <= inches(10.0)));
    }
}
