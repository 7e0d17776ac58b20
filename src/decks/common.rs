//! Slide helpers shared by the light decks.
//!
//! Every helper appends one slide (or one shape) and returns it so callers
//! can decorate it further, e.g. with a source footnote.

use crate::common::error::{DeckError, Result};
use crate::common::{RGBColor, inches};
use crate::pptx::{Alignment, Anchor, Presentation, Rect, Shape, Slide, SlideLayout};

/// Headline blue used for titles and callouts.
pub const BRAND_BLUE: RGBColor = RGBColor::new(3, 105, 161);
pub const FOOTNOTE_GRAY: RGBColor = RGBColor::new(100, 100, 100);

/// Font sizes (points) that differ between the original and honest decks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckStyle {
    pub bullet_size: f64,
    pub subtext_size: f64,
    pub contact_size: f64,
}

impl DeckStyle {
    pub const ORIGINAL: Self = Self {
        bullet_size: 18.0,
        subtext_size: 20.0,
        contact_size: 18.0,
    };

    pub const HONEST: Self = Self {
        bullet_size: 16.0,
        subtext_size: 18.0,
        contact_size: 16.0,
    };
}

/// A rectangle given in inches.
pub fn at(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::new(inches(left), inches(top), inches(width), inches(height))
}

/// An empty 10" x 7.5" presentation.
pub fn new_presentation(title: &str) -> Presentation {
    let mut pres = Presentation::new();
    pres.set_slide_width(inches(10.0));
    pres.set_slide_height(inches(7.5));
    pres.set_title(title);
    pres
}

pub fn add_text_box(slide: &mut Slide, rect: Rect) -> &mut Shape {
    slide.add_text_box(rect.x, rect.y, rect.width, rect.height)
}

fn placeholder(slide: &mut Slide, idx: u32) -> Result<&mut Shape> {
    let layout = slide.layout();
    slide
        .placeholder_mut(idx)
        .ok_or(DeckError::InvalidLayout(layout.index()))
}

fn set_title(slide: &mut Slide, title: &str) -> Result<()> {
    if slide.set_title(title) {
        Ok(())
    } else {
        Err(DeckError::InvalidLayout(slide.layout().index()))
    }
}

/// Title layout with the title and a (possibly multi-line) subtitle.
pub fn title_slide<'a>(
    pres: &'a mut Presentation,
    title: &str,
    subtitle: &str,
) -> Result<&'a mut Slide> {
    let slide = pres.add_slide(SlideLayout::TitleSlide);
    set_title(slide, title)?;
    placeholder(slide, 1)?.set_text(subtitle);
    Ok(slide)
}

/// Title and content layout with one bullet paragraph per item.
///
/// Empty items become blank spacer paragraphs.
pub fn content_slide<'a>(
    pres: &'a mut Presentation,
    style: &DeckStyle,
    title: &str,
    items: &[&str],
) -> Result<&'a mut Slide> {
    let slide = pres.add_slide(SlideLayout::TitleAndContent);
    set_title(slide, title)?;

    let body = placeholder(slide, 1)?.text_frame_mut();
    body.clear();
    for item in items {
        body.add_paragraph()
            .set_text(item)
            .set_level(0)
            .font_size(style.bullet_size);
    }

    Ok(slide)
}

fn slide_heading(slide: &mut Slide, title: &str, color: Option<RGBColor>) {
    let paragraph = add_text_box(slide, at(0.5, 0.5, 9.0, 0.8))
        .text_frame_mut()
        .add_paragraph();
    paragraph.set_text(title).font_size(32.0).bold(true);
    if let Some(color) = color {
        paragraph.color(color);
    }
}

fn column(slide: &mut Slide, rect: Rect, items: &[&str]) {
    let frame = add_text_box(slide, rect).text_frame_mut();
    frame.set_word_wrap(true);
    for item in items {
        frame
            .add_paragraph()
            .set_text(item)
            .font_size(14.0)
            .set_space_after(12.0);
    }
}

/// Blank layout with a blue heading and two wrapped 14pt columns.
pub fn two_column_slide<'a>(
    pres: &'a mut Presentation,
    title: &str,
    left: &[&str],
    right: &[&str],
) -> &'a mut Slide {
    let slide = pres.add_slide(SlideLayout::Blank);
    slide_heading(slide, title, Some(BRAND_BLUE));
    column(slide, at(0.5, 1.5, 4.5, 5.0), left);
    column(slide, at(5.2, 1.5, 4.5, 5.0), right);
    slide
}

/// Blank layout with a heading, a 44pt centred callout and optional subtext.
pub fn large_text_slide<'a>(
    pres: &'a mut Presentation,
    style: &DeckStyle,
    title: &str,
    main_text: &str,
    subtext: &str,
) -> &'a mut Slide {
    let slide = pres.add_slide(SlideLayout::Blank);
    slide_heading(slide, title, None);

    let frame = add_text_box(slide, at(1.0, 2.5, 8.0, 2.0)).text_frame_mut();
    frame.set_vertical_anchor(Anchor::Middle);
    frame
        .add_paragraph()
        .set_text(main_text)
        .font_size(44.0)
        .bold(true)
        .color(BRAND_BLUE)
        .set_alignment(Alignment::Center);

    if !subtext.is_empty() {
        add_text_box(slide, at(1.0, 4.8, 8.0, 1.0))
            .text_frame_mut()
            .add_paragraph()
            .set_text(subtext)
            .font_size(style.subtext_size)
            .set_alignment(Alignment::Center);
    }

    slide
}

/// Small gray source line along the bottom edge of the slide.
pub fn source_footnote<'a>(slide: &'a mut Slide, source: &str) -> &'a mut Shape {
    let shape = add_text_box(slide, at(0.5, 6.8, 9.0, 0.4));
    shape
        .text_frame_mut()
        .add_paragraph()
        .set_text(source)
        .font_size(10.0)
        .color(FOOTNOTE_GRAY);
    shape
}

/// Closing slide: a large "Thank You!" over centred contact lines.
pub fn thank_you_slide<'a>(
    pres: &'a mut Presentation,
    style: &DeckStyle,
    lines: &[&str],
) -> &'a mut Slide {
    let slide = pres.add_slide(SlideLayout::Blank);

    let frame = add_text_box(slide, at(1.0, 2.0, 8.0, 2.0)).text_frame_mut();
    frame.set_vertical_anchor(Anchor::Middle);
    frame
        .add_paragraph()
        .set_text("Thank You!")
        .font_size(60.0)
        .bold(true)
        .color(BRAND_BLUE)
        .set_alignment(Alignment::Center);

    let frame = add_text_box(slide, at(1.0, 4.5, 8.0, 2.0)).text_frame_mut();
    for line in lines {
        frame
            .add_paragraph()
            .set_text(line)
            .font_size(style.contact_size)
            .set_alignment(Alignment::Center);
    }

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::PlaceholderType;

    #[test]
    fn test_title_slide_splits_subtitle() {
        let mut pres = new_presentation("test");
        let slide = title_slide(&mut pres, "CharacterLock AI", "one\ntwo").unwrap();
        let subtitle = slide.placeholder(1).unwrap();
        assert_eq!(subtitle.placeholder_type(), Some(PlaceholderType::Subtitle));
        assert_eq!(subtitle.text_frame().paragraphs().len(), 2);
        assert_eq!(slide.title().unwrap().text(), "CharacterLock AI");
    }

    #[test]
    fn test_content_slide_bullets() {
        let mut pres = new_presentation("test");
        let slide =
            content_slide(&mut pres, &DeckStyle::HONEST, "Roadmap", &["a", "", "b"]).unwrap();
        let body = slide.placeholder(1).unwrap().text_frame();
        // the cleared frame keeps its empty first paragraph
        assert_eq!(body.paragraphs().len(), 4);
        assert_eq!(body.text(), "\na\n\nb");
        assert_eq!(body.paragraphs()[1].font().size, Some(16.0));
    }

    #[test]
    fn test_two_column_slide() {
        let mut pres = new_presentation("test");
        let slide = two_column_slide(&mut pres, "Stack", &["BACKEND:"], &["FRONTEND:"]);
        assert_eq!(slide.shape_count(), 3);
        let right = &slide.shapes()[2];
        assert_eq!(right.rect(), at(5.2, 1.5, 4.5, 5.0));
        assert_eq!(right.text_frame().word_wrap(), Some(true));
        assert_eq!(right.text(), "\nFRONTEND:");
    }

    #[test]
    fn test_large_text_slide_without_subtext() {
        let mut pres = new_presentation("test");
        let slide = large_text_slide(&mut pres, &DeckStyle::ORIGINAL, "Impact", "85%+", "");
        assert_eq!(slide.shape_count(), 2);

        let slide = large_text_slide(&mut pres, &DeckStyle::ORIGINAL, "Impact", "85%+", "sub");
        assert_eq!(slide.shape_count(), 3);
        assert_eq!(
            slide.shapes()[2].text_frame().paragraphs()[1].font().size,
            Some(20.0)
        );
    }

    #[test]
    fn test_source_footnote() {
        let mut pres = new_presentation("test");
        let slide = pres.add_slide(SlideLayout::TitleAndContent);
        let shape = source_footnote(slide, "* Source: test");
        assert_eq!(shape.text(), "\n* Source: test");
        assert_eq!(shape.rect().bottom(), inches(7.2));
    }
}
