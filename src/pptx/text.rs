//! Text frames and paragraphs.
//!
//! A text frame always holds at least one paragraph. `add_paragraph` appends
//! after the existing ones, so a fresh frame that only receives
//! `add_paragraph` calls keeps its leading empty paragraph.

use super::format::{Alignment, Anchor, Font};
use crate::common::RGBColor;
use crate::common::error::Result;
use crate::common::unit::font_size_to_centipoints;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// Deepest indentation level a paragraph may have.
pub const MAX_LEVEL: u8 = 8;

/// How the text body is laid out inside its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyStyle {
    /// Placeholder: every property inherited from the layout
    Placeholder,
    /// Text box: no wrapping, shape grows to fit its text
    TextBox,
    /// Auto shape: wrapped text, centred vertically
    AutoShape,
}

/// A paragraph of text with uniform formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    text: String,
    level: u8,
    alignment: Option<Alignment>,
    /// Space after the paragraph in points
    space_after: Option<f64>,
    font: Font,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the paragraph. Line breaks are kept as `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the paragraph text. A `\n` becomes a line break inside the paragraph.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = text.to_string();
        self
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Set the indentation level, clamped to `0..=8`.
    pub fn set_level(&mut self, level: u8) -> &mut Self {
        if level > MAX_LEVEL {
            log::warn!("paragraph level {} clamped to {}", level, MAX_LEVEL);
        }
        self.level = level.min(MAX_LEVEL);
        self
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the space after the paragraph, in points.
    pub fn set_space_after(&mut self, points: f64) -> &mut Self {
        self.space_after = Some(points);
        self
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.font.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.font.bold = Some(bold);
        self
    }

    /// Builder method: set italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.font.italic = Some(italic);
        self
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.font.color = Some(color);
        self
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        self.write_paragraph_properties(xml)?;

        for (index, line) in self.text.split('\n').enumerate() {
            if index > 0 {
                xml.push_str("<a:br>");
                self.font.write_run_properties(xml, "rPr")?;
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            self.font.write_run_properties(xml, "rPr")?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
        }

        if self.text.is_empty() && self.font.is_set() {
            // Keeps the height of blank spacer lines in line with their neighbours
            self.font.write_run_properties(xml, "endParaRPr")?;
        }

        xml.push_str("</a:p>");
        Ok(())
    }

    fn write_paragraph_properties(&self, xml: &mut String) -> Result<()> {
        if self.level == 0 && self.alignment.is_none() && self.space_after.is_none() {
            return Ok(());
        }

        xml.push_str("<a:pPr");
        if self.level > 0 {
            write!(xml, r#" lvl="{}""#, self.level)?;
        }
        if let Some(alignment) = self.alignment {
            write!(xml, r#" algn="{}""#, alignment.as_str())?;
        }

        match self.space_after {
            Some(points) => {
                xml.push('>');
                write!(
                    xml,
                    r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                    font_size_to_centipoints(points)
                )?;
                xml.push_str("</a:pPr>");
            },
            None => xml.push_str("/>"),
        }

        Ok(())
    }
}

/// The text container of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    word_wrap: Option<bool>,
    anchor: Option<Anchor>,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFrame {
    /// A frame with a single empty paragraph.
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
            word_wrap: None,
            anchor: None,
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// The first paragraph, which always exists.
    pub fn first_paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        &mut self.paragraphs[0]
    }

    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    /// Append a new empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Remove all paragraphs but one, and empty that one.
    ///
    /// The remaining paragraph keeps no formatting.
    pub fn clear(&mut self) {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::new());
    }

    /// Text of the whole frame, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the frame contents with one paragraph per `\n`-separated line.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = text
            .split('\n')
            .map(|line| {
                let mut paragraph = Paragraph::new();
                paragraph.set_text(line);
                paragraph
            })
            .collect();
    }

    pub fn word_wrap(&self) -> Option<bool> {
        self.word_wrap
    }

    pub fn set_word_wrap(&mut self, wrap: bool) {
        self.word_wrap = Some(wrap);
    }

    pub fn vertical_anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn set_vertical_anchor(&mut self, anchor: Anchor) {
        self.anchor = Some(anchor);
    }

    pub(crate) fn write_xml(&self, xml: &mut String, style: BodyStyle) -> Result<()> {
        xml.push_str("<p:txBody>");
        self.write_body_properties(xml, style)?;
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }

    fn write_body_properties(&self, xml: &mut String, style: BodyStyle) -> Result<()> {
        let wrap = match (self.word_wrap, style) {
            (Some(true), _) => Some("square"),
            (Some(false), _) => Some("none"),
            (None, BodyStyle::TextBox) => Some("none"),
            (None, BodyStyle::AutoShape) => Some("square"),
            (None, BodyStyle::Placeholder) => None,
        };
        let anchor = match (self.anchor, style) {
            (Some(anchor), _) => Some(anchor),
            (None, BodyStyle::AutoShape) => Some(Anchor::Middle),
            (None, _) => None,
        };

        xml.push_str("<a:bodyPr");
        if let Some(wrap) = wrap {
            write!(xml, r#" wrap="{}""#, wrap)?;
        }
        if style != BodyStyle::Placeholder {
            xml.push_str(r#" rtlCol="0""#);
        }
        if let Some(anchor) = anchor {
            write!(xml, r#" anchor="{}""#, anchor.as_str())?;
        }

        if style == BodyStyle::TextBox {
            xml.push_str("><a:spAutoFit/></a:bodyPr>");
        } else {
            xml.push_str("/>");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_has_one_empty_paragraph() {
        let frame = TextFrame::new();
        assert_eq!(frame.paragraphs().len(), 1);
        assert_eq!(frame.text(), "");
    }

    #[test]
    fn test_add_paragraph_appends_after_existing() {
        let mut frame = TextFrame::new();
        frame.add_paragraph().set_text("CharacterLock AI");
        frame.add_paragraph().set_text("Questions?");
        assert_eq!(frame.paragraphs().len(), 3);
        assert_eq!(frame.text(), "\nCharacterLock AI\nQuestions?");
    }

    #[test]
    fn test_clear_and_set_text() {
        let mut frame = TextFrame::new();
        frame.add_paragraph().set_text("stale");
        frame.clear();
        assert_eq!(frame.paragraphs().len(), 1);

        frame.set_text("Persistent Character Memory\nCine AI Hackathon 2026");
        assert_eq!(frame.paragraphs().len(), 2);
        assert_eq!(frame.paragraphs()[1].text(), "Cine AI Hackathon 2026");
    }

    #[test]
    fn test_level_is_clamped() {
        let mut paragraph = Paragraph::new();
        paragraph.set_level(12);
        assert_eq!(paragraph.level(), MAX_LEVEL);
    }

    #[test]
    fn test_paragraph_xml() {
        let mut paragraph = Paragraph::new();
        paragraph
            .set_text("85%+")
            .font_size(44.0)
            .bold(true)
            .color(RGBColor::new(3, 105, 161))
            .set_alignment(Alignment::Center);

        let mut xml = String::new();
        paragraph.write_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<a:p><a:pPr algn="ctr"/><a:r>"#,
                r#"<a:rPr lang="en-US" sz="4400" b="1" dirty="0"><a:solidFill><a:srgbClr val="0369A1"/></a:solidFill></a:rPr>"#,
                r#"<a:t>85%+</a:t></a:r></a:p>"#
            )
        );
    }

    #[test]
    fn test_line_breaks_and_spacing() {
        let mut paragraph = Paragraph::new();
        paragraph.set_text("one\ntwo").set_space_after(12.0);

        let mut xml = String::new();
        paragraph.write_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<a:p><a:pPr><a:spcAft><a:spcPts val="1200"/></a:spcAft></a:pPr>"#));
        assert!(xml.contains("<a:t>one</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:t>two</a:t>"));
    }

    #[test]
    fn test_blank_paragraph_keeps_size() {
        let mut paragraph = Paragraph::new();
        paragraph.font_size(16.0);

        let mut xml = String::new();
        paragraph.write_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<a:p><a:endParaRPr lang="en-US" sz="1600" dirty="0"/></a:p>"#
        );
    }

    #[test]
    fn test_body_properties_by_style() {
        let mut frame = TextFrame::new();
        let mut xml = String::new();
        frame.write_xml(&mut xml, BodyStyle::TextBox).unwrap();
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));

        frame.set_word_wrap(true);
        frame.set_vertical_anchor(Anchor::Middle);
        let mut xml = String::new();
        frame.write_xml(&mut xml, BodyStyle::TextBox).unwrap();
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr">"#));

        let mut xml = String::new();
        TextFrame::new()
            .write_xml(&mut xml, BodyStyle::Placeholder)
            .unwrap();
        assert_eq!(xml, "<p:txBody><a:bodyPr/><a:lstStyle/><a:p></a:p></p:txBody>");
    }
}
