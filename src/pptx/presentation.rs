/// Presentation writer for PPTX.
use super::layout::SlideLayout;
use super::package;
use super::shape::Shape;
use super::slide::Slide;
use crate::common::error::Result;
use crate::common::unit::{DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH};
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// First slide id; PowerPoint requires ids of at least 256.
const FIRST_SLIDE_ID: u32 = 256;

/// A PowerPoint presentation under construction.
///
/// Starts empty at 10" x 7.5" with the stock template: one master and
/// eleven layouts. Slides are appended with [`add_slide`](Self::add_slide)
/// and the whole package is written with [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct Presentation {
    /// Slides in the presentation
    slides: Vec<Slide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title stored in the core properties
    title: String,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Create a new empty presentation with default dimensions.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            title: String::new(),
        }
    }

    /// Append a slide built on `layout`, with the layout's placeholders.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut Slide {
        let slide_id = self
            .slides
            .iter()
            .map(Slide::slide_id)
            .max()
            .map_or(FIRST_SLIDE_ID, |max| max + 1);
        self.slides.push(Slide::new(slide_id, layout));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Append a slide using the layout at `index` in the template.
    pub fn add_slide_by_index(&mut self, index: usize) -> Result<&mut Slide> {
        let layout = SlideLayout::from_index(index)?;
        Ok(self.add_slide(layout))
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Shapes that leave the slide canvas, with their 0-based slide index.
    pub fn out_of_bounds_shapes(&self) -> Vec<(usize, &Shape)> {
        self.slides
            .iter()
            .enumerate()
            .flat_map(|(index, slide)| {
                slide
                    .shapes_outside(self.slide_width, self.slide_height)
                    .into_iter()
                    .map(move |shape| (index, shape))
            })
            .collect()
    }

    /// Serialize the presentation into PPTX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::write_presentation(self)
    }

    /// Write the presentation to `path`, replacing any existing file.
    ///
    /// The package is assembled in memory first, so a failure never leaves
    /// a half-written file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        for (index, shape) in self.out_of_bounds_shapes() {
            log::warn!(
                "slide {}: shape '{}' at {} extends past the slide",
                index + 1,
                shape.name(),
                shape.rect()
            );
        }

        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        log::info!(
            "wrote {} ({} slides, {} bytes)",
            path.display(),
            self.slides.len(),
            bytes.len()
        );
        Ok(())
    }

    /// Generate presentation.xml with the given slide relationship ids.
    pub(crate) fn to_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    escape_xml(rel_id)
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::DeckError;
    use crate::common::{RGBColor, inches};

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_slide_ids() {
        let mut pres = Presentation::new();
        assert_eq!(pres.add_slide(SlideLayout::TitleSlide).slide_id(), 256);
        assert_eq!(pres.add_slide(SlideLayout::Blank).slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_add_slide_by_index() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide_by_index(6).unwrap();
        assert_eq!(slide.layout(), SlideLayout::Blank);
        assert!(matches!(
            pres.add_slide_by_index(11),
            Err(DeckError::InvalidLayout(11))
        ));
        assert_eq!(pres.slide_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_shapes() {
        let mut pres = Presentation::new();
        pres.set_slide_height(inches(7.5));
        pres.add_slide(SlideLayout::Blank)
            .add_text_box(inches(0.5), inches(6.8), inches(9.0), inches(0.4));
        assert!(pres.out_of_bounds_shapes().is_empty());

        pres.add_slide(SlideLayout::Blank)
            .add_text_box(inches(0.5), inches(7.3), inches(9.0), inches(0.4));
        let outside = pres.out_of_bounds_shapes();
        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].0, 1);
    }

    #[test]
    fn test_edit_slide_after_adding() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::TitleSlide);
        pres.add_slide(SlideLayout::Blank);

        let slide = pres.slide_mut(0).unwrap();
        slide.shape_mut(0).unwrap().set_text("CharacterLock AI");
        assert!(slide.shape_mut(9).is_none());
        assert!(pres.slide_mut(2).is_none());

        assert_eq!(
            pres.slide(0).and_then(|s| s.title()).map(|s| s.text()),
            Some("CharacterLock AI".to_string())
        );
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Blank).set_background(RGBColor::BLACK);
        let xml = pres.to_xml(&["rId6".to_string()]).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));
    }

    #[test]
    fn test_save_writes_zip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::TitleSlide).set_title("CharacterLock AI");
        pres.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
