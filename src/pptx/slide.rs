/// Slide types and implementation for PPTX presentations.
use super::format::AutoShapeType;
use super::layout::SlideLayout;
use super::shape::{Rect, Shape};
use crate::common::RGBColor;
use crate::common::error::Result;
use std::fmt::Write as FmtWrite;

/// A slide in a presentation.
///
/// Created through [`Presentation::add_slide`](super::Presentation::add_slide),
/// which clones the layout's placeholders onto the slide.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique within the presentation)
    pub(crate) slide_id: u32,
    layout: SlideLayout,
    /// Solid background color, `None` to follow the master
    background: Option<RGBColor>,
    shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        // IDs: 1=group, 2+=shapes
        let shapes = layout
            .placeholders()
            .iter()
            .enumerate()
            .map(|(offset, spec)| {
                Shape::new_placeholder(
                    offset as u32 + 2,
                    spec.name,
                    spec.ph_type,
                    spec.idx,
                    spec.vertical,
                    spec.rect,
                    true,
                )
            })
            .collect();

        Self {
            slide_id,
            layout,
            background: None,
            shapes,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    /// Fill the slide background with a solid color.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// The title placeholder, if the layout has one.
    pub fn title(&self) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|s| s.placeholder_type().is_some_and(|t| t.is_title()))
    }

    pub fn title_mut(&mut self) -> Option<&mut Shape> {
        self.shapes
            .iter_mut()
            .find(|s| s.placeholder_type().is_some_and(|t| t.is_title()))
    }

    /// Placeholder by its `idx` (0 is the title).
    pub fn placeholder(&self, idx: u32) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.placeholder_idx() == Some(idx))
    }

    pub fn placeholder_mut(&mut self, idx: u32) -> Option<&mut Shape> {
        self.shapes
            .iter_mut()
            .find(|s| s.placeholder_idx() == Some(idx))
    }

    /// Set the title placeholder's text. Returns `false` if the layout has no title.
    pub fn set_title(&mut self, title: &str) -> bool {
        match self.title_mut() {
            Some(shape) => {
                shape.set_text(title);
                true
            },
            None => false,
        }
    }

    /// Add a text box at the given position (EMU).
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut Shape {
        let shape_id = self.next_shape_id();
        let shape = Shape::new_text_box(shape_id, Rect::new(x, y, width, height));
        self.push_shape(shape)
    }

    /// Add an auto shape (rectangle, oval, ...) at the given position (EMU).
    pub fn add_shape(
        &mut self,
        shape_type: AutoShapeType,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut Shape {
        let shape_id = self.next_shape_id();
        let shape = Shape::new_auto_shape(shape_id, shape_type, Rect::new(x, y, width, height));
        self.push_shape(shape)
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes
            .iter()
            .map(Shape::shape_id)
            .max()
            .map_or(2, |max| max + 1)
    }

    fn push_shape(&mut self, shape: Shape) -> &mut Shape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Shapes whose box leaves a `width` x `height` canvas.
    ///
    /// Placeholders are checked against the layout geometry they inherit.
    pub fn shapes_outside(&self, width: i64, height: i64) -> Vec<&Shape> {
        self.shapes
            .iter()
            .filter(|s| !s.rect().fits_within(width, height))
            .collect()
    }

    /// Generate slide XML content.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(color) = self.background {
            xml.push_str("<p:bg><p:bgPr>");
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
            xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
        }

        xml.push_str("<p:spTree>");
        write_group_properties(&mut xml);

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

/// Write the mandatory group shape properties that open every shape tree.
pub(crate) fn write_group_properties(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::inches;
    use crate::pptx::shape::PlaceholderType;

    #[test]
    fn test_placeholders_cloned_from_layout() {
        let slide = Slide::new(256, SlideLayout::TitleSlide);
        assert_eq!(slide.shape_count(), 2);
        assert_eq!(
            slide.title().and_then(|s| s.placeholder_type()),
            Some(PlaceholderType::CenterTitle)
        );
        assert_eq!(
            slide.placeholder(1).and_then(|s| s.placeholder_type()),
            Some(PlaceholderType::Subtitle)
        );
    }

    #[test]
    fn test_set_title() {
        let mut slide = Slide::new(256, SlideLayout::TitleAndContent);
        assert!(slide.set_title("Market Opportunity"));
        assert_eq!(slide.title().map(|s| s.text()), Some("Market Opportunity".into()));

        let mut blank = Slide::new(257, SlideLayout::Blank);
        assert!(!blank.set_title("ignored"));
        assert!(blank.title().is_none());
    }

    #[test]
    fn test_shape_ids_are_unique() {
        let mut slide = Slide::new(256, SlideLayout::TitleAndContent);
        let id = slide
            .add_text_box(inches(0.5), inches(6.8), inches(9.0), inches(0.4))
            .shape_id();
        assert_eq!(id, 4);
        let id = slide
            .add_shape(AutoShapeType::Oval, 0, 0, inches(1.2), inches(1.2))
            .shape_id();
        assert_eq!(id, 5);

        let mut blank = Slide::new(257, SlideLayout::Blank);
        assert_eq!(blank.add_text_box(0, 0, 1, 1).shape_id(), 2);
    }

    #[test]
    fn test_shapes_outside() {
        let mut slide = Slide::new(256, SlideLayout::Blank);
        slide.add_text_box(inches(0.5), inches(0.5), inches(6.0), inches(0.5));
        slide.add_text_box(inches(7.0), inches(7.0), inches(3.5), inches(1.0));
        let outside = slide.shapes_outside(inches(10.0), inches(7.5));
        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].name(), "TextBox 2");
    }

    #[test]
    fn test_slide_xml() {
        let mut slide = Slide::new(256, SlideLayout::Blank);
        slide.set_background(RGBColor::BLACK);
        slide
            .add_text_box(0, 0, inches(6.0), inches(0.5))
            .text_frame_mut()
            .first_paragraph_mut()
            .set_text("01. THE PROBLEM");

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains("<p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"000000\"/>"));
        assert!(xml.contains("<a:t>01. THE PROBLEM</a:t>"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
