/// Shape types and implementation for PPTX slides.
use super::format::{Alignment, AutoShapeType, Fill, Line};
use super::text::{BodyStyle, TextFrame};
use crate::common::error::Result;
use crate::common::unit::emu_to_inches;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Whether the rectangle lies entirely within a `width` x `height` canvas.
    pub fn fits_within(&self, width: i64, height: i64) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= 0
            && self.height >= 0
            && self.right() <= width
            && self.bottom() <= height
    }

    fn write_xfrm(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.2}in, {:.2}in, {:.2}in x {:.2}in)",
            emu_to_inches(self.x),
            emu_to_inches(self.y),
            emu_to_inches(self.width),
            emu_to_inches(self.height)
        )
    }
}

/// Placeholder types supported by the stock layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderType {
    Title,
    CenterTitle,
    Subtitle,
    Body,
    /// Generic content placeholder (`obj`, the schema default)
    Object,
    Picture,
}

impl PlaceholderType {
    /// Value of the `type` attribute on `<p:ph>`, `None` for the default `obj`.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Title => Some("title"),
            Self::CenterTitle => Some("ctrTitle"),
            Self::Subtitle => Some("subTitle"),
            Self::Body => Some("body"),
            Self::Object => None,
            Self::Picture => Some("pic"),
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, Self::Title | Self::CenterTitle)
    }
}

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Layout-driven placeholder
    Placeholder {
        ph_type: PlaceholderType,
        idx: u32,
        vertical: bool,
    },
    /// Free-standing text box
    TextBox,
    /// Preset geometry with theme styling
    AutoShape(AutoShapeType),
}

/// A shape on a slide (placeholder, text box or auto shape).
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) shape_id: u32,
    name: String,
    kind: ShapeKind,
    rect: Rect,
    /// Placeholders on slides take their geometry from the layout
    inherit_geometry: bool,
    fill: Fill,
    line: Line,
    text_frame: TextFrame,
}

impl Shape {
    pub(crate) fn new_placeholder(
        shape_id: u32,
        name: &str,
        ph_type: PlaceholderType,
        idx: u32,
        vertical: bool,
        rect: Rect,
        inherit_geometry: bool,
    ) -> Self {
        Self {
            shape_id,
            name: name.to_string(),
            kind: ShapeKind::Placeholder {
                ph_type,
                idx,
                vertical,
            },
            rect,
            inherit_geometry,
            fill: Fill::Inherit,
            line: Line::default(),
            text_frame: TextFrame::new(),
        }
    }

    pub(crate) fn new_text_box(shape_id: u32, rect: Rect) -> Self {
        Self {
            shape_id,
            name: format!("TextBox {}", shape_id - 1),
            kind: ShapeKind::TextBox,
            rect,
            inherit_geometry: false,
            fill: Fill::NoFill,
            line: Line::default(),
            text_frame: TextFrame::new(),
        }
    }

    pub(crate) fn new_auto_shape(shape_id: u32, shape_type: AutoShapeType, rect: Rect) -> Self {
        let mut text_frame = TextFrame::new();
        text_frame.first_paragraph_mut().set_alignment(Alignment::Center);

        Self {
            shape_id,
            name: format!("{} {}", shape_type.base_name(), shape_id - 1),
            kind: ShapeKind::AutoShape(shape_type),
            rect,
            inherit_geometry: false,
            fill: Fill::Inherit,
            line: Line::default(),
            text_frame,
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Position and size. For slide placeholders this is the layout geometry.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Placeholder type, if this shape is a placeholder.
    pub fn placeholder_type(&self) -> Option<PlaceholderType> {
        match self.kind {
            ShapeKind::Placeholder { ph_type, .. } => Some(ph_type),
            _ => None,
        }
    }

    /// Placeholder index, if this shape is a placeholder.
    pub fn placeholder_idx(&self) -> Option<u32> {
        match self.kind {
            ShapeKind::Placeholder { idx, .. } => Some(idx),
            _ => None,
        }
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Fill) -> &mut Self {
        self.fill = fill;
        self
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut Line {
        &mut self.line
    }

    pub fn set_line(&mut self, line: Line) -> &mut Self {
        self.line = line;
        self
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    /// Text of the shape, one line per paragraph.
    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    /// Replace the text, one paragraph per `\n`-separated line.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text_frame.set_text(text);
        self
    }

    /// Generate the `<p:sp>` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        self.write_non_visual_properties(xml)?;

        match self.kind {
            ShapeKind::Placeholder { .. } if self.inherit_geometry => {
                xml.push_str("<p:spPr/>");
                self.text_frame.write_xml(xml, BodyStyle::Placeholder)?;
            },
            ShapeKind::Placeholder { .. } => {
                xml.push_str("<p:spPr>");
                self.rect.write_xfrm(xml)?;
                xml.push_str("</p:spPr>");
                self.text_frame.write_xml(xml, BodyStyle::Placeholder)?;
            },
            ShapeKind::TextBox => {
                self.write_shape_properties(xml, "rect")?;
                self.text_frame.write_xml(xml, BodyStyle::TextBox)?;
            },
            ShapeKind::AutoShape(shape_type) => {
                self.write_shape_properties(xml, shape_type.preset())?;
                xml.push_str("<p:style>");
                xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
                xml.push_str(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#);
                xml.push_str(r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#);
                xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#);
                xml.push_str("</p:style>");
                self.text_frame.write_xml(xml, BodyStyle::AutoShape)?;
            },
        }

        xml.push_str("</p:sp>");
        Ok(())
    }

    fn write_non_visual_properties(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )?;

        match self.kind {
            ShapeKind::Placeholder {
                ph_type,
                idx,
                vertical,
            } => {
                xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
                xml.push_str("<p:nvPr><p:ph");
                if let Some(ph_type) = ph_type.as_str() {
                    write!(xml, r#" type="{}""#, ph_type)?;
                }
                if vertical {
                    xml.push_str(r#" orient="vert""#);
                }
                if idx > 0 {
                    write!(xml, r#" idx="{}""#, idx)?;
                }
                xml.push_str("/></p:nvPr>");
            },
            ShapeKind::TextBox => {
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/>"#);
            },
            ShapeKind::AutoShape(_) => {
                xml.push_str("<p:cNvSpPr/><p:nvPr/>");
            },
        }

        xml.push_str("</p:nvSpPr>");
        Ok(())
    }

    fn write_shape_properties(&self, xml: &mut String, preset: &str) -> Result<()> {
        xml.push_str("<p:spPr>");
        self.rect.write_xfrm(xml)?;
        write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)?;
        self.fill.write_xml(xml)?;
        self.line.write_xml(xml)?;
        xml.push_str("</p:spPr>");
        Ok(())
    }
}
