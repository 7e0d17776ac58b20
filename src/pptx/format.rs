//! Formatting types for PPTX shapes and text.

use crate::common::RGBColor;
use crate::common::error::Result;
use crate::common::unit::font_size_to_centipoints;
use std::fmt::Write as FmtWrite;

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of the `algn` attribute on `<a:pPr>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Vertical anchoring of text inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    /// Value of the `anchor` attribute on `<a:bodyPr>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Character formatting applied to every run of a paragraph.
///
/// Unset properties are inherited from the layout, master and theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    /// Typeface name
    pub name: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<RGBColor>,
}

impl Font {
    /// Whether any property is set.
    pub fn is_set(&self) -> bool {
        self.name.is_some()
            || self.size.is_some()
            || self.bold.is_some()
            || self.italic.is_some()
            || self.color.is_some()
    }

    /// Write a run-properties element (`a:rPr` or `a:endParaRPr`).
    pub(crate) fn write_run_properties(&self, xml: &mut String, element: &str) -> Result<()> {
        write!(xml, r#"<a:{} lang="en-US""#, element)?;

        if let Some(size) = self.size {
            write!(xml, r#" sz="{}""#, font_size_to_centipoints(size))?;
        }
        if let Some(bold) = self.bold {
            write!(xml, r#" b="{}""#, u8::from(bold))?;
        }
        if let Some(italic) = self.italic {
            write!(xml, r#" i="{}""#, u8::from(italic))?;
        }
        xml.push_str(r#" dirty="0""#);

        if self.color.is_none() && self.name.is_none() {
            xml.push_str("/>");
            return Ok(());
        }

        xml.push('>');
        if let Some(color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref name) = self.name {
            write!(
                xml,
                r#"<a:latin typeface="{}"/>"#,
                crate::common::xml::escape_xml(name)
            )?;
        }
        write!(xml, "</a:{}>", element)?;

        Ok(())
    }
}

/// Fill of a shape's interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    /// Use the shape style (theme) fill
    #[default]
    Inherit,
    Solid(RGBColor),
    /// Explicitly transparent (`<a:noFill/>`)
    NoFill,
}

impl Fill {
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            Fill::Inherit => {},
            Fill::Solid(color) => {
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    color.to_hex()
                )?;
            },
            Fill::NoFill => xml.push_str("<a:noFill/>"),
        }
        Ok(())
    }
}

/// Preset dash patterns for outlines.
///
/// Numbering follows the stock line dash style ids (1 = solid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    SquareDot,
    RoundDot,
    Dash,
    DashDot,
    DashDotDot,
    LongDash,
    LongDashDot,
}

impl LineDash {
    /// Look up a dash style by its numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            1 => Self::Solid,
            2 => Self::SquareDot,
            3 => Self::RoundDot,
            4 => Self::Dash,
            5 => Self::DashDot,
            6 => Self::DashDotDot,
            7 => Self::LongDash,
            8 => Self::LongDashDot,
            _ => return None,
        })
    }

    /// Value of `<a:prstDash val="..."/>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::SquareDot => "sysDash",
            Self::RoundDot => "sysDot",
            Self::Dash => "dash",
            Self::DashDot => "dashDot",
            Self::DashDotDot => "lgDashDotDot",
            Self::LongDash => "lgDash",
            Self::LongDashDot => "lgDashDot",
        }
    }
}

/// Outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Outline fill; `Fill::NoFill` hides the outline
    pub fill: Fill,
    /// Width in EMU
    pub width: Option<i64>,
    pub dash: Option<LineDash>,
}

impl Line {
    /// A visible solid outline of the given color and width (EMU).
    pub fn solid(color: RGBColor, width: i64) -> Self {
        Self {
            fill: Fill::Solid(color),
            width: Some(width),
            dash: None,
        }
    }

    /// An invisible outline.
    pub fn none() -> Self {
        Self {
            fill: Fill::NoFill,
            ..Self::default()
        }
    }

    fn is_inherited(&self) -> bool {
        self.fill == Fill::Inherit && self.width.is_none() && self.dash.is_none()
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        if self.is_inherited() {
            return Ok(());
        }

        xml.push_str("<a:ln");
        if let Some(width) = self.width {
            write!(xml, r#" w="{}""#, width)?;
        }
        xml.push('>');
        self.fill.write_xml(xml)?;
        if let Some(dash) = self.dash {
            write!(xml, r#"<a:prstDash val="{}"/>"#, dash.as_str())?;
        }
        xml.push_str("</a:ln>");

        Ok(())
    }
}

/// Preset geometries available to auto shapes.
///
/// Numbering follows the stock auto shape ids (1 = rectangle, 9 = oval).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoShapeType {
    Rectangle,
    RoundedRectangle,
    Oval,
}

impl AutoShapeType {
    /// Look up an auto shape type by its numeric id.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::Rectangle),
            5 => Some(Self::RoundedRectangle),
            9 => Some(Self::Oval),
            _ => None,
        }
    }

    /// Value of `<a:prstGeom prst="..."/>`.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Oval => "ellipse",
        }
    }

    /// Base of the generated shape name (`"Oval 3"`).
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Oval => "Oval",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_xml() {
        let font = Font {
            size: Some(14.0),
            bold: Some(true),
            color: Some(RGBColor::new(0, 0, 0)),
            ..Font::default()
        };
        let mut xml = String::new();
        font.write_run_properties(&mut xml, "rPr").unwrap();
        assert_eq!(
            xml,
            r#"<a:rPr lang="en-US" sz="1400" b="1" dirty="0"><a:solidFill><a:srgbClr val="000000"/></a:solidFill></a:rPr>"#
        );
    }

    #[test]
    fn test_empty_font_xml() {
        let mut xml = String::new();
        Font::default()
            .write_run_properties(&mut xml, "endParaRPr")
            .unwrap();
        assert_eq!(xml, r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
    }

    #[test]
    fn test_line_xml() {
        let mut xml = String::new();
        Line::none().write_xml(&mut xml).unwrap();
        assert_eq!(xml, "<a:ln><a:noFill/></a:ln>");

        let mut xml = String::new();
        let mut line = Line::solid(RGBColor::new(60, 60, 60), 25_400);
        line.dash = LineDash::from_id(2);
        line.write_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="3C3C3C"/></a:solidFill><a:prstDash val="sysDash"/></a:ln>"#
        );

        let mut xml = String::new();
        Line::default().write_xml(&mut xml).unwrap();
        assert!(xml.is_empty());
    }

    #[test]
    fn test_auto_shape_ids() {
        assert_eq!(AutoShapeType::from_id(1), Some(AutoShapeType::Rectangle));
        assert_eq!(AutoShapeType::from_id(9).map(|t| t.preset()), Some("ellipse"));
        assert_eq!(AutoShapeType::from_id(42), None);
        assert_eq!(LineDash::from_id(0), None);
    }
}
