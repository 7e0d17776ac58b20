//! Read a written PPTX package back into a structural summary.
//!
//! The summary is deliberately shallow: slide order, slide size, and per
//! slide the shapes with their names, placeholder types and plain text.
//! It is what the deck tests assert against.

use crate::common::error::{DeckError, Result};
use crate::common::xml::unescape_xml;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS_PART: &str = "ppt/_rels/presentation.xml.rels";
/// Largest XML part the inspector will read.
const MAX_PART_SIZE: u64 = 16 << 20;

/// A shape as read back from a slide part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSummary {
    pub id: u32,
    pub name: String,
    /// `type` of the `<p:ph>` element (`obj` when omitted), `None` for non-placeholders
    pub placeholder: Option<String>,
    /// Paragraphs joined by `\n`; line breaks inside a paragraph also read as `\n`
    pub text: String,
}

impl ShapeSummary {
    pub fn is_title_placeholder(&self) -> bool {
        matches!(self.placeholder.as_deref(), Some("title" | "ctrTitle"))
    }
}

/// One slide of a [`DeckSummary`].
#[derive(Debug, Clone, Default)]
pub struct SlideSummary {
    /// Part name inside the package, e.g. `ppt/slides/slide3.xml`
    pub part_name: String,
    /// Solid background color as uppercase hex, if the slide sets one
    pub background: Option<String>,
    pub shapes: Vec<ShapeSummary>,
}

impl SlideSummary {
    /// Text of the first title placeholder, or of the first shape with text.
    pub fn title(&self) -> Option<&str> {
        self.shapes
            .iter()
            .find(|s| s.is_title_placeholder())
            .or_else(|| self.shapes.iter().find(|s| !s.text.trim().is_empty()))
            .map(|s| s.text.trim_start_matches('\n'))
    }

    /// Texts of all shapes, in document order.
    pub fn texts(&self) -> Vec<&str> {
        self.shapes.iter().map(|s| s.text.as_str()).collect()
    }

    /// Whether any shape's text contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.shapes.iter().any(|s| s.text.contains(needle))
    }
}

/// Structural summary of a presentation package.
#[derive(Debug, Clone)]
pub struct DeckSummary {
    pub slide_width: i64,
    pub slide_height: i64,
    /// Slides in presentation order
    pub slides: Vec<SlideSummary>,
    /// Every entry name in the zip archive
    pub part_names: Vec<String>,
}

impl DeckSummary {
    /// Read and summarize the package at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Summarize an in-memory package.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let part_names: Vec<String> = archive.file_names().map(str::to_string).collect();

        let presentation = read_part(&mut archive, PRESENTATION_PART)?;
        let (slide_rel_ids, slide_width, slide_height) = parse_presentation(&presentation)?;

        let rels = read_part(&mut archive, PRESENTATION_RELS_PART)?;
        let targets = parse_relationship_targets(&rels)?;

        let mut slides = Vec::with_capacity(slide_rel_ids.len());
        for r_id in &slide_rel_ids {
            let target = targets.get(r_id).ok_or_else(|| {
                DeckError::InvalidPackage(format!("unresolved slide relationship {}", r_id))
            })?;
            let part_name = resolve_target("ppt", target);
            let xml = read_part(&mut archive, &part_name)?;
            slides.push(parse_slide(part_name, &xml)?);
        }

        Ok(Self {
            slide_width,
            slide_height,
            slides,
            part_names,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.part_names.iter().any(|n| n == name)
    }

    /// Titles of all slides, `""` for slides without text.
    pub fn titles(&self) -> Vec<&str> {
        self.slides
            .iter()
            .map(|s| s.title().unwrap_or_default())
            .collect()
    }
}

/// Read a part as UTF-8. Parts declaring more than [`MAX_PART_SIZE`] bytes are rejected.
fn read_part<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let file = archive
        .by_name(name)
        .map_err(|_| DeckError::PartNotFound(name.to_string()))?;
    if file.size() > MAX_PART_SIZE {
        return Err(DeckError::InvalidPackage(format!(
            "{} declares {} bytes",
            name,
            file.size()
        )));
    }

    // The declared size comes from the archive, so it only bounds the read
    let mut content = String::new();
    file.take(MAX_PART_SIZE).read_to_string(&mut content)?;
    Ok(content)
}

/// `("ppt", "slides/slide1.xml")` -> `ppt/slides/slide1.xml`, honouring `../`.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            },
            "." | "" => {},
            _ => segments.push(segment),
        }
    }
    segments.join("/")
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| std::str::from_utf8(&attr.value).ok().map(unescape_xml))
}

fn xml_error(err: quick_xml::Error) -> DeckError {
    DeckError::Xml(err.to_string())
}

/// Slide relationship ids in order, plus the slide size.
fn parse_presentation(xml: &str) -> Result<(Vec<String>, i64, i64)> {
    let mut reader = Reader::from_str(xml);
    let mut rel_ids = Vec::new();
    let mut size = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(ref e) | Event::Empty(ref e) => match e.local_name().as_ref() {
                b"sldId" => {
                    let r_id = attribute(e, b"r:id").ok_or_else(|| {
                        DeckError::InvalidPackage("sldId without r:id".to_string())
                    })?;
                    rel_ids.push(r_id);
                },
                b"sldSz" => {
                    let cx = attribute(e, b"cx").and_then(|v| v.parse::<i64>().ok());
                    let cy = attribute(e, b"cy").and_then(|v| v.parse::<i64>().ok());
                    size = cx.zip(cy);
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    let (width, height) =
        size.ok_or_else(|| DeckError::InvalidPackage("missing slide size".to_string()))?;
    Ok((rel_ids, width, height))
}

/// Map of relationship id to target.
fn parse_relationship_targets(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                if let (Some(id), Some(target)) = (attribute(e, b"Id"), attribute(e, b"Target")) {
                    targets.insert(id, target);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(targets)
}

/// Per-shape parse state while walking a slide.
#[derive(Default)]
struct ShapeBuilder {
    id: u32,
    name: String,
    placeholder: Option<String>,
    /// Raw text with entity references kept escaped
    raw_text: String,
    paragraphs: usize,
}

impl ShapeBuilder {
    fn finish(self) -> ShapeSummary {
        ShapeSummary {
            id: self.id,
            name: self.name,
            placeholder: self.placeholder,
            text: unescape_xml(&self.raw_text),
        }
    }
}

fn parse_slide(part_name: String, xml: &str) -> Result<SlideSummary> {
    let mut reader = Reader::from_str(xml);
    let mut slide = SlideSummary {
        part_name,
        ..SlideSummary::default()
    };

    let mut current: Option<ShapeBuilder> = None;
    let mut in_background = false;
    let mut in_text = false;

    loop {
        let event = reader.read_event().map_err(xml_error)?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_start = matches!(event, Event::Start(_));
                match e.local_name().as_ref() {
                    b"bg" if is_start => in_background = true,
                    b"srgbClr" if in_background && slide.background.is_none() => {
                        slide.background = attribute(e, b"val").map(|v| v.to_ascii_uppercase());
                    },
                    b"sp" if is_start => current = Some(ShapeBuilder::default()),
                    b"cNvPr" => {
                        if let Some(shape) = current.as_mut() {
                            shape.id = attribute(e, b"id")
                                .and_then(|v| v.parse().ok())
                                .unwrap_or_default();
                            shape.name = attribute(e, b"name").unwrap_or_default();
                        }
                    },
                    b"ph" => {
                        if let Some(shape) = current.as_mut() {
                            shape.placeholder =
                                Some(attribute(e, b"type").unwrap_or_else(|| "obj".to_string()));
                        }
                    },
                    b"p" => {
                        if let Some(shape) = current.as_mut() {
                            if shape.paragraphs > 0 {
                                shape.raw_text.push('\n');
                            }
                            shape.paragraphs += 1;
                        }
                    },
                    b"br" => {
                        if let Some(shape) = current.as_mut() {
                            shape.raw_text.push('\n');
                        }
                    },
                    b"t" if is_start => in_text = true,
                    _ => {},
                }
            },
            Event::Text(ref e) if in_text => {
                if let Some(shape) = current.as_mut() {
                    let text =
                        std::str::from_utf8(e.as_ref()).map_err(|e| DeckError::Xml(e.to_string()))?;
                    shape.raw_text.push_str(text);
                }
            },
            Event::GeneralRef(ref e) if in_text => {
                if let Some(shape) = current.as_mut() {
                    let name =
                        std::str::from_utf8(e.as_ref()).map_err(|e| DeckError::Xml(e.to_string()))?;
                    shape.raw_text.push('&');
                    shape.raw_text.push_str(name);
                    shape.raw_text.push(';');
                }
            },
            Event::End(ref e) => match e.local_name().as_ref() {
                b"bg" => in_background = false,
                b"t" => in_text = false,
                b"sp" => {
                    if let Some(shape) = current.take() {
                        slide.shapes.push(shape.finish());
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(slide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{RGBColor, inches};
    use crate::pptx::{Presentation, SlideLayout};

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("ppt", "slides/slide1.xml"), "ppt/slides/slide1.xml");
        assert_eq!(
            resolve_target("ppt/slides", "../slideLayouts/slideLayout7.xml"),
            "ppt/slideLayouts/slideLayout7.xml"
        );
        assert_eq!(resolve_target("ppt", "/ppt/theme/theme1.xml"), "ppt/theme/theme1.xml");
    }

    #[test]
    fn test_parse_slide_text_and_background() {
        let xml = concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld>"#,
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="000000"/></a:solidFill></p:bgPr></p:bg>"#,
            r#"<p:spTree><p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr/>"#,
            r#"<p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:txBody>"#,
            r#"<a:p><a:r><a:t>Tom &amp; Jerry</a:t></a:r></a:p><a:p/>"#,
            r#"<a:p><a:r><a:t>a</a:t></a:r><a:br/><a:r><a:t>b</a:t></a:r></a:p>"#,
            r#"</p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#
        );

        let slide = parse_slide("ppt/slides/slide1.xml".to_string(), xml).unwrap();
        assert_eq!(slide.background.as_deref(), Some("000000"));
        assert_eq!(slide.shapes.len(), 1);
        assert_eq!(slide.shapes[0].id, 2);
        assert_eq!(slide.shapes[0].text, "Tom & Jerry\n\na\nb");
        assert_eq!(slide.title(), Some("Tom & Jerry\n\na\nb"));
    }

    #[test]
    fn test_summary_of_written_presentation() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::TitleSlide)
            .set_title("CharacterLock AI");
        let slide = pres.add_slide(SlideLayout::Blank);
        slide.set_background(RGBColor::BLACK);
        slide
            .add_text_box(inches(0.5), inches(0.3), inches(6.0), inches(0.5))
            .text_frame_mut()
            .first_paragraph_mut()
            .set_text("01. THE PROBLEM");

        let summary = DeckSummary::from_bytes(pres.to_bytes().unwrap()).unwrap();
        assert_eq!(summary.slide_count(), 2);
        assert_eq!(summary.slide_width, inches(10.0));
        assert_eq!(summary.titles(), vec!["CharacterLock AI", "01. THE PROBLEM"]);
        assert_eq!(summary.slides[0].background, None);
        assert_eq!(summary.slides[1].background.as_deref(), Some("000000"));
        assert!(summary.has_part("[Content_Types].xml"));
    }

    #[test]
    fn test_missing_part() {
        let mut writer = crate::pptx::package::PackageWriter::new();
        writer.add_part("docProps/app.xml", "application/xml", "<Properties/>");
        let bytes = writer.finish().unwrap();
        assert!(matches!(
            DeckSummary::from_bytes(bytes),
            Err(DeckError::PartNotFound(name)) if name == PRESENTATION_PART
        ));
    }

    /// A stored zip64 entry whose header claims `declared` uncompressed bytes.
    fn zip64_package(name: &str, data: &[u8], declared: u64) -> Vec<u8> {
        let mut zip64_extra = Vec::new();
        zip64_extra.extend_from_slice(&0x0001u16.to_le_bytes());
        zip64_extra.extend_from_slice(&16u16.to_le_bytes());
        zip64_extra.extend_from_slice(&declared.to_le_bytes());
        zip64_extra.extend_from_slice(&(data.len() as u64).to_le_bytes());

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x0403_4b50u32.to_le_bytes());
        bytes.extend_from_slice(&45u16.to_le_bytes()); // version needed
        bytes.extend_from_slice(&[0; 2]); // flags
        bytes.extend_from_slice(&[0; 2]); // stored
        bytes.extend_from_slice(&[0; 4]); // time, date
        bytes.extend_from_slice(&[0; 4]); // crc32
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&(name.len() as u16).to_le_bytes());
        bytes.extend_from_slice(&(zip64_extra.len() as u16).to_le_bytes());
        bytes.extend_from_slice(name.as_bytes());
        bytes.extend_from_slice(&zip64_extra);
        bytes.extend_from_slice(data);

        let central_offset = bytes.len();
        bytes.extend_from_slice(&0x0201_4b50u32.to_le_bytes());
        bytes.extend_from_slice(&45u16.to_le_bytes()); // version made by
        bytes.extend_from_slice(&45u16.to_le_bytes()); // version needed
        bytes.extend_from_slice(&[0; 2]); // flags
        bytes.extend_from_slice(&[0; 2]); // stored
        bytes.extend_from_slice(&[0; 4]); // time, date
        bytes.extend_from_slice(&[0; 4]); // crc32
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&(name.len() as u16).to_le_bytes());
        bytes.extend_from_slice(&(zip64_extra.len() as u16).to_le_bytes());
        bytes.extend_from_slice(&[0; 2]); // comment length
        bytes.extend_from_slice(&[0; 2]); // disk number
        bytes.extend_from_slice(&[0; 2]); // internal attributes
        bytes.extend_from_slice(&[0; 4]); // external attributes
        bytes.extend_from_slice(&0u32.to_le_bytes()); // local header offset
        bytes.extend_from_slice(name.as_bytes());
        bytes.extend_from_slice(&zip64_extra);
        let central_size = bytes.len() - central_offset;

        bytes.extend_from_slice(&0x0605_4b50u32.to_le_bytes());
        bytes.extend_from_slice(&[0; 4]); // disk numbers
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&(central_size as u32).to_le_bytes());
        bytes.extend_from_slice(&(central_offset as u32).to_le_bytes());
        bytes.extend_from_slice(&[0; 2]); // comment length
        bytes
    }

    #[test]
    fn test_oversized_part_is_rejected() {
        let bytes = zip64_package(PRESENTATION_PART, b"<p:presentation/>", 1 << 62);
        assert!(DeckSummary::from_bytes(bytes).is_err());
    }
}
