//! Package writer for PPTX files.
//!
//! Serializes a [`Presentation`] into an OPC zip package: the
//! `[Content_Types].xml` part, relationship parts, and every XML part the
//! presentation needs.

use super::constants::{content_type as ct, namespace, relationship_type as rt};
use super::layout::SlideLayout;
use super::presentation::Presentation;
use super::template;
use crate::common::error::Result;
use crate::common::xml::escape_xml;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

const MASTER_PART: &str = "ppt/slideMasters/slideMaster1.xml";
const THEME_PART: &str = "ppt/theme/theme1.xml";

/// Relationships of one source part.
#[derive(Debug, Default)]
pub(crate) struct Relationships {
    rels: Vec<(String, &'static str, String)>,
}

impl Relationships {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its `rId`.
    pub(crate) fn add(&mut self, reltype: &'static str, target: impl Into<String>) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push((r_id.clone(), reltype, target.into()));
        r_id
    }

    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS)?;

        for (r_id, reltype, target) in &self.rels {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                r_id,
                reltype,
                escape_xml(target)
            )?;
        }

        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

/// Builder for `[Content_Types].xml`.
///
/// Defaults map extensions, overrides map individual part names.
#[derive(Debug)]
struct ContentTypes {
    defaults: BTreeMap<&'static str, &'static str>,
    overrides: BTreeMap<String, &'static str>,
}

impl ContentTypes {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels", ct::OPC_RELATIONSHIPS);
        defaults.insert("xml", ct::XML);

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn add_override(&mut self, part_name: &str, content_type: &'static str) {
        self.overrides.insert(format!("/{}", part_name), content_type);
    }

    fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES)?;

        for (ext, content_type) in &self.defaults {
            write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, content_type
            )?;
        }
        for (part_name, content_type) in &self.overrides {
            write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part_name),
                content_type
            )?;
        }

        xml.push_str("</Types>");
        Ok(xml)
    }
}

/// Collects parts and writes them into a deflated zip archive.
///
/// `[Content_Types].xml` is always the first entry of the archive.
pub struct PackageWriter {
    content_types: ContentTypes,
    parts: Vec<(String, Vec<u8>)>,
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageWriter {
    pub fn new() -> Self {
        Self {
            content_types: ContentTypes::new(),
            parts: Vec::new(),
        }
    }

    /// Add a part with an override content type.
    pub fn add_part(
        &mut self,
        part_name: &str,
        content_type: &'static str,
        content: impl Into<Vec<u8>>,
    ) {
        self.content_types.add_override(part_name, content_type);
        self.parts.push((part_name.to_string(), content.into()));
    }

    /// Add the relationships part belonging to `source_part` ("" for the package).
    pub(crate) fn add_rels(&mut self, source_part: &str, rels: &Relationships) -> Result<()> {
        let rels_name = rels_part_name(source_part);
        self.parts.push((rels_name, rels.to_xml()?.into_bytes()));
        Ok(())
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Write the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(self.content_types.to_xml()?.as_bytes())?;

        for (part_name, content) in &self.parts {
            zip.start_file(part_name.as_str(), options)?;
            zip.write_all(content)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// `ppt/slides/slide1.xml` -> `ppt/slides/_rels/slide1.xml.rels`
fn rels_part_name(source_part: &str) -> String {
    match source_part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None if source_part.is_empty() => "_rels/.rels".to_string(),
        None => format!("_rels/{}.rels", source_part),
    }
}

/// Serialize a presentation into PPTX bytes.
pub fn write_presentation(pres: &Presentation) -> Result<Vec<u8>> {
    let mut writer = PackageWriter::new();

    let mut package_rels = Relationships::new();
    package_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
    package_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
    package_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");
    writer.add_rels("", &package_rels)?;

    writer.add_part(
        "docProps/core.xml",
        ct::OPC_CORE_PROPERTIES,
        core_properties_xml(pres.title())?,
    );
    writer.add_part(
        "docProps/app.xml",
        ct::OFC_EXTENDED_PROPERTIES,
        app_properties_xml(pres.slide_count())?,
    );

    // Presentation relationships: master and property parts first, then slides
    let mut pres_rels = Relationships::new();
    pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    pres_rels.add(rt::PRES_PROPS, "presProps.xml");
    pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
    pres_rels.add(rt::THEME, "theme/theme1.xml");
    pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

    let slide_rel_ids: Vec<String> = (1..=pres.slide_count())
        .map(|n| pres_rels.add(rt::SLIDE, format!("slides/slide{}.xml", n)))
        .collect();

    writer.add_part(
        "ppt/presentation.xml",
        ct::PML_PRESENTATION_MAIN,
        pres.to_xml(&slide_rel_ids)?,
    );
    writer.add_rels("ppt/presentation.xml", &pres_rels)?;

    writer.add_part("ppt/presProps.xml", ct::PML_PRES_PROPS, template::PRES_PROPS_XML);
    writer.add_part("ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::VIEW_PROPS_XML);
    writer.add_part("ppt/tableStyles.xml", ct::PML_TABLE_STYLES, template::TABLE_STYLES_XML);
    writer.add_part(THEME_PART, ct::OFC_THEME, template::THEME_XML);

    writer.add_part(MASTER_PART, ct::PML_SLIDE_MASTER, template::slide_master_xml()?);
    let mut master_rels = Relationships::new();
    for layout in SlideLayout::ALL {
        master_rels.add(rt::SLIDE_LAYOUT, relative_to_ppt(&layout.part_name()));
    }
    master_rels.add(rt::THEME, "../theme/theme1.xml");
    writer.add_rels(MASTER_PART, &master_rels)?;

    for layout in SlideLayout::ALL {
        let part_name = layout.part_name();
        writer.add_part(&part_name, ct::PML_SLIDE_LAYOUT, layout.to_xml()?);

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        writer.add_rels(&part_name, &layout_rels)?;
    }

    for (index, slide) in pres.slides().iter().enumerate() {
        let part_name = format!("ppt/slides/slide{}.xml", index + 1);
        writer.add_part(&part_name, ct::PML_SLIDE, slide.to_xml()?);

        let mut slide_rels = Relationships::new();
        slide_rels.add(rt::SLIDE_LAYOUT, relative_to_ppt(&slide.layout().part_name()));
        writer.add_rels(&part_name, &slide_rels)?;
    }

    log::debug!(
        "packaged {} slides into {} parts",
        pres.slide_count(),
        writer.part_count() + 1
    );

    writer.finish()
}

/// `ppt/slideLayouts/slideLayout1.xml` -> `../slideLayouts/slideLayout1.xml`
fn relative_to_ppt(part_name: &str) -> String {
    format!("../{}", part_name.trim_start_matches("ppt/"))
}

fn core_properties_xml(title: &str) -> Result<String> {
    let mut xml = String::with_capacity(768);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#);
    xml.push_str(r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#);
    xml.push_str(r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    write!(xml, "<dc:creator>{}</dc:creator>", env!("CARGO_PKG_NAME"))?;
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");

    Ok(xml)
}

fn app_properties_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#);
    xml.push_str(r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    write!(
        xml,
        "<Application>{} {}</Application>",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("</Properties>");

    Ok(xml)
}
