//! The stock slide layouts and their placeholders.
//!
//! Layout numbering matches the default template: index 0 is the title slide,
//! 1 title-and-content, 6 blank, and so on up to 10.

use super::shape::{PlaceholderType, Rect, Shape};
use crate::common::error::{DeckError, Result};

/// A placeholder defined by a layout and cloned onto every slide using it.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderSpec {
    pub ph_type: PlaceholderType,
    pub idx: u32,
    pub name: &'static str,
    pub vertical: bool,
    pub rect: Rect,
    /// Prompt text shown in the layout editor
    pub prompt: &'static str,
}

const fn spec(
    ph_type: PlaceholderType,
    idx: u32,
    name: &'static str,
    rect: Rect,
    prompt: &'static str,
) -> PlaceholderSpec {
    PlaceholderSpec {
        ph_type,
        idx,
        name,
        vertical: false,
        rect,
        prompt,
    }
}

const fn vertical(spec: PlaceholderSpec) -> PlaceholderSpec {
    PlaceholderSpec {
        vertical: true,
        ..spec
    }
}

const TITLE_PROMPT: &str = "Click to edit Master title style";
const TEXT_PROMPT: &str = "Click to edit Master text styles";

/// Master title area.
pub(crate) const MASTER_TITLE_RECT: Rect = Rect::new(457_200, 274_638, 8_229_600, 1_143_000);
/// Master body area.
pub(crate) const MASTER_BODY_RECT: Rect = Rect::new(457_200, 1_600_200, 8_229_600, 4_525_963);

const TITLE: PlaceholderSpec = spec(
    PlaceholderType::Title,
    0,
    "Title 1",
    MASTER_TITLE_RECT,
    TITLE_PROMPT,
);

const TITLE_SLIDE: &[PlaceholderSpec] = &[
    spec(
        PlaceholderType::CenterTitle,
        0,
        "Title 1",
        Rect::new(685_800, 2_130_425, 7_772_400, 1_470_025),
        TITLE_PROMPT,
    ),
    spec(
        PlaceholderType::Subtitle,
        1,
        "Subtitle 2",
        Rect::new(1_371_600, 3_886_200, 6_400_800, 1_752_600),
        "Click to edit Master subtitle style",
    ),
];

const TITLE_AND_CONTENT: &[PlaceholderSpec] = &[
    TITLE,
    spec(
        PlaceholderType::Object,
        1,
        "Content Placeholder 2",
        MASTER_BODY_RECT,
        TEXT_PROMPT,
    ),
];

const SECTION_HEADER: &[PlaceholderSpec] = &[
    spec(
        PlaceholderType::Title,
        0,
        "Title 1",
        Rect::new(722_313, 4_406_900, 7_772_400, 1_362_075),
        TITLE_PROMPT,
    ),
    spec(
        PlaceholderType::Body,
        1,
        "Text Placeholder 2",
        Rect::new(722_313, 2_906_713, 7_772_400, 1_500_187),
        TEXT_PROMPT,
    ),
];

const TWO_CONTENT: &[PlaceholderSpec] = &[
    TITLE,
    spec(
        PlaceholderType::Object,
        1,
        "Content Placeholder 2",
        Rect::new(457_200, 1_600_200, 4_038_600, 4_525_963),
        TEXT_PROMPT,
    ),
    spec(
        PlaceholderType::Object,
        2,
        "Content Placeholder 3",
        Rect::new(4_648_200, 1_600_200, 4_038_600, 4_525_963),
        TEXT_PROMPT,
    ),
];

const COMPARISON: &[PlaceholderSpec] = &[
    TITLE,
    spec(
        PlaceholderType::Body,
        1,
        "Text Placeholder 2",
        Rect::new(457_200, 1_535_113, 4_040_188, 639_762),
        TEXT_PROMPT,
    ),
    spec(
        PlaceholderType::Object,
        2,
        "Content Placeholder 3",
        Rect::new(457_200, 2_174_875, 4_040_188, 3_951_288),
        TEXT_PROMPT,
    ),
    spec(
        PlaceholderType::Body,
        3,
        "Text Placeholder 4",
        Rect::new(4_645_025, 1_535_113, 4_041_775, 639_762),
        TEXT_PROMPT,
    ),
    spec(
        PlaceholderType::Object,
        4,
        "Content Placeholder 5",
        Rect::new(4_645_025, 2_174_875, 4_041_775, 3_951_288),
        TEXT_PROMPT,
    ),
];

const TITLE_ONLY: &[PlaceholderSpec] = &[TITLE];

const CONTENT_WITH_CAPTION: &[PlaceholderSpec] = &[
    spec(
        PlaceholderType::Title,
        0,
        "Title 1",
        Rect::new(457_200, 273_050, 3_008_313, 1_162_050),
        TITLE_PROMPT,
    ),
    spec(
        PlaceholderType::Object,
        1,
        "Content Placeholder 2",
        Rect::new(3_575_050, 273_050, 5_111_750, 5_853_113),
        TEXT_PROMPT,
    ),
    spec(
        PlaceholderType::Body,
        2,
        "Text Placeholder 3",
        Rect::new(457_200, 1_435_100, 3_008_313, 4_691_063),
        TEXT_PROMPT,
    ),
];

const PICTURE_WITH_CAPTION: &[PlaceholderSpec] = &[
    spec(
        PlaceholderType::Title,
        0,
        "Title 1",
        Rect::new(1_792_288, 4_800_600, 5_486_400, 566_738),
        TITLE_PROMPT,
    ),
    spec(
        PlaceholderType::Picture,
        1,
        "Picture Placeholder 2",
        Rect::new(1_792_288, 612_775, 5_486_400, 4_114_800),
        "Click icon to add picture",
    ),
    spec(
        PlaceholderType::Body,
        2,
        "Text Placeholder 3",
        Rect::new(1_792_288, 5_367_338, 5_486_400, 804_862),
        TEXT_PROMPT,
    ),
];

const TITLE_AND_VERTICAL_TEXT: &[PlaceholderSpec] = &[
    TITLE,
    vertical(spec(
        PlaceholderType::Body,
        1,
        "Vertical Text Placeholder 2",
        MASTER_BODY_RECT,
        TEXT_PROMPT,
    )),
];

const VERTICAL_TITLE_AND_TEXT: &[PlaceholderSpec] = &[
    vertical(spec(
        PlaceholderType::Title,
        0,
        "Vertical Title 1",
        Rect::new(6_629_400, 274_638, 2_057_400, 5_851_525),
        TITLE_PROMPT,
    )),
    vertical(spec(
        PlaceholderType::Body,
        1,
        "Vertical Text Placeholder 2",
        Rect::new(457_200, 274_638, 6_019_800, 5_851_525),
        TEXT_PROMPT,
    )),
];

/// The eleven layouts of the default template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    TitleSlide,
    TitleAndContent,
    SectionHeader,
    TwoContent,
    Comparison,
    TitleOnly,
    Blank,
    ContentWithCaption,
    PictureWithCaption,
    TitleAndVerticalText,
    VerticalTitleAndText,
}

impl SlideLayout {
    /// All layouts in template order.
    pub const ALL: [SlideLayout; 11] = [
        Self::TitleSlide,
        Self::TitleAndContent,
        Self::SectionHeader,
        Self::TwoContent,
        Self::Comparison,
        Self::TitleOnly,
        Self::Blank,
        Self::ContentWithCaption,
        Self::PictureWithCaption,
        Self::TitleAndVerticalText,
        Self::VerticalTitleAndText,
    ];

    /// Look up a layout by its template index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DeckError::InvalidLayout(index))
    }

    /// Zero-based template index.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display name of the layout.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TitleSlide => "Title Slide",
            Self::TitleAndContent => "Title and Content",
            Self::SectionHeader => "Section Header",
            Self::TwoContent => "Two Content",
            Self::Comparison => "Comparison",
            Self::TitleOnly => "Title Only",
            Self::Blank => "Blank",
            Self::ContentWithCaption => "Content with Caption",
            Self::PictureWithCaption => "Picture with Caption",
            Self::TitleAndVerticalText => "Title and Vertical Text",
            Self::VerticalTitleAndText => "Vertical Title and Text",
        }
    }

    /// Value of the `type` attribute on `<p:sldLayout>`.
    pub fn layout_type(&self) -> &'static str {
        match self {
            Self::TitleSlide => "title",
            Self::TitleAndContent => "obj",
            Self::SectionHeader => "secHead",
            Self::TwoContent => "twoObj",
            Self::Comparison => "twoTxTwoObj",
            Self::TitleOnly => "titleOnly",
            Self::Blank => "blank",
            Self::ContentWithCaption => "objTx",
            Self::PictureWithCaption => "picTx",
            Self::TitleAndVerticalText => "vertTx",
            Self::VerticalTitleAndText => "vertTitleAndTx",
        }
    }

    /// Placeholders cloned onto a slide that uses this layout.
    pub fn placeholders(&self) -> &'static [PlaceholderSpec] {
        match self {
            Self::TitleSlide => TITLE_SLIDE,
            Self::TitleAndContent => TITLE_AND_CONTENT,
            Self::SectionHeader => SECTION_HEADER,
            Self::TwoContent => TWO_CONTENT,
            Self::Comparison => COMPARISON,
            Self::TitleOnly => TITLE_ONLY,
            Self::Blank => &[],
            Self::ContentWithCaption => CONTENT_WITH_CAPTION,
            Self::PictureWithCaption => PICTURE_WITH_CAPTION,
            Self::TitleAndVerticalText => TITLE_AND_VERTICAL_TEXT,
            Self::VerticalTitleAndText => VERTICAL_TITLE_AND_TEXT,
        }
    }

    /// Part name inside the package, e.g. `ppt/slideLayouts/slideLayout7.xml`.
    pub(crate) fn part_name(&self) -> String {
        format!("ppt/slideLayouts/slideLayout{}.xml", self.index() + 1)
    }

    /// Generate the slideLayout part.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#);
        xml.push_str(&format!(
            r#"type="{}" preserve="1">"#,
            self.layout_type()
        ));

        xml.push_str(&format!(r#"<p:cSld name="{}">"#, self.name()));
        xml.push_str("<p:spTree>");
        super::slide::write_group_properties(&mut xml);

        for (offset, spec) in self.placeholders().iter().enumerate() {
            let mut shape = Shape::new_placeholder(
                offset as u32 + 2,
                spec.name,
                spec.ph_type,
                spec.idx,
                spec.vertical,
                spec.rect,
                false,
            );
            shape.set_text(spec.prompt);
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sldLayout>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_indices() {
        assert_eq!(SlideLayout::from_index(0).unwrap(), SlideLayout::TitleSlide);
        assert_eq!(SlideLayout::from_index(6).unwrap(), SlideLayout::Blank);
        assert_eq!(SlideLayout::Blank.index(), 6);
        assert!(matches!(
            SlideLayout::from_index(11),
            Err(DeckError::InvalidLayout(11))
        ));
        for (index, layout) in SlideLayout::ALL.iter().enumerate() {
            assert_eq!(layout.index(), index);
        }
    }

    #[test]
    fn test_placeholder_sets() {
        assert!(SlideLayout::Blank.placeholders().is_empty());
        let content = SlideLayout::TitleAndContent.placeholders();
        assert_eq!(content.len(), 2);
        assert!(content[0].ph_type.is_title());
        assert_eq!(content[1].idx, 1);
        assert_eq!(SlideLayout::Comparison.placeholders().len(), 5);
    }

    #[test]
    fn test_layouts_fit_default_canvas() {
        for layout in SlideLayout::ALL {
            for spec in layout.placeholders() {
                assert!(
                    spec.rect.fits_within(9_144_000, 6_858_000),
                    "{} / {}",
                    layout.name(),
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_layout_xml() {
        let xml = SlideLayout::TitleSlide.to_xml().unwrap();
        assert!(xml.contains(r#"type="title" preserve="1""#));
        assert!(xml.contains(r#"<p:cSld name="Title Slide">"#));
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<a:off x="685800" y="2130425"/>"#));
        assert!(xml.ends_with("</p:sldLayout>"));
        assert_eq!(
            SlideLayout::Blank.part_name(),
            "ppt/slideLayouts/slideLayout7.xml"
        );
    }
}
