//! PowerPoint (.pptx) presentation writer.
//!
//! Builds presentations from the stock 4:3 template (one slide master with
//! the eleven standard layouts) and serializes them as OOXML packages.
//!
//! # Example
//!
//! ```no_run
//! use pitchdeck::common::{RGBColor, inches};
//! use pitchdeck::pptx::{Presentation, SlideLayout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide(SlideLayout::Blank);
//! slide.set_background(RGBColor::BLACK);
//! slide
//!     .add_text_box(inches(0.5), inches(0.5), inches(9.0), inches(0.8))
//!     .text_frame_mut()
//!     .first_paragraph_mut()
//!     .set_text("Hello")
//!     .font_size(32.0)
//!     .color(RGBColor::WHITE);
//! pres.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod format;
pub mod layout;
pub mod package;
pub mod presentation;
pub mod shape;
pub mod slide;
mod template;
pub mod text;

pub use format::{Alignment, Anchor, AutoShapeType, Fill, Font, Line, LineDash};
pub use layout::{PlaceholderSpec, SlideLayout};
pub use presentation::Presentation;
pub use shape::{PlaceholderType, Rect, Shape, ShapeKind};
pub use slide::Slide;
pub use text::{Paragraph, TextFrame};
