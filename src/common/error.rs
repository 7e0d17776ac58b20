//! Error types for building, writing and inspecting presentations.
use thiserror::Error;

/// Main error type for pitchdeck operations.
#[derive(Error, Debug)]
pub enum DeckError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Color string that is not six hex digits
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Layout index outside the stock layout set
    #[error("Invalid slide layout index: {0}")]
    InvalidLayout(usize),

    /// Part missing from a package being inspected
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Package structure that cannot be interpreted
    #[error("Invalid package: {0}")]
    InvalidPackage(String),
}

impl From<quick_xml::Error> for DeckError {
    fn from(err: quick_xml::Error) -> Self {
        DeckError::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for DeckError {
    fn from(err: std::fmt::Error) -> Self {
        DeckError::Xml(err.to_string())
    }
}

/// Result type for pitchdeck operations.
pub type Result<T> = std::result::Result<T, DeckError>;
