//! Error types for xmldiff.

use thiserror::Error;

/// Result type alias for xmldiff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while comparing documents or rendering a diff.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input was missing or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The two root elements have different tag names.
    #[error("Root elements are different: <{source_root}> vs <{result_root}>")]
    StructuralMismatch {
        /// Tag name of the source root.
        source_root: String,
        /// Tag name of the result root.
        result_root: String,
    },

    /// The diff cannot be expressed as a transform document.
    #[error("Transform error: {0}")]
    Transform(String),

    /// XML parsing error.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error from quick-xml.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Formatting error while rendering text output.
    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}
