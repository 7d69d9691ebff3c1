//! xmldiff - Structural XML diff with transform generation
//!
//! This library compares two XML documents, a *source* and a *result*, and
//! produces a structural diff: every attribute, text value and child element
//! is classified as unchanged, added or removed.
//!
//! # Overview
//!
//! Elements are correlated by tag name and their index among same-named
//! siblings. An element that changes position among its same-named siblings
//! is matched by position, never tracked as a move.
//!
//! The diff can be rendered as:
//!
//! - a plain-text change log ([`TextRenderer`])
//! - an HTML report ([`HtmlRenderer`])
//! - an XML-Document-Transform document ([`TransformRenderer`]) which, applied
//!   to the source, reproduces the result
//!
//! # Example
//!
//! ```
//! use xmldiff::{compare_documents, parse_str, Renderer, TextRenderer};
//!
//! let source = parse_str(r#"<config><add key="a" value="1"/></config>"#).unwrap();
//! let result = parse_str(r#"<config><add key="a" value="2"/></config>"#).unwrap();
//!
//! let diff = compare_documents(&source, &result).unwrap();
//! assert!(diff.is_changed());
//!
//! let log = TextRenderer::new().render(&diff).unwrap();
//! assert!(log.contains("- Attribute: \"value\" with value: \"1\""));
//! ```

pub mod constants;
pub mod diff;
pub mod error;
pub mod matching;
pub mod node;
pub mod render;
pub mod xml;

// Re-export commonly used types
pub use constants::*;
pub use error::{Error, Result};
pub use node::{XmlAttribute, XmlDocument, XmlElement, XmlNode};
pub use xml::{parse_file, parse_str, XmlParser, XmlParserOptions, XmlPrinter, XmlPrinterOptions};

// Re-export diff types
pub use diff::{
    DiffAction, DiffAttribute, DiffContent, DiffNode, DiffNodeKind, DiffValue, DiffVisitor,
};
pub use matching::{compare, compare_documents, Comparer, XmlComparer};

// Re-export renderers
pub use render::{
    generate_transform, HtmlRenderer, Locator, Renderer, TextRenderer, Transform,
    TransformRenderer,
};
