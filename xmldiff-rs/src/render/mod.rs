//! Diff renderers.
//!
//! A [`Renderer`] turns a diff tree into text. Three formats are provided:
//! a plain-text change log, an HTML report and an XML-Document-Transform
//! document that rewrites the source into the result.

mod html;
mod text;
mod transform;

pub use html::{HtmlRenderer, HTML_STYLES};
pub use text::TextRenderer;
pub use transform::{generate_transform, Locator, Transform, TransformRenderer};

use crate::diff::DiffNode;
use crate::error::Result;

/// Trait for diff output formats.
pub trait Renderer {
    /// Renders `diff` into a string.
    fn render(&self, diff: &DiffNode) -> Result<String>;
}
