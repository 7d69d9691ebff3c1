//! HTML change report.

use std::fmt::{self, Write};

use quick_xml::escape::escape;

use super::Renderer;
use crate::constants::MAX_ATTRIBUTES_PREVIEW;
use crate::diff::{DiffAction, DiffAttribute, DiffContent, DiffNode, DiffValue, DiffVisitor};
use crate::error::Result;

/// Style block emitted at the top of every report.
pub const HTML_STYLES: &str = concat!(
    "<style type=\"text/css\">",
    "span { margin:5px;}",
    ".removed { background-color : #ffe6e6; }",
    ".added { background-color : #e6ffe6; }",
    "</style>"
);

const INDENT: &str = "<span class=\"indent\">&rarr;</span>";

/// Renders a diff tree as an HTML fragment, one `<div>` per changed element.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    preview_attributes: usize,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        HtmlRenderer {
            preview_attributes: MAX_ATTRIBUTES_PREVIEW,
        }
    }
}

impl HtmlRenderer {
    /// Creates a renderer with the default attribute preview.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many raw attributes are previewed for added or removed
    /// elements.
    pub fn with_preview_attributes(mut self, count: usize) -> Self {
        self.preview_attributes = count;
        self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, diff: &DiffNode) -> Result<String> {
        let mut visitor = HtmlVisitor {
            out: String::from(HTML_STYLES),
            preview_attributes: self.preview_attributes,
            status: Ok(()),
        };
        diff.accept_default(&mut visitor);
        visitor.status?;
        Ok(visitor.out)
    }
}

struct HtmlVisitor {
    out: String,
    preview_attributes: usize,
    status: fmt::Result,
}

impl HtmlVisitor {
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.status.is_ok() {
            self.status = self.out.write_fmt(args);
        }
    }

    fn preview(&mut self, node: &DiffNode) {
        let raw = node.raw();
        for attr in raw.attributes().iter().take(self.preview_attributes) {
            self.emit(format_args!(
                "<span>\"{}\"=\"{}\"</span>",
                escape(attr.name()),
                escape(attr.value())
            ));
        }
        if !raw.has_attributes() || raw.attributes().len() > self.preview_attributes {
            self.emit(format_args!("<span>...</span>"));
        }
    }
}

fn class(action: Option<DiffAction>) -> &'static str {
    match action {
        Some(DiffAction::Added) => " class=\"added\"",
        Some(DiffAction::Removed) => " class=\"removed\"",
        None => "",
    }
}

impl DiffVisitor for HtmlVisitor {
    type Param = usize;

    fn visit_attribute(&mut self, attr: &DiffAttribute, _level: usize) {
        self.emit(format_args!(
            "<span{}>\"{}\"=\"{}\"</span>",
            class(Some(attr.action())),
            escape(attr.raw().name()),
            escape(attr.raw().value())
        ));
    }

    fn visit_value(&mut self, value: &DiffValue, _level: usize) {
        self.emit(format_args!(
            "<span{}>{}</span>",
            class(Some(value.action())),
            escape(value.raw())
        ));
    }

    fn visit_node(&mut self, node: &DiffNode, level: usize) {
        if !node.is_changed() {
            return;
        }

        self.emit(format_args!(
            "<div>{}<span{}>&lt;{}</span>",
            INDENT.repeat(level),
            class(node.action()),
            escape(node.raw().name())
        ));

        if node.action().is_some() {
            self.preview(node);
            self.emit(format_args!("</div>"));
            return;
        }

        // Attribute and value diffs sit inline in the element's own div;
        // child elements follow as separate divs.
        let (nodes, inline): (Vec<_>, Vec<_>) = node
            .content()
            .iter()
            .partition(|item| matches!(item, DiffContent::Node(_)));
        for item in inline {
            item.accept(self, level + 1);
        }
        self.emit(format_args!("</div>"));
        for item in nodes {
            item.accept(self, level + 1);
        }
    }
}
