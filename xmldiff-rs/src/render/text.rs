//! Plain-text change log.
//!
//! One line per changed item, indented with `...` per depth level and
//! prefixed with `+` (added), `-` (removed) or `=` (matched element).

use std::fmt::{self, Write};

use super::Renderer;
use crate::constants::{MAX_ATTRIBUTES_PREVIEW, TEXT_INDENT};
use crate::diff::{DiffAction, DiffAttribute, DiffContent, DiffNode, DiffValue, DiffVisitor};
use crate::error::Result;

/// Renders a diff tree as a plain-text change log.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    preview_attributes: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        TextRenderer {
            preview_attributes: MAX_ATTRIBUTES_PREVIEW,
        }
    }
}

impl TextRenderer {
    /// Creates a renderer with the default attribute preview.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many raw attributes are shown next to each element.
    pub fn with_preview_attributes(mut self, count: usize) -> Self {
        self.preview_attributes = count;
        self
    }

    /// Writes the change log of `node` to `out`.
    pub fn write_node<W: Write>(&self, out: &mut W, node: &DiffNode) -> fmt::Result {
        let mut visitor = TextVisitor::new(out, self.preview_attributes);
        node.accept_default(&mut visitor);
        visitor.status
    }

    /// Writes a single diff item (and its subtree) to `out`.
    pub fn write_content<W: Write>(&self, out: &mut W, content: &DiffContent) -> fmt::Result {
        let mut visitor = TextVisitor::new(out, self.preview_attributes);
        content.accept(&mut visitor, 0);
        visitor.status
    }
}

impl Renderer for TextRenderer {
    fn render(&self, diff: &DiffNode) -> Result<String> {
        let mut out = String::new();
        self.write_node(&mut out, diff)?;
        Ok(out)
    }
}

struct TextVisitor<'w, W> {
    out: &'w mut W,
    preview_attributes: usize,
    /// First write error; later writes are skipped once set.
    status: fmt::Result,
}

impl<'w, W: Write> TextVisitor<'w, W> {
    fn new(out: &'w mut W, preview_attributes: usize) -> Self {
        TextVisitor {
            out,
            preview_attributes,
            status: Ok(()),
        }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.status.is_ok() {
            self.status = self.out.write_fmt(args);
        }
    }
}

impl<W: Write> DiffVisitor for TextVisitor<'_, W> {
    type Param = usize;

    fn visit_attribute(&mut self, attr: &DiffAttribute, level: usize) {
        self.emit(format_args!(
            "{}{} Attribute: \"{}\" with value: \"{}\"\n",
            TEXT_INDENT.repeat(level),
            DiffAction::symbol(Some(attr.action())),
            attr.raw().name(),
            attr.raw().value()
        ));
    }

    fn visit_value(&mut self, value: &DiffValue, level: usize) {
        self.emit(format_args!(
            "{}{} Value: \"{}\"\n",
            TEXT_INDENT.repeat(level),
            DiffAction::symbol(Some(value.action())),
            value.raw()
        ));
    }

    fn visit_node(&mut self, node: &DiffNode, level: usize) {
        if !node.is_changed() {
            return;
        }

        let raw = node.raw();
        self.emit(format_args!(
            "{}{} Element \"{}\"",
            TEXT_INDENT.repeat(level),
            DiffAction::symbol(node.action()),
            raw.name()
        ));
        // Preview a few attributes so same-named siblings can be told apart
        for attr in raw.attributes().iter().take(self.preview_attributes) {
            self.emit(format_args!(" \"{}\"=\"{}\"", attr.name(), attr.value()));
        }
        if raw.attributes().len() > self.preview_attributes {
            self.emit(format_args!("..."));
        }
        self.emit(format_args!("\n"));

        for item in node.content() {
            item.accept(self, level + 1);
        }
    }
}
