//! XML printer that outputs element trees.
//!
//! Pretty printing indents element-only content by two spaces per level.
//! Elements that hold text are written inline so that their value is
//! reproduced exactly.

use std::io::Write;

use quick_xml::escape::{escape, partial_escape};

use crate::error::Result;
use crate::node::{XmlElement, XmlNode};

/// Options for XML printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlPrinterOptions {
    /// Whether to pretty-print with indentation.
    pub pretty_print: bool,
    /// Whether to emit the `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl Default for XmlPrinterOptions {
    fn default() -> Self {
        XmlPrinterOptions {
            pretty_print: false,
            declaration: true,
        }
    }
}

/// XML printer that outputs element trees.
pub struct XmlPrinter<W: Write> {
    writer: W,
    options: XmlPrinterOptions,
}

impl<W: Write> XmlPrinter<W> {
    /// Creates a new XML printer.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, XmlPrinterOptions::default())
    }

    /// Creates a new XML printer with the given options.
    pub fn with_options(writer: W, options: XmlPrinterOptions) -> Self {
        XmlPrinter { writer, options }
    }

    /// Prints `root` as a complete document.
    pub fn print(&mut self, root: &XmlElement) -> std::io::Result<()> {
        if self.options.declaration {
            write!(self.writer, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;
            if self.options.pretty_print {
                writeln!(self.writer)?;
            }
        }
        self.print_element(root, 0, !self.options.pretty_print)?;
        self.writer.flush()
    }

    fn print_element(&mut self, element: &XmlElement, depth: usize, inline: bool) -> std::io::Result<()> {
        if !inline {
            write!(self.writer, "{}", Self::indent_str(depth))?;
        }

        write!(self.writer, "<{}", element.name())?;
        for attr in element.attributes() {
            write!(self.writer, " {}=\"{}\"", attr.name(), escape(attr.value()))?;
        }

        if element.children().is_empty() {
            write!(self.writer, " />")?;
        } else {
            write!(self.writer, ">")?;
            let has_text = element
                .children()
                .iter()
                .any(|c| matches!(c, XmlNode::Text(_)));
            let children_inline = inline || has_text;
            if !children_inline {
                writeln!(self.writer)?;
            }
            for child in element.children() {
                self.print_node(child, depth + 1, children_inline)?;
            }
            if !children_inline {
                write!(self.writer, "{}", Self::indent_str(depth))?;
            }
            write!(self.writer, "</{}>", element.name())?;
        }

        if !inline {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn print_node(&mut self, node: &XmlNode, depth: usize, inline: bool) -> std::io::Result<()> {
        match node {
            XmlNode::Element(e) => self.print_element(e, depth, inline),
            XmlNode::Text(t) => write!(self.writer, "{}", partial_escape(t.as_str())),
            XmlNode::Comment(c) => self.print_leaf(&format!("<!--{}-->", c), depth, inline),
            XmlNode::ProcessingInstruction(p) => {
                self.print_leaf(&format!("<?{}?>", p), depth, inline)
            }
        }
    }

    fn print_leaf(&mut self, s: &str, depth: usize, inline: bool) -> std::io::Result<()> {
        if inline {
            write!(self.writer, "{}", s)
        } else {
            writeln!(self.writer, "{}{}", Self::indent_str(depth), s)
        }
    }

    fn indent_str(level: usize) -> String {
        "  ".repeat(level)
    }
}

/// Prints an element tree to a string.
pub fn print_to_string(root: &XmlElement) -> Result<String> {
    print_with_options(root, XmlPrinterOptions::default())
}

/// Prints an element tree to a string with pretty printing.
pub fn print_to_string_pretty(root: &XmlElement) -> Result<String> {
    print_with_options(
        root,
        XmlPrinterOptions {
            pretty_print: true,
            ..XmlPrinterOptions::default()
        },
    )
}

/// Prints an element tree to a string with the given options.
pub fn print_with_options(root: &XmlElement, options: XmlPrinterOptions) -> Result<String> {
    let mut output = Vec::new();
    XmlPrinter::with_options(&mut output, options).print(root)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
