//! XML parser that builds element trees.
//!
//! This parser uses quick-xml's streaming API. Elements are assembled on a
//! stack and frozen into `Rc`s as their end tags arrive, so the finished tree
//! needs no interior mutability.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{XmlDocument, XmlElement, XmlNode};

/// Options controlling how text is read.
#[derive(Debug, Clone, Default)]
pub struct XmlParserOptions {
    /// Keep whitespace-only text nodes. They are dropped by default, so
    /// indentation does not show up as a value change.
    pub preserve_whitespace: bool,
}

/// XML parser that builds element trees.
#[derive(Debug, Clone, Default)]
pub struct XmlParser {
    options: XmlParserOptions,
}

impl XmlParser {
    /// Creates a new parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new parser with the given options.
    pub fn with_options(options: XmlParserOptions) -> Self {
        XmlParser { options }
    }

    /// Parses XML from a string.
    pub fn parse_str(&self, xml: &str) -> Result<XmlDocument> {
        let mut reader = Reader::from_str(xml);
        // Don't trim text - whitespace handling is decided on whole text runs
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
        self.parse_reader(&mut reader)
    }

    /// Parses XML from a file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<XmlDocument> {
        let path = path.as_ref();
        debug!(path = %path.display(), "parsing file");
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(BufReader::new(file));
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
        self.parse_reader(&mut reader)
    }

    /// Parses XML from a quick-xml Reader.
    fn parse_reader<R: BufRead>(&self, reader: &mut Reader<R>) -> Result<XmlDocument> {
        let mut builder = TreeBuilder::new(self.options.preserve_whitespace);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let element = self.parse_element(e, reader)?;
                    builder.open(element);
                }
                Event::End(_) => builder.close()?,
                Event::Empty(ref e) => {
                    let element = self.parse_element(e, reader)?;
                    builder.open(element);
                    builder.close()?;
                }
                Event::Text(e) => {
                    let raw =
                        std::str::from_utf8(e.as_ref()).map_err(|e| Error::Parse(e.to_string()))?;
                    let text = unescape(raw).map_err(|e| Error::Parse(e.to_string()))?;
                    builder.text(&text);
                }
                Event::CData(e) => {
                    builder.text(&String::from_utf8_lossy(e.as_ref()));
                }
                Event::GeneralRef(e) => {
                    if let Some(ch) = e
                        .resolve_char_ref()
                        .map_err(|e| Error::Parse(e.to_string()))?
                    {
                        builder.text(ch.encode_utf8(&mut [0; 4]));
                    } else {
                        let name = reader
                            .decoder()
                            .decode(e.as_ref())
                            .map_err(|e| Error::Parse(e.to_string()))?;
                        let resolved = resolve_predefined_entity(&name)
                            .ok_or_else(|| Error::Parse(format!("Unknown entity: &{};", name)))?;
                        builder.text(resolved);
                    }
                }
                Event::Comment(e) => {
                    let comment = String::from_utf8_lossy(e.as_ref()).into_owned();
                    builder.node(XmlNode::Comment(comment));
                }
                Event::PI(e) => {
                    let pi = String::from_utf8_lossy(&e).into_owned();
                    builder.node(XmlNode::ProcessingInstruction(pi));
                }
                Event::Decl(_) | Event::DocType(_) => {
                    // Prolog content is not part of the element tree
                }
                Event::Eof => break,
            }
            buf.clear();
        }

        builder.finish()
    }

    /// Parses an element's name and attributes.
    fn parse_element<R>(&self, e: &BytesStart, reader: &Reader<R>) -> Result<XmlElement> {
        let name = reader
            .decoder()
            .decode(e.name().as_ref())
            .map_err(|e| Error::Parse(e.to_string()))?
            .into_owned();

        let mut element = XmlElement::new(name);
        for attr_result in e.attributes() {
            let attr = attr_result.map_err(|e| Error::Parse(format!("Attribute error: {}", e)))?;
            let key = reader
                .decoder()
                .decode(attr.key.as_ref())
                .map_err(|e| Error::Parse(e.to_string()))?
                .into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Parse(e.to_string()))?
                .into_owned();
            element.set_attribute(key, value);
        }

        Ok(element)
    }
}

/// Stack of open elements plus the pending text run.
struct TreeBuilder {
    stack: Vec<XmlElement>,
    root: Option<XmlElement>,
    pending_text: String,
    preserve_whitespace: bool,
}

impl TreeBuilder {
    fn new(preserve_whitespace: bool) -> Self {
        TreeBuilder {
            stack: Vec::new(),
            root: None,
            pending_text: String::new(),
            preserve_whitespace,
        }
    }

    fn open(&mut self, element: XmlElement) {
        self.flush_text();
        self.stack.push(element);
    }

    fn close(&mut self) -> Result<()> {
        self.flush_text();
        let element = self
            .stack
            .pop()
            .ok_or_else(|| Error::Parse("Unexpected end tag".to_string()))?;
        match self.stack.last_mut() {
            Some(parent) => parent.push_element(element),
            None if self.root.is_some() => {
                return Err(Error::Parse("Multiple root elements".to_string()));
            }
            None => self.root = Some(element),
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        self.pending_text.push_str(text);
    }

    /// Attaches a comment or PI to the open element. Nodes outside the root
    /// element are dropped.
    fn node(&mut self, node: XmlNode) {
        self.flush_text();
        if let Some(parent) = self.stack.last_mut() {
            parent.push_child(node);
        }
    }

    fn flush_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending_text);
        if !self.preserve_whitespace && text.trim().is_empty() {
            return;
        }
        if let Some(parent) = self.stack.last_mut() {
            parent.push_text(text);
        }
    }

    fn finish(mut self) -> Result<XmlDocument> {
        self.flush_text();
        if let Some(open) = self.stack.last() {
            return Err(Error::Parse(format!(
                "Unexpected end of document inside <{}>",
                open.name()
            )));
        }
        debug!(has_root = self.root.is_some(), "document parsed");
        Ok(match self.root {
            Some(root) => XmlDocument::new(root),
            None => XmlDocument::default(),
        })
    }
}

/// Parses XML from a file with default options.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<XmlDocument> {
    XmlParser::new().parse_file(path)
}

/// Parses XML from a string with default options.
pub fn parse_str(xml: &str) -> Result<XmlDocument> {
    XmlParser::new().parse_str(xml)
}
