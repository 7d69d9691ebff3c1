//! XML content types for element trees.
//!
//! Elements keep their attributes and children in document order. Child
//! elements are shared through `Rc` so that structural nodes, diff nodes and
//! transform output can all point at the same subtree without copying it.

use std::rc::Rc;

/// A single attribute: qualified name and unescaped value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XmlAttribute {
    name: String,
    value: String,
}

impl XmlAttribute {
    /// Creates a new attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        XmlAttribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the qualified name (prefix included, if any).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unescaped value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for XmlAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element.
    Element(Rc<XmlElement>),
    /// Character data (CDATA sections are folded in here).
    Text(String),
    /// A comment, without the `<!--` / `-->` delimiters.
    Comment(String),
    /// A processing instruction, without the `<?` / `?>` delimiters.
    ProcessingInstruction(String),
}

impl XmlNode {
    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&Rc<XmlElement>> {
        match self {
            XmlNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the text, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlNode::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// An XML element: name, ordered attributes and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<XmlAttribute>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Creates an empty element with the given qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute (builder style).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends a child element (builder style).
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.push_element(child);
        self
    }

    /// Appends a text node (builder style).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// Appends a comment node (builder style).
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.children.push(XmlNode::Comment(comment.into()));
        self
    }

    /// Returns the qualified name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes in document order.
    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    /// Returns true if the element has at least one attribute.
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Looks up an attribute by qualified name.
    pub fn attribute(&self, name: &str) -> Option<&XmlAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Sets an attribute value.
    ///
    /// An existing attribute keeps its position and gets the new value;
    /// otherwise the attribute is appended.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(XmlAttribute { name, value }),
        }
    }

    /// Inserts an attribute at `index`, dropping any attribute of the same name.
    pub fn insert_attribute(&mut self, index: usize, attribute: XmlAttribute) {
        self.attributes.retain(|a| a.name != attribute.name);
        let index = index.min(self.attributes.len());
        self.attributes.insert(index, attribute);
    }

    /// Returns all child nodes in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Iterates over the child elements, skipping text, comments and PIs.
    pub fn child_elements(&self) -> impl Iterator<Item = &Rc<XmlElement>> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Returns true if the element has at least one child element.
    pub fn has_elements(&self) -> bool {
        self.child_elements().next().is_some()
    }

    /// Returns the concatenation of the direct text children.
    ///
    /// Text nested inside child elements is not included.
    pub fn text(&self) -> String {
        self.children.iter().filter_map(XmlNode::as_text).collect()
    }

    /// Appends a child node.
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Appends a child element.
    pub fn push_element(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(Rc::new(child)));
    }

    /// Appends a text node. Adjacent text is merged into one node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(XmlNode::Text(text));
        }
    }
}

impl std::fmt::Display for XmlElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}", self.name)?;
        for attr in &self.attributes {
            write!(f, " {}", attr)?;
        }
        write!(f, ">")
    }
}
