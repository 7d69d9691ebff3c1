//! Element tree structures for XML documents.
//!
//! The diff core consumes these trees as already-parsed input and the
//! transform generator produces them as output. Trees are immutable once
//! shared: child elements sit behind `Rc` and are never mutated after they
//! have been attached to a parent.

mod xml_content;

pub use xml_content::{XmlAttribute, XmlElement, XmlNode};

use std::rc::Rc;

/// A parsed document. The root is absent when the input held no element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    root: Option<Rc<XmlElement>>,
}

impl XmlDocument {
    /// Creates a document around the given root element.
    pub fn new(root: XmlElement) -> Self {
        XmlDocument {
            root: Some(Rc::new(root)),
        }
    }

    /// Creates a document from an optional, already shared root.
    pub fn from_root(root: Option<Rc<XmlElement>>) -> Self {
        XmlDocument { root }
    }

    /// Returns the root element, if any.
    pub fn root(&self) -> Option<&Rc<XmlElement>> {
        self.root.as_ref()
    }

    /// Consumes the document and returns its root element.
    pub fn into_root(self) -> Option<Rc<XmlElement>> {
        self.root
    }
}
