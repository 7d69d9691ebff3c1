//! Diff item types.
//!
//! A diff tree is built once by the comparer and never mutated afterwards.
//! Renderers only read it.

use std::cell::OnceCell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::node::{XmlAttribute, XmlElement};

/// Which side of the comparison a one-sided item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffAction {
    /// Present in the result only.
    Added,
    /// Present in the source only.
    Removed,
}

impl DiffAction {
    /// Returns the change-log symbol for an optional action.
    pub fn symbol(action: Option<DiffAction>) -> char {
        match action {
            Some(DiffAction::Added) => '+',
            Some(DiffAction::Removed) => '-',
            None => '=',
        }
    }
}

/// An attribute that exists, or has a different value, on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffAttribute {
    action: DiffAction,
    raw: XmlAttribute,
}

impl DiffAttribute {
    /// Creates a new attribute diff.
    pub fn new(action: DiffAction, raw: XmlAttribute) -> Self {
        DiffAttribute { action, raw }
    }

    /// Returns the side this attribute belongs to.
    pub fn action(&self) -> DiffAction {
        self.action
    }

    /// Returns the affected attribute.
    pub fn raw(&self) -> &XmlAttribute {
        &self.raw
    }
}

/// A text value that changed between the two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffValue {
    action: DiffAction,
    raw: String,
}

impl DiffValue {
    /// Creates a new value diff. An empty value is never a change.
    pub fn new(action: DiffAction, raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(Error::InvalidArgument(
                "value diff requires a non-empty text".to_string(),
            ));
        }
        Ok(DiffValue { action, raw })
    }

    /// Returns the side this value belongs to.
    pub fn action(&self) -> DiffAction {
        self.action
    }

    /// Returns the text.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// The two shapes an element diff can take.
#[derive(Debug, Clone)]
pub enum DiffNodeKind {
    /// The whole subtree exists on one side only. Its children are not
    /// diffed individually.
    Leaf {
        /// Side the subtree belongs to.
        action: DiffAction,
        /// The subtree's root element.
        raw: Rc<XmlElement>,
    },
    /// The element exists on both sides.
    Matched {
        /// Result-side element.
        result: Rc<XmlElement>,
        /// Source-side element.
        source: Rc<XmlElement>,
        /// Attribute diffs, then value diffs, then child diffs.
        content: Vec<DiffContent>,
    },
}

/// Diff of one element.
#[derive(Debug, Clone)]
pub struct DiffNode {
    kind: DiffNodeKind,
    changed: OnceCell<bool>,
}

impl DiffNode {
    /// Creates a node for a subtree that exists on one side only.
    pub fn leaf(action: DiffAction, raw: Rc<XmlElement>) -> Self {
        DiffNode {
            kind: DiffNodeKind::Leaf { action, raw },
            changed: OnceCell::new(),
        }
    }

    /// Creates a node for an element matched on both sides.
    pub fn matched(
        result: Rc<XmlElement>,
        source: Rc<XmlElement>,
        content: Vec<DiffContent>,
    ) -> Self {
        DiffNode {
            kind: DiffNodeKind::Matched {
                result,
                source,
                content,
            },
            changed: OnceCell::new(),
        }
    }

    /// Returns the shape of this node, for exhaustive matching.
    pub fn kind(&self) -> &DiffNodeKind {
        &self.kind
    }

    /// Returns the leaf classification, or `None` for a matched element.
    pub fn action(&self) -> Option<DiffAction> {
        match &self.kind {
            DiffNodeKind::Leaf { action, .. } => Some(*action),
            DiffNodeKind::Matched { .. } => None,
        }
    }

    /// Returns the element this node describes.
    ///
    /// For matched elements this is the result-side element.
    pub fn raw(&self) -> &Rc<XmlElement> {
        match &self.kind {
            DiffNodeKind::Leaf { raw, .. } => raw,
            DiffNodeKind::Matched { result, .. } => result,
        }
    }

    /// Returns the source-side element, if the source has one.
    pub fn source(&self) -> Option<&Rc<XmlElement>> {
        match &self.kind {
            DiffNodeKind::Leaf {
                action: DiffAction::Removed,
                raw,
            } => Some(raw),
            DiffNodeKind::Leaf { .. } => None,
            DiffNodeKind::Matched { source, .. } => Some(source),
        }
    }

    /// Returns the ordered diff items of a matched element; empty for leaves.
    pub fn content(&self) -> &[DiffContent] {
        match &self.kind {
            DiffNodeKind::Leaf { .. } => &[],
            DiffNodeKind::Matched { content, .. } => content.as_slice(),
        }
    }

    /// Returns true if this node or anything below it changed.
    pub fn is_changed(&self) -> bool {
        *self.changed.get_or_init(|| match &self.kind {
            DiffNodeKind::Leaf { .. } => true,
            DiffNodeKind::Matched { content, .. } => content.iter().any(DiffContent::is_changed),
        })
    }

    /// Iterates over the attribute diffs.
    pub fn attributes(&self) -> impl Iterator<Item = &DiffAttribute> {
        self.content().iter().filter_map(|c| match c {
            DiffContent::Attribute(a) => Some(a),
            _ => None,
        })
    }

    /// Iterates over the value diffs.
    pub fn values(&self) -> impl Iterator<Item = &DiffValue> {
        self.content().iter().filter_map(|c| match c {
            DiffContent::Value(v) => Some(v),
            _ => None,
        })
    }

    /// Iterates over the child element diffs.
    pub fn children(&self) -> impl Iterator<Item = &DiffNode> {
        self.content().iter().filter_map(|c| match c {
            DiffContent::Node(n) => Some(n),
            _ => None,
        })
    }
}

/// One item of a diff tree.
#[derive(Debug, Clone)]
pub enum DiffContent {
    /// An attribute diff.
    Attribute(DiffAttribute),
    /// A text value diff.
    Value(DiffValue),
    /// A child element diff.
    Node(DiffNode),
}

impl DiffContent {
    /// Returns true if this item represents a change.
    ///
    /// Attribute and value diffs always do; nodes answer for their subtree.
    pub fn is_changed(&self) -> bool {
        match self {
            DiffContent::Attribute(_) | DiffContent::Value(_) => true,
            DiffContent::Node(n) => n.is_changed(),
        }
    }
}

impl From<DiffAttribute> for DiffContent {
    fn from(attr: DiffAttribute) -> Self {
        DiffContent::Attribute(attr)
    }
}

impl From<DiffValue> for DiffContent {
    fn from(value: DiffValue) -> Self {
        DiffContent::Value(value)
    }
}

impl From<DiffNode> for DiffContent {
    fn from(node: DiffNode) -> Self {
        DiffContent::Node(node)
    }
}
