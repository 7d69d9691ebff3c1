//! Structural normalization of element trees.
//!
//! Each side of a comparison is folded bottom-up into [`StructuralNode`]s:
//! attributes indexed by name, the element's direct text, and children keyed
//! by tag name plus their index among same-tag siblings. Two elements on
//! opposite sides correspond exactly when their keys are equal.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::diff::DiffAction;
use crate::node::XmlElement;

/// Correlation key of a child: tag name and 0-based index among siblings
/// sharing that tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChildKey {
    name: String,
    index: usize,
}

impl ChildKey {
    /// Creates a new key.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        ChildKey {
            name: name.into(),
            index,
        }
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the index among same-tag siblings.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Read-only, matching-friendly view of one element on one side.
#[derive(Debug)]
pub struct StructuralNode {
    side: DiffAction,
    raw: Rc<XmlElement>,
    attributes: FxHashMap<String, String>,
    text: String,
    children: Vec<(ChildKey, StructuralNode)>,
    child_index: FxHashMap<ChildKey, usize>,
}

impl StructuralNode {
    /// Normalizes `raw` and its descendants.
    ///
    /// `side` is [`DiffAction::Removed`] for the source tree and
    /// [`DiffAction::Added`] for the result tree.
    pub fn build(raw: &Rc<XmlElement>, side: DiffAction) -> Self {
        let mut counters: FxHashMap<&str, usize> = FxHashMap::default();
        let mut children = Vec::new();
        let mut child_index = FxHashMap::default();

        for child in raw.child_elements() {
            let counter = counters.entry(child.name()).or_insert(0);
            let key = ChildKey::new(child.name(), *counter);
            *counter += 1;

            child_index.insert(key.clone(), children.len());
            children.push((key, StructuralNode::build(child, side)));
        }

        let attributes = raw
            .attributes()
            .iter()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();

        StructuralNode {
            side,
            raw: raw.clone(),
            attributes,
            text: raw.text(),
            children,
            child_index,
        }
    }

    /// Returns the default classification of this side.
    pub fn side(&self) -> DiffAction {
        self.side
    }

    /// Returns the original element.
    pub fn raw(&self) -> &Rc<XmlElement> {
        &self.raw
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the concatenated direct text (empty if none).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the children in document order with their keys.
    pub fn children(&self) -> &[(ChildKey, StructuralNode)] {
        &self.children
    }

    /// Looks up a child by key.
    pub fn child(&self, key: &ChildKey) -> Option<&StructuralNode> {
        self.child_index.get(key).map(|&i| &self.children[i].1)
    }
}
