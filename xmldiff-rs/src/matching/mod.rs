//! Tree matching and diffing.
//!
//! This module pairs up corresponding elements of a source and a result
//! tree and classifies every attribute, text value and child element as
//! unchanged, added or removed. The outcome is a single [`DiffNode`] tree
//! seen from the result's perspective.

mod comparer;
mod structural;

pub use comparer::{compare, compare_documents, XmlComparer};
pub use structural::{ChildKey, StructuralNode};

use std::rc::Rc;

use crate::diff::DiffNode;
use crate::error::Result;
use crate::node::XmlElement;

/// Trait for tree comparison algorithms.
///
/// A Comparer diffs two element trees that share a root tag name and
/// returns the diff built on the result tree.
pub trait Comparer {
    /// Compares `result` against `source`.
    fn compare(&self, source: &Rc<XmlElement>, result: &Rc<XmlElement>) -> Result<DiffNode>;
}
