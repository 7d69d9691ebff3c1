//! Tree comparison.
//!
//! Both trees are normalized into [`StructuralNode`]s, then walked in
//! lock-step: children correlate by [`ChildKey`], so an element that merely
//! moves among same-named siblings is matched by position.

use std::rc::Rc;

use tracing::{debug, trace};

use super::structural::StructuralNode;
use super::Comparer;
use crate::diff::{DiffAction, DiffAttribute, DiffContent, DiffNode, DiffValue};
use crate::error::{Error, Result};
use crate::node::{XmlDocument, XmlElement};

/// Default [`Comparer`]: positional matching on (tag name, sibling index).
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlComparer;

impl XmlComparer {
    /// Creates a new comparer.
    pub fn new() -> Self {
        XmlComparer
    }
}

impl Comparer for XmlComparer {
    fn compare(&self, source: &Rc<XmlElement>, result: &Rc<XmlElement>) -> Result<DiffNode> {
        if source.name() != result.name() {
            return Err(Error::StructuralMismatch {
                source_root: source.name().to_string(),
                result_root: result.name().to_string(),
            });
        }

        debug!(root = source.name(), "comparing documents");
        let parsed_source = StructuralNode::build(source, DiffAction::Removed);
        let parsed_result = StructuralNode::build(result, DiffAction::Added);
        let diff = compare_nodes(&parsed_result, &parsed_source)?;
        debug!(changed = diff.is_changed(), "comparison finished");
        Ok(diff)
    }
}

/// Compares `result` against `source`.
///
/// Fails with [`Error::StructuralMismatch`] when the root tag names differ.
/// The returned tree is built on the result element.
pub fn compare(source: &Rc<XmlElement>, result: &Rc<XmlElement>) -> Result<DiffNode> {
    XmlComparer.compare(source, result)
}

/// Compares the roots of two documents.
///
/// Fails with [`Error::InvalidArgument`] when either document has no root.
pub fn compare_documents(source: &XmlDocument, result: &XmlDocument) -> Result<DiffNode> {
    let source = source
        .root()
        .ok_or_else(|| Error::InvalidArgument("source document has no root element".into()))?;
    let result = result
        .root()
        .ok_or_else(|| Error::InvalidArgument("result document has no root element".into()))?;
    compare(source, result)
}

/// Diffs two matched nodes. Callers always pass the result side first.
fn compare_nodes(result: &StructuralNode, source: &StructuralNode) -> Result<DiffNode> {
    debug_assert_eq!(result.side(), DiffAction::Added);
    debug_assert_eq!(source.side(), DiffAction::Removed);

    let mut content = attribute_changes(result, source);
    content.extend(value_changes(result, source)?);
    content.extend(child_changes(result, source)?);

    trace!(
        element = result.raw().name(),
        items = content.len(),
        "matched element"
    );
    Ok(DiffNode::matched(
        result.raw().clone(),
        source.raw().clone(),
        content,
    ))
}

/// Attributes missing or different on the other side: source ones first.
fn attribute_changes(result: &StructuralNode, source: &StructuralNode) -> Vec<DiffContent> {
    let one_sided = |this: &StructuralNode, other: &StructuralNode| {
        this.raw()
            .attributes()
            .iter()
            .filter(|a| other.attribute(a.name()) != Some(a.value()))
            .map(|a| DiffAttribute::new(this.side(), a.clone()).into())
            .collect::<Vec<DiffContent>>()
    };

    let mut changes = one_sided(source, result);
    changes.extend(one_sided(result, source));
    changes
}

/// Text changes. Nothing is reported when the source text is empty; a
/// non-empty source text that changed is reported as removed, followed by
/// the result text as added unless it is empty.
fn value_changes(result: &StructuralNode, source: &StructuralNode) -> Result<Vec<DiffContent>> {
    let mut changes = Vec::new();
    if source.text() == result.text() || source.text().is_empty() {
        return Ok(changes);
    }

    changes.push(DiffValue::new(DiffAction::Removed, source.text())?.into());
    if !result.text().is_empty() {
        changes.push(DiffValue::new(DiffAction::Added, result.text())?.into());
    }
    Ok(changes)
}

/// Child changes: source keys in source order, then result-only keys in
/// result order. One-sided children become leaves.
fn child_changes(result: &StructuralNode, source: &StructuralNode) -> Result<Vec<DiffContent>> {
    let mut changes = Vec::new();

    for (key, source_child) in source.children() {
        match result.child(key) {
            Some(result_child) => {
                let diff = compare_nodes(result_child, source_child)?;
                if diff.is_changed() {
                    changes.push(diff.into());
                }
            }
            None => {
                changes.push(DiffNode::leaf(source_child.side(), source_child.raw().clone()).into());
            }
        }
    }

    for (key, result_child) in result.children() {
        if source.child(key).is_none() {
            changes.push(DiffNode::leaf(result_child.side(), result_child.raw().clone()).into());
        }
    }

    Ok(changes)
}
