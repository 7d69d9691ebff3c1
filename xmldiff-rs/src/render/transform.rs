//! XML-Document-Transform generation.
//!
//! Converts a diff tree into a document whose elements carry `xdt:Locator`
//! and `xdt:Transform` instructions. Applying the instructions to the source
//! document yields the result document. Only changed elements appear.
//!
//! # Output shape
//!
//! - Added subtrees are copied verbatim with `Insert`.
//! - Removed subtrees become an empty element with `Remove`.
//! - Matched elements whose text changed are replaced by a full copy of the
//!   result element with `Replace`.
//! - Other matched elements get `SetAttributes(..)` and/or
//!   `RemoveAttributes(..)`. When both are needed the element is emitted
//!   twice, one instruction per copy, since an element carries a single
//!   transform attribute.

use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;
use tracing::{debug, trace};

use super::Renderer;
use crate::constants::{XDT_LOCATOR_ATTR, XDT_NAMESPACE, XDT_PREFIX, XDT_TRANSFORM_ATTR};
use crate::diff::{DiffAction, DiffContent, DiffNode, DiffNodeKind};
use crate::error::{Error, Result};
use crate::node::{XmlAttribute, XmlElement, XmlNode};
use crate::xml::{print_with_options, XmlPrinterOptions};

/// Value of the `xdt:Transform` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// Insert the element after the located siblings.
    Insert,
    /// Remove the located element and its subtree.
    Remove,
    /// Replace the located element with this one.
    Replace,
    /// Set the named attributes to the values carried by the element.
    SetAttributes(Vec<String>),
    /// Remove the named attributes.
    RemoveAttributes(Vec<String>),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Insert => write!(f, "Insert"),
            Transform::Remove => write!(f, "Remove"),
            Transform::Replace => write!(f, "Replace"),
            Transform::SetAttributes(names) => write!(f, "SetAttributes({})", names.join(",")),
            Transform::RemoveAttributes(names) => {
                write!(f, "RemoveAttributes({})", names.join(","))
            }
        }
    }
}

/// Value of the `xdt:Locator` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Locate by the value of a stable, unique attribute.
    Match(String),
    /// Locate by 1-based position among same-tag siblings.
    Condition(usize),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Match(name) => write!(f, "Match({})", name),
            Locator::Condition(position) => write!(f, "Condition([{}])", position),
        }
    }
}

bitflags! {
    /// Kinds of change found directly on a matched element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Edits: u8 {
        /// The text value changed.
        const VALUE = 0b001;
        /// At least one attribute was added or changed.
        const SET_ATTRIBUTES = 0b010;
        /// At least one attribute was removed and not re-added.
        const REMOVE_ATTRIBUTES = 0b100;
    }
}

impl Default for Edits {
    fn default() -> Self {
        Edits::empty()
    }
}

/// Everything a matched element's diff content contributes to its output.
#[derive(Debug, Default)]
struct NodeEdits {
    /// Which instructions this element needs.
    flags: Edits,
    /// Added attributes, set on the output element.
    attributes: Vec<XmlAttribute>,
    /// Added attribute names in first-observed order.
    added: Vec<String>,
    /// Removed attribute names in first-observed order, minus re-added ones.
    removed: Vec<String>,
    /// Instruction elements generated for changed children.
    children: Vec<XmlElement>,
}

impl NodeEdits {
    fn collect(node: &DiffNode) -> Result<Self> {
        let mut edits = NodeEdits::default();
        for item in node.content() {
            match item {
                DiffContent::Attribute(attr) => {
                    let name = attr.raw().name();
                    match attr.action() {
                        DiffAction::Added => {
                            push_unique(&mut edits.added, name);
                            edits.attributes.push(attr.raw().clone());
                        }
                        DiffAction::Removed => push_unique(&mut edits.removed, name),
                    }
                }
                DiffContent::Value(_) => edits.flags.insert(Edits::VALUE),
                DiffContent::Node(child) => {
                    if child.is_changed() {
                        edits
                            .children
                            .extend(transform_node(child, node.source().map(Rc::as_ref))?);
                    }
                }
            }
        }

        // A changed value shows up as remove + add; it nets to a set
        let added = &edits.added;
        edits.removed.retain(|name| !added.contains(name));

        edits.flags.set(Edits::SET_ATTRIBUTES, !edits.added.is_empty());
        edits
            .flags
            .set(Edits::REMOVE_ATTRIBUTES, !edits.removed.is_empty());
        Ok(edits)
    }

    /// Returns true if `name` is touched by this element's own diff.
    fn touches(&self, name: &str) -> bool {
        self.added.iter().any(|n| n == name) || self.removed.iter().any(|n| n == name)
    }
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

/// A resolved locator plus the data attribute it relies on, if any.
struct Location {
    locator: Locator,
    key: Option<XmlAttribute>,
}

impl Location {
    fn apply(&self, element: &mut XmlElement) {
        if let Some(key) = &self.key {
            element.set_attribute(key.name(), key.value());
        }
        element.set_attribute(XDT_LOCATOR_ATTR, self.locator.to_string());
    }
}

/// Computes the locator of `element` among the children of `parent`.
///
/// Returns `None` when the element has no same-tag sibling. Attributes
/// for which `excluded` returns true never serve as a match key.
fn locate(
    element: &Rc<XmlElement>,
    parent: Option<&XmlElement>,
    excluded: impl Fn(&str) -> bool,
) -> Result<Option<Location>> {
    let Some(parent) = parent else {
        return Ok(None);
    };

    let mut position = None;
    let mut siblings = Vec::new();
    for candidate in parent.child_elements() {
        if candidate.name() != element.name() {
            continue;
        }
        if Rc::ptr_eq(candidate, element) {
            position = Some(siblings.len() + 1);
        } else {
            siblings.push(candidate);
        }
    }

    let position = position.ok_or_else(|| {
        Error::Transform(format!(
            "element <{}> not found under its source parent <{}>",
            element.name(),
            parent.name()
        ))
    })?;
    if siblings.is_empty() {
        return Ok(None);
    }

    let key = element.attributes().iter().find(|attr| {
        !excluded(attr.name())
            && !siblings.iter().any(|sibling| {
                sibling
                    .attribute(attr.name())
                    .is_some_and(|other| other.value() == attr.value())
            })
    });

    let location = match key {
        Some(attr) => Location {
            locator: Locator::Match(attr.name().to_string()),
            key: Some(attr.clone()),
        },
        None => Location {
            locator: Locator::Condition(position),
            key: None,
        },
    };
    trace!(element = element.name(), locator = %location.locator, "located element");
    Ok(Some(location))
}

fn set_transform(element: &mut XmlElement, transform: &Transform) {
    element.set_attribute(XDT_TRANSFORM_ATTR, transform.to_string());
}

/// Generates the instruction element(s) for one diff node.
///
/// `parent_source` is the source-side element of the parent diff node, or
/// `None` for the root. Returns two elements when an attribute set and an
/// attribute removal must be split, one element otherwise.
fn transform_node(node: &DiffNode, parent_source: Option<&XmlElement>) -> Result<Vec<XmlElement>> {
    match node.kind() {
        DiffNodeKind::Leaf {
            action: DiffAction::Added,
            raw,
        } => {
            let mut element = XmlElement::clone(raw);
            set_transform(&mut element, &Transform::Insert);
            Ok(vec![element])
        }
        DiffNodeKind::Leaf {
            action: DiffAction::Removed,
            raw,
        } => {
            let mut element = XmlElement::new(raw.name());
            for attr in raw.attributes() {
                element.set_attribute(attr.name(), attr.value());
            }
            if let Some(location) = locate(raw, parent_source, |_| false)? {
                location.apply(&mut element);
            }
            set_transform(&mut element, &Transform::Remove);
            Ok(vec![element])
        }
        DiffNodeKind::Matched { result, source, .. } => {
            let edits = NodeEdits::collect(node)?;
            let location = locate(source, parent_source, |name| edits.touches(name))?;
            let flags = edits.flags;
            debug!(element = result.name(), edits = ?flags, "transform decision");

            if flags.contains(Edits::VALUE) {
                // The replacement is the whole result element, so unchanged
                // attributes and children survive and no child instructions
                // are needed.
                let mut replacement = XmlElement::clone(result);
                if let Some(location) = &location {
                    location.apply(&mut replacement);
                }
                set_transform(&mut replacement, &Transform::Replace);
                return Ok(vec![replacement]);
            }

            let mut primary = XmlElement::new(result.name());
            for attr in &edits.attributes {
                primary.set_attribute(attr.name(), attr.value());
            }
            if let Some(location) = &location {
                location.apply(&mut primary);
            }

            let mut secondary = None;
            if flags.contains(Edits::SET_ATTRIBUTES) {
                set_transform(&mut primary, &Transform::SetAttributes(edits.added));
            }
            if flags.contains(Edits::REMOVE_ATTRIBUTES) {
                let remove = Transform::RemoveAttributes(edits.removed);
                if flags.contains(Edits::SET_ATTRIBUTES) {
                    let mut second = XmlElement::new(result.name());
                    if let Some(location) = &location {
                        location.apply(&mut second);
                    }
                    set_transform(&mut second, &remove);
                    secondary = Some(second);
                } else {
                    set_transform(&mut primary, &remove);
                }
            }

            for child in edits.children {
                primary.push_child(XmlNode::Element(Rc::new(child)));
            }

            Ok(std::iter::once(primary).chain(secondary).collect())
        }
    }
}

/// Builds the transform document root for a diff tree.
///
/// The root carries the `xmlns:xdt` declaration as its first attribute.
/// Fails with [`Error::Transform`] when the root itself would need to be
/// split into two instruction elements.
pub fn generate_transform(diff: &DiffNode) -> Result<XmlElement> {
    let mut produced = transform_node(diff, None)?;
    if produced.len() != 1 {
        return Err(Error::Transform(format!(
            "root <{}> needs both SetAttributes and RemoveAttributes",
            diff.raw().name()
        )));
    }

    let mut root = produced.remove(0);
    root.insert_attribute(
        0,
        XmlAttribute::new(format!("xmlns:{}", XDT_PREFIX), XDT_NAMESPACE),
    );
    Ok(root)
}

/// Renders a diff tree as an XML-Document-Transform document.
#[derive(Debug, Clone, Copy)]
pub struct TransformRenderer {
    printer_options: XmlPrinterOptions,
}

impl Default for TransformRenderer {
    fn default() -> Self {
        TransformRenderer {
            printer_options: XmlPrinterOptions {
                pretty_print: true,
                declaration: true,
            },
        }
    }
}

impl TransformRenderer {
    /// Creates a renderer with pretty-printed output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options used to serialize the transform document.
    pub fn with_printer_options(mut self, options: XmlPrinterOptions) -> Self {
        self.printer_options = options;
        self
    }
}

impl Renderer for TransformRenderer {
    fn render(&self, diff: &DiffNode) -> Result<String> {
        let root = generate_transform(diff)?;
        print_with_options(&root, self.printer_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{DiffAttribute, DiffValue};
    use crate::matching::compare;

    fn transform(source: XmlElement, result: XmlElement) -> Result<XmlElement> {
        let diff = compare(&Rc::new(source), &Rc::new(result))?;
        generate_transform(&diff)
    }

    fn attr<'a>(element: &'a XmlElement, name: &str) -> Option<&'a str> {
        element.attribute(name).map(XmlAttribute::value)
    }

    fn children(element: &XmlElement) -> Vec<&Rc<XmlElement>> {
        element.child_elements().collect()
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Transform::SetAttributes(vec!["a".into(), "b".into()]).to_string(),
            "SetAttributes(a,b)"
        );
        assert_eq!(
            Transform::RemoveAttributes(vec!["x".into()]).to_string(),
            "RemoveAttributes(x)"
        );
        assert_eq!(Locator::Match("name".into()).to_string(), "Match(name)");
        assert_eq!(Locator::Condition(2).to_string(), "Condition([2])");
    }

    #[test]
    fn test_no_op_root_only() {
        let tree = XmlElement::new("configuration")
            .with_child(XmlElement::new("appSettings").with_attribute("a", "1"));
        let root = transform(tree.clone(), tree).unwrap();

        assert_eq!(root.name(), "configuration");
        assert_eq!(root.attributes().len(), 1);
        assert_eq!(attr(&root, "xmlns:xdt"), Some(XDT_NAMESPACE));
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_no_op_rendered() {
        let tree = XmlElement::new("configuration").with_child(XmlElement::new("x"));
        let diff = compare(&Rc::new(tree.clone()), &Rc::new(tree)).unwrap();
        let output = TransformRenderer::new().render(&diff).unwrap();

        assert_eq!(
            output,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <configuration xmlns:xdt=\"http://schemas.microsoft.com/XML-Document-Transform\" />\n"
        );
    }

    #[test]
    fn test_insert_copies_subtree() {
        let added = XmlElement::new("add")
            .with_attribute("key", "k")
            .with_comment("keep")
            .with_child(XmlElement::new("inner").with_text("t"));
        let root = transform(
            XmlElement::new("root"),
            XmlElement::new("root").with_child(added.clone()),
        )
        .unwrap();

        let inserted = children(&root)[0];
        assert_eq!(attr(inserted, XDT_TRANSFORM_ATTR), Some("Insert"));
        assert_eq!(attr(inserted, XDT_LOCATOR_ATTR), None);
        assert_eq!(attr(inserted, "key"), Some("k"));
        assert_eq!(inserted.children(), added.children());
    }

    #[test]
    fn test_remove_has_no_children() {
        let removed = XmlElement::new("gone")
            .with_attribute("id", "1")
            .with_child(XmlElement::new("inner"));
        let root = transform(
            XmlElement::new("root").with_child(removed),
            XmlElement::new("root"),
        )
        .unwrap();

        let gone = children(&root)[0];
        assert_eq!(attr(gone, "id"), Some("1"));
        assert_eq!(attr(gone, XDT_TRANSFORM_ATTR), Some("Remove"));
        assert_eq!(attr(gone, XDT_LOCATOR_ATTR), None);
        assert!(gone.children().is_empty());
    }

    #[test]
    fn test_remove_located_by_unique_attribute() {
        let root = transform(
            XmlElement::new("root")
                .with_child(XmlElement::new("add").with_attribute("id", "1"))
                .with_child(XmlElement::new("add").with_attribute("id", "2")),
            XmlElement::new("root").with_child(XmlElement::new("add").with_attribute("id", "1")),
        )
        .unwrap();

        let removed = children(&root)[0];
        assert_eq!(attr(removed, "id"), Some("2"));
        assert_eq!(attr(removed, XDT_LOCATOR_ATTR), Some("Match(id)"));
        assert_eq!(attr(removed, XDT_TRANSFORM_ATTR), Some("Remove"));
    }

    #[test]
    fn test_remove_located_by_position() {
        let root = transform(
            XmlElement::new("root")
                .with_child(XmlElement::new("a"))
                .with_child(XmlElement::new("a"))
                .with_child(XmlElement::new("a")),
            XmlElement::new("root").with_child(XmlElement::new("a")),
        )
        .unwrap();

        let locators: Vec<_> = children(&root)
            .into_iter()
            .map(|e| (attr(e, XDT_LOCATOR_ATTR), attr(e, XDT_TRANSFORM_ATTR)))
            .collect();
        assert_eq!(
            locators,
            [
                (Some("Condition([2])"), Some("Remove")),
                (Some("Condition([3])"), Some("Remove")),
            ]
        );
    }

    #[test]
    fn test_set_and_remove_split() {
        let root = transform(
            XmlElement::new("root").with_child(
                XmlElement::new("item")
                    .with_attribute("a", "1")
                    .with_attribute("b", "2"),
            ),
            XmlElement::new("root").with_child(XmlElement::new("item").with_attribute("a", "9")),
        )
        .unwrap();

        let items = children(&root);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "item");
        assert_eq!(attr(items[0], "a"), Some("9"));
        assert_eq!(attr(items[0], XDT_TRANSFORM_ATTR), Some("SetAttributes(a)"));
        assert_eq!(items[1].name(), "item");
        assert_eq!(attr(items[1], XDT_TRANSFORM_ATTR), Some("RemoveAttributes(b)"));
        assert_eq!(attr(items[0], XDT_LOCATOR_ATTR), attr(items[1], XDT_LOCATOR_ATTR));
    }

    #[test]
    fn test_remove_only_on_single_element() {
        let root = transform(
            XmlElement::new("root").with_child(XmlElement::new("item").with_attribute("b", "2")),
            XmlElement::new("root").with_child(XmlElement::new("item")),
        )
        .unwrap();

        let items = children(&root);
        assert_eq!(items.len(), 1);
        assert_eq!(attr(items[0], XDT_TRANSFORM_ATTR), Some("RemoveAttributes(b)"));
    }

    #[test]
    fn test_replace_subsumes_attributes() {
        let root = transform(
            XmlElement::new("root").with_child(
                XmlElement::new("item")
                    .with_attribute("a", "1")
                    .with_attribute("b", "2")
                    .with_text("old"),
            ),
            XmlElement::new("root").with_child(
                XmlElement::new("item")
                    .with_attribute("a", "9")
                    .with_text("new"),
            ),
        )
        .unwrap();

        let items = children(&root);
        assert_eq!(items.len(), 1);
        assert_eq!(attr(items[0], XDT_TRANSFORM_ATTR), Some("Replace"));
        assert_eq!(items[0].text(), "new");
    }

    #[test]
    fn test_replace_keeps_unchanged_content() {
        let root = transform(
            XmlElement::new("r").with_child(
                XmlElement::new("e")
                    .with_attribute("a", "1")
                    .with_attribute("b", "k")
                    .with_text("old")
                    .with_child(XmlElement::new("c").with_attribute("x", "1")),
            ),
            XmlElement::new("r").with_child(
                XmlElement::new("e")
                    .with_attribute("a", "1")
                    .with_attribute("b", "k")
                    .with_text("new")
                    .with_child(XmlElement::new("c").with_attribute("x", "2")),
            ),
        )
        .unwrap();

        let replaced = children(&root)[0];
        let names: Vec<_> = replaced.attributes().iter().map(XmlAttribute::name).collect();
        assert_eq!(names, ["a", "b", XDT_TRANSFORM_ATTR]);
        assert_eq!(attr(replaced, XDT_TRANSFORM_ATTR), Some("Replace"));
        assert_eq!(replaced.text(), "new");

        // The changed child is carried in its result form, without its own
        // instruction
        let inner = children(replaced);
        assert_eq!(inner.len(), 1);
        assert_eq!(attr(inner[0], "x"), Some("2"));
        assert_eq!(attr(inner[0], XDT_TRANSFORM_ATTR), None);
    }

    #[test]
    fn test_replace_keeps_locator() {
        let item = |id: &str, text: &str| XmlElement::new("e").with_attribute("id", id).with_text(text);
        let root = transform(
            XmlElement::new("r").with_child(item("x", "old")).with_child(item("y", "same")),
            XmlElement::new("r").with_child(item("x", "new")).with_child(item("y", "same")),
        )
        .unwrap();

        let replaced = children(&root)[0];
        let names: Vec<_> = replaced.attributes().iter().map(XmlAttribute::name).collect();
        assert_eq!(names, ["id", XDT_LOCATOR_ATTR, XDT_TRANSFORM_ATTR]);
        assert_eq!(attr(replaced, XDT_LOCATOR_ATTR), Some("Match(id)"));
    }

    #[test]
    fn test_locator_prefers_unique_attribute() {
        let item = |name: &str, kind: &str| {
            XmlElement::new("add")
                .with_attribute("kind", kind)
                .with_attribute("name", name)
        };
        let source = XmlElement::new("root")
            .with_child(item("a", "x"))
            .with_child(item("b", "y"))
            .with_child(item("c", "y"));
        let result = XmlElement::new("root")
            .with_child(item("a", "x").with_attribute("extra", "1"))
            .with_child(item("b", "y"))
            .with_child(item("c", "y"));

        let root = transform(source, result).unwrap();
        let changed = children(&root)[0];
        assert_eq!(attr(changed, XDT_LOCATOR_ATTR), Some("Match(kind)"));
        assert_eq!(attr(changed, "kind"), Some("x"));
        assert_eq!(attr(changed, XDT_TRANSFORM_ATTR), Some("SetAttributes(extra)"));

        let names: Vec<_> = changed.attributes().iter().map(XmlAttribute::name).collect();
        assert_eq!(names, ["extra", "kind", XDT_LOCATOR_ATTR, XDT_TRANSFORM_ATTR]);
    }

    #[test]
    fn test_locator_falls_back_to_position() {
        let item = |text: &str| {
            XmlElement::new("add")
                .with_attribute("kind", "same")
                .with_text(text)
        };
        let source = XmlElement::new("root")
            .with_child(item("t"))
            .with_child(item("t"))
            .with_child(item("t"));
        let result = XmlElement::new("root")
            .with_child(item("t"))
            .with_child(item("changed"))
            .with_child(item("t"));

        let root = transform(source, result).unwrap();
        let changed = children(&root)[0];
        assert_eq!(attr(changed, XDT_LOCATOR_ATTR), Some("Condition([2])"));
        assert_eq!(attr(changed, "kind"), None);
    }

    #[test]
    fn test_changed_attribute_is_not_match_key() {
        let source = XmlElement::new("root")
            .with_child(XmlElement::new("add").with_attribute("key", "a"))
            .with_child(XmlElement::new("add").with_attribute("key", "b"));
        let result = XmlElement::new("root")
            .with_child(XmlElement::new("add").with_attribute("key", "z"))
            .with_child(XmlElement::new("add").with_attribute("key", "b"));

        let root = transform(source, result).unwrap();
        let changed = children(&root)[0];
        assert_eq!(attr(changed, XDT_LOCATOR_ATTR), Some("Condition([1])"));
        assert_eq!(attr(changed, "key"), Some("z"));
    }

    #[test]
    fn test_unchanged_siblings_skipped() {
        let source = XmlElement::new("root")
            .with_child(XmlElement::new("a").with_text("same"))
            .with_child(XmlElement::new("b").with_child(XmlElement::new("c").with_text("x")));
        let result = XmlElement::new("root")
            .with_child(XmlElement::new("a").with_text("same"))
            .with_child(XmlElement::new("b").with_child(XmlElement::new("c").with_text("y")));

        let root = transform(source, result).unwrap();
        let top = children(&root);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name(), "b");
        assert_eq!(attr(top[0], XDT_TRANSFORM_ATTR), None);

        let nested = children(top[0]);
        assert_eq!(attr(nested[0], XDT_TRANSFORM_ATTR), Some("Replace"));
        assert_eq!(nested[0].text(), "y");
    }

    #[test]
    fn test_root_split_fails() {
        let err = transform(
            XmlElement::new("root")
                .with_attribute("a", "1")
                .with_attribute("b", "2"),
            XmlElement::new("root").with_attribute("a", "3"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Transform(_)));
    }

    #[test]
    fn test_root_attribute_change() {
        let root = transform(
            XmlElement::new("root").with_attribute("a", "1"),
            XmlElement::new("root").with_attribute("a", "2"),
        )
        .unwrap();

        let names: Vec<_> = root.attributes().iter().map(XmlAttribute::name).collect();
        assert_eq!(names, ["xmlns:xdt", "a", XDT_TRANSFORM_ATTR]);
        assert_eq!(attr(&root, XDT_TRANSFORM_ATTR), Some("SetAttributes(a)"));
    }

    #[test]
    fn test_collect_nets_changed_attributes() {
        let element = Rc::new(XmlElement::new("item"));
        let node = DiffNode::matched(
            element.clone(),
            element,
            vec![
                DiffAttribute::new(DiffAction::Removed, XmlAttribute::new("a", "1")).into(),
                DiffAttribute::new(DiffAction::Removed, XmlAttribute::new("b", "2")).into(),
                DiffAttribute::new(DiffAction::Added, XmlAttribute::new("a", "3")).into(),
            ],
        );

        let edits = NodeEdits::collect(&node).unwrap();
        assert_eq!(edits.flags, Edits::SET_ATTRIBUTES | Edits::REMOVE_ATTRIBUTES);
        assert_eq!(edits.added, ["a"]);
        assert_eq!(edits.removed, ["b"]);
        assert!(edits.touches("a"));
        assert!(!edits.touches("c"));
    }

    #[test]
    fn test_collect_value_flag() {
        let element = Rc::new(XmlElement::new("item"));
        let node = DiffNode::matched(
            element.clone(),
            element,
            vec![DiffValue::new(DiffAction::Removed, "old").unwrap().into()],
        );

        let edits = NodeEdits::collect(&node).unwrap();
        assert_eq!(edits.flags, Edits::VALUE);
        assert!(NodeEdits::default().flags.is_empty());
    }
}
