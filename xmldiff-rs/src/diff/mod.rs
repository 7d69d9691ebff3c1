//! Diff model.
//!
//! A comparison produces a tree of [`DiffNode`]s whose content is an ordered
//! list of [`DiffContent`] items: attribute diffs first, then value diffs,
//! then child element diffs. Renderers consume the tree through
//! [`DiffVisitor`] or by matching on the variants directly.

mod diff_content;
mod visitor;

pub use diff_content::{DiffAction, DiffAttribute, DiffContent, DiffNode, DiffNodeKind, DiffValue};
pub use visitor::DiffVisitor;

impl std::fmt::Display for DiffNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::TextRenderer::new().write_node(f, self)
    }
}

impl std::fmt::Display for DiffContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::TextRenderer::new().write_content(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{XmlAttribute, XmlElement};
    use std::rc::Rc;

    #[test]
    fn test_node_to_string() {
        let child = DiffNode::leaf(DiffAction::Added, Rc::new(XmlElement::new("child")));
        let root = Rc::new(XmlElement::new("root"));
        let node = DiffNode::matched(root.clone(), root, vec![child.into()]);

        assert_eq!(
            node.to_string(),
            "= Element \"root\"\n...+ Element \"child\"\n"
        );
    }

    #[test]
    fn test_attribute_to_string() {
        let attr: DiffContent =
            DiffAttribute::new(DiffAction::Removed, XmlAttribute::new("port", "123")).into();
        assert_eq!(
            attr.to_string(),
            "- Attribute: \"port\" with value: \"123\"\n"
        );
    }

    #[test]
    fn test_value_to_string() {
        let value: DiffContent = DiffValue::new(DiffAction::Added, "NewText").unwrap().into();
        assert_eq!(value.to_string(), "+ Value: \"NewText\"\n");
    }
}
