//! Visitation contract for diff trees.
//!
//! A visitor handles the three diff item kinds and receives a parameter that
//! is threaded down the traversal (typically the depth). Renderers implement
//! this trait instead of matching on the diff model themselves.

use super::{DiffAttribute, DiffContent, DiffNode, DiffValue};

/// Visitor over the three diff item kinds.
pub trait DiffVisitor {
    /// Per-call state passed down the traversal.
    type Param;

    /// Visits an attribute diff.
    fn visit_attribute(&mut self, attr: &DiffAttribute, param: Self::Param);

    /// Visits a value diff.
    fn visit_value(&mut self, value: &DiffValue, param: Self::Param);

    /// Visits an element diff. Implementations decide whether and how to
    /// descend into [`DiffNode::content`].
    fn visit_node(&mut self, node: &DiffNode, param: Self::Param);
}

impl DiffContent {
    /// Dispatches this item to the matching visitor method.
    pub fn accept<V: DiffVisitor>(&self, visitor: &mut V, param: V::Param) {
        match self {
            DiffContent::Attribute(a) => visitor.visit_attribute(a, param),
            DiffContent::Value(v) => visitor.visit_value(v, param),
            DiffContent::Node(n) => visitor.visit_node(n, param),
        }
    }
}

impl DiffNode {
    /// Visits this node with an explicit seed parameter.
    pub fn accept<V: DiffVisitor>(&self, visitor: &mut V, param: V::Param) {
        visitor.visit_node(self, param);
    }

    /// Visits this node seeded with the parameter's default value.
    pub fn accept_default<V>(&self, visitor: &mut V)
    where
        V: DiffVisitor,
        V::Param: Default,
    {
        visitor.visit_node(self, V::Param::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffAction;
    use crate::node::{XmlAttribute, XmlElement};
    use std::rc::Rc;

    /// Records `kind@depth` for every item it sees.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<String>,
    }

    impl DiffVisitor for Recorder {
        type Param = usize;

        fn visit_attribute(&mut self, attr: &DiffAttribute, depth: usize) {
            self.seen.push(format!("attr:{}@{}", attr.raw().name(), depth));
        }

        fn visit_value(&mut self, value: &DiffValue, depth: usize) {
            self.seen.push(format!("value:{}@{}", value.raw(), depth));
        }

        fn visit_node(&mut self, node: &DiffNode, depth: usize) {
            self.seen.push(format!("node:{}@{}", node.raw().name(), depth));
            for item in node.content() {
                item.accept(self, depth + 1);
            }
        }
    }

    #[test]
    fn test_dispatch_and_depth() {
        let root = Rc::new(XmlElement::new("root"));
        let child = DiffNode::leaf(DiffAction::Added, Rc::new(XmlElement::new("child")));
        let node = DiffNode::matched(
            root.clone(),
            root,
            vec![
                DiffAttribute::new(DiffAction::Added, XmlAttribute::new("a", "1")).into(),
                DiffValue::new(DiffAction::Added, "v").unwrap().into(),
                child.into(),
            ],
        );

        let mut recorder = Recorder::default();
        node.accept_default(&mut recorder);
        assert_eq!(
            recorder.seen,
            ["node:root@0", "attr:a@1", "value:v@1", "node:child@1"]
        );

        let mut seeded = Recorder::default();
        node.accept(&mut seeded, 5);
        assert_eq!(seeded.seen[0], "node:root@5");
    }
}
