//! Hierarchy flattening.

use tracing::debug;

use super::Object3D;
use crate::core::Registry;

impl Object3D {
    /// Replace the children with the visible leaves of this subtree.
    ///
    /// Every strict descendant with no children of its own and a geometry
    /// or material reference becomes a direct child, in depth-first order.
    /// Intermediate nodes and invisible leaves are dropped. When the same
    /// identifier appears at several places the first one found is kept.
    ///
    /// Transforms of removed intermediate nodes are not folded into the
    /// promoted leaves: each leaf keeps its own local position and scale.
    pub fn optimize(&mut self) -> &mut Self {
        let before = self.children.len();
        let mut leaves = Registry::new();
        collect_visible_leaves(self.take_children(), &mut leaves);
        debug!(
            uuid = %self.uuid,
            children_before = before,
            children_after = leaves.len(),
            "flattened hierarchy"
        );
        self.children = leaves;
        self
    }
}

fn collect_visible_leaves(children: Registry<Object3D>, out: &mut Registry<Object3D>) {
    for mut child in children {
        if child.is_leaf() {
            if !child.is_invisible() {
                out.insert(child);
            }
        } else {
            collect_visible_leaves(child.take_children(), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Uuid;
    use crate::object::Object3D;
    use crate::util::Vector3;

    fn node(id: &str) -> Object3D {
        Object3D::with_uuid("Object3D", Uuid::parse(id).unwrap())
    }

    fn ids(o: &Object3D) -> Vec<&str> {
        o.children().iter().map(|c| c.uuid.as_str()).collect()
    }

    #[test]
    fn test_promotes_visible_leaves() {
        // root -> A -> (B visible, C invisible); root -> D visible
        let mut a = node("A");
        a.add_child(node("B").with_geometry("g1"));
        a.add_child(node("C"));
        let mut root = node("root");
        root.add_child(a);
        root.add_child(node("D").with_material("m1"));

        root.optimize();
        assert_eq!(ids(&root), ["B", "D"]);
        assert!(root.children().iter().all(|c| c.is_leaf()));
    }

    #[test]
    fn test_keeps_leaf_transform() {
        let mut group = node("G").with_position(Vector3::new(10, 0, 0));
        group.add_child(node("L").with_geometry("g").with_position(Vector3::new(1, 2, 3)));
        let mut root = node("root");
        root.add_child(group);

        root.optimize();
        assert_eq!(root.children().get("L").unwrap().position, Vector3::new(1, 2, 3));
    }

    #[test]
    fn test_dedups_repeated_leaf() {
        let mut a = node("A");
        a.add_child(node("X").with_geometry("g").with_name("first"));
        let mut b = node("B");
        b.add_child(node("x").with_geometry("g").with_name("second"));
        let mut root = node("root");
        root.add_child(a);
        root.add_child(b);

        root.optimize();
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children().first().unwrap().name, "first");
    }

    #[test]
    fn test_empty_and_invisible() {
        let mut root = node("root");
        root.optimize();
        assert!(root.children().is_empty());

        root.add_child(node("ghost"));
        root.optimize();
        assert!(root.children().is_empty());
    }
}
