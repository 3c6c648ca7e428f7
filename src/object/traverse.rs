//! Depth-first traversal of the scene graph.

use super::Object3D;

/// Pre-order iterator over every strict descendant of a node.
pub struct Descendants<'a> {
    stack: Vec<&'a Object3D>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Object3D;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl Object3D {
    /// All strict descendants, depth-first pre-order, children in insertion order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Find a descendant (or `self`) by identifier.
    pub fn find(&self, uuid: &str) -> Option<&Object3D> {
        if self.uuid.matches(uuid) {
            return Some(self);
        }
        self.descendants().find(|o| o.uuid.matches(uuid))
    }

    /// Leaf descendants, in depth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = &Object3D> {
        self.descendants().filter(|o| o.is_leaf())
    }
}
