//! Vertex deduplication for indexed face construction.

use indexmap::IndexSet;

use crate::util::Vector3;

/// Insertion-ordered set of vertices assigning each a stable index.
#[derive(Clone, Debug, Default)]
pub struct VertexSet {
    vertices: IndexSet<Vector3>,
}

impl VertexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `vertex`, adding it if not yet present.
    pub fn add_vertex(&mut self, vertex: Vector3) -> usize {
        self.vertices.insert_full(vertex).0
    }

    pub fn index_of(&self, vertex: &Vector3) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate vertices in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Vector3> {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_indices() {
        let mut set = VertexSet::new();
        let a = Vector3::new(0, 0, 0);
        let b = Vector3::new(1, 0, 0);

        assert_eq!(set.add_vertex(a), 0);
        assert_eq!(set.add_vertex(b), 1);
        assert_eq!(set.add_vertex(a), 0);
        assert_eq!(set.len(), 2);
        assert_eq!(set.index_of(&b), Some(1));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), [a, b]);
    }
}
