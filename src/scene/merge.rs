//! Cross-scene composition.

use tracing::debug;

use super::ObjectScene;
use crate::core::Identified;
use crate::util::Vector3;

impl ObjectScene {
    /// Move the content of `other` into this scene.
    ///
    /// Geometries and materials are added to this scene's registries
    /// (entries already present win). Each child of `other`'s root is
    /// reparented under this scene's root; when `other`'s root has no
    /// children the root itself is reparented. `new_position`, when given,
    /// replaces the position of every reparented node.
    pub fn merge(&mut self, other: ObjectScene, new_position: Option<Vector3>) -> &mut Self {
        let ObjectScene {
            geometries,
            materials,
            object: mut root,
            ..
        } = other;

        let (geometry_count, material_count) = (geometries.len(), materials.len());
        self.geometries.extend(geometries);
        self.materials.extend(materials);

        let moved = if root.is_leaf() {
            vec![root]
        } else {
            root.take_children().into_iter().collect()
        };
        let moved_count = moved.len();
        for mut node in moved {
            if let Some(position) = new_position {
                node.position = position;
            }
            self.object.add_child(node);
        }

        debug!(
            target_root = %self.object.uuid(),
            geometries = geometry_count,
            materials = material_count,
            nodes = moved_count,
            "merged scene"
        );
        self
    }
}
