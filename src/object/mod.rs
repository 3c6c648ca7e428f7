//! Scene graph.
//!
//! [`Object3D`] is the single node type. Its [`ObjectKind`] picks the
//! layout: `"Group"` and `"Scene"` are dedicated variants, any other type
//! tag (`"Object3D"`, `"Mesh"`, ...) uses the base layout and keeps its text.
//!
//! Children are owned and deduplicated by identifier, so the graph is always
//! a tree.

use std::sync::OnceLock;

use crate::core::TypeRegistry;

mod codec;
mod kind;
mod object3d;
mod optimize;
mod traverse;

pub use codec::{decode_base, decode_group, decode_scene};
pub use kind::{ObjectKind, SceneSettings};
pub use object3d::Object3D;
pub use traverse::Descendants;

/// Fresh registry with the built-in object types, ready to extend.
pub fn default_registry() -> TypeRegistry<Object3D> {
    TypeRegistry::new("Object3D", decode_base)
        .with(ObjectKind::OBJECT3D, decode_base)
        .with(ObjectKind::GROUP, decode_group)
        .with(ObjectKind::SCENE, decode_scene)
        .with(ObjectKind::MESH, decode_base)
}

/// Shared registry used by `Deserialize for Object3D`.
pub fn registry() -> &'static TypeRegistry<Object3D> {
    static REGISTRY: OnceLock<TypeRegistry<Object3D>> = OnceLock::new();
    REGISTRY.get_or_init(default_registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_type_keeps_tag() {
        let o = registry()
            .decode(json!({"uuid": "l", "type": "PointLight", "name": "lamp"}))
            .unwrap();
        assert_eq!(o.type_name(), "PointLight");
        assert!(matches!(o.kind(), ObjectKind::Base(_)));
        assert_eq!(o.name, "lamp");
    }

    #[test]
    fn test_registered_types() {
        let names: Vec<_> = registry().type_names().collect();
        assert_eq!(names, ["Object3D", "Group", "Scene", "Mesh"]);
    }

    #[test]
    fn test_mesh_is_builtin() {
        let o = registry()
            .decode(json!({"uuid": "m", "type": "Mesh", "geometry": "g"}))
            .unwrap();
        assert!(registry().is_registered(o.type_name()));
        assert!(matches!(o.kind(), ObjectKind::Base(tag) if tag == "Mesh"));
        assert_eq!(o.geometry.as_deref(), Some("g"));
    }
}
