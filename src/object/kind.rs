//! Object variants.

use serde_json::Value;

use crate::material::Material;

/// Extra state carried by a `"Scene"` object.
#[derive(Clone, Debug)]
pub struct SceneSettings {
    /// Whether the renderer updates matrices every frame.
    pub auto_update: bool,
    /// Opaque background value (color, texture reference, ...), written as is.
    pub background: Option<Value>,
    /// Material forced onto everything in the scene.
    pub override_material: Option<Box<Material>>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            auto_update: true,
            background: None,
            override_material: None,
        }
    }
}

/// Concrete object variant.
///
/// Only `Group` and `Scene` have their own layout. Every other tag
/// (`"Object3D"`, `"Mesh"`, ...) uses the base layout and keeps its tag text.
#[derive(Clone, Debug)]
pub enum ObjectKind {
    Base(String),
    Group,
    Scene(SceneSettings),
}

impl ObjectKind {
    pub const OBJECT3D: &'static str = "Object3D";
    pub const GROUP: &'static str = "Group";
    pub const SCENE: &'static str = "Scene";
    pub const MESH: &'static str = "Mesh";

    /// Map a type tag to its variant. Blank tags become `"Object3D"`.
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name.trim() {
            "" => Self::Base(Self::OBJECT3D.to_string()),
            Self::GROUP => Self::Group,
            Self::SCENE => Self::Scene(SceneSettings::default()),
            other => Self::Base(other.to_string()),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Base(name) => name,
            Self::Group => Self::GROUP,
            Self::Scene(_) => Self::SCENE,
        }
    }

    pub fn scene_settings(&self) -> Option<&SceneSettings> {
        match self {
            Self::Scene(settings) => Some(settings),
            _ => None,
        }
    }
}

impl Default for ObjectKind {
    fn default() -> Self {
        Self::Base(Self::OBJECT3D.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_name() {
        assert_eq!(ObjectKind::from_type_name("").type_name(), "Object3D");
        assert_eq!(ObjectKind::from_type_name("  ").type_name(), "Object3D");
        assert!(matches!(ObjectKind::from_type_name("Group"), ObjectKind::Group));
        assert!(ObjectKind::from_type_name("Scene").scene_settings().is_some());
        assert_eq!(ObjectKind::from_type_name("Mesh").type_name(), "Mesh");
    }

    #[test]
    fn test_scene_defaults() {
        let s = SceneSettings::default();
        assert!(s.auto_update);
        assert!(s.background.is_none());
        assert!(s.override_material.is_none());
    }
}
