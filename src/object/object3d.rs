//! Scene graph node.

use crate::core::{impl_identity_eq, Identified, Registry, Uuid, UserData};
use crate::util::{compose_matrix, Vector3};

use super::kind::{ObjectKind, SceneSettings};

/// A node of the scene graph.
///
/// Holds a local transform, visibility flags, optional soft references to a
/// geometry and a material (by identifier, not checked against any
/// registry), and an ordered child set deduplicated by identifier.
#[derive(Clone, Debug)]
pub struct Object3D {
    pub(super) id: Option<i64>,
    pub(super) uuid: Uuid,
    pub(super) kind: ObjectKind,
    /// Optional, not necessarily unique name.
    pub name: String,
    pub(super) children: Registry<Object3D>,
    /// Identifier of the geometry to draw.
    pub geometry: Option<String>,
    /// Identifier of the material to draw with.
    pub material: Option<String>,
    pub user_data: UserData,
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub position: Vector3,
    pub scale: Vector3,
    pub up: Vector3,
}

impl Object3D {
    /// Create a node of the given type with a fresh identifier.
    pub fn new(type_name: &str) -> Self {
        Self::with_kind(ObjectKind::from_type_name(type_name), Uuid::generate())
    }

    /// Create a node of the given type with a caller supplied identifier.
    pub fn with_uuid(type_name: &str, uuid: Uuid) -> Self {
        Self::with_kind(ObjectKind::from_type_name(type_name), uuid)
    }

    pub fn with_kind(kind: ObjectKind, uuid: Uuid) -> Self {
        Self {
            id: None,
            uuid,
            kind,
            name: String::new(),
            children: Registry::new(),
            geometry: None,
            material: None,
            user_data: UserData::new(),
            visible: true,
            cast_shadow: true,
            receive_shadow: false,
            position: Vector3::ZERO,
            scale: Vector3::ONE,
            up: Vector3::UP,
        }
    }

    /// Drawable node, `"Mesh"`.
    pub fn mesh() -> Self {
        Self::new(ObjectKind::MESH)
    }

    pub fn group() -> Self {
        Self::with_kind(ObjectKind::Group, Uuid::generate())
    }

    pub fn scene() -> Self {
        Self::with_kind(ObjectKind::Scene(SceneSettings::default()), Uuid::generate())
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_geometry(mut self, uuid: impl AsRef<str>) -> Self {
        self.geometry = Some(uuid.as_ref().to_string());
        self
    }

    pub fn with_material(mut self, uuid: impl AsRef<str>) -> Self {
        self.material = Some(uuid.as_ref().to_string());
        self
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    pub fn scene_settings(&self) -> Option<&SceneSettings> {
        self.kind.scene_settings()
    }

    pub fn scene_settings_mut(&mut self) -> Option<&mut SceneSettings> {
        match &mut self.kind {
            ObjectKind::Scene(settings) => Some(settings),
            _ => None,
        }
    }

    /// Add a child unless one with the same identifier is already present.
    ///
    /// Returns `true` when the child was added.
    pub fn add_child(&mut self, child: Object3D) -> bool {
        self.children.insert(child)
    }

    /// Add a child and return the node now stored under its identifier.
    pub fn attach_child(&mut self, child: Object3D) -> &mut Object3D {
        self.children.get_or_insert(child)
    }

    /// Check for a direct child with the given identifier.
    pub fn has_child(&self, uuid: &str) -> bool {
        self.children.contains(uuid)
    }

    /// Check for a direct child with the same identifier as `child`.
    pub fn has_child_node(&self, child: &Object3D) -> bool {
        self.children.contains(child.uuid.as_str())
    }

    pub fn children(&self) -> &Registry<Object3D> {
        &self.children
    }

    pub fn child_mut(&mut self, uuid: &str) -> Option<&mut Object3D> {
        self.children.get_mut(uuid)
    }

    /// Detach and return all children.
    pub fn take_children(&mut self) -> Registry<Object3D> {
        std::mem::take(&mut self.children)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when neither a geometry nor a material is referenced.
    pub fn is_invisible(&self) -> bool {
        is_unset(&self.geometry) && is_unset(&self.material)
    }

    /// Local 4x4 matrix, column-major, from `scale` and `position`.
    pub fn matrix(&self) -> [f64; 16] {
        compose_matrix(self.scale, self.position)
    }
}

fn is_unset(reference: &Option<String>) -> bool {
    reference.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl Default for Object3D {
    fn default() -> Self {
        Self::new(ObjectKind::OBJECT3D)
    }
}

impl Identified for Object3D {
    fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}

impl_identity_eq!(Object3D);

#[cfg(test)]
mod tests {
    use super::*;

    fn uuid(s: &str) -> Uuid {
        Uuid::parse(s).unwrap()
    }

    #[test]
    fn test_defaults() {
        let o = Object3D::default();
        assert_eq!(o.type_name(), "Object3D");
        assert_eq!(o.name, "");
        assert!(o.visible);
        assert!(o.cast_shadow);
        assert!(!o.receive_shadow);
        assert_eq!(o.position, Vector3::ZERO);
        assert_eq!(o.scale, Vector3::ONE);
        assert_eq!(o.up, Vector3::UP);
        assert!(o.id().is_none());
    }

    #[test]
    fn test_add_child_dedup_first_wins() {
        let mut root = Object3D::scene();
        assert!(root.add_child(Object3D::with_uuid("Mesh", uuid("c1")).with_name("first")));
        assert!(!root.add_child(Object3D::with_uuid("Group", uuid("C1")).with_name("second")));
        assert!(root.add_child(Object3D::with_uuid("Mesh", uuid("c2"))));

        assert_eq!(root.children().len(), 2);
        let first = root.children().first().unwrap();
        assert_eq!(first.name, "first");
        assert_eq!(first.type_name(), "Mesh");
    }

    #[test]
    fn test_has_child() {
        let mut root = Object3D::group();
        let child = Object3D::with_uuid("Mesh", uuid("abc"));
        let lookup = Object3D::with_uuid("Object3D", uuid("ABC"));
        root.add_child(child);

        assert!(root.has_child("abc"));
        assert!(root.has_child("AbC"));
        assert!(root.has_child_node(&lookup));
        assert!(!root.has_child("xyz"));
    }

    #[test]
    fn test_is_invisible() {
        let o = Object3D::mesh();
        assert!(o.is_invisible());
        assert!(!o.clone().with_geometry("g").is_invisible());
        assert!(!o.clone().with_material("m").is_invisible());

        let mut blank = Object3D::mesh();
        blank.geometry = Some("  ".into());
        blank.material = Some(String::new());
        assert!(blank.is_invisible());
    }

    #[test]
    fn test_identity_equality() {
        let a = Object3D::with_uuid("Mesh", uuid("same")).with_name("a");
        let b = Object3D::with_uuid("Group", uuid("same")).with_name("b");
        assert_eq!(a, b);
        assert_ne!(a, Object3D::mesh());
    }

    #[test]
    fn test_matrix() {
        let o = Object3D::mesh().with_position(Vector3::new(5, 6, 7));
        let m = o.matrix();
        assert_eq!(&m[12..], &[5.0, 6.0, 7.0, 1.0]);
        assert_eq!((m[0], m[5], m[10]), (1.0, 1.0, 1.0));
    }
}
