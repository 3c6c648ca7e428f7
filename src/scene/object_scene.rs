//! Root document container.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ObjectMetadata;
use crate::core::{Identified, Registry, Uuid, UserData};
use crate::geom::Geometry;
use crate::material::Material;
use crate::object::{Object3D, ObjectKind, SceneSettings};
use crate::util::Result;

/// A complete scene document.
///
/// Owns the root node together with the registries of every geometry and
/// material the tree refers to. Objects point at registry entries by
/// identifier only; use [`validate`](Self::validate) to check that every
/// reference resolves.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectScene {
    #[serde(default)]
    pub metadata: ObjectMetadata,
    #[serde(default)]
    pub(super) geometries: Registry<Geometry>,
    #[serde(default)]
    pub(super) materials: Registry<Material>,
    pub(super) object: Object3D,
    #[serde(default)]
    pub user_data: UserData,
}

impl ObjectScene {
    /// Empty scene with a `"Scene"` root and a fresh root identifier.
    pub fn new(generator: impl Into<String>) -> Result<Self> {
        Self::with_uuid(generator, Uuid::generate())
    }

    /// Empty scene whose root has the given identifier.
    pub fn with_uuid(generator: impl Into<String>, uuid: Uuid) -> Result<Self> {
        Ok(Self {
            metadata: ObjectMetadata::new(generator)?,
            geometries: Registry::new(),
            materials: Registry::new(),
            object: Object3D::with_kind(ObjectKind::Scene(SceneSettings::default()), uuid),
            user_data: UserData::new(),
        })
    }

    /// Register a geometry unless one with the same identifier exists.
    pub fn add_geometry(&mut self, geometry: impl Into<Geometry>) -> bool {
        self.geometries.insert(geometry.into())
    }

    /// Register a material unless one with the same identifier exists.
    pub fn add_material(&mut self, material: impl Into<Material>) -> bool {
        self.materials.insert(material.into())
    }

    pub fn has_geometry(&self, uuid: &str) -> bool {
        self.geometries.contains(uuid)
    }

    pub fn has_material(&self, uuid: &str) -> bool {
        self.materials.contains(uuid)
    }

    pub fn geometries(&self) -> &Registry<Geometry> {
        &self.geometries
    }

    pub fn materials(&self) -> &Registry<Material> {
        &self.materials
    }

    /// Root node.
    pub fn object(&self) -> &Object3D {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut Object3D {
        &mut self.object
    }

    /// Replace the root node, returning the previous one.
    pub fn set_object(&mut self, object: Object3D) -> Object3D {
        std::mem::replace(&mut self.object, object)
    }

    /// Flatten the root's hierarchy, see [`Object3D::optimize`].
    ///
    /// With `aggressive`, an invisible root holding a single child is then
    /// replaced by that child, repeatedly.
    pub fn optimize(&mut self, aggressive: bool) -> &mut Self {
        self.object.optimize();
        if aggressive {
            while self.object.is_invisible() && self.object.children().len() == 1 {
                let Some(child) = self.object.take_children().into_iter().next() else {
                    break;
                };
                debug!(old = %self.object.uuid(), new = %child.uuid(), "collapsed root");
                self.object = child;
            }
        }
        self
    }
}
