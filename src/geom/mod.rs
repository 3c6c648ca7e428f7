//! Geometry family.
//!
//! - [`BaseGeometry`] - `"Geometry"`, explicit vertices/faces in a `data` block
//! - [`BoxGeometry`] - `"BoxGeometry"`, parametric width/height/depth
//! - [`BufferGeometry`] - not implemented, construction fails
//! - [`VertexSet`] - vertex to index deduplication helper
//!
//! Decoding dispatches on the `type` field through [`registry`]; unknown
//! geometry types decode as [`BaseGeometry`].

use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::{impl_identity_eq, Identified, TypeRegistry, Uuid};

mod box_geometry;
mod buffer;
mod geometry;
mod vertex_set;

pub use box_geometry::BoxGeometry;
pub use buffer::BufferGeometry;
pub use geometry::{BaseGeometry, GeometryData};
pub use vertex_set::VertexSet;

/// Any geometry that can live in a scene's geometry registry.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    #[serde(rename = "Geometry")]
    Base(BaseGeometry),
    #[serde(rename = "BoxGeometry")]
    Box(BoxGeometry),
}

impl Geometry {
    /// Discriminator written to the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Base(_) => BaseGeometry::TYPE,
            Self::Box(_) => BoxGeometry::TYPE,
        }
    }

    /// Raw vertex data, present only on the base variant.
    pub fn data(&self) -> Option<&GeometryData> {
        match self {
            Self::Base(g) => Some(g.data()),
            Self::Box(_) => None,
        }
    }

    pub fn as_box(&self) -> Option<&BoxGeometry> {
        match self {
            Self::Box(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_base(&self) -> Option<&BaseGeometry> {
        match self {
            Self::Base(g) => Some(g),
            _ => None,
        }
    }
}

impl Identified for Geometry {
    fn uuid(&self) -> &Uuid {
        match self {
            Self::Base(g) => g.uuid(),
            Self::Box(b) => b.uuid(),
        }
    }
}

impl_identity_eq!(Geometry);

impl From<BaseGeometry> for Geometry {
    fn from(g: BaseGeometry) -> Self {
        Self::Base(g)
    }
}

impl From<BoxGeometry> for Geometry {
    fn from(b: BoxGeometry) -> Self {
        Self::Box(b)
    }
}

/// Decode the base `Geometry` layout.
pub fn decode_base(value: Value) -> serde_json::Result<Geometry> {
    serde_json::from_value(value).map(Geometry::Base)
}

/// Decode the `BoxGeometry` layout.
pub fn decode_box(value: Value) -> serde_json::Result<Geometry> {
    serde_json::from_value(value).map(Geometry::Box)
}

/// Fresh registry with the built-in geometry types, ready to extend.
pub fn default_registry() -> TypeRegistry<Geometry> {
    TypeRegistry::new("Geometry", decode_base)
        .with(BaseGeometry::TYPE, decode_base)
        .with(BoxGeometry::TYPE, decode_box)
}

/// Shared registry used by `Deserialize for Geometry`.
pub fn registry() -> &'static TypeRegistry<Geometry> {
    static REGISTRY: OnceLock<TypeRegistry<Geometry>> = OnceLock::new();
    REGISTRY.get_or_init(default_registry)
}

/// Always dispatches through [`registry()`]; decode with an extended
/// registry through [`TypeRegistry::decode`] or `ObjectScene::from_json_with`.
impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        registry().deserialize(deserializer)
    }
}
