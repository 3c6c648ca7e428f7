//! Material family.
//!
//! Materials describe surface appearance independently of any renderer.
//! Every variant embeds [`MaterialBase`] (uuid, name, opacity, transparent)
//! and is written with its `type` discriminator:
//!
//! - `"Material"` - [`MaterialBase`] alone
//! - `"MeshPhongMaterial"` - [`MeshPhongMaterial`]
//! - `"MeshStandardMaterial"` - [`MeshStandardMaterial`]
//!
//! Color fields are written as packed 24-bit integers. Unknown material
//! types decode as the plain `"Material"` layout.

use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::{impl_identity_eq, Identified, TypeRegistry, Uuid};

mod base;
mod phong;
mod standard;

pub use base::MaterialBase;
pub use phong::MeshPhongMaterial;
pub use standard::MeshStandardMaterial;

/// Any material that can live in a scene's material registry.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
pub enum Material {
    #[serde(rename = "Material")]
    Base(MaterialBase),
    #[serde(rename = "MeshPhongMaterial")]
    Phong(MeshPhongMaterial),
    #[serde(rename = "MeshStandardMaterial")]
    Standard(MeshStandardMaterial),
}

impl Material {
    /// Discriminator written to the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Base(_) => MaterialBase::TYPE,
            Self::Phong(_) => MeshPhongMaterial::TYPE,
            Self::Standard(_) => MeshStandardMaterial::TYPE,
        }
    }

    /// Shared fields of any variant.
    pub fn base(&self) -> &MaterialBase {
        match self {
            Self::Base(m) => m,
            Self::Phong(m) => &m.base,
            Self::Standard(m) => &m.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut MaterialBase {
        match self {
            Self::Base(m) => m,
            Self::Phong(m) => &mut m.base,
            Self::Standard(m) => &mut m.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }
}

impl Identified for Material {
    fn uuid(&self) -> &Uuid {
        self.base().uuid()
    }
}

impl_identity_eq!(Material);

impl From<MaterialBase> for Material {
    fn from(m: MaterialBase) -> Self {
        Self::Base(m)
    }
}

impl From<MeshPhongMaterial> for Material {
    fn from(m: MeshPhongMaterial) -> Self {
        Self::Phong(m)
    }
}

impl From<MeshStandardMaterial> for Material {
    fn from(m: MeshStandardMaterial) -> Self {
        Self::Standard(m)
    }
}

/// Decode the plain `Material` layout.
pub fn decode_base(value: Value) -> serde_json::Result<Material> {
    serde_json::from_value(value).map(Material::Base)
}

pub fn decode_phong(value: Value) -> serde_json::Result<Material> {
    serde_json::from_value(value).map(Material::Phong)
}

pub fn decode_standard(value: Value) -> serde_json::Result<Material> {
    serde_json::from_value(value).map(Material::Standard)
}

/// Fresh registry with the built-in material types, ready to extend.
pub fn default_registry() -> TypeRegistry<Material> {
    TypeRegistry::new("Material", decode_base)
        .with(MaterialBase::TYPE, decode_base)
        .with(MeshPhongMaterial::TYPE, decode_phong)
        .with(MeshStandardMaterial::TYPE, decode_standard)
}

/// Shared registry used by `Deserialize for Material`.
pub fn registry() -> &'static TypeRegistry<Material> {
    static REGISTRY: OnceLock<TypeRegistry<Material>> = OnceLock::new();
    REGISTRY.get_or_init(default_registry)
}

/// Always dispatches through [`registry()`]; decode with an extended
/// registry through [`TypeRegistry::decode`] or `ObjectScene::from_json_with`.
impl<'de> Deserialize<'de> for Material {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        registry().deserialize(deserializer)
    }
}
