//! Physically based metallic-roughness material.

use serde::{Deserialize, Serialize};

use super::MaterialBase;
use crate::core::{impl_identity_eq, Identified, Uuid};
use crate::util::Color;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeshStandardMaterial {
    #[serde(flatten)]
    pub base: MaterialBase,
    #[serde(default = "default_color")]
    pub color: Color,
    /// 0.0 is a mirror reflection, 1.0 fully diffuse.
    #[serde(default)]
    pub roughness: f64,
    /// 0.0 for dielectrics such as wood or stone, 1.0 for metals.
    #[serde(default)]
    pub metalness: f64,
    #[serde(default = "default_emissive")]
    pub emissive: Color,
}

fn default_color() -> Color {
    Color::FIREBRICK
}

fn default_emissive() -> Color {
    Color::from_packed(0x252539)
}

impl MeshStandardMaterial {
    pub const TYPE: &'static str = "MeshStandardMaterial";

    pub fn new() -> Self {
        Self::with_uuid(Uuid::generate())
    }

    pub fn with_uuid(uuid: Uuid) -> Self {
        Self {
            base: MaterialBase::with_uuid(uuid),
            color: default_color(),
            roughness: 0.0,
            metalness: 0.0,
            emissive: default_emissive(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for MeshStandardMaterial {
    fn default() -> Self {
        Self::new()
    }
}

impl Identified for MeshStandardMaterial {
    fn uuid(&self) -> &Uuid {
        self.base.uuid()
    }
}

impl_identity_eq!(MeshStandardMaterial);
