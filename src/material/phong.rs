//! Blinn-Phong material for shiny surfaces with specular highlights.

use serde::{Deserialize, Serialize};

use super::MaterialBase;
use crate::core::{impl_identity_eq, Identified, Uuid};
use crate::util::Color;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeshPhongMaterial {
    #[serde(flatten)]
    pub base: MaterialBase,
    #[serde(default = "white")]
    pub color: Color,
    #[serde(default = "white")]
    pub ambient: Color,
    /// Solid color unaffected by lighting.
    #[serde(default = "default_emissive")]
    pub emissive: Color,
    /// Color of the shine.
    #[serde(default = "default_specular")]
    pub specular: Color,
    /// Sharpness of the highlight.
    #[serde(default = "default_shininess")]
    pub shininess: i32,
    #[serde(default)]
    pub wireframe: bool,
}

fn white() -> Color {
    Color::WHITE
}

fn default_emissive() -> Color {
    Color::from_packed(0x000001)
}

fn default_specular() -> Color {
    Color::from_packed(0x111111)
}

fn default_shininess() -> i32 {
    30
}

impl MeshPhongMaterial {
    pub const TYPE: &'static str = "MeshPhongMaterial";

    pub fn new() -> Self {
        Self::with_uuid(Uuid::generate())
    }

    pub fn with_uuid(uuid: Uuid) -> Self {
        Self {
            base: MaterialBase::with_uuid(uuid),
            color: white(),
            ambient: white(),
            emissive: default_emissive(),
            specular: default_specular(),
            shininess: default_shininess(),
            wireframe: false,
        }
    }
}

impl Default for MeshPhongMaterial {
    fn default() -> Self {
        Self::new()
    }
}

impl Identified for MeshPhongMaterial {
    fn uuid(&self) -> &Uuid {
        self.base.uuid()
    }
}

impl_identity_eq!(MeshPhongMaterial);
