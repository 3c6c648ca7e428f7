//! Fields shared by every material.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{impl_identity_eq, Identified, Uuid};
use crate::util::{Error, Result};

/// Common material fields; also the layout of the plain `"Material"` type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialBase {
    #[serde(default)]
    uuid: Uuid,
    /// Optional, not necessarily unique name.
    #[serde(default)]
    pub name: String,
    #[serde(default = "opaque", deserialize_with = "deserialize_opacity")]
    opacity: f64,
    /// Whether `opacity` is honored by the renderer.
    #[serde(default)]
    pub transparent: bool,
}

fn opaque() -> f64 {
    1.0
}

fn check_opacity(opacity: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(Error::invalid_argument(format!(
            "opacity must be between 0 and 1, got {}",
            opacity
        )));
    }
    Ok(opacity)
}

fn deserialize_opacity<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    let opacity = f64::deserialize(deserializer)?;
    check_opacity(opacity).map_err(serde::de::Error::custom)
}

impl MaterialBase {
    pub const TYPE: &'static str = "Material";

    pub fn new() -> Self {
        Self::with_uuid(Uuid::generate())
    }

    pub fn with_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            name: String::new(),
            opacity: 1.0,
            transparent: false,
        }
    }

    /// Opacity in `0.0..=1.0`, `1.0` being fully opaque.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Fails with `InvalidArgument` outside `0.0..=1.0`. Decoding applies
    /// the same bound.
    pub fn set_opacity(&mut self, opacity: f64) -> Result<()> {
        self.opacity = check_opacity(opacity)?;
        Ok(())
    }
}

impl Default for MaterialBase {
    fn default() -> Self {
        Self::new()
    }
}

impl Identified for MaterialBase {
    fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}

impl_identity_eq!(MaterialBase);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_range() {
        let mut m = MaterialBase::new();
        assert_eq!(m.opacity(), 1.0);
        m.set_opacity(0.25).unwrap();
        assert_eq!(m.opacity(), 0.25);
        assert!(matches!(m.set_opacity(1.5), Err(Error::InvalidArgument(_))));
        assert!(m.set_opacity(-0.1).is_err());
        assert!(m.set_opacity(f64::NAN).is_err());
        assert_eq!(m.opacity(), 0.25);
    }

    #[test]
    fn test_defaults_on_decode() {
        let m: MaterialBase = serde_json::from_str(r#"{"uuid":"m"}"#).unwrap();
        assert_eq!(m.name, "");
        assert_eq!(m.opacity(), 1.0);
        assert!(!m.transparent);
    }

    #[test]
    fn test_decode_checks_opacity() {
        let m: MaterialBase = serde_json::from_str(r#"{"uuid":"m","opacity":0.25}"#).unwrap();
        assert_eq!(m.opacity(), 0.25);
        let err = serde_json::from_str::<MaterialBase>(r#"{"uuid":"m","opacity":5}"#).unwrap_err();
        assert!(err.to_string().contains("opacity must be between 0 and 1"));
        assert!(serde_json::from_str::<MaterialBase>(r#"{"uuid":"m","opacity":-1}"#).is_err());
    }
}
