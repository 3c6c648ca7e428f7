//! Parametric box geometry.

use serde::{Deserialize, Serialize};

use crate::core::{impl_identity_eq, Identified, Uuid};
use crate::util::{Error, Result};

/// Rectangular cuboid described by its dimensions only; carries no vertex data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoxGeometry {
    #[serde(default)]
    uuid: Uuid,
    /// Length of the edges parallel to the X axis.
    #[serde(default = "unit")]
    pub width: f64,
    /// Length of the edges parallel to the Y axis.
    #[serde(default = "unit")]
    pub height: f64,
    /// Length of the edges parallel to the Z axis.
    #[serde(default = "unit")]
    pub depth: f64,
}

fn unit() -> f64 {
    1.0
}

impl BoxGeometry {
    pub const TYPE: &'static str = "BoxGeometry";

    /// Box with a fresh identifier. Fails on NaN or infinite dimensions.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self> {
        Self::with_uuid(Uuid::generate(), width, height, depth)
    }

    pub fn with_uuid(uuid: Uuid, width: f64, height: f64, depth: f64) -> Result<Self> {
        Ok(Self {
            uuid,
            width: finite(width, "width")?,
            height: finite(height, "height")?,
            depth: finite(depth, "depth")?,
        })
    }
}

fn finite(value: f64, name: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_argument(format!(
            "box {} must be a finite number, got {}",
            name, value
        )))
    }
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self {
            uuid: Uuid::generate(),
            width: unit(),
            height: unit(),
            depth: unit(),
        }
    }
}

impl Identified for BoxGeometry {
    fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}

impl_identity_eq!(BoxGeometry);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite_dimensions() {
        for (w, h, d) in [(f64::NAN, 1.0, 1.0), (1.0, f64::INFINITY, 1.0), (1.0, 1.0, f64::NEG_INFINITY)] {
            assert!(matches!(BoxGeometry::new(w, h, d), Err(Error::InvalidArgument(_))));
        }
        let b = BoxGeometry::new(2.0, 0.5, 3.0).unwrap();
        assert_eq!((b.width, b.height, b.depth), (2.0, 0.5, 3.0));
    }

    #[test]
    fn test_default_is_unit_cube() {
        let b = BoxGeometry::default();
        assert_eq!((b.width, b.height, b.depth), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_missing_dimensions_default_to_one() {
        let b: BoxGeometry = serde_json::from_str(r#"{"uuid":"b","width":3}"#).unwrap();
        assert_eq!((b.width, b.height, b.depth), (3.0, 1.0, 1.0));
        assert_eq!(b.uuid().as_str(), "b");
    }
}
