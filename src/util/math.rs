//! Math types for scene transforms.
//!
//! [`Vector3`] is the integer coordinate triple used for object position,
//! scale and up vectors. Matrix composition goes through `glam`.

pub use glam::{DMat4, DQuat, DVec3};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer 3D vector.
///
/// Equality and hashing use all three components. Ordering is lexicographic:
/// X first, then Y, then Z.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Vector3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Unit scale on every axis.
    pub const ONE: Self = Self::new(1, 1, 1);

    /// Default "up" direction (+Y).
    pub const UP: Self = Self::new(0, 1, 0);

    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Convert to a double precision glam vector.
    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i64, i64, i64)> for Vector3 {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i64; 3]> for Vector3 {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Compose the local 4x4 matrix from scale and position, column-major.
///
/// Rotation is always identity.
pub fn compose_matrix(scale: Vector3, position: Vector3) -> [f64; 16] {
    DMat4::from_scale_rotation_translation(
        scale.as_dvec3(),
        DQuat::IDENTITY,
        position.as_dvec3(),
    )
    .to_cols_array()
}
