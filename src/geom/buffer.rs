//! Typed-array geometry representation.

use crate::util::{Error, Result};

/// Placeholder for the `BufferGeometry` representation.
///
/// Only the explicit [`BaseGeometry`](super::BaseGeometry) and parametric
/// [`BoxGeometry`](super::BoxGeometry) layouts are implemented, so
/// construction always fails with [`Error::NotSupported`].
#[derive(Debug)]
pub struct BufferGeometry {
    _private: (),
}

impl BufferGeometry {
    pub const TYPE: &'static str = "BufferGeometry";

    pub fn new() -> Result<Self> {
        Err(Error::not_supported(
            "BufferGeometry is not implemented, use Geometry or BoxGeometry",
        ))
    }
}
