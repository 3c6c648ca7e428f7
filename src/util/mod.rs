//! Utility types for the scene library.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`Vector3`] - Integer coordinate triple
//! - [`Color`] - Packed 24-bit RGB color
//! - Matrix composition over `glam`

mod color;
mod error;
mod math;

pub use color::*;
pub use error::*;
pub use math::*;
