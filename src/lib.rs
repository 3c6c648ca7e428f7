//! # threejs-scene
//!
//! Build, read and rewrite three.js JSON Object Scene documents
//! (format `"Object"`, version 4.3).
//!
//! A document holds a scene graph of [`Object3D`](object::Object3D) nodes
//! plus deduplicated registries of the geometries and materials those nodes
//! refer to by identifier.
//!
//! ## Modules
//!
//! - [`util`] - Errors, integer vectors, packed colors, matrix composition
//! - [`core`] - Identifiers, dedup registries, user data, `type` dispatch
//! - [`geom`] - Geometry variants (`Geometry`, `BoxGeometry`)
//! - [`material`] - Material variants (`Material`, `MeshPhongMaterial`, `MeshStandardMaterial`)
//! - [`object`] - Scene graph nodes, traversal and hierarchy flattening
//! - [`scene`] - The document container, merge, builders and JSON I/O
//!
//! ## Example
//!
//! ```
//! use threejs_scene::prelude::*;
//!
//! let mut scene = ObjectScene::new("example")?;
//! scene.add_cube(1.0, 1.0, 1.0, Some(Vector3::new(0, 2, 0)), Some(Color::WHITE))?;
//! scene.validate()?;
//!
//! let json = scene.to_json(JsonStyle::Pretty)?;
//! let back = ObjectScene::from_json(&json)?;
//! assert_eq!(back.object().children().len(), 1);
//! # Ok::<(), threejs_scene::Error>(())
//! ```

pub mod util;
pub mod core;
pub mod geom;
pub mod material;
pub mod object;
pub mod scene;

// Re-export commonly used types
pub use util::{Error, Result};
pub use scene::{JsonStyle, ObjectScene};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Color, Error, Result, Vector3};
    pub use crate::core::{Identified, Registry, Uuid, UserData};
    pub use crate::geom::{BaseGeometry, BoxGeometry, Geometry};
    pub use crate::material::{Material, MaterialBase, MeshPhongMaterial, MeshStandardMaterial};
    pub use crate::object::{Object3D, ObjectKind};
    pub use crate::scene::{JsonStyle, ObjectMetadata, ObjectScene};
}
