//! Scene documents.
//!
//! [`ObjectScene`] is the top-level JSON document:
//!
//! ```text
//! {
//!   "metadata":   { "generator", "type": "Object", "version": "4.3" },
//!   "geometries": [ ... ],
//!   "materials":  [ ... ],
//!   "object":     { ... root node ... },
//!   "userData":   { ... }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use threejs_scene::scene::{JsonStyle, ObjectScene};
//!
//! let mut scene = ObjectScene::new("my exporter").unwrap();
//! scene.add_cube(1.0, 1.0, 1.0, None, None).unwrap();
//! let json = scene.to_json(JsonStyle::Compact).unwrap();
//! assert!(json.contains("BoxGeometry"));
//! ```

mod builder;
mod io;
mod merge;
mod metadata;
mod object_scene;
mod validate;

pub use metadata::{default_generator, JsonStyle, ObjectMetadata, FORMAT_TYPE, FORMAT_VERSION};
pub use object_scene::ObjectScene;
pub use validate::DanglingReference;
