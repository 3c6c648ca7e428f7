//! Core building blocks shared by every entity family.
//!
//! - [`Uuid`] / [`Identified`] - identity by identifier
//! - [`Registry`] - insertion-ordered, identifier-deduplicated collection
//! - [`UserData`] - ordered string map for `userData`
//! - [`TypeRegistry`] - `type` discriminator dispatch for decoding

mod identity;
mod registry;
mod type_registry;
mod user_data;

pub use identity::{Identified, Uuid};
pub(crate) use identity::impl_identity_eq;
pub use registry::Registry;
pub use type_registry::{DecodeFn, TypeRegistry, TYPE_FIELD};
pub use user_data::UserData;
