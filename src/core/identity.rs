//! Entity identifiers.
//!
//! Every geometry, material and object carries a [`Uuid`]. Identity entities
//! compare and hash by identifier alone, and identifier comparison ignores
//! ASCII case. The original spelling is kept for output.

use crate::util::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque entity identifier.
#[derive(Clone, Serialize)]
#[serde(transparent)]
pub struct Uuid(String);

impl Uuid {
    /// Generate a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap a caller supplied identifier. Blank identifiers are rejected.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::invalid_argument("identifier must not be blank"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw identifier.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

fn hash_folded<H: Hasher>(s: &str, state: &mut H) {
    for b in s.bytes() {
        state.write_u8(b.to_ascii_lowercase());
    }
    state.write_u8(0xFF);
}

impl PartialEq for Uuid {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for Uuid {}

impl Hash for Uuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(&self.0, state);
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self.0)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

/// Borrowed identifier used for registry lookups without allocating.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UuidRef<'a>(pub &'a str);

impl Hash for UuidRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(self.0, state);
    }
}

impl indexmap::Equivalent<Uuid> for UuidRef<'_> {
    fn equivalent(&self, key: &Uuid) -> bool {
        key.matches(self.0)
    }
}

/// Anything identified by a [`Uuid`].
pub trait Identified {
    fn uuid(&self) -> &Uuid;
}

/// Derive `PartialEq`, `Eq` and `Hash` from the identifier alone.
macro_rules! impl_identity_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::core::Identified::uuid(self) == $crate::core::Identified::uuid(other)
                }
            }

            impl Eq for $ty {}

            impl std::hash::Hash for $ty {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    std::hash::Hash::hash($crate::core::Identified::uuid(self), state);
                }
            }
        )+
    };
}

pub(crate) use impl_identity_eq;
