//! Polymorphic decoding by `type` discriminator.
//!
//! Each entity family (geometries, materials, objects) is written with a
//! `type` field naming its concrete variant. A [`TypeRegistry`] maps those
//! names to decoders. Unregistered names are not an error: they go through
//! the family's base-layout decoder, and callers that need strict checking
//! inspect the resolved variant afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Name of the discriminator field shared by all families.
pub const TYPE_FIELD: &str = "type";

/// Decoder for one concrete variant.
pub type DecodeFn<T> = fn(Value) -> serde_json::Result<T>;

/// Map from discriminator string to variant decoder, with a base fallback.
pub struct TypeRegistry<T> {
    family: &'static str,
    decoders: IndexMap<String, DecodeFn<T>>,
    fallback: DecodeFn<T>,
}

impl<T> TypeRegistry<T> {
    /// Create a registry whose unknown tags decode with `fallback`.
    pub fn new(family: &'static str, fallback: DecodeFn<T>) -> Self {
        Self {
            family,
            decoders: IndexMap::new(),
            fallback,
        }
    }

    /// Register (or replace) the decoder for a type name.
    ///
    /// The shared registries behind the `Deserialize` impls are fixed, so an
    /// extended registry only applies where it is passed explicitly.
    pub fn register(&mut self, type_name: impl Into<String>, decoder: DecodeFn<T>) -> &mut Self {
        self.decoders.insert(type_name.into(), decoder);
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, type_name: impl Into<String>, decoder: DecodeFn<T>) -> Self {
        self.register(type_name, decoder);
        self
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.decoders.contains_key(type_name)
    }

    /// Registered type names in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.decoders.keys().map(String::as_str)
    }

    /// Decode a JSON value, dispatching on its `type` field.
    pub fn decode_value(&self, value: Value) -> serde_json::Result<T> {
        let tag = value
            .get(TYPE_FIELD)
            .and_then(Value::as_str)
            .map(str::to_owned);

        match tag.as_deref().and_then(|t| self.decoders.get(t)) {
            Some(decode) => decode(value),
            None => {
                match tag.as_deref() {
                    Some(t) => tracing::warn!(
                        family = self.family,
                        type_name = t,
                        "unrecognized type, decoding with base layout"
                    ),
                    None => tracing::debug!(family = self.family, "missing type, decoding with base layout"),
                }
                (self.fallback)(value)
            }
        }
    }

    /// Decode a JSON value, wrapping failures in the crate error.
    pub fn decode(&self, value: Value) -> crate::Result<T> {
        Ok(self.decode_value(value)?)
    }

    /// Drive a serde deserializer through this registry.
    pub fn deserialize<'de, D: Deserializer<'de>>(&self, deserializer: D) -> Result<T, D::Error> {
        let value = Value::deserialize(deserializer)?;
        self.decode_value(value).map_err(serde::de::Error::custom)
    }
}
