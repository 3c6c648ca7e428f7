//! Insertion-ordered, identifier-deduplicated entity collection.
//!
//! Backs the geometry and material registries of a scene and the child set
//! of every object. Inserting an entity whose identifier is already present
//! is a no-op: the first instance wins.

use super::identity::{Identified, Uuid, UuidRef};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Ordered set of identity entities keyed by [`Uuid`].
#[derive(Clone)]
pub struct Registry<T> {
    entries: IndexMap<Uuid, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: Identified> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless an entry with the same identifier exists.
    ///
    /// Returns `true` when the entity was added.
    pub fn insert(&mut self, item: T) -> bool {
        if self.entries.contains_key(item.uuid()) {
            tracing::trace!(uuid = %item.uuid(), "duplicate identifier ignored");
            return false;
        }
        self.entries.insert(item.uuid().clone(), item);
        true
    }

    /// Insert like [`insert`](Self::insert) and return the stored entry,
    /// which is the earlier one when the identifier was already present.
    pub fn get_or_insert(&mut self, item: T) -> &mut T {
        match self.entries.entry(item.uuid().clone()) {
            Entry::Occupied(entry) => {
                tracing::trace!(uuid = %entry.key(), "duplicate identifier ignored");
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(item),
        }
    }

    /// Check for an entry with the given identifier (case-insensitive).
    pub fn contains(&self, uuid: &str) -> bool {
        self.entries.contains_key(&UuidRef(uuid))
    }

    pub fn get(&self, uuid: &str) -> Option<&T> {
        self.entries.get(&UuidRef(uuid))
    }

    pub fn get_mut(&mut self, uuid: &str) -> Option<&mut T> {
        self.entries.get_mut(&UuidRef(uuid))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First inserted entry.
    pub fn first(&self) -> Option<&T> {
        self.entries.first().map(|(_, v)| v)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> + ExactSizeIterator {
        self.entries.values_mut()
    }
}

impl<T: Identified> Extend<T> for Registry<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Identified> FromIterator<T> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<T> IntoIterator for Registry<T> {
    type Item = T;
    type IntoIter = indexmap::map::IntoValues<Uuid, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, Uuid, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl<T: fmt::Debug> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.values()).finish()
    }
}

impl<T: Serialize> Serialize for Registry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for item in self.entries.values() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Registry<T>
where
    T: Identified + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegistryVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for RegistryVisitor<T>
        where
            T: Identified + Deserialize<'de>,
        {
            type Value = Registry<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array of identified entities")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut registry = Registry::new();
                while let Some(item) = seq.next_element::<T>()? {
                    registry.insert(item);
                }
                Ok(registry)
            }
        }

        deserializer.deserialize_seq(RegistryVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct Item {
        uuid: Uuid,
        label: String,
    }

    impl Identified for Item {
        fn uuid(&self) -> &Uuid {
            &self.uuid
        }
    }

    fn item(id: &str, label: &str) -> Item {
        Item {
            uuid: Uuid::parse(id).unwrap(),
            label: label.into(),
        }
    }

    #[test]
    fn test_first_write_wins() {
        let mut reg = Registry::new();
        assert!(reg.insert(item("a", "first")));
        assert!(!reg.insert(item("A", "second")));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("a").unwrap().label, "first");
    }

    #[test]
    fn test_get_or_insert_returns_stored() {
        let mut reg = Registry::new();
        reg.get_or_insert(item("k", "first")).label.push('!');
        let stored = reg.get_or_insert(item("K", "second"));
        assert_eq!(stored.label, "first!");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let reg: Registry<Item> = ["c", "a", "b", "a"]
            .into_iter()
            .map(|id| item(id, id))
            .collect();
        let ids: Vec<&str> = reg.iter().map(|i| i.uuid.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_contains_case_insensitive() {
        let mut reg = Registry::new();
        reg.insert(item("Mixed-Case", "x"));
        assert!(reg.contains("mixed-case"));
        assert!(reg.contains("MIXED-CASE"));
        assert!(!reg.contains("other"));
    }

    #[test]
    fn test_json_array_dedups_on_read() {
        let json = r#"[{"uuid":"x","label":"1"},{"uuid":"y","label":"2"},{"uuid":"x","label":"3"}]"#;
        let reg: Registry<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("x").unwrap().label, "1");

        let out = serde_json::to_value(&reg).unwrap();
        assert_eq!(out.as_array().unwrap().len(), 2);
    }
}
