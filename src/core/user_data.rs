//! Free-form user data attached to objects and scenes.
//!
//! Stored as ordered string key-value pairs and written as a flat JSON
//! object (`"userData": { "key": "value" }`).

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

/// User data storage - key-value pairs of strings.
///
/// Uses SmallVec optimization for the common case of few entries.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserData {
    entries: SmallVec<[(String, String); 4]>,
}

impl UserData {
    /// Create empty user data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        for (k, v) in &mut self.entries {
            if k == &key {
                *v = value;
                return;
            }
        }
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a key and return its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl From<HashMap<String, String>> for UserData {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut data = Self::new();
        for (k, v) in iter {
            data.set(k, v);
        }
        data
    }
}

impl Serialize for UserData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UserData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UserDataVisitor;

        impl<'de> Visitor<'de> for UserDataVisitor {
            type Value = UserData;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of strings")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<UserData, E> {
                Ok(UserData::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<UserData, A::Error> {
                let mut data = UserData::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    data.set(k, v);
                }
                Ok(data)
            }
        }

        deserializer.deserialize_any(UserDataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_data_basic() {
        let mut data = UserData::new();
        data.set("revitId", "12345");
        data.set("category", "Walls");

        assert_eq!(data.get("revitId"), Some("12345"));
        assert_eq!(data.get("category"), Some("Walls"));
        assert_eq!(data.get("missing"), None);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_user_data_update() {
        let mut data = UserData::new();
        data.set("key", "value1");
        data.set("key", "value2");

        assert_eq!(data.get("key"), Some("value2"));
        assert_eq!(data.len(), 1);
        assert_eq!(data.remove("key").as_deref(), Some("value2"));
        assert!(data.is_empty());
    }

    #[test]
    fn test_user_data_json_keeps_order() {
        let data: UserData = [("z", "1"), ("a", "2"), ("m", "3")].into_iter().collect();
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2","m":"3"}"#);

        let back: UserData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_user_data_null_reads_empty() {
        let data: UserData = serde_json::from_str("null").unwrap();
        assert!(data.is_empty());
    }
}
