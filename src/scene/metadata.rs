//! Document header and output options.

use serde::{Deserialize, Serialize};

use crate::util::{Error, Result};

/// Format name written to `metadata.type`.
pub const FORMAT_TYPE: &str = "Object";

/// Format version written to `metadata.version`.
pub const FORMAT_VERSION: &str = "4.3";

/// Generator string naming this library and its build stamp.
pub fn default_generator() -> String {
    let date = option_env!("THREEJS_SCENE_BUILD_DATE").unwrap_or("unknown");
    let time = option_env!("THREEJS_SCENE_BUILD_TIME").unwrap_or("unknown");
    format!(
        "threejs-scene {} (built {} {})",
        env!("CARGO_PKG_VERSION"),
        date,
        time
    )
}

/// The `metadata` block at the top of every document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    /// Name of the tool that produced the document.
    pub generator: String,
    #[serde(rename = "type", default = "format_type")]
    pub format_type: String,
    #[serde(default = "format_version")]
    pub version: String,
}

fn format_type() -> String {
    FORMAT_TYPE.to_string()
}

fn format_version() -> String {
    FORMAT_VERSION.to_string()
}

impl ObjectMetadata {
    /// Metadata for the current format. Fails on a blank generator.
    pub fn new(generator: impl Into<String>) -> Result<Self> {
        let generator = generator.into();
        if generator.trim().is_empty() {
            return Err(Error::invalid_argument("generator must not be blank"));
        }
        Ok(Self {
            generator,
            format_type: format_type(),
            version: format_version(),
        })
    }
}

impl Default for ObjectMetadata {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            format_type: format_type(),
            version: format_version(),
        }
    }
}

/// Output formatting of JSON documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Indented, one field per line.
    #[default]
    Pretty,
    /// Single line, no whitespace.
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generator() {
        let g = default_generator();
        assert!(g.starts_with("threejs-scene "));
        assert!(g.contains(env!("CARGO_PKG_VERSION")));
        assert!(g.contains("(built "));
    }

    #[test]
    fn test_new_rejects_blank() {
        assert!(matches!(ObjectMetadata::new("  "), Err(Error::InvalidArgument(_))));
        let m = ObjectMetadata::new("exporter 1.0").unwrap();
        assert_eq!(m.format_type, "Object");
        assert_eq!(m.version, "4.3");
    }

    #[test]
    fn test_layout() {
        let m = ObjectMetadata::new("gen").unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"generator": "gen", "type": "Object", "version": "4.3"})
        );
    }
}
