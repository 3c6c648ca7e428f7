//! JSON text input and output.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::{JsonStyle, ObjectScene};
use crate::core::{Registry, TypeRegistry};
use crate::geom::Geometry;
use crate::material::Material;
use crate::util::Result;

impl ObjectScene {
    /// Encode the whole document.
    pub fn to_json(&self, style: JsonStyle) -> Result<String> {
        let text = match style {
            JsonStyle::Pretty => serde_json::to_string_pretty(self)?,
            JsonStyle::Compact => serde_json::to_string(self)?,
        };
        Ok(text)
    }

    /// Decode a document. Unknown `type` tags degrade to base layouts.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a document, dispatching geometries and materials through the
    /// given registries instead of the shared ones.
    ///
    /// Nodes under `object` still decode through the shared object registry.
    pub fn from_json_with(
        text: &str,
        geometries: &TypeRegistry<Geometry>,
        materials: &TypeRegistry<Material>,
    ) -> Result<Self> {
        let mut doc: Value = serde_json::from_str(text)?;
        let geometry_values = take_array(&mut doc, "geometries")?;
        let material_values = take_array(&mut doc, "materials")?;

        let mut scene: Self = serde_json::from_value(doc)?;
        scene.geometries = geometry_values
            .into_iter()
            .map(|v| geometries.decode(v))
            .collect::<Result<Registry<_>>>()?;
        scene.materials = material_values
            .into_iter()
            .map(|v| materials.decode(v))
            .collect::<Result<Registry<_>>>()?;
        Ok(scene)
    }

    pub fn write_to<W: Write>(&self, mut writer: W, style: JsonStyle) -> Result<()> {
        match style {
            JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, self)?,
            JsonStyle::Compact => serde_json::to_writer(&mut writer, self)?,
        }
        writer.flush()?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the document to a file, replacing any existing content.
    pub fn save(&self, path: impl AsRef<Path>, style: JsonStyle) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), ?style, "writing scene");
        self.write_to(BufWriter::new(File::create(path)?), style)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading scene");
        Self::read_from(BufReader::new(File::open(path)?))
    }
}

/// Remove a top-level array, treating a missing key or `null` as empty.
fn take_array(doc: &mut Value, key: &str) -> Result<Vec<Value>> {
    let value = doc.as_object_mut().and_then(|m| m.remove(key));
    match value {
        Some(value) => Ok(serde_json::from_value::<Option<Vec<Value>>>(value)?.unwrap_or_default()),
        None => Ok(Vec::new()),
    }
}

/// Pretty-printed JSON document.
impl fmt::Display for ObjectScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_json(JsonStyle::Pretty).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Identified, Uuid};
    use crate::geom::{self, BoxGeometry};
    use crate::material;
    use crate::util::Error;
    use serde_json::json;

    fn decode_sphere(value: Value) -> serde_json::Result<Geometry> {
        let uuid: Uuid = serde_json::from_value(value["uuid"].clone())?;
        let diameter = value["radius"].as_f64().unwrap_or(1.0) * 2.0;
        let boxed = BoxGeometry::with_uuid(uuid, diameter, diameter, diameter)
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(boxed.into())
    }

    #[test]
    fn test_styles() {
        let scene = ObjectScene::new("test").unwrap();
        let pretty = scene.to_json(JsonStyle::Pretty).unwrap();
        let compact = scene.to_json(JsonStyle::Compact).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));
        assert_eq!(scene.to_string(), pretty);
    }

    #[test]
    fn test_write_read_buffer() {
        let mut scene = ObjectScene::new("test").unwrap();
        scene.add_cube(1.0, 2.0, 3.0, None, None).unwrap();

        let mut buf = Vec::new();
        scene.write_to(&mut buf, JsonStyle::Compact).unwrap();
        let back = ObjectScene::read_from(buf.as_slice()).unwrap();
        assert_eq!(back.object().children().len(), 1);
        assert_eq!(back.geometries().len(), 1);
        assert_eq!(back.metadata, scene.metadata);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(ObjectScene::from_json("{"), Err(Error::Json(_))));
        assert!(matches!(ObjectScene::from_json("{}"), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_with_extended_registry() {
        let text = json!({
            "geometries": [
                {"uuid": "s", "type": "SphereGeometry", "radius": 2},
                {"uuid": "S", "type": "SphereGeometry", "radius": 9}
            ],
            "materials": [{"uuid": "m", "type": "MeshPhongMaterial"}],
            "object": {"uuid": "root", "type": "Scene"}
        })
        .to_string();

        let shared = ObjectScene::from_json(&text).unwrap();
        assert_eq!(shared.geometries().get("s").unwrap().type_name(), "Geometry");

        let mut geometries = geom::default_registry();
        geometries.register("SphereGeometry", decode_sphere);
        let scene = ObjectScene::from_json_with(&text, &geometries, material::registry()).unwrap();
        assert_eq!(scene.geometries().len(), 1);
        let sphere = scene.geometries().get("s").unwrap().as_box().unwrap();
        assert_eq!((sphere.width, sphere.uuid().as_str()), (4.0, "s"));
        assert_eq!(scene.materials().get("m").unwrap().type_name(), "MeshPhongMaterial");
        assert_eq!(scene.object().uuid().as_str(), "root");
    }

    #[test]
    fn test_from_json_with_missing_and_bad_sections() {
        let geometries = geom::registry();
        let materials = material::registry();

        let empty = r#"{"object": {"uuid": "root", "type": "Scene"}, "materials": null}"#;
        let scene = ObjectScene::from_json_with(empty, geometries, materials).unwrap();
        assert!(scene.geometries().is_empty() && scene.materials().is_empty());

        let bad = r#"{"object": {"uuid": "root", "type": "Scene"}, "geometries": 3}"#;
        assert!(matches!(ObjectScene::from_json_with(bad, geometries, materials), Err(Error::Json(_))));
        assert!(matches!(ObjectScene::from_json_with("[]", geometries, materials), Err(Error::Json(_))));
    }
}
