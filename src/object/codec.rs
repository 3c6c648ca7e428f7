//! JSON layout of scene graph nodes.
//!
//! Nodes are written with their derived `matrix` and
//! `matrixAutoUpdate: false`. Those two fields are ignored when reading;
//! the transform always comes from `position` and `scale`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{registry, Object3D, ObjectKind, SceneSettings};
use crate::core::{Registry, Uuid, UserData, TYPE_FIELD};
use crate::material::Material;
use crate::util::Vector3;

impl Serialize for Object3D {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = self.id {
            map.serialize_entry("id", &id)?;
        }
        map.serialize_entry("uuid", &self.uuid)?;
        map.serialize_entry(TYPE_FIELD, self.type_name())?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("matrix", &self.matrix())?;
        map.serialize_entry("matrixAutoUpdate", &false)?;
        map.serialize_entry("children", &self.children)?;
        if let Some(geometry) = non_blank(&self.geometry) {
            map.serialize_entry("geometry", geometry)?;
        }
        if let Some(material) = non_blank(&self.material) {
            map.serialize_entry("material", material)?;
        }
        map.serialize_entry("userData", &self.user_data)?;
        map.serialize_entry("visible", &self.visible)?;
        map.serialize_entry("castShadow", &self.cast_shadow)?;
        map.serialize_entry("receiveShadow", &self.receive_shadow)?;
        map.serialize_entry("position", &self.position)?;
        map.serialize_entry("scale", &self.scale)?;
        map.serialize_entry("up", &self.up)?;

        if let ObjectKind::Scene(settings) = &self.kind {
            map.serialize_entry("autoUpdate", &settings.auto_update)?;
            if let Some(background) = &settings.background {
                map.serialize_entry("background", background)?;
            }
            if let Some(material) = &settings.override_material {
                map.serialize_entry("overrideMaterial", material)?;
            }
        }
        map.end()
    }
}

fn non_blank(reference: &Option<String>) -> Option<&str> {
    reference.as_deref().filter(|s| !s.trim().is_empty())
}

/// Always dispatches through the shared object registry, children included.
impl<'de> Deserialize<'de> for Object3D {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        registry().deserialize(deserializer)
    }
}

fn yes() -> bool {
    true
}

fn unit_scale() -> Vector3 {
    Vector3::ONE
}

fn up_axis() -> Vector3 {
    Vector3::UP
}

/// Union of every node layout. Scene-only fields are read by the scene decoder.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectLayout {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    uuid: Option<Uuid>,
    #[serde(rename = "type", default)]
    type_name: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    children: Registry<Object3D>,
    #[serde(default)]
    geometry: Option<String>,
    #[serde(default)]
    material: Option<String>,
    #[serde(default)]
    user_data: UserData,
    #[serde(default = "yes")]
    visible: bool,
    #[serde(default = "yes")]
    cast_shadow: bool,
    #[serde(default)]
    receive_shadow: bool,
    #[serde(default)]
    position: Vector3,
    #[serde(default = "unit_scale")]
    scale: Vector3,
    #[serde(default = "up_axis")]
    up: Vector3,
    #[serde(default = "yes")]
    auto_update: bool,
    #[serde(default)]
    background: Option<Value>,
    #[serde(default)]
    override_material: Option<Material>,
}

impl ObjectLayout {
    fn into_object(self, kind: impl FnOnce(Option<String>, SceneSettings) -> ObjectKind) -> Object3D {
        let settings = SceneSettings {
            auto_update: self.auto_update,
            background: self.background,
            override_material: self.override_material.map(Box::new),
        };
        let uuid = self.uuid.unwrap_or_else(|| {
            tracing::debug!("object without uuid, generating one");
            Uuid::generate()
        });

        Object3D {
            id: self.id,
            uuid,
            kind: kind(self.type_name, settings),
            name: self.name,
            children: self.children,
            geometry: self.geometry,
            material: self.material,
            user_data: self.user_data,
            visible: self.visible,
            cast_shadow: self.cast_shadow,
            receive_shadow: self.receive_shadow,
            position: self.position,
            scale: self.scale,
            up: self.up,
        }
    }
}

/// Decode the base layout, keeping the `type` text (`"Mesh"`, `"Object3D"`, ...).
pub fn decode_base(value: Value) -> serde_json::Result<Object3D> {
    let layout: ObjectLayout = serde_json::from_value(value)?;
    Ok(layout.into_object(|tag, _| {
        let tag = tag.filter(|t| !t.trim().is_empty());
        ObjectKind::Base(tag.unwrap_or_else(|| ObjectKind::OBJECT3D.to_string()))
    }))
}

pub fn decode_group(value: Value) -> serde_json::Result<Object3D> {
    let layout: ObjectLayout = serde_json::from_value(value)?;
    Ok(layout.into_object(|_, _| ObjectKind::Group))
}

pub fn decode_scene(value: Value) -> serde_json::Result<Object3D> {
    let layout: ObjectLayout = serde_json::from_value(value)?;
    Ok(layout.into_object(|_, settings| ObjectKind::Scene(settings)))
}
