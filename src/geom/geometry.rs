//! Base geometry: explicit vertices, faces, normals, colors and UVs.

use serde::{Deserialize, Serialize};

use crate::core::{impl_identity_eq, Identified, Uuid};
use crate::util::{Color, Vector3};

/// Geometry payload written under the `data` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeometryData {
    pub cast_shadow: bool,
    /// Vertex colors, matching number and order of vertices.
    pub colors: Vec<Color>,
    pub double_sided: bool,
    /// Face definitions as a flat index list.
    pub faces: Vec<u32>,
    pub normals: Vec<f64>,
    pub receive_shadow: bool,
    pub scale: f64,
    pub uvs: Vec<f64>,
    /// Flat `x, y, z` vertex positions.
    pub vertices: Vec<f64>,
    pub visible: bool,
}

impl Default for GeometryData {
    fn default() -> Self {
        Self {
            cast_shadow: true,
            colors: Vec::new(),
            double_sided: true,
            faces: Vec::new(),
            normals: Vec::new(),
            receive_shadow: false,
            scale: 1.0,
            uvs: Vec::new(),
            vertices: Vec::new(),
            visible: true,
        }
    }
}

/// The plain `Geometry` variant, accumulating raw vertex data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BaseGeometry {
    #[serde(default)]
    uuid: Uuid,
    #[serde(default)]
    data: GeometryData,
}

impl BaseGeometry {
    pub const TYPE: &'static str = "Geometry";

    pub fn new() -> Self {
        Self::with_uuid(Uuid::generate())
    }

    pub fn with_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            data: GeometryData::default(),
        }
    }

    pub fn data(&self) -> &GeometryData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut GeometryData {
        &mut self.data
    }

    /// Append a vertex position.
    pub fn add_point(&mut self, vertex: Vector3) {
        self.add_point_xyz(vertex.x as f64, vertex.y as f64, vertex.z as f64);
    }

    pub fn add_point_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.data.vertices.extend_from_slice(&[x, y, z]);
    }

    /// Append a face given by its vertex indices.
    pub fn add_face(&mut self, indices: &[u32]) {
        self.data.faces.extend_from_slice(indices);
    }

    pub fn add_normal(&mut self, x: f64, y: f64, z: f64) {
        self.data.normals.extend_from_slice(&[x, y, z]);
    }

    pub fn add_uv(&mut self, u: f64, v: f64) {
        self.data.uvs.extend_from_slice(&[u, v]);
    }

    pub fn add_color(&mut self, color: Color) {
        self.data.colors.push(color);
    }

    /// Number of complete `x, y, z` vertices.
    pub fn vertex_count(&self) -> usize {
        self.data.vertices.len() / 3
    }
}

impl Default for BaseGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl Identified for BaseGeometry {
    fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}

impl_identity_eq!(BaseGeometry);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let mut g = BaseGeometry::new();
        g.add_point(Vector3::new(0, 0, 0));
        g.add_point(Vector3::new(1000, 0, 0));
        g.add_point_xyz(0.0, 1000.0, 0.0);
        g.add_face(&[0, 1, 2]);
        g.add_normal(0.0, 0.0, 1.0);
        g.add_uv(0.5, 0.5);
        g.add_color(Color::WHITE);

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.data().vertices, [0.0, 0.0, 0.0, 1000.0, 0.0, 0.0, 0.0, 1000.0, 0.0]);
        assert_eq!(g.data().faces, [0, 1, 2]);
        assert_eq!(g.data().uvs, [0.5, 0.5]);
        assert_eq!(g.data().colors, [Color::WHITE]);
    }

    #[test]
    fn test_data_defaults() {
        let data = GeometryData::default();
        assert!(data.cast_shadow);
        assert!(data.double_sided);
        assert!(!data.receive_shadow);
        assert!(data.visible);
        assert_eq!(data.scale, 1.0);
    }

    #[test]
    fn test_data_json_keys() {
        let json = serde_json::to_value(GeometryData::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "castShadow", "colors", "doubleSided", "faces", "normals",
            "receiveShadow", "scale", "uvs", "vertices", "visible",
        ] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
    }

    #[test]
    fn test_identity_ignores_payload() {
        let id = Uuid::parse("geo-1").unwrap();
        let a = BaseGeometry::with_uuid(id.clone());
        let mut b = BaseGeometry::with_uuid(id);
        b.add_point_xyz(1.0, 2.0, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, BaseGeometry::new());
    }
}
