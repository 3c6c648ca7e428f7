//! Convenience builders.

use super::ObjectScene;
use crate::core::Identified;
use crate::geom::BoxGeometry;
use crate::material::MeshStandardMaterial;
use crate::object::Object3D;
use crate::util::{Color, Result, Vector3};

impl ObjectScene {
    /// Add a box mesh under the root.
    ///
    /// Registers a new [`BoxGeometry`] and a new [`MeshStandardMaterial`]
    /// (`color` defaults to firebrick), then attaches a shadow casting and
    /// receiving `"Mesh"` node that references both. Non-finite dimensions
    /// fail with `InvalidArgument` and leave the scene unchanged.
    pub fn add_cube(
        &mut self,
        width: f64,
        height: f64,
        depth: f64,
        position: Option<Vector3>,
        color: Option<Color>,
    ) -> Result<&Object3D> {
        let geometry = BoxGeometry::new(width, height, depth)?;
        let material = MeshStandardMaterial::new().with_color(color.unwrap_or(Color::FIREBRICK));

        let mut mesh = Object3D::mesh()
            .with_geometry(geometry.uuid())
            .with_material(material.uuid())
            .with_position(position.unwrap_or_default());
        mesh.cast_shadow = true;
        mesh.receive_shadow = true;

        self.add_geometry(geometry);
        self.add_material(material);
        Ok(self.object.attach_child(mesh))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Identified;
    use crate::scene::{JsonStyle, ObjectScene};
    use crate::util::{Color, Error, Vector3};

    #[test]
    fn test_add_cube() {
        let mut scene = ObjectScene::new("test").unwrap();
        let cube = scene.add_cube(2.0, 3.0, 4.0, Some(Vector3::new(1, 0, 0)), None).unwrap();
        let cube_uuid = cube.uuid().clone();
        let geometry = cube.geometry.clone().unwrap();
        let material = cube.material.clone().unwrap();
        assert_eq!(cube.type_name(), "Mesh");
        assert!(cube.cast_shadow && cube.receive_shadow);
        assert_eq!(cube.position, Vector3::new(1, 0, 0));

        let boxed = scene.geometries().get(&geometry).unwrap().as_box().unwrap();
        assert_eq!((boxed.width, boxed.height, boxed.depth), (2.0, 3.0, 4.0));
        assert!(scene.has_material(&material));
        assert!(scene.object().has_child(cube_uuid.as_str()));
        scene.validate().unwrap();
    }

    #[test]
    fn test_add_cube_fresh_entities() {
        let mut scene = ObjectScene::new("test").unwrap();
        scene.add_cube(1.0, 1.0, 1.0, None, Some(Color::WHITE)).unwrap();
        scene.add_cube(1.0, 1.0, 1.0, None, None).unwrap();
        assert_eq!(scene.geometries().len(), 2);
        assert_eq!(scene.materials().len(), 2);
        assert_eq!(scene.object().children().len(), 2);
    }

    #[test]
    fn test_add_cube_rejects_nan_and_keeps_scene_readable() {
        let mut scene = ObjectScene::new("test").unwrap();
        assert!(matches!(
            scene.add_cube(f64::NAN, 1.0, 1.0, None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(scene.geometries().is_empty());
        assert!(scene.materials().is_empty());
        assert!(scene.object().children().is_empty());

        scene.add_cube(1.0, 1.0, 1.0, None, None).unwrap();
        let text = scene.to_json(JsonStyle::Compact).unwrap();
        assert!(!text.contains("null"));
        assert_eq!(ObjectScene::from_json(&text).unwrap().geometries().len(), 1);
    }
}
