//! Reference consistency check.

use std::fmt;

use super::ObjectScene;
use crate::core::Identified;
use crate::object::Object3D;
use crate::util::{Error, Result};

/// A geometry or material reference with no matching registry entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingReference {
    /// Identifier of the referencing object.
    pub object: String,
    /// `"geometry"` or `"material"`.
    pub kind: &'static str,
    /// The unresolved identifier.
    pub target: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} {}", self.object, self.kind, self.target)
    }
}

impl From<DanglingReference> for Error {
    fn from(r: DanglingReference) -> Self {
        Error::DanglingReference {
            object: r.object,
            kind: r.kind,
            target: r.target,
        }
    }
}

impl ObjectScene {
    /// Every unresolved geometry or material reference in the tree, root
    /// included, in depth-first order.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut out = Vec::new();
        for node in std::iter::once(&self.object).chain(self.object.descendants()) {
            self.check_reference(node, "geometry", node.geometry.as_deref(), &mut out);
            self.check_reference(node, "material", node.material.as_deref(), &mut out);
        }
        out
    }

    /// Fail on the first unresolved reference.
    pub fn validate(&self) -> Result<()> {
        match self.dangling_references().into_iter().next() {
            Some(reference) => Err(reference.into()),
            None => Ok(()),
        }
    }

    fn check_reference(
        &self,
        node: &Object3D,
        kind: &'static str,
        target: Option<&str>,
        out: &mut Vec<DanglingReference>,
    ) {
        let Some(target) = target.filter(|t| !t.trim().is_empty()) else {
            return;
        };
        let resolved = match kind {
            "geometry" => self.has_geometry(target),
            _ => self.has_material(target),
        };
        if !resolved {
            out.push(DanglingReference {
                object: node.uuid().to_string(),
                kind,
                target: target.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Uuid;
    use crate::geom::BoxGeometry;

    #[test]
    fn test_clean_scene() {
        let mut scene = ObjectScene::new("test").unwrap();
        scene.add_cube(1.0, 1.0, 1.0, None, None).unwrap();
        assert!(scene.dangling_references().is_empty());
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_reports_missing_entries() {
        let mut scene = ObjectScene::new("test").unwrap();
        scene.add_geometry(BoxGeometry::with_uuid(Uuid::parse("g1").unwrap(), 1.0, 1.0, 1.0).unwrap());

        let mut group = Object3D::group();
        group.add_child(
            Object3D::with_uuid("Mesh", Uuid::parse("m").unwrap())
                .with_geometry("G1")
                .with_material("nope"),
        );
        scene.object_mut().add_child(group);
        scene
            .object_mut()
            .add_child(Object3D::with_uuid("Mesh", Uuid::parse("n").unwrap()).with_geometry("gone"));

        let refs = scene.dangling_references();
        assert_eq!(
            refs,
            vec![
                DanglingReference { object: "m".into(), kind: "material", target: "nope".into() },
                DanglingReference { object: "n".into(), kind: "geometry", target: "gone".into() },
            ]
        );

        let err = scene.validate().unwrap_err();
        assert!(matches!(err, Error::DanglingReference { kind: "material", .. }));
    }
}
