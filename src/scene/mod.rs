//! Value types handed to an external renderer, and the per-tick driver.

mod frame_loop;

pub use frame_loop::{FrameLoop, Renderer};

use slotmap::SlotMap;

use crate::error::Result;
use crate::math::{Matrix4, Point3, Rgb, Vector3};
use crate::mesh::TriangleMesh;
use crate::operations::query::{points_aabb, Aabb};
use crate::operations::stacking::StackNode;
use crate::orbit::BodyId;

slotmap::new_key_type! {
    /// Unique identifier for an object in a scene.
    pub struct ObjectId;
}

/// Surface appearance of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color.
    pub color: Rgb,
    /// Whether back faces are drawn too.
    pub double_sided: bool,
    /// Whether lights affect the object. Unlit objects show their base color.
    pub lit: bool,
}

impl Material {
    /// A lit, double-sided material.
    #[must_use]
    pub fn lambert(color: Rgb) -> Self {
        Self {
            color,
            double_sided: true,
            lit: true,
        }
    }

    /// An unlit material, e.g. for a light-emitting sun.
    #[must_use]
    pub fn unlit(color: Rgb) -> Self {
        Self {
            color,
            double_sided: false,
            lit: false,
        }
    }
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light from every direction.
    Ambient { color: Rgb },
    /// Parallel rays shining from `position` toward the origin.
    Directional {
        color: Rgb,
        intensity: f64,
        position: Point3,
    },
    /// Light radiating from `position`, fading out at `range` (0 = unlimited).
    Point {
        color: Rgb,
        intensity: f64,
        position: Point3,
        range: f64,
    },
}

/// A perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub position: Point3,
    /// Point looked at.
    pub target: Point3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Near clipping plane distance.
    pub near: f64,
    /// Far clipping plane distance.
    pub far: f64,
}

impl Camera {
    /// Creates a camera looking from `position` at `target` with a 40° field
    /// of view and clipping planes at 1 and 1000.
    #[must_use]
    pub fn looking_at(position: Point3, target: Point3) -> Self {
        Self {
            position,
            target,
            fov_degrees: 40.0,
            near: 1.0,
            far: 1000.0,
        }
    }

    /// World-to-view transform (right-handed, Y up).
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at_rh(&self.position, &self.target, &Vector3::y())
    }
}

/// A mesh placed in the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Geometry in the object's local frame.
    pub mesh: TriangleMesh,
    /// Local-to-world transform.
    pub transform: Matrix4,
    /// Surface appearance.
    pub material: Material,
    /// Orbit body whose position the object follows, if any.
    pub anchor: Option<BodyId>,
}

impl SceneObject {
    /// Creates an object at the origin.
    #[must_use]
    pub fn new(mesh: TriangleMesh, material: Material) -> Self {
        Self {
            mesh,
            transform: Matrix4::identity(),
            material,
            anchor: None,
        }
    }

    /// Sets the local-to-world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self
    }

    /// Makes the object follow an orbit body.
    #[must_use]
    pub fn anchored_to(mut self, body: BodyId) -> Self {
        self.anchor = Some(body);
        self
    }
}

/// Everything a renderer needs besides the camera.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, SceneObject>,
    lights: Vec<Light>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object and returns its ID.
    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        self.objects.insert(object)
    }

    /// Removes an object, returning it if it was present.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.remove(id)
    }

    /// Returns an object by ID.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Returns a mutable object by ID.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id)
    }

    /// Iterates over all objects.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter()
    }

    /// Iterates mutably over all objects.
    pub fn objects_mut(&mut self) -> impl Iterator<Item = (ObjectId, &mut SceneObject)> {
        self.objects.iter_mut()
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Adds a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// All lights.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Adds every level of a stack as its own object, colored per level.
    pub fn add_stack(&mut self, stack: &StackNode) -> Vec<ObjectId> {
        stack
            .flatten()
            .into_iter()
            .map(|placed| {
                self.add_object(
                    SceneObject::new(placed.mesh, Material::lambert(placed.color))
                        .with_transform(placed.transform),
                )
            })
            .collect()
    }

    /// World-space bounding box of every object.
    ///
    /// # Errors
    ///
    /// Returns `Degenerate` if the scene has no vertices.
    pub fn bounding_box(&self) -> Result<Aabb> {
        let points: Vec<Point3> = self
            .objects
            .values()
            .flat_map(|obj| {
                obj.mesh
                    .vertices
                    .iter()
                    .map(move |v| obj.transform.transform_point(v))
            })
            .collect();
        points_aabb(&points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeBox;
    use crate::operations::stacking::MakeZiggurat;
    use approx::assert_relative_eq;

    #[test]
    fn stack_levels_become_objects() {
        let stack = MakeZiggurat::new(5, 4, 0.2, 0.9).execute().unwrap();
        let mut scene = Scene::new();
        let ids = scene.add_stack(&stack);
        assert_eq!(ids.len(), 5);
        assert_eq!(scene.len(), 5);

        let aabb = scene.bounding_box().unwrap();
        assert_relative_eq!(aabb.height(), 1.0, epsilon = 1e-9);
        assert_eq!(scene.object(ids[0]).unwrap().material.color, stack.color);
    }

    #[test]
    fn remove_object() {
        let mut scene = Scene::new();
        let id = scene.add_object(SceneObject::new(
            MakeBox::new(1.0).execute().unwrap(),
            Material::lambert(Rgb::from_hex(0xff_0000)),
        ));
        assert!(scene.remove_object(id).is_some());
        assert!(scene.is_empty());
        assert!(scene.bounding_box().is_err());
    }

    #[test]
    fn camera_view_maps_target_onto_negative_z() {
        let camera = Camera::looking_at(Point3::new(0.0, 0.0, 10.0), Point3::origin());
        let p = camera.view_matrix().transform_point(&Point3::origin());
        assert_relative_eq!(p, Point3::new(0.0, 0.0, -10.0), epsilon = 1e-12);
    }
}
