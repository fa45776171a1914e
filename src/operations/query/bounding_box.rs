use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};
use crate::mesh::TriangleMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a degenerate box around a single point.
    #[must_use]
    pub fn from_point(p: Point3) -> Self {
        Self { min: p, max: p }
    }

    /// Grows the box to contain `p`.
    pub fn include(&mut self, p: &Point3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Edge lengths along x, y and z.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Extent along the vertical (Y) axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of a mesh's vertices.
pub struct BoundingBox<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns `Degenerate` if the mesh has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        points_aabb(&self.mesh.vertices)
    }
}

/// Computes the AABB of a point set.
///
/// # Errors
///
/// Returns `Degenerate` if `points` is empty.
pub(crate) fn points_aabb(points: &[Point3]) -> Result<Aabb> {
    let (first, rest) = points
        .split_first()
        .ok_or_else(|| GeometryError::Degenerate("bounding box of an empty point set".into()))?;
    let mut aabb = Aabb::from_point(*first);
    for p in rest {
        aabb.include(p);
    }
    Ok(aabb)
}
