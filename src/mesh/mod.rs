mod point_cloud;

pub use point_cloud::PointCloud;

use crate::config::MAX_MESH_VERTICES;
use crate::error::{OperationError, Result};
use crate::math::{triangle_normal, Point3, Rgb, Vector3};

/// Converts a vertex position or count to a `u32` index.
///
/// # Errors
///
/// Returns `ResourceExceeded` past [`MAX_MESH_VERTICES`].
pub(crate) fn vertex_index(count: usize) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        OperationError::ResourceExceeded {
            requested: count,
            limit: MAX_MESH_VERTICES,
        }
        .into()
    })
}

/// An indexed triangle mesh.
///
/// Face normals are derived data: they are only ever produced by
/// [`TriangleMesh::compute_face_normals`] from the current vertex positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
    /// One unit normal per triangle, following its winding order.
    pub face_normals: Vec<Vector3>,
    /// Optional per-vertex colors. Empty, or one entry per vertex.
    pub colors: Vec<Rgb>,
}

impl TriangleMesh {
    /// Creates a mesh from vertices and triangles and computes its face normals.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, indices: Vec<[u32; 3]>) -> Self {
        let mut mesh = Self {
            vertices,
            indices,
            face_normals: Vec::new(),
            colors: Vec::new(),
        };
        mesh.compute_face_normals();
        mesh
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Recomputes one normal per triangle from the current vertex positions.
    ///
    /// Triangles that reference out-of-range vertices or have zero area get a
    /// zero normal.
    pub fn compute_face_normals(&mut self) {
        self.face_normals = self
            .indices
            .iter()
            .map(|&[a, b, c]| {
                match (
                    self.vertices.get(a as usize),
                    self.vertices.get(b as usize),
                    self.vertices.get(c as usize),
                ) {
                    (Some(pa), Some(pb), Some(pc)) => triangle_normal(pa, pb, pc),
                    _ => Vector3::zeros(),
                }
            })
            .collect();
    }

    /// Appends another mesh, offsetting its indices.
    ///
    /// Colors are kept only if both meshes carry them (or `self` is empty).
    ///
    /// # Errors
    ///
    /// Returns `ResourceExceeded` if the combined vertex count does not fit a
    /// `u32` index. `self` is left unchanged.
    pub fn merge(&mut self, other: &TriangleMesh) -> Result<()> {
        vertex_index(self.vertices.len().saturating_add(other.vertices.len()))?;
        let base = vertex_index(self.vertices.len())?;

        let keep_colors = (self.vertices.is_empty() || self.colors.len() == self.vertices.len())
            && other.colors.len() == other.vertices.len()
            && !other.colors.is_empty();

        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|&[a, b, c]| {
                    [
                        a.saturating_add(base),
                        b.saturating_add(base),
                        c.saturating_add(base),
                    ]
                }),
        );
        self.face_normals.extend_from_slice(&other.face_normals);

        if keep_colors {
            self.colors.extend_from_slice(&other.colors);
        } else {
            self.colors.clear();
        }
        Ok(())
    }

    /// Returns the positions of a triangle's corners, if all indices are valid.
    #[must_use]
    pub fn triangle(&self, face: usize) -> Option<[Point3; 3]> {
        let [a, b, c] = *self.indices.get(face)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> TriangleMesh {
        TriangleMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn new_computes_normals() {
        let mesh = unit_triangle();
        assert_eq!(mesh.face_normals.len(), 1);
        assert_relative_eq!(mesh.face_normals[0], Vector3::z());
    }

    #[test]
    fn normals_follow_vertex_edits() {
        let mut mesh = unit_triangle();
        mesh.indices[0] = [0, 2, 1];
        mesh.compute_face_normals();
        assert_relative_eq!(mesh.face_normals[0], -Vector3::z());
    }

    #[test]
    fn merge_offsets_indices() {
        let mut a = unit_triangle();
        let b = unit_triangle();
        a.merge(&b).unwrap();
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.indices[1], [3, 4, 5]);
        assert_eq!(a.face_normals.len(), 2);
    }

    #[test]
    fn merge_drops_colors_when_one_side_lacks_them() {
        let mut a = unit_triangle();
        a.colors = vec![Rgb::new(1, 2, 3); 3];
        a.merge(&unit_triangle()).unwrap();
        assert!(a.colors.is_empty());
    }

    #[test]
    fn merge_into_empty_keeps_colors() {
        let mut a = TriangleMesh::default();
        let mut b = unit_triangle();
        b.colors = vec![Rgb::new(9, 9, 9); 3];
        a.merge(&b).unwrap();
        assert_eq!(a.colors.len(), 3);
    }

    #[test]
    fn vertex_index_stops_at_u32() {
        use crate::error::ErrorKind;

        assert_eq!(vertex_index(7).unwrap(), 7);
        assert_eq!(vertex_index(MAX_MESH_VERTICES).unwrap(), u32::MAX);
        let err = vertex_index(MAX_MESH_VERTICES + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceExceeded);
    }

    #[test]
    fn triangle_lookup() {
        let mesh = unit_triangle();
        let [_, b, _] = mesh.triangle(0).unwrap();
        assert_relative_eq!(b, Point3::new(1.0, 0.0, 0.0));
        assert!(mesh.triangle(1).is_none());
    }
}
