use crate::error::{OperationError, Result};
use crate::math::Matrix4;
use crate::mesh::TriangleMesh;

/// Applies an arbitrary affine 4x4 transformation matrix to a mesh.
pub struct GeneralTransform {
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// Executes the transformation, modifying the mesh in-place.
    ///
    /// Transforms all vertex positions, then recomputes the face normals from
    /// the moved vertices, so non-uniform scales keep correct normals.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the matrix has non-finite entries.
    pub fn execute(&self, mesh: &mut TriangleMesh) -> Result<()> {
        if self.matrix.iter().any(|v| !v.is_finite()) {
            return Err(
                OperationError::InvalidArgument("transform matrix must be finite".into()).into(),
            );
        }

        for vertex in &mut mesh.vertices {
            *vertex = self.matrix.transform_point(vertex);
        }
        mesh.compute_face_normals();
        Ok(())
    }

    /// Returns a transformed copy of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the matrix has non-finite entries.
    pub fn apply(&self, mesh: &TriangleMesh) -> Result<TriangleMesh> {
        let mut out = mesh.clone();
        self.execute(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{lift_and_scale, Point3, Vector3};
    use crate::operations::creation::MakeRing;
    use crate::operations::query::BoundingBox;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn identity_transform_preserves_mesh() {
        let mesh = MakeRing::new(6, 1.0, 1.0).execute().unwrap();
        let moved = GeneralTransform::new(Matrix4::identity()).apply(&mesh).unwrap();
        assert_eq!(mesh, moved);
    }

    #[test]
    fn translation_shifts_all_vertices() {
        let mut mesh = MakeRing::new(4, 1.0, 1.0).execute().unwrap();
        let matrix = Matrix4::new_translation(&Vector3::new(5.0, 3.0, 2.0));
        GeneralTransform::new(matrix).execute(&mut mesh).unwrap();

        let aabb = BoundingBox::new(&mesh).execute().unwrap();
        assert_relative_eq!(aabb.center(), p(5.0, 3.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn horizontal_scale_keeps_height() {
        let mut mesh = MakeRing::new(8, 2.0, 1.0).execute().unwrap();
        GeneralTransform::new(lift_and_scale(0.0, 0.5))
            .execute(&mut mesh)
            .unwrap();

        let aabb = BoundingBox::new(&mesh).execute().unwrap();
        assert_relative_eq!(aabb.height(), 2.0);
        assert_relative_eq!(aabb.max.x, 0.5);
    }

    #[test]
    fn normals_are_recomputed() {
        let mut mesh = MakeRing::new(4, 1.0, 1.0).execute().unwrap();
        let before = mesh.face_normals[0];
        GeneralTransform::new(Matrix4::new_scaling(-1.0))
            .execute(&mut mesh)
            .unwrap();
        // negating every vertex leaves each edge cross product unchanged
        assert_relative_eq!(mesh.face_normals[0], before, epsilon = 1e-12);
        assert_relative_eq!(mesh.vertices[0], p(-1.0, -0.5, 0.0));
    }

    #[test]
    fn non_finite_matrix_fails() {
        let mut mesh = MakeRing::new(4, 1.0, 1.0).execute().unwrap();
        let mut matrix = Matrix4::identity();
        matrix[(0, 3)] = f64::NAN;
        assert!(GeneralTransform::new(matrix).execute(&mut mesh).is_err());
    }
}
