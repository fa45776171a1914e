use crate::mesh::TriangleMesh;

/// Validates the structural consistency of a mesh.
///
/// A mesh is valid when every vertex is finite, every triangle references
/// three distinct in-range vertices, there is exactly one face normal per
/// triangle, and colors are either absent or one per vertex.
pub struct IsValid<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the validation, returning `true` if the mesh is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        let mesh = self.mesh;
        let count = mesh.vertices.len();

        let finite = mesh
            .vertices
            .iter()
            .all(|v| v.iter().all(|c| c.is_finite()));
        let faces_ok = mesh.indices.iter().all(|&[a, b, c]| {
            a != b
                && b != c
                && a != c
                && (a as usize) < count
                && (b as usize) < count
                && (c as usize) < count
        });
        let normals_ok = mesh.face_normals.len() == mesh.indices.len();
        let colors_ok = mesh.colors.is_empty() || mesh.colors.len() == count;

        finite && faces_ok && normals_ok && colors_ok
    }
}
