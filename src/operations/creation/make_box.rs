use crate::error::{OperationError, Result};
use crate::math::{Point3, Rgb};
use crate::mesh::TriangleMesh;

/// Outward-wound quads of the cube, as corner indices.
///
/// Corner `i` has x, y and z signs taken from bits 0, 1 and 2 of `i`.
const QUADS: [[u32; 4]; 6] = [
    [0, 4, 6, 2], // -x
    [1, 3, 7, 5], // +x
    [0, 1, 5, 4], // -y
    [2, 6, 7, 3], // +y
    [0, 2, 3, 1], // -z
    [4, 5, 7, 6], // +z
];

/// A face of an axis-aligned box, named by its outward direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxFace {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl BoxFace {
    /// Position of the face's quad in [`QUADS`].
    fn quad(self) -> usize {
        match self {
            Self::NegX => 0,
            Self::PosX => 1,
            Self::NegY => 2,
            Self::PosY => 3,
            Self::NegZ => 4,
            Self::PosZ => 5,
        }
    }
}

/// Creates a cube centered at the origin, optionally with one color per
/// corner and one face left open.
#[derive(Debug, Clone, Copy)]
pub struct MakeBox {
    size: f64,
    corner_colors: Option<[Rgb; 8]>,
    open_face: Option<BoxFace>,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation with the given edge length.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            corner_colors: None,
            open_face: None,
        }
    }

    /// Leaves `face` out, giving an open box of 10 triangles.
    #[must_use]
    pub fn with_open_face(mut self, face: BoxFace) -> Self {
        self.open_face = Some(face);
        self
    }

    /// Assigns a color to each of the eight corners.
    #[must_use]
    pub fn with_corner_colors(mut self, colors: [Rgb; 8]) -> Self {
        self.corner_colors = Some(colors);
        self
    }

    /// Executes the operation, returning a mesh with 8 vertices and 12
    /// triangles, or 10 if a face is left open.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the size is not a positive finite number.
    pub fn execute(&self) -> Result<TriangleMesh> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(OperationError::InvalidArgument(format!(
                "box size must be positive, got {}",
                self.size
            ))
            .into());
        }

        let h = self.size / 2.0;
        let sign = |bit: u32, i: u32| if i & bit == 0 { -h } else { h };
        let vertices = (0..8)
            .map(|i| Point3::new(sign(1, i), sign(2, i), sign(4, i)))
            .collect();
        let skipped = self.open_face.map(BoxFace::quad);
        let indices = QUADS
            .iter()
            .enumerate()
            .filter(|&(quad, _)| Some(quad) != skipped)
            .flat_map(|(_, &[a, b, c, d])| [[a, b, c], [a, c, d]])
            .collect();

        let mut mesh = TriangleMesh::new(vertices, indices);
        if let Some(colors) = self.corner_colors {
            mesh.colors = colors.to_vec();
        }
        Ok(mesh)
    }
}
