use crate::config::MAX_STAIR_STEPS;
use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::mesh::{vertex_index, TriangleMesh};

/// Creates a flight of stairs rising along +Y and advancing along +X.
///
/// The flight starts from a base edge at `(0, 0, 0)`–`(0, 0, width)`. Each
/// step rises by `riser` (the vertical part) and then advances by `tread`
/// (the horizontal part stepped upon).
#[derive(Debug, Clone, Copy)]
pub struct MakeStairs {
    riser: f64,
    tread: f64,
    width: f64,
    steps: u32,
}

impl MakeStairs {
    /// Creates a new `MakeStairs` operation.
    #[must_use]
    pub fn new(riser: f64, tread: f64, width: f64, steps: u32) -> Self {
        Self {
            riser,
            tread,
            width,
            steps,
        }
    }

    /// Executes the operation, returning the stair surface.
    ///
    /// Each step appends four vertices (rise left/right, tread left/right)
    /// and four triangles strung over the last six vertices, giving
    /// `2 + 4 * steps` vertices and `4 * steps` triangles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any dimension is not positive or `steps`
    /// is zero. Returns `ResourceExceeded` if `steps` is above
    /// [`MAX_STAIR_STEPS`].
    pub fn execute(&self) -> Result<TriangleMesh> {
        for (name, value) in [
            ("riser", self.riser),
            ("tread", self.tread),
            ("width", self.width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(OperationError::InvalidArgument(format!(
                    "stair {name} must be positive, got {value}"
                ))
                .into());
            }
        }
        if self.steps == 0 {
            return Err(
                OperationError::InvalidArgument("stairs need at least one step".into()).into(),
            );
        }
        if self.steps > MAX_STAIR_STEPS {
            return Err(OperationError::ResourceExceeded {
                requested: self.steps as usize,
                limit: MAX_STAIR_STEPS as usize,
            }
            .into());
        }

        let count = 2 + 4 * self.steps as usize;
        let mut vertices = Vec::with_capacity(count);
        let mut indices = Vec::with_capacity(4 * self.steps as usize);

        let mut left = Point3::new(0.0, 0.0, 0.0);
        let mut right = Point3::new(0.0, 0.0, self.width);
        vertices.push(left);
        vertices.push(right);

        for _ in 0..self.steps {
            let rise_left = Point3::new(left.x, left.y + self.riser, left.z);
            let rise_right = Point3::new(right.x, right.y + self.riser, right.z);
            let tread_left = Point3::new(left.x + self.tread, rise_left.y, left.z);
            let tread_right = Point3::new(right.x + self.tread, rise_right.y, right.z);
            vertices.extend([rise_left, rise_right, tread_left, tread_right]);

            let vi = vertex_index(vertices.len())?;
            indices.push([vi - 6, vi - 5, vi - 4]);
            indices.push([vi - 5, vi - 4, vi - 3]);
            indices.push([vi - 4, vi - 3, vi - 2]);
            indices.push([vi - 3, vi - 2, vi - 1]);

            left = tread_left;
            right = tread_right;
        }

        tracing::trace!(steps = self.steps, "built stairs");
        Ok(TriangleMesh::new(vertices, indices))
    }
}
