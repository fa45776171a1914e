use std::f64::consts::TAU;

use crate::config::{MAX_RING_SIDES, MIN_RING_SIDES};
use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::mesh::TriangleMesh;

/// Creates an open or capped prism around the vertical (Y) axis.
///
/// The ring has `sides + 1` vertex pairs: pair `i` sits at angle
/// `i * 2π / sides`, with the top vertex (`y = +length/2`) at even index `2i`
/// and the bottom vertex (`y = -length/2`) at odd index `2i + 1`. Pair
/// `sides` repeats pair 0 so the lateral strip never wraps its indices.
#[derive(Debug, Clone, Copy)]
pub struct MakeRing {
    sides: u32,
    length: f64,
    radius: f64,
    cap_bottom: bool,
    cap_top: bool,
}

impl MakeRing {
    /// Creates a new uncapped `MakeRing` operation.
    #[must_use]
    pub fn new(sides: u32, length: f64, radius: f64) -> Self {
        Self {
            sides,
            length,
            radius,
            cap_bottom: false,
            cap_top: false,
        }
    }

    /// Sets whether the bottom and top ends are closed with triangle fans.
    #[must_use]
    pub fn with_caps(mut self, cap_bottom: bool, cap_top: bool) -> Self {
        self.cap_bottom = cap_bottom;
        self.cap_top = cap_top;
        self
    }

    /// Executes the operation, returning the ring mesh.
    ///
    /// Triangles are emitted in this order:
    /// 1. `2 * sides` lateral triangles, two per angular step;
    /// 2. the seam-closing pair `(0, 1, 2n-2)`, `(1, 2n-2, 2n-1)`;
    /// 3. `sides - 2` top fan triangles anchored at vertex 0, if capped;
    /// 4. `sides - 2` bottom fan triangles anchored at vertex 1, if capped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `sides < 3`, or if the length or radius
    /// is not a positive finite number. Returns `ResourceExceeded` if `sides`
    /// is above [`MAX_RING_SIDES`].
    pub fn execute(&self) -> Result<TriangleMesh> {
        self.validate()?;

        let n = self.sides;
        let half = self.length / 2.0;
        let inc = TAU / f64::from(n);

        let mut vertices = Vec::with_capacity(2 * (n as usize + 1));
        for i in 0..=n {
            let a = f64::from(i) * inc;
            let (sin, cos) = a.sin_cos();
            let x = self.radius * cos;
            let z = self.radius * sin;
            vertices.push(Point3::new(x, half, z));
            vertices.push(Point3::new(x, -half, z));
        }

        let mut indices =
            Vec::with_capacity(Self::triangle_count(n, self.cap_bottom, self.cap_top));

        // Lateral strip: quad between pair i-1 and pair i, split on the
        // (bottom i-1, top i) diagonal.
        for i in 1..=n {
            let t0 = 2 * (i - 1);
            let b0 = t0 + 1;
            let t1 = 2 * i;
            let b1 = t1 + 1;
            indices.push([t0, b0, t1]);
            indices.push([b0, b1, t1]);
        }

        // Seam: pair 0 against pair n-1, reusing 0 and 1 directly.
        let last_top = 2 * n - 2;
        indices.push([0, 1, last_top]);
        indices.push([1, last_top, last_top + 1]);

        if self.cap_top {
            for i in 0..n - 2 {
                indices.push([0, 2 * i + 2, 2 * i + 4]);
            }
        }
        if self.cap_bottom {
            for i in 0..n - 2 {
                indices.push([2 * i + 5, 2 * i + 3, 1]);
            }
        }

        tracing::trace!(
            sides = n,
            length = self.length,
            radius = self.radius,
            triangles = indices.len(),
            "built ring"
        );
        Ok(TriangleMesh::new(vertices, indices))
    }

    /// Number of triangles a ring with these parameters has.
    #[must_use]
    pub fn triangle_count(sides: u32, cap_bottom: bool, cap_top: bool) -> usize {
        let n = sides as usize;
        let cap = n.saturating_sub(2);
        2 * n + 2 + usize::from(cap_bottom) * cap + usize::from(cap_top) * cap
    }

    fn validate(&self) -> Result<()> {
        if self.sides < MIN_RING_SIDES {
            return Err(OperationError::InvalidArgument(format!(
                "ring needs at least {MIN_RING_SIDES} sides, got {}",
                self.sides
            ))
            .into());
        }
        if self.sides > MAX_RING_SIDES {
            return Err(OperationError::ResourceExceeded {
                requested: self.sides as usize,
                limit: MAX_RING_SIDES as usize,
            }
            .into());
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(OperationError::InvalidArgument(format!(
                "ring length must be positive, got {}",
                self.length
            ))
            .into());
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(OperationError::InvalidArgument(format!(
                "ring radius must be positive, got {}",
                self.radius
            ))
            .into());
        }
        Ok(())
    }
}
