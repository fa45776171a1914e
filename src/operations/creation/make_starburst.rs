use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::MAX_STARBURST_POINTS;
use crate::error::{OperationError, Result};
use crate::math::{Point3, Rgb};
use crate::mesh::PointCloud;

/// Scatters randomly colored points uniformly inside a sphere.
///
/// Points are rejection-sampled from the enclosing cube, so the result is
/// uniform over the ball. A fixed seed makes the output reproducible.
#[derive(Debug, Clone, Copy)]
pub struct MakeStarburst {
    count: usize,
    radius: f64,
    seed: u64,
}

impl MakeStarburst {
    /// Creates a new `MakeStarburst` operation in the unit sphere.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            radius: 1.0,
            seed: 0,
        }
    }

    /// Sets the sphere radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Executes the operation, returning `count` points strictly inside the
    /// sphere.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the radius is not a positive finite number,
    /// or `ResourceExceeded` if `count` is above [`MAX_STARBURST_POINTS`].
    pub fn execute(&self) -> Result<PointCloud> {
        if self.count > MAX_STARBURST_POINTS {
            return Err(OperationError::ResourceExceeded {
                requested: self.count,
                limit: MAX_STARBURST_POINTS,
            }
            .into());
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(OperationError::InvalidArgument(format!(
                "starburst radius must be positive, got {}",
                self.radius
            ))
            .into());
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut cloud = PointCloud {
            points: Vec::with_capacity(self.count),
            colors: Vec::with_capacity(self.count),
        };

        while cloud.len() < self.count {
            let x: f64 = rng.gen_range(-1.0..1.0);
            let y: f64 = rng.gen_range(-1.0..1.0);
            let z: f64 = rng.gen_range(-1.0..1.0);
            if x * x + y * y + z * z < 1.0 {
                let color = Rgb::from_hex(rng.gen_range(0..=0x00ff_ffff));
                cloud.push(
                    Point3::new(x * self.radius, y * self.radius, z * self.radius),
                    color,
                );
            }
        }

        tracing::trace!(count = self.count, seed = self.seed, "scattered starbursts");
        Ok(cloud)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn produces_requested_count() {
        let cloud = MakeStarburst::new(200).execute().unwrap();
        assert_eq!(cloud.len(), 200);
        assert_eq!(cloud.colors.len(), 200);
    }

    #[test]
    fn points_lie_inside_sphere() {
        let cloud = MakeStarburst::new(500)
            .with_radius(3.0)
            .with_seed(7)
            .execute()
            .unwrap();
        assert!(cloud.points.iter().all(|p| p.coords.norm() < 3.0));
    }

    #[test]
    fn seed_is_reproducible() {
        let a = MakeStarburst::new(50).with_seed(42).execute().unwrap();
        let b = MakeStarburst::new(50).with_seed(42).execute().unwrap();
        let c = MakeStarburst::new(50).with_seed(43).execute().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_cloud() {
        assert!(MakeStarburst::new(0).execute().unwrap().is_empty());
    }

    #[test]
    fn oversized_cloud_fails() {
        use crate::error::ErrorKind;

        for count in [MAX_STARBURST_POINTS + 1, usize::MAX] {
            let err = MakeStarburst::new(count).execute().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ResourceExceeded);
        }
    }

    #[test]
    fn bad_radius_fails() {
        assert!(MakeStarburst::new(10).with_radius(0.0).execute().is_err());
    }
}
