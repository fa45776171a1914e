use crate::config::DEFAULT_ZIGGURAT_RADIUS;
use crate::error::{OperationError, Result};
use crate::math::Rgb;

use super::{check_level_limit, compose, LevelSpec, StackNode};

/// Creates a ziggurat: identical rings stacked with a constant scale decay.
///
/// Every level is a ring of the same height and base radius. Each level
/// sits one level-height above its parent and is scaled horizontally by
/// `scale` relative to it, so level `k` ends up `scale^k` as wide as the
/// base. Colors sweep the hue wheel from the base to the top.
#[derive(Debug, Clone, Copy)]
pub struct MakeZiggurat {
    levels: usize,
    sides: u32,
    height: f64,
    scale: f64,
    radius: f64,
    cap_bottom: bool,
    cap_top: bool,
}

impl MakeZiggurat {
    /// Creates a new `MakeZiggurat` operation with the default base radius
    /// and both ends capped.
    #[must_use]
    pub fn new(levels: usize, sides: u32, height: f64, scale: f64) -> Self {
        Self {
            levels,
            sides,
            height,
            scale,
            radius: DEFAULT_ZIGGURAT_RADIUS,
            cap_bottom: true,
            cap_top: true,
        }
    }

    /// Sets the radius of the base level.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets whether the base is capped below and the top level above.
    #[must_use]
    pub fn with_caps(mut self, cap_bottom: bool, cap_top: bool) -> Self {
        self.cap_bottom = cap_bottom;
        self.cap_top = cap_top;
        self
    }

    /// Executes the operation, returning the base level of the chain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `levels` is zero, the scale is not a
    /// positive finite number, or the ring parameters are invalid; returns
    /// `ResourceExceeded` if `levels` exceeds the stack limit.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<StackNode> {
        if self.levels == 0 {
            return Err(
                OperationError::InvalidArgument("ziggurat needs at least one level".into()).into(),
            );
        }
        check_level_limit(self.levels)?;
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(OperationError::InvalidArgument(format!(
                "ziggurat scale must be positive, got {}",
                self.scale
            ))
            .into());
        }

        let total = self.levels as f64;
        let specs: Vec<LevelSpec> = (0..self.levels)
            .map(|k| LevelSpec {
                height: self.height,
                radius: self.radius,
                offset: if k == 0 { 0.0 } else { self.height },
                scale: if k == 0 { 1.0 } else { self.scale },
                color: Rgb::from_hsl((self.levels - k) as f64 / total, 1.0, 0.5),
            })
            .collect();

        let stack = compose(self.sides, &specs, self.cap_bottom, self.cap_top)?;
        tracing::debug!(
            levels = self.levels,
            sides = self.sides,
            height = self.height,
            scale = self.scale,
            "built ziggurat"
        );
        Ok(stack)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::MAX_STACK_LEVELS;
    use crate::error::ErrorKind;
    use crate::operations::creation::MakeRing;
    use approx::assert_relative_eq;

    #[test]
    fn one_level_is_one_ring() {
        let stack = MakeZiggurat::new(1, 6, 0.5, 0.9).execute().unwrap();
        let ring = MakeRing::new(6, 0.5, DEFAULT_ZIGGURAT_RADIUS)
            .with_caps(true, true)
            .execute()
            .unwrap();
        assert_eq!(stack.mesh, ring);
        assert!(stack.child.is_none());
        assert_relative_eq!(stack.offset, 0.0);
        assert_relative_eq!(stack.scale, 1.0);
    }

    #[test]
    fn uncapped_single_level_matches_open_ring() {
        let stack = MakeZiggurat::new(1, 4, 1.0, 0.9)
            .with_radius(2.0)
            .with_caps(false, false)
            .execute()
            .unwrap();
        assert_eq!(stack.mesh, MakeRing::new(4, 1.0, 2.0).execute().unwrap());
    }

    #[test]
    fn levels_are_linked() {
        let stack = MakeZiggurat::new(7, 4, 0.2, 0.9).execute().unwrap();
        assert_eq!(stack.depth(), 7);
        for node in stack.levels().skip(1) {
            assert_relative_eq!(node.offset, 0.2);
            assert_relative_eq!(node.scale, 0.9);
        }
    }

    #[test]
    fn cumulative_scale_decays_geometrically() {
        let stack = MakeZiggurat::new(6, 5, 0.3, 0.8).execute().unwrap();
        for (k, s) in stack.cumulative_scales().into_iter().enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let expected = 0.8_f64.powi(k as i32);
            assert_relative_eq!(s, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn world_height_is_sum_of_levels() {
        let stack = MakeZiggurat::new(30, 4, 0.2, 0.9).execute().unwrap();
        let aabb = stack.bounding_box().unwrap();
        assert_relative_eq!(aabb.height(), 30.0 * 0.2, epsilon = 1e-9);
        assert_relative_eq!(aabb.min.y, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn top_level_is_narrowest() {
        let stack = MakeZiggurat::new(5, 8, 1.0, 0.5).execute().unwrap();
        let placed = stack.flatten();
        let top = placed[4].world_mesh().unwrap();
        let widest = top.vertices.iter().map(|v| v.x.abs()).fold(0.0, f64::max);
        assert_relative_eq!(widest, 2.0 * 0.5_f64.powi(4), epsilon = 1e-12);
    }

    #[test]
    fn only_outer_levels_are_capped() {
        let stack = MakeZiggurat::new(4, 6, 0.5, 0.9).execute().unwrap();
        let counts: Vec<usize> = stack.levels().map(|n| n.mesh.triangle_count()).collect();
        assert_eq!(counts, vec![18, 14, 14, 18]);
    }

    #[test]
    fn colors_sweep_hue() {
        let stack = MakeZiggurat::new(3, 4, 0.2, 0.9).execute().unwrap();
        let colors: Vec<Rgb> = stack.levels().map(|n| n.color).collect();
        assert_eq!(colors[0], Rgb::new(255, 0, 0));
        assert_eq!(colors[1], Rgb::from_hsl(2.0 / 3.0, 1.0, 0.5));
        assert_eq!(colors[2], Rgb::from_hsl(1.0 / 3.0, 1.0, 0.5));
    }

    #[test]
    fn zero_levels_fail() {
        let err = MakeZiggurat::new(0, 4, 0.2, 0.9).execute().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn too_many_levels_fail() {
        let err = MakeZiggurat::new(MAX_STACK_LEVELS + 1, 4, 0.2, 0.9)
            .execute()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceExceeded);
    }

    #[test]
    fn bad_ring_parameters_fail() {
        for zig in [
            MakeZiggurat::new(3, 2, 0.2, 0.9),
            MakeZiggurat::new(3, 4, 0.0, 0.9),
            MakeZiggurat::new(3, 4, 0.2, 0.0),
            MakeZiggurat::new(3, 4, 0.2, 0.9).with_radius(-1.0),
        ] {
            assert_eq!(zig.execute().unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }
}
