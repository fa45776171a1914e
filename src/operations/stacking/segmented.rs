use crate::error::{OperationError, Result};

use super::{check_level_limit, MakeKnottedStack, StackNode};

/// Creates a straight cylinder split into equal, separately colored segments.
#[derive(Debug, Clone)]
pub struct MakeSegmentedStack {
    sides: u32,
    segments: usize,
    segment_length: f64,
    radius: f64,
    cap_bottom: bool,
    cap_top: bool,
}

impl MakeSegmentedStack {
    /// Creates a new `MakeSegmentedStack` operation with both ends capped.
    #[must_use]
    pub fn new(sides: u32, segments: usize, segment_length: f64, radius: f64) -> Self {
        Self {
            sides,
            segments,
            segment_length,
            radius,
            cap_bottom: true,
            cap_top: true,
        }
    }

    /// Sets whether the bottom segment is capped below and the top segment
    /// above.
    #[must_use]
    pub fn with_caps(mut self, cap_bottom: bool, cap_top: bool) -> Self {
        self.cap_bottom = cap_bottom;
        self.cap_top = cap_top;
        self
    }

    /// Executes the operation, returning the bottom segment of the chain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if there are no segments or the ring
    /// parameters are invalid; returns `ResourceExceeded` if there are more
    /// segments than the stack limit.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<StackNode> {
        if self.segments == 0 {
            return Err(OperationError::InvalidArgument(
                "segmented stack needs at least one segment".into(),
            )
            .into());
        }
        check_level_limit(self.segments)?;

        let heights = (0..=self.segments)
            .map(|i| i as f64 * self.segment_length)
            .collect();
        MakeKnottedStack::new(self.sides, heights, vec![1.0; self.segments + 1])
            .with_radius(self.radius)
            .with_caps(self.cap_bottom, self.cap_top)
            .execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::math::div_color;
    use approx::assert_relative_eq;

    #[test]
    fn fifteen_segments() {
        let stack = MakeSegmentedStack::new(12, 15, 0.5, 2.0).execute().unwrap();
        assert_eq!(stack.depth(), 15);
        for node in stack.levels().skip(1) {
            assert_relative_eq!(node.offset, 0.5);
            assert_relative_eq!(node.scale, 1.0);
        }
        let aabb = stack.bounding_box().unwrap();
        assert_relative_eq!(aabb.height(), 7.5, epsilon = 1e-9);
        assert_relative_eq!(aabb.max.x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn colors_use_cosine_sweep() {
        let stack = MakeSegmentedStack::new(12, 15, 0.5, 2.0).execute().unwrap();
        for (j, node) in stack.levels().enumerate() {
            assert_eq!(node.color, div_color(15 - j, 15));
        }
    }

    #[test]
    fn interior_segments_are_open() {
        let stack = MakeSegmentedStack::new(6, 3, 1.0, 1.0).execute().unwrap();
        let counts: Vec<usize> = stack.levels().map(|n| n.mesh.triangle_count()).collect();
        assert_eq!(counts, vec![18, 14, 18]);
    }

    #[test]
    fn cloned_builder_builds_same_stack() {
        let builder = MakeSegmentedStack::new(5, 4, 0.25, 1.5).with_caps(true, false);
        let copy = builder.clone();
        assert!(format!("{copy:?}").contains("segments: 4"));
        assert_eq!(copy.execute().unwrap(), builder.execute().unwrap());
    }

    #[test]
    fn zero_segments_fail() {
        let err = MakeSegmentedStack::new(6, 0, 1.0, 1.0).execute().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn bad_length_fails() {
        let err = MakeSegmentedStack::new(6, 3, 0.0, 1.0).execute().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
