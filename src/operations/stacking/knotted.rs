use crate::config::DEFAULT_KNOTTED_RADIUS;
use crate::error::{OperationError, Result};
use crate::math::div_color;

use super::{check_level_limit, compose, LevelSpec, StackNode};

/// Creates a knotted cylinder from a profile of cumulative heights and scales.
///
/// `heights[j]` is the height of the `j`-th knot and `scales[j]` the
/// horizontal scale of the profile at that knot. Segment `j` spans knots `j`
/// and `j + 1` and takes the scale of its upper knot, so `scales[0]` only
/// sets the reference for the first relative scale. Adjacent segments meet
/// flush: a child sits half its parent's height plus half its own height
/// above the parent.
#[derive(Debug, Clone)]
pub struct MakeKnottedStack {
    sides: u32,
    heights: Vec<f64>,
    scales: Vec<f64>,
    radius: f64,
    cap_bottom: bool,
    cap_top: bool,
}

impl MakeKnottedStack {
    /// Creates a new `MakeKnottedStack` operation with a unit radius and both
    /// ends capped.
    #[must_use]
    pub fn new(sides: u32, heights: Vec<f64>, scales: Vec<f64>) -> Self {
        Self {
            sides,
            heights,
            scales,
            radius: DEFAULT_KNOTTED_RADIUS,
            cap_bottom: true,
            cap_top: true,
        }
    }

    /// Sets the unscaled ring radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
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
    /// Returns `InvalidArgument` if the height and scale sequences differ in
    /// length, have fewer than two entries, the heights are not strictly
    /// increasing, or a scale is not a positive finite number. Returns
    /// `ResourceExceeded` if there are more segments than the stack limit.
    pub fn execute(&self) -> Result<StackNode> {
        if self.heights.len() != self.scales.len() {
            return Err(OperationError::InvalidArgument(format!(
                "{} heights but {} scales",
                self.heights.len(),
                self.scales.len()
            ))
            .into());
        }
        if self.heights.len() < 2 {
            return Err(OperationError::InvalidArgument(
                "knotted stack needs at least two heights".into(),
            )
            .into());
        }
        let segments = self.heights.len() - 1;
        check_level_limit(segments)?;

        if let Some(bad) = self.scales.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
            return Err(OperationError::InvalidArgument(format!(
                "knotted stack scales must be positive, got {bad}"
            ))
            .into());
        }

        let mut specs: Vec<LevelSpec> = Vec::with_capacity(segments);
        for j in 0..segments {
            let height = self.heights[j + 1] - self.heights[j];
            if !(height.is_finite() && height > 0.0) {
                return Err(OperationError::InvalidArgument(format!(
                    "heights must be strictly increasing, segment {j} has height {height}"
                ))
                .into());
            }
            let (offset, scale) = match specs.last() {
                None => (0.0, self.scales[1]),
                Some(parent) => (
                    (parent.height + height) / 2.0,
                    self.scales[j + 1] / self.scales[j],
                ),
            };
            specs.push(LevelSpec {
                height,
                radius: self.radius,
                offset,
                scale,
                color: div_color(segments - j, segments),
            });
        }

        let stack = compose(self.sides, &specs, self.cap_bottom, self.cap_top)?;
        tracing::debug!(sides = self.sides, segments, "built knotted stack");
        Ok(stack)
    }
}
