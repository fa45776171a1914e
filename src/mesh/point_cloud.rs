use crate::math::{Point3, Rgb};

/// A set of colored points, rendered as sprites rather than triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    /// Point positions.
    pub points: Vec<Point3>,
    /// One color per point.
    pub colors: Vec<Rgb>,
}

impl PointCloud {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a colored point.
    pub fn push(&mut self, point: Point3, color: Rgb) {
        self.points.push(point);
        self.colors.push(color);
    }
}
