pub mod color;

pub use color::{div_color, Rgb};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Computes the unit normal of triangle `(a, b, c)` from its winding order.
///
/// Counter-clockwise winding (seen from the viewer) yields a normal pointing
/// toward the viewer. Zero-area triangles yield the zero vector.
#[must_use]
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    if len < TOLERANCE {
        Vector3::zeros()
    } else {
        n / len
    }
}

/// Builds the local transform of a stacked level: a vertical lift followed
/// by a horizontal (x/z) scale.
#[must_use]
pub fn lift_and_scale(offset: f64, scale: f64) -> Matrix4 {
    Matrix4::new_translation(&Vector3::new(0.0, offset, 0.0))
        * Matrix4::new_nonuniform_scaling(&Vector3::new(scale, 1.0, scale))
}
