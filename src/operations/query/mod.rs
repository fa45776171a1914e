mod bounding_box;
mod is_valid;

pub use bounding_box::{Aabb, BoundingBox};
pub use is_valid::IsValid;

pub(crate) use bounding_box::points_aabb;
