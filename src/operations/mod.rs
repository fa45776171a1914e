pub mod creation;
pub mod query;
pub mod stacking;
pub mod transform;
