mod make_box;
mod make_ring;
mod make_stairs;
mod make_starburst;

pub use make_box::{BoxFace, MakeBox};
pub use make_ring::MakeRing;
pub use make_stairs::MakeStairs;
pub use make_starburst::MakeStarburst;
