pub mod config;
pub mod controls;
pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod orbit;
pub mod scene;

pub use error::{ErrorKind, Result, ZigmeshError};
