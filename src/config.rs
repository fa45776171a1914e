//! # Configuration Constants
//!
//! Limits and defaults shared by the builders and the ziggurat controls.
//!
//! ## Categories
//!
//! - **Limits**: upper bounds on generated geometry
//! - **Defaults**: base dimensions of the stacked solids
//! - **Controls**: accepted ranges of the ziggurat option panel

use std::ops::RangeInclusive;

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum number of levels a stacked solid may have.
///
/// Checked before any mesh is generated.
pub const MAX_STACK_LEVELS: usize = 2048;

/// Minimum number of sides of a ring.
pub const MIN_RING_SIDES: u32 = 3;

/// Maximum number of sides of a ring.
pub const MAX_RING_SIDES: u32 = 1 << 20;

/// Maximum number of steps in a flight of stairs.
pub const MAX_STAIR_STEPS: u32 = 1 << 20;

/// Maximum number of points in a starburst.
pub const MAX_STARBURST_POINTS: usize = 1 << 24;

/// Vertex indices are `u32`, so no mesh may hold more vertices than this.
pub const MAX_MESH_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Base radius of every ziggurat level before scaling.
pub const DEFAULT_ZIGGURAT_RADIUS: f64 = 2.0;

/// Unit radius of knotted and segmented stacks; level scales apply on top.
pub const DEFAULT_KNOTTED_RADIUS: f64 = 1.0;

// =============================================================================
// ZIGGURAT CONTROLS
// =============================================================================

/// Accepted number of ziggurat levels.
pub const LEVELS_RANGE: RangeInclusive<usize> = 1..=50;

/// Accepted number of sides per ziggurat level.
pub const SIDES_RANGE: RangeInclusive<u32> = 3..=20;

/// Accepted height of one ziggurat level.
pub const HEIGHT_RANGE: RangeInclusive<f64> = 0.1..=2.0;

/// Accepted per-level scale decay.
pub const SCALE_RANGE: RangeInclusive<f64> = 0.5..=0.99;

/// Default number of ziggurat levels.
pub const DEFAULT_LEVELS: usize = 30;

/// Default number of sides.
pub const DEFAULT_SIDES: u32 = 4;

/// Default level height.
pub const DEFAULT_HEIGHT: f64 = 0.2;

/// Default per-level scale decay.
pub const DEFAULT_SCALE: f64 = 0.9;
