//! Option panel for the ziggurat builder.
//!
//! [`ZigguratControls`] holds the values a GUI binds to; [`ZigguratPanel`]
//! is the "create" button that turns them into a stack.

use std::ops::RangeInclusive;

use crate::config::{
    DEFAULT_HEIGHT, DEFAULT_LEVELS, DEFAULT_SCALE, DEFAULT_SIDES, HEIGHT_RANGE, LEVELS_RANGE,
    SCALE_RANGE, SIDES_RANGE,
};
use crate::error::{GeometryError, Result};
use crate::operations::stacking::{MakeZiggurat, StackNode};

/// User-adjustable ziggurat parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZigguratControls {
    /// Number of levels.
    pub levels: usize,
    /// Sides per level.
    pub sides: u32,
    /// Height of each level.
    pub height: f64,
    /// Horizontal scale of each level relative to the one below.
    pub scale: f64,
}

impl Default for ZigguratControls {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            sides: DEFAULT_SIDES,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
        }
    }
}

impl ZigguratControls {
    /// Checks every option against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns `ParameterOutOfRange` naming the first offending option.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        check(
            "levels",
            self.levels as f64,
            &(*LEVELS_RANGE.start() as f64..=*LEVELS_RANGE.end() as f64),
        )?;
        check(
            "sides",
            f64::from(self.sides),
            &(f64::from(*SIDES_RANGE.start())..=f64::from(*SIDES_RANGE.end())),
        )?;
        check("height", self.height, &HEIGHT_RANGE)?;
        check("scale", self.scale, &SCALE_RANGE)?;
        Ok(())
    }

    /// Builds the ziggurat these controls describe.
    ///
    /// # Errors
    ///
    /// Returns `ParameterOutOfRange` if an option is out of range, or any
    /// error from the builder.
    pub fn build(&self) -> Result<StackNode> {
        self.validate()?;
        MakeZiggurat::new(self.levels, self.sides, self.height, self.scale).execute()
    }
}

fn check(parameter: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: *range.start(),
            max: *range.end(),
        }
        .into())
    }
}

/// Controls plus the stack they last produced.
#[derive(Debug, Default)]
pub struct ZigguratPanel {
    /// Current option values.
    pub controls: ZigguratControls,
    current: Option<StackNode>,
}

impl ZigguratPanel {
    /// Creates a panel with default controls and no stack yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stack built by the last successful [`ZigguratPanel::create`].
    #[must_use]
    pub fn current(&self) -> Option<&StackNode> {
        self.current.as_ref()
    }

    /// Rebuilds the stack from the current controls.
    ///
    /// The previous stack is discarded only once the new one has been built;
    /// on error it is kept unchanged.
    ///
    /// # Errors
    ///
    /// Returns any validation or construction error.
    pub fn create(&mut self) -> Result<&StackNode> {
        let stack = self.controls.build()?;
        tracing::info!(
            levels = self.controls.levels,
            sides = self.controls.sides,
            "rebuilt ziggurat"
        );
        let stack = &*self.current.insert(stack);
        Ok(stack)
    }
}
