use std::f64::consts::TAU;

use crate::math::{Point3, Vector3};

slotmap::new_key_type! {
    /// Unique identifier for a body in an orbit system.
    pub struct BodyId;
}

/// How a body moves each tick.
#[derive(Debug, Clone)]
pub enum Motion {
    /// Stays where it is put.
    Fixed,
    /// Circles its parent in the parent's XY plane.
    Orbit(Satellite),
}

/// Orbital parameters and running phase of a satellite.
#[derive(Debug, Clone)]
pub struct Satellite {
    /// The body being orbited.
    pub parent: BodyId,
    /// Distance from the parent's position.
    pub distance: f64,
    /// Seconds per full revolution.
    pub period: f64,
    /// Running angle in `[0, 2π)`.
    pub theta: f64,
}

impl Satellite {
    /// Advances the running angle by `delta` seconds, wrapping into `[0, 2π)`.
    pub fn advance(&mut self, delta: f64) {
        self.theta = (self.theta + TAU * delta / self.period).rem_euclid(TAU);
    }

    /// Offset from the parent at the current angle.
    #[must_use]
    pub fn offset(&self) -> Vector3 {
        let (sin, cos) = self.theta.sin_cos();
        Vector3::new(self.distance * cos, self.distance * sin, 0.0)
    }
}

/// Data associated with a body.
#[derive(Debug, Clone)]
pub struct BodyData {
    /// Current world position.
    pub position: Point3,
    /// How the body moves.
    pub motion: Motion,
}

/// Closed-form angle of a satellite `t` seconds after it started at `phase`.
#[must_use]
pub fn theta_at(phase: f64, period: f64, t: f64) -> f64 {
    (phase + TAU * t / period).rem_euclid(TAU)
}
