//! Satellites circling parent bodies, advanced by elapsed-time ticks.

mod body;

pub use body::{theta_at, BodyData, BodyId, Motion, Satellite};

use slotmap::SlotMap;

use crate::error::{OperationError, Result};
use crate::math::Point3;

/// Arena of bodies, updated parent-before-child on every tick.
///
/// A satellite can only be added once its parent exists, so insertion order
/// is always a valid update order.
#[derive(Debug, Default)]
pub struct OrbitSystem {
    bodies: SlotMap<BodyId, BodyData>,
    order: Vec<BodyId>,
}

impl OrbitSystem {
    /// Creates a new, empty orbit system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the system has no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a body that stays at `position` and returns its ID.
    pub fn add_fixed(&mut self, position: Point3) -> BodyId {
        let id = self.bodies.insert(BodyData {
            position,
            motion: Motion::Fixed,
        });
        self.order.push(id);
        id
    }

    /// Inserts a satellite of `parent` and returns its ID.
    ///
    /// The satellite starts at angle `phase` and is immediately placed
    /// relative to the parent's current position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the parent does not exist, the distance
    /// is negative or non-finite, the period is not a positive finite number,
    /// or the phase is non-finite.
    pub fn add_satellite(
        &mut self,
        parent: BodyId,
        distance: f64,
        period: f64,
        phase: f64,
    ) -> Result<BodyId> {
        let parent_position = self.body(parent)?.position;
        if !(distance.is_finite() && distance >= 0.0) {
            return Err(OperationError::InvalidArgument(format!(
                "orbit distance must be non-negative, got {distance}"
            ))
            .into());
        }
        if !(period.is_finite() && period > 0.0) {
            return Err(OperationError::InvalidArgument(format!(
                "orbit period must be positive, got {period}"
            ))
            .into());
        }
        if !phase.is_finite() {
            return Err(
                OperationError::InvalidArgument("orbit phase must be finite".into()).into(),
            );
        }

        let mut satellite = Satellite {
            parent,
            distance,
            period,
            theta: phase,
        };
        satellite.advance(0.0);
        let position = parent_position + satellite.offset();

        let id = self.bodies.insert(BodyData {
            position,
            motion: Motion::Orbit(satellite),
        });
        self.order.push(id);
        Ok(id)
    }

    /// Returns a reference to the body data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the body is not in this system.
    pub fn body(&self, id: BodyId) -> Result<&BodyData> {
        self.bodies
            .get(id)
            .ok_or_else(|| OperationError::InvalidArgument("unknown body".into()).into())
    }

    /// Current world position of a body.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the body is not in this system.
    pub fn position(&self, id: BodyId) -> Result<Point3> {
        Ok(self.body(id)?.position)
    }

    /// Moves a fixed body. Satellites follow on the next tick.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the body does not exist or is a satellite.
    pub fn set_position(&mut self, id: BodyId, position: Point3) -> Result<()> {
        let body = self
            .bodies
            .get_mut(id)
            .ok_or_else(|| OperationError::InvalidArgument("unknown body".into()))?;
        match body.motion {
            Motion::Fixed => {
                body.position = position;
                Ok(())
            }
            Motion::Orbit(_) => Err(OperationError::InvalidArgument(
                "satellite positions are driven by their orbit".into(),
            )
            .into()),
        }
    }

    /// Advances every satellite by `delta` seconds.
    ///
    /// Each satellite accumulates `2π·delta/period` into its running angle
    /// and is then placed relative to its parent's already-updated position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `delta` is negative or non-finite.
    pub fn tick(&mut self, delta: f64) -> Result<()> {
        if !(delta.is_finite() && delta >= 0.0) {
            return Err(OperationError::InvalidArgument(format!(
                "tick delta must be non-negative, got {delta}"
            ))
            .into());
        }

        for &id in &self.order {
            let parent_position = match &self.bodies[id].motion {
                Motion::Fixed => continue,
                Motion::Orbit(sat) => self.bodies[sat.parent].position,
            };
            let body = &mut self.bodies[id];
            if let Motion::Orbit(sat) = &mut body.motion {
                sat.advance(delta);
                body.position = parent_position + sat.offset();
            }
        }

        tracing::trace!(delta, bodies = self.order.len(), "advanced orbits");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::math::Vector3;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn solar_system() -> (OrbitSystem, BodyId, BodyId, BodyId) {
        let mut system = OrbitSystem::new();
        let sun = system.add_fixed(Point3::origin());
        let earth = system.add_satellite(sun, 30.0, 8.0, 0.0).unwrap();
        let moon = system.add_satellite(earth, 4.0, 2.0, 0.0).unwrap();
        (system, sun, earth, moon)
    }

    fn theta(system: &OrbitSystem, id: BodyId) -> f64 {
        match &system.body(id).unwrap().motion {
            Motion::Orbit(sat) => sat.theta,
            Motion::Fixed => panic!("not a satellite"),
        }
    }

    #[test]
    fn theta_is_periodic() {
        for t in [0.0, 0.3, 1.7, 5.25] {
            let a = theta_at(0.4, 8.0, t);
            let b = theta_at(0.4, 8.0, t + 8.0);
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
        assert_relative_eq!(theta_at(0.0, 8.0, 2.0), FRAC_PI_2);
    }

    #[test]
    fn theta_stays_in_range() {
        for t in [0.0, 3.9, 4.0, 7.99, 100.0] {
            let th = theta_at(1.0, 4.0, t);
            assert!((0.0..TAU).contains(&th));
        }
    }

    #[test]
    fn satellites_start_at_phase() {
        let mut system = OrbitSystem::new();
        let sun = system.add_fixed(Point3::new(1.0, 2.0, 3.0));
        let planet = system.add_satellite(sun, 5.0, 10.0, PI).unwrap();
        assert_relative_eq!(
            system.position(planet).unwrap(),
            Point3::new(-4.0, 2.0, 3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn ticks_accumulate_like_closed_form() {
        let (mut system, _, earth, _) = solar_system();
        let mut elapsed = 0.0;
        for delta in [0.016, 0.017, 0.5, 1.0, 3.3, 0.016] {
            system.tick(delta).unwrap();
            elapsed += delta;
            assert_relative_eq!(
                theta(&system, earth),
                theta_at(0.0, 8.0, elapsed),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn full_period_returns_home() {
        let (mut system, _, earth, _) = solar_system();
        let start = system.position(earth).unwrap();
        for _ in 0..8 {
            system.tick(1.0).unwrap();
        }
        assert_relative_eq!(system.position(earth).unwrap(), start, epsilon = 1e-9);
    }

    #[test]
    fn child_follows_updated_parent() {
        let (mut system, _, earth, moon) = solar_system();
        system.tick(2.0).unwrap();

        let earth_pos = system.position(earth).unwrap();
        let moon_theta = theta(&system, moon);
        let expected =
            earth_pos + Vector3::new(4.0 * moon_theta.cos(), 4.0 * moon_theta.sin(), 0.0);
        assert_relative_eq!(system.position(moon).unwrap(), expected, epsilon = 1e-12);

        // earth after a quarter turn sits on +y
        assert_relative_eq!(earth_pos, Point3::new(0.0, 30.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn moving_fixed_body_moves_satellites() {
        let (mut system, sun, earth, _) = solar_system();
        system.set_position(sun, Point3::new(10.0, 0.0, 5.0)).unwrap();
        system.tick(0.0).unwrap();
        assert_relative_eq!(
            system.position(earth).unwrap(),
            Point3::new(40.0, 0.0, 5.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn satellite_positions_cannot_be_set() {
        let (mut system, _, earth, _) = solar_system();
        let err = system.set_position(earth, Point3::origin()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn invalid_orbits_fail() {
        let (mut system, sun, _, _) = solar_system();
        assert!(system.add_satellite(sun, 1.0, 0.0, 0.0).is_err());
        assert!(system.add_satellite(sun, -1.0, 1.0, 0.0).is_err());
        assert!(system.add_satellite(sun, 1.0, 1.0, f64::NAN).is_err());

        let mut other = OrbitSystem::new();
        let foreign = other.add_fixed(Point3::origin());
        let mut empty = OrbitSystem::new();
        assert!(empty.add_satellite(foreign, 1.0, 1.0, 0.0).is_err());
        assert_eq!(system.len(), 3);
    }

    #[test]
    fn negative_delta_fails() {
        let (mut system, _, _, _) = solar_system();
        assert_eq!(system.tick(-0.1).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert!(system.tick(f64::NAN).is_err());
    }
}
