//! Rigid-body state advanced once per tick by its bound integrator.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::integrator::{Integrate, Integrator};
use crate::observer::{NoOpObserver, UpdateObserver};
use crate::vector::Vector2d;

/// A 2D point mass with a heading.
///
/// The host sets or clears `force` before each tick and then calls
/// [`update`](Solid::update). A zero-magnitude force means "no force this
/// tick".
#[derive(Clone, Debug, PartialEq)]
pub struct Solid<F: Float> {
    /// Must be positive and finite for an update to run.
    pub mass: F,
    pub velocity: Vector2d<F>,
    pub position: Vector2d<F>,
    pub force: Vector2d<F>,
    /// Orientation in radians, kept in [0, 2π) by every update.
    pub heading: F,
    /// Heading rate in degrees per unit time.
    pub angular_velocity: F,
    /// The update operation run by [`update`](Solid::update).
    pub integrator: Integrator<F>,
}

impl<F: Float> Solid<F> {
    /// Create a solid at rest with no force applied, bound to the default
    /// adaptive RK4 integrator. Absent velocity or position default to zero.
    pub fn new(
        mass: F,
        velocity: Option<Vector2d<F>>,
        position: Option<Vector2d<F>>,
    ) -> Result<Self, PhysicsError> {
        check_mass(mass)?;
        Ok(Solid {
            mass,
            velocity: velocity.unwrap_or_else(Vector2d::zeroed),
            position: position.unwrap_or_else(Vector2d::zeroed),
            force: Vector2d::zeroed(),
            heading: F::zero(),
            angular_velocity: F::zero(),
            integrator: Integrator::default(),
        })
    }

    /// Rebind the update operation.
    pub fn with_integrator(mut self, integrator: Integrator<F>) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: F) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn apply_force(&mut self, force: Vector2d<F>) {
        self.force.copy_from(&force);
    }

    pub fn clear_force(&mut self) {
        self.force.zero();
    }

    /// Check that the state and the bound integrator can be used for a tick.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        check_mass(self.mass)?;
        self.integrator.validate()
    }

    /// Advance by `dt` with the bound integrator.
    pub fn update(&mut self, dt: F) -> Result<(), PhysicsError> {
        self.update_observed(dt, &mut NoOpObserver)
    }

    /// Advance by `dt`, reporting heading, substeps and completion to `observer`.
    pub fn update_observed<O: UpdateObserver<F>>(
        &mut self,
        dt: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        let integrator = self.integrator;
        integrator.integrate(self, dt, observer)
    }

    /// Release the solid. Taking `self` by value means no handle to it
    /// survives the call.
    pub fn destroy(self) {}
}

fn check_mass<F: Float>(mass: F) -> Result<(), PhysicsError> {
    if !mass.is_finite() || mass <= F::zero() {
        return Err(PhysicsError::InvalidState("mass must be positive and finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::EulerIntegrator;

    #[test]
    fn new_defaults_to_rest() {
        let s: Solid<f64> = Solid::new(1.0, None, None).unwrap();
        assert_eq!(s.velocity, Vector2d::zeroed());
        assert_eq!(s.position, Vector2d::zeroed());
        assert!(s.force.is_zero());
        assert_eq!(s.heading, 0.0);
        assert!(matches!(s.integrator, Integrator::Rk4(_)));
    }

    #[test]
    fn new_copies_initial_state() {
        let v = Vector2d::from_cartesian(1.0f32, 2.0);
        let p = Vector2d::from_polar(3.0f32, 0.5);
        let s = Solid::new(2.0, Some(v), Some(p)).unwrap();
        assert_eq!(s.velocity, v);
        assert_eq!(s.position, p);
    }

    #[test]
    fn new_rejects_bad_mass() {
        for mass in [0.0f64, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Solid::new(mass, None, None),
                Err(PhysicsError::InvalidState(_))
            ));
        }
    }

    #[test]
    fn clear_force_zeroes_every_component() {
        let mut s: Solid<f64> = Solid::new(1.0, None, None).unwrap();
        s.apply_force(Vector2d::from_cartesian(1.0, 1.0));
        assert!(!s.force.is_zero());
        s.clear_force();
        assert_eq!(s.force, Vector2d::zeroed());
    }

    #[test]
    fn with_integrator_rebinds_update() {
        let s: Solid<f64> = Solid::new(1.0, None, None)
            .unwrap()
            .with_integrator(Integrator::Euler(EulerIntegrator));
        assert_eq!(s.integrator, Integrator::Euler(EulerIntegrator));
    }
}
