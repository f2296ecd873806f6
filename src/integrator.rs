//! Integrators that advance a [`Solid`] by one tick.
//!
//! Both integrators share the same heading update and the same validation:
//! a tick either commits in full or leaves the solid untouched.
//!
//! Angular velocity is divided by 360 and applied to the radian heading
//! without a 2π factor, so one "degree per unit time" turns the heading by
//! 1/360 rad rather than π/180 rad. This is the long-standing behavior hosts
//! have tuned against and is kept as is.

use crate::config::IntegratorConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::UpdateObserver;
use crate::solid::Solid;

/// An update operation that can be bound to a solid.
pub trait Integrate<F: Float> {
    /// Advance `solid` by `dt`, reporting progress to `observer`.
    fn integrate<O: UpdateObserver<F>>(
        &self,
        solid: &mut Solid<F>,
        dt: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError>;
}

/// The update operation a solid carries. New variants do not change the
/// solid's layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Integrator<F: Float> {
    Rk4(Rk4Integrator<F>),
    Euler(EulerIntegrator),
}

impl<F: Float> Default for Integrator<F> {
    fn default() -> Self {
        Integrator::Rk4(Rk4Integrator::default())
    }
}

impl<F: Float> Integrator<F> {
    /// Check the variant's own configuration.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        match self {
            Integrator::Rk4(i) => i.config.validate(),
            Integrator::Euler(_) => Ok(()),
        }
    }
}

impl<F: Float> Integrate<F> for Integrator<F> {
    fn integrate<O: UpdateObserver<F>>(
        &self,
        solid: &mut Solid<F>,
        dt: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        match self {
            Integrator::Rk4(i) => i.integrate(solid, dt, observer),
            Integrator::Euler(i) => i.integrate(solid, dt, observer),
        }
    }
}

/// Reject a time step the host should never hand us.
pub fn validate_dt<F: Float>(dt: F) -> Result<(), PhysicsError> {
    if !dt.is_finite() {
        return Err(PhysicsError::InvalidArgument("dt must be finite"));
    }
    if dt < F::zero() {
        return Err(PhysicsError::InvalidArgument("dt must be non-negative"));
    }
    Ok(())
}

/// Wrap an angle into [0, 2π).
pub fn wrap_heading<F: Float>(heading: F) -> F {
    let tau = F::tau();
    let mut wrapped = heading - tau * (heading / tau).floor();
    // Rounding can land exactly on 2π or a hair below 0.
    if wrapped >= tau {
        wrapped = wrapped - tau;
    }
    if wrapped < F::zero() {
        wrapped = F::zero();
    }
    wrapped
}

/// Heading after `dt` at `angular_velocity` (degrees per unit time, applied
/// as a fraction of 360 without the 2π factor).
pub fn advance_heading<F: Float>(heading: F, angular_velocity: F, dt: F) -> F {
    wrap_heading(heading + angular_velocity / F::from_f32(360.0) * dt)
}

/// Adaptive-substep integrator for motion under constant force.
///
/// The tick is split into `max(1, ceil(dt / min_step))` equal substeps and
/// each substep applies the exact constant-acceleration update
/// `p += v*h + a*h²/2`, `v += a*h`, which is what classical RK4 yields for
/// this force model. Splitting therefore only changes the result by
/// rounding, but keeps per-substep observation meaningful.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rk4Integrator<F: Float> {
    pub config: IntegratorConfig<F>,
}

impl<F: Float> Rk4Integrator<F> {
    pub fn new(config: IntegratorConfig<F>) -> Self {
        Rk4Integrator { config }
    }
}

impl<F: Float> Integrate<F> for Rk4Integrator<F> {
    fn integrate<O: UpdateObserver<F>>(
        &self,
        solid: &mut Solid<F>,
        dt: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        validate_dt(dt)?;
        self.config.validate()?;
        solid.validate()?;

        solid.heading = advance_heading(solid.heading, solid.angular_velocity, dt);
        observer.on_heading(solid.heading);

        let mut px = solid.position.x();
        let mut py = solid.position.y();
        let mut vx = solid.velocity.x();
        let mut vy = solid.velocity.y();

        let substeps = if solid.force.is_zero() {
            px = px + vx * dt;
            py = py + vy * dt;
            0
        } else {
            let ax = solid.force.x() / solid.mass;
            let ay = solid.force.y() / solid.mass;

            let n = self.config.substeps(dt);
            let h = dt / F::from_usize(n);
            let half_h_sq = F::half() * h * h;

            for i in 0..n {
                px = px + vx * h + ax * half_h_sq;
                py = py + vy * h + ay * half_h_sq;
                vx = vx + ax * h;
                vy = vy + ay * h;
                observer.on_substep(i, h);
            }
            solid.velocity.set_cartesian(vx, vy);
            n
        };

        solid.position.set_cartesian(px, py);
        observer.on_update_complete(substeps);
        Ok(())
    }
}

/// Single-step semi-implicit Euler: `v += a*dt`, then `p += v*dt`.
///
/// First order: the position error grows with `dt`. Cheap for tiny ticks.
/// No `a*dt²/2` term is added on top of the updated velocity, since that
/// would count the acceleration one and a half times over the tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EulerIntegrator;

impl<F: Float> Integrate<F> for EulerIntegrator {
    fn integrate<O: UpdateObserver<F>>(
        &self,
        solid: &mut Solid<F>,
        dt: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        validate_dt(dt)?;
        solid.validate()?;

        solid.heading = advance_heading(solid.heading, solid.angular_velocity, dt);
        observer.on_heading(solid.heading);

        let mut vx = solid.velocity.x();
        let mut vy = solid.velocity.y();

        let substeps = if solid.force.is_zero() {
            0
        } else {
            vx = vx + solid.force.x() / solid.mass * dt;
            vy = vy + solid.force.y() / solid.mass * dt;
            solid.velocity.set_cartesian(vx, vy);
            observer.on_substep(0, dt);
            1
        };

        let px = solid.position.x() + vx * dt;
        let py = solid.position.y() + vy * dt;
        solid.position.set_cartesian(px, py);
        observer.on_update_complete(substeps);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::TAU;

    #[test]
    fn wrap_keeps_in_range_values() {
        assert_eq!(wrap_heading(1.0f64), 1.0);
        assert_eq!(wrap_heading(0.0f64), 0.0);
    }

    #[test]
    fn wrap_full_turn_is_zero() {
        assert_eq!(wrap_heading(TAU), 0.0);
    }

    #[test]
    fn wrap_several_turns() {
        let h = wrap_heading(3.0 * TAU + 0.5);
        assert!((h - 0.5).abs() < 1e-9);
        let h = wrap_heading(-2.0 * TAU - 0.5);
        assert!((h - (TAU - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn wrap_tiny_negative_stays_in_range() {
        let h = wrap_heading(-1e-18f64);
        assert!(h >= 0.0 && h < TAU);
    }

    #[test]
    fn heading_uses_fraction_of_360() {
        // 90 "degrees" per unit time for one unit turns 0.25 rad, not π/2.
        let h = advance_heading(0.0f64, 90.0, 1.0);
        assert!((h - 0.25).abs() < 1e-12);
    }

    #[test]
    fn dt_validation() {
        assert!(validate_dt(0.0f64).is_ok());
        assert_eq!(
            validate_dt(-0.1f64),
            Err(PhysicsError::InvalidArgument("dt must be non-negative"))
        );
        assert!(validate_dt(f64::INFINITY).is_err());
        assert!(validate_dt(f32::NAN).is_err());
    }

    #[test]
    fn default_integrator_is_rk4() {
        assert!(matches!(Integrator::<f32>::default(), Integrator::Rk4(_)));
    }
}
