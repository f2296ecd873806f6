//! Configuration types for the integrators.

use crate::error::PhysicsError;
use crate::float::Float;

/// Default minimal substep length, in simulation time units.
pub const DEFAULT_MIN_STEP: f64 = 0.01;

/// Configuration for the adaptive RK4 integrator.
///
/// # Builder Pattern
/// ```
/// use kinema::config::IntegratorConfig;
///
/// let config: IntegratorConfig<f64> = IntegratorConfig::new()
///     .with_min_step(0.005);
/// assert_eq!(config.substeps(1.0), 200);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegratorConfig<F: Float> {
    /// Longest substep the integrator will take. A tick of length `dt` is
    /// split into `max(1, ceil(dt / min_step))` equal substeps. Default: 0.01.
    pub min_step: F,
}

impl<F: Float> IntegratorConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        IntegratorConfig {
            min_step: F::from_f64(DEFAULT_MIN_STEP),
        }
    }

    /// Set the minimal substep threshold.
    pub fn with_min_step(mut self, min_step: F) -> Self {
        self.min_step = min_step;
        self
    }

    /// Reject thresholds that would produce no substeps or unbounded ones.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.min_step.is_finite() || self.min_step <= F::zero() {
            return Err(PhysicsError::InvalidArgument("min_step must be positive and finite"));
        }
        Ok(())
    }

    /// Number of equal substeps used for a tick of length `dt`.
    pub fn substeps(&self, dt: F) -> usize {
        (dt / self.min_step).ceil().to_usize().max(1)
    }
}

impl<F: Float> Default for IntegratorConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold() {
        let config: IntegratorConfig<f64> = IntegratorConfig::default();
        assert_eq!(config.min_step, 0.01);
    }

    #[test]
    fn substeps_round_up() {
        let config: IntegratorConfig<f64> = IntegratorConfig::new().with_min_step(0.25);
        assert_eq!(config.substeps(1.0), 4);
        assert_eq!(config.substeps(1.1), 5);
        assert_eq!(config.substeps(0.1), 1);
        assert_eq!(config.substeps(0.0), 1);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let config: IntegratorConfig<f32> = IntegratorConfig::new().with_min_step(0.0);
        assert!(config.validate().is_err());
        let config: IntegratorConfig<f32> = IntegratorConfig::new().with_min_step(f32::NAN);
        assert!(config.validate().is_err());
    }
}
