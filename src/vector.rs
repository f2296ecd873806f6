//! 2D vector kept in both cartesian and polar form.

use crate::float::Float;
use core::ops::{Add, Sub};

/// 2D vector storing cartesian (x, y) and polar (magnitude, angle) form.
///
/// The fields are private: every mutation goes through [`set_cartesian`],
/// [`set_polar`], [`zero`] or [`copy_from`], each of which rewrites all
/// four components, so `x = magnitude * cos(angle)` and
/// `y = magnitude * sin(angle)` hold within floating-point tolerance.
///
/// Angles are radians in the `atan2` convention, (-π, π]. NaN and infinite
/// inputs are stored as given and propagate.
///
/// [`set_cartesian`]: Vector2d::set_cartesian
/// [`set_polar`]: Vector2d::set_polar
/// [`zero`]: Vector2d::zero
/// [`copy_from`]: Vector2d::copy_from
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2d<F: Float> {
    x: F,
    y: F,
    magnitude: F,
    angle: F,
}

impl<F: Float> Vector2d<F> {
    /// The zero vector.
    pub fn zeroed() -> Self {
        Vector2d { x: F::zero(), y: F::zero(), magnitude: F::zero(), angle: F::zero() }
    }

    pub fn from_cartesian(x: F, y: F) -> Self {
        let mut v = Self::zeroed();
        v.set_cartesian(x, y);
        v
    }

    pub fn from_polar(magnitude: F, angle: F) -> Self {
        let mut v = Self::zeroed();
        v.set_polar(magnitude, angle);
        v
    }

    /// Store `x`, `y` and derive magnitude and angle from them.
    pub fn set_cartesian(&mut self, x: F, y: F) {
        self.x = x;
        self.y = y;
        self.magnitude = (x * x + y * y).sqrt();
        self.angle = F::atan2(y, x);
    }

    /// Store `magnitude`, `angle` and derive x and y from them.
    pub fn set_polar(&mut self, magnitude: F, angle: F) {
        self.magnitude = magnitude;
        self.angle = angle;
        self.x = magnitude * angle.cos();
        self.y = magnitude * angle.sin();
    }

    /// Overwrite all four components with those of `src`.
    pub fn copy_from(&mut self, src: &Self) {
        *self = *src;
    }

    /// Reset all four components to exactly zero.
    pub fn zero(&mut self) {
        *self = Self::zeroed();
    }

    pub fn x(&self) -> F { self.x }
    pub fn y(&self) -> F { self.y }
    pub fn magnitude(&self) -> F { self.magnitude }
    pub fn angle(&self) -> F { self.angle }

    /// True when the stored magnitude is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude == F::zero()
    }
}

impl<F: Float> Add for Vector2d<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Self::from_cartesian(self.x + rhs.x, self.y + rhs.y) }
}

impl<F: Float> Sub for Vector2d<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Self::from_cartesian(self.x - rhs.x, self.y - rhs.y) }
}
