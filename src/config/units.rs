//! Unit types for physical quantities.

use core::ops::{Add, Sub};

use libm::roundf;
use serde::Deserialize;

/// Needle angle in degrees.
///
/// Used for configuration and the user-facing API. Internally converted to
/// steps through the gauge's steps-per-degree ratio.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to the nearest whole step.
    ///
    /// Saturates at the `i32` range; the motor clamps to its sweep anyway.
    #[inline]
    pub fn to_steps(self, steps_per_degree: f32) -> i32 {
        roundf(self.0 * steps_per_degree) as i32
    }

    /// Create from a step count.
    #[inline]
    pub fn from_steps(steps: u16, steps_per_degree: f32) -> Self {
        Self(steps as f32 / steps_per_degree)
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
}

impl UnitExt for f32 {
    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }
}
