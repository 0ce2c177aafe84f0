//! # Unit Types
//!
//! Type-safe wrappers for the units the calculators work in. They are plain
//! `f64` newtypes so JSON stays clean (just numbers) while conversions stay
//! explicit in the compute code.
//!
//! ## Metric Units
//!
//! All calculators take metric input:
//! - Mass: grams (g)
//! - Length: centimeters (cm), meters (m)
//! - Energy: kilocalories (kcal)
//! - Volume: milliliters (ml), liters (L)
//!
//! ## Example
//!
//! ```rust
//! use gauge_core::units::{Centimeters, Meters, Milliliters, Liters};
//!
//! let height = Centimeters(175.0);
//! let height_m: Meters = height.into();
//! assert_eq!(height_m.0, 1.75);
//!
//! let water: Liters = Milliliters(2450.0).into();
//! assert_eq!(water.0, 2.45);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl Meters {
    /// Square of the length, as used by BMI (m²)
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy in kilocalories
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilocalories(pub f64);

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in milliliters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliliters(pub f64);

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<Milliliters> for Liters {
    fn from(ml: Milliliters) -> Self {
        Liters(ml.0 / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Grams);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Kilocalories);
impl_arithmetic!(Milliliters);
impl_arithmetic!(Liters);
