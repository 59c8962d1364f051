//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! Configuration values are centimetres; the drawing works in pixels. The only
//! way from one to the other is through a [`Scaler`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// Inches per centimetre, as printed on dimension labels
pub const INCH_PER_CM: f64 = 0.393701;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in centimetres
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Cm(pub f64);

impl Cm {
    pub const ZERO: Cm = Cm(0.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn max(self, other: Cm) -> Cm {
        Cm(self.0.max(other.0))
    }

    #[inline]
    pub fn min(self, other: Cm) -> Cm {
        Cm(self.0.min(other.0))
    }

    /// Same length in inches
    #[inline]
    pub fn inches(self) -> f64 {
        self.0 * INCH_PER_CM
    }

    /// Round to one decimal place
    #[inline]
    pub fn round1(self) -> Cm {
        Cm((self.0 * 10.0).round() / 10.0)
    }
}

impl Add for Cm {
    type Output = Cm;
    fn add(self, rhs: Cm) -> Cm {
        Cm(self.0 + rhs.0)
    }
}
impl Sub for Cm {
    type Output = Cm;
    fn sub(self, rhs: Cm) -> Cm {
        Cm(self.0 - rhs.0)
    }
}
impl Mul<f64> for Cm {
    type Output = Cm;
    fn mul(self, rhs: f64) -> Cm {
        Cm(self.0 * rhs)
    }
}
impl Div<f64> for Cm {
    type Output = Cm;
    fn div(self, rhs: f64) -> Cm {
        Cm(self.0 / rhs)
    }
}
impl Neg for Cm {
    type Output = Cm;
    fn neg(self) -> Cm {
        Cm(-self.0)
    }
}

impl fmt::Display for Cm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&apron_svg::fmt_num(self.0))
    }
}

/// Converts centimetres to drawing pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    pub px_per_cm: f64,
}

impl Scaler {
    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(px_per_cm: f64) -> Result<Self, NumericError> {
        if px_per_cm.is_nan() {
            Err(NumericError::NaN)
        } else if px_per_cm.is_infinite() {
            Err(NumericError::Infinite)
        } else if px_per_cm == 0.0 {
            Err(NumericError::Zero)
        } else if px_per_cm < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { px_per_cm })
        }
    }

    /// Convert a length to pixels
    #[inline]
    pub fn px(&self, l: Cm) -> f64 {
        l.0 * self.px_per_cm
    }

    /// Convert a pair of lengths to a pixel position
    #[inline]
    pub fn point(&self, x: Cm, y: Cm) -> DVec2 {
        dvec2(self.px(x), self.px(y))
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Scaler { px_per_cm: 4.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaler_rejects_degenerate_scales() {
        assert_eq!(Scaler::try_new(0.0), Err(NumericError::Zero));
        assert_eq!(Scaler::try_new(-2.0), Err(NumericError::Negative));
        assert_eq!(Scaler::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Scaler::try_new(4.0).map(|s| s.px(Cm(45.0))), Ok(180.0));
    }

    #[test]
    fn cm_rounds_and_converts() {
        assert_eq!(Cm(23.099999).round1(), Cm(23.1));
        assert_eq!(format!("{:.1}", Cm(70.0).inches()), "27.6");
        assert_eq!(Cm(46.9).to_string(), "46.9");
    }
}
