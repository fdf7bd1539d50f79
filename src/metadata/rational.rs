//! Rational number types for EXIF entry values.
//!
//! EXIF stores many quantities (exposure time, resolutions, GPS coordinates) as a pair of
//! 32-bit integers forming a fraction. These values are never packed inline into a directory
//! entry since they are eight bytes wide; they always live in a payload referenced by offset.

use std::fmt;

/// An unsigned rational value, a `u32` numerator over a `u32` denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnsignedRational {
    /// The numerator of the fraction.
    pub numerator: u32,
    /// The denominator of the fraction.
    pub denominator: u32,
}

impl UnsignedRational {
    /// Creates a new unsigned rational.
    #[must_use]
    pub fn new(numerator: u32, denominator: u32) -> Self {
        UnsignedRational {
            numerator,
            denominator,
        }
    }

    /// The value of the fraction as a float. A zero denominator yields infinity or NaN.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for UnsignedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A signed rational value, an `i32` numerator over an `i32` denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignedRational {
    /// The numerator of the fraction.
    pub numerator: i32,
    /// The denominator of the fraction.
    pub denominator: i32,
}

impl SignedRational {
    /// Creates a new signed rational.
    #[must_use]
    pub fn new(numerator: i32, denominator: i32) -> Self {
        SignedRational {
            numerator,
            denominator,
        }
    }

    /// The value of the fraction as a float. A zero denominator yields infinity or NaN.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for SignedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_f64() {
        assert_eq!(UnsignedRational::new(3000000, 10000).to_f64(), 300.0);
        assert_eq!(SignedRational::new(-1, 2).to_f64(), -0.5);
    }

    #[test]
    fn display() {
        assert_eq!(UnsignedRational::new(72, 1).to_string(), "72/1");
        assert_eq!(SignedRational::new(-7, 2).to_string(), "-7/2");
    }
}
