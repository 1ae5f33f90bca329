//! RGB Color

use crate::pbrt::*;
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// A linear RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBColor {
    /// Red channel.
    pub r: Float,

    /// Green channel.
    pub g: Float,

    /// Blue channel.
    pub b: Float,
}

impl RGBColor {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new RGB color.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color with all channels set to `v`.
    ///
    /// * `v` - The channel value.
    pub const fn gray(v: Float) -> Self {
        Self::new(v, v, v)
    }

    /// Returns true if any channel is NaN.
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Clamps every channel to `[low, high]`.
    ///
    /// * `low`  - Lower bound.
    /// * `high` - Upper bound.
    pub fn clamp(&self, low: Float, high: Float) -> Self {
        Self::new(clamp(self.r, low, high), clamp(self.g, low, high), clamp(self.b, low, high))
    }

    /// Returns the luminance (Rec. 709 weights).
    pub fn y(&self) -> Float {
        0.212671 * self.r + 0.715160 * self.g + 0.072169 * self.b
    }
}

impl Add for RGBColor {
    type Output = Self;

    /// Adds the given color and returns the result.
    ///
    /// * `other` - The color to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    /// Performs the `+=` operation.
    ///
    /// * `other` - The color to add.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<Float> for RGBColor {
    type Output = Self;

    /// Scale the color.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: Float) -> Self::Output {
        Self::new(self.r * f, self.g * f, self.b * f)
    }
}

impl Mul<RGBColor> for Float {
    type Output = RGBColor;

    /// Scale the color.
    ///
    /// * `c` - The color.
    fn mul(self, c: RGBColor) -> Self::Output {
        c * self
    }
}

impl fmt::Display for RGBColor {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
