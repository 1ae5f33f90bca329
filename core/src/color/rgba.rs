//! RGBA Color

use super::RGBColor;
use crate::pbrt::*;
use std::fmt;
use std::ops::{Add, Mul};

/// A linear RGB color with straight (non-premultiplied) opacity as stored in
/// transfer functions, or an accumulated premultiplied color when produced by
/// compositing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBAColor {
    /// Red channel.
    pub r: Float,

    /// Green channel.
    pub g: Float,

    /// Blue channel.
    pub b: Float,

    /// Opacity.
    pub a: Float,
}

impl RGBAColor {
    /// Fully transparent black. This is the cleared frame buffer value.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new RGBA color.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    /// * `a` - Opacity.
    pub const fn new(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB channels and an opacity.
    ///
    /// * `rgb` - The color channels.
    /// * `a`   - Opacity.
    pub const fn from_rgb(rgb: RGBColor, a: Float) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// Returns the color channels.
    pub const fn rgb(&self) -> RGBColor {
        RGBColor::new(self.r, self.g, self.b)
    }

    /// Returns true if any channel is NaN.
    pub fn has_nans(&self) -> bool {
        self.rgb().has_nans() || self.a.is_nan()
    }

    /// Accumulates a sample behind the color accumulated so far using
    /// front-to-back compositing. The sample is weighted by its own opacity
    /// and by the fraction `1 - a` not yet occluded.
    ///
    /// * `sample` - The sample color with straight opacity.
    pub fn composite(&mut self, sample: &RGBAColor) {
        let w = (1.0 - self.a) * sample.a;
        self.r += w * sample.r;
        self.g += w * sample.g;
        self.b += w * sample.b;
        self.a += w;
    }
}

impl Add for RGBAColor {
    type Output = Self;

    /// Adds the given color and returns the result.
    ///
    /// * `other` - The color to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b, self.a + other.a)
    }
}

impl Mul<RGBAColor> for Float {
    type Output = RGBAColor;

    /// Scale all channels.
    ///
    /// * `c` - The color.
    fn mul(self, c: RGBAColor) -> Self::Output {
        RGBAColor::new(self * c.r, self * c.g, self * c.b, self * c.a)
    }
}

impl fmt::Display for RGBAColor {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn rgba_sample()(
            r in 0.0..=1.0f32, g in 0.0..=1.0f32, b in 0.0..=1.0f32, a in 0.0..=1.0f32,
        ) -> RGBAColor {
            RGBAColor::new(r, g, b, a)
        }
    }

    #[test]
    fn opaque_sample_saturates_alpha() {
        let mut acc = RGBAColor::TRANSPARENT;
        acc.composite(&RGBAColor::new(0.2, 0.4, 0.6, 1.0));
        assert_eq!(acc, RGBAColor::new(0.2, 0.4, 0.6, 1.0));

        // Nothing behind an opaque sample is visible.
        acc.composite(&RGBAColor::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(acc, RGBAColor::new(0.2, 0.4, 0.6, 1.0));
    }

    proptest! {
        #[test]
        fn transparent_samples_contribute_nothing(
            samples in prop::collection::vec(rgba_sample(), 0..32),
            r in 0.0..=1.0f32, g in 0.0..=1.0f32, b in 0.0..=1.0f32,
        ) {
            let mut acc = RGBAColor::TRANSPARENT;
            for s in samples.iter() {
                acc.composite(s);
            }
            let before = acc;
            acc.composite(&RGBAColor::new(r, g, b, 0.0));
            prop_assert_eq!(acc, before);
        }

        #[test]
        fn accumulated_alpha_is_non_decreasing_and_bounded(
            samples in prop::collection::vec(rgba_sample(), 0..64),
        ) {
            let mut acc = RGBAColor::TRANSPARENT;
            for s in samples.iter() {
                let prev = acc.a;
                acc.composite(s);
                prop_assert!(acc.a >= prev);
                prop_assert!(acc.a >= 0.0 && acc.a <= 1.0);
            }
        }
    }
}
