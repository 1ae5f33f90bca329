//! 2-D Transfer Function

use crate::color::*;
use crate::pbrt::*;

/// Classifies samples by (intensity, gradient magnitude) with a triangular
/// region whose apex sits at `(intensity, 0)` and which opens upwards to a
/// half-width of `radius` at the maximum gradient magnitude.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransferFunction2D {
    /// Intensity of the triangle's apex.
    pub intensity: Float,

    /// Half-width of the triangle at the maximum gradient magnitude.
    pub radius: Float,

    /// Color of classified samples. Alpha is the peak opacity.
    pub color: RGBAColor,
}

impl TransferFunction2D {
    /// Create a new `TransferFunction2D`.
    ///
    /// * `intensity` - Intensity of the triangle's apex.
    /// * `radius`    - Half-width of the triangle at the maximum gradient magnitude.
    /// * `color`     - Color of classified samples.
    pub fn new(intensity: Float, radius: Float, color: RGBAColor) -> Self {
        Self {
            intensity,
            radius,
            color,
        }
    }

    /// Returns the opacity of a sample.
    ///
    /// A sample is inside the triangle when its gradient magnitude lies on or
    /// above both slanted edges. Inside, opacity falls off linearly from the
    /// configured alpha on the vertical line through the apex to zero at a
    /// horizontal distance of `radius`, independent of the sample's gradient
    /// magnitude. Outside, opacity is zero. A non-positive radius classifies
    /// nothing.
    ///
    /// * `intensity`              - Sample intensity.
    /// * `gradient_magnitude`     - Sample gradient magnitude.
    /// * `max_gradient_magnitude` - Maximum gradient magnitude of the volume.
    pub fn opacity(
        &self,
        intensity: Float,
        gradient_magnitude: Float,
        max_gradient_magnitude: Float,
    ) -> Float {
        if self.radius <= 0.0 {
            return 0.0;
        }

        // Edge test `m >= (max_m / radius) * |i - apex|` without the division.
        let distance = (intensity - self.intensity).abs();
        if gradient_magnitude * self.radius < max_gradient_magnitude * distance {
            return 0.0;
        }

        self.color.a * max(0.0, 1.0 - distance / self.radius)
    }

    /// Returns the classified sample color.
    ///
    /// * `intensity`              - Sample intensity.
    /// * `gradient_magnitude`     - Sample gradient magnitude.
    /// * `max_gradient_magnitude` - Maximum gradient magnitude of the volume.
    pub fn classify(
        &self,
        intensity: Float,
        gradient_magnitude: Float,
        max_gradient_magnitude: Float,
    ) -> RGBAColor {
        RGBAColor::from_rgb(
            self.color.rgb(),
            self.opacity(intensity, gradient_magnitude, max_gradient_magnitude),
        )
    }

    /// Returns human-readable descriptions of degenerate settings.
    pub fn validate(&self) -> Vec<String> {
        if self.radius <= 0.0 {
            vec![format!("2D transfer function radius {} is not positive", self.radius)]
        } else {
            vec![]
        }
    }
}

impl Default for TransferFunction2D {
    fn default() -> Self {
        Self::new(150.0, 40.0, RGBAColor::new(0.0, 0.8, 0.6, 0.3))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    const MAX_MAGNITUDE: Float = 50.0;

    fn tf() -> TransferFunction2D {
        TransferFunction2D::new(100.0, 20.0, RGBAColor::new(1.0, 0.5, 0.0, 0.8))
    }

    #[test]
    fn apex_column_has_base_alpha() {
        assert_eq!(tf().opacity(100.0, MAX_MAGNITUDE, MAX_MAGNITUDE), 0.8);
        assert_eq!(tf().opacity(100.0, 1.0, MAX_MAGNITUDE), 0.8);
    }

    #[test]
    fn point_outside_triangle_is_transparent() {
        assert_eq!(tf().opacity(180.0, 0.0, MAX_MAGNITUDE), 0.0);
        // Inside the radius but below the slanted edge.
        assert_eq!(tf().opacity(110.0, 10.0, MAX_MAGNITUDE), 0.0);
    }

    #[test]
    fn opacity_falls_off_linearly_in_intensity() {
        let a = tf().opacity(110.0, MAX_MAGNITUDE, MAX_MAGNITUDE);
        assert!(approx_eq!(f32, a, 0.4, epsilon = 0.0001));
        let a = tf().opacity(85.0, MAX_MAGNITUDE, MAX_MAGNITUDE);
        assert!(approx_eq!(f32, a, 0.2, epsilon = 0.0001));
        assert_eq!(tf().opacity(120.0, MAX_MAGNITUDE, MAX_MAGNITUDE), 0.0);
    }

    #[test]
    fn non_positive_radius_classifies_nothing() {
        let tf = TransferFunction2D::new(100.0, 0.0, RGBAColor::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(tf.opacity(100.0, MAX_MAGNITUDE, MAX_MAGNITUDE), 0.0);
        assert_eq!(tf.validate().len(), 1);
    }

    #[test]
    fn classify_keeps_base_rgb() {
        let c = tf().classify(100.0, MAX_MAGNITUDE, MAX_MAGNITUDE);
        assert_eq!(c, RGBAColor::new(1.0, 0.5, 0.0, 0.8));
    }

    proptest! {
        #[test]
        fn opacity_is_bounded_by_base_alpha(
            i in 0.0..255.0f32, m in 0.0..100.0f32, alpha in 0.0..=1.0f32,
        ) {
            let tf = TransferFunction2D::new(100.0, 20.0, RGBAColor::new(1.0, 1.0, 1.0, alpha));
            let a = tf.opacity(i, m, MAX_MAGNITUDE);
            prop_assert!(a >= 0.0 && a <= alpha);
        }

        #[test]
        fn opacity_is_symmetric_about_apex(d in 0.0..40.0f32, m in 0.0..50.0f32) {
            // Rounding may put exact edge points on different sides.
            prop_assume!((m * 20.0 - MAX_MAGNITUDE * d).abs() > 0.01);
            let left = tf().opacity(100.0 - d, m, MAX_MAGNITUDE);
            let right = tf().opacity(100.0 + d, m, MAX_MAGNITUDE);
            prop_assert!(approx_eq!(f32, left, right, epsilon = 0.0001));
        }
    }
}
