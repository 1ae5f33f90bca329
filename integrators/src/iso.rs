//! Iso Surface

use crate::*;
use volvis_core::color::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::scene::Scene;

/// Maximum number of bisection steps.
pub const BISECTION_MAX_ITERATIONS: usize = 100;

/// Bisection stops once a sample is this close to the iso value.
pub const BISECTION_TOLERANCE: Float = 0.01;

/// Default surface color.
pub const ISO_COLOR: RGBColor = RGBColor::new(0.8, 0.8, 0.2);

/// Renders the first crossing of the iso value along the ray.
#[derive(Copy, Clone, Debug)]
pub struct IsoIntegrator {
    /// Distance between samples.
    pub step: Float,

    /// Unshaded surface color.
    pub surface_color: RGBColor,
}

impl Default for IsoIntegrator {
    fn default() -> Self {
        Self {
            step: SAMPLE_STEP,
            surface_color: ISO_COLOR,
        }
    }
}

impl VolumeIntegrator for IsoIntegrator {
    /// Returns the opaque, optionally shaded, surface color at the refined
    /// crossing or transparent black if the iso value is never reached.
    ///
    /// * `ray`   - The ray.
    /// * `scene` - The scene.
    fn li(&self, ray: &Ray, scene: &Scene) -> RGBAColor {
        let iso_value = scene.config.iso_value;

        let mut t_prev = ray.t_min;
        for (t, p) in march(ray, self.step) {
            if scene.sample_scalar(&p) >= iso_value {
                let sample = |t: Float| scene.sample_scalar(&ray.at(t));
                let t_hit = bisection_accuracy(sample, t_prev, t, iso_value);
                let color = scene.shade(&self.surface_color, &ray.at(t_hit));
                return RGBAColor::from_rgb(color, 1.0);
            }
            t_prev = t;
        }

        RGBAColor::TRANSPARENT
    }
}

/// Refines the position of an iso value crossing inside `[t0, t1]` with a
/// bounded binary search and returns the last midpoint evaluated. The bracket
/// may straddle the crossing in either direction. Pathological fields may
/// exhaust the iteration limit without meeting the tolerance.
///
/// * `sample`    - Returns the scalar value at a ray parameter.
/// * `t0`        - Start of the bracket.
/// * `t1`        - End of the bracket.
/// * `iso_value` - The value to locate.
pub fn bisection_accuracy<F>(sample: F, t0: Float, t1: Float, iso_value: Float) -> Float
where
    F: Fn(Float) -> Float,
{
    // Rising when the field increases through the iso value from `t0`.
    let rising = sample(t0) < iso_value;

    let (mut t0, mut t1) = (t0, t1);
    let mut t_mid = t0;
    for _ in 0..BISECTION_MAX_ITERATIONS {
        t_mid = 0.5 * (t0 + t1);
        let val = sample(t_mid);
        if (val - iso_value).abs() < BISECTION_TOLERANCE {
            break;
        }

        if (val < iso_value) == rising {
            t0 = t_mid;
        } else {
            t1 = t_mid;
        }
    }
    t_mid
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn flat_field_terminates() {
        let t = bisection_accuracy(|_| 0.0, 2.0, 3.0, 95.0);
        assert!((2.0..=3.0).contains(&t));
    }

    #[test]
    fn zero_width_bracket_returns_its_position() {
        assert_eq!(bisection_accuracy(|t| t, 4.0, 4.0, 10.0), 4.0);
    }

    proptest! {
        #[test]
        fn converges_on_rising_linear_field(
            crossing in 0.0..100.0 as Float,
            before in 0.01..1.0 as Float,
            after in 0.0..1.0 as Float,
        ) {
            // Field value equals the ray parameter so the value tolerance is
            // also the distance tolerance.
            let t = bisection_accuracy(|t| t, crossing - before, crossing + after, crossing);
            prop_assert!((t - crossing).abs() < BISECTION_TOLERANCE);
        }

        #[test]
        fn converges_on_falling_linear_field(
            crossing in 0.0..100.0 as Float,
            before in 0.0..1.0 as Float,
            after in 0.01..1.0 as Float,
        ) {
            let field = |t: Float| 200.0 - t;
            let t = bisection_accuracy(field, crossing - before, crossing + after, field(crossing));
            prop_assert!((t - crossing).abs() < BISECTION_TOLERANCE);
        }
    }
}
