//! 1-D Transfer Function

use crate::color::*;
use crate::pbrt::*;
use std::cmp::Ordering;

/// Maps scalar intensities to colors through a precomputed color ramp.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferFunction1D {
    /// Ordered color ramp.
    pub color_map: Vec<RGBAColor>,

    /// Intensity mapped to the first ramp entry.
    pub index_start: Float,

    /// Width of the intensity domain covered by the ramp.
    pub index_range: Float,
}

impl TransferFunction1D {
    /// Create a new `TransferFunction1D` from a precomputed ramp.
    ///
    /// * `color_map`   - Ordered color ramp.
    /// * `index_start` - Intensity mapped to the first ramp entry.
    /// * `index_range` - Width of the intensity domain.
    pub fn new(color_map: Vec<RGBAColor>, index_start: Float, index_range: Float) -> Self {
        Self {
            color_map,
            index_start,
            index_range,
        }
    }

    /// Builds a ramp of `size` entries by linearly interpolating between
    /// control points. Entry `i` takes the color at the intensity
    /// `index_start + index_range * i / size`. Intensities before the first or
    /// after the last control point take that control point's color.
    ///
    /// * `points`      - (intensity, color) control points in any order.
    /// * `size`        - Number of ramp entries.
    /// * `index_start` - Intensity mapped to the first ramp entry.
    /// * `index_range` - Width of the intensity domain.
    pub fn from_control_points(
        points: &[(Float, RGBAColor)],
        size: usize,
        index_start: Float,
        index_range: Float,
    ) -> Self {
        let mut points = points.to_vec();
        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let color_map = (0..size)
            .map(|i| {
                let v = index_start + index_range * i as Float / size as Float;
                interpolate_control_points(&points, v)
            })
            .collect();

        Self::new(color_map, index_start, index_range)
    }

    /// Returns the ramp index for an intensity. The domain
    /// `[index_start, index_start + index_range)` is rescaled linearly to
    /// `[0, len)` and clamped to `[0, len - 1]`. A non-positive domain width
    /// maps every intensity to index 0. Returns `None` for an empty ramp.
    ///
    /// * `val` - The intensity.
    pub fn index(&self, val: Float) -> Option<usize> {
        let n = self.color_map.len();
        if n == 0 {
            return None;
        }
        if self.index_range <= 0.0 {
            return Some(0);
        }

        let range01 = (val - self.index_start) / self.index_range;
        let i = (range01 * n as Float).floor();
        // NaN fails both comparisons in `clamp` and casts to 0.
        Some(clamp(i, 0.0, (n - 1) as Float) as usize)
    }

    /// Returns the color for an intensity, transparent black for an empty
    /// ramp.
    ///
    /// * `val` - The intensity.
    pub fn lookup(&self, val: Float) -> RGBAColor {
        self.index(val)
            .map_or(RGBAColor::TRANSPARENT, |i| self.color_map[i])
    }

    /// Returns human-readable descriptions of degenerate settings.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = vec![];
        if self.color_map.is_empty() {
            problems.push(String::from("1D transfer function has an empty color map"));
        }
        if self.index_range <= 0.0 {
            problems.push(format!(
                "1D transfer function domain width {} is not positive",
                self.index_range
            ));
        }
        problems
    }
}

impl Default for TransferFunction1D {
    /// A 256 entry ramp over `[0, 256)` that is transparent below 60 and ramps
    /// from translucent red through orange to opaque white.
    fn default() -> Self {
        Self::from_control_points(
            &[
                (0.0, RGBAColor::new(0.0, 0.0, 0.0, 0.0)),
                (60.0, RGBAColor::new(0.0, 0.0, 0.0, 0.0)),
                (90.0, RGBAColor::new(0.9, 0.2, 0.1, 0.05)),
                (150.0, RGBAColor::new(1.0, 0.7, 0.3, 0.2)),
                (255.0, RGBAColor::new(1.0, 1.0, 1.0, 0.8)),
            ],
            256,
            0.0,
            256.0,
        )
    }
}

/// Linearly interpolate sorted control points at an intensity.
///
/// * `points` - Control points sorted by intensity.
/// * `v`      - The intensity.
fn interpolate_control_points(points: &[(Float, RGBAColor)], v: Float) -> RGBAColor {
    match points.iter().position(|&(x, _)| x > v) {
        None => points.last().map_or(RGBAColor::TRANSPARENT, |&(_, c)| c),
        Some(0) => points[0].1,
        Some(i) => {
            let (x0, c0) = points[i - 1];
            let (x1, c1) = points[i];
            let t = (v - x0) / (x1 - x0);
            (1.0 - t) * c0 + t * c1
        }
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

    fn ramp(n: usize) -> TransferFunction1D {
        let color_map = (0..n)
            .map(|i| RGBAColor::new(i as Float, 0.0, 0.0, 1.0))
            .collect();
        TransferFunction1D::new(color_map, 10.0, 100.0)
    }

    #[test]
    fn index_rescales_domain_linearly() {
        let tf = ramp(10);
        assert_eq!(tf.index(10.0), Some(0));
        assert_eq!(tf.index(19.9), Some(0));
        assert_eq!(tf.index(20.0), Some(1));
        assert_eq!(tf.index(65.0), Some(5));
        assert_eq!(tf.index(109.9), Some(9));
    }

    #[test]
    fn index_clamps_outside_domain() {
        let tf = ramp(10);
        assert_eq!(tf.index(-1000.0), Some(0));
        assert_eq!(tf.index(110.0), Some(9));
        assert_eq!(tf.index(1e9), Some(9));
        assert_eq!(tf.index(Float::NAN), Some(0));
    }

    #[test]
    fn degenerate_domain_maps_to_first_entry() {
        let mut tf = ramp(10);
        tf.index_range = 0.0;
        assert_eq!(tf.index(50.0), Some(0));
        assert_eq!(tf.validate().len(), 1);
    }

    #[test]
    fn empty_ramp_is_transparent() {
        let tf = TransferFunction1D::new(vec![], 0.0, 1.0);
        assert_eq!(tf.index(0.5), None);
        assert_eq!(tf.lookup(0.5), RGBAColor::TRANSPARENT);
        assert_eq!(tf.validate().len(), 1);
    }

    #[test]
    fn control_points_are_interpolated() {
        let black = RGBAColor::new(0.0, 0.0, 0.0, 0.0);
        let white = RGBAColor::new(1.0, 1.0, 1.0, 1.0);
        let points = [(100.0, white), (0.0, black)];
        let tf = TransferFunction1D::from_control_points(&points, 4, 0.0, 200.0);

        assert_eq!(tf.color_map.len(), 4);
        assert_eq!(tf.color_map[0], black);
        assert!(approx_eq!(f32, tf.color_map[1].a, 0.5, epsilon = 0.0001));
        assert_eq!(tf.color_map[2], white);
        assert_eq!(tf.color_map[3], white);
    }

    #[test]
    fn default_ramp_is_valid() {
        let tf = TransferFunction1D::default();
        assert_eq!(tf.color_map.len(), 256);
        assert!(tf.validate().is_empty());
        assert_eq!(tf.lookup(10.0).a, 0.0);
        assert!(tf.lookup(250.0).a > 0.5);
    }

    proptest! {
        #[test]
        fn index_is_always_in_range(n in 1..300usize, v in -1e4..1e4f32) {
            let i = ramp(n).index(v).unwrap();
            prop_assert!(i < n);
        }

        #[test]
        fn index_is_monotonic(n in 1..300usize, v1 in -500.0..500.0f32, v2 in -500.0..500.0f32) {
            let tf = ramp(n);
            let (lo, hi) = if v1 <= v2 { (v1, v2) } else { (v2, v1) };
            prop_assert!(tf.index(lo) <= tf.index(hi));
        }
    }
}
