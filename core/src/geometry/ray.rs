//! Rays

use crate::geometry::*;
use crate::pbrt::*;
use std::fmt;

/// A ray with a parametric extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction. Not necessarily normalized.
    pub d: Vector3f,

    /// Start of the parametric extent.
    pub t_min: Float,

    /// End of the parametric extent.
    pub t_max: Float,
}

impl Ray {
    /// Returns an unbounded ray.
    ///
    /// * `o` - Origin.
    /// * `d` - Direction.
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Self {
            o,
            d,
            t_min: 0.0,
            t_max: INFINITY,
        }
    }

    /// Get position along the ray at given parameter.
    ///
    /// * `t` - Parameter to evaluate.
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }

    /// Restricts the ray's extent to where it overlaps the given bounds.
    /// Returns false and leaves the extent untouched if the ray misses.
    ///
    /// * `bounds` - The bounds.
    pub fn clip(&mut self, bounds: &Bounds3f) -> bool {
        match bounds.intersect_p(self) {
            Some((t_min, t_max)) => {
                self.t_min = t_min;
                self.t_max = t_max;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Ray {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[o={}, d={}, t=({}, {})]", self.o, self.d, self.t_min, self.t_max)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_sets_extent_on_hit() {
        let bounds = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 4.0, 4.0));
        let mut ray = Ray::new(Point3::new(2.0, 2.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(ray.clip(&bounds));
        assert_eq!(ray.t_min, 6.0);
        assert_eq!(ray.t_max, 10.0);
        assert_eq!(ray.at(ray.t_min), Point3::new(2.0, 2.0, 4.0));
    }

    #[test]
    fn clip_leaves_extent_on_miss() {
        let bounds = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 4.0, 4.0));
        let mut ray = Ray::new(Point3::new(9.0, 2.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(!ray.clip(&bounds));
        assert_eq!(ray.t_min, 0.0);
        assert_eq!(ray.t_max, INFINITY);
    }
}
