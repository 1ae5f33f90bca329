//! 3-D Axis Aligned Bounding Boxes.

use crate::geometry::*;
use crate::pbrt::*;
use num_traits::Num;
use std::fmt;
use std::ops::Index;

/// 3-D Axis Aligned Bounding Box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds3<T: Num> {
    /// Minimum bounds.
    pub p_min: Point3<T>,

    /// Maximum bounds.
    pub p_max: Point3<T>,
}

/// 3-D bounding box containing `Float` points.
pub type Bounds3f = Bounds3<Float>;

impl<T: Num + PartialOrd + Copy> Bounds3<T> {
    /// Creates a new 3-D bounding box from 2 points. The minimum and maximum bounds
    /// are used for each coordinate axis.
    ///
    /// * `p1` - First point.
    /// * `p2` - Second point.
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Self {
        Self {
            p_min: Point3::new(min(p1.x, p2.x), min(p1.y, p2.y), min(p1.z, p2.z)),
            p_max: Point3::new(max(p1.x, p2.x), max(p1.y, p2.y), max(p1.z, p2.z)),
        }
    }
}

impl Bounds3f {
    /// Returns the parametric range `(t_min, t_max)` over which the ray
    /// overlaps the box, or `None` if it misses.
    ///
    /// Uses the slab method: the near and far slab of each axis are picked
    /// from the sign of the inverse direction so negative components need no
    /// extra branch. A zero direction component yields an infinite inverse
    /// which IEEE-754 comparisons handle. A zero-length direction is treated
    /// as a miss. The result is also restricted to the ray's own extent, so
    /// boxes entirely behind the origin are misses.
    ///
    /// * `ray` - The ray.
    pub fn intersect_p(&self, ray: &Ray) -> Option<(Float, Float)> {
        if ray.d.is_zero() {
            return None;
        }

        let inv_dir = ray.d.recip();
        let mut t0 = ray.t_min;
        let mut t1 = ray.t_max;
        for axis in Axis::ALL {
            let is_neg = inv_dir[axis] < 0.0;
            let t_near = (self[is_neg as u8][axis] - ray.o[axis]) * inv_dir[axis];
            let t_far = (self[!is_neg as u8][axis] - ray.o[axis]) * inv_dir[axis];

            if t0 > t_far || t_near > t1 {
                return None;
            }

            // `f32::max`/`f32::min` ignore the NaN produced when the origin
            // lies exactly on a slab plane parallel to the ray.
            t0 = t0.max(t_near);
            t1 = t1.min(t_far);
        }

        Some((t0, t1))
    }
}

impl<T: Num> Index<u8> for Bounds3<T> {
    type Output = Point3<T>;

    /// Index the minimum and maximum bounds.
    ///
    /// * `i` - 0 for minimum and 1 for maximum.
    fn index(&self, index: u8) -> &Self::Output {
        match index {
            0 => &self.p_min,
            1 => &self.p_max,
            _ => panic!("Invalid index for std::Index on Bounds3<T>"),
        }
    }
}

impl<T: Num + fmt::Display> fmt::Display for Bounds3<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.p_min, self.p_max)
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

    fn unit_box() -> Bounds3f {
        Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn axis_aligned_ray_hits_box() {
        let ray = Ray::new(Point3::new(0.5, 0.5, -1.0), Vector3::new(0.0, 0.0, 1.0));
        let (t0, t1) = unit_box().intersect_p(&ray).unwrap();
        assert!(approx_eq!(f32, t0, 1.0));
        assert!(approx_eq!(f32, t1, 2.0));
    }

    #[test]
    fn negative_direction_hits_box() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 3.0), Vector3::new(0.0, 0.0, -2.0));
        let (t0, t1) = unit_box().intersect_p(&ray).unwrap();
        assert!(approx_eq!(f32, t0, 1.0));
        assert!(approx_eq!(f32, t1, 1.5));
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        let ray = Ray::new(Point3::new(2.0, 0.5, -1.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit_box().intersect_p(&ray).is_none());
    }

    #[test]
    fn ray_on_slab_plane_is_grazing_hit() {
        let ray = Ray::new(Point3::new(0.0, 0.5, -1.0), Vector3::new(0.0, 0.0, 1.0));
        let (t0, t1) = unit_box().intersect_p(&ray).unwrap();
        assert!(t0 <= t1);
    }

    #[test]
    fn origin_inside_box_starts_at_origin() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        let (t0, t1) = unit_box().intersect_p(&ray).unwrap();
        assert_eq!(t0, 0.0);
        assert!(approx_eq!(f32, t1, 0.5));
    }

    #[test]
    fn box_behind_origin_misses() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 2.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit_box().intersect_p(&ray).is_none());
    }

    #[test]
    fn zero_direction_misses() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.5), Vector3::zero());
        assert!(unit_box().intersect_p(&ray).is_none());
    }

    prop_compose! {
        fn box_and_origin()(
            x0 in -50.0..50.0f32, y0 in -50.0..50.0f32, z0 in -50.0..50.0f32,
            dx in 1.0..20.0f32, dy in 1.0..20.0f32, dz in 1.0..20.0f32,
            ox in -100.0..100.0f32, oy in -100.0..100.0f32, oz in -100.0..100.0f32,
        ) -> (Bounds3f, Point3f) {
            (
                Bounds3::new(Point3::new(x0, y0, z0), Point3::new(x0 + dx, y0 + dy, z0 + dz)),
                Point3::new(ox, oy, oz),
            )
        }
    }

    proptest! {
        #[test]
        fn ray_through_box_center_hits_with_non_empty_interval(
            (b, o) in box_and_origin(), scale in 0.1..10.0f32,
        ) {
            let center = lerp(0.5, b.p_min, b.p_max);
            let d = (center - o) * scale;
            prop_assume!(d.length() > 0.001);

            let ray = Ray::new(o, d);
            let hit = b.intersect_p(&ray);
            prop_assert!(hit.is_some());
            let (t0, t1) = hit.unwrap();
            prop_assert!(t0 < t1);
        }

        #[test]
        fn ray_pointing_away_from_corner_misses(
            (b, _o) in box_and_origin(),
            ax in 0.01..1.0f32, ay in 0.01..1.0f32, az in 0.01..1.0f32,
            s in 0.1..10.0f32,
        ) {
            // Start outside the maximum corner and head further away; the box
            // lies entirely in the opposite octant.
            let o = b.p_max + Vector3::new(s, s, s);
            let ray = Ray::new(o, Vector3::new(ax, ay, az));
            prop_assert!(b.intersect_p(&ray).is_none());
        }
    }
}
