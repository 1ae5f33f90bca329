//! 2-D Axis Aligned Bounding Boxes.

use crate::geometry::*;
use crate::pbrt::*;
use itertools::{iproduct, Product};
use num_traits::Num;
use std::fmt;
use std::ops::Range;

/// 2-D Axis Aligned Bounding Box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bounds2<T: Num> {
    /// Minimum bounds.
    pub p_min: Point2<T>,

    /// Maximum bounds.
    pub p_max: Point2<T>,
}

/// 2-D bounding box of pixel coordinates. The upper bound is exclusive.
pub type Bounds2u = Bounds2<usize>;

impl<T: Num + PartialOrd + Copy> Bounds2<T> {
    /// Creates a new 2D bounding box from 2 points. The minimum and maximum bounds
    /// are used for each coordinate axis.
    ///
    /// * `p1` - First point.
    /// * `p2` - Second point.
    pub fn new(p1: Point2<T>, p2: Point2<T>) -> Self {
        Self {
            p_min: Point2::new(min(p1.x, p2.x), min(p1.y, p2.y)),
            p_max: Point2::new(max(p1.x, p2.x), max(p1.y, p2.y)),
        }
    }

    /// Returns true if the bounding box encloses no pixels.
    pub fn is_empty(&self) -> bool {
        self.p_max.x <= self.p_min.x || self.p_max.y <= self.p_min.y
    }

    /// Returns the area of the bounding box.
    pub fn area(&self) -> T {
        if self.is_empty() {
            T::zero()
        } else {
            let d = self.p_max - self.p_min;
            d.x * d.y
        }
    }

    /// Returns true if a point is inside the bounding box. The upper boundary
    /// is considered out of bounds.
    ///
    /// * `p` - The point.
    pub fn contains_exclusive(&self, p: &Point2<T>) -> bool {
        p.x >= self.p_min.x && p.x < self.p_max.x && p.y >= self.p_min.y && p.y < self.p_max.y
    }

    /// Return a bounding box containing the intersection of both bounding boxes.
    ///
    /// * `other` - The other bounding box.
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            p_min: Point2::new(max(self.p_min.x, other.p_min.x), max(self.p_min.y, other.p_min.y)),
            p_max: Point2::new(min(self.p_max.x, other.p_max.x), min(self.p_max.y, other.p_max.y)),
        }
    }
}

impl<T: Num + fmt::Display> fmt::Display for Bounds2<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.p_min, self.p_max)
    }
}

/// An iterator that can step through integer coordinates in a bounding box
/// in a left-to-right (x-axis) and top-to-bottom (y-axis) scan order.
pub struct Bounds2Iterator<T>
where
    Range<T>: Iterator<Item = T> + Clone,
{
    /// The iterator that will supply points.
    p: Product<Range<T>, Range<T>>,
}

impl<T> IntoIterator for Bounds2<T>
where
    T: Num + Copy,
    Range<T>: Iterator<Item = T> + Clone,
{
    type Item = Point2<T>;
    type IntoIter = Bounds2Iterator<T>;

    /// Create an iterator for `Bounds2`.
    fn into_iter(self) -> Self::IntoIter {
        Bounds2Iterator {
            p: iproduct!(self.p_min.y..self.p_max.y, self.p_min.x..self.p_max.x),
        }
    }
}

impl<T> Iterator for Bounds2Iterator<T>
where
    T: Num + Copy,
    Range<T>: Iterator<Item = T> + Clone,
{
    type Item = Point2<T>;

    /// Get the next point.
    fn next(&mut self) -> Option<Self::Item> {
        self.p.next().map(|(y, x)| Point2::new(x, y))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
