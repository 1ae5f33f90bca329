//! 3-D Vectors

use crate::pbrt::*;
use num_traits::{Num, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3-D vector containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D vector containing `Float` values.
pub type Vector3f = Vector3<Float>;

/// 3-D vector containing `Int` values.
pub type Vector3i = Vector3<Int>;

impl<T: Num> Vector3<T> {
    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero vector.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if all components are zero.
    pub fn is_zero(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn dot(&self, other: &Self) -> T
    where
        T: Copy,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self
    where
        T: Copy,
    {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T
    where
        T: Copy,
    {
        self.dot(self)
    }

    /// Returns the vector's length.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector. Zero vectors are returned unchanged so that
    /// flat regions of a field never produce NaNs.
    pub fn normalize(&self) -> Self
    where
        T: num_traits::Float,
    {
        let len = self.length();
        if len > T::zero() {
            *self / len
        } else {
            *self
        }
    }

    /// Returns the component-wise reciprocal. Zero components become
    /// infinities of the matching sign.
    pub fn recip(&self) -> Self
    where
        T: num_traits::Float,
    {
        Self::new(self.x.recip(), self.y.recip(), self.z.recip())
    }
}

impl<T: Num + Copy> Index<Axis> for Vector3<T> {
    type Output = T;

    /// Index the vector by an axis to get the immutable coordinate axis value.
    ///
    /// * `axis` - A 3-D coordinate axis.
    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<T: Num + Copy> IndexMut<Axis> for Vector3<T> {
    /// Index the vector by an axis to get a mutable coordinate axis value.
    ///
    /// * `axis` - A 3-D coordinate axis.
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl<T: Num> Add for Vector3<T> {
    type Output = Self;

    /// Adds the given vector and returns the result.
    ///
    /// * `other` - The vector to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num + Copy> AddAssign for Vector3<T> {
    /// Performs the `+=` operation.
    ///
    /// * `other` - The vector to add.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Num> Sub for Vector3<T> {
    type Output = Self;

    /// Subtracts the given vector and returns the result.
    ///
    /// * `other` - The vector to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num + Copy> SubAssign for Vector3<T> {
    /// Performs the `-=` operation.
    ///
    /// * `other` - The vector to subtract.
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Num + Copy> Mul<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::new(self.x * f, self.y * f, self.z * f)
    }
}

impl<T: Num + Copy> MulAssign<T> for Vector3<T> {
    /// Scale the vector in place.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: T) {
        *self = *self * f;
    }
}

impl Mul<Vector3<Float>> for Float {
    type Output = Vector3<Float>;

    /// Scale the vector.
    ///
    /// * `v` - The vector.
    fn mul(self, v: Vector3<Float>) -> Self::Output {
        v * self
    }
}

impl<T: Num + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: T) -> Self::Output {
        Self::new(self.x / f, self.y / f, self.z / f)
    }
}

impl<T: Num + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    /// Flip the vector's direction (scale by -1).
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<Vector3i> for Vector3f {
    /// Convert a `Vector3i` to `Vector3f`.
    ///
    /// * `v` - The vector to convert.
    fn from(v: Vector3i) -> Self {
        Self::new(v.x as Float, v.y as Float, v.z as Float)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
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

    prop_compose! {
        fn vector3_f32()(
            x in -100.0..100.0f32,
            y in -100.0..100.0f32,
            z in -100.0..100.0f32,
        ) -> Vector3f {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn normalize_zero_vector_returns_zero_vector() {
        assert_eq!(Vector3f::zero().normalize(), Vector3f::zero());
    }

    #[test]
    fn recip_of_zero_component_is_signed_infinity() {
        let r = Vector3::new(0.0_f32, -0.0, 2.0).recip();
        assert_eq!(r.x, f32::INFINITY);
        assert_eq!(r.y, f32::NEG_INFINITY);
        assert_eq!(r.z, 0.5);
    }

    #[test]
    fn cross_of_x_and_y_is_z() {
        let x = Vector3::new(1, 0, 0);
        let y = Vector3::new(0, 1, 0);
        assert_eq!(x.cross(&y), Vector3::new(0, 0, 1));
    }

    proptest! {
        #[test]
        fn normalized_non_zero_vector_has_unit_length(v in vector3_f32()) {
            prop_assume!(v.length() > 0.001);
            prop_assert!(approx_eq!(f32, v.normalize().length(), 1.0, epsilon = 0.0001));
        }

        #[test]
        fn cross_product_is_orthogonal(a in vector3_f32(), b in vector3_f32()) {
            let c = a.cross(&b);
            let scale = a.length() * b.length() * c.length();
            prop_assume!(scale > 0.001);
            prop_assert!((c.dot(&a) / scale).abs() < 0.001);
            prop_assert!((c.dot(&b) / scale).abs() < 0.001);
        }

        #[test]
        fn axis_index_matches_fields(v in vector3_f32()) {
            prop_assert_eq!(v[Axis::X], v.x);
            prop_assert_eq!(v[Axis::Y], v.y);
            prop_assert_eq!(v[Axis::Z], v.z);
        }
    }
}
