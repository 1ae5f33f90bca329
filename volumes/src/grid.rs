//! Grid Volume

use std::ops::{Add, Mul};
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::volume::*;

/// Dense scalar field sampled on the integer lattice `[0, dims)`. Values are
/// stored with x varying fastest, then y, then z.
#[derive(Clone, Debug)]
pub struct GridVolume {
    /// Number of voxels along each axis.
    dims: Vector3i,

    /// Voxel values.
    data: Vec<Float>,

    /// Largest voxel value; never below 0.
    max_value: Float,
}

impl GridVolume {
    /// Create a new `GridVolume`.
    ///
    /// * `dims` - Number of voxels along each axis.
    /// * `data` - Voxel values with x varying fastest.
    pub fn new(dims: Vector3i, data: Vec<Float>) -> Result<Self, String> {
        if dims.x <= 0 || dims.y <= 0 || dims.z <= 0 {
            return Err(format!("Invalid volume dimensions {dims}"));
        }

        let expected = dims.x as usize * dims.y as usize * dims.z as usize;
        if data.len() != expected {
            return Err(format!(
                "Volume {dims} needs {expected} voxels but {} were given",
                data.len()
            ));
        }

        let max_value = data.iter().fold(0.0, |a, &x| max(a, x));
        debug!("Created {dims} volume with maximum {max_value}");

        Ok(Self {
            dims,
            data,
            max_value,
        })
    }

    /// Create a new `GridVolume` by evaluating a function at every voxel.
    ///
    /// * `dims` - Number of voxels along each axis.
    /// * `f`    - Returns the value of the voxel at the given index.
    pub fn from_fn<F>(dims: Vector3i, f: F) -> Result<Self, String>
    where
        F: Fn(Point3i) -> Float,
    {
        let data = lattice(&dims).map(f).collect();
        Self::new(dims, data)
    }

    /// Returns the value of a voxel or 0 if the index is outside the grid.
    ///
    /// * `p` - Voxel index.
    pub fn voxel(&self, p: &Point3i) -> Float {
        voxel_offset(&self.dims, p).map_or(0.0, |i| self.data[i])
    }
}

impl Volume for GridVolume {
    /// Returns the trilinearly interpolated value at `p` or 0 if `p` is
    /// outside `[0, dims - 1]` on any axis.
    ///
    /// * `p` - Position in voxel index space.
    fn sample(&self, p: &Point3f) -> Float {
        match locate(&self.dims, p) {
            Some((pi, d)) => trilinear(&d, |dx, dy, dz| {
                self.voxel(&Point3i::new(pi.x + dx, pi.y + dy, pi.z + dz))
            }),
            None => 0.0,
        }
    }

    /// Returns the maximum voxel value.
    fn maximum(&self) -> Float {
        self.max_value
    }

    /// Returns the number of voxels along each axis.
    fn dims(&self) -> Vector3i {
        self.dims
    }
}

/// Returns an iterator over all voxel indices in storage order.
///
/// * `dims` - Number of voxels along each axis.
pub(crate) fn lattice(dims: &Vector3i) -> impl Iterator<Item = Point3i> {
    itertools::iproduct!(0..dims.z, 0..dims.y, 0..dims.x).map(|(z, y, x)| Point3i::new(x, y, z))
}

/// Returns the storage offset of a voxel or `None` if it is outside the grid.
///
/// * `dims` - Number of voxels along each axis.
/// * `p`    - Voxel index.
pub(crate) fn voxel_offset(dims: &Vector3i, p: &Point3i) -> Option<usize> {
    let inside = (0..dims.x).contains(&p.x)
        && (0..dims.y).contains(&p.y)
        && (0..dims.z).contains(&p.z);
    inside.then(|| ((p.z * dims.y + p.y) * dims.x + p.x) as usize)
}

/// Returns the lower corner of the cell containing `p` and the offset of `p`
/// within it or `None` if `p` is outside `[0, dims - 1]` on any axis. The
/// upper face of the grid belongs to the last cell.
///
/// * `dims` - Number of voxels along each axis.
/// * `p`    - Position in voxel index space.
pub(crate) fn locate(dims: &Vector3i, p: &Point3f) -> Option<(Point3i, Vector3f)> {
    let (x, dx) = locate_axis(p.x, dims.x)?;
    let (y, dy) = locate_axis(p.y, dims.y)?;
    let (z, dz) = locate_axis(p.z, dims.z)?;
    Some((Point3i::new(x, y, z), Vector3f::new(dx, dy, dz)))
}

fn locate_axis(v: Float, n: Int) -> Option<(Int, Float)> {
    // Written so NaN fails the test.
    if !(v >= 0.0 && v <= (n - 1) as Float) {
        return None;
    }
    let i = min(v.floor() as Int, max(n - 2, 0));
    Some((i, v - i as Float))
}

/// Trilinearly interpolates the 8 corner values of a cell.
///
/// * `d` - Offset within the cell in `[0, 1]³`.
/// * `v` - Returns the value at a corner given its `{0, 1}` offsets.
pub(crate) fn trilinear<P, F>(d: &Vector3f, v: F) -> P
where
    F: Fn(Int, Int, Int) -> P,
    Float: Mul<P, Output = P>,
    P: Add<P, Output = P>,
{
    let d00 = lerp(d.x, v(0, 0, 0), v(1, 0, 0));
    let d10 = lerp(d.x, v(0, 1, 0), v(1, 1, 0));
    let d01 = lerp(d.x, v(0, 0, 1), v(1, 0, 1));
    let d11 = lerp(d.x, v(0, 1, 1), v(1, 1, 1));
    let d0 = lerp(d.y, d00, d10);
    let d1 = lerp(d.y, d01, d11);
    lerp(d.z, d0, d1)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    fn linear_volume() -> GridVolume {
        GridVolume::from_fn(Vector3i::new(4, 5, 6), |p| {
            (p.x + 2 * p.y + 3 * p.z) as Float
        })
        .unwrap()
    }

    #[test]
    fn mismatched_data_length_is_rejected() {
        assert!(GridVolume::new(Vector3i::new(2, 2, 2), vec![0.0; 7]).is_err());
        assert!(GridVolume::new(Vector3i::new(0, 2, 2), vec![]).is_err());
    }

    #[test]
    fn maximum_is_cached() {
        assert_eq!(linear_volume().maximum(), (3 + 2 * 4 + 3 * 5) as Float);
    }

    #[test]
    fn samples_at_voxels_return_voxel_values() {
        let volume = linear_volume();
        assert_eq!(volume.sample(&Point3f::new(0.0, 0.0, 0.0)), 0.0);
        assert_eq!(volume.sample(&Point3f::new(3.0, 4.0, 5.0)), 26.0);
        assert_eq!(volume.voxel(&Point3i::new(1, 2, 3)), 14.0);
    }

    #[test]
    fn samples_outside_return_zero() {
        let volume = linear_volume();
        assert_eq!(volume.sample(&Point3f::new(-0.1, 1.0, 1.0)), 0.0);
        assert_eq!(volume.sample(&Point3f::new(3.5, 1.0, 1.0)), 0.0);
        assert_eq!(volume.sample(&Point3f::new(1.0, 1.0, Float::NAN)), 0.0);
        assert_eq!(volume.voxel(&Point3i::new(4, 0, 0)), 0.0);
    }

    #[test]
    fn single_voxel_axis_is_sampled_exactly() {
        let volume = GridVolume::new(Vector3i::new(1, 1, 1), vec![7.0]).unwrap();
        assert_eq!(volume.sample(&Point3f::zero()), 7.0);
    }

    proptest! {
        #[test]
        fn interpolation_reproduces_linear_fields(
            x in 0.0..3.0 as Float,
            y in 0.0..4.0 as Float,
            z in 0.0..5.0 as Float,
        ) {
            let expected = x + 2.0 * y + 3.0 * z;
            let sampled = linear_volume().sample(&Point3f::new(x, y, z));
            prop_assert!(approx_eq!(Float, sampled, expected, epsilon = 1e-3));
        }
    }
}
