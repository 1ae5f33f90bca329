//! Synthetic Volumes

use crate::grid::GridVolume;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;

/// Returns a volume with the same value in every voxel.
///
/// * `dims`  - Number of voxels along each axis.
/// * `value` - The voxel value.
pub fn uniform_volume(dims: Vector3i, value: Float) -> Result<GridVolume, String> {
    GridVolume::from_fn(dims, |_| value)
}

/// Returns an empty volume with a single non-zero voxel.
///
/// * `dims`  - Number of voxels along each axis.
/// * `voxel` - Index of the non-zero voxel.
/// * `value` - Its value.
pub fn single_voxel_volume(
    dims: Vector3i,
    voxel: Point3i,
    value: Float,
) -> Result<GridVolume, String> {
    GridVolume::from_fn(dims, |p| if p == voxel { value } else { 0.0 })
}

/// Returns a cube whose values fall off linearly from `peak` at the center to
/// 0 at `radius` voxels away.
///
/// * `size`   - Number of voxels along each axis.
/// * `radius` - Distance at which the value reaches 0.
/// * `peak`   - Value at the center.
pub fn sphere_volume(size: Int, radius: Float, peak: Float) -> Result<GridVolume, String> {
    if radius <= 0.0 {
        return Err(format!("Invalid sphere radius {radius}"));
    }
    let c = (size - 1) as Float / 2.0;
    let center = Point3f::new(c, c, c);
    GridVolume::from_fn(Vector3i::new(size, size, size), |p| {
        let d = Point3f::from(p).distance(center);
        peak * max(0.0, 1.0 - d / radius)
    })
}

/// Returns a volume whose value equals the x index scaled by `slope`.
///
/// * `dims`  - Number of voxels along each axis.
/// * `slope` - Value increase per voxel along x.
pub fn ramp_x_volume(dims: Vector3i, slope: Float) -> Result<GridVolume, String> {
    GridVolume::from_fn(dims, |p| slope * p.x as Float)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use volvis_core::volume::Volume;

    #[test]
    fn single_voxel_volume_has_one_dense_voxel() {
        let voxel = Point3i::new(2, 2, 2);
        let volume = single_voxel_volume(Vector3i::new(5, 5, 5), voxel, 200.0).unwrap();
        assert_eq!(volume.maximum(), 200.0);
        assert_eq!(volume.voxel(&Point3i::new(2, 2, 2)), 200.0);
        assert_eq!(volume.voxel(&Point3i::new(2, 2, 3)), 0.0);
    }

    #[test]
    fn sphere_peaks_at_center() {
        let volume = sphere_volume(9, 4.0, 100.0).unwrap();
        assert_eq!(volume.voxel(&Point3i::new(4, 4, 4)), 100.0);
        assert_eq!(volume.voxel(&Point3i::new(0, 4, 4)), 0.0);
        assert_eq!(volume.voxel(&Point3i::new(2, 4, 4)), 50.0);
        assert!(sphere_volume(9, 0.0, 100.0).is_err());
    }

    #[test]
    fn ramp_increases_along_x() {
        let volume = ramp_x_volume(Vector3i::new(8, 2, 2), 10.0).unwrap();
        assert_eq!(volume.sample(&Point3f::new(2.5, 0.5, 1.0)), 25.0);
        assert_eq!(volume.maximum(), 70.0);
    }
}
