//! Gradient Grid

use crate::grid::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::volume::*;

/// Gradient vectors precomputed at every voxel of a `GridVolume`.
#[derive(Clone, Debug)]
pub struct GradientGrid {
    /// Number of voxels along each axis.
    dims: Vector3i,

    /// Gradient vectors in the same order as the volume's voxels.
    gradients: Vec<Vector3f>,

    /// Largest gradient magnitude.
    max_magnitude: Float,
}

impl GradientGrid {
    /// Create a new `GradientGrid` using central differences in the interior
    /// and one-sided differences on the border.
    ///
    /// * `volume` - The scalar field.
    pub fn new(volume: &GridVolume) -> Self {
        let dims = volume.dims();
        let gradients: Vec<Vector3f> = lattice(&dims)
            .map(|p| {
                Vector3f::new(
                    difference(p.x, dims.x, |x| volume.voxel(&Point3i::new(x, p.y, p.z))),
                    difference(p.y, dims.y, |y| volume.voxel(&Point3i::new(p.x, y, p.z))),
                    difference(p.z, dims.z, |z| volume.voxel(&Point3i::new(p.x, p.y, z))),
                )
            })
            .collect();

        let max_magnitude = gradients.iter().fold(0.0, |a, g| max(a, g.length()));
        debug!("Computed {dims} gradients with maximum magnitude {max_magnitude}");

        Self {
            dims,
            gradients,
            max_magnitude,
        }
    }

    /// Returns the gradient at a voxel or zero if the index is outside the grid.
    ///
    /// * `p` - Voxel index.
    pub fn voxel(&self, p: &Point3i) -> Vector3f {
        voxel_offset(&self.dims, p).map_or(Vector3f::zero(), |i| self.gradients[i])
    }
}

impl GradientVolume for GradientGrid {
    /// Returns the trilinearly interpolated gradient at `p`. The magnitude is
    /// the length of the interpolated vector. Positions outside the grid
    /// return a zero gradient.
    ///
    /// * `p` - Position in voxel index space.
    fn gradient(&self, p: &Point3f) -> GradientVoxel {
        match locate(&self.dims, p) {
            Some((pi, d)) => GradientVoxel::new(trilinear(&d, |dx, dy, dz| {
                self.voxel(&Point3i::new(pi.x + dx, pi.y + dy, pi.z + dz))
            })),
            None => GradientVoxel::default(),
        }
    }

    /// Returns the maximum gradient magnitude.
    fn max_magnitude(&self) -> Float {
        self.max_magnitude
    }
}

/// Returns the finite difference along one axis.
///
/// * `i` - Index along the axis.
/// * `n` - Number of voxels along the axis.
/// * `v` - Returns the voxel value at an index along the axis.
fn difference<F: Fn(Int) -> Float>(i: Int, n: Int, v: F) -> Float {
    let lo = max(i - 1, 0);
    let hi = min(i + 1, n - 1);
    if hi <= lo {
        0.0
    } else {
        (v(hi) - v(lo)) / (hi - lo) as Float
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
