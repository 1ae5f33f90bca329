//! Volume field services

use crate::geometry::*;
use crate::pbrt::*;
use std::fmt;
use std::sync::Arc;

/// A discretely sampled 3-D scalar field in voxel index space.
pub trait Volume: Send + Sync {
    /// Returns the interpolated scalar value at a continuous position.
    /// Positions outside the grid return 0.
    ///
    /// * `p` - Position in voxel index space.
    fn sample(&self, p: &Point3f) -> Float;

    /// Returns the maximum scalar value in the field.
    fn maximum(&self) -> Float;

    /// Returns the number of voxels along each axis.
    fn dims(&self) -> Vector3i;
}

/// Atomic reference counted `Volume`.
pub type ArcVolume = Arc<dyn Volume>;

/// Intensity gradient at a position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GradientVoxel {
    /// Gradient direction. Zero in flat regions.
    pub dir: Vector3f,

    /// Gradient magnitude.
    pub magnitude: Float,
}

impl GradientVoxel {
    /// Creates a gradient sample from a gradient vector.
    ///
    /// * `dir` - The gradient vector.
    pub fn new(dir: Vector3f) -> Self {
        Self {
            dir,
            magnitude: dir.length(),
        }
    }
}

impl fmt::Display for GradientVoxel {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[dir={}, |g|={}]", self.dir, self.magnitude)
    }
}

/// A precomputed gradient field matching a `Volume`.
pub trait GradientVolume: Send + Sync {
    /// Returns the interpolated gradient at a continuous position.
    ///
    /// * `p` - Position in voxel index space.
    fn gradient(&self, p: &Point3f) -> GradientVoxel;

    /// Returns the maximum gradient magnitude in the field.
    fn max_magnitude(&self) -> Float;
}

/// Atomic reference counted `GradientVolume`.
pub type ArcGradientVolume = Arc<dyn GradientVolume>;
