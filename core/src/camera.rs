//! Camera

use crate::geometry::*;
use std::sync::Arc;

/// Camera interface used by the renderer to generate one primary ray per
/// pixel.
pub trait Camera: Send + Sync {
    /// Returns a ray for the given normalized device coordinates.
    ///
    /// * `p_ndc` - Position on the image plane in `[-1, 1]²`; `(-1, -1)` is the
    ///             bottom-left corner.
    fn generate_ray(&self, p_ndc: &Point2f) -> Ray;

    /// Returns the viewing direction.
    fn forward(&self) -> Vector3f;

    /// Returns the eye position.
    fn position(&self) -> Point3f;
}

/// Atomic reference counted `Camera`.
pub type ArcCamera = Arc<dyn Camera>;
