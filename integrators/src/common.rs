//! Common

use volvis_core::color::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::scene::Scene;

/// Distance between consecutive samples along a ray in voxel units.
pub const SAMPLE_STEP: Float = 1.0;

/// Accumulated opacity at which compositing stops; the remaining samples
/// could change a channel by at most this margin.
pub const OPAQUE_ALPHA: Float = 1.0 - 1e-3;

/// Interface for the per-pixel ray integrators.
pub trait VolumeIntegrator: Send + Sync {
    /// Returns the color for a ray already clipped to the volume bounds.
    ///
    /// * `ray`   - The ray with `t_min`/`t_max` set to the volume extent.
    /// * `scene` - The scene.
    fn li(&self, ray: &Ray, scene: &Scene) -> RGBAColor;
}

/// Returns an iterator over `(t, position)` from `ray.t_min` to `ray.t_max`
/// inclusive at fixed increments.
///
/// * `ray`  - The ray.
/// * `step` - Positive distance between samples.
pub fn march(ray: &Ray, step: Float) -> impl Iterator<Item = (Float, Point3f)> {
    debug_assert!(step > 0.0);
    let ray = *ray;
    std::iter::successors(Some(ray.t_min), move |t| Some(t + step))
        .take_while(move |&t| t <= ray.t_max)
        .map(move |t| (t, ray.at(t)))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn march_includes_both_ends() {
        let mut ray = Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 2.0));
        ray.t_min = 1.0;
        ray.t_max = 3.0;

        let samples: Vec<_> = march(&ray, 1.0).collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], (1.0, Point3f::new(0.0, 0.0, 2.0)));
        assert_eq!(samples[2], (3.0, Point3f::new(0.0, 0.0, 6.0)));
    }

    #[test]
    fn march_over_point_extent_yields_one_sample() {
        let mut ray = Ray::new(Point3f::zero(), Vector3f::new(1.0, 0.0, 0.0));
        ray.t_min = 0.5;
        ray.t_max = 0.5;
        assert_eq!(march(&ray, SAMPLE_STEP).count(), 1);
    }
}
