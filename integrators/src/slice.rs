//! Slice

use crate::*;
use volvis_core::color::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::scene::Scene;

/// Samples the volume once where the ray crosses the plane through the
/// volume center facing the camera.
#[derive(Copy, Clone, Debug, Default)]
pub struct SliceIntegrator;

impl VolumeIntegrator for SliceIntegrator {
    /// Returns the opaque gray value normalized by the volume maximum. Rays
    /// parallel to the plane and empty volumes return opaque black.
    ///
    /// * `ray`   - The ray.
    /// * `scene` - The scene.
    fn li(&self, ray: &Ray, scene: &Scene) -> RGBAColor {
        let black = RGBAColor::new(0.0, 0.0, 0.0, 1.0);

        let denom = ray.d.dot(&scene.plane_normal);
        let volume_max = scene.volume_max();
        if denom.abs() < Float::EPSILON || volume_max <= 0.0 {
            return black;
        }

        let t = (scene.volume_center - ray.o).dot(&scene.plane_normal) / denom;
        let val = scene.sample_scalar(&ray.at(t));
        RGBAColor::from_rgb(RGBColor::gray(max(val / volume_max, 0.0)), 1.0)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
