//! 2-D Transfer Function

use crate::*;
use volvis_core::color::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::scene::Scene;

/// Front-to-back compositing of samples classified by intensity and gradient
/// magnitude.
#[derive(Copy, Clone, Debug)]
pub struct Tf2dIntegrator {
    /// Distance between samples.
    pub step: Float,

    /// Accumulated opacity that ends the march.
    pub max_alpha: Float,
}

impl Default for Tf2dIntegrator {
    fn default() -> Self {
        Self {
            step: SAMPLE_STEP,
            max_alpha: OPAQUE_ALPHA,
        }
    }
}

impl VolumeIntegrator for Tf2dIntegrator {
    /// Returns the composited color.
    ///
    /// * `ray`   - The ray.
    /// * `scene` - The scene.
    fn li(&self, ray: &Ray, scene: &Scene) -> RGBAColor {
        let tf = &scene.config.tf2d;
        let max_magnitude = scene.max_gradient_magnitude();

        let mut out = RGBAColor::TRANSPARENT;
        for (_, p) in march(ray, self.step) {
            let intensity = scene.sample_scalar(&p);
            let gradient = scene.sample_gradient(&p);
            out.composite(&tf.classify(intensity, gradient.magnitude, max_magnitude));
            if out.a >= self.max_alpha {
                break;
            }
        }
        out
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
