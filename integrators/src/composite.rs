//! Composite

use crate::*;
use volvis_core::color::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::scene::Scene;

/// Front-to-back compositing of samples classified by the 1-D transfer
/// function.
#[derive(Copy, Clone, Debug)]
pub struct CompositeIntegrator {
    /// Distance between samples.
    pub step: Float,

    /// Accumulated opacity that ends the march.
    pub max_alpha: Float,
}

impl Default for CompositeIntegrator {
    fn default() -> Self {
        Self {
            step: SAMPLE_STEP,
            max_alpha: OPAQUE_ALPHA,
        }
    }
}

impl VolumeIntegrator for CompositeIntegrator {
    /// Returns the composited color. Phong shading, when enabled, changes the
    /// sample color but not its opacity. The tone based flag is ignored.
    ///
    /// * `ray`   - The ray.
    /// * `scene` - The scene.
    fn li(&self, ray: &Ray, scene: &Scene) -> RGBAColor {
        let tf = &scene.config.tf1d;

        let mut out = RGBAColor::TRANSPARENT;
        for (_, p) in march(ray, self.step) {
            let sample = tf.lookup(scene.sample_scalar(&p));
            if sample.a <= 0.0 {
                continue;
            }

            let rgb = scene.shade_phong(&sample.rgb(), &p);
            out.composite(&RGBAColor::from_rgb(rgb, sample.a));
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
