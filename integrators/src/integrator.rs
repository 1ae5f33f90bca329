//! Integrator selection

use crate::*;
use volvis_core::color::*;
use volvis_core::config::RenderMode;
use volvis_core::geometry::*;
use volvis_core::scene::Scene;

/// The closed set of ray integrators, one per render mode.
#[derive(Copy, Clone, Debug)]
pub enum Integrator {
    Slice(SliceIntegrator),
    Mip(MipIntegrator),
    Iso(IsoIntegrator),
    Composite(CompositeIntegrator),
    Tf2d(Tf2dIntegrator),
}

impl From<RenderMode> for Integrator {
    /// Returns the integrator for a render mode with default parameters.
    ///
    /// * `mode` - The render mode.
    fn from(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Slice => Self::Slice(SliceIntegrator),
            RenderMode::Mip => Self::Mip(MipIntegrator::default()),
            RenderMode::Iso => Self::Iso(IsoIntegrator::default()),
            RenderMode::Composite => Self::Composite(CompositeIntegrator::default()),
            RenderMode::Tf2d => Self::Tf2d(Tf2dIntegrator::default()),
        }
    }
}

impl VolumeIntegrator for Integrator {
    /// Dispatch to the selected integrator.
    ///
    /// * `ray`   - The ray.
    /// * `scene` - The scene.
    #[inline]
    fn li(&self, ray: &Ray, scene: &Scene) -> RGBAColor {
        match self {
            Self::Slice(integrator) => integrator.li(ray, scene),
            Self::Mip(integrator) => integrator.li(ray, scene),
            Self::Iso(integrator) => integrator.li(ray, scene),
            Self::Composite(integrator) => integrator.li(ray, scene),
            Self::Tf2d(integrator) => integrator.li(ray, scene),
        }
    }
}
