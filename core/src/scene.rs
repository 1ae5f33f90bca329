//! Scene

use crate::camera::Camera;
use crate::color::*;
use crate::config::RenderConfig;
use crate::geometry::*;
use crate::pbrt::*;
use crate::shading::ShadingModel;
use crate::volume::*;

/// Everything a ray integrator reads while rendering one frame: the field
/// services, the camera, the configuration and per-frame constants. All of it
/// is immutable for the duration of a render pass.
pub struct Scene<'a> {
    /// The scalar field.
    volume: &'a dyn Volume,

    /// The gradient field.
    gradient_volume: &'a dyn GradientVolume,

    /// The camera.
    camera: &'a dyn Camera,

    /// The render configuration.
    pub config: &'a RenderConfig,

    /// Normal of the slice plane; the negated, normalized camera direction.
    pub plane_normal: Vector3f,

    /// Geometric center of the volume.
    pub volume_center: Point3f,

    /// Bounds of the volume in voxel index space.
    pub bounds: Bounds3f,
}

impl<'a> Scene<'a> {
    /// Create a new `Scene` and derive the per-frame constants.
    ///
    /// * `volume`          - The scalar field.
    /// * `gradient_volume` - The gradient field.
    /// * `camera`          - The camera.
    /// * `config`          - The render configuration.
    pub fn new(
        volume: &'a dyn Volume,
        gradient_volume: &'a dyn GradientVolume,
        camera: &'a dyn Camera,
        config: &'a RenderConfig,
    ) -> Self {
        let dims = volume.dims();
        let volume_center = Point3f::from(Vector3f::from(dims) / 2.0);
        let upper = dims - Vector3::new(1, 1, 1);
        let bounds = Bounds3::new(Point3f::zero(), Point3f::from(Vector3f::from(upper)));

        Self {
            volume,
            gradient_volume,
            camera,
            config,
            plane_normal: -camera.forward().normalize(),
            volume_center,
            bounds,
        }
    }

    /// Returns the interpolated scalar value at a position.
    ///
    /// * `p` - Position in voxel index space.
    #[inline]
    pub fn sample_scalar(&self, p: &Point3f) -> Float {
        self.volume.sample(p)
    }

    /// Returns the interpolated gradient at a position.
    ///
    /// * `p` - Position in voxel index space.
    #[inline]
    pub fn sample_gradient(&self, p: &Point3f) -> GradientVoxel {
        self.gradient_volume.gradient(p)
    }

    /// Returns the maximum scalar value of the volume.
    pub fn volume_max(&self) -> Float {
        self.volume.maximum()
    }

    /// Returns the maximum gradient magnitude of the volume.
    pub fn max_gradient_magnitude(&self) -> Float {
        self.gradient_volume.max_magnitude()
    }

    /// Returns the camera.
    pub fn camera(&self) -> &dyn Camera {
        self.camera
    }

    /// Applies the configured shading model at a position using the camera
    /// as a headlight. Returns the color unchanged if shading is disabled.
    ///
    /// * `color` - Base color.
    /// * `p`     - Sample position.
    pub fn shade(&self, color: &RGBColor, p: &Point3f) -> RGBColor {
        match self.config.shading_model() {
            Some(model) => self.shade_with(model, color, p),
            None => *color,
        }
    }

    /// Applies Phong shading at a position if shading is enabled, ignoring
    /// the tone based shading flag.
    ///
    /// * `color` - Base color.
    /// * `p`     - Sample position.
    pub fn shade_phong(&self, color: &RGBColor, p: &Point3f) -> RGBColor {
        if self.config.volume_shading {
            self.shade_with(ShadingModel::Phong, color, p)
        } else {
            *color
        }
    }

    fn shade_with(&self, model: ShadingModel, color: &RGBColor, p: &Point3f) -> RGBColor {
        let gradient = self.sample_gradient(p);
        let to_eye = self.camera.position() - *p;
        model.shade(color, &gradient, &to_eye, &to_eye)
    }
}
