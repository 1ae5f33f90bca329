//! Perspective Camera

use crate::look_at::*;
use volvis_core::camera::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;

/// Pinhole camera with a vertical field of view.
#[derive(Copy, Clone, Debug)]
pub struct PerspectiveCamera {
    /// Viewing frame.
    pub frame: LookAt,

    /// Vertical field of view in degrees.
    pub fov: Float,

    /// Image width divided by height.
    pub aspect: Float,

    /// Half height of the image plane at unit distance.
    tan_half_fov: Float,
}

impl PerspectiveCamera {
    /// Create a new perspective camera.
    ///
    /// * `frame`  - Viewing frame.
    /// * `fov`    - Vertical field of view in degrees, in `(0, 180)`.
    /// * `aspect` - Image width divided by height.
    pub fn new(frame: LookAt, fov: Float, aspect: Float) -> Result<Self, String> {
        if !(fov > 0.0 && fov < 180.0) {
            return Err(format!("Invalid field of view {fov}"));
        }
        if !(aspect > 0.0) {
            return Err(format!("Invalid aspect ratio {aspect}"));
        }
        Ok(Self {
            frame,
            fov,
            aspect,
            tan_half_fov: (fov.to_radians() / 2.0).tan(),
        })
    }

    /// Returns the camera after orbiting around its target.
    ///
    /// * `degrees` - Rotation angle about the world up axis.
    pub fn orbit(&self, degrees: Float) -> Result<Self, String> {
        debug!("Orbiting perspective camera by {degrees} degrees");
        Self::new(self.frame.orbit(degrees)?, self.fov, self.aspect)
    }
}

impl Camera for PerspectiveCamera {
    /// Returns a ray from the eye through the image plane with a unit
    /// direction.
    ///
    /// * `p_ndc` - Position on the image plane in `[-1, 1]²`.
    fn generate_ray(&self, p_ndc: &Point2f) -> Ray {
        let frame = &self.frame;
        let d = frame.forward
            + frame.right * (p_ndc.x * self.tan_half_fov * self.aspect)
            + frame.up * (p_ndc.y * self.tan_half_fov);
        Ray::new(frame.position, d.normalize())
    }

    /// Returns the viewing direction.
    fn forward(&self) -> Vector3f {
        self.frame.forward
    }

    /// Returns the eye position.
    fn position(&self) -> Point3f {
        self.frame.position
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn camera() -> PerspectiveCamera {
        let frame = LookAt::new(
            Point3f::new(0.0, 0.0, 10.0),
            Point3f::zero(),
            Vector3f::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        PerspectiveCamera::new(frame, 90.0, 2.0).unwrap()
    }

    #[test]
    fn center_ray_follows_view_direction() {
        let ray = camera().generate_ray(&Point2f::zero());
        assert_eq!(ray.o, Point3f::new(0.0, 0.0, 10.0));
        assert_eq!(ray.d, Vector3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn corner_rays_span_the_field_of_view() {
        let ray = camera().generate_ray(&Point2f::new(1.0, 1.0));
        // tan(45°) = 1 vertically and 2 horizontally before normalization.
        let expected = Vector3f::new(2.0, 1.0, -1.0).normalize();
        assert!(approx_eq!(Float, ray.d.x, expected.x, epsilon = 1e-5));
        assert!(approx_eq!(Float, ray.d.y, expected.y, epsilon = 1e-5));
        assert!(approx_eq!(Float, ray.d.z, expected.z, epsilon = 1e-5));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let frame = camera().frame;
        assert!(PerspectiveCamera::new(frame, 0.0, 1.0).is_err());
        assert!(PerspectiveCamera::new(frame, 180.0, 1.0).is_err());
        assert!(PerspectiveCamera::new(frame, 60.0, 0.0).is_err());
    }
}
