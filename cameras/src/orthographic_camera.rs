//! Orthographic Camera

use crate::look_at::*;
use volvis_core::camera::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;

/// Camera with parallel rays along the viewing direction.
#[derive(Copy, Clone, Debug)]
pub struct OrthographicCamera {
    /// Viewing frame.
    pub frame: LookAt,

    /// Height of the visible region.
    pub view_height: Float,

    /// Image width divided by height.
    pub aspect: Float,
}

impl OrthographicCamera {
    /// Create a new orthographic camera.
    ///
    /// * `frame`       - Viewing frame.
    /// * `view_height` - Height of the visible region.
    /// * `aspect`      - Image width divided by height.
    pub fn new(frame: LookAt, view_height: Float, aspect: Float) -> Result<Self, String> {
        if !(view_height > 0.0) {
            return Err(format!("Invalid view height {view_height}"));
        }
        if !(aspect > 0.0) {
            return Err(format!("Invalid aspect ratio {aspect}"));
        }
        Ok(Self {
            frame,
            view_height,
            aspect,
        })
    }

    /// Returns the camera after orbiting around its target.
    ///
    /// * `degrees` - Rotation angle about the world up axis.
    pub fn orbit(&self, degrees: Float) -> Result<Self, String> {
        debug!("Orbiting orthographic camera by {degrees} degrees");
        Self::new(self.frame.orbit(degrees)?, self.view_height, self.aspect)
    }
}

impl Camera for OrthographicCamera {
    /// Returns a ray starting on the plane through the eye position.
    ///
    /// * `p_ndc` - Position on the image plane in `[-1, 1]²`.
    fn generate_ray(&self, p_ndc: &Point2f) -> Ray {
        let frame = &self.frame;
        let half_height = self.view_height / 2.0;
        let o = frame.position
            + frame.right * (p_ndc.x * half_height * self.aspect)
            + frame.up * (p_ndc.y * half_height);
        Ray::new(o, frame.forward)
    }

    fn forward(&self) -> Vector3f {
        self.frame.forward
    }

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

    #[test]
    fn rays_are_parallel_and_offset_on_the_image_plane() {
        let frame = LookAt::new(
            Point3f::new(4.0, 4.0, 20.0),
            Point3f::new(4.0, 4.0, 4.0),
            Vector3f::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        let camera = OrthographicCamera::new(frame, 8.0, 0.5).unwrap();

        let ray = camera.generate_ray(&Point2f::new(1.0, -1.0));
        assert_eq!(ray.o, Point3f::new(6.0, 0.0, 20.0));
        assert_eq!(ray.d, Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(camera.forward(), ray.d);
    }
}
