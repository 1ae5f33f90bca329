//! Look-at camera frame

use volvis_core::geometry::*;
use volvis_core::pbrt::*;

/// Orthonormal viewing frame shared by the cameras.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LookAt {
    /// Eye position.
    pub position: Point3f,

    /// Point the camera looks at.
    pub target: Point3f,

    /// World up direction used to orient the frame and to orbit around.
    pub world_up: Vector3f,

    /// Unit viewing direction.
    pub forward: Vector3f,

    /// Unit direction of increasing image x.
    pub right: Vector3f,

    /// Unit direction of increasing image y.
    pub up: Vector3f,
}

impl LookAt {
    /// Create a new `LookAt` frame.
    ///
    /// * `position` - Eye position.
    /// * `target`   - Point to look at.
    /// * `world_up` - Up direction; must not be parallel to the view direction.
    pub fn new(position: Point3f, target: Point3f, world_up: Vector3f) -> Result<Self, String> {
        let dir = target - position;
        if dir.is_zero() {
            return Err(format!("Camera position {position} equals its target"));
        }

        let forward = dir.normalize();
        let right = forward.cross(&world_up);
        if right.length_squared() < 1e-12 {
            return Err(format!("Up vector {world_up} is parallel to view direction {forward}"));
        }
        let right = right.normalize();
        let up = right.cross(&forward);

        Ok(Self {
            position,
            target,
            world_up,
            forward,
            right,
            up,
        })
    }

    /// Returns the frame after rotating the eye around the target about the
    /// world up axis.
    ///
    /// * `degrees` - Rotation angle following the right-hand rule about the
    ///               up axis.
    pub fn orbit(&self, degrees: Float) -> Result<Self, String> {
        let axis = self.world_up.normalize();
        let offset = rotate(&(self.position - self.target), &axis, degrees.to_radians());
        Self::new(self.target + offset, self.target, self.world_up)
    }
}

/// Rotates a vector about a unit axis.
///
/// * `v`     - The vector.
/// * `axis`  - Unit rotation axis.
/// * `theta` - Angle in radians.
fn rotate(v: &Vector3f, axis: &Vector3f, theta: Float) -> Vector3f {
    let (sin_theta, cos_theta) = theta.sin_cos();
    *v * cos_theta + axis.cross(v) * sin_theta + *axis * (axis.dot(v) * (1.0 - cos_theta))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
