//! Camera

#[macro_use]
extern crate log;

mod look_at;
mod orthographic_camera;
mod perspective_camera;

// Re-export
pub use look_at::*;
pub use orthographic_camera::*;
pub use perspective_camera::*;
