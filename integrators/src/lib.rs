//! Integrators

#[macro_use]
extern crate log;

mod common;
mod composite;
mod integrator;
mod iso;
mod mip;
mod renderer;
mod slice;
mod tf2d;

// Re-export.
pub use common::*;
pub use composite::*;
pub use integrator::*;
pub use iso::*;
pub use mip::*;
pub use renderer::*;
pub use slice::*;
pub use tf2d::*;
