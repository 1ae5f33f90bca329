//! Volumes

#[macro_use]
extern crate log;

mod fld;
mod gradient;
mod grid;
mod synthetic;

// Re-export.
pub use fld::*;
pub use gradient::*;
pub use grid::*;
pub use synthetic::*;
