//! Transfer functions

mod transfer_1d;
mod transfer_2d;

// Re-export.
pub use transfer_1d::*;
pub use transfer_2d::*;
