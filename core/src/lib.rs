//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod camera;
pub mod color;
pub mod config;
pub mod film;
pub mod geometry;
pub mod parallel;
pub mod pbrt;
pub mod scene;
pub mod shading;
pub mod transfer;
pub mod volume;
