//! Film

use crate::color::*;
use crate::geometry::*;
use crate::pbrt::*;

mod frame_tile;

// Re-export.
pub use frame_tile::*;

/// The output image of the renderer. Pixels are stored row-major with row 0
/// at the bottom of the image plane.
pub struct FrameBuffer {
    /// Image resolution in pixels.
    resolution: Point2<usize>,

    /// Stores the image pixels.
    pixels: Vec<RGBAColor>,
}

impl FrameBuffer {
    /// Create a new `FrameBuffer` cleared to transparent black.
    ///
    /// * `resolution` - Image resolution in pixels.
    pub fn new(resolution: Point2<usize>) -> Self {
        Self {
            resolution,
            pixels: vec![RGBAColor::TRANSPARENT; resolution.x * resolution.y],
        }
    }

    /// Reallocates the pixels for a new resolution and clears them.
    ///
    /// * `resolution` - New image resolution in pixels.
    pub fn resize(&mut self, resolution: Point2<usize>) {
        self.resolution = resolution;
        self.pixels = vec![RGBAColor::TRANSPARENT; resolution.x * resolution.y];
    }

    /// Sets all pixels to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(RGBAColor::TRANSPARENT);
    }

    /// Returns the image resolution.
    pub fn resolution(&self) -> Point2<usize> {
        self.resolution
    }

    /// Returns the bounds of all pixels.
    pub fn pixel_bounds(&self) -> Bounds2u {
        Bounds2::new(Point2::zero(), self.resolution)
    }

    /// Returns a read-only view of the pixels.
    pub fn pixels(&self) -> &[RGBAColor] {
        &self.pixels
    }

    /// Returns the row-major offset of a pixel.
    ///
    /// * `p` - The pixel coordinates.
    pub fn get_pixel_offset(&self, p: &Point2<usize>) -> usize {
        debug_assert!(self.pixel_bounds().contains_exclusive(p));
        p.y * self.resolution.x + p.x
    }

    /// Returns the pixel at the given coordinates.
    ///
    /// * `p` - The pixel coordinates.
    pub fn get_pixel(&self, p: &Point2<usize>) -> RGBAColor {
        self.pixels[self.get_pixel_offset(p)]
    }

    /// Returns a `FrameTile` for the part of the image covered by `tile_bounds`.
    ///
    /// * `tile_bounds` - Tile region in the overall image.
    pub fn get_frame_tile(&self, tile_bounds: Bounds2u) -> FrameTile {
        FrameTile::new(tile_bounds.intersect(&self.pixel_bounds()))
    }

    /// Copies a rendered tile into the image. Tiles cover disjoint pixels so
    /// the order of merges does not matter.
    ///
    /// * `tile` - The tile.
    pub fn merge_frame_tile(&mut self, tile: &FrameTile) {
        for (p, color) in tile.pixels() {
            let offset = self.get_pixel_offset(&p);
            self.pixels[offset] = color;
        }
    }

    /// Returns the fraction of pixels with non-zero opacity.
    pub fn coverage(&self) -> Float {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let covered = self.pixels.iter().filter(|c| c.a > 0.0).count();
        covered as Float / self.pixels.len() as Float
    }

    /// Returns the mean luminance over all pixels.
    pub fn mean_luminance(&self) -> Float {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.pixels.iter().map(|c| c.rgb().y() as f64).sum();
        (sum / self.pixels.len() as f64) as Float
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
