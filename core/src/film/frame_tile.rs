//! Frame Tile

use crate::color::*;
use crate::geometry::*;

/// Stores the rendered pixels of one rectangular region of the image. Each
/// worker fills its own tiles so no pixel is written by two threads.
pub struct FrameTile {
    /// Bounding box of the pixels in the tile.
    pixel_bounds: Bounds2u,

    /// Tile pixels in row-major order.
    pixels: Vec<RGBAColor>,
}

impl FrameTile {
    /// Create a new `FrameTile` cleared to transparent black.
    ///
    /// * `pixel_bounds` - Bounding box of the pixels in the tile.
    pub fn new(pixel_bounds: Bounds2u) -> Self {
        Self {
            pixel_bounds,
            pixels: vec![RGBAColor::TRANSPARENT; pixel_bounds.area()],
        }
    }

    /// Returns the bounding box of the tile.
    pub fn pixel_bounds(&self) -> Bounds2u {
        self.pixel_bounds
    }

    /// Stores a pixel color.
    ///
    /// * `p`     - Pixel coordinates with respect to the overall image.
    /// * `color` - The color.
    pub fn set_pixel(&mut self, p: &Point2<usize>, color: RGBAColor) {
        let offset = self.get_pixel_offset(p);
        self.pixels[offset] = color;
    }

    /// Returns an iterator over (pixel coordinates, color) in scan order.
    pub fn pixels(&self) -> impl Iterator<Item = (Point2<usize>, RGBAColor)> + '_ {
        self.pixel_bounds.into_iter().zip(self.pixels.iter().copied())
    }

    /// Returns the offset into the tile's pixels.
    ///
    /// * `p` - Pixel coordinates with respect to the overall image.
    fn get_pixel_offset(&self, p: &Point2<usize>) -> usize {
        assert!(self.pixel_bounds.contains_exclusive(p));
        let width = self.pixel_bounds.p_max.x - self.pixel_bounds.p_min.x;
        (p.y - self.pixel_bounds.p_min.y) * width + (p.x - self.pixel_bounds.p_min.x)
    }
}
