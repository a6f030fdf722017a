// Pixel buffer shared by the drawing surface and its snapshots.

use thiserror::Error;
use tracing::{debug, trace};

use crate::Snapshot;

/// A `width x height` row-major pixel buffer.
/// The buffer length always equals `width * height` and neither dimension is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<P> {
    width: u32,
    height: u32,
    pixels: Vec<P>,
}

impl<P: Copy> Raster<P> {
    /// Create a raster with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: P) -> Result<Self, RasterError> {
        let total_pixels = pixel_count(width, height)?;
        debug!(
            "Allocating raster {}x{} ({} pixels)",
            width, height, total_pixels
        );

        Ok(Self {
            width,
            height,
            pixels: vec![fill; total_pixels],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    // Check if coordinates are within raster bounds
    fn is_valid_coordinate(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    // Convert 2d coordinates to a 1d index
    fn coord_to_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Read the pixel at `(x, y)`, or `None` outside the raster.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        if !self.is_valid_coordinate(x, y) {
            return None;
        }

        Some(self.pixels[self.coord_to_index(x, y)])
    }

    /// Write the pixel at `(x, y)`. Returns false (and writes nothing) outside the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: P) -> bool {
        if !self.is_valid_coordinate(x, y) {
            trace!("Ignoring write outside raster at ({}, {})", x, y);
            return false;
        }

        let index = self.coord_to_index(x, y);
        self.pixels[index] = pixel;
        true
    }

    // Fill the entire raster with one pixel value
    pub fn fill(&mut self, pixel: P) {
        self.pixels.fill(pixel);
    }

    /// Overwrite this raster with the content of `snapshot`.
    /// Fails without touching any pixel when the dimensions differ.
    pub fn restore(&mut self, snapshot: &Snapshot<P>) -> Result<(), RasterError> {
        if snapshot.dimensions() != self.dimensions() {
            return Err(RasterError::DimensionMismatch {
                expected: self.dimensions(),
                actual: snapshot.dimensions(),
            });
        }

        self.pixels.copy_from_slice(snapshot.pixels());
        Ok(())
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::EmptyDimensions { width, height });
    }
    Ok(width as usize * height as usize)
}

/// Errors raised while building or restoring a raster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("snapshot is {}x{}, raster is {}x{}", .actual.0, .actual.1, .expected.0, .expected.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raster_is_filled() {
        let raster = Raster::new(4, 3, 7u8).unwrap();
        assert_eq!(raster.dimensions(), (4, 3));
        assert_eq!(raster.pixels().len(), 12);
        assert!(raster.pixels().iter().all(|&p| p == 7));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Raster::new(0, 10, 0u8),
            Err(RasterError::EmptyDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(Raster::new(10, 0, 0u8).is_err());
    }

    #[test]
    fn pixel_access_is_row_major_and_bounded() {
        let mut raster = Raster::new(3, 2, 0u8).unwrap();
        assert!(raster.set_pixel(2, 1, 9));
        assert_eq!(raster.pixels()[5], 9);
        assert_eq!(raster.get_pixel(2, 1), Some(9));

        assert!(!raster.set_pixel(3, 0, 1));
        assert!(!raster.set_pixel(0, 2, 1));
        assert_eq!(raster.get_pixel(3, 0), None);
        assert_eq!(raster.pixels().iter().filter(|&&p| p == 1).count(), 0);
    }

    #[test]
    fn restore_requires_matching_dimensions() {
        let mut raster = Raster::new(2, 2, 0u8).unwrap();
        raster.set_pixel(0, 0, 5);
        let snapshot = Snapshot::capture(&raster);

        raster.fill(1);
        raster.restore(&snapshot).unwrap();
        assert_eq!(raster.pixels(), &[5, 0, 0, 0]);

        let other = Snapshot::capture(&Raster::new(3, 2, 0u8).unwrap());
        let err = raster.restore(&other).unwrap_err();
        assert_eq!(
            err,
            RasterError::DimensionMismatch {
                expected: (2, 2),
                actual: (3, 2)
            }
        );
        assert_eq!(raster.pixels(), &[5, 0, 0, 0]);
    }
}
