use crate::Raster;

/// Immutable capture of an entire drawing surface at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<P> {
    raster: Raster<P>,
}

impl<P: Copy> Snapshot<P> {
    /// Copy the full content of `raster`.
    pub fn capture(raster: &Raster<P>) -> Self {
        Self {
            raster: raster.clone(),
        }
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }

    pub fn pixels(&self) -> &[P] {
        self.raster.pixels()
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        self.raster.get_pixel(x, y)
    }

    /// Approximate heap footprint of the pixel buffer, in bytes.
    pub fn byte_size(&self) -> usize {
        std::mem::size_of_val(self.raster.pixels())
    }
}
