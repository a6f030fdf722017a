// Raster canvas the sketchpad draws on.
// Input coordinates and stroke widths are logical; the pixel buffer is physical
// (logical size times pixels-per-point) so strokes stay sharp on HiDPI displays.

use egui::{Color32, ColorImage, Pos2, Vec2};
use sketch_core::{Raster, RasterError, Snapshot, Surface};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::editor::Brush;

#[derive(Debug, Clone)]
pub struct Canvas {
    raster: Raster<Color32>,
    background: Color32,
    pixels_per_point: f32,
    logical_size: Vec2,
    brush: Brush,
    pen: Option<Pos2>,
}

impl Canvas {
    pub fn new(
        logical_width: u32,
        logical_height: u32,
        pixels_per_point: f32,
        background: Color32,
    ) -> Result<Self, CanvasError> {
        if !pixels_per_point.is_finite() || pixels_per_point <= 0.0 {
            return Err(CanvasError::InvalidScale(pixels_per_point));
        }

        let width = (logical_width as f32 * pixels_per_point).round() as u32;
        let height = (logical_height as f32 * pixels_per_point).round() as u32;
        info!(
            "Creating canvas {}x{} points at {} px/pt ({}x{} pixels), background {:?}",
            logical_width, logical_height, pixels_per_point, width, height, background
        );

        let raster = Raster::new(width, height, background)?;

        Ok(Self {
            raster,
            background,
            pixels_per_point,
            logical_size: Vec2::new(logical_width as f32, logical_height as f32),
            brush: Brush::default(),
            pen: None,
        })
    }

    // Physical dimensions
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn logical_size(&self) -> Vec2 {
        self.logical_size
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn raster(&self) -> &Raster<Color32> {
        &self.raster
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.raster.get_pixel(x, y)
    }

    /// Whether every pixel still shows the background.
    pub fn is_blank(&self) -> bool {
        self.raster.pixels().iter().all(|&p| p == self.background)
    }

    /// Pixel buffer as an egui image, ready for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::new(
            [self.width() as usize, self.height() as usize],
            self.raster.pixels().to_vec(),
        )
    }

    fn to_physical(&self, x: f32, y: f32) -> Pos2 {
        Pos2::new(x * self.pixels_per_point, y * self.pixels_per_point)
    }
}

impl Surface for Canvas {
    type Pixel = Color32;
    type Color = Color32;

    fn begin_stroke(&mut self, x: f32, y: f32) {
        self.pen = Some(self.to_physical(x, y));
    }

    fn extend_stroke(&mut self, x: f32, y: f32) {
        let to = self.to_physical(x, y);
        let from = self.pen.unwrap_or(to);
        self.brush
            .stroke_segment(&mut self.raster, from, to, self.pixels_per_point);
        self.pen = Some(to);
    }

    fn end_stroke(&mut self) {
        trace!("Stroke ended");
        self.pen = None;
    }

    fn capture_snapshot(&self) -> Snapshot<Color32> {
        Snapshot::capture(&self.raster)
    }

    fn restore_snapshot(&mut self, snapshot: &Snapshot<Color32>) {
        if let Err(err) = self.raster.restore(snapshot) {
            warn!("Ignoring snapshot that does not fit the canvas: {}", err);
        }
    }

    fn erase_surface(&mut self) {
        debug!("Erasing canvas to {:?}", self.background);
        self.raster.fill(self.background);
    }

    fn set_stroke_color(&mut self, color: Color32) {
        debug!("Stroke color set to {:?}", color);
        self.brush.color = color;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.brush.set_width(width);
        debug!("Stroke width set to {}", self.brush.width());
    }
}

/// Canvas construction failures. These mean there is nothing to draw on.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("pixels per point must be a positive finite number, got {0}")]
    InvalidScale(f32),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_multiplies_physical_size() {
        let canvas = Canvas::new(100, 50, 2.0, Color32::WHITE).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (200, 100));
        assert_eq!(canvas.logical_size(), Vec2::new(100.0, 50.0));
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_invalid_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 10, 1.0, Color32::WHITE),
            Err(CanvasError::Raster(RasterError::EmptyDimensions { .. }))
        ));
        assert!(matches!(
            Canvas::new(10, 10, 0.0, Color32::WHITE),
            Err(CanvasError::InvalidScale(_))
        ));
        assert!(matches!(
            Canvas::new(10, 10, f32::INFINITY, Color32::WHITE),
            Err(CanvasError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_begin_stroke_paints_nothing() {
        let mut canvas = Canvas::new(10, 10, 1.0, Color32::WHITE).unwrap();
        canvas.begin_stroke(5.0, 5.0);
        canvas.end_stroke();
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_stroke_uses_logical_coordinates() {
        let mut canvas = Canvas::new(20, 20, 2.0, Color32::WHITE).unwrap();
        canvas.set_stroke_color(Color32::RED);
        canvas.set_stroke_width(1.0);

        canvas.begin_stroke(2.0, 10.0);
        canvas.extend_stroke(18.0, 10.0);

        // logical (10, 10) is physical (20, 20)
        assert_eq!(canvas.get_pixel(20, 20), Some(Color32::RED));
        assert_eq!(canvas.get_pixel(20, 10), Some(Color32::WHITE));
        assert_eq!(canvas.get_pixel(38, 20), Some(Color32::WHITE));
    }

    #[test]
    fn test_erase_restores_background() {
        let background = Color32::from_rgb(240, 240, 240);
        let mut canvas = Canvas::new(10, 10, 1.0, background).unwrap();
        canvas.begin_stroke(1.0, 1.0);
        canvas.extend_stroke(8.0, 8.0);
        assert!(!canvas.is_blank());

        canvas.erase_surface();
        assert!(canvas.is_blank());
        assert_eq!(canvas.get_pixel(5, 5), Some(background));
    }

    #[test]
    fn test_snapshot_roundtrip_and_mismatch() {
        let mut canvas = Canvas::new(10, 10, 1.0, Color32::WHITE).unwrap();
        canvas.begin_stroke(2.0, 2.0);
        canvas.extend_stroke(7.0, 2.0);
        let snapshot = canvas.capture_snapshot();

        canvas.erase_surface();
        canvas.restore_snapshot(&snapshot);
        assert_eq!(canvas.raster().pixels(), snapshot.pixels());

        let other = Canvas::new(4, 4, 1.0, Color32::BLACK).unwrap();
        canvas.restore_snapshot(&other.capture_snapshot());
        assert_eq!(canvas.raster().pixels(), snapshot.pixels());
    }

    #[test]
    fn test_color_image_matches_dimensions() {
        let canvas = Canvas::new(3, 2, 2.0, Color32::WHITE).unwrap();
        let image = canvas.to_color_image();
        assert_eq!(image.size, [6, 4]);
        assert!(image.pixels.iter().all(|&p| p == Color32::WHITE));
    }
}
