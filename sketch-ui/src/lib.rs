//! sketch-ui: raster canvas, brush and the eframe shell for the sketchpad.

pub mod app;
pub mod config;
pub mod editor;
pub mod logging;

pub use app::SketchApp;
pub use editor::{Brush, Canvas, CanvasError, PaletteColor};
