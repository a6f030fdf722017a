// Editor module for the sketchpad UI.

pub mod brush;
pub mod canvas;
pub mod palette;

pub use brush::{Brush, DEFAULT_STROKE_WIDTH, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
pub use canvas::{Canvas, CanvasError};
pub use palette::PaletteColor;
