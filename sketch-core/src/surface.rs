use crate::Snapshot;

/// The drawing surface the sketchpad paints on.
///
/// Coordinates are logical units. How a surface maps them to pixels, and how
/// it applies color and width, is its own business.
pub trait Surface {
    type Pixel: Copy;
    type Color;

    /// Start a stroke at `(x, y)` without painting anything yet.
    fn begin_stroke(&mut self, x: f32, y: f32);

    /// Paint from the previous stroke point to `(x, y)`.
    fn extend_stroke(&mut self, x: f32, y: f32);

    /// Finish the current stroke.
    fn end_stroke(&mut self) {}

    fn capture_snapshot(&self) -> Snapshot<Self::Pixel>;

    fn restore_snapshot(&mut self, snapshot: &Snapshot<Self::Pixel>);

    /// Clear the visible surface to blank.
    fn erase_surface(&mut self);

    fn set_stroke_color(&mut self, color: Self::Color);

    fn set_stroke_width(&mut self, width: f32);
}
