// Round brush used by the canvas for every stroke segment.

use egui::{Color32, Pos2};
use sketch_core::Raster;
use tracing::{trace, warn};

pub const MIN_STROKE_WIDTH: f32 = 1.0;
pub const MAX_STROKE_WIDTH: f32 = 100.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color32,
    width: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DEFAULT_STROKE_WIDTH, Color32::BLACK)
    }
}

impl Brush {
    pub fn new(width: f32, color: Color32) -> Self {
        let mut brush = Self {
            color,
            width: DEFAULT_STROKE_WIDTH,
        };
        brush.set_width(width);
        brush
    }

    /// Stroke width in logical units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the width, clamped to `MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH`.
    pub fn set_width(&mut self, width: f32) {
        if !width.is_finite() {
            warn!("Ignoring non-finite stroke width {}", width);
            return;
        }
        let clamped = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if clamped != width {
            warn!("Stroke width {} out of range, clamped to {}", width, clamped);
        }
        self.width = clamped;
    }

    /// Paint a filled disc at `center` (physical pixel coordinates).
    pub fn stamp(&self, raster: &mut Raster<Color32>, center: Pos2, scale: f32) -> usize {
        self.stroke_segment(raster, center, center, scale)
    }

    /// Paint a round-capped segment between two physical positions.
    ///
    /// Every pixel whose center lies within half the scaled width of the segment
    /// is set. Returns the number of pixels written.
    pub fn stroke_segment(
        &self,
        raster: &mut Raster<Color32>,
        from: Pos2,
        to: Pos2,
        scale: f32,
    ) -> usize {
        let radius = (self.width * scale / 2.0).max(0.5);

        let min_x = ((from.x.min(to.x) - radius).floor() as i64).max(0);
        let min_y = ((from.y.min(to.y) - radius).floor() as i64).max(0);
        let max_x = ((from.x.max(to.x) + radius).ceil() as i64).min(raster.width() as i64 - 1);
        let max_y = ((from.y.max(to.y) + radius).ceil() as i64).min(raster.height() as i64 - 1);

        let mut painted = 0;
        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let center = Pos2::new(px as f32 + 0.5, py as f32 + 0.5);
                if distance_to_segment(center, from, to) <= radius
                    && raster.set_pixel(px as u32, py as u32, self.color)
                {
                    painted += 1;
                }
            }
        }

        trace!(
            "Brush segment ({:?} -> {:?}) radius {} painted {} pixels",
            from,
            to,
            radius,
            painted
        );
        painted
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
