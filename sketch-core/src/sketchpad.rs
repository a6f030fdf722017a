// Owns the drawing surface together with its undo history and routes input events to both.

use tracing::{debug, info, trace, warn};

use crate::{HistoryConfig, SketchEvent, StrokeHistory, Surface, UndoOutcome};

pub struct Sketchpad<S: Surface> {
    surface: S,
    history: StrokeHistory<S::Pixel>,
    drawing: bool,
}

impl<S: Surface> Sketchpad<S> {
    pub fn new(surface: S, config: HistoryConfig) -> Self {
        Self {
            surface,
            history: StrokeHistory::new(config),
            drawing: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &StrokeHistory<S::Pixel> {
        &self.history
    }

    /// True between a pointer-down and the matching pointer-up.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Handle one input event to completion.
    pub fn dispatch(&mut self, event: SketchEvent<S::Color>) {
        match event {
            SketchEvent::PointerDown { x, y } => {
                if self.drawing {
                    warn!("Pointer down during an active gesture, finishing the previous one");
                    self.finish_gesture();
                }
                trace!("Gesture started at ({}, {})", x, y);
                self.surface.begin_stroke(x, y);
                self.drawing = true;
            }
            SketchEvent::PointerMove { x, y } => {
                if self.drawing {
                    self.surface.extend_stroke(x, y);
                }
            }
            SketchEvent::PointerUp => {
                if self.drawing {
                    self.finish_gesture();
                } else {
                    trace!("Pointer up without an active gesture, ignoring");
                }
            }
            SketchEvent::Undo => self.undo(),
            SketchEvent::Clear => self.clear(),
            SketchEvent::SelectColor(color) => self.surface.set_stroke_color(color),
            SketchEvent::SetStrokeWidth(width) => self.surface.set_stroke_width(width),
        }
    }

    /// Step back one gesture. With nothing left to restore the surface is erased.
    ///
    /// During a gesture only the partial stroke is dropped; committed gestures stay.
    pub fn undo(&mut self) {
        let outcome = if self.abandon_gesture() {
            self.history.resting()
        } else {
            self.history.undo()
        };
        show(&mut self.surface, outcome);
    }

    /// Forget every gesture and erase the surface.
    pub fn clear(&mut self) {
        self.abandon_gesture();
        info!("Clearing sketchpad");
        self.history.clear();
        self.surface.erase_surface();
    }

    fn finish_gesture(&mut self) {
        self.surface.end_stroke();
        self.drawing = false;
        let snapshot = self.surface.capture_snapshot();
        self.history.commit(snapshot);
    }

    // Returns true when a gesture was in progress
    fn abandon_gesture(&mut self) -> bool {
        if !self.drawing {
            return false;
        }
        debug!("Abandoning active gesture");
        self.surface.end_stroke();
        self.drawing = false;
        true
    }
}

fn show<S: Surface>(surface: &mut S, outcome: UndoOutcome<'_, S::Pixel>) {
    match outcome {
        UndoOutcome::Restore(snapshot) => surface.restore_snapshot(snapshot),
        UndoOutcome::Erase => surface.erase_surface(),
    }
}
