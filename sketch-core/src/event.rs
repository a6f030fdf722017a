/// Input delivered to a [`Sketchpad`](crate::Sketchpad), one at a time.
///
/// Pointer positions are logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SketchEvent<C> {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    Undo,
    Clear,
    SelectColor(C),
    SetStrokeWidth(f32),
}

impl<C> SketchEvent<C> {
    /// Whether handling this event can change the surface pixels.
    pub fn touches_pixels(&self) -> bool {
        !matches!(
            self,
            SketchEvent::PointerDown { .. }
                | SketchEvent::SelectColor(_)
                | SketchEvent::SetStrokeWidth(_)
        )
    }
}
