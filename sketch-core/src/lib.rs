//! sketch-core: raster snapshots + undo history for the sketchpad.
//!
//! Design rules:
//! - The history only ever holds full-surface snapshots, one per finished gesture.
//! - Every history operation is total. Undo on an empty or single-entry history
//!   degrades to a full erase.
//! - No redo. Undo truncates the tail.
//! - Nothing here knows about a UI toolkit; input arrives as `SketchEvent`s.

pub mod event;
pub mod history;
pub mod raster;
pub mod sketchpad;
pub mod snapshot;
pub mod surface;

pub use event::SketchEvent;
pub use history::{HistoryConfig, StrokeHistory, UndoOutcome, DEFAULT_MAX_STATES};
pub use raster::{Raster, RasterError};
pub use sketchpad::Sketchpad;
pub use snapshot::Snapshot;
pub use surface::Surface;
