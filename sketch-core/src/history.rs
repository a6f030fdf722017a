// Undo history for the sketchpad: one full-surface snapshot per finished gesture.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Snapshot;

/// Depth cap applied when the configuration does not name one.
pub const DEFAULT_MAX_STATES: usize = 50;

/// History settings. Loaded from the app config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept. `None` keeps every snapshot.
    #[serde(default = "default_max_states")]
    pub max_states: Option<NonZeroUsize>,
}

fn default_max_states() -> Option<NonZeroUsize> {
    NonZeroUsize::new(DEFAULT_MAX_STATES)
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_states: default_max_states(),
        }
    }
}

impl HistoryConfig {
    pub fn unbounded() -> Self {
        Self { max_states: None }
    }

    // Worst-case bytes held by a full history, None when unbounded
    pub fn max_footprint(&self, snapshot_bytes: usize) -> Option<usize> {
        self.max_states
            .map(|max| max.get().saturating_mul(snapshot_bytes))
    }
}

/// What the surface should show after an undo.
#[derive(Debug, PartialEq, Eq)]
pub enum UndoOutcome<'a, P> {
    /// Repaint the surface from this snapshot.
    Restore(&'a Snapshot<P>),
    /// Nothing left to show: erase the surface.
    Erase,
}

/// Ordered snapshots plus a cursor on the newest one.
///
/// The cursor is never stored separately: it is always `len - 1`, or `None`
/// when the history is empty, so it cannot drift out of range.
#[derive(Debug, Clone)]
pub struct StrokeHistory<P> {
    snapshots: VecDeque<Snapshot<P>>,
    max_states: Option<NonZeroUsize>,
    // Newest snapshot pushed out by the cap. Undo never goes below it.
    floor: Option<Snapshot<P>>,
}

impl<P: Copy> Default for StrokeHistory<P> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl<P: Copy> StrokeHistory<P> {
    pub fn new(config: HistoryConfig) -> Self {
        debug!("Creating stroke history (max_states: {:?})", config.max_states);
        Self {
            snapshots: VecDeque::new(),
            max_states: config.max_states,
            floor: None,
        }
    }

    /// Append a snapshot and move the cursor onto it. Returns the new cursor.
    ///
    /// When a depth cap is set, the oldest snapshots are evicted to stay within it.
    pub fn commit(&mut self, snapshot: Snapshot<P>) -> usize {
        trace!(
            "Committing {}x{} snapshot ({} bytes)",
            snapshot.width(),
            snapshot.height(),
            snapshot.byte_size()
        );
        self.snapshots.push_back(snapshot);

        if let Some(max) = self.max_states {
            while self.snapshots.len() > max.get() {
                self.floor = self.snapshots.pop_front();
                debug!("History over {} states, oldest snapshot becomes the undo floor", max);
            }
        }

        let cursor = self.snapshots.len() - 1;
        debug!("Committed snapshot, cursor now {}", cursor);
        cursor
    }

    /// Drop the newest snapshot and report what the surface should show.
    ///
    /// Once the cap has evicted snapshots, undo bottoms out at the newest evicted
    /// one instead of erasing strokes that were never undone. Without evictions an
    /// empty history, or undoing its only snapshot, asks for an erase.
    pub fn undo(&mut self) -> UndoOutcome<'_, P> {
        if self.snapshots.pop_back().is_some() {
            debug!("Undo, cursor now {:?}", self.cursor());
        }
        self.resting()
    }

    // What the surface shows once every finished gesture is painted
    pub fn resting(&self) -> UndoOutcome<'_, P> {
        match self.snapshots.back().or(self.floor.as_ref()) {
            Some(snapshot) => UndoOutcome::Restore(snapshot),
            None => {
                debug!("No snapshot to show, erasing surface");
                UndoOutcome::Erase
            }
        }
    }

    /// Discard every snapshot.
    pub fn clear(&mut self) {
        debug!("Clearing history ({} snapshots)", self.snapshots.len());
        self.snapshots.clear();
        self.floor = None;
    }

    /// Index of the current snapshot, `None` when empty.
    pub fn cursor(&self) -> Option<usize> {
        self.snapshots.len().checked_sub(1)
    }

    pub fn current(&self) -> Option<&Snapshot<P>> {
        self.snapshots.back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots from oldest to newest.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot<P>> {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Raster;

    fn snap(value: u8) -> Snapshot<u8> {
        Snapshot::capture(&Raster::new(2, 2, value).unwrap())
    }

    fn values(history: &StrokeHistory<u8>) -> Vec<u8> {
        history.snapshots().map(|s| s.pixels()[0]).collect()
    }

    #[test]
    fn cursor_follows_commits() {
        let mut history = StrokeHistory::new(HistoryConfig::unbounded());
        assert_eq!(history.cursor(), None);

        for n in 0..10u8 {
            let cursor = history.commit(snap(n));
            assert_eq!(cursor, n as usize);
            assert_eq!(history.cursor(), Some(n as usize));
        }
        assert_eq!(history.len(), 10);
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = StrokeHistory::default();
        history.commit(snap(1));
        history.commit(snap(2));

        assert_eq!(history.undo(), UndoOutcome::Restore(&snap(1)));
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(values(&history), vec![1]);
    }

    #[test]
    fn undo_of_last_snapshot_erases() {
        let mut history = StrokeHistory::default();
        history.commit(snap(1));

        assert_eq!(history.undo(), UndoOutcome::Erase);
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn undo_on_empty_history_is_idempotent() {
        let mut history: StrokeHistory<u8> = StrokeHistory::default();
        for _ in 0..3 {
            assert_eq!(history.undo(), UndoOutcome::Erase);
            assert_eq!(history.cursor(), None);
            assert!(history.is_empty());
        }
    }

    #[test]
    fn clear_resets_everything() {
        let mut history = StrokeHistory::default();
        history.commit(snap(1));
        history.commit(snap(2));
        history.commit(snap(3));

        history.clear();
        assert_eq!(history.cursor(), None);
        assert!(history.current().is_none());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn cap_evicts_oldest_snapshots() {
        let mut history = StrokeHistory::new(HistoryConfig {
            max_states: NonZeroUsize::new(3),
        });
        for n in 1..=5u8 {
            history.commit(snap(n));
        }

        assert_eq!(values(&history), vec![3, 4, 5]);
        assert_eq!(history.cursor(), Some(2));

        assert_eq!(history.undo(), UndoOutcome::Restore(&snap(4)));
        assert_eq!(history.undo(), UndoOutcome::Restore(&snap(3)));

        // 1 and 2 were evicted, never undone: undo stops at 2
        assert_eq!(history.undo(), UndoOutcome::Restore(&snap(2)));
        assert!(history.is_empty());
        assert_eq!(history.undo(), UndoOutcome::Restore(&snap(2)));
    }

    #[test]
    fn resting_shows_newest_or_floor() {
        let mut history = StrokeHistory::new(HistoryConfig {
            max_states: NonZeroUsize::new(1),
        });
        assert_eq!(history.resting(), UndoOutcome::Erase);

        history.commit(snap(1));
        assert_eq!(history.resting(), UndoOutcome::Restore(&snap(1)));

        history.commit(snap(2));
        history.undo();
        assert_eq!(history.resting(), UndoOutcome::Restore(&snap(1)));
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn clear_drops_the_eviction_floor() {
        let mut history = StrokeHistory::new(HistoryConfig {
            max_states: NonZeroUsize::new(1),
        });
        history.commit(snap(1));
        history.commit(snap(2));

        history.clear();
        assert_eq!(history.undo(), UndoOutcome::Erase);

        history.commit(snap(3));
        assert_eq!(history.undo(), UndoOutcome::Erase);
    }

    #[test]
    fn footprint_scales_with_cap() {
        let config = HistoryConfig {
            max_states: NonZeroUsize::new(50),
        };
        assert_eq!(config.max_footprint(1024), Some(50 * 1024));
        assert_eq!(HistoryConfig::unbounded().max_footprint(1024), None);
    }

    #[test]
    fn config_defaults_and_null_cap() {
        let config: HistoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_states, NonZeroUsize::new(DEFAULT_MAX_STATES));

        let config: HistoryConfig = serde_json::from_str(r#"{"max_states": null}"#).unwrap();
        assert_eq!(config, HistoryConfig::unbounded());

        let config: HistoryConfig = serde_json::from_str(r#"{"max_states": 8}"#).unwrap();
        assert_eq!(config.max_states, NonZeroUsize::new(8));

        assert!(serde_json::from_str::<HistoryConfig>(r#"{"max_states": 0}"#).is_err());
    }
}
