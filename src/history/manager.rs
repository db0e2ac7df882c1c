//! Linear undo/redo history over snapshots
//!
//! Capture is caller-triggered at the start of a mutating interaction (the
//! first brush application of a drag), never per frame: per-frame captures
//! would flood history with near-duplicate states and make undo granularity
//! useless.

use crate::core::error::Error;
use crate::core::types::Result;
use crate::instance::InstanceRegistry;
use crate::terrain::Heightfield;

use super::snapshot::Snapshot;

/// Bounded history length; the oldest snapshot is evicted past this
pub const HISTORY_CAP: usize = 50;

/// Snapshot history with a cursor at the currently applied state.
///
/// Linear history: pushing a new snapshot after an undo discards the redo
/// branch beyond the cursor.
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    cap: usize,
    capturing: bool,
}

impl History {
    pub fn new() -> Self {
        Self::with_cap(HISTORY_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        assert!(cap >= 1);
        Self {
            snapshots: Vec::new(),
            cursor: 0,
            cap,
            capturing: false,
        }
    }

    /// Capture current state as a new snapshot.
    ///
    /// Truncates any redo branch beyond the cursor, appends, and evicts the
    /// oldest snapshot once over capacity. Reentrant calls are no-ops.
    pub fn capture(&mut self, heightfield: &Heightfield, registry: &InstanceRegistry) {
        if self.capturing {
            return;
        }
        self.capturing = true;

        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(Snapshot::capture(heightfield, registry));
        self.cursor = self.snapshots.len() - 1;

        if self.snapshots.len() > self.cap {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }

        log::debug!("captured snapshot {}/{}", self.cursor + 1, self.snapshots.len());
        self.capturing = false;
    }

    /// Step back one snapshot and apply it to live state
    pub fn undo(
        &mut self,
        heightfield: &mut Heightfield,
        registry: &mut InstanceRegistry,
    ) -> Result<()> {
        if self.snapshots.is_empty() || self.cursor == 0 {
            return Err(Error::NothingToUndo);
        }
        self.cursor -= 1;
        self.snapshots[self.cursor].apply(heightfield, registry);
        Ok(())
    }

    /// Step forward one snapshot and apply it to live state
    pub fn redo(
        &mut self,
        heightfield: &mut Heightfield,
        registry: &mut InstanceRegistry,
    ) -> Result<()> {
        if self.snapshots.is_empty() || self.cursor + 1 >= self.snapshots.len() {
            return Err(Error::NothingToRedo);
        }
        self.cursor += 1;
        self.snapshots[self.cursor].apply(heightfield, registry);
        Ok(())
    }

    /// Whether undo is currently possible (drives UI button state)
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor > 0
    }

    /// Whether redo is currently possible
    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the currently applied snapshot
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;
    use crate::instance::Category;

    fn setup() -> (Heightfield, InstanceRegistry, History) {
        (Heightfield::new(10.0, 10.0, 4), InstanceRegistry::new(), History::new())
    }

    #[test]
    fn test_undo_round_trip_is_exact() {
        let (mut hf, mut registry, mut history) = setup();
        registry.place(Category::Tree, Vec3::X, Vec3::ONE, Vec3::ZERO);

        history.capture(&hf, &registry);
        let positions_before: Vec<Vec3> = hf.positions().to_vec();
        let colors_before: Vec<Vec3> = hf.colors().to_vec();
        let instances_before = registry.export();

        // Mutate heights, colors, and instances; then a second capture
        hf.set_vertex_height(3, 7.5);
        hf.set_vertex_color(3, Vec3::new(0.9, 0.1, 0.1));
        registry.place(Category::Bush, Vec3::Z, Vec3::ONE, Vec3::ZERO);
        history.capture(&hf, &registry);

        history.undo(&mut hf, &mut registry).unwrap();

        // bit-for-bit on both buffers and the instance set
        assert_eq!(hf.positions(), positions_before.as_slice());
        assert_eq!(hf.colors(), colors_before.as_slice());
        assert_eq!(registry.export(), instances_before);
    }

    #[test]
    fn test_redo_restores_mutation() {
        let (mut hf, mut registry, mut history) = setup();
        history.capture(&hf, &registry);

        hf.set_vertex_height(0, 3.0);
        history.capture(&hf, &registry);

        history.undo(&mut hf, &mut registry).unwrap();
        assert_eq!(hf.position(0).y, 0.0);

        history.redo(&mut hf, &mut registry).unwrap();
        assert_eq!(hf.position(0).y, 3.0);
    }

    #[test]
    fn test_undo_at_boundary_reports_no_history() {
        let (mut hf, mut registry, mut history) = setup();
        assert!(matches!(
            history.undo(&mut hf, &mut registry),
            Err(Error::NothingToUndo)
        ));

        history.capture(&hf, &registry);
        // One snapshot: still nothing earlier to go back to
        assert!(matches!(
            history.undo(&mut hf, &mut registry),
            Err(Error::NothingToUndo)
        ));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_capture_after_undo_discards_redo_branch() {
        let (mut hf, mut registry, mut history) = setup();
        history.capture(&hf, &registry);

        hf.set_vertex_height(0, 1.0);
        history.capture(&hf, &registry);

        history.undo(&mut hf, &mut registry).unwrap();
        assert!(history.can_redo());

        // New capture from the undone state: the future is gone for good
        hf.set_vertex_height(0, 2.0);
        history.capture(&hf, &registry);
        assert!(!history.can_redo());
        assert!(matches!(
            history.redo(&mut hf, &mut registry),
            Err(Error::NothingToRedo)
        ));
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let (mut hf, mut registry, mut history) = setup();

        // 60 captures with distinct heights 0..59
        for step in 0..60 {
            hf.set_vertex_height(0, step as f32);
            history.capture(&hf, &registry);
        }

        assert_eq!(history.len(), 50);
        assert_eq!(history.cursor(), 49);

        // Walk all the way back: the earliest surviving snapshot is step 10
        while history.can_undo() {
            history.undo(&mut hf, &mut registry).unwrap();
        }
        assert_eq!(hf.position(0).y, 10.0);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_redo_after_undo_chain() {
        let (mut hf, mut registry, mut history) = setup();
        for step in 0..5 {
            hf.set_vertex_height(0, step as f32);
            history.capture(&hf, &registry);
        }

        history.undo(&mut hf, &mut registry).unwrap();
        history.undo(&mut hf, &mut registry).unwrap();
        assert_eq!(hf.position(0).y, 2.0);

        history.redo(&mut hf, &mut registry).unwrap();
        assert_eq!(hf.position(0).y, 3.0);
        history.redo(&mut hf, &mut registry).unwrap();
        assert_eq!(hf.position(0).y, 4.0);
        assert!(!history.can_redo());
    }
}
