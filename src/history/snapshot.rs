//! Deep, point-in-time copies of all editable state

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::types::Vec3;
use crate::instance::{InstanceRecord, InstanceRegistry};
use crate::terrain::Heightfield;

/// A full copy of the heightfield buffers and instance records.
///
/// Buffers are deep copies: live mutation after a capture never aliases
/// stored history. Once captured, a snapshot never changes.
pub struct Snapshot {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    instances: Vec<InstanceRecord>,
    timestamp_ms: u64,
}

impl Snapshot {
    /// Capture the current heightfield and registry state
    pub fn capture(heightfield: &Heightfield, registry: &InstanceRegistry) -> Self {
        Self {
            positions: heightfield.positions().to_vec(),
            colors: heightfield.colors().to_vec(),
            instances: registry.export(),
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
        }
    }

    /// Overwrite live state from this snapshot: heightfield buffers
    /// (normals recomputed inside), then the instance registry.
    pub fn apply(&self, heightfield: &mut Heightfield, registry: &mut InstanceRegistry) {
        heightfield.copy_buffers_from(&self.positions, &self.colors);
        registry.restore(&self.instances);
    }

    /// Capture wall-clock time in milliseconds since the Unix epoch
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// Number of vertices in the captured buffers
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Category;

    #[test]
    fn test_snapshot_is_independent_of_live_state() {
        let mut hf = Heightfield::new(10.0, 10.0, 4);
        let mut registry = InstanceRegistry::new();
        registry.place(Category::Tree, Vec3::X, Vec3::ONE, Vec3::ZERO);

        let snapshot = Snapshot::capture(&hf, &registry);
        assert_eq!(snapshot.vertex_count(), hf.vertex_count());

        // Mutate live state after the capture
        hf.set_vertex_height(0, 9.0);
        hf.set_vertex_color(0, Vec3::X);
        registry.place(Category::Tree, Vec3::Z, Vec3::ONE, Vec3::ZERO);

        // Applying the snapshot restores the pre-mutation state exactly
        snapshot.apply(&mut hf, &mut registry);
        assert_eq!(hf.position(0).y, 0.0);
        assert_ne!(hf.color(0), Vec3::X);
        assert_eq!(registry.count(Category::Tree), 1);
    }
}
