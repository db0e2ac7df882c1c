//! Typed collections of placed decoration objects, keyed by category
//!
//! The registry only owns transform records; instanced rendering is external
//! and reads these on change. Export order is fixed (category order, then
//! insertion order) so snapshots and saved projects are diffable.

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;

/// Hard per-category instance bound; placements beyond it are rejected
pub const MAX_PER_CATEGORY: usize = 10_000;

/// Decoration category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tree,
    Bush,
    Rock,
    Grass,
    Flower,
    Cactus,
}

impl Category {
    /// All categories in their fixed iteration order
    pub const ALL: [Category; 6] = [
        Category::Tree,
        Category::Bush,
        Category::Rock,
        Category::Grass,
        Category::Flower,
        Category::Cactus,
    ];

    fn index(self) -> usize {
        match self {
            Category::Tree => 0,
            Category::Bush => 1,
            Category::Rock => 2,
            Category::Grass => 3,
            Category::Flower => 4,
            Category::Cactus => 5,
        }
    }
}

/// One placed object's transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub scale: Vec3,
    /// Euler angles in radians (x, y, z)
    pub rotation: Vec3,
}

/// A transform tagged with its category, as exported for snapshots and saves
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceRecord {
    pub category: Category,
    pub transform: InstanceTransform,
}

/// Registry of all placed instances, grouped by category
pub struct InstanceRegistry {
    groups: [Vec<InstanceTransform>; 6],
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self {
            groups: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Append an instance. Returns false (and stores nothing) when the
    /// category is at capacity; silent by design so drag-placement keeps
    /// flowing.
    pub fn place(
        &mut self,
        category: Category,
        position: Vec3,
        scale: Vec3,
        rotation: Vec3,
    ) -> bool {
        let group = &mut self.groups[category.index()];
        if group.len() >= MAX_PER_CATEGORY {
            log::debug!("{category:?} at capacity, placement dropped");
            return false;
        }
        group.push(InstanceTransform { position, scale, rotation });
        true
    }

    /// Live instance count for one category
    pub fn count(&self, category: Category) -> usize {
        self.groups[category.index()].len()
    }

    /// Total instances across all categories
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Transforms of one category, in insertion order
    pub fn category_instances(&self, category: Category) -> &[InstanceTransform] {
        &self.groups[category.index()]
    }

    /// Flatten all categories into one deterministic sequence:
    /// category order, then insertion order within each category.
    pub fn export(&self) -> Vec<InstanceRecord> {
        let mut records = Vec::with_capacity(self.total());
        for category in Category::ALL {
            for &transform in &self.groups[category.index()] {
                records.push(InstanceRecord { category, transform });
            }
        }
        records
    }

    /// Clear every category, then re-insert the records in sequence order.
    /// Overflow beyond a category's capacity is silently dropped, matching
    /// `place` semantics.
    pub fn restore(&mut self, records: &[InstanceRecord]) {
        for group in &mut self.groups {
            group.clear();
        }
        for record in records {
            let t = record.transform;
            self.place(record.category, t.position, t.scale, t.rotation);
        }
    }
}

impl Default for InstanceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Category, x: f32) -> (Category, Vec3, Vec3, Vec3) {
        (category, Vec3::new(x, 0.0, 0.0), Vec3::ONE, Vec3::ZERO)
    }

    #[test]
    fn test_place_and_count() {
        let mut registry = InstanceRegistry::new();
        let (c, p, s, r) = record(Category::Tree, 1.0);
        assert!(registry.place(c, p, s, r));
        assert!(registry.place(Category::Bush, p, s, r));
        assert_eq!(registry.count(Category::Tree), 1);
        assert_eq!(registry.count(Category::Bush), 1);
        assert_eq!(registry.count(Category::Rock), 0);
        assert_eq!(registry.total(), 2);
    }

    #[test]
    fn test_capacity_bound() {
        let mut registry = InstanceRegistry::new();
        let (c, p, s, r) = record(Category::Grass, 0.0);
        for _ in 0..MAX_PER_CATEGORY {
            assert!(registry.place(c, p, s, r));
        }
        // the 10_001st placement is rejected
        assert!(!registry.place(c, p, s, r));
        assert_eq!(registry.count(Category::Grass), MAX_PER_CATEGORY);

        // other categories are unaffected
        assert!(registry.place(Category::Tree, p, s, r));
    }

    #[test]
    fn test_export_order_is_deterministic() {
        let mut registry = InstanceRegistry::new();
        // Interleave placements across categories
        registry.place(Category::Rock, Vec3::X, Vec3::ONE, Vec3::ZERO);
        registry.place(Category::Tree, Vec3::Y, Vec3::ONE, Vec3::ZERO);
        registry.place(Category::Rock, Vec3::Z, Vec3::ONE, Vec3::ZERO);
        registry.place(Category::Tree, Vec3::ZERO, Vec3::ONE, Vec3::ZERO);

        let records = registry.export();
        let categories: Vec<Category> = records.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![Category::Tree, Category::Tree, Category::Rock, Category::Rock]
        );
        // insertion order within category preserved
        assert_eq!(records[0].transform.position, Vec3::Y);
        assert_eq!(records[1].transform.position, Vec3::ZERO);
        assert_eq!(records[2].transform.position, Vec3::X);
        assert_eq!(records[3].transform.position, Vec3::Z);
    }

    #[test]
    fn test_restore_round_trip() {
        let mut registry = InstanceRegistry::new();
        registry.place(Category::Flower, Vec3::X, Vec3::splat(2.0), Vec3::new(0.0, 1.0, 0.0));
        registry.place(Category::Cactus, Vec3::Z, Vec3::ONE, Vec3::ZERO);
        let exported = registry.export();

        let mut other = InstanceRegistry::new();
        other.place(Category::Tree, Vec3::ZERO, Vec3::ONE, Vec3::ZERO);
        other.restore(&exported);

        assert_eq!(other.count(Category::Tree), 0);
        assert_eq!(other.export(), exported);
    }

    #[test]
    fn test_restore_clears_before_insert() {
        let mut registry = InstanceRegistry::new();
        for i in 0..5 {
            registry.place(Category::Bush, Vec3::splat(i as f32), Vec3::ONE, Vec3::ZERO);
        }
        registry.restore(&[]);
        assert_eq!(registry.total(), 0);
    }
}
