//! Grid-structured terrain mesh with mutable heights and vertex colors
//!
//! Topology is fixed at construction: `(segments+1)^2` vertices in row-major
//! order over a `width x depth` plane centered on the origin. Only vertex
//! heights (`y`) and colors ever change after creation. Normals are derived
//! data, recomputed on demand after height mutations and consumed by an
//! external renderer.

use crate::core::types::Vec3;
use crate::math::Aabb;

/// Default vertex color before any painting (soft green)
pub const DEFAULT_COLOR: Vec3 = Vec3::new(0.2, 0.6, 0.2);

/// Which live buffers changed since the renderer last looked.
///
/// Color-only edits don't require a normal recompute or a position re-upload,
/// so the two are tracked separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    pub heights: bool,
    pub colors: bool,
}

impl DirtyFlags {
    pub fn any(&self) -> bool {
        self.heights || self.colors
    }
}

/// Grid-topology terrain mesh.
pub struct Heightfield {
    width: f32,
    depth: f32,
    segments: u32,
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    normals: Vec<Vec3>,
    dirty: DirtyFlags,
}

impl Heightfield {
    /// Create a flat heightfield at y = 0 with the default color.
    ///
    /// `segments` is the number of grid cells per side; the vertex grid is
    /// `(segments+1) x (segments+1)`.
    pub fn new(width: f32, depth: f32, segments: u32) -> Self {
        assert!(segments >= 1, "heightfield needs at least one cell");
        assert!(width > 0.0 && depth > 0.0);

        let side = (segments + 1) as usize;
        let count = side * side;

        let mut positions = Vec::with_capacity(count);
        let half_w = width * 0.5;
        let half_d = depth * 0.5;
        let dx = width / segments as f32;
        let dz = depth / segments as f32;

        for j in 0..side {
            for i in 0..side {
                positions.push(Vec3::new(
                    -half_w + i as f32 * dx,
                    0.0,
                    -half_d + j as f32 * dz,
                ));
            }
        }

        Self {
            width,
            depth,
            segments,
            positions,
            colors: vec![DEFAULT_COLOR; count],
            normals: vec![Vec3::Y; count],
            dirty: DirtyFlags { heights: true, colors: true },
        }
    }

    /// Number of vertices (fixed for the lifetime of the mesh)
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertices per side of the grid
    pub fn vertices_per_side(&self) -> usize {
        (self.segments + 1) as usize
    }

    /// Grid cells per side
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// World-space grid spacing along x
    pub fn spacing_x(&self) -> f32 {
        self.width / self.segments as f32
    }

    /// World-space grid spacing along z
    pub fn spacing_z(&self) -> f32 {
        self.depth / self.segments as f32
    }

    /// Minimum x/z corner of the plane
    pub fn min_corner(&self) -> (f32, f32) {
        (-self.width * 0.5, -self.depth * 0.5)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Flattened vertex index for grid coordinates (column i, row j)
    pub fn vertex_index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.vertices_per_side() && j < self.vertices_per_side());
        j * self.vertices_per_side() + i
    }

    pub fn position(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    pub fn color(&self, index: usize) -> Vec3 {
        self.colors[index]
    }

    /// Set a vertex height. Out-of-range index is a programming error.
    pub fn set_vertex_height(&mut self, index: usize, y: f32) {
        assert!(index < self.positions.len(), "vertex index {index} out of range");
        self.positions[index].y = y;
        self.dirty.heights = true;
    }

    /// Set a vertex color. Out-of-range index is a programming error.
    pub fn set_vertex_color(&mut self, index: usize, rgb: Vec3) {
        assert!(index < self.colors.len(), "vertex index {index} out of range");
        self.colors[index] = rgb;
        self.dirty.colors = true;
    }

    /// World-space bounds of the mesh (y range scanned from live heights).
    ///
    /// The y extent is padded slightly so a flat field still encloses a
    /// volume; a degenerate box would make ray entry and exit coincide.
    pub fn bounds(&self) -> Aabb {
        let (min_x, min_z) = self.min_corner();
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for p in &self.positions {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Aabb::new(
            Vec3::new(min_x, min_y - 1e-3, min_z),
            Vec3::new(-min_x, max_y + 1e-3, -min_z),
        )
    }

    /// Map a world (x, z) to the grid cell containing it, or None outside.
    pub fn cell_at(&self, x: f32, z: f32) -> Option<(usize, usize)> {
        let (min_x, min_z) = self.min_corner();
        let fi = (x - min_x) / self.spacing_x();
        let fj = (z - min_z) / self.spacing_z();
        if fi < 0.0 || fj < 0.0 {
            return None;
        }
        // Points on the far edge belong to the last cell
        let i = (fi as usize).min(self.segments as usize - 1);
        let j = (fj as usize).min(self.segments as usize - 1);
        if fi > self.segments as f32 || fj > self.segments as f32 {
            return None;
        }
        Some((i, j))
    }

    /// The two triangles of grid cell (i, j)
    pub fn cell_triangles(&self, i: usize, j: usize) -> [[Vec3; 3]; 2] {
        let a = self.positions[self.vertex_index(i, j)];
        let b = self.positions[self.vertex_index(i + 1, j)];
        let c = self.positions[self.vertex_index(i, j + 1)];
        let d = self.positions[self.vertex_index(i + 1, j + 1)];
        [[a, b, c], [b, d, c]]
    }

    /// Recompute per-vertex normals by accumulating face normals.
    ///
    /// Call after a batch of height mutations, not per vertex.
    pub fn recompute_normals(&mut self) {
        for n in &mut self.normals {
            *n = Vec3::ZERO;
        }

        let cells = self.segments as usize;
        for j in 0..cells {
            for i in 0..cells {
                let ia = self.vertex_index(i, j);
                let ib = self.vertex_index(i + 1, j);
                let ic = self.vertex_index(i, j + 1);
                let id = self.vertex_index(i + 1, j + 1);

                let a = self.positions[ia];
                let b = self.positions[ib];
                let c = self.positions[ic];
                let d = self.positions[id];

                // Area-weighted face normals, oriented +y on flat ground
                let n0 = (c - a).cross(b - a);
                let n1 = (c - b).cross(d - b);

                self.normals[ia] += n0;
                self.normals[ib] += n0 + n1;
                self.normals[ic] += n0 + n1;
                self.normals[id] += n1;
            }
        }

        for n in &mut self.normals {
            *n = n.normalize_or(Vec3::Y);
        }
    }

    /// Overwrite both live buffers from stored copies and recompute normals.
    ///
    /// Used by undo/redo restore. A length mismatch means a snapshot from a
    /// different mesh, which the static topology makes impossible through the
    /// public API; it aborts loudly.
    pub fn copy_buffers_from(&mut self, positions: &[Vec3], colors: &[Vec3]) {
        assert_eq!(positions.len(), self.positions.len(), "snapshot position buffer size mismatch");
        assert_eq!(colors.len(), self.colors.len(), "snapshot color buffer size mismatch");

        self.positions.copy_from_slice(positions);
        self.colors.copy_from_slice(colors);
        self.dirty = DirtyFlags { heights: true, colors: true };
        self.recompute_normals();
    }

    /// Flatten positions to `[x0, y0, z0, x1, ...]` for serialization
    pub fn flatten_positions(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// Flatten colors to `[r0, g0, b0, r1, ...]` for serialization
    pub fn flatten_colors(&self) -> Vec<f32> {
        self.colors.iter().flat_map(|c| [c.x, c.y, c.z]).collect()
    }

    /// Which buffers changed since the last call; clears the flags.
    ///
    /// The external renderer polls this once per frame instead of re-uploading
    /// unchanged buffers.
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for Heightfield {
    /// Reference grid: 200x200 world units, 199 segments (40 000 vertices)
    fn default() -> Self {
        Self::new(200.0, 200.0, 199)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_and_layout() {
        let hf = Heightfield::new(3.0, 3.0, 3);
        assert_eq!(hf.vertex_count(), 16);
        assert_eq!(hf.position(hf.vertex_index(0, 0)), Vec3::new(-1.5, 0.0, -1.5));
        assert_eq!(hf.position(hf.vertex_index(3, 3)), Vec3::new(1.5, 0.0, 1.5));
        assert_eq!(hf.position(hf.vertex_index(1, 2)), Vec3::new(-0.5, 0.0, 0.5));
    }

    #[test]
    fn test_topology_is_fixed_under_height_edits() {
        let mut hf = Heightfield::new(10.0, 10.0, 4);
        let before: Vec<(f32, f32)> = hf.positions().iter().map(|p| (p.x, p.z)).collect();
        for idx in 0..hf.vertex_count() {
            hf.set_vertex_height(idx, idx as f32 * 0.1);
        }
        let after: Vec<(f32, f32)> = hf.positions().iter().map(|p| (p.x, p.z)).collect();
        assert_eq!(before, after);
        assert_eq!(hf.vertex_count(), 25);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_height_index_out_of_range_panics() {
        let mut hf = Heightfield::new(10.0, 10.0, 4);
        hf.set_vertex_height(25, 1.0);
    }

    #[test]
    fn test_flat_field_bounds_enclose_a_volume() {
        let hf = Heightfield::new(10.0, 10.0, 4);
        let b = hf.bounds();
        assert!(b.size().y > 0.0);
        assert!(b.min.y < 0.0 && b.max.y > 0.0);
    }

    #[test]
    fn test_cell_at() {
        let hf = Heightfield::new(4.0, 4.0, 4);
        assert_eq!(hf.cell_at(-1.9, -1.9), Some((0, 0)));
        assert_eq!(hf.cell_at(0.1, 0.1), Some((2, 2)));
        // Far edge belongs to the last cell
        assert_eq!(hf.cell_at(2.0, 2.0), Some((3, 3)));
        assert_eq!(hf.cell_at(2.1, 0.0), None);
        assert_eq!(hf.cell_at(0.0, -2.5), None);
    }

    #[test]
    fn test_flat_normals_point_up() {
        let mut hf = Heightfield::new(10.0, 10.0, 4);
        hf.recompute_normals();
        for n in hf.normals() {
            assert!((n.y - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_slope_normals_tilt() {
        let mut hf = Heightfield::new(4.0, 4.0, 4);
        // Ramp rising along +x: normal should tilt toward -x
        for j in 0..5 {
            for i in 0..5 {
                let idx = hf.vertex_index(i, j);
                hf.set_vertex_height(idx, i as f32);
            }
        }
        hf.recompute_normals();
        let n = hf.normals()[hf.vertex_index(2, 2)];
        assert!(n.x < -0.1);
        assert!(n.y > 0.0);
        assert!(n.z.abs() < 1e-5);
    }

    #[test]
    fn test_dirty_flags() {
        let mut hf = Heightfield::new(10.0, 10.0, 4);
        hf.take_dirty(); // clear construction dirt

        assert_eq!(hf.take_dirty(), DirtyFlags::default());

        hf.set_vertex_height(3, 1.0);
        let d = hf.take_dirty();
        assert!(d.heights && !d.colors);

        hf.set_vertex_color(3, Vec3::splat(0.5));
        let d = hf.take_dirty();
        assert!(!d.heights && d.colors);
    }

    #[test]
    fn test_copy_buffers_from_restores_exactly() {
        let mut hf = Heightfield::new(10.0, 10.0, 4);
        let positions: Vec<Vec3> = hf.positions().to_vec();
        let colors: Vec<Vec3> = hf.colors().to_vec();

        hf.set_vertex_height(7, 5.0);
        hf.set_vertex_color(7, Vec3::X);
        hf.copy_buffers_from(&positions, &colors);

        assert_eq!(hf.positions(), positions.as_slice());
        assert_eq!(hf.colors(), colors.as_slice());
    }

    #[test]
    #[should_panic(expected = "size mismatch")]
    fn test_copy_buffers_size_mismatch_panics() {
        let mut hf = Heightfield::new(10.0, 10.0, 4);
        let positions = vec![Vec3::ZERO; 3];
        let colors = vec![Vec3::ZERO; 3];
        hf.copy_buffers_from(&positions, &colors);
    }
}
