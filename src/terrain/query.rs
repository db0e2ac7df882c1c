//! Point-to-terrain projection and height lookup
//!
//! Both queries intersect the actual mesh surface rather than sampling grid
//! heights, so they stay correct however far sculpting has deformed a cell.

use crate::core::camera::Camera;
use crate::core::types::{Vec2, Vec3};
use crate::math::Ray;

use super::heightfield::Heightfield;

/// A ray/terrain intersection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    /// World-space hit position on the mesh surface
    pub position: Vec3,
    /// Distance along the picking ray
    pub distance: f32,
}

/// Surface height at a world (x, z) column.
///
/// Implemented as a straight-down ray against the containing cell's
/// triangles. Returns 0.0 when the column is outside the mesh.
pub fn height_at(heightfield: &Heightfield, x: f32, z: f32) -> f32 {
    let Some((i, j)) = heightfield.cell_at(x, z) else {
        return 0.0;
    };

    let top = heightfield.bounds().max.y + 1.0;
    let ray = Ray::down_from(Vec3::new(x, top, z));

    match nearest_cell_hit(heightfield, &ray, i, j) {
        Some(t) => ray.at(t).y,
        None => 0.0,
    }
}

/// Cast a picking ray from the camera through a normalized screen coordinate
/// and return the nearest terrain intersection.
///
/// `ndc` is in [-1, 1] x [-1, 1], +y up. Returns None when the ray misses
/// the mesh bounds entirely or exits them without touching the surface.
pub fn project(heightfield: &Heightfield, ndc: Vec2, camera: &Camera) -> Option<SurfacePoint> {
    let ray = camera.screen_ray(ndc);
    raycast(heightfield, &ray)
}

/// Intersect an arbitrary world-space ray with the terrain surface.
///
/// Walks grid cells along the ray's footprint (2D DDA) and tests each cell's
/// two triangles exactly; cells are visited front to back so the first hit is
/// the nearest.
pub fn raycast(heightfield: &Heightfield, ray: &Ray) -> Option<SurfacePoint> {
    let (t_enter, t_exit) = ray.intersects_aabb(&heightfield.bounds())?;

    let cells = heightfield.segments() as i64;
    let (min_x, min_z) = heightfield.min_corner();
    let dx = heightfield.spacing_x();
    let dz = heightfield.spacing_z();

    // Nudge inside the bounds so the entry cell is unambiguous
    let entry = ray.at(t_enter + 1e-4);
    let mut i = (((entry.x - min_x) / dx) as i64).clamp(0, cells - 1);
    let mut j = (((entry.z - min_z) / dz) as i64).clamp(0, cells - 1);

    let step_i: i64 = if ray.direction.x > 0.0 { 1 } else { -1 };
    let step_j: i64 = if ray.direction.z > 0.0 { 1 } else { -1 };

    // Ray parameter at which we cross into the next column/row
    let next_boundary = |cell: i64, step: i64, min: f32, spacing: f32| -> f32 {
        let edge = if step > 0 { cell + 1 } else { cell };
        min + edge as f32 * spacing
    };

    let mut t_max_i = if ray.direction.x.abs() > 1e-12 {
        (next_boundary(i, step_i, min_x, dx) - ray.origin.x) * ray.inv_direction.x
    } else {
        f32::INFINITY
    };
    let mut t_max_j = if ray.direction.z.abs() > 1e-12 {
        (next_boundary(j, step_j, min_z, dz) - ray.origin.z) * ray.inv_direction.z
    } else {
        f32::INFINITY
    };
    let t_delta_i = (dx * ray.inv_direction.x).abs();
    let t_delta_j = (dz * ray.inv_direction.z).abs();

    loop {
        if let Some(t) = nearest_cell_hit(heightfield, ray, i as usize, j as usize) {
            if t <= t_exit + 1e-4 {
                return Some(SurfacePoint { position: ray.at(t), distance: t });
            }
        }

        // Advance to the next cell crossed by the ray
        if t_max_i < t_max_j {
            if t_max_i > t_exit {
                return None;
            }
            i += step_i;
            if i < 0 || i >= cells {
                return None;
            }
            t_max_i += t_delta_i;
        } else {
            if t_max_j > t_exit {
                return None;
            }
            j += step_j;
            if j < 0 || j >= cells {
                return None;
            }
            t_max_j += t_delta_j;
        }
    }
}

/// Nearest triangle hit within one grid cell
fn nearest_cell_hit(heightfield: &Heightfield, ray: &Ray, i: usize, j: usize) -> Option<f32> {
    let [t0, t1] = heightfield.cell_triangles(i, j);
    let hit0 = ray.intersects_triangle(t0[0], t0[1], t0[2]);
    let hit1 = ray.intersects_triangle(t1[0], t1[1], t1[2]);
    match (hit0, hit1) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
