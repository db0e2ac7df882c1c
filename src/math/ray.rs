//! Ray type and intersection tests

use crate::core::types::Vec3;
use super::aabb::Aabb;

/// A ray defined by origin and direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Precomputed 1/direction for fast AABB intersection
    pub inv_direction: Vec3,
}

impl Ray {
    /// Create a new ray (direction should be normalized)
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: Vec3::new(
                1.0 / direction.x,
                1.0 / direction.y,
                1.0 / direction.z,
            ),
        }
    }

    /// A straight-down ray, used for terrain height probes
    pub fn down_from(origin: Vec3) -> Self {
        Self::new(origin, -Vec3::Y)
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray-AABB intersection using slab method
    /// Returns Some((t_near, t_far)) if intersection, None otherwise
    pub fn intersects_aabb(&self, aabb: &Aabb) -> Option<(f32, f32)> {
        let t1 = (aabb.min - self.origin) * self.inv_direction;
        let t2 = (aabb.max - self.origin) * self.inv_direction;

        let t_min = t1.min(t2);
        let t_max = t1.max(t2);

        let t_near = t_min.x.max(t_min.y).max(t_min.z);
        let t_far = t_max.x.min(t_max.y).min(t_max.z);

        if t_near <= t_far && t_far >= 0.0 {
            Some((t_near.max(0.0), t_far))
        } else {
            None
        }
    }

    /// Ray-triangle intersection (Moller-Trumbore).
    /// Returns the ray parameter t of the hit, or None. Front and back
    /// faces both count, which is what terrain picking wants.
    pub fn intersects_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
        const EPSILON: f32 = 1e-7;
        // Barycentric tolerance: hits exactly on a shared edge or vertex
        // must register for at least one of the adjacent triangles
        const BARY_EPSILON: f32 = 1e-6;

        let edge1 = b - a;
        let edge2 = c - a;
        let p = self.direction.cross(edge2);
        let det = edge1.dot(p);

        // Parallel to the triangle plane
        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if u < -BARY_EPSILON || u > 1.0 + BARY_EPSILON {
            return None;
        }

        let q = s.cross(edge1);
        let v = self.direction.dot(q) * inv_det;
        if v < -BARY_EPSILON || u + v > 1.0 + BARY_EPSILON {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        if t >= 0.0 { Some(t) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray.at(5.0), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_intersects_aabb_hit() {
        let ray = Ray::new(Vec3::new(-2.0, 0.5, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let hit = ray.intersects_aabb(&aabb);
        assert!(hit.is_some());
        let (t_near, t_far) = hit.unwrap();
        assert!((t_near - 2.0).abs() < 0.001);
        assert!((t_far - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_intersects_aabb_miss() {
        let ray = Ray::new(Vec3::new(-2.0, 5.0, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert!(ray.intersects_aabb(&aabb).is_none());
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::down_from(Vec3::new(0.25, 10.0, 0.25));
        let t = ray.intersects_triangle(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        assert!(t.is_some());
        assert!((t.unwrap() - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_triangle_back_face_hit() {
        // Same triangle, opposite winding: picking must still hit
        let ray = Ray::down_from(Vec3::new(0.25, 10.0, 0.25));
        let t = ray.intersects_triangle(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
        );
        assert!(t.is_some());
    }

    #[test]
    fn test_triangle_vertex_graze_hits() {
        // Crossing exactly through a vertex must not slip between triangles
        let origin = Vec3::new(-30.0, 20.0, 0.0);
        let ray = Ray::new(origin, (Vec3::ZERO - origin).normalize());
        let t = ray.intersects_triangle(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 1.0),
        );
        assert!(t.is_some());
    }

    #[test]
    fn test_triangle_miss_outside() {
        let ray = Ray::down_from(Vec3::new(0.9, 10.0, 0.9));
        let t = ray.intersects_triangle(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_triangle_behind_origin() {
        let ray = Ray::new(Vec3::new(0.25, 0.0, 0.25), Vec3::Y);
        let t = ray.intersects_triangle(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, -1.0, 1.0),
        );
        assert!(t.is_none());
    }
}
