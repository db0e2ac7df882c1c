//! Road path: user-placed control points and the smoothed centerline

use crate::core::types::Vec3;

/// Road shaping parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadParams {
    /// Road width in world units
    pub width: f32,
    /// Centerline samples per control-point segment
    pub smoothness: u32,
    /// Lift above the clicked surface point, keeps the road out of the mesh
    pub elevation: f32,
}

impl Default for RoadParams {
    fn default() -> Self {
        Self {
            width: 8.0,
            smoothness: 10,
            elevation: 0.2,
        }
    }
}

/// Ordered road control points placed by clicking the terrain.
///
/// The external mesher turns `centerline` into road geometry; the points
/// themselves are what the project file persists.
pub struct RoadPath {
    points: Vec<Vec3>,
    pub params: RoadParams,
}

impl RoadPath {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            params: RoadParams::default(),
        }
    }

    /// Append a control point, lifted by the configured elevation
    pub fn add_point(&mut self, surface_point: Vec3) {
        self.points.push(surface_point + Vec3::Y * self.params.elevation);
    }

    /// Replace all control points (used by project load)
    pub fn set_points(&mut self, points: Vec<Vec3>) {
        self.points = points;
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smoothed centerline through the control points (uniform Catmull-Rom,
    /// endpoint tangents from clamped neighbors). Fewer than two points
    /// yield an empty polyline. The result has
    /// `(len - 1) * smoothness + 1` samples and passes through every
    /// control point.
    pub fn centerline(&self) -> Vec<Vec3> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }

        let samples = self.params.smoothness.max(1) as usize;
        let mut line = Vec::with_capacity((n - 1) * samples + 1);

        let at = |i: isize| -> Vec3 { self.points[i.clamp(0, n as isize - 1) as usize] };

        for seg in 0..n - 1 {
            let p0 = at(seg as isize - 1);
            let p1 = at(seg as isize);
            let p2 = at(seg as isize + 1);
            let p3 = at(seg as isize + 2);

            for k in 0..samples {
                let t = k as f32 / samples as f32;
                line.push(catmull_rom(p0, p1, p2, p3, t));
            }
        }
        line.push(self.points[n - 1]);
        line
    }
}

impl Default for RoadPath {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform Catmull-Rom interpolation between p1 and p2
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_point_applies_elevation() {
        let mut road = RoadPath::new();
        road.add_point(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(road.points()[0], Vec3::new(1.0, 2.2, 3.0));
    }

    #[test]
    fn test_centerline_needs_two_points() {
        let mut road = RoadPath::new();
        assert!(road.centerline().is_empty());
        road.add_point(Vec3::ZERO);
        assert!(road.centerline().is_empty());
        road.add_point(Vec3::X);
        assert_eq!(road.centerline().len(), road.params.smoothness as usize + 1);
    }

    #[test]
    fn test_centerline_passes_through_control_points() {
        let mut road = RoadPath::new();
        road.params.elevation = 0.0;
        for p in [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 1.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(0.0, 2.0, 10.0),
        ] {
            road.add_point(p);
        }

        let line = road.centerline();
        let samples = road.params.smoothness as usize;
        for (idx, &control) in road.points().iter().enumerate() {
            let on_line = line[idx * samples];
            assert!((on_line - control).length() < 1e-5);
        }
        assert_eq!(*line.last().unwrap(), road.points()[3]);
    }

    #[test]
    fn test_clear() {
        let mut road = RoadPath::new();
        road.add_point(Vec3::ZERO);
        road.add_point(Vec3::X);
        road.clear();
        assert!(road.is_empty());
        assert!(road.centerline().is_empty());
    }
}
