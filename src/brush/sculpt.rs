//! Sculpt brush: mode-dependent height mutation within a falloff radius

use rand::Rng;

use crate::core::types::Vec3;
use crate::terrain::Heightfield;

use super::falloff::falloff;
use super::params::{SculptMode, SculptParamUpdate, SculptParams};
use super::{lerp, vertex_window};

/// Sculpt brush operator.
///
/// Repeated applications accumulate by design; a drag is a sequence of
/// discrete `apply` calls at successive stroke points.
pub struct SculptTool {
    pub params: SculptParams,
}

impl SculptTool {
    pub fn new() -> Self {
        Self { params: SculptParams::default() }
    }

    /// Merge a partial parameter update into the live parameters
    pub fn set_params(&mut self, update: &SculptParamUpdate) {
        self.params.merge(update);
    }

    /// Mutate every vertex within the brush radius of `center`.
    ///
    /// Returns whether any vertex actually changed, so the caller can decide
    /// to recompute normals. Flatten and smooth pull toward the brush-center
    /// height (`center.y`).
    pub fn apply(&self, heightfield: &mut Heightfield, center: Vec3) -> bool {
        let radius = self.params.radius;
        let Some((is, js)) = vertex_window(heightfield, center.x, center.z, radius) else {
            return false;
        };

        let rad_sq = radius * radius;
        let mut rng = rand::rng();
        let mut changed = false;

        for j in js {
            for i in is.clone() {
                let index = heightfield.vertex_index(i, j);
                let p = heightfield.position(index);

                let dx = p.x - center.x;
                let dz = p.z - center.z;
                let dist_sq = dx * dx + dz * dz;
                if dist_sq >= rad_sq {
                    continue;
                }

                let weight = falloff(dist_sq.sqrt(), radius, self.params.hardness);
                let strength = self.params.intensity * weight * 0.5;

                let y = p.y;
                let new_y = match self.params.mode {
                    SculptMode::Raise => y + strength,
                    SculptMode::Lower => y - strength,
                    SculptMode::Flatten => lerp(y, center.y, strength * 0.5),
                    SculptMode::Smooth => lerp(y, center.y, strength * 0.1),
                    SculptMode::Noise => y + rng.random_range(-0.5..=0.5) * strength,
                };

                if new_y != y {
                    heightfield.set_vertex_height(index, new_y);
                    changed = true;
                }
            }
        }

        changed
    }
}

impl Default for SculptTool {
    fn default() -> Self {
        Self::new()
    }
}
