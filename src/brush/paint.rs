//! Paint brush: blends vertex colors toward a material palette color

use crate::core::types::Vec3;
use crate::terrain::Heightfield;

use super::falloff::falloff;
use super::params::{PaintParamUpdate, PaintParams};
use super::vertex_window;

/// Paintable terrain materials and their palette colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    Grass,
    Dirt,
    Stone,
    Sand,
    Snow,
    Rock,
}

impl Material {
    /// Palette color for this material, linear RGB in [0, 1]
    pub fn color(&self) -> Vec3 {
        let rgb = match self {
            Material::Grass => (0x3a, 0x9d, 0x3a),
            Material::Dirt => (0x8b, 0x45, 0x13),
            Material::Stone => (0x80, 0x80, 0x80),
            Material::Sand => (0xe6, 0xda, 0xa6),
            Material::Snow => (0xff, 0xff, 0xff),
            Material::Rock => (0x50, 0x50, 0x50),
        };
        Vec3::new(rgb.0 as f32, rgb.1 as f32, rgb.2 as f32) / 255.0
    }

    /// Parse a material name as the UI sends it. Unknown names yield None,
    /// which callers treat as a no-op rather than an error.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "grass" => Some(Material::Grass),
            "dirt" => Some(Material::Dirt),
            "stone" => Some(Material::Stone),
            "sand" => Some(Material::Sand),
            "snow" => Some(Material::Snow),
            "rock" => Some(Material::Rock),
            _ => None,
        }
    }
}

/// Paint brush operator
pub struct PaintTool {
    pub params: PaintParams,
}

impl PaintTool {
    pub fn new() -> Self {
        Self { params: PaintParams::default() }
    }

    /// Merge a partial parameter update into the live parameters
    pub fn set_params(&mut self, update: &PaintParamUpdate) {
        self.params.merge(update);
    }

    /// Blend the color of every vertex within the brush radius toward the
    /// target material color. Returns whether any vertex color changed;
    /// color edits never require a normal recompute.
    pub fn apply(&self, heightfield: &mut Heightfield, center: Vec3) -> bool {
        let radius = self.params.radius;
        let Some((is, js)) = vertex_window(heightfield, center.x, center.z, radius) else {
            return false;
        };

        let rad_sq = radius * radius;
        let target = self.params.material.color();
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
                let factor = self.params.opacity * weight * (self.params.blend * 0.5 + 0.1);

                let current = heightfield.color(index);
                let blended = current.lerp(target, factor);
                if blended != current {
                    heightfield.set_vertex_color(index, blended);
                    changed = true;
                }
            }
        }

        changed
    }
}

impl Default for PaintTool {
    fn default() -> Self {
        Self::new()
    }
}
