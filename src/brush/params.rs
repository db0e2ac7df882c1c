//! Live brush parameters and partial updates
//!
//! UI callers send only the keys they want changed; `merge` keeps the rest.
//! Parameters are plain data on the tool so they can change mid-session
//! without reconstructing anything.

use super::paint::Material;

/// Height update rule applied by the sculpt brush
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SculptMode {
    #[default]
    Raise,
    Lower,
    /// Pull heights toward the brush-center height
    Flatten,
    /// Weak pull toward the brush-center height. This is deliberately an
    /// approximation of smoothing, not a neighbor average; it matches the
    /// editor's established feel.
    Smooth,
    /// Random jitter scaled by the brush strength
    Noise,
}

/// Sculpt brush parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SculptParams {
    pub mode: SculptMode,
    /// Brush radius in world units, > 0
    pub radius: f32,
    /// Stroke strength in [0, 1]
    pub intensity: f32,
    /// Falloff sharpness in [0, 1]
    pub hardness: f32,
}

impl Default for SculptParams {
    fn default() -> Self {
        Self {
            mode: SculptMode::Raise,
            radius: 15.0,
            intensity: 0.5,
            hardness: 0.5,
        }
    }
}

/// Partial sculpt parameter update; None fields keep their prior value
#[derive(Clone, Copy, Debug, Default)]
pub struct SculptParamUpdate {
    pub mode: Option<SculptMode>,
    pub radius: Option<f32>,
    pub intensity: Option<f32>,
    pub hardness: Option<f32>,
}

impl SculptParams {
    pub fn merge(&mut self, update: &SculptParamUpdate) {
        if let Some(mode) = update.mode {
            self.mode = mode;
        }
        if let Some(radius) = update.radius {
            self.radius = radius;
        }
        if let Some(intensity) = update.intensity {
            self.intensity = intensity;
        }
        if let Some(hardness) = update.hardness {
            self.hardness = hardness;
        }
    }
}

/// Paint brush parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintParams {
    /// Target material whose palette color the brush blends toward
    pub material: Material,
    /// Overall strength in [0, 1]
    pub opacity: f32,
    /// Blend factor in [0, 1]
    pub blend: f32,
    /// Brush radius in world units, > 0
    pub radius: f32,
    /// Falloff sharpness in [0, 1]
    pub hardness: f32,
}

impl Default for PaintParams {
    fn default() -> Self {
        Self {
            material: Material::Grass,
            opacity: 1.0,
            blend: 0.5,
            radius: 15.0,
            hardness: 0.5,
        }
    }
}

/// Partial paint parameter update; None fields keep their prior value
#[derive(Clone, Copy, Debug, Default)]
pub struct PaintParamUpdate {
    pub material: Option<Material>,
    pub opacity: Option<f32>,
    pub blend: Option<f32>,
    pub radius: Option<f32>,
    pub hardness: Option<f32>,
}

impl PaintParams {
    pub fn merge(&mut self, update: &PaintParamUpdate) {
        if let Some(material) = update.material {
            self.material = material;
        }
        if let Some(opacity) = update.opacity {
            self.opacity = opacity;
        }
        if let Some(blend) = update.blend {
            self.blend = blend;
        }
        if let Some(radius) = update.radius {
            self.radius = radius;
        }
        if let Some(hardness) = update.hardness {
            self.hardness = hardness;
        }
    }
}
