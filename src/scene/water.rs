//! Water plane parameters

use serde::{Deserialize, Serialize};

/// Editable water parameters, saved with the project.
///
/// The plane itself and its shading are external; the core only owns the
/// numbers so they survive save/load and undo-independent toggling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterParams {
    pub enabled: bool,
    /// Water surface height in world units
    pub level: f32,
    /// Linear RGB in [0, 1] (default: dodger blue)
    pub color: [f32; 3],
    pub opacity: f32,
    pub wave_speed: f32,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            enabled: false,
            level: 0.0,
            color: [0x1e as f32 / 255.0, 0x90 as f32 / 255.0, 1.0],
            opacity: 0.6,
            wave_speed: 1.0,
        }
    }
}

/// Partial water update; None fields keep their prior value
#[derive(Clone, Copy, Debug, Default)]
pub struct WaterUpdate {
    pub enabled: Option<bool>,
    pub level: Option<f32>,
    pub color: Option<[f32; 3]>,
    pub opacity: Option<f32>,
    pub wave_speed: Option<f32>,
}

impl WaterParams {
    pub fn merge(&mut self, update: &WaterUpdate) {
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(opacity) = update.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(speed) = update.wave_speed {
            self.wave_speed = speed.max(0.0);
        }
    }

    /// Surface height at a point in time, with the gentle bobbing the
    /// renderer animates. Disabled water just reports the flat level.
    pub fn surface_height(&self, time_seconds: f32) -> f32 {
        if !self.enabled {
            return self.level;
        }
        self.level + (time_seconds * self.wave_speed).sin() * 0.05
    }
}
