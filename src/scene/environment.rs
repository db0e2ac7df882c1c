//! Environment (time-of-day and weather) parameters

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;

/// Weather preset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Snow,
    Fog,
    Storm,
}

/// Editable environment parameters, saved with the project
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentParams {
    /// Time of day in hours, [0, 24]
    pub time_of_day: f32,
    pub weather: Weather,
    pub sun_intensity: f32,
    pub fog_density: f32,
}

impl Default for EnvironmentParams {
    fn default() -> Self {
        Self {
            time_of_day: 12.0,
            weather: Weather::Clear,
            sun_intensity: 1.0,
            fog_density: 0.002,
        }
    }
}

/// Partial environment update; None fields keep their prior value
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvironmentUpdate {
    pub time_of_day: Option<f32>,
    pub weather: Option<Weather>,
    pub sun_intensity: Option<f32>,
    pub fog_density: Option<f32>,
}

impl EnvironmentParams {
    pub fn merge(&mut self, update: &EnvironmentUpdate) {
        if let Some(time) = update.time_of_day {
            self.time_of_day = time.clamp(0.0, 24.0);
        }
        if let Some(weather) = update.weather {
            self.weather = weather;
        }
        if let Some(intensity) = update.sun_intensity {
            self.sun_intensity = intensity.max(0.0);
        }
        if let Some(density) = update.fog_density {
            self.fog_density = density.max(0.0);
        }
    }

    /// Sun direction from time of day: rises at 6:00, peaks at 12:00,
    /// sets at 18:00. Clamped slightly above the horizon at night.
    pub fn sun_direction(&self) -> Vec3 {
        let hour_angle = (self.time_of_day - 12.0) * 15.0_f32.to_radians();
        let altitude = (90.0 - (self.time_of_day - 12.0).abs() * 7.5).to_radians();

        Vec3::new(
            hour_angle.sin() * altitude.cos(),
            altitude.sin().max(0.1),
            hour_angle.cos() * altitude.cos(),
        )
        .normalize()
    }

    /// Sun intensity after the day/night cycle is applied
    pub fn effective_sun_intensity(&self) -> f32 {
        if self.is_night() {
            self.sun_intensity * 0.1
        } else {
            self.sun_intensity
        }
    }

    /// Fog density after weather overrides; fog and storm thicken the air
    pub fn effective_fog_density(&self) -> f32 {
        match self.weather {
            Weather::Fog | Weather::Storm => 0.02,
            _ => self.fog_density,
        }
    }

    pub fn is_night(&self) -> bool {
        self.time_of_day < 6.0 || self.time_of_day > 18.0
    }

    /// Whether the current weather spawns precipitation particles
    pub fn has_precipitation(&self) -> bool {
        matches!(self.weather, Weather::Rain | Weather::Snow | Weather::Storm)
    }
}
