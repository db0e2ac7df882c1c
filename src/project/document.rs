//! Versioned project document types
//!
//! This is the on-disk JSON shape. `vertices`/`colors` are flattened arrays
//! in the heightfield's fixed vertex order, stride 3. Every block besides
//! `version` and `timestamp` is independently optional so partial documents
//! stay loadable.

use serde::{Deserialize, Serialize};

use crate::instance::Category;
use crate::scene::{EnvironmentParams, WaterParams};

/// Current project format version
pub const PROJECT_VERSION: u32 = 1;

/// Flattened heightfield buffers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainBlock {
    pub vertices: Vec<f32>,
    pub colors: Vec<f32>,
}

/// One placed decoration instance
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VegetationEntry {
    #[serde(rename = "type")]
    pub category: Category,
    /// Position (x, y, z)
    pub p: [f32; 3],
    /// Scale (x, y, z)
    pub s: [f32; 3],
    /// Euler rotation (x, y, z)
    pub r: [f32; 3],
}

/// One road control point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// The full serialized project
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub version: u32,
    /// Milliseconds since the Unix epoch at save time; only `version` is
    /// mandatory, so hand-edited documents may omit it
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<TerrainBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetation: Option<Vec<VegetationEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<WaterParams>,
    #[serde(rename = "roadPoints", default, skip_serializing_if = "Option::is_none")]
    pub road_points: Option<Vec<RoadPoint>>,
}
