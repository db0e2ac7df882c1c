//! Heightfield mesh data and spatial queries

pub mod generator;
pub mod heightfield;
pub mod query;

pub use generator::{GeneratorParams, generate};
pub use heightfield::{DirtyFlags, Heightfield};
pub use query::{SurfacePoint, height_at, project};
