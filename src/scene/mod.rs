//! Scene parameter blocks: environment, water, and road path
//!
//! Rendering for all three is external; this crate owns their editable
//! parameters because they participate in project save/load.

pub mod environment;
pub mod road;
pub mod water;

pub use environment::{EnvironmentParams, EnvironmentUpdate, Weather};
pub use road::{RoadParams, RoadPath};
pub use water::{WaterParams, WaterUpdate};
