//! Placed decoration instances (vegetation-like scatter objects)

pub mod registry;

pub use registry::{Category, InstanceRecord, InstanceRegistry, InstanceTransform, MAX_PER_CATEGORY};
