//! Snapshot-based undo/redo over terrain and instance state

pub mod manager;
pub mod snapshot;

pub use manager::{HISTORY_CAP, History};
pub use snapshot::Snapshot;
