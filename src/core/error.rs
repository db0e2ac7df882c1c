//! Error types for the editor core

use thiserror::Error;

/// Main error type for the editor core.
///
/// Two failure classes from the editing flows are deliberately absent:
/// capacity rejections on instance placement surface as a `bool` from
/// `InstanceRegistry::place` so drag-placement is never interrupted, and
/// vertex index misuse is a programming error that panics.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid project format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}
