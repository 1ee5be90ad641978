//! Error types
//!
//! Configuration errors fail fast at placement time. Backend errors are not
//! recovered here and propagate to the caller unchanged.

use thiserror::Error;

/// Failure reported by the physics/rendering backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to create {kind}: {reason}")]
    Create { kind: &'static str, reason: String },
    #[error("step failed: {0}")]
    Step(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("backend error: {0}")]
    Other(String),
}

/// Errors surfaced by arena loading, placement and episode stepping.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// Item type tag outside the recognized vocabulary.
    #[error("unknown item type `{name}`")]
    UnknownItem { name: String },
    /// A structurally required attribute is missing for one placement.
    #[error("item `{item}` element {index} is missing required field `{field}`")]
    MissingField {
        item: String,
        field: &'static str,
        index: usize,
    },
    #[error("invalid blackout schedule {boundaries:?}: {reason}")]
    InvalidBlackout {
        boundaries: Vec<i32>,
        reason: &'static str,
    },
    #[error("arena index {index} out of range ({count} arenas)")]
    ArenaIndex { index: usize, count: usize },
    /// Stepping after a failed reset, before the arena was rebuilt
    #[error("episode is not active; reset before stepping")]
    EpisodeNotActive,
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ArenaError> = std::result::Result<T, E>;
