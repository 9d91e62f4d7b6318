//! Core error type.
//!
//! All crates in the workspace return `Result<_, GlobeError>`. None of the
//! variants is fatal for the view: the director degrades every failure to a
//! usable idle state.

use thiserror::Error;

/// Core-layer error.
#[derive(Debug, Error)]
pub enum GlobeError {
    /// The geodata source could not be fetched or parsed. The view stays
    /// usable with an empty list; this is reported on the log channel only.
    #[error("geodata unavailable: {0}")]
    DataUnavailable(String),

    /// A directed camera move was superseded or the surface was torn down
    /// mid-flight. Swallowed by the camera controller, never user-facing.
    #[error("camera animation interrupted")]
    AnimationInterrupted,

    /// Navigation was requested for an index outside the current filtered
    /// subset. Treated as a no-op at the director boundary.
    #[error("selection target out of range: index {index}, subset length {len}")]
    InvalidSelectionTarget {
        /// Requested index
        index: usize,
        /// Length of the filtered subset at the time of the request
        len: usize,
    },

    /// Settings value or settings file problem
    #[error("config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
