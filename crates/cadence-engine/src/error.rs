//! Host error taxonomy.
//!
//! None of these are retried: each one ends the current session. Causes are
//! rendered into the message rather than exposed as `source()`, so an
//! alternate-format `anyhow` report prints each cause once.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    /// The window or its graphics context could not be created.
    #[error("graphics context unavailable: {0:#}")]
    ContextUnavailable(anyhow::Error),

    /// The render client factory failed.
    #[error("failed to construct render client: {0:#}")]
    ClientConstruction(anyhow::Error),

    /// `update` or `render` failed while executing a frame.
    #[error("frame {frame_index} failed: {cause:#}")]
    Frame {
        frame_index: u64,
        cause: anyhow::Error,
    },

    #[error("target frame rate must be positive and finite, got {0}")]
    InvalidFrameRate(f64),

    #[error("frame interval must be non-negative and finite, got {0} ms")]
    InvalidFrameInterval(f64),
}
