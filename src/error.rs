//! Error types for the synthesis pipeline.

use thiserror::Error;

/// Errors surfaced by the session renderer.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The caller handed the core an argument the pipeline cannot size
    /// buffers from, such as a zero duration.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal stage failed. Synthesis is deterministic enough that
    /// retrying without changing resources would not help.
    #[error("synthesis failure: {0}")]
    SynthesisFailure(String),
}
