//! Error types for morphology construction.

use thiserror::Error;

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised at construction boundaries.
///
/// Evaluation (`vector_at`, `heart_vector_at`, lead projection) is total and
/// never fails; only constructing a component with geometry that would make
/// phase normalization undefined is rejected.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Component duration must be finite and positive.
    #[error("invalid component duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Component start time must be finite.
    #[error("non-finite component start time: {start}")]
    NonFiniteStart {
        /// The rejected start time.
        start: f64,
    },
}
