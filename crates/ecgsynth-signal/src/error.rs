//! Error types for the sampling backend.

use thiserror::Error;

/// Result type for sampling operations.
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors that can occur when configuring or running a simulation.
#[derive(Debug, Error)]
pub enum SignalError {
    /// Heart rate must be finite and positive.
    #[error("invalid heart rate: {bpm} bpm")]
    InvalidHeartRate {
        /// The rejected heart rate.
        bpm: f64,
    },

    /// Sampling rate must be finite and positive.
    #[error("invalid sampling rate: {rate} Hz")]
    InvalidSamplingRate {
        /// The rejected sampling rate.
        rate: f64,
    },

    /// Requested series duration must be finite and positive.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Morphology construction failed.
    #[error(transparent)]
    Model(#[from] ecgsynth_model::ModelError),
}
