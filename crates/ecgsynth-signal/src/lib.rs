//! ECGSynth Sampling Backend
//!
//! This crate turns the single-beat dipole model from `ecgsynth-model`
//! into sampled 12-lead time series: a beat-cycling engine, additive
//! artifact sources, and the seeded RNG plumbing that keeps every run
//! reproducible.
//!
//! # Determinism
//!
//! Given the same morphology, rates, artifact sources, and seed, the
//! output is identical across runs. All randomness is PCG32, with one
//! independent BLAKE3-derived stream per artifact source.
//!
//! # Example
//!
//! ```
//! use ecgsynth_model::{normal_sinus_morphology, Lead, SinusParams};
//! use ecgsynth_signal::{NoiseSource, SimulationEngine};
//!
//! let beat = normal_sinus_morphology(&SinusParams::default())?;
//!
//! let engine = SimulationEngine::new(beat, 72.0, 500.0, 42)?
//!     .with_noise_source(NoiseSource::BaselineWander { amplitude: 0.05 });
//!
//! let samples = engine.generate(10.0)?;
//! let lead_ii: Vec<f64> = samples.iter().map(|s| s.lead(Lead::II)).collect();
//! assert_eq!(lead_ii.len(), 5001);
//! # Ok::<(), ecgsynth_signal::SignalError>(())
//! ```
//!
//! # Modules
//!
//! - [`engine`] - beat-cycling 12-lead sampler
//! - [`noise`] - additive artifact sources
//! - [`rng`] - deterministic RNG with seed derivation
//! - [`error`] - configuration error types

pub mod engine;
pub mod error;
pub mod noise;
pub mod rng;

// Re-export the main types at the crate root
pub use engine::{LeadSample, SimulationEngine};
pub use error::{SignalError, SignalResult};
pub use noise::NoiseSource;
