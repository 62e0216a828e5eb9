//! Artifact (noise) sources.
//!
//! Real recordings are never clean: electrode and amplifier noise, 50/60 Hz
//! power-line interference, and slow baseline wander from respiration and
//! movement all ride on top of the cardiac signal. Each source here is
//! plain data; evaluation takes the per-source RNG stream so identical
//! seeds reproduce identical artifacts.
//!
//! Artifacts are common-mode: the engine adds the summed artifact value to
//! every lead equally.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

/// Low-frequency oscillators behind baseline wander: (frequency Hz, phase
/// radians) for respiration, body movement, and very slow drift.
const WANDER_OSCILLATORS: [(f64, f64); 3] = [(0.15, 0.0), (0.5, 2.0), (0.05, 1.0)];

fn default_mains_frequency() -> f64 {
    60.0
}

/// A single additive artifact source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoiseSource {
    /// Broadband electrode/amplifier noise: uniform in [-1, 1) scaled by
    /// `amplitude`, drawn from the source's own deterministic stream.
    White {
        /// Peak amplitude.
        amplitude: f64,
    },

    /// Sinusoidal power-line interference.
    MainsHum {
        /// Peak amplitude.
        amplitude: f64,
        /// Line frequency in Hz (default 60).
        #[serde(default = "default_mains_frequency")]
        frequency_hz: f64,
        /// Phase offset in degrees.
        #[serde(default)]
        phase_degrees: f64,
    },

    /// Slow baseline drift: a fixed sum of three low-frequency sinusoids,
    /// normalized to roughly +/-1 before scaling.
    BaselineWander {
        /// Peak amplitude.
        amplitude: f64,
    },
}

impl NoiseSource {
    /// Evaluates the source at absolute time `time_s`.
    ///
    /// Deterministic sources ignore `rng`; white noise consumes one draw
    /// per call, so callers must evaluate samples in time order to
    /// reproduce a stream.
    pub fn value_at(&self, time_s: f64, rng: &mut Pcg32) -> f64 {
        match *self {
            NoiseSource::White { amplitude } => rng.gen_range(-1.0..1.0) * amplitude,

            NoiseSource::MainsHum {
                amplitude,
                frequency_hz,
                phase_degrees,
            } => amplitude * (TAU * frequency_hz * time_s + phase_degrees.to_radians()).sin(),

            NoiseSource::BaselineWander { amplitude } => {
                let sum: f64 = WANDER_OSCILLATORS
                    .iter()
                    .map(|&(freq, phase)| (TAU * freq * time_s + phase).sin())
                    .sum();
                (sum / WANDER_OSCILLATORS.len() as f64) * amplitude
            }
        }
    }
}
