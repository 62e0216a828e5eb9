//! Wave shape functions.
//!
//! A shape maps normalized phase `u` in [0, 1] to a dipole contribution.
//! Shapes are plain data (a tagged enum) rather than opaque closures, so
//! morphologies serialize and compare in tests.

use serde::{Deserialize, Serialize};

use crate::vector::HeartVector;

/// Default envelope center: peak at mid-duration.
pub const DEFAULT_CENTER: f64 = 0.5;

/// Default envelope width.
pub const DEFAULT_WIDTH: f64 = 0.25;

/// Smooth Gaussian bump over normalized phase.
///
/// Peak value is exactly 1.0 at `u == center`, decaying symmetrically at a
/// rate set by `width`. The input domain is unbounded but callers pass
/// `u` in [0, 1].
pub fn gaussian_envelope(u: f64, center: f64, width: f64) -> f64 {
    let diff = (u - center) / width;
    (-(diff * diff)).exp()
}

/// Shape of a single wave's dipole contribution over its window.
///
/// The direction is time-invariant; only the magnitude follows the
/// envelope. This is a simplified but standard approximation of a
/// depolarization or repolarization wavefront.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WaveShape {
    /// Fixed spatial direction with a Gaussian magnitude envelope.
    Gaussian {
        /// Spatial axis of the wave (unit vector).
        direction: HeartVector,
        /// Peak amplitude.
        scale: f64,
        /// Envelope center in normalized phase.
        center: f64,
        /// Envelope width in normalized phase.
        width: f64,
    },
}

impl WaveShape {
    /// Gaussian shape along a frontal-plane axis, peaking at mid-duration.
    pub fn directional(axis_degrees: f64, scale: f64) -> Self {
        Self::Gaussian {
            direction: HeartVector::frontal(axis_degrees),
            scale,
            center: DEFAULT_CENTER,
            width: DEFAULT_WIDTH,
        }
    }

    /// Evaluates the shape at normalized phase `u`.
    pub fn at(&self, u: f64) -> HeartVector {
        match *self {
            WaveShape::Gaussian {
                direction,
                scale,
                center,
                width,
            } => direction.scaled(scale * gaussian_envelope(u, center, width)),
        }
    }
}
