//! Time-windowed wave components.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::shape::WaveShape;
use crate::vector::HeartVector;

/// A single wave (P, QRS, or T): a shape active over a time window.
///
/// Outside `[start, start + duration]` the component contributes the zero
/// vector; inside, the shape is evaluated at the normalized phase. Both
/// window boundaries are inclusive. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveComponent {
    /// Onset in seconds from beat start.
    start: f64,
    /// Length of the window in seconds. Always finite and positive.
    duration: f64,
    /// Dipole contribution over the window.
    shape: WaveShape,
}

impl WaveComponent {
    /// Creates a component, validating its window geometry.
    ///
    /// `duration` must be finite and positive - a zero-length window would
    /// make phase normalization divide by zero. `start` must be finite but
    /// may be negative; the window is then simply partly before beat onset.
    pub fn new(start: f64, duration: f64, shape: WaveShape) -> ModelResult<Self> {
        if !start.is_finite() {
            return Err(ModelError::NonFiniteStart { start });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ModelError::InvalidDuration { duration });
        }
        Ok(Self {
            start,
            duration,
            shape,
        })
    }

    /// Component with a Gaussian shape along a frontal-plane axis.
    pub fn directional(
        start: f64,
        duration: f64,
        axis_degrees: f64,
        scale: f64,
    ) -> ModelResult<Self> {
        Self::new(start, duration, WaveShape::directional(axis_degrees, scale))
    }

    /// Onset in seconds from beat start.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Window length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The component's shape.
    pub fn shape(&self) -> &WaveShape {
        &self.shape
    }

    /// Dipole contribution at absolute beat time `time_s`.
    ///
    /// Zero outside the window (not an error). O(1), side-effect free.
    pub fn vector_at(&self, time_s: f64) -> HeartVector {
        let local = time_s - self.start;
        if local < 0.0 || local > self.duration {
            return HeartVector::ZERO;
        }
        self.shape.at(local / self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qrs_like() -> WaveComponent {
        WaveComponent::directional(0.16, 0.08, 60.0, 1.2).unwrap()
    }

    #[test]
    fn test_zero_before_window() {
        let c = qrs_like();
        assert_eq!(c.vector_at(0.16 - 1e-9), HeartVector::ZERO);
        assert_eq!(c.vector_at(-5.0), HeartVector::ZERO);
    }

    #[test]
    fn test_zero_after_window() {
        let c = qrs_like();
        assert_eq!(c.vector_at(0.24 + 1e-9), HeartVector::ZERO);
        assert_eq!(c.vector_at(100.0), HeartVector::ZERO);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let c = qrs_like();
        // Phase 0 and 1: the envelope tail, small but nonzero.
        let tail = 1.2 * (-4.0f64).exp();
        assert!((c.vector_at(0.16).magnitude() - tail).abs() < 1e-12);
        assert!(c.vector_at(0.16 + 0.08).magnitude() > 0.0);
    }

    #[test]
    fn test_peak_at_window_center() {
        let c = qrs_like();
        let peak = c.vector_at(0.16 + 0.04);
        assert!((peak.magnitude() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_zero_duration() {
        let shape = WaveShape::directional(60.0, 1.0);
        assert!(matches!(
            WaveComponent::new(0.0, 0.0, shape),
            Err(ModelError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_and_non_finite_duration() {
        let shape = WaveShape::directional(60.0, 1.0);
        assert!(WaveComponent::new(0.0, -0.1, shape).is_err());
        assert!(WaveComponent::new(0.0, f64::NAN, shape).is_err());
        assert!(WaveComponent::new(0.0, f64::INFINITY, shape).is_err());
    }

    #[test]
    fn test_rejects_non_finite_start() {
        let shape = WaveShape::directional(60.0, 1.0);
        assert!(matches!(
            WaveComponent::new(f64::NAN, 0.1, shape),
            Err(ModelError::NonFiniteStart { .. })
        ));
    }

    #[test]
    fn test_negative_start_is_accepted() {
        // Physiologically implausible but geometrically consistent.
        let c = WaveComponent::directional(-0.05, 0.1, 60.0, 0.15).unwrap();
        assert!(c.vector_at(0.0).magnitude() > 0.0);
    }
}
