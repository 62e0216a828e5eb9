//! Beat morphology: superposition of P, QRS, and T components.

use serde::{Deserialize, Serialize};

use crate::component::WaveComponent;
use crate::vector::HeartVector;

/// One complete cardiac cycle's dipole model.
///
/// The QRS complex is always present; P and T waves are optional and an
/// absent wave contributes nothing (the zero vector, never an error).
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Morphology {
    /// Atrial depolarization, if modeled.
    pub p_wave: Option<WaveComponent>,
    /// Ventricular depolarization.
    pub qrs: WaveComponent,
    /// Ventricular repolarization, if modeled.
    pub t_wave: Option<WaveComponent>,
}

impl Morphology {
    /// Instantaneous heart vector at `local_time` seconds from beat onset.
    ///
    /// Vector sum of all present components. Total over all real inputs;
    /// times outside every window yield the zero vector.
    pub fn heart_vector_at(&self, local_time: f64) -> HeartVector {
        let mut v = HeartVector::ZERO;

        if let Some(p) = &self.p_wave {
            v = v + p.vector_at(local_time);
        }

        v = v + self.qrs.vector_at(local_time);

        if let Some(t) = &self.t_wave {
            v = v + t.vector_at(local_time);
        }

        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_beat() -> Morphology {
        Morphology {
            p_wave: Some(WaveComponent::directional(0.0, 0.10, 60.0, 0.15).unwrap()),
            qrs: WaveComponent::directional(0.16, 0.08, 60.0, 1.2).unwrap(),
            t_wave: Some(WaveComponent::directional(0.28, 0.20, 80.0, 0.35).unwrap()),
        }
    }

    #[test]
    fn test_zero_outside_all_windows() {
        let m = full_beat();
        assert_eq!(m.heart_vector_at(-0.01), HeartVector::ZERO);
        assert_eq!(m.heart_vector_at(0.14), HeartVector::ZERO);
        assert_eq!(m.heart_vector_at(2.0), HeartVector::ZERO);
    }

    #[test]
    fn test_absent_waves_contribute_nothing() {
        let full = full_beat();
        let qrs_only = Morphology {
            p_wave: None,
            qrs: full.qrs,
            t_wave: None,
        };

        // Mid-QRS the three-wave and QRS-only beats agree exactly: the P
        // and T windows do not overlap the QRS here.
        let t = 0.20;
        assert_eq!(qrs_only.heart_vector_at(t), full.heart_vector_at(t));

        // Mid-P the QRS-only beat is flat.
        assert_eq!(qrs_only.heart_vector_at(0.05), HeartVector::ZERO);
        assert!(full.heart_vector_at(0.05).magnitude() > 0.0);
    }

    #[test]
    fn test_overlapping_windows_superpose() {
        // Force the P window onto the QRS window; the sum must be the
        // componentwise sum of both contributions.
        let p = WaveComponent::directional(0.0, 0.10, 60.0, 0.15).unwrap();
        let qrs = WaveComponent::directional(0.0, 0.10, 0.0, 1.2).unwrap();
        let m = Morphology {
            p_wave: Some(p),
            qrs,
            t_wave: None,
        };

        let expected = p.vector_at(0.05) + qrs.vector_at(0.05);
        assert_eq!(m.heart_vector_at(0.05), expected);
    }

    #[test]
    fn test_morphology_serde_round_trip() {
        let m = full_beat();
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Morphology = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
