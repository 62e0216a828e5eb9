//! The 12 standard lead directions.
//!
//! Each lead is a fixed unit vector: the direction of that electrode
//! configuration's maximum sensitivity. A lead's instantaneous voltage is
//! the dot product of the heart vector with the lead direction.
//!
//! The table is built once on first use and never mutated, so it is safe
//! for unsynchronized concurrent reads.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::vector::HeartVector;

/// One of the 12 standard ECG leads, in conventional report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lead {
    /// Lead I (0 degrees).
    #[serde(rename = "I")]
    I,
    /// Lead II (60 degrees).
    #[serde(rename = "II")]
    II,
    /// Lead III (120 degrees).
    #[serde(rename = "III")]
    III,
    /// Augmented vector right (-150 degrees).
    #[serde(rename = "aVR")]
    Avr,
    /// Augmented vector left (-30 degrees).
    #[serde(rename = "aVL")]
    Avl,
    /// Augmented vector foot (90 degrees).
    #[serde(rename = "aVF")]
    Avf,
    /// Precordial lead V1.
    V1,
    /// Precordial lead V2.
    V2,
    /// Precordial lead V3.
    V3,
    /// Precordial lead V4.
    V4,
    /// Precordial lead V5.
    V5,
    /// Precordial lead V6.
    V6,
}

impl Lead {
    /// All 12 leads in conventional report order. Also the row order of
    /// sampled lead arrays.
    pub const ALL: [Lead; 12] = [
        Lead::I,
        Lead::II,
        Lead::III,
        Lead::Avr,
        Lead::Avl,
        Lead::Avf,
        Lead::V1,
        Lead::V2,
        Lead::V3,
        Lead::V4,
        Lead::V5,
        Lead::V6,
    ];

    /// The lead's direction of maximum sensitivity (unit vector).
    pub fn direction(self) -> HeartVector {
        directions()[self.index()]
    }

    /// Position of this lead in [`Lead::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Clinical label, e.g. `"aVR"`.
    pub fn label(self) -> &'static str {
        match self {
            Lead::I => "I",
            Lead::II => "II",
            Lead::III => "III",
            Lead::Avr => "aVR",
            Lead::Avl => "aVL",
            Lead::Avf => "aVF",
            Lead::V1 => "V1",
            Lead::V2 => "V2",
            Lead::V3 => "V3",
            Lead::V4 => "V4",
            Lead::V5 => "V5",
            Lead::V6 => "V6",
        }
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Projects a heart vector onto a lead: the lead's instantaneous voltage.
pub fn project(v: HeartVector, lead: Lead) -> f64 {
    v.dot(lead.direction())
}

static DIRECTIONS: OnceLock<[HeartVector; 12]> = OnceLock::new();

/// Limb leads follow the hexaxial reference system; precordial leads use
/// fixed literal coordinates (the chest electrodes are not coplanar with
/// the frontal plane), normalized to unit length.
fn directions() -> &'static [HeartVector; 12] {
    DIRECTIONS.get_or_init(|| {
        [
            HeartVector::frontal(0.0),
            HeartVector::frontal(60.0),
            HeartVector::frontal(120.0),
            HeartVector::frontal(-150.0),
            HeartVector::frontal(-30.0),
            HeartVector::frontal(90.0),
            HeartVector::new(-0.6, 0.0, 0.8).normalized(),
            HeartVector::new(-0.3, 0.0, 0.95).normalized(),
            HeartVector::new(0.0, 0.0, 1.0).normalized(),
            HeartVector::new(0.3, 0.0, 0.95).normalized(),
            HeartVector::new(0.6, 0.0, 0.8).normalized(),
            HeartVector::new(0.9, 0.0, 0.4).normalized(),
        ]
    })
}
