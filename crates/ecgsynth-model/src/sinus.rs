//! Normal sinus rhythm factory.
//!
//! Derives the timing and shape of the P, QRS, and T waves from standard
//! clinical intervals. All three waves share the fixed Gaussian envelope;
//! only their windows, axes, and amplitudes differ.

use serde::{Deserialize, Serialize};

use crate::component::WaveComponent;
use crate::error::ModelResult;
use crate::morphology::Morphology;

/// P wave duration in seconds.
pub const P_WAVE_DURATION_S: f64 = 0.10;
/// P wave axis in degrees (fixed, independent of the QRS axis).
pub const P_WAVE_AXIS_DEGREES: f64 = 60.0;
/// P wave peak amplitude.
pub const P_WAVE_SCALE: f64 = 0.15;

/// QRS peak amplitude (the dominant component).
pub const QRS_SCALE: f64 = 1.2;

/// ST segment gap between QRS offset and T onset, in seconds.
pub const ST_SEGMENT_GAP_S: f64 = 0.04;

/// T wave duration in seconds.
pub const T_WAVE_DURATION_S: f64 = 0.20;
/// T wave axis offset from the QRS axis, in degrees. Positive: the T wave
/// is concordant with (not inverted from) the QRS.
pub const T_WAVE_AXIS_OFFSET_DEGREES: f64 = 20.0;
/// T wave peak amplitude.
pub const T_WAVE_SCALE: f64 = 0.35;

/// Clinical interval parameters for a normal sinus beat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinusParams {
    /// PR interval in seconds: onset of P to onset of QRS.
    pub pr_interval: f64,
    /// QRS duration in seconds.
    pub qrs_duration: f64,
    /// QT interval in seconds. Accepted for interface completeness but not
    /// used to place the T wave; T onset is derived from the QRS offset
    /// plus the fixed ST segment gap.
    pub qt_interval: f64,
    /// Mean frontal-plane QRS axis in degrees (default 60).
    #[serde(default = "default_qrs_axis")]
    pub qrs_axis_degrees: f64,
}

fn default_qrs_axis() -> f64 {
    60.0
}

impl Default for SinusParams {
    fn default() -> Self {
        Self {
            pr_interval: 0.16,
            qrs_duration: 0.10,
            qt_interval: 0.40,
            qrs_axis_degrees: default_qrs_axis(),
        }
    }
}

/// Builds a normal sinus beat from clinical intervals.
///
/// Timing: P starts at beat onset, QRS after the PR interval, T after the
/// QRS plus the ST segment gap. No physiological range checking is done -
/// a negative PR interval simply shifts the QRS before the P wave - but a
/// non-positive QRS duration is rejected at the component boundary.
pub fn normal_sinus_morphology(params: &SinusParams) -> ModelResult<Morphology> {
    let p_start = 0.0;
    let qrs_start = params.pr_interval;
    let t_start = qrs_start + params.qrs_duration + ST_SEGMENT_GAP_S;

    let p_wave = WaveComponent::directional(
        p_start,
        P_WAVE_DURATION_S,
        P_WAVE_AXIS_DEGREES,
        P_WAVE_SCALE,
    )?;

    let qrs = WaveComponent::directional(
        qrs_start,
        params.qrs_duration,
        params.qrs_axis_degrees,
        QRS_SCALE,
    )?;

    let t_wave = WaveComponent::directional(
        t_start,
        T_WAVE_DURATION_S,
        params.qrs_axis_degrees + T_WAVE_AXIS_OFFSET_DEGREES,
        T_WAVE_SCALE,
    )?;

    Ok(Morphology {
        p_wave: Some(p_wave),
        qrs,
        t_wave: Some(t_wave),
    })
}
