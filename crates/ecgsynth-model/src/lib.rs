//! Parametric Cardiac Dipole Model
//!
//! This crate models the heart's electrical dipole over one cardiac cycle
//! and projects it onto the 12 standard ECG leads. The inputs are the
//! clinically meaningful intervals a physician reads off a strip (PR
//! interval, QRS duration, QT interval, electrical axis); the output is a
//! 3D heart vector at any instant of the beat, and per-lead voltages via
//! dot product.
//!
//! # Overview
//!
//! A beat is the vector superposition of up to three time-windowed waves:
//!
//! - **P wave** - atrial depolarization, small and early
//! - **QRS complex** - ventricular depolarization, the dominant deflection
//! - **T wave** - ventricular repolarization, concordant with the QRS
//!
//! Each wave couples a fixed spatial direction to a Gaussian magnitude
//! envelope over its window. Everything here is an immutable value and
//! every operation is pure and total: out-of-window times and absent waves
//! yield the zero vector, and zero-magnitude normalization is guarded.
//! Construction is the only fallible step - window geometry that would
//! break phase normalization is rejected there.
//!
//! # Example
//!
//! ```
//! use ecgsynth_model::{normal_sinus_morphology, project, Lead, SinusParams};
//!
//! let beat = normal_sinus_morphology(&SinusParams {
//!     pr_interval: 0.16,
//!     qrs_duration: 0.08,
//!     qt_interval: 0.36,
//!     qrs_axis_degrees: 60.0,
//! })?;
//!
//! // Mid-QRS the dipole points along the QRS axis, so lead II (60
//! // degrees) records a strong positive deflection.
//! let v = beat.heart_vector_at(0.20);
//! assert!(project(v, Lead::II) > 1.0);
//! # Ok::<(), ecgsynth_model::ModelError>(())
//! ```
//!
//! # Modules
//!
//! - [`vector`] - 3D heart vector math
//! - [`shape`] - Gaussian wave shapes over normalized phase
//! - [`component`] - time-windowed wave components
//! - [`morphology`] - P/QRS/T superposition
//! - [`sinus`] - normal sinus rhythm factory
//! - [`leads`] - the 12 standard lead directions and projection
//! - [`error`] - construction error types

pub mod component;
pub mod error;
pub mod leads;
pub mod morphology;
pub mod shape;
pub mod sinus;
pub mod vector;

// Re-export the main types at the crate root
pub use component::WaveComponent;
pub use error::{ModelError, ModelResult};
pub use leads::{project, Lead};
pub use morphology::Morphology;
pub use shape::{gaussian_envelope, WaveShape};
pub use sinus::{normal_sinus_morphology, SinusParams};
pub use vector::HeartVector;
