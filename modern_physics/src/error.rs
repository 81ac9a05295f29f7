//! Domain errors for parameter validation
//!
//! Every evaluator takes a validated input struct; these are the ways
//! construction can fail. Once built, the formulas are total.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// γ diverges as β → 1; superluminal and negative speeds are rejected
    /// outright rather than clamped, so a chart can never receive an
    /// infinite or NaN Lorentz factor.
    #[error("speed fraction v/c = {beta} is outside [0, 1)")]
    SuperluminalSpeed { beta: f64 },

    #[error("quantum number must be a positive integer, got {n}")]
    InvalidQuantumNumber { n: u32 },

    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error("amplitude ratio must lie in [0, 1], got {value}")]
    AmplitudeOutOfRange { value: f64 },
}
