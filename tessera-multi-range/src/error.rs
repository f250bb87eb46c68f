use thiserror::Error;

/// Validation failures reported at the engine boundary.
///
/// The engine itself never fails; these errors are only produced by the
/// checked constructors and [`validate_ranges`](crate::range::validate_ranges).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("range `{id}` is empty or inverted: min {min} must be below max {max}")]
    EmptyInterval { id: String, min: f64, max: f64 },
    #[error("range `{id}` has a non-finite bound")]
    NonFinite { id: String },
    #[error("extremes {min}..{max} do not describe a usable domain")]
    DegenerateExtremes { min: f64, max: f64 },
    #[error("track length {0} must be a positive, finite number")]
    InvalidTrackLength(f64),
    #[error("range stored under key `{key}` carries id `{id}`")]
    IdMismatch { key: String, id: String },
}
