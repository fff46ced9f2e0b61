//! Error types for the formatting pipeline.

/// Errors raised while a formatting pipeline runs against an amount.
///
/// Pipelines are built without knowing which scale they will be applied to,
/// so unit membership is checked when a step executes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A step selected a unit that is not part of the amount's scale.
    #[error("Unsupported unit: {unit}")]
    UnsupportedUnit {
        /// Code of the rejected unit
        unit: String,
    },
}

impl FormatError {
    /// Create an `UnsupportedUnit` error for a unit code.
    pub fn unsupported_unit(unit: impl Into<String>) -> Self {
        FormatError::UnsupportedUnit { unit: unit.into() }
    }
}
