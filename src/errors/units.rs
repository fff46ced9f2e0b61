//! Error types for units and unit scales.
//!
//! This module provides error types for operations in the `units` module:
//! constructing a [`crate::Unit`], assembling a [`crate::Units`] scale, and
//! resolving a unit by its code or name.

/// Errors that can occur while building or querying a unit scale.
///
/// # Examples
///
/// ```rust
/// use bigamount::{Unit, Units, UnitsError};
///
/// assert!(matches!(Units::new(Vec::<Unit>::new()), Err(UnitsError::EmptyScale)));
/// assert!(matches!(
///     Unit::try_new(-1, "Broken", "BRK"),
///     Err(UnitsError::InvalidUnit { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitsError {
    /// A unit is invalid or does not resolve within a scale.
    ///
    /// Raised for negative decimals, for a code or name that matches no unit
    /// of the scale, and for a [`crate::Unit`] that is not a member of it.
    #[error("Invalid unit: {reason}")]
    InvalidUnit {
        /// Why the unit was rejected
        reason: String,
    },

    /// A scale was constructed without any units.
    #[error("Units cannot be empty")]
    EmptyScale,
}

impl UnitsError {
    /// Create an `InvalidUnit` error with a reason.
    pub fn invalid_unit(reason: impl Into<String>) -> Self {
        UnitsError::InvalidUnit {
            reason: reason.into(),
        }
    }

    /// Helper for a unit declared with a negative or oversized decimal count.
    pub fn invalid_decimals(decimals: i64) -> Self {
        Self::invalid_unit(format!("decimals must be between 0 and {}, got {}", u32::MAX, decimals))
    }

    /// Helper for a code or name that matches no unit of the scale.
    pub fn unknown_unit(code: &str) -> Self {
        Self::invalid_unit(format!("no unit with code or name {:?}", code))
    }

    /// Helper for a unit that is not a member of the scale.
    pub fn not_in_scale(code: &str) -> Self {
        Self::invalid_unit(format!("{} is not part of the scale", code))
    }
}
