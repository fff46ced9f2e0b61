//! Error types for amount construction and arithmetic.

use super::UnitsError;

/// Errors that can occur when constructing or operating on an [`crate::Amount`].
///
/// Every operation either succeeds with a new amount or returns one of these
/// variants; the amounts involved are never modified.
///
/// # Examples
///
/// ```rust
/// use bigamount::{Amount, AmountError, Unit, Units};
///
/// let grams = Units::new(vec![Unit::new(0, "Gram", "g"), Unit::new(3, "Kilogram", "kg")]).unwrap();
/// let tons = Units::new(vec![Unit::new(0, "Ton", "t")]).unwrap();
///
/// let a = Amount::new(10, &grams);
/// let b = Amount::new(10, &tons);
///
/// match a.plus(&b) {
///     Err(AmountError::IncompatibleUnits { left, right }) => {
///         assert_eq!(left, "g..kg");
///         assert_eq!(right, "t");
///     }
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The input cannot be read as a finite number.
    #[error("Invalid number: {input}")]
    InvalidNumber {
        /// The rejected input, as text
        input: String,
    },

    /// A referenced unit does not resolve within the amount's scale.
    #[error(transparent)]
    InvalidUnit(#[from] UnitsError),

    /// An operation mixed amounts of two different scales.
    #[error("Different units. {left} != {right}")]
    IncompatibleUnits {
        /// Scale of the receiver
        left: String,
        /// Scale of the operand
        right: String,
    },

    /// A scalar passed to `multiply` or `divide` is not numeric.
    #[error("Not a number: {input}")]
    InvalidOperand {
        /// The rejected operand, as text
        input: String,
    },

    /// `divide` was called with a zero scalar.
    #[error("Division by zero")]
    DivisionByZero,

    /// A unit-relative query referenced a unit foreign to the amount's scale.
    #[error("Wrong unit: {unit}")]
    UnitNotInScale {
        /// Code of the foreign unit
        unit: String,
    },
}

impl AmountError {
    /// Create an `InvalidNumber` error for the given input.
    pub fn invalid_number(input: impl Into<String>) -> Self {
        AmountError::InvalidNumber {
            input: input.into(),
        }
    }

    /// Create an `InvalidOperand` error for the given scalar.
    pub fn invalid_operand(input: impl Into<String>) -> Self {
        AmountError::InvalidOperand {
            input: input.into(),
        }
    }

    /// Create an `IncompatibleUnits` error from the two scale labels.
    pub fn incompatible_units(left: impl Into<String>, right: impl Into<String>) -> Self {
        AmountError::IncompatibleUnits {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create a `UnitNotInScale` error for a unit code.
    pub fn unit_not_in_scale(unit: impl Into<String>) -> Self {
        AmountError::UnitNotInScale { unit: unit.into() }
    }
}
