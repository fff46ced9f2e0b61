//! Error types for the canonical `<integer>/<CODE>` encoding.

/// Errors that can occur when decoding an encoded amount.
///
/// # Examples
///
/// ```rust
/// use bigamount::{Amount, DecodeError, Unit, Units};
///
/// let units = Units::new(vec![Unit::new(0, "Some", "S"), Unit::new(3, "Kilo Some", "kS")]).unwrap();
///
/// assert!(matches!(Amount::decode("100", &units), Err(DecodeError::MalformedEncoding { .. })));
/// assert!(matches!(Amount::decode("100/KS", &units), Err(DecodeError::UnitMismatch { .. })));
/// assert!(matches!(Amount::decode("100 foo/S", &units), Err(DecodeError::InvalidNumber { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input does not consist of exactly two `/`-separated parts.
    #[error("Not encoded: {input}")]
    MalformedEncoding {
        /// The rejected input
        input: String,
    },

    /// The unit part does not name the scale's base unit.
    #[error("Wrong unit: {expected} != {actual}")]
    UnitMismatch {
        /// Uppercased base unit code of the target scale
        expected: String,
        /// Unit part found in the input
        actual: String,
    },

    /// The number part is not a plain signed integer.
    #[error("Invalid encoded number: {input}")]
    InvalidNumber {
        /// The rejected number part
        input: String,
    },
}

impl DecodeError {
    /// Create a `MalformedEncoding` error.
    pub fn malformed(input: impl Into<String>) -> Self {
        DecodeError::MalformedEncoding {
            input: input.into(),
        }
    }

    /// Create a `UnitMismatch` error.
    pub fn unit_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        DecodeError::UnitMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an `InvalidNumber` error.
    pub fn invalid_number(input: impl Into<String>) -> Self {
        DecodeError::InvalidNumber {
            input: input.into(),
        }
    }
}
