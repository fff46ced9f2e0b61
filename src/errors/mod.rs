//! Error types for the bigamount library.
//!
//! This module provides strongly-typed errors for all public APIs.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`UnitsError`,
//!   `AmountError`, `DecodeError`, `FormatError`)
//! - **Unified error type** (`BigAmountError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`UnitsError`] - Invalid units and empty scales
//! - [`AmountError`] - Construction, arithmetic and comparison failures
//! - [`DecodeError`] - Rejected canonical encodings
//! - [`FormatError`] - Formatting steps that reference a foreign unit
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use bigamount::{Amount, DecodeError, Unit, Units};
//!
//! let units = Units::new(vec![Unit::new(0, "Satoshi", "sat")]).unwrap();
//!
//! match Amount::decode("12/BTC", &units) {
//!     Ok(amount) => println!("decoded {}", amount),
//!     Err(DecodeError::UnitMismatch { expected, actual }) => {
//!         assert_eq!(expected, "SAT");
//!         assert_eq!(actual, "BTC");
//!     }
//!     Err(e) => panic!("unexpected: {}", e),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use bigamount::{Amount, BigAmountError, Formatter, Unit, Units};
//!
//! fn render(encoded: &str) -> Result<String, BigAmountError> {
//!     let units = Units::new(vec![Unit::new(0, "Satoshi", "sat")])?;
//!     let amount = Amount::decode(encoded, &units)?;
//!     let doubled = amount.multiply(2)?;
//!     Ok(Formatter::full_with_code().format(&doubled)?)
//! }
//!
//! assert_eq!(render("1500/SAT").unwrap(), "3,000 sat");
//! ```

mod amount;
mod decode;
mod format;
mod units;

pub use amount::AmountError;
pub use decode::DecodeError;
pub use format::FormatError;
pub use units::UnitsError;

/// Unified error type for all bigamount operations.
///
/// All module-specific error types automatically convert to `BigAmountError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigAmountError {
    /// Error from unit or scale construction.
    #[error("Units error: {0}")]
    Units(#[from] UnitsError),

    /// Error from amount construction or arithmetic.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from decoding the canonical string form.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error from a formatting pipeline.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}
