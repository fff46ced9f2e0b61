//! Exact-precision, unit-aware amounts
//!
//! `bigamount` represents ledger-like quantities (currency balances, token
//! amounts) as arbitrary-precision integers in the base unit of a
//! denomination scale, and renders them through declarative formatting
//! pipelines.
//!
//! - [`Unit`] / [`Units`] - denominations and the sorted scale they form,
//!   including the optimal-unit search
//! - [`Amount`] - lossless arithmetic, comparison and the canonical
//!   `<integer>/<CODE>` encoding
//! - [`FormatterBuilder`] / [`AmountFormatter`] - composable formatting
//!   steps with conditional branches
//! - [`crypto`] - ready-made Bitcoin and Ethereum scales and formatters
//!
//! # Example
//!
//! ```rust
//! use bigamount::{Amount, Formatter, Unit, Units};
//!
//! let units = Units::new(vec![
//!     Unit::new(0, "Some", "S"),
//!     Unit::new(3, "Kilo Some", "kS"),
//!     Unit::new(6, "Mega Some", "MS"),
//! ])?;
//!
//! let amount = Amount::from_unit_code("1.2345", "MS", &units)?;
//! let fee = amount.divide(3)?;
//!
//! assert_eq!(fee.encode(), "411500/S");
//! assert_eq!(Formatter::optimal_with_code().format(&fee)?, "411.5 kS");
//! # Ok::<(), bigamount::BigAmountError>(())
//! ```

mod amount;
pub mod config;
pub mod crypto;
mod encoding;
mod errors;
mod formatter;
mod number;
mod tracing;
mod units;

pub use amount::{Amount, Numeric};
pub use config::{NumberFormat, NumberStyle, NumberStyleBuilder};
pub use encoding::is_encoded_amount;
pub use errors::{AmountError, BigAmountError, DecodeError, FormatError, UnitsError};
pub use formatter::{AmountFormatter, FormatStep, Formatter, FormatterBuilder, Predicate};
pub use units::{OptimalUnitQuery, Unit, Units};

// Re-export for convenience
pub use bigdecimal::{BigDecimal, RoundingMode};
pub use num_bigint::BigInt;
