//! Rendering defaults
//!
//! Centralizes the separators and fraction digits shared by the default
//! [`NumberFormat`](crate::NumberFormat) and the prebuilt pipelines.

/// Separator inserted between digit groups of the integer part
pub const DEFAULT_GROUP_SEPARATOR: &str = ",";

/// Number of integer digits per group
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Separator between the integer and fraction parts
pub const DEFAULT_DECIMAL_SEPARATOR: &str = ".";

/// Fraction digits used by [`Formatter::optimal_with_code`](crate::Formatter::optimal_with_code)
pub const OPTIMAL_FRACTION_DIGITS: u32 = 2;

/// Fraction digits used by the bundled currency formatters
pub const CURRENCY_FRACTION_DIGITS: u32 = 3;

/// Decimal tolerance used by the bundled currency formatters
///
/// A magnitude may be shown in a coarser unit as long as it renders with at
/// most this many fraction digits before reaching the first significant one.
pub const CURRENCY_DECIMAL_TOLERANCE: u32 = 3;

/// Largest decimal exponent accepted in a number or scalar
///
/// A value whose power-of-ten exponent lies beyond this bound in either
/// direction, e.g. `"1e1001"` or `"1e-1001"`, is rejected before any
/// rounding or scaling. Covers every finite `f64`, whose shortest decimal
/// form has at most 324 fraction digits.
pub const MAX_DECIMAL_EXPONENT: u32 = 1_000;
