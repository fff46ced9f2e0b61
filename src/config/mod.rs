//! Configuration for number rendering
//!
//! This module controls how a formatting pipeline's `Number` step turns an
//! exact decimal into text: how many fraction digits to keep, how to round,
//! whether to strip trailing zeros, and which separators to use.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use bigamount::NumberStyle;
//!
//! // No fraction digits, round half up, "," grouping by 3, "." decimal point
//! let style = NumberStyle::default();
//! assert_eq!(style.decimals, 0);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use bigamount::{NumberFormat, NumberStyleBuilder, RoundingMode};
//!
//! let style = NumberStyleBuilder::new()
//!     .decimals(3)
//!     .strip_trailing_zeros()
//!     .rounding(RoundingMode::Floor)
//!     .format(NumberFormat::plain())
//!     .build();
//!
//! assert!(style.strip_trailing_zeros);
//! ```

use bigdecimal::RoundingMode;
use serde::{Deserialize, Serialize};

pub mod constants;

use constants::{DEFAULT_DECIMAL_SEPARATOR, DEFAULT_GROUP_SEPARATOR, DEFAULT_GROUP_SIZE};

/// Separators used when rendering a number
///
/// The only locale-like knob the crate offers: digit grouping of the integer
/// part and the character(s) between integer and fraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Inserted between digit groups of the integer part
    /// Default: ","
    pub group_separator: String,

    /// Number of digits per group, `0` disables grouping
    /// Default: 3
    pub group_size: usize,

    /// Inserted between the integer and fraction parts
    /// Default: "."
    pub decimal_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: DEFAULT_GROUP_SEPARATOR.to_string(),
            group_size: DEFAULT_GROUP_SIZE,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR.to_string(),
        }
    }
}

impl NumberFormat {
    /// Format without digit grouping, `"."` as the decimal point
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigamount::NumberFormat;
    ///
    /// let format = NumberFormat::plain();
    /// assert_eq!(format.group_size, 0);
    /// ```
    pub fn plain() -> Self {
        Self {
            group_separator: String::new(),
            group_size: 0,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR.to_string(),
        }
    }

    /// Set the group separator
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Set the group size, `0` disables grouping
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }
}

/// Full configuration of a `Number` formatting step
///
/// Use [`NumberStyleBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberStyle {
    /// Fixed number of fraction digits to render
    /// Default: 0
    pub decimals: u32,

    /// Remove trailing fraction zeros, then a dangling decimal separator
    /// Default: false
    pub strip_trailing_zeros: bool,

    /// Rounding applied when cutting to `decimals`
    /// Default: `RoundingMode::HalfUp`
    pub rounding: RoundingMode,

    /// Separators
    pub format: NumberFormat,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            decimals: 0,
            strip_trailing_zeros: false,
            rounding: RoundingMode::HalfUp,
            format: NumberFormat::default(),
        }
    }
}

impl NumberStyle {
    /// Style with fixed fraction digits and default rounding and separators
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigamount::NumberStyle;
    ///
    /// let style = NumberStyle::fixed(3, true);
    /// assert_eq!(style.decimals, 3);
    /// assert!(style.strip_trailing_zeros);
    /// ```
    pub fn fixed(decimals: u32, strip_trailing_zeros: bool) -> Self {
        Self {
            decimals,
            strip_trailing_zeros,
            ..Self::default()
        }
    }
}

/// Builder for [`NumberStyle`]
///
/// # Example
///
/// ```rust
/// use bigamount::{NumberFormat, NumberStyleBuilder};
///
/// let style = NumberStyleBuilder::new()
///     .decimals(2)
///     .format(NumberFormat::default().with_group_separator(" "))
///     .build();
/// assert_eq!(style.format.group_separator, " ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberStyleBuilder {
    style: NumberStyle,
}

impl NumberStyleBuilder {
    /// Create a new builder starting from [`NumberStyle::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of fraction digits
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.style.decimals = decimals;
        self
    }

    /// Strip trailing fraction zeros after rounding
    pub fn strip_trailing_zeros(mut self) -> Self {
        self.style.strip_trailing_zeros = true;
        self
    }

    /// Set the rounding mode
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.style.rounding = rounding;
        self
    }

    /// Set the separators
    pub fn format(mut self, format: NumberFormat) -> Self {
        self.style.format = format;
        self
    }

    /// Build the final style
    pub fn build(self) -> NumberStyle {
        self.style
    }
}
