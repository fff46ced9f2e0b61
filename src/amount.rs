// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact, unit-aware amounts
//!
//! An [`Amount`] is an arbitrary-precision integer counted in the base unit
//! of its [`Units`] scale. Fractional inputs are rounded once, on the way in,
//! and every operation after that is exact or rounds in a documented
//! direction. Amounts are immutable: arithmetic returns new values.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Serialize, Serializer};

use crate::config::constants::MAX_DECIMAL_EXPONENT;
use crate::errors::{AmountError, UnitsError};
use crate::number;
use crate::units::{OptimalUnitQuery, Unit, Units};

/// A value that can be read as an exact decimal number
///
/// Implemented for the primitive integers and floats, for strings, and for
/// [`BigInt`] / [`BigDecimal`]. Floats are read through their shortest
/// round-trip representation, so `93622857.54_f64` is the decimal
/// `93622857.54`, not its binary expansion.
pub trait Numeric {
    /// Exact decimal value, or [`AmountError::InvalidNumber`]
    fn to_big_decimal(&self) -> Result<BigDecimal, AmountError>;
}

macro_rules! impl_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_big_decimal(&self) -> Result<BigDecimal, AmountError> {
                    Ok(BigDecimal::new(BigInt::from(*self), 0))
                }
            }
        )*
    };
}

impl_numeric_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_numeric_for_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_big_decimal(&self) -> Result<BigDecimal, AmountError> {
                    if !self.is_finite() {
                        return Err(AmountError::invalid_number(self.to_string()));
                    }
                    BigDecimal::from_str(&self.to_string())
                        .map_err(|_| AmountError::invalid_number(self.to_string()))
                }
            }
        )*
    };
}

impl_numeric_for_float!(f32, f64);

impl Numeric for str {
    fn to_big_decimal(&self) -> Result<BigDecimal, AmountError> {
        let number =
            BigDecimal::from_str(self).map_err(|_| AmountError::invalid_number(self))?;
        if exponent_in_range(&number) {
            Ok(number)
        } else {
            Err(AmountError::invalid_number(self))
        }
    }
}

impl Numeric for String {
    fn to_big_decimal(&self) -> Result<BigDecimal, AmountError> {
        self.as_str().to_big_decimal()
    }
}

impl Numeric for BigInt {
    fn to_big_decimal(&self) -> Result<BigDecimal, AmountError> {
        Ok(BigDecimal::new(self.clone(), 0))
    }
}

impl Numeric for BigDecimal {
    fn to_big_decimal(&self) -> Result<BigDecimal, AmountError> {
        Ok(self.clone())
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_big_decimal(&self) -> Result<BigDecimal, AmountError> {
        (**self).to_big_decimal()
    }
}

/// Whether the power-of-ten exponent of `number` is within [`MAX_DECIMAL_EXPONENT`]
fn exponent_in_range(number: &BigDecimal) -> bool {
    let (_, scale) = number.as_bigint_and_exponent();
    scale.unsigned_abs() <= u64::from(MAX_DECIMAL_EXPONENT)
}

/// Read a number, rejecting exponents too large to scale or round
fn read(value: impl Numeric) -> Result<BigDecimal, AmountError> {
    let number = value.to_big_decimal()?;
    if !exponent_in_range(&number) {
        let (digits, scale) = number.into_bigint_and_exponent();
        return Err(AmountError::invalid_number(format!("{}E{}", digits, -i128::from(scale))));
    }
    Ok(number)
}

/// Round a decimal to an integer
fn to_integer(number: &BigDecimal, rounding: RoundingMode) -> BigInt {
    let (digits, _) = number.with_scale_round(0, rounding).into_bigint_and_exponent();
    digits
}

/// Read a `multiply`/`divide` scalar, reporting failures as a bad operand
fn operand(scalar: impl Numeric) -> Result<BigDecimal, AmountError> {
    read(scalar).map_err(|err| match err {
        AmountError::InvalidNumber { input } => AmountError::InvalidOperand { input },
        other => other,
    })
}

/// Integer division rounding toward negative infinity
fn div_floor(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if !remainder.is_zero() && (remainder.is_negative() != denominator.is_negative()) {
        quotient - 1
    } else {
        quotient
    }
}

/// An exact quantity in the base unit of a [`Units`] scale
///
/// Two amounts are equal when they hold the same value in equal scales.
/// Binary operations require both operands to share an equal scale and fail
/// with [`AmountError::IncompatibleUnits`] otherwise.
///
/// # Examples
///
/// ```
/// use bigamount::{Amount, Unit, Units};
///
/// let units = Units::new(vec![
///     Unit::new(0, "Some", "S"),
///     Unit::new(3, "Kilo Some", "kS"),
///     Unit::new(6, "Mega Some", "MS"),
/// ]).unwrap();
///
/// let a = Amount::new(123_456, &units);
/// let b = Amount::from_unit_code(1.5, "kS", &units).unwrap();
///
/// let total = a.plus(&b).unwrap();
/// assert_eq!(total.to_string(), "124.956 kS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    value: BigInt,
    units: Units,
}

impl Amount {
    /// Create an amount from an integer count of base units
    pub fn new(value: impl Into<BigInt>, units: &Units) -> Self {
        Self {
            value: value.into(),
            units: units.clone(),
        }
    }

    /// Zero in the given scale
    pub fn zero(units: &Units) -> Self {
        Self::new(BigInt::zero(), units)
    }

    /// Create an amount from any number of base units, rounding half-down
    ///
    /// Fractional values round to the nearest integer; ties go toward zero.
    /// Strings are parsed as-is, so surrounding whitespace is rejected, and
    /// exponents beyond [`MAX_DECIMAL_EXPONENT`] fail with
    /// [`AmountError::InvalidNumber`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{Amount, Unit, Units};
    ///
    /// let units = Units::new(vec![Unit::new(0, "Some", "S")]).unwrap();
    ///
    /// assert_eq!(Amount::from_number("93622857.54", &units).unwrap().value().to_string(), "93622858");
    /// assert_eq!(Amount::from_number(93622857.14, &units).unwrap().value().to_string(), "93622857");
    /// assert_eq!(Amount::from_number("2.5", &units).unwrap().value().to_string(), "2");
    /// assert!(Amount::from_number("foo", &units).is_err());
    /// ```
    pub fn from_number(value: impl Numeric, units: &Units) -> Result<Self, AmountError> {
        let number = read(value)?;
        Ok(Self::new(to_integer(&number, RoundingMode::HalfDown), units))
    }

    /// Create an amount from an exact decimal number of base units, rounding half-down
    pub fn from_decimal(value: &BigDecimal, units: &Units) -> Result<Self, AmountError> {
        Self::from_number(value, units)
    }

    /// Create an amount from a float number of base units, rounding half-down
    ///
    /// Fails with [`AmountError::InvalidNumber`] for NaN and infinities.
    pub fn from_f64(value: f64, units: &Units) -> Result<Self, AmountError> {
        Self::from_number(value, units)
    }

    /// Create an amount from a value expressed in `unit`
    ///
    /// Stores `floor(value * 10^unit.decimals)` base units. The unit must be a
    /// member of `units`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{Amount, Unit, Units};
    ///
    /// let btc = Unit::new(8, "Bitcoin", "BTC");
    /// let units = Units::new(vec![Unit::new(0, "Satoshi", "sat"), btc.clone()]).unwrap();
    ///
    /// let amount = Amount::from_unit_value(1.23, &btc, &units).unwrap();
    /// assert_eq!(amount.encode(), "123000000/SAT");
    /// ```
    pub fn from_unit_value(
        value: impl Numeric,
        unit: &Unit,
        units: &Units,
    ) -> Result<Self, AmountError> {
        if !units.contains(unit) {
            return Err(UnitsError::not_in_scale(unit.code()).into());
        }
        let number = read(value)? * BigDecimal::new(unit.multiplier().clone(), 0);
        Ok(Self::new(to_integer(&number, RoundingMode::Floor), units))
    }

    /// Create an amount from a value expressed in the unit with the given code or name
    ///
    /// The lookup ignores case. Fails with [`AmountError::InvalidUnit`] when
    /// no unit of the scale matches.
    pub fn from_unit_code(
        value: impl Numeric,
        code_or_name: &str,
        units: &Units,
    ) -> Result<Self, AmountError> {
        let unit = units.resolve(code_or_name)?;
        Self::from_unit_value(value, unit, units)
    }

    /// Re-scope an amount into `units`, keeping its base-unit value
    ///
    /// The target scale must share the amount's base unit; any other scale
    /// would silently change what the stored integer means.
    pub fn from_amount(amount: &Amount, units: &Units) -> Result<Self, AmountError> {
        if amount.units.base() != units.base() {
            return Err(AmountError::incompatible_units(
                amount.units.label(),
                units.label(),
            ));
        }
        Ok(Self::new(amount.value.clone(), units))
    }

    /// Value in base units
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Scale this amount is expressed in
    pub fn units(&self) -> &Units {
        &self.units
    }

    fn require_same(&self, other: &Amount) -> Result<(), AmountError> {
        if self.units != other.units {
            return Err(AmountError::incompatible_units(
                self.units.label(),
                other.units.label(),
            ));
        }
        Ok(())
    }

    fn with_value(&self, value: BigInt) -> Self {
        Self {
            value,
            units: self.units.clone(),
        }
    }

    /// Exact sum
    pub fn plus(&self, other: &Amount) -> Result<Self, AmountError> {
        self.require_same(other)?;
        Ok(self.with_value(&self.value + &other.value))
    }

    /// Exact difference
    pub fn minus(&self, other: &Amount) -> Result<Self, AmountError> {
        self.require_same(other)?;
        Ok(self.with_value(&self.value - &other.value))
    }

    /// Multiply by a scalar, rounding half-down
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{Amount, Unit, Units};
    ///
    /// let units = Units::new(vec![Unit::new(0, "Some", "S")]).unwrap();
    /// let amount = Amount::new(93_622_857, &units);
    ///
    /// assert_eq!(amount.multiply(3.123).unwrap().value().to_string(), "292384182");
    /// assert!(amount.multiply("ten").is_err());
    /// ```
    pub fn multiply(&self, scalar: impl Numeric) -> Result<Self, AmountError> {
        let scalar = operand(scalar)?;
        let product = BigDecimal::new(self.value.clone(), 0) * scalar;
        Ok(self.with_value(to_integer(&product, RoundingMode::HalfDown)))
    }

    /// Divide by a scalar, rounding toward negative infinity
    ///
    /// The quotient is computed exactly before rounding, so no precision is
    /// lost for any divisor. Fails with [`AmountError::DivisionByZero`] for a
    /// zero scalar, and with [`AmountError::InvalidOperand`] for a scalar that
    /// is not numeric or whose exponent exceeds [`MAX_DECIMAL_EXPONENT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{Amount, Unit, Units};
    ///
    /// let units = Units::new(vec![Unit::new(0, "Some", "S")]).unwrap();
    /// let amount = Amount::new(93_622_857, &units);
    ///
    /// assert_eq!(amount.divide(2.5).unwrap().value().to_string(), "37449142");
    /// assert_eq!(amount.neg().divide(2).unwrap().value().to_string(), "-46811429");
    /// ```
    pub fn divide(&self, scalar: impl Numeric) -> Result<Self, AmountError> {
        let (digits, scale) = operand(scalar)?.into_bigint_and_exponent();
        if digits.is_zero() {
            return Err(AmountError::DivisionByZero);
        }

        // value / (digits * 10^-scale)
        let shift = u32::try_from(scale.unsigned_abs())
            .map_err(|_| AmountError::invalid_operand(format!("{}E{}", digits, -i128::from(scale))))?;
        let ten = BigInt::from(10u8);
        let (numerator, denominator) = if scale >= 0 {
            (&self.value * ten.pow(shift), digits)
        } else {
            (self.value.clone(), digits * ten.pow(shift))
        };
        Ok(self.with_value(div_floor(&numerator, &denominator)))
    }

    /// Same value with the opposite sign
    pub fn neg(&self) -> Self {
        self.with_value(-&self.value)
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        self.with_value(self.value.abs())
    }

    /// Exactly zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    /// Strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Whether `other` is expressed in an equal scale
    pub fn is_same(&self, other: &Amount) -> bool {
        self.units == other.units
    }

    /// Total order over amounts of the same scale
    pub fn compare_to(&self, other: &Amount) -> Result<Ordering, AmountError> {
        self.require_same(other)?;
        Ok(self.value.cmp(&other.value))
    }

    /// `self < other`
    pub fn is_less_than(&self, other: &Amount) -> Result<bool, AmountError> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }

    /// `self <= other`
    pub fn is_less_or_equal_to(&self, other: &Amount) -> Result<bool, AmountError> {
        Ok(self.compare_to(other)? != Ordering::Greater)
    }

    /// `self > other`
    pub fn is_greater_than(&self, other: &Amount) -> Result<bool, AmountError> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    /// `self >= other`
    pub fn is_greater_or_equal_to(&self, other: &Amount) -> Result<bool, AmountError> {
        Ok(self.compare_to(other)? != Ordering::Less)
    }

    /// The larger of the two, `self` on a tie
    pub fn max(&self, other: &Amount) -> Result<Self, AmountError> {
        if self.is_greater_or_equal_to(other)? {
            Ok(self.clone())
        } else {
            Ok(other.clone())
        }
    }

    /// The smaller of the two, `self` on a tie
    pub fn min(&self, other: &Amount) -> Result<Self, AmountError> {
        if self.is_less_or_equal_to(other)? {
            Ok(self.clone())
        } else {
            Ok(other.clone())
        }
    }

    /// Exact value expressed in `unit`
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{Amount, Unit, Units};
    ///
    /// let units = Units::new(vec![Unit::new(0, "Some", "S"), Unit::new(6, "Mega Some", "MS")]).unwrap();
    /// let amount = Amount::new(123_456, &units);
    ///
    /// assert_eq!(amount.number_by_unit(units.top()).unwrap().to_string(), "0.123456");
    /// assert!(amount.number_by_unit(&Unit::new(6, "Other", "OT")).is_err());
    /// ```
    pub fn number_by_unit(&self, unit: &Unit) -> Result<BigDecimal, AmountError> {
        if !self.units.contains(unit) {
            return Err(AmountError::unit_not_in_scale(unit.code()));
        }
        Ok(BigDecimal::new(self.value.clone(), i64::from(unit.decimals())))
    }

    /// Optimal unit for this amount's magnitude, see [`Units::optimal_unit`]
    pub fn optimal_unit(&self, query: &OptimalUnitQuery) -> Unit {
        self.units.optimal_unit(&self.value, query)
    }
}

impl fmt::Display for Amount {
    /// Full precision in the optimal unit, e.g. `"123.456 kS"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.optimal_unit(&OptimalUnitQuery::default());
        let shown = BigDecimal::new(self.value.clone(), i64::from(unit.decimals()));
        write!(f, "{} {}", number::to_plain_string(&shown), unit.code())
    }
}

impl PartialOrd for Amount {
    /// `None` when the amounts belong to different scales
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}
