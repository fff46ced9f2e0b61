//! Denomination tables and formatters for common cryptocurrencies
//!
//! Everything here is built on the public API only: a static [`Units`]
//! scale per currency, thin constructors that bind amounts to it, and a
//! prebuilt [`AmountFormatter`].
//!
//! - [`bitcoin`] - satoshi-based scale, `sat` to `BTC`
//! - [`ethereum`] - wei-based scales for Ethereum and Ethereum Classic

pub mod bitcoin;
pub mod ethereum;

use crate::config::constants::{CURRENCY_DECIMAL_TOLERANCE, CURRENCY_FRACTION_DIGITS};
use crate::formatter::{AmountFormatter, FormatterBuilder, Predicate};
use crate::units::{OptimalUnitQuery, Units};

/// Zero in the top unit, anything else in the optimal unit among `codes`,
/// then a trimmed three-decimal number and the unit code
fn currency_formatter(units: &Units, codes: &[&str]) -> AmountFormatter {
    let candidates = units
        .iter()
        .filter(|unit| codes.iter().any(|code| *code == unit.code()))
        .cloned();
    let query = OptimalUnitQuery::new()
        .candidates(candidates)
        .tolerance(CURRENCY_DECIMAL_TOLERANCE);

    FormatterBuilder::new()
        .when(Predicate::Zero, |zero, other| {
            zero.use_top_unit();
            other.use_optimal_unit_with(query);
        })
        .number(CURRENCY_FRACTION_DIGITS, true)
        .append(" ")
        .unit_code()
        .build()
}

/// Lossy conversion of an amount to a float in its top unit
fn to_top_unit_f64(amount: &crate::Amount) -> f64 {
    amount
        .number_by_unit(amount.units().top())
        .map(|number| number.to_string().parse::<f64>().unwrap_or(0.0))
        .unwrap_or(0.0)
}
