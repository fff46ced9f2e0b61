// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Declarative formatting pipelines
//!
//! An [`AmountFormatter`] is an immutable list of [`FormatStep`]s. Running it
//! against an [`Amount`] seeds a fresh context (the amount's value in its
//! base unit, an empty output buffer), applies each step in order, and joins
//! the buffer into the final string.
//!
//! Pipelines are assembled with a [`FormatterBuilder`]. Conditional branches
//! are plain step lists gated by a [`Predicate`] on the source amount.
//!
//! # Example
//!
//! ```rust
//! use bigamount::{Amount, FormatterBuilder, Predicate, Unit, Units};
//!
//! let units = Units::new(vec![
//!     Unit::new(0, "Some", "S"),
//!     Unit::new(3, "Kilo Some", "kS"),
//!     Unit::new(6, "Mega Some", "MS"),
//! ]).unwrap();
//!
//! let formatter = FormatterBuilder::new()
//!     .use_optimal_unit()
//!     .when(Predicate::Negative, |on_true, on_false| {
//!         on_true.append("(").abs().number(2, true).append(")");
//!         on_false.number(2, true);
//!     })
//!     .append(" ")
//!     .unit_code()
//!     .build();
//!
//! assert_eq!(formatter.format(&Amount::new(-1_234_000, &units)).unwrap(), "(1.23) MS");
//! assert_eq!(formatter.format(&Amount::new(1_500, &units)).unwrap(), "1.5 kS");
//! ```

use std::fmt;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;

use crate::amount::Amount;
use crate::config::constants::OPTIMAL_FRACTION_DIGITS;
use crate::config::NumberStyle;
use crate::errors::FormatError;
use crate::number;
use crate::tracing::spans;
use crate::units::{OptimalUnitQuery, Unit};

/// Condition evaluated against the source amount of a format call
#[derive(Clone, Copy)]
pub enum Predicate {
    /// `amount.is_zero()`
    Zero,
    /// `amount.is_negative()`
    Negative,
    /// `amount.is_positive()`
    Positive,
    /// Any pure function of the amount
    Custom(fn(&Amount) -> bool),
}

impl Predicate {
    /// Evaluate the predicate
    pub fn test(&self, amount: &Amount) -> bool {
        match self {
            Predicate::Zero => amount.is_zero(),
            Predicate::Negative => amount.is_negative(),
            Predicate::Positive => amount.is_positive(),
            Predicate::Custom(f) => f(amount),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Zero => f.write_str("Zero"),
            Predicate::Negative => f.write_str("Negative"),
            Predicate::Positive => f.write_str("Positive"),
            Predicate::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One step of a formatting pipeline
#[derive(Debug, Clone)]
pub enum FormatStep {
    /// Render the working number and append it to the output
    Number(NumberStyle),
    /// Replace the working number with its absolute value
    Abs,
    /// Append a literal
    Append(String),
    /// Select a unit of the amount's scale and recompute the working number
    UseUnit(Unit),
    /// Select the base unit and recompute the working number
    UseBaseUnit,
    /// Select the top unit and recompute the working number
    UseTopUnit,
    /// Select the optimal unit and recompute the working number
    UseOptimalUnit(OptimalUnitQuery),
    /// Append the selected unit's code
    UnitCode,
    /// Append the selected unit's name
    UnitName,
    /// Run one of two step lists depending on the source amount
    Conditional {
        predicate: Predicate,
        on_true: Vec<FormatStep>,
        on_false: Vec<FormatStep>,
    },
}

impl FormatStep {
    fn kind(&self) -> &'static str {
        match self {
            FormatStep::Number(_) => "number",
            FormatStep::Abs => "abs",
            FormatStep::Append(_) => "append",
            FormatStep::UseUnit(_) => "use_unit",
            FormatStep::UseBaseUnit => "use_base_unit",
            FormatStep::UseTopUnit => "use_top_unit",
            FormatStep::UseOptimalUnit(_) => "use_optimal_unit",
            FormatStep::UnitCode => "unit_code",
            FormatStep::UnitName => "unit_name",
            FormatStep::Conditional { .. } => "conditional",
        }
    }
}

/// Mutable state of a single format call
pub(crate) struct FormattingContext<'a> {
    source: &'a Amount,
    number: BigDecimal,
    unit: Unit,
    buffer: Vec<String>,
}

impl<'a> FormattingContext<'a> {
    fn new(source: &'a Amount) -> Self {
        Self {
            source,
            number: BigDecimal::new(source.value().clone(), 0),
            unit: source.units().base().clone(),
            buffer: Vec::new(),
        }
    }

    fn select(&mut self, unit: Unit) -> Result<(), FormatError> {
        self.number = self
            .source
            .number_by_unit(&unit)
            .map_err(|_| FormatError::unsupported_unit(unit.code()))?;
        self.unit = unit;
        Ok(())
    }

    fn apply(&mut self, steps: &[FormatStep]) -> Result<(), FormatError> {
        for step in steps {
            tracing::trace!(step = step.kind(), unit = %self.unit, "applying format step");
            match step {
                FormatStep::Number(style) => {
                    self.buffer.push(number::render(&self.number, style));
                }
                FormatStep::Abs => self.number = self.number.abs(),
                FormatStep::Append(text) => self.buffer.push(text.clone()),
                FormatStep::UseUnit(unit) => self.select(unit.clone())?,
                FormatStep::UseBaseUnit => self.select(self.source.units().base().clone())?,
                FormatStep::UseTopUnit => self.select(self.source.units().top().clone())?,
                FormatStep::UseOptimalUnit(query) => self.select(self.source.optimal_unit(query))?,
                FormatStep::UnitCode => self.buffer.push(self.unit.code().to_string()),
                FormatStep::UnitName => self.buffer.push(self.unit.name().to_string()),
                FormatStep::Conditional {
                    predicate,
                    on_true,
                    on_false,
                } => {
                    let branch = if predicate.test(self.source) {
                        on_true
                    } else {
                        on_false
                    };
                    self.apply(branch)?;
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> String {
        self.buffer.concat()
    }
}

/// A built, immutable formatting pipeline
///
/// Safe to share between threads and to reuse for any number of amounts.
/// Units referenced by steps are checked against the amount's scale when the
/// step runs.
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    steps: Vec<FormatStep>,
}

impl AmountFormatter {
    /// Create a pipeline from raw steps
    pub fn new(steps: Vec<FormatStep>) -> Self {
        Self { steps }
    }

    /// Steps in execution order
    pub fn steps(&self) -> &[FormatStep] {
        &self.steps
    }

    /// Render `amount`
    ///
    /// Fails with [`FormatError::UnsupportedUnit`] when a step selects a unit
    /// that is not part of the amount's scale.
    pub fn format(&self, amount: &Amount) -> Result<String, FormatError> {
        let span = spans::format_amount(amount.units().base().code(), self.steps.len());
        let _guard = span.enter();

        let mut ctx = FormattingContext::new(amount);
        ctx.apply(&self.steps)?;
        Ok(ctx.finish())
    }
}

/// Fluent assembler for [`AmountFormatter`]
///
/// Steps are recorded in call order. The builder can be reused: `build`
/// snapshots the steps recorded so far.
#[derive(Debug, Clone, Default)]
pub struct FormatterBuilder {
    steps: Vec<FormatStep>,
}

impl FormatterBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, step: FormatStep) -> &mut Self {
        self.steps.push(step);
        self
    }

    /// Render the working number with `decimals` fraction digits, grouping
    /// and half-up rounding, optionally stripping trailing zeros
    pub fn number(&mut self, decimals: u32, strip_trailing_zeros: bool) -> &mut Self {
        self.push(FormatStep::Number(NumberStyle::fixed(
            decimals,
            strip_trailing_zeros,
        )))
    }

    /// Render the working number with a full [`NumberStyle`]
    pub fn number_with(&mut self, style: NumberStyle) -> &mut Self {
        self.push(FormatStep::Number(style))
    }

    /// Replace the working number with its absolute value
    pub fn abs(&mut self) -> &mut Self {
        self.push(FormatStep::Abs)
    }

    /// Append a literal to the output
    pub fn append(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(FormatStep::Append(text.into()))
    }

    /// Select `unit`, which must belong to the formatted amount's scale
    pub fn use_unit(&mut self, unit: Unit) -> &mut Self {
        self.push(FormatStep::UseUnit(unit))
    }

    /// Select the scale's base unit
    pub fn use_base_unit(&mut self) -> &mut Self {
        self.push(FormatStep::UseBaseUnit)
    }

    /// Select the scale's top unit
    pub fn use_top_unit(&mut self) -> &mut Self {
        self.push(FormatStep::UseTopUnit)
    }

    /// Select the optimal unit over the whole scale
    pub fn use_optimal_unit(&mut self) -> &mut Self {
        self.use_optimal_unit_with(OptimalUnitQuery::default())
    }

    /// Select the optimal unit under the given constraints
    pub fn use_optimal_unit_with(&mut self, query: OptimalUnitQuery) -> &mut Self {
        self.push(FormatStep::UseOptimalUnit(query))
    }

    /// Append the selected unit's code
    pub fn unit_code(&mut self) -> &mut Self {
        self.push(FormatStep::UnitCode)
    }

    /// Append the selected unit's name
    pub fn unit_name(&mut self) -> &mut Self {
        self.push(FormatStep::UnitName)
    }

    /// Add a conditional step
    ///
    /// `configure` is called once, immediately, with two fresh builders for
    /// the branch taken when `predicate` holds and the one taken otherwise.
    pub fn when<F>(&mut self, predicate: Predicate, configure: F) -> &mut Self
    where
        F: FnOnce(&mut FormatterBuilder, &mut FormatterBuilder),
    {
        let mut on_true = FormatterBuilder::new();
        let mut on_false = FormatterBuilder::new();
        configure(&mut on_true, &mut on_false);
        self.push(FormatStep::Conditional {
            predicate,
            on_true: on_true.steps,
            on_false: on_false.steps,
        })
    }

    /// Snapshot the recorded steps into a pipeline
    pub fn build(&self) -> AmountFormatter {
        AmountFormatter::new(self.steps.clone())
    }
}

static AMOUNT: LazyLock<AmountFormatter> =
    LazyLock::new(|| FormatterBuilder::new().number(0, false).build());

static FULL: LazyLock<AmountFormatter> = LazyLock::new(|| {
    FormatterBuilder::new()
        .number(0, false)
        .append(" ")
        .unit_name()
        .build()
});

static FULL_WITH_CODE: LazyLock<AmountFormatter> = LazyLock::new(|| {
    FormatterBuilder::new()
        .number(0, false)
        .append(" ")
        .unit_code()
        .build()
});

static OPTIMAL_WITH_CODE: LazyLock<AmountFormatter> = LazyLock::new(|| {
    FormatterBuilder::new()
        .use_optimal_unit()
        .number(OPTIMAL_FRACTION_DIGITS, true)
        .append(" ")
        .unit_code()
        .build()
});

/// Prebuilt pipelines
pub struct Formatter;

impl Formatter {
    /// Grouped integer in base units, `"1,500"`
    pub fn amount() -> &'static AmountFormatter {
        &AMOUNT
    }

    /// Grouped integer and base unit name, `"1,500 Some"`
    pub fn full() -> &'static AmountFormatter {
        &FULL
    }

    /// Grouped integer and base unit code, `"1,500 S"`
    pub fn full_with_code() -> &'static AmountFormatter {
        &FULL_WITH_CODE
    }

    /// Optimal unit, up to two fraction digits, `"1.5 kS"`
    pub fn optimal_with_code() -> &'static AmountFormatter {
        &OPTIMAL_WITH_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Units;

    fn units() -> Units {
        Units::new(vec![
            Unit::new(0, "Some", "S"),
            Unit::new(3, "Kilo Some", "kS"),
            Unit::new(6, "Mega Some", "MS"),
        ])
        .unwrap()
    }

    fn format(formatter: &AmountFormatter, value: i64) -> String {
        formatter.format(&Amount::new(value, &units())).unwrap()
    }

    #[test]
    fn test_empty_pipeline() {
        let formatter = FormatterBuilder::new().build();
        assert_eq!(format(&formatter, 1_500), "");
    }

    #[test]
    fn test_builder_records_steps_in_order() {
        let formatter = FormatterBuilder::new()
            .use_top_unit()
            .number(2, false)
            .append(" ")
            .unit_code()
            .build();

        let kinds: Vec<&str> = formatter.steps().iter().map(FormatStep::kind).collect();
        assert_eq!(kinds, vec!["use_top_unit", "number", "append", "unit_code"]);
    }

    #[test]
    fn test_number_uses_base_unit_by_default() {
        let formatter = FormatterBuilder::new().number(0, false).build();
        assert_eq!(format(&formatter, 1_234_567), "1,234,567");
    }

    #[test]
    fn test_unit_steps_recompute_number() {
        let mut builder = FormatterBuilder::new();
        builder.use_top_unit().number(4, false).append(" ").unit_name();
        assert_eq!(format(&builder.build(), 121_500), "0.1215 Mega Some");

        let units = units();
        let kilo = units.get(1).unwrap().clone();
        let formatter = FormatterBuilder::new()
            .use_unit(kilo)
            .number(1, false)
            .use_base_unit()
            .append("=")
            .number(0, false)
            .build();
        assert_eq!(format(&formatter, 121_500), "121.5=121,500");
    }

    #[test]
    fn test_negative_value_rounding_to_zero_has_no_sign() {
        let formatter = FormatterBuilder::new()
            .use_top_unit()
            .number(4, false)
            .append(" ")
            .unit_code()
            .build();
        assert_eq!(format(&formatter, -1), "0.0000 MS");
        assert_eq!(format(&formatter, -100), "-0.0001 MS");
    }

    #[test]
    fn test_abs() {
        let formatter = FormatterBuilder::new().abs().number(0, false).build();
        assert_eq!(format(&formatter, -2_345), "2,345");
    }

    #[test]
    fn test_use_foreign_unit_fails_at_format_time() {
        let formatter = FormatterBuilder::new()
            .use_unit(Unit::new(3, "Other", "OT"))
            .number(0, false)
            .build();

        let result = formatter.format(&Amount::new(1, &units()));
        assert_eq!(result, Err(FormatError::unsupported_unit("OT")));
    }

    #[test]
    fn test_conditional_branches() {
        let formatter = FormatterBuilder::new()
            .when(Predicate::Zero, |on_true, on_false| {
                on_true.append("nothing");
                on_false.number(0, false);
            })
            .build();

        assert_eq!(format(&formatter, 0), "nothing");
        assert_eq!(format(&formatter, 5), "5");
    }

    #[test]
    fn test_nested_conditionals() {
        let formatter = FormatterBuilder::new()
            .when(Predicate::Positive, |on_true, on_false| {
                on_true.append("+");
                on_false.when(Predicate::Negative, |neg, zero| {
                    neg.append("-");
                    zero.append("=");
                });
            })
            .build();

        assert_eq!(format(&formatter, 10), "+");
        assert_eq!(format(&formatter, -10), "-");
        assert_eq!(format(&formatter, 0), "=");
    }

    #[test]
    fn test_custom_predicate() {
        fn large(amount: &Amount) -> bool {
            amount.value() > &num_bigint::BigInt::from(1_000_000)
        }

        let formatter = FormatterBuilder::new()
            .when(Predicate::Custom(large), |on_true, on_false| {
                on_true.append("large");
                on_false.append("small");
            })
            .build();

        assert_eq!(format(&formatter, 2_000_000), "large");
        assert_eq!(format(&formatter, 2_000), "small");
        assert_eq!(format!("{:?}", Predicate::Custom(large)), "Custom(..)");
    }

    #[test]
    fn test_builder_reuse_snapshots_steps() {
        let mut builder = FormatterBuilder::new();
        builder.number(0, false);
        let first = builder.build();
        builder.append(" ").unit_code();
        let second = builder.build();

        assert_eq!(first.steps().len(), 1);
        assert_eq!(second.steps().len(), 3);
    }

    #[test]
    fn test_prebuilt_formatters() {
        assert_eq!(format(Formatter::amount(), 1_500), "1,500");
        assert_eq!(format(Formatter::full(), 1_500), "1,500 Some");
        assert_eq!(format(Formatter::full(), -2_345), "-2,345 Some");
        assert_eq!(format(Formatter::full_with_code(), 1_500), "1,500 S");
        assert_eq!(format(Formatter::optimal_with_code(), 1_500), "1.5 kS");
        assert_eq!(format(Formatter::optimal_with_code(), 0), "0 S");
        assert_eq!(format(Formatter::optimal_with_code(), -2_345), "-2.35 kS");
    }
}
