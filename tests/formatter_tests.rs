// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for formatting pipelines
//!
//! Covers the prebuilt pipelines, custom builders with conditional branches,
//! number styles and unit selection.

mod helpers;

use bigamount::{
    Amount, AmountFormatter, FormatError, FormatStep, Formatter, FormatterBuilder, NumberFormat,
    NumberStyleBuilder, OptimalUnitQuery, Predicate, RoundingMode, Unit,
};
use helpers::{init_tracing, some, some_units, wide_units};

fn render(formatter: &AmountFormatter, amount: &Amount) -> String {
    formatter.format(amount).unwrap()
}

#[test]
fn test_prebuilt_amount() {
    assert_eq!(render(Formatter::amount(), &some(1_500)), "1,500");
    assert_eq!(render(Formatter::amount(), &some(-1_234_567)), "-1,234,567");
}

#[test]
fn test_prebuilt_full() {
    assert_eq!(render(Formatter::full(), &some(1_500)), "1,500 Some");
    assert_eq!(render(Formatter::full(), &some(-2_345)), "-2,345 Some");
    assert_eq!(render(Formatter::full_with_code(), &some(1_500)), "1,500 S");
}

#[test]
fn test_prebuilt_optimal_with_code() {
    init_tracing();
    let fmt = Formatter::optimal_with_code();

    assert_eq!(render(fmt, &some(1_500)), "1.5 kS");
    assert_eq!(render(fmt, &some(0)), "0 S");
    assert_eq!(render(fmt, &some(-2_345)), "-2.35 kS");
    assert_eq!(render(fmt, &some(999)), "999 S");

    let huge = Amount::from_number("1234567890123456", &some_units()).unwrap();
    assert_eq!(render(fmt, &huge), "1,234,567,890.12 MS");
}

#[test]
fn test_top_unit_with_fixed_decimals() {
    let fmt = FormatterBuilder::new()
        .use_top_unit()
        .number(4, false)
        .append(" ")
        .unit_code()
        .build();

    assert_eq!(render(&fmt, &some(121_500)), "0.1215 MS");
    assert_eq!(render(&fmt, &some(1_500_000)), "1.5000 MS");
}

#[test]
fn test_financial_negative_style() {
    let fmt = FormatterBuilder::new()
        .use_top_unit()
        .when(Predicate::Negative, |negative, positive| {
            negative.append("(").abs().number(0, false).append(")");
            positive.number(0, false);
        })
        .append(" ")
        .unit_code()
        .build();

    let value = Amount::from_unit_code(-1_234_000, "MS", &some_units()).unwrap();
    assert_eq!(render(&fmt, &value), "(1,234,000) MS");

    let value = Amount::from_unit_code(1_234_000, "MS", &some_units()).unwrap();
    assert_eq!(render(&fmt, &value), "1,234,000 MS");
}

#[test]
fn test_zero_shown_in_top_unit() {
    let fmt = FormatterBuilder::new()
        .when(Predicate::Zero, |zero, other| {
            zero.use_top_unit();
            other.use_optimal_unit();
        })
        .number(3, true)
        .append(" ")
        .unit_name()
        .build();

    assert_eq!(render(&fmt, &some(0)), "0 Mega Some");
    assert_eq!(render(&fmt, &some(12)), "12 Some");
    assert_eq!(render(&fmt, &some(12_000)), "12 Kilo Some");
}

#[test]
fn test_strip_trailing_zeros() {
    let fmt = FormatterBuilder::new()
        .use_unit(some_units().as_slice()[1].clone())
        .number(3, true)
        .build();

    assert_eq!(render(&fmt, &some(1_200)), "1.2");
    assert_eq!(render(&fmt, &some(1_000)), "1");
    assert_eq!(render(&fmt, &some(1_001)), "1.001");
    assert_eq!(render(&fmt, &some(10_000)), "10");
}

#[test]
fn test_custom_number_style() {
    let style = NumberStyleBuilder::new()
        .decimals(2)
        .rounding(RoundingMode::Down)
        .format(
            NumberFormat::default()
                .with_group_separator(".")
                .with_decimal_separator(","),
        )
        .build();
    let fmt = FormatterBuilder::new()
        .use_unit(some_units().as_slice()[1].clone())
        .number_with(style)
        .build();

    assert_eq!(render(&fmt, &some(1_234_567_899)), "1.234.567,89");
}

#[test]
fn test_optimal_unit_with_tolerance_and_floor() {
    let units = some_units();
    let tolerant = FormatterBuilder::new()
        .use_optimal_unit_with(OptimalUnitQuery::new().tolerance(3))
        .number(3, true)
        .append(" ")
        .unit_code()
        .build();
    assert_eq!(render(&tolerant, &some(50)), "0.05 kS");

    let floored = FormatterBuilder::new()
        .use_optimal_unit_with(OptimalUnitQuery::new().floor(units.as_slice()[1].clone()))
        .number(3, true)
        .append(" ")
        .unit_code()
        .build();
    assert_eq!(render(&floored, &some(7)), "0.007 kS");
}

#[test]
fn test_candidates_restrict_selection() {
    let units = wide_units();
    let candidates = [
        units.as_slice()[0].clone(),
        units.as_slice()[3].clone(),
        units.as_slice()[5].clone(),
    ];
    let fmt = FormatterBuilder::new()
        .use_optimal_unit_with(OptimalUnitQuery::new().candidates(candidates))
        .number(2, true)
        .append(" ")
        .unit_code()
        .build();

    assert_eq!(render(&fmt, &Amount::new(200_000, &units)), "200,000 S");
    assert_eq!(render(&fmt, &Amount::new(1_000_000_000_000i64, &units)), "1,000 GS");
}

#[test]
fn test_foreign_unit_is_rejected_when_formatting() {
    let fmt = FormatterBuilder::new()
        .use_unit(Unit::new(3, "Kilo Other", "kO"))
        .number(0, false)
        .build();

    let result = fmt.format(&some(1));
    assert_eq!(
        result,
        Err(FormatError::UnsupportedUnit {
            unit: "kO".to_string()
        })
    );
}

#[test]
fn test_steps_are_inspectable() {
    let fmt = Formatter::optimal_with_code();
    assert!(matches!(fmt.steps()[0], FormatStep::UseOptimalUnit(_)));
    assert!(matches!(fmt.steps()[1], FormatStep::Number(ref style) if style.decimals == 2));
    assert!(matches!(fmt.steps().last(), Some(FormatStep::UnitCode)));

    let raw = AmountFormatter::new(vec![
        FormatStep::UseTopUnit,
        FormatStep::Number(NumberStyleBuilder::new().decimals(1).build()),
    ]);
    assert_eq!(render(&raw, &some(2_500_000)), "2.5");
}

#[test]
fn test_formatters_are_shareable_across_threads() {
    let handles: Vec<_> = [1_500i64, 2_000_000, 7]
        .into_iter()
        .map(|value| {
            std::thread::spawn(move || render(Formatter::optimal_with_code(), &some(value)))
        })
        .collect();

    let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(rendered, vec!["1.5 kS", "2 MS", "7 S"]);
}
