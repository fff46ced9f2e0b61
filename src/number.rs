//! Decimal-to-text rendering
//!
//! Always plain positional notation, never exponent form, regardless of
//! how large or small the value is.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};

use crate::config::{NumberFormat, NumberStyle};

/// Render with the exact digits of `number`, no grouping, no trailing zeros
pub(crate) fn to_plain_string(number: &BigDecimal) -> String {
    let (digits, scale) = number.normalized().into_bigint_and_exponent();
    let (int_part, frac_part) = split_digits(&digits, scale);
    assemble(
        digits.sign() == Sign::Minus,
        &int_part,
        frac_part.trim_end_matches('0'),
        &NumberFormat::plain(),
    )
}

/// Render `number` according to a [`NumberStyle`]
pub(crate) fn render(number: &BigDecimal, style: &NumberStyle) -> String {
    let decimals = i64::from(style.decimals);
    let rounded = number.with_scale_round(decimals, style.rounding);
    let (digits, scale) = rounded.into_bigint_and_exponent();
    let (int_part, mut frac_part) = split_digits(&digits, scale);

    let width = style.decimals as usize;
    if frac_part.len() < width {
        frac_part.extend(std::iter::repeat('0').take(width - frac_part.len()));
    }
    let frac_part = if style.strip_trailing_zeros {
        frac_part.trim_end_matches('0')
    } else {
        frac_part.as_str()
    };

    assemble(
        digits.sign() == Sign::Minus,
        &int_part,
        frac_part,
        &style.format,
    )
}

/// Split `digits * 10^-scale` into integer and fraction digit strings
fn split_digits(digits: &BigInt, scale: i64) -> (String, String) {
    let mut text = digits.magnitude().to_string();
    if scale <= 0 {
        text.extend(std::iter::repeat('0').take(scale.unsigned_abs() as usize));
        return (text, String::new());
    }

    let scale = scale as usize;
    if text.len() <= scale {
        let padding = scale + 1 - text.len();
        text.insert_str(0, &"0".repeat(padding));
    }
    let frac = text.split_off(text.len() - scale);
    (text, frac)
}

fn assemble(negative: bool, int_part: &str, frac_part: &str, format: &NumberFormat) -> String {
    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group(int_part, format));
    if !frac_part.is_empty() {
        out.push_str(&format.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn group(int_part: &str, format: &NumberFormat) -> String {
    let size = format.group_size;
    if size == 0 || int_part.len() <= size || format.group_separator.is_empty() {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(int_part.len() * 2);
    let lead = int_part.len() % size;
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (i + size - lead) % size == 0 {
            out.push_str(&format.group_separator);
        }
        out.push(ch);
    }
    out
}
