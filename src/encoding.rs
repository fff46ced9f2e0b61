//! Canonical `<integer>/<CODE>` string form of an amount
//!
//! The encoding carries the exact base-unit integer and the uppercased code
//! of the scale's base unit, e.g. `"123000000/SAT"`. It is the only
//! persistence format the crate offers and round-trips exactly.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::amount::Amount;
use crate::errors::DecodeError;
use crate::tracing::spans;
use crate::units::Units;

impl Amount {
    /// Canonical encoding, `"<value>/<BASE_CODE_UPPERCASE>"`
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{Amount, Unit, Units};
    ///
    /// let units = Units::new(vec![Unit::new(0, "Some", "S"), Unit::new(3, "Kilo Some", "kS")]).unwrap();
    /// assert_eq!(Amount::new(-123_456, &units).encode(), "-123456/S");
    /// ```
    pub fn encode(&self) -> String {
        format!("{}/{}", self.value(), self.units().base().code().to_uppercase())
    }

    /// Parse the canonical encoding produced by [`encode`](Self::encode)
    ///
    /// The input must contain exactly one `/`, the code must equal the
    /// uppercased base unit code of `units`, and the number must be a plain
    /// signed integer with no whitespace, fraction or exponent.
    pub fn decode(text: &str, units: &Units) -> Result<Amount, DecodeError> {
        let expected = units.base().code().to_uppercase();
        let span = spans::decode_amount(text, &expected);
        let _guard = span.enter();

        let parts: Vec<&str> = text.split('/').collect();
        let [number, code] = parts.as_slice() else {
            tracing::debug!(input = %text, parts = parts.len(), "rejected encoding without a single '/'");
            return Err(DecodeError::malformed(text));
        };

        if *code != expected {
            tracing::debug!(expected = %expected, actual = %code, "rejected encoding with a foreign unit");
            return Err(DecodeError::unit_mismatch(expected, *code));
        }

        if !is_integer(number) {
            tracing::debug!(number = %number, "rejected encoding with a non-integer value");
            return Err(DecodeError::invalid_number(*number));
        }
        let value = BigInt::from_str(number).map_err(|_| DecodeError::invalid_number(*number))?;

        Ok(Amount::new(value, units))
    }
}

/// `-?[0-9]+`
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `text` looks like an encoded amount, ignoring surrounding whitespace
///
/// Only checks the shape `-?[0-9]+/[A-Za-z0-9]+`; the unit is not resolved
/// against any scale, so [`Amount::decode`] may still reject the input.
///
/// # Examples
///
/// ```
/// use bigamount::is_encoded_amount;
///
/// assert!(is_encoded_amount("9362285714285714298238/S"));
/// assert!(is_encoded_amount(" -10/S "));
/// assert!(!is_encoded_amount("936 S"));
/// assert!(!is_encoded_amount("936/S!"));
/// ```
pub fn is_encoded_amount(text: &str) -> bool {
    match text.trim().split_once('/') {
        Some((number, code)) => {
            is_integer(number)
                && !code.is_empty()
                && code.bytes().all(|b| b.is_ascii_alphanumeric())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    fn units() -> Units {
        Units::new(vec![
            Unit::new(0, "Some", "S"),
            Unit::new(3, "Kilo Some", "kS"),
            Unit::new(6, "Mega Some", "MS"),
        ])
        .unwrap()
    }

    #[test]
    fn test_encode() {
        let units = units();
        assert_eq!(Amount::new(123_456, &units).encode(), "123456/S");
        assert_eq!(Amount::new(-123_456, &units).encode(), "-123456/S");
        assert_eq!(Amount::zero(&units).encode(), "0/S");

        let lower = Units::new(vec![Unit::new(0, "Satoshi", "sat")]).unwrap();
        assert_eq!(Amount::new(123_000_000, &lower).encode(), "123000000/SAT");
    }

    #[test]
    fn test_decode() {
        let units = units();
        let amount = Amount::decode("9362285714285714298238/S", &units).unwrap();
        assert_eq!(amount.value().to_string(), "9362285714285714298238");
        assert_eq!(amount.units(), &units);

        let negative = Amount::decode("-15/S", &units).unwrap();
        assert_eq!(negative, Amount::new(-15, &units));
    }

    #[test]
    fn test_decode_round_trip() {
        let units = units();
        for value in [0i64, 1, -1, 999, 123_456, -98_765_432_100] {
            let amount = Amount::new(value, &units);
            assert_eq!(Amount::decode(&amount.encode(), &units).unwrap(), amount);
        }
    }

    #[test]
    fn test_decode_malformed() {
        let units = units();
        for input in ["100", "", "100/S/S", "100 S"] {
            assert!(
                matches!(Amount::decode(input, &units), Err(DecodeError::MalformedEncoding { .. })),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_decode_unit_mismatch() {
        let units = units();
        assert_eq!(
            Amount::decode("100/KS", &units),
            Err(DecodeError::unit_mismatch("S", "KS"))
        );
        // the code is compared as-is against the uppercased base code
        assert!(matches!(
            Amount::decode("100/s", &units),
            Err(DecodeError::UnitMismatch { .. })
        ));
    }

    #[test]
    fn test_decode_invalid_number() {
        let units = units();
        for input in ["100 foo/S", "foo 100/S", "1.5/S", "+1/S", "-/S", "/S", " 10/S", "1e3/S"] {
            assert!(
                matches!(Amount::decode(input, &units), Err(DecodeError::InvalidNumber { .. })),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_is_encoded_amount() {
        assert!(is_encoded_amount("9362285714285714298238/S"));
        assert!(is_encoded_amount("0/S"));
        assert!(is_encoded_amount(" 0/S "));
        assert!(is_encoded_amount("-10/S"));
        assert!(is_encoded_amount("10/sat"));

        for input in ["value 936/S", "936/S!", "936 S", "936S", "936", "", "/S", "1/", "1/S/S"] {
            assert!(!is_encoded_amount(input), "input {:?}", input);
        }
    }
}
