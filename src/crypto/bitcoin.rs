// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bitcoin amounts, counted in satoshis
//!
//! # Examples
//!
//! ```
//! use bigamount::crypto::bitcoin;
//!
//! let amount = bitcoin::from_bitcoin(1.23).unwrap();
//! assert_eq!(amount.encode(), "123000000/SAT");
//! assert_eq!(bitcoin::formatter().format(&amount).unwrap(), "1.23 BTC");
//! ```

use std::sync::LazyLock;

use num_bigint::BigInt;

use crate::amount::{Amount, Numeric};
use crate::errors::{AmountError, DecodeError};
use crate::formatter::AmountFormatter;
use crate::units::{Unit, Units};

static SATOSHIS: LazyLock<Units> = LazyLock::new(|| {
    Units::with_base(
        Unit::new(0, "Satoshi", "sat"),
        [
            Unit::new(1, "Finney", "finney"),
            Unit::new(2, "bit", "μBTC"),
            Unit::new(5, "millibit", "mBTC"),
            Unit::new(8, "Bitcoin", "BTC"),
        ],
    )
});

static FORMATTER: LazyLock<AmountFormatter> =
    LazyLock::new(|| super::currency_formatter(&SATOSHIS, &["sat", "mBTC", "BTC"]));

/// The satoshi scale: `sat`, `finney`, `μBTC`, `mBTC`, `BTC`
pub fn satoshis() -> &'static Units {
    &SATOSHIS
}

/// Amount of `value` satoshis
pub fn satoshi(value: impl Into<BigInt>) -> Amount {
    Amount::new(value, &SATOSHIS)
}

/// Amount of `value` bitcoins, floored to whole satoshis
pub fn from_bitcoin(value: impl Numeric) -> Result<Amount, AmountError> {
    Amount::from_unit_code(value, "BITCOIN", &SATOSHIS)
}

/// Decode `"<satoshis>/SAT"`
pub fn decode_satoshi(text: &str) -> Result<Amount, DecodeError> {
    Amount::decode(text, &SATOSHIS)
}

/// Whether `amount` is expressed in the satoshi scale
pub fn is_satoshi(amount: &Amount) -> bool {
    amount.units() == satoshis()
}

/// Value in bitcoins as a float, for display only
pub fn to_bitcoin(amount: &Amount) -> f64 {
    super::to_top_unit_f64(amount)
}

/// `"0 BTC"` for zero, otherwise the best of `sat`, `mBTC` and `BTC` with
/// up to three fraction digits
///
/// ```
/// use bigamount::crypto::bitcoin;
///
/// let fmt = bitcoin::formatter();
/// assert_eq!(fmt.format(&bitcoin::satoshi(123_456)).unwrap(), "0.001 BTC");
/// assert_eq!(fmt.format(&bitcoin::satoshi(12_345)).unwrap(), "0.123 mBTC");
/// assert_eq!(fmt.format(&bitcoin::satoshi(2)).unwrap(), "2 sat");
/// ```
pub fn formatter() -> &'static AmountFormatter {
    &FORMATTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let codes: Vec<&str> = satoshis().iter().map(Unit::code).collect();
        assert_eq!(codes, vec!["sat", "finney", "μBTC", "mBTC", "BTC"]);
        assert_eq!(satoshis().top().multiplier(), &BigInt::from(100_000_000));
    }

    #[test]
    fn test_from_bitcoin() {
        assert_eq!(from_bitcoin(1.23).unwrap(), satoshi(123_000_000));
        assert_eq!(from_bitcoin("0.000000019").unwrap(), satoshi(1));
    }

    #[test]
    fn test_to_bitcoin() {
        assert_eq!(to_bitcoin(&satoshi(0)), 0.0);
        assert_eq!(to_bitcoin(&satoshi(100_000_000)), 1.0);
        assert_eq!(to_bitcoin(&satoshi(123_400_000)), 1.234);
    }

    #[test]
    fn test_is_satoshi() {
        assert!(is_satoshi(&satoshi(5)));
        assert!(is_satoshi(&satoshi(0).plus(&satoshi(0)).unwrap()));

        let other = Units::new(vec![Unit::new(0, "Satoshi", "sat")]).unwrap();
        assert!(!is_satoshi(&Amount::new(5, &other)));
    }

    #[test]
    fn test_format() {
        let fmt = formatter();
        let cases: [(i64, &str); 8] = [
            (0, "0 BTC"),
            (100_000_000, "1 BTC"),
            (123_400_000, "1.234 BTC"),
            (123_456, "0.001 BTC"),
            (12_345, "0.123 mBTC"),
            (123, "0.001 mBTC"),
            (2, "2 sat"),
            (-250_000_000, "-2.5 BTC"),
        ];
        for (value, expected) in cases {
            assert_eq!(fmt.format(&satoshi(value)).unwrap(), expected, "value {}", value);
        }
    }

    #[test]
    fn test_encoding() {
        for n in [119, 7194, 1_291_854, 13_084, 7_453_181, 65, 756_921_399] {
            let amount = satoshi(n);
            let decoded = decode_satoshi(&amount.encode()).unwrap();
            assert_eq!(decoded, amount);
            assert!(is_satoshi(&decoded));
        }
        assert_eq!(decode_satoshi("123000000/SAT").unwrap(), satoshi(123_000_000));
        assert!(decode_satoshi("123000000/BTC").is_err());
    }
}
