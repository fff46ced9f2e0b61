//! Ether and Ethereum Classic amounts, counted in wei

use std::sync::LazyLock;

use num_bigint::BigInt;

use crate::amount::{Amount, Numeric};
use crate::errors::{AmountError, DecodeError};
use crate::formatter::AmountFormatter;
use crate::units::{Unit, Units};

/// Wei scale with the given codes for the three ether-denominated units
fn wei_scale(micro: &str, milli: &str, ether: &str) -> Units {
    Units::with_base(
        Unit::new(0, "Wei", "Wei"),
        [
            Unit::new(3, "Kwei", "KWei"),
            Unit::new(6, "Mwei", "MWei"),
            Unit::new(9, "Gwei", "GWei"),
            Unit::new(12, "Microether", micro),
            Unit::new(15, "Milliether", milli),
            Unit::new(18, "Ether", ether),
        ],
    )
}

static WEIS: LazyLock<Units> = LazyLock::new(|| wei_scale("μETH", "mETH", "ETH"));

static WEIS_ETC: LazyLock<Units> = LazyLock::new(|| wei_scale("μETC", "mETC", "ETC"));

static FORMATTER: LazyLock<AmountFormatter> =
    LazyLock::new(|| super::currency_formatter(&WEIS, &["Wei", "GWei", "mETH", "ETH"]));

static CLASSIC_FORMATTER: LazyLock<AmountFormatter> =
    LazyLock::new(|| super::currency_formatter(&WEIS_ETC, &["Wei", "GWei", "mETC", "ETC"]));

/// The Ethereum wei scale, `Wei` to `ETH`
pub fn weis() -> &'static Units {
    &WEIS
}

/// The Ethereum Classic wei scale, `Wei` to `ETC`
pub fn weis_etc() -> &'static Units {
    &WEIS_ETC
}

/// Amount of `value` wei on Ethereum
pub fn wei(value: impl Into<BigInt>) -> Amount {
    Amount::new(value, &WEIS)
}

/// Amount of `value` wei on Ethereum Classic
pub fn wei_etc(value: impl Into<BigInt>) -> Amount {
    Amount::new(value, &WEIS_ETC)
}

/// Amount of `value` ether, floored to whole wei
///
/// ```
/// use bigamount::crypto::ethereum;
///
/// let amount = ethereum::from_ether(1.23).unwrap();
/// assert_eq!(amount.value().to_string(), "1230000000000000000");
/// ```
pub fn from_ether(value: impl Numeric) -> Result<Amount, AmountError> {
    Amount::from_unit_code(value, "ETHER", &WEIS)
}

/// Amount of `value` classic ether, floored to whole wei
pub fn from_ether_etc(value: impl Numeric) -> Result<Amount, AmountError> {
    Amount::from_unit_code(value, "ETHER", &WEIS_ETC)
}

/// Decode `"<wei>/WEI"` into the Ethereum scale
pub fn decode_wei(text: &str) -> Result<Amount, DecodeError> {
    Amount::decode(text, &WEIS)
}

/// Decode `"<wei>/WEI"` into the Ethereum Classic scale
pub fn decode_wei_etc(text: &str) -> Result<Amount, DecodeError> {
    Amount::decode(text, &WEIS_ETC)
}

/// Whether `amount` is expressed in the Ethereum scale
pub fn is_wei(amount: &Amount) -> bool {
    amount.units() == weis()
}

/// Whether `amount` is expressed in the Ethereum Classic scale
pub fn is_wei_etc(amount: &Amount) -> bool {
    amount.units() == weis_etc()
}

/// Value in the top unit as a float, for display only
pub fn to_ether(amount: &Amount) -> f64 {
    super::to_top_unit_f64(amount)
}

/// Hexadecimal value, `[-]0x<hex of the magnitude>`
///
/// ```
/// use bigamount::crypto::ethereum;
///
/// assert_eq!(ethereum::to_hex(&ethereum::wei(255)), "0xff");
/// assert_eq!(ethereum::to_hex(&ethereum::wei(-16)), "-0x10");
/// ```
pub fn to_hex(amount: &Amount) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}0x{}", sign, amount.value().magnitude().to_str_radix(16))
}

/// Zero as `"0 ETH"`, otherwise the best of `Wei`, `GWei`, `mETH` and `ETH`
/// with up to three fraction digits
pub fn formatter() -> &'static AmountFormatter {
    &FORMATTER
}

/// Same as [`formatter`] for the Ethereum Classic scale
pub fn classic_formatter() -> &'static AmountFormatter {
    &CLASSIC_FORMATTER
}
