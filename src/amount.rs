// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;

/// Largest power of ten accepted on either side of the decimal point.
const MAX_EXPONENT: i64 = 1024;

/// Parse a decimal amount string for sorting and formatting.
///
/// Plain (`"1234.5"`) and scientific (`"1.5e3"`) notation are accepted after
/// trimming surrounding whitespace, with no upper bound on the number of
/// digits. Anything else is treated as zero rather than rejected, as are
/// exponents beyond `1e1024` in either direction.
pub fn parse_amount(amount: &str) -> BigDecimal {
    match BigDecimal::from_str(amount.trim()) {
        Ok(value) if value.as_bigint_and_exponent().1.abs() <= MAX_EXPONENT => value,
        _ => BigDecimal::zero(),
    }
}

/// Decimal digits of a value, split at the decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainDigits {
    pub negative: bool,
    /// Integer digits without leading zeros, `"0"` when there are none.
    pub integer: String,
    /// Fraction digits without trailing zeros, possibly empty.
    pub fraction: String,
}

impl PlainDigits {
    pub fn of(value: &BigDecimal) -> Self {
        let (unscaled, scale) = value.as_bigint_and_exponent();
        let text = unscaled.to_string();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, text.as_str()),
        };

        let (integer, fraction) = if scale <= 0 {
            let zeros = "0".repeat(scale.unsigned_abs() as usize);
            (format!("{}{}", digits, zeros), String::new())
        } else {
            let scale = scale as usize;
            let padded = if digits.len() <= scale {
                format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
            } else {
                digits.to_string()
            };
            let (integer, fraction) = padded.split_at(padded.len() - scale);
            (integer.to_string(), fraction.to_string())
        };

        let integer = integer.trim_start_matches('0');
        PlainDigits {
            negative,
            integer: if integer.is_empty() {
                "0".to_string()
            } else {
                integer.to_string()
            },
            fraction: fraction.trim_end_matches('0').to_string(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.is_empty()
    }
}

/// Plain decimal notation without exponent or trailing fraction zeros.
pub fn to_plain_string(value: &BigDecimal) -> String {
    let digits = PlainDigits::of(value);
    let mut plain = String::new();
    if digits.negative && !digits.is_zero() {
        plain.push('-');
    }
    plain.push_str(&digits.integer);
    if !digits.fraction.is_empty() {
        plain.push('.');
        plain.push_str(&digits.fraction);
    }
    plain
}
