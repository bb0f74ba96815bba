// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::amount::{PlainDigits, parse_amount};

const MAX_FRACTION_DIGITS: usize = 4;
const ADDRESS_HEAD: usize = 6;
const ADDRESS_TAIL: usize = 4;
const ADDRESS_ELLIPSIS: &str = "...";

/// Render an amount for display: `,` groups the integer part, `.` marks the
/// decimal point, and the fraction is cut to four digits with trailing
/// zeros removed.
///
/// ```
/// use root_ranking::format::format_amount;
///
/// assert_eq!(format_amount("1234.5"), "1,234.5");
/// assert_eq!(format_amount("1000"), "1,000");
/// assert_eq!(format_amount("0.123456"), "0.1234");
/// ```
pub fn format_amount(amount: &str) -> String {
    let digits = PlainDigits::of(&parse_amount(amount));
    let fraction = digits.fraction[..digits.fraction.len().min(MAX_FRACTION_DIGITS)]
        .trim_end_matches('0');

    let mut formatted = String::new();
    if digits.negative && !digits.is_zero() {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(&digits.integer));

    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    formatted
}

/// Shorten long addresses to `head...tail`; addresses of ten characters or
/// fewer are returned as is.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= ADDRESS_HEAD + ADDRESS_TAIL {
        return address.to_string();
    }

    let head: String = chars[..ADDRESS_HEAD].iter().collect();
    let tail: String = chars[chars.len() - ADDRESS_TAIL..].iter().collect();
    format!("{}{}{}", head, ADDRESS_ELLIPSIS, tail)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
