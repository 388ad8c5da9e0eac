//! Balance formatting and parsing.
//!
//! Balances are integer minor units (cents). Every operation truncates
//! toward zero, so a displayed balance never exceeds the stored one.

use crate::error::{Error, Result};

/// Suffix ladder in steps of 1000, paired with the power of ten of one
/// suffixed unit. Matched case-insensitively on parse.
const SUFFIXES: [(&str, u32); 13] = [
    ("", 0),
    ("k", 3),
    ("M", 6),
    ("B", 9),
    ("T", 12),
    ("Q", 15),
    ("QQ", 18),
    ("S", 21),
    ("SS", 24),
    ("O", 27),
    ("N", 30),
    ("D", 33),
    ("UD", 36),
];

/// Format a balance in compact suffixed form, like `1.23k` or `45.60M`.
///
/// Values below 1000 units are rendered plain with two decimal places.
#[must_use]
pub fn format_suffixed(cents: i128) -> String {
    if cents == 0 {
        return "0.00".to_string();
    }

    let abs = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };

    // Largest suffix whose threshold the value reaches.
    let mut idx = SUFFIXES.len() - 1;
    while idx > 0 {
        if abs >= 10u128.pow(SUFFIXES[idx].1 + 2) {
            break;
        }
        idx -= 1;
    }
    let (suffix, power) = SUFFIXES[idx];

    let scaled = abs / 10u128.pow(power);
    format!("{sign}{}.{:02}{suffix}", scaled / 100, scaled % 100)
}

/// Format a balance in full, with thousands separators and two decimal
/// places, like `1,234,567.89`.
#[must_use]
pub fn format_raw(cents: i128) -> String {
    let abs = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Format a balance with only the decimal places it needs: whole values
/// drop the fraction, and trailing zeros are stripped.
#[must_use]
pub fn format_compact(cents: i128) -> String {
    let abs = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    let frac = abs % 100;

    if frac == 0 {
        format!("{sign}{}", abs / 100)
    } else if frac % 10 == 0 {
        format!("{sign}{}.{}", abs / 100, frac / 10)
    } else {
        format!("{sign}{}.{frac:02}", abs / 100)
    }
}

/// Parse a suffixed balance string like `1.23k` or `45M` back to cents.
///
/// The suffix is matched case-insensitively; fraction digits finer than one
/// cent at the suffix's scale are truncated. Empty input, malformed numbers,
/// unknown suffixes, and values overflowing `i128` are rejected.
pub fn parse_suffixed(input: &str) -> Result<i128> {
    let err = || Error::InvalidBalance(input.to_string());

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(err());
    }

    // Trailing alphabetic run is the suffix; everything before it the number.
    let suffix_len = trimmed
        .chars()
        .rev()
        .take_while(char::is_ascii_alphabetic)
        .count();
    let (number, suffix) = trimmed.split_at(trimmed.len() - suffix_len);

    let power = SUFFIXES
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(suffix))
        .map(|&(_, p)| p)
        .ok_or_else(err)?;

    let (digits, negative) = match number.as_bytes().first() {
        Some(b'-') => (&number[1..], true),
        Some(b'+') => (&number[1..], false),
        _ => (number, false),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((_, "")) => return Err(err()),
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(err());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(err());
    }

    // One suffixed unit is 10^(power + 2) cents.
    let scale = 10i128.checked_pow(power + 2).ok_or_else(err)?;

    let mut cents: i128 = 0;
    for b in int_part.bytes() {
        cents = cents
            .checked_mul(10)
            .and_then(|v| v.checked_add(i128::from(b - b'0')))
            .ok_or_else(err)?;
    }
    cents = cents.checked_mul(scale).ok_or_else(err)?;

    // Fraction digits contribute at descending weights; anything finer than
    // one cent is truncated.
    let mut weight = scale / 10;
    for b in frac_part.bytes() {
        if weight == 0 {
            break;
        }
        cents = cents
            .checked_add(i128::from(b - b'0') * weight)
            .ok_or_else(err)?;
        weight /= 10;
    }

    Ok(if negative { -cents } else { cents })
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
