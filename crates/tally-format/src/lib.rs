#![forbid(unsafe_code)]

//! Display formatting for calculator results and expressions.
//!
//! Results are rendered with locale separators in one of three shapes:
//! - integers below 1e15: grouped digits, no decimal point
//! - magnitudes at or above 1e15, or nonzero below 1e-4: exponential notation
//!   with six fractional mantissa digits and a signed exponent
//! - everything else: rounded to 12 significant digits (suppressing binary
//!   floating-point noise), grouped, at most 10 fractional digits
//!
//! [`format_expression`] substitutes display glyphs (`×ばつ`, `÷`, `−`) for the
//! ASCII input operators; the stored expression text is never touched.

/// Decimal/thousands separator pair used for plain number rendering.
///
/// Only the separators are carried: date/time conventions are out of scope
/// for a calculator display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub decimal_separator: char,
    pub thousands_separator: char,
}

pub static EN_US: Locale = Locale {
    decimal_separator: '.',
    thousands_separator: ',',
};

impl Default for Locale {
    fn default() -> Self {
        EN_US
    }
}

/// Threshold above which integers switch to exponential notation.
const EXPONENTIAL_UPPER: f64 = 1e15;
/// Nonzero magnitudes below this render exponentially.
const EXPONENTIAL_LOWER: f64 = 1e-4;
/// Significant digits kept for non-integer results.
const RESULT_SIG_DIGITS: i32 = 12;
/// Maximum fractional digits rendered for non-integer results.
const RESULT_MAX_FRAC: usize = 10;
/// Fractional mantissa digits in exponential notation.
const EXPONENTIAL_FRAC: usize = 6;

/// Format an evaluated result for the calculator display.
///
/// The input must be finite; non-finite values are surfaced by the session as
/// `Error`/`Infinity` strings before formatting is reached.
pub fn format_result(value: f64, locale: &Locale) -> String {
    debug_assert!(value.is_finite(), "non-finite values are not formattable");
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if value.fract() == 0.0 && magnitude < EXPONENTIAL_UPPER {
        return format_integer(value, locale);
    }
    if magnitude >= EXPONENTIAL_UPPER || magnitude < EXPONENTIAL_LOWER {
        return format_exponential(value, locale);
    }

    let rounded = round_to_significant(value, RESULT_SIG_DIGITS);
    if rounded.fract() == 0.0 {
        // Significant-digit rounding can collapse to a whole number
        // (e.g. 0.1 + 0.2).
        return format_integer(rounded, locale);
    }

    let negative = rounded < 0.0;
    let text = format!("{:.prec$}", rounded.abs(), prec = RESULT_MAX_FRAC);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, locale.thousands_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Format a currency side: exactly two fractional digits, grouped.
pub fn format_amount(value: f64, locale: &Locale) -> String {
    let negative = value < 0.0;
    let text = format!("{:.2}", value.abs());
    let (int_part, frac_part) = text
        .split_once('.')
        .unwrap_or((text.as_str(), "00"));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, locale.thousands_separator));
    out.push(locale.decimal_separator);
    out.push_str(frac_part);
    out
}

/// Substitute display glyphs for the ASCII operators.
///
/// Cosmetic only: the returned string is for rendering, not re-parsing.
pub fn format_expression(expression: &str) -> String {
    expression
        .chars()
        .map(|ch| match ch {
            '*' => '\u{00D7}',
            '/' => '\u{00F7}',
            '-' => '\u{2212}',
            other => other,
        })
        .collect()
}

/// Parse a formatted result string back into a number.
///
/// Grouping separators are stripped and the locale decimal separator is
/// normalized; this is the history-recall path, so anything that does not
/// parse after normalization yields `None`.
pub fn parse_number(text: &str, locale: &Locale) -> Option<f64> {
    let mut normalized = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch == locale.thousands_separator {
            continue;
        }
        if ch == locale.decimal_separator {
            normalized.push('.');
        } else {
            normalized.push(ch);
        }
    }
    normalized.parse().ok()
}

fn format_integer(value: f64, locale: &Locale) -> String {
    let int = value as i128;
    let digits = int.unsigned_abs().to_string();
    let grouped = group_thousands(&digits, locale.thousands_separator);
    if int < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_exponential(value: f64, locale: &Locale) -> String {
    let text = format!("{:.prec$e}", value, prec = EXPONENTIAL_FRAC);
    let (mantissa, exponent) = match text.split_once('e') {
        Some((m, e)) => (m, e),
        None => (text.as_str(), "0"),
    };
    let mantissa = if locale.decimal_separator == '.' {
        mantissa.to_string()
    } else {
        mantissa.replace('.', &locale.decimal_separator.to_string())
    };
    if exponent.starts_with('-') {
        format!("{mantissa}e{exponent}")
    } else {
        format!("{mantissa}e+{exponent}")
    }
}

fn round_to_significant(value: f64, digits: i32) -> f64 {
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
