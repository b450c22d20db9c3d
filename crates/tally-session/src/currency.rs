//! Fixed-rate currency conversion.
//!
//! An independent state machine next to the calculator: a static pair table,
//! a canonical digit-string input, and a direction flag. Rates are defined at
//! startup and never change.

use serde::Serialize;
use tally_format::{format_amount, Locale};

/// Maximum digits (excluding the decimal point) accepted in the amount input.
const MAX_INPUT_DIGITS: usize = 12;

/// A fixed exchange-rate relation: `rate` units of `to` per 1 `from`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyPair {
    pub id: &'static str,
    pub rate: f64,
    pub from_symbol: &'static str,
    pub to_symbol: &'static str,
    pub from_name: &'static str,
    pub to_name: &'static str,
}

/// The pair table shipped with the converter.
pub const DEFAULT_PAIRS: &[CurrencyPair] = &[
    CurrencyPair {
        id: "usd-ngn",
        rate: 1580.0,
        from_symbol: "$",
        to_symbol: "\u{20A6}",
        from_name: "US Dollar",
        to_name: "Nigerian Naira",
    },
    CurrencyPair {
        id: "gbp-ngn",
        rate: 2010.0,
        from_symbol: "\u{00A3}",
        to_symbol: "\u{20A6}",
        from_name: "British Pound",
        to_name: "Nigerian Naira",
    },
    CurrencyPair {
        id: "eur-ngn",
        rate: 1720.0,
        from_symbol: "\u{20AC}",
        to_symbol: "\u{20A6}",
        from_name: "Euro",
        to_name: "Nigerian Naira",
    },
    CurrencyPair {
        id: "usd-eur",
        rate: 0.92,
        from_symbol: "$",
        to_symbol: "\u{20AC}",
        from_name: "US Dollar",
        to_name: "Euro",
    },
];

/// Outcome of a conversion: both sides formatted with their unit symbols, or
/// an invalid-input marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Conversion {
    Converted { from_text: String, to_text: String },
    Invalid,
}

#[derive(Debug, Clone)]
pub struct Converter {
    pairs: Vec<CurrencyPair>,
    /// Canonical non-negative decimal string; `"0"` when empty.
    input: String,
    selected: usize,
    swapped: bool,
    locale: Locale,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Converter {
    pub fn new(locale: Locale) -> Self {
        Self::with_pairs(DEFAULT_PAIRS.to_vec(), locale)
    }

    pub fn with_pairs(pairs: Vec<CurrencyPair>, locale: Locale) -> Self {
        assert!(!pairs.is_empty(), "converter needs at least one pair");
        Self {
            pairs,
            input: "0".to_string(),
            selected: 0,
            swapped: false,
            locale,
        }
    }

    pub fn pairs(&self) -> &[CurrencyPair] {
        &self.pairs
    }

    pub fn current_pair(&self) -> &CurrencyPair {
        &self.pairs[self.selected]
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn swapped(&self) -> bool {
        self.swapped
    }

    /// Unit names in the active conversion direction.
    pub fn labels(&self) -> (&'static str, &'static str) {
        let pair = self.current_pair();
        if self.swapped {
            (pair.to_name, pair.from_name)
        } else {
            (pair.from_name, pair.to_name)
        }
    }

    /// Select a pair by id, resetting direction and input. Unknown ids are
    /// ignored.
    pub fn select_pair(&mut self, id: &str) -> bool {
        match self.pairs.iter().position(|pair| pair.id == id) {
            Some(index) => {
                self.selected = index;
                self.swapped = false;
                self.input = "0".to_string();
                true
            }
            None => {
                log::debug!("unknown currency pair {id:?}");
                false
            }
        }
    }

    /// Reverse the conversion direction.
    pub fn swap(&mut self) {
        self.swapped = !self.swapped;
    }

    /// Append a digit or decimal point to the amount. At most one `.`, at
    /// most [`MAX_INPUT_DIGITS`] digits.
    pub fn push_digit(&mut self, ch: char) -> bool {
        if ch == '.' {
            if self.input.contains('.') {
                return false;
            }
            self.input.push('.');
            return true;
        }
        if !ch.is_ascii_digit() {
            return false;
        }
        let digits = self.input.chars().filter(|c| c.is_ascii_digit()).count();
        if digits >= MAX_INPUT_DIGITS {
            log::debug!("amount input at digit cap");
            return false;
        }
        if self.input == "0" {
            self.input.clear();
        }
        self.input.push(ch);
        true
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        if self.input.is_empty() {
            self.input.push('0');
        }
    }

    pub fn clear(&mut self) {
        self.input = "0".to_string();
    }

    /// Convert the current amount: forward multiplies by the pair rate,
    /// swapped divides. Both sides render with two fraction digits and the
    /// unit symbol.
    pub fn convert(&self) -> Conversion {
        let Ok(amount) = self.input.parse::<f64>() else {
            return Conversion::Invalid;
        };
        let pair = self.current_pair();
        let (from_symbol, to_symbol, converted) = if self.swapped {
            (pair.to_symbol, pair.from_symbol, amount / pair.rate)
        } else {
            (pair.from_symbol, pair.to_symbol, amount * pair.rate)
        };
        Conversion::Converted {
            from_text: format!("{from_symbol} {}", format_amount(amount, &self.locale)),
            to_text: format!("{to_symbol} {}", format_amount(converted, &self.locale)),
        }
    }
}
