use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::coerce_f64;

const MAX_FRACTION_DIGITS: u32 = 6;

/// Colombian peso by default: `$1.000.000`, `$1.234,5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
    group_separator: char,
    decimal_separator: char,
    min_fraction_digits: u32,
    max_fraction_digits: u32
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::cop()
    }
}

impl CurrencyFormat {
    pub fn cop() -> Self {
        Self {
            symbol: "$".to_string(),
            group_separator: '.',
            decimal_separator: ',',
            min_fraction_digits: 0,
            max_fraction_digits: 2
        }
    }

    pub fn with_fraction_digits(mut self, min: u32, max: u32) -> Self {
        self.max_fraction_digits = max.min(MAX_FRACTION_DIGITS);
        self.min_fraction_digits = min.min(self.max_fraction_digits);
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_separators(mut self, group_separator: char, decimal_separator: char) -> Self {
        self.group_separator = group_separator;
        self.decimal_separator = decimal_separator;
        self
    }

    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(self.max_fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let absolute = rounded.abs();

        let integer_text = absolute.trunc().to_string();
        let integer_digits = integer_text.split('.').next().unwrap_or("0");
        let fraction = self.fraction_digits(absolute);

        let mut output = format!("{sign}{}{}", self.symbol, self.group(integer_digits));

        if !fraction.is_empty() {
            output.push(self.decimal_separator);
            output.push_str(&fraction);
        }

        output
    }

    pub fn format_f64(&self, amount: f64) -> String {
        self.format(coerce_f64(amount))
    }

    fn group(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }

        grouped
    }

    fn fraction_digits(&self, absolute: Decimal) -> String {
        if self.max_fraction_digits == 0 {
            return String::new();
        }

        //NOTE: Already rounded to max_fraction_digits
        let fraction_text = absolute.fract().to_string();
        let digits = fraction_text.split('.').nth(1).unwrap_or("");
        let mut padded = format!("{:0<width$}", digits, width = self.max_fraction_digits as usize);
        padded.truncate(self.max_fraction_digits as usize);

        while padded.len() > self.min_fraction_digits as usize && padded.ends_with('0') {
            padded.pop();
        }

        padded
    }
}
