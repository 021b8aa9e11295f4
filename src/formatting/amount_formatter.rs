use alloy_primitives::U256;
use error_stack::{Report, Result, ResultExt};
use thiserror::Error;

/// Decimals of ether, used when a raw value carries no precision of its own.
pub const ETHER_DECIMALS: u32 = 18;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse base-unit amount")]
pub struct AmountParseError;

/// Parses an unsigned base-10 amount expressed in the smallest unit of a token. A leading `+` is
/// accepted; negative amounts are not.
pub fn parse_base_units(value: &str) -> Result<U256, AmountParseError> {
    let value = value.strip_prefix('+').unwrap_or(value);
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Report::new(AmountParseError)
            .attach_printable(format!("Not a base-10 integer: {value:?}")));
    }

    U256::from_str_radix(value, 10)
        .change_context(AmountParseError)
        .attach_printable_lazy(|| format!("Value: {value:?}"))
}

/// Renders base-unit integers as human readable decimal numbers.
///
/// The fraction is truncated (never rounded) to `maximum_fraction_digits`, trailing zeros are
/// trimmed down to `minimum_fraction_digits`, and the integer part is grouped in threes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormatter {
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub decimal_separator: Box<str>,
    pub grouping_separator: Box<str>,
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::short()
    }
}

impl AmountFormatter {
    /// Compact formatter for lists.
    pub fn short() -> Self {
        Self {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            decimal_separator: ".".into(),
            grouping_separator: ",".into(),
        }
    }

    /// Formatter keeping every significant digit of an 18-decimal token.
    pub fn full() -> Self {
        Self {
            maximum_fraction_digits: 22,
            ..Self::short()
        }
    }

    pub fn format(&self, value: U256, decimals: u32) -> String {
        let decimals = decimals as usize;
        let digits = value.to_string();

        let (integer_digits, fraction_digits) = if decimals < digits.len() {
            let (integer, fraction) = digits.split_at(digits.len() - decimals);
            (integer.to_owned(), fraction.to_owned())
        } else {
            // Only the first `maximum_fraction_digits` of the fraction are ever shown, so the
            // leading zeros are never materialized past that point.
            let leading_zeros = decimals - digits.len();
            let fraction = if leading_zeros >= self.maximum_fraction_digits {
                String::new()
            } else {
                "0".repeat(leading_zeros) + &digits
            };
            ("0".to_owned(), fraction)
        };

        let integer = self.group(&integer_digits);
        let fraction = self.fraction(&fraction_digits);

        if fraction.is_empty() {
            integer
        } else {
            format!("{integer}{}{fraction}", self.decimal_separator)
        }
    }

    fn fraction(&self, digits: &str) -> String {
        let truncated = &digits[..digits.len().min(self.maximum_fraction_digits)];
        let mut fraction = truncated.trim_end_matches('0').to_owned();
        let padding = self.minimum_fraction_digits.saturating_sub(fraction.len());
        fraction.extend(std::iter::repeat('0').take(padding));
        fraction
    }

    fn group(&self, digits: &str) -> String {
        if self.grouping_separator.is_empty() {
            return digits.to_owned();
        }

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, c) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push_str(&self.grouping_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}
