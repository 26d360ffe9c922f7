//! Indian digit grouping for amounts, and the fail-soft parser that undoes it.

use tracing::debug;

use crate::config::FormatConfig;
use crate::error::{FormatError, ParseError};
use crate::helpers::group_indian;

/// Stateless formatter over a [`FormatConfig`]. Cheap to share across
/// threads; every method takes `&self`.
#[derive(Debug, Clone, Default)]
pub struct IndianFormatter {
    config: FormatConfig,
}

impl IndianFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Renders `amount` with lakh/crore grouping.
    ///
    /// Only the integer part is grouped; a fractional part is appended
    /// after `.` as-is (`1234567.25` -> `"12,34,567.25"`).
    ///
    /// ```
    /// use lakhfmt::IndianFormatter;
    ///
    /// let fmt = IndianFormatter::default();
    /// assert_eq!(fmt.format(10_000_000.0).unwrap(), "1,00,00,000");
    /// assert_eq!(fmt.format(-100_000.0).unwrap(), "-1,00,000");
    /// ```
    pub fn format(&self, amount: f64) -> Result<String, FormatError> {
        if !amount.is_finite() {
            return Err(FormatError::NonFinite(amount));
        }
        Ok(self.format_finite(amount))
    }

    pub(crate) fn format_finite(&self, amount: f64) -> String {
        if amount == 0.0 {
            return "0".to_string();
        }

        // f64's Display never switches to exponent notation
        let magnitude = amount.abs().to_string();
        let (integer, fraction) = match magnitude.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (magnitude.as_str(), None),
        };

        let mut out = String::with_capacity(magnitude.len() + magnitude.len() / 2 + 1);
        if amount < 0.0 {
            out.push('-');
        }
        out.push_str(&group_indian(integer, self.config.separator));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Strict parse: strips separators and surrounding whitespace, then
    /// reads a decimal literal.
    pub fn try_parse(&self, text: &str) -> Result<f64, ParseError> {
        let cleaned: String = text
            .trim()
            .chars()
            .filter(|&c| c != self.config.separator)
            .collect();
        if cleaned.is_empty() {
            return Err(ParseError::Empty);
        }

        let value: f64 = cleaned
            .parse()
            .map_err(|_| ParseError::Invalid(text.to_string()))?;
        if !value.is_finite() {
            return Err(ParseError::NonFinite(text.to_string()));
        }
        Ok(value)
    }

    /// Fail-soft parse for live form input: absent, empty or invalid text
    /// yields `0.0`.
    ///
    /// ```
    /// use lakhfmt::IndianFormatter;
    ///
    /// let fmt = IndianFormatter::default();
    /// assert_eq!(fmt.parse("1,00,000"), 100_000.0);
    /// assert_eq!(fmt.parse("abc"), 0.0);
    /// assert_eq!(fmt.parse(None::<&str>), 0.0);
    /// ```
    pub fn parse<'a>(&self, text: impl Into<Option<&'a str>>) -> f64 {
        let Some(text) = text.into() else {
            return 0.0;
        };
        match self.try_parse(text) {
            Ok(value) => value,
            Err(err) => {
                debug!(input = text, error = %err, "amount parse fell back to zero");
                0.0
            }
        }
    }

    /// Re-groups whatever the user typed: `format(parse(text))`.
    pub fn normalize(&self, text: &str) -> String {
        // parse only ever yields finite values
        self.format_finite(self.parse(text))
    }
}
