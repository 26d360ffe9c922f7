//! Rupee strings with a lakh/crore/thousand phrase, e.g. `₹2,50,000 (2.5 Lakhs)`.

use tracing::trace;

use crate::error::FormatError;
use crate::format::IndianFormatter;
use crate::helpers::truncate_hundredths;

pub const THOUSAND: f64 = 1_000.0;
pub const LAKH: f64 = 100_000.0;
pub const CRORE: f64 = 10_000_000.0;

/// Magnitude word attached to a currency string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitLabel {
    Thousand,
    Lakh,
    Crore,
}

impl UnitLabel {
    pub const fn divisor(self) -> f64 {
        match self {
            UnitLabel::Thousand => THOUSAND,
            UnitLabel::Lakh => LAKH,
            UnitLabel::Crore => CRORE,
        }
    }

    pub const fn singular(self) -> &'static str {
        match self {
            UnitLabel::Thousand => "Thousand",
            UnitLabel::Lakh => "Lakh",
            UnitLabel::Crore => "Crore",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            UnitLabel::Thousand => "Thousands",
            UnitLabel::Lakh => "Lakhs",
            UnitLabel::Crore => "Crores",
        }
    }

    /// Largest unit whose threshold the signed amount reaches. Negative
    /// amounts never reach one.
    pub fn for_amount(amount: f64) -> Option<Self> {
        if amount >= CRORE {
            Some(UnitLabel::Crore)
        } else if amount >= LAKH {
            Some(UnitLabel::Lakh)
        } else if amount >= THOUSAND {
            Some(UnitLabel::Thousand)
        } else {
            None
        }
    }
}

impl IndianFormatter {
    /// The unit phrase shown next to an income field (`"2.5 Lakhs"`), or
    /// `None` below one thousand.
    ///
    /// The unit count is truncated, never rounded, to two decimals. Only a
    /// count of exactly one takes the singular word.
    pub fn unit_phrase(&self, amount: f64) -> Result<Option<String>, FormatError> {
        if !amount.is_finite() {
            return Err(FormatError::NonFinite(amount));
        }
        let Some(unit) = UnitLabel::for_amount(amount) else {
            return Ok(None);
        };

        let count = truncate_hundredths(amount / unit.divisor());
        trace!(amount, ?unit, count, "selected unit label");
        let phrase = if count == 1.0 {
            format!("1 {}", unit.singular())
        } else {
            format!("{} {}", self.format_finite(count), unit.plural())
        };
        Ok(Some(phrase))
    }

    /// `<symbol><grouped amount>` plus ` (<unit phrase>)` when one applies.
    ///
    /// ```
    /// use lakhfmt::IndianFormatter;
    ///
    /// let fmt = IndianFormatter::default();
    /// assert_eq!(fmt.format_currency(250_000.0).unwrap(), "₹2,50,000 (2.5 Lakhs)");
    /// assert_eq!(fmt.format_currency(-50_000.0).unwrap(), "₹-50,000");
    /// ```
    pub fn format_currency(&self, amount: f64) -> Result<String, FormatError> {
        let symbol = &self.config().currency_symbol;
        let base = self.format(amount)?;
        match self.unit_phrase(amount)? {
            Some(phrase) => Ok(format!("{symbol}{base} ({phrase})")),
            None => Ok(format!("{symbol}{base}")),
        }
    }
}
