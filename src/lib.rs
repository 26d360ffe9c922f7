//! Indian numbering system formatting for rupee amounts.
//!
//! Digits are grouped lakh/crore style: the last three digits form one group
//! and every group to their left holds two (`1,00,00,000`). Parsing is the
//! fail-soft inverse used by live form fields, so `parse(format(x)) == x` for
//! every integer of up to 15 digits.
//!
//! The free functions use [`FormatConfig::default`]; build an
//! [`IndianFormatter`] for a different separator, symbol or sample set.

pub mod config;
pub mod currency;
pub mod error;
pub mod format;
pub mod helpers;
pub mod limits;
mod placeholder;

use std::sync::LazyLock;

pub use config::FormatConfig;
pub use currency::UnitLabel;
pub use error::{ConfigError, FormatError, ParseError};
pub use format::IndianFormatter;
pub use limits::IncomeLimits;

static DEFAULT_FORMATTER: LazyLock<IndianFormatter> = LazyLock::new(IndianFormatter::default);

/// `1234567.0` -> `"12,34,567"`.
pub fn format_indian(amount: f64) -> Result<String, FormatError> {
    DEFAULT_FORMATTER.format(amount)
}

/// Fail-soft parse; anything unreadable becomes `0.0`.
pub fn parse_indian<'a>(text: impl Into<Option<&'a str>>) -> f64 {
    DEFAULT_FORMATTER.parse(text)
}

/// `250000.0` -> `"₹2,50,000 (2.5 Lakhs)"`.
pub fn format_currency(amount: f64) -> Result<String, FormatError> {
    DEFAULT_FORMATTER.format_currency(amount)
}

/// `"e.g., 2,50,000"`, picked at random from the default samples.
pub fn placeholder_text() -> String {
    DEFAULT_FORMATTER.placeholder_text()
}
