//! Income thresholds of a welfare scheme, rendered for the scheme detail view.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::format::IndianFormatter;

/// Annual household income bounds in rupees. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeLimits {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl IncomeLimits {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// One sentence per bound, minimum first.
    pub fn requirements(&self, fmt: &IndianFormatter) -> Result<Vec<String>, FormatError> {
        let mut lines = Vec::with_capacity(2);
        if let Some(min) = self.min {
            lines.push(format!(
                "Annual income must be at least {}.",
                fmt.format_currency(min)?
            ));
        }
        if let Some(max) = self.max {
            lines.push(format!(
                "Annual income must not exceed {}.",
                fmt.format_currency(max)?
            ));
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_range_has_no_requirements() {
        let limits = IncomeLimits::default();
        assert!(limits.is_unbounded());
        assert!(limits.requirements(&IndianFormatter::default()).unwrap().is_empty());
    }

    #[test]
    fn renders_both_bounds_minimum_first() {
        let limits = IncomeLimits::new(Some(50_000.0), Some(250_000.0));
        assert!(!limits.is_unbounded());
        assert_eq!(
            limits.requirements(&IndianFormatter::default()).unwrap(),
            vec![
                "Annual income must be at least ₹50,000 (50 Thousands).".to_string(),
                "Annual income must not exceed ₹2,50,000 (2.5 Lakhs).".to_string(),
            ]
        );
    }

    #[test]
    fn max_only() {
        let limits = IncomeLimits::new(None, Some(800.0));
        assert_eq!(
            limits.requirements(&IndianFormatter::default()).unwrap(),
            vec!["Annual income must not exceed ₹800.".to_string()]
        );
    }

    #[test]
    fn deserializes_from_scheme_json() {
        let limits: IncomeLimits =
            serde_json::from_str(r#"{"min": null, "max": 100000}"#).unwrap();
        assert_eq!(limits, IncomeLimits::new(None, Some(100_000.0)));
    }

    #[test]
    fn non_finite_bound_is_an_error() {
        let limits = IncomeLimits::new(Some(f64::NAN), None);
        assert!(limits.requirements(&IndianFormatter::default()).is_err());
    }
}
