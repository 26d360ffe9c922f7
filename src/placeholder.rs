//! Example incomes for empty form fields.

use rand::Rng;

use crate::format::IndianFormatter;

impl IndianFormatter {
    /// Example income for an empty form field, e.g. `"e.g., 2,50,000"`.
    /// Picks uniformly from the configured samples.
    pub fn placeholder_text(&self) -> String {
        self.placeholder_text_with(&mut rand::rng())
    }

    /// Same as [`placeholder_text`](Self::placeholder_text) with a caller
    /// supplied RNG; seed it for reproducible output.
    pub fn placeholder_text_with<R: Rng>(&self, rng: &mut R) -> String {
        let config = self.config();
        // empty only for a config that skipped validate()
        let sample = match config.placeholder_samples.len() {
            0 => "",
            n => config.placeholder_samples[rng.random_range(0..n)].as_str(),
        };
        format!("{}{}", config.example_prefix, sample)
    }
}
