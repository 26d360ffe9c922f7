//! Formatter configuration
//!
//! Configuration is resolved in order of precedence:
//! 1. An explicit path (the `--config` flag)
//! 2. The `LAKHFMT_CONFIG` environment variable
//! 3. `~/.config/lakhfmt/config.toml`, when it exists
//! 4. Built-in defaults
//!
//! `LAKHFMT_SEPARATOR` and `LAKHFMT_CURRENCY_SYMBOL` are applied on top of
//! whichever source won.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "LAKHFMT_CONFIG";
pub const SEPARATOR_ENV: &str = "LAKHFMT_SEPARATOR";
pub const CURRENCY_SYMBOL_ENV: &str = "LAKHFMT_CURRENCY_SYMBOL";

pub const DEFAULT_SEPARATOR: char = ',';
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_EXAMPLE_PREFIX: &str = "e.g., ";
pub const DEFAULT_PLACEHOLDER_SAMPLES: [&str; 4] = ["1,50,000", "2,50,000", "5,00,000", "10,00,000"];

/// Everything the formatter needs besides the amount itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Character placed between digit groups and stripped when parsing.
    pub separator: char,
    /// Prefix of every currency string.
    pub currency_symbol: String,
    /// Marker placed before placeholder samples.
    pub example_prefix: String,
    /// Candidate incomes shown as form placeholders.
    pub placeholder_samples: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            example_prefix: DEFAULT_EXAMPLE_PREFIX.to_string(),
            placeholder_samples: DEFAULT_PLACEHOLDER_SAMPLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl FormatConfig {
    /// Default user config file: ~/.config/lakhfmt/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("lakhfmt").join("config.toml"))
    }

    /// Parses TOML text. `origin` is only used in error messages.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: FormatConfig = toml::from_str(contents).map_err(|e| ConfigError::Toml {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Resolves the configuration from the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(
            explicit,
            |key| std::env::var(key).ok(),
            Self::config_path().as_deref(),
        )
    }

    /// Precedence core of [`load`](Self::load): `explicit`, then the
    /// `LAKHFMT_CONFIG` path from `lookup`, then `user_file` when it exists,
    /// then defaults. Overrides from `lookup` are applied last.
    pub fn load_with<F>(
        explicit: Option<&Path>,
        lookup: F,
        user_file: Option<&Path>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_path = lookup(CONFIG_ENV).map(PathBuf::from);
        let config = match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::from_file(&path)?
            }
            None => match user_file {
                Some(path) if path.exists() => {
                    debug!(path = %path.display(), "loading user config");
                    Self::from_file(path)?
                }
                _ => Self::default(),
            },
        };
        config.apply_overrides(lookup)
    }

    /// Applies `LAKHFMT_*` overrides fetched through `lookup`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SEPARATOR_ENV) {
            let mut chars = raw.chars();
            self.separator = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "{SEPARATOR_ENV} must be a single character, got {raw:?}"
                    )));
                }
            };
        }
        if let Some(symbol) = lookup(CURRENCY_SYMBOL_ENV) {
            self.currency_symbol = symbol;
        }
        self.validate()?;
        Ok(self)
    }

    /// A separator that could be read as part of a number would make
    /// parsing ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.separator;
        if sep.is_ascii_digit() || sep.is_whitespace() || matches!(sep, '-' | '+' | '.' | 'e' | 'E')
        {
            return Err(ConfigError::Invalid(format!(
                "separator {sep:?} conflicts with numeric syntax"
            )));
        }
        if self.placeholder_samples.is_empty() {
            return Err(ConfigError::Invalid(
                "placeholder_samples must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
