use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Errors returned when an amount cannot be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Infinity or NaN; only finite amounts have a digit representation.
    NonFinite(f64),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NonFinite(v) => write!(f, "cannot format non-finite amount {v}"),
        }
    }
}

impl std::error::Error for FormatError {}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Reasons a strict parse rejects its input. The fail-soft `parse` maps
/// all of these to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left after trimming and separator removal.
    Empty,
    /// Not a decimal literal.
    Invalid(String),
    /// A literal such as `inf` or `NaN`.
    NonFinite(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty amount"),
            ParseError::Invalid(text) => write!(f, "invalid amount: {text:?}"),
            ParseError::NonFinite(text) => write!(f, "amount is not finite: {text:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`crate::FormatConfig`].
    Toml { path: PathBuf, message: String },
    /// The values parsed but break an invariant (e.g. a digit separator).
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            ConfigError::Toml { path, message } => {
                write!(f, "cannot parse config {}: {message}", path.display())
            }
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
