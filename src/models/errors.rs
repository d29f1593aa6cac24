use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

pub type EnvResult<T> = Result<T, EnvError>;

/// Outcome of a failed typed lookup.
///
/// There are exactly two kinds: the variable is absent and no default was
/// given, or the variable is present but its text does not parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    #[error("could not find environment variable \"{key}\"")]
    NotFound { key: String },

    #[error("could not parse environment variable \"{key}\": {source}")]
    InvalidFormat {
        key: String,
        #[source]
        source: ParseError,
    },
}

impl EnvError {
    pub fn not_found(key: impl Into<String>) -> Self {
        EnvError::NotFound { key: key.into() }
    }

    pub fn invalid_format(key: impl Into<String>, source: impl Into<ParseError>) -> Self {
        EnvError::InvalidFormat {
            key: key.into(),
            source: source.into(),
        }
    }

    /// Name of the variable the lookup was made for.
    pub fn key(&self) -> &str {
        match self {
            EnvError::NotFound { key } | EnvError::InvalidFormat { key, .. } => key,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EnvError::NotFound { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, EnvError::InvalidFormat { .. })
    }

    /// Underlying parser failure, if any.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            EnvError::NotFound { .. } => None,
            EnvError::InvalidFormat { source, .. } => Some(source),
        }
    }
}

/// Why a present value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("value is not valid unicode")]
    NotUnicode,

    #[error("{0}")]
    Int(#[from] ParseIntError),

    #[error("\"{value}\" is not an unsigned integer literal")]
    Unsigned { value: String },

    #[error("{0}")]
    Float(#[from] ParseFloatError),

    #[error("\"{value}\" is not parseable as bool value")]
    Bool { value: String },

    #[error("{0}")]
    Duration(#[from] DurationError),
}

/// Rejection reasons of the duration literal parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration \"{0}\"")]
    Invalid(String),

    #[error("missing unit in duration \"{0}\"")]
    MissingUnit(String),

    #[error("unknown unit \"{unit}\" in duration \"{input}\"")]
    UnknownUnit { unit: String, input: String },

    #[error("negative duration \"{0}\" is not representable")]
    Negative(String),

    #[error("duration \"{0}\" overflows")]
    Overflow(String),
}
