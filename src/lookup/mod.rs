//! Typed lookups over a [`ReadEnv`] source.
//!
//! Every lookup follows the same rules:
//!
//! | Variable | Default | Result |
//! |----------|---------|--------|
//! | absent   | `None`  | `Err(NotFound)` |
//! | absent   | `Some(d)` | `Ok(d)` |
//! | present, parses | any | `Ok(value)` |
//! | present, malformed | any | `Err(InvalidFormat)` |
//!
//! A default never masks a malformed value.

pub mod duration;
pub mod must;
pub mod parse;

use crate::config::environment::{ReadEnv, SystemEnv};
use crate::models::errors::{EnvError, EnvResult, ParseError};
use std::env::VarError;
use std::time::Duration;
use tracing::{debug, trace};

pub use duration::parse_duration;
pub use must::*;
pub use parse::{parse_bool, parse_uint, split_list};

/// Typed accessor bound to one environment source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env<E = SystemEnv> {
    source: E,
}

impl Env<SystemEnv> {
    /// Accessor over the process environment.
    pub fn system() -> Self {
        Self { source: SystemEnv }
    }
}

impl<E: ReadEnv> Env<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &E {
        &self.source
    }

    /// Shared lookup template; `parse` turns present text into `T`.
    pub fn lookup<T, F>(&self, key: &str, default: Option<T>, parse: F) -> EnvResult<T>
    where
        F: FnOnce(&str) -> Result<T, ParseError>,
    {
        match self.source.var(key) {
            Ok(text) => {
                trace!(key, "Read environment variable");
                parse(&text).map_err(|source| {
                    debug!(key, error = %source, "Rejected malformed environment variable");
                    EnvError::invalid_format(key, source)
                })
            }
            Err(VarError::NotUnicode(_)) => {
                debug!(key, "Environment variable is not valid unicode");
                Err(EnvError::invalid_format(key, ParseError::NotUnicode))
            }
            Err(VarError::NotPresent) => match default {
                Some(value) => {
                    debug!(key, "Environment variable not set, using default");
                    Ok(value)
                }
                None => {
                    trace!(key, "Environment variable not set");
                    Err(EnvError::not_found(key))
                }
            },
        }
    }

    /// Raw text, which may be empty.
    pub fn string(&self, key: &str, default: Option<String>) -> EnvResult<String> {
        self.lookup(key, default, |text| Ok(text.to_string()))
    }

    /// Comma-separated list.
    pub fn slice(&self, key: &str, default: Option<Vec<String>>) -> EnvResult<Vec<String>> {
        self.lookup(key, default, |text| Ok(split_list(text)))
    }

    /// 32-bit; values outside `i32` are InvalidFormat, use [`Env::int64`].
    pub fn int(&self, key: &str, default: Option<i32>) -> EnvResult<i32> {
        self.lookup(key, default, |text| Ok(text.parse::<i32>()?))
    }

    pub fn int64(&self, key: &str, default: Option<i64>) -> EnvResult<i64> {
        self.lookup(key, default, |text| Ok(text.parse::<i64>()?))
    }

    /// Accepts `0x`, `0o`, `0b` and leading-`0` octal forms.
    pub fn uint64(&self, key: &str, default: Option<u64>) -> EnvResult<u64> {
        self.lookup(key, default, parse_uint)
    }

    pub fn bool(&self, key: &str, default: Option<bool>) -> EnvResult<bool> {
        self.lookup(key, default, parse_bool)
    }

    pub fn float64(&self, key: &str, default: Option<f64>) -> EnvResult<f64> {
        self.lookup(key, default, |text| Ok(text.parse::<f64>()?))
    }

    /// Duration literal such as `27m32s`.
    pub fn duration(&self, key: &str, default: Option<Duration>) -> EnvResult<Duration> {
        self.lookup(key, default, |text| Ok(parse_duration(text)?))
    }
}

/// Looks up a string in the process environment.
pub fn string(key: &str, default: Option<String>) -> EnvResult<String> {
    Env::system().string(key, default)
}

/// Looks up a comma-separated list in the process environment.
pub fn slice(key: &str, default: Option<Vec<String>>) -> EnvResult<Vec<String>> {
    Env::system().slice(key, default)
}

/// Looks up an `i32` in the process environment. Values outside the
/// 32-bit range are InvalidFormat.
pub fn int(key: &str, default: Option<i32>) -> EnvResult<i32> {
    Env::system().int(key, default)
}

/// Looks up an `i64` in the process environment.
pub fn int64(key: &str, default: Option<i64>) -> EnvResult<i64> {
    Env::system().int64(key, default)
}

/// Looks up a `u64` in the process environment.
pub fn uint64(key: &str, default: Option<u64>) -> EnvResult<u64> {
    Env::system().uint64(key, default)
}

/// Looks up a bool in the process environment.
pub fn bool(key: &str, default: Option<bool>) -> EnvResult<bool> {
    Env::system().bool(key, default)
}

/// Looks up an `f64` in the process environment.
pub fn float64(key: &str, default: Option<f64>) -> EnvResult<f64> {
    Env::system().float64(key, default)
}

/// Looks up a duration in the process environment.
pub fn duration(key: &str, default: Option<Duration>) -> EnvResult<Duration> {
    Env::system().duration(key, default)
}

/// Converts a lookup result into a `(value, error)` pair.
pub trait LookupResultExt<T> {
    /// On error the value is `T::default()`.
    fn into_pair(self) -> (T, Option<EnvError>);
}

impl<T: Default> LookupResultExt<T> for EnvResult<T> {
    fn into_pair(self) -> (T, Option<EnvError>) {
        match self {
            Ok(value) => (value, None),
            Err(err) => (T::default(), Some(err)),
        }
    }
}
