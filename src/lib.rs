//! Typed lookups of environment variables.
//!
//! Each lookup takes a variable name and an optional default and returns
//! `Result<T, EnvError>`:
//!
//! ```no_run
//! use std::time::Duration;
//!
//! let albums = envlookup::int("NO_OF_STUDIO_ALBUMS", Some(1))?;
//! let track = envlookup::duration("LONGEST_RECORDED_TRACK", None)?;
//! assert!(track > Duration::ZERO || albums > 0);
//! # Ok::<(), envlookup::EnvError>(())
//! ```
//!
//! Absent variables yield the default, or [`EnvError::NotFound`] without one.
//! Present but malformed variables always yield [`EnvError::InvalidFormat`].

pub mod config;
pub mod lookup;
pub mod models;
pub mod utils;

// Re-export main types for convenience
pub use config::{MapEnv, ReadEnv, Settings, SystemEnv};
pub use lookup::{
    bool, duration, float64, int, int64, must, must_bool, must_duration, must_float64, must_int,
    must_int64, must_slice, must_string, must_uint64, slice, string, uint64, Env,
    LookupResultExt,
};
pub use models::errors::{DurationError, EnvError, EnvResult, ParseError};
