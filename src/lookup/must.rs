//! Fatal wrappers for mandatory startup configuration.
//!
//! ```no_run
//! let port = envlookup::must_int(envlookup::int("PORT", None));
//! ```

use crate::models::errors::EnvResult;
use std::time::Duration;
use tracing::error;

/// Returns the value or panics with the lookup error.
#[track_caller]
pub fn must<T>(result: EnvResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!(key = e.key(), error = %e, "Required environment variable unusable");
            panic!("{e}")
        }
    }
}

#[track_caller]
pub fn must_string(result: EnvResult<String>) -> String {
    must(result)
}

#[track_caller]
pub fn must_slice(result: EnvResult<Vec<String>>) -> Vec<String> {
    must(result)
}

#[track_caller]
pub fn must_int(result: EnvResult<i32>) -> i32 {
    must(result)
}

#[track_caller]
pub fn must_int64(result: EnvResult<i64>) -> i64 {
    must(result)
}

#[track_caller]
pub fn must_uint64(result: EnvResult<u64>) -> u64 {
    must(result)
}

#[track_caller]
pub fn must_bool(result: EnvResult<bool>) -> bool {
    must(result)
}

#[track_caller]
pub fn must_float64(result: EnvResult<f64>) -> f64 {
    must(result)
}

#[track_caller]
pub fn must_duration(result: EnvResult<Duration>) -> Duration {
    must(result)
}
