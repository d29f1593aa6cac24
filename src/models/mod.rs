pub mod errors;
pub mod report;

pub use errors::{DurationError, EnvError, EnvResult, ParseError};
pub use report::{ErrorKind, ErrorReport, LookupReport, TypedValue, ValueKind};
