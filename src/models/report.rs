use crate::config::environment::ReadEnv;
use crate::lookup::{parse_bool, parse_duration, parse_uint, split_list, Env};
use crate::models::errors::{EnvError, EnvResult, ParseError};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Target type of a lookup requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Slice,
    Int,
    Int64,
    Uint64,
    Bool,
    Float64,
    Duration,
}

/// A looked-up value of any supported type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    String(String),
    Slice(Vec<String>),
    Int(i32),
    Int64(i64),
    Uint64(u64),
    Bool(bool),
    Float64(f64),
    Duration(Duration),
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(s) => f.write_str(s),
            TypedValue::Slice(items) => {
                for item in items {
                    writeln!(f, "{item}")?;
                }
                Ok(())
            }
            TypedValue::Int(v) => write!(f, "{v}"),
            TypedValue::Int64(v) => write!(f, "{v}"),
            TypedValue::Uint64(v) => write!(f, "{v}"),
            TypedValue::Bool(v) => write!(f, "{v}"),
            TypedValue::Float64(v) => write!(f, "{v}"),
            TypedValue::Duration(d) => write!(f, "{d:?}"),
        }
    }
}

impl ValueKind {
    /// Runs the lookup for this kind. `default` is parsed with the same
    /// rules as the variable; a malformed default is returned as the outer
    /// error.
    pub fn evaluate<E: ReadEnv>(
        self,
        env: &Env<E>,
        key: &str,
        default: Option<&str>,
    ) -> Result<EnvResult<TypedValue>, ParseError> {
        let result = match self {
            ValueKind::String => env
                .string(key, default.map(str::to_string))
                .map(TypedValue::String),
            ValueKind::Slice => env
                .slice(key, default.map(split_list))
                .map(TypedValue::Slice),
            ValueKind::Int => env
                .int(key, default.map(str::parse::<i32>).transpose()?)
                .map(TypedValue::Int),
            ValueKind::Int64 => env
                .int64(key, default.map(str::parse::<i64>).transpose()?)
                .map(TypedValue::Int64),
            ValueKind::Uint64 => env
                .uint64(key, default.map(parse_uint).transpose()?)
                .map(TypedValue::Uint64),
            ValueKind::Bool => env
                .bool(key, default.map(parse_bool).transpose()?)
                .map(TypedValue::Bool),
            ValueKind::Float64 => env
                .float64(key, default.map(str::parse::<f64>).transpose()?)
                .map(TypedValue::Float64),
            ValueKind::Duration => env
                .duration(key, default.map(parse_duration).transpose()?)
                .map(TypedValue::Duration),
        };
        Ok(result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&EnvError> for ErrorReport {
    fn from(err: &EnvError) -> Self {
        let kind = if err.is_not_found() {
            ErrorKind::NotFound
        } else {
            ErrorKind::InvalidFormat
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// Serializable outcome of one lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupReport {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TypedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl LookupReport {
    pub fn new(key: &str, kind: ValueKind, result: &EnvResult<TypedValue>) -> Self {
        let (value, error) = match result {
            Ok(value) => (Some(value.clone()), None),
            Err(err) => (None, Some(ErrorReport::from(err))),
        };
        Self {
            key: key.to_string(),
            kind,
            value,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::MapEnv;

    fn env() -> Env<MapEnv> {
        Env::new(
            MapEnv::new()
                .with("NO_OF_STUDIO_ALBUMS", "51")
                .with("LONGEST_RECORDED_TRACK", "27m32s")
                .with("RECORD_LABELS", "Impulse!,Atlantic"),
        )
    }

    #[test]
    fn test_evaluate_each_kind() {
        let env = env();
        assert_eq!(
            ValueKind::Int.evaluate(&env, "NO_OF_STUDIO_ALBUMS", None).unwrap(),
            Ok(TypedValue::Int(51))
        );
        assert_eq!(
            ValueKind::Uint64.evaluate(&env, "NO_OF_STUDIO_ALBUMS", None).unwrap(),
            Ok(TypedValue::Uint64(51))
        );
        assert_eq!(
            ValueKind::Duration
                .evaluate(&env, "LONGEST_RECORDED_TRACK", None)
                .unwrap(),
            Ok(TypedValue::Duration(Duration::from_secs(1652)))
        );
        assert_eq!(
            ValueKind::Slice.evaluate(&env, "RECORD_LABELS", None).unwrap(),
            Ok(TypedValue::Slice(vec!["Impulse!".into(), "Atlantic".into()]))
        );
    }

    #[test]
    fn test_evaluate_parses_default() {
        let env = env();
        assert_eq!(
            ValueKind::Bool.evaluate(&env, "MISSING", Some("TRUE")).unwrap(),
            Ok(TypedValue::Bool(true))
        );
        assert_eq!(
            ValueKind::Float64.evaluate(&env, "MISSING", Some("2.5")).unwrap(),
            Ok(TypedValue::Float64(2.5))
        );
        assert!(ValueKind::Int.evaluate(&env, "MISSING", Some("ABC")).is_err());
        assert!(ValueKind::Duration.evaluate(&env, "MISSING", Some("5")).is_err());
    }

    #[test]
    fn test_report_json_shape() {
        let env = env();
        let result = ValueKind::Int.evaluate(&env, "NO_OF_STUDIO_ALBUMS", None).unwrap();
        let report = LookupReport::new("NO_OF_STUDIO_ALBUMS", ValueKind::Int, &result);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"key": "NO_OF_STUDIO_ALBUMS", "type": "int", "value": 51})
        );

        let result = ValueKind::Bool.evaluate(&env, "MISSING", None).unwrap();
        let report = LookupReport::new("MISSING", ValueKind::Bool, &result);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "key": "MISSING",
                "type": "bool",
                "error": {
                    "kind": "not_found",
                    "message": "could not find environment variable \"MISSING\""
                }
            })
        );
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(TypedValue::Int(51).to_string(), "51");
        assert_eq!(
            TypedValue::Duration(Duration::from_secs(1652)).to_string(),
            "1652s"
        );
        assert_eq!(
            TypedValue::Slice(vec!["a".into(), "b".into()]).to_string(),
            "a\nb\n"
        );
    }
}
