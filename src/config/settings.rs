use crate::config::environment::ReadEnv;
use crate::lookup::Env;
use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

pub const LOG_LEVEL_VAR: &str = "ENVLOOKUP_LOG_LEVEL";
pub const JSON_LOGS_VAR: &str = "ENVLOOKUP_JSON_LOGS";
pub const OUTPUT_VAR: &str = "ENVLOOKUP_OUTPUT";
pub const ENV_FILE_VAR: &str = "ENVLOOKUP_ENV_FILE";

/// How the CLI prints a lookup outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings of the `envlookup` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: String,
    pub json_logs: bool,
    pub output: OutputFormat,
    pub env_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
            output: OutputFormat::Text,
            env_file: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_source(&Env::system())
    }

    /// Reads the `ENVLOOKUP_*` variables, falling back to defaults for
    /// absent ones. Malformed values are errors.
    pub fn from_source<E: ReadEnv>(env: &Env<E>) -> Result<Self> {
        let defaults = Settings::default();

        let log_level = env.string(LOG_LEVEL_VAR, Some(defaults.log_level))?;
        let json_logs = env.bool(JSON_LOGS_VAR, Some(defaults.json_logs))?;

        let output = match env.string(OUTPUT_VAR, None) {
            Ok(text) => OutputFormat::from_str(&text, true).map_err(|_| {
                anyhow::anyhow!("{OUTPUT_VAR} must be one of: text, json (got \"{text}\")")
            })?,
            Err(e) if e.is_not_found() => defaults.output,
            Err(e) => return Err(e.into()),
        };

        let env_file = match env.string(ENV_FILE_VAR, None) {
            Ok(path) => Some(PathBuf::from(path)),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e.into()),
        };

        let settings = Settings {
            log_level,
            json_logs,
            output,
            env_file,
        };
        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            anyhow::bail!("log level must not be empty (set {LOG_LEVEL_VAR} or --log-level)");
        }

        if let Err(e) = self.log_level.parse::<tracing_subscriber::EnvFilter>() {
            anyhow::bail!("invalid log level \"{}\": {e}", self.log_level);
        }

        if let Some(path) = &self.env_file {
            if path.as_os_str().is_empty() {
                anyhow::bail!("env file path must not be empty");
            }
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    if cfg!(debug_assertions) {
        "info".to_string()
    } else {
        "warn".to_string()
    }
}
