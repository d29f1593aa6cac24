use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use envlookup::config::{MapEnv, OutputFormat, ReadEnv, Settings};
use envlookup::models::{LookupReport, ValueKind};
use envlookup::utils::init_tracing;
use envlookup::{must, Env, EnvError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Typed lookups of environment variables",
    long_about = r#"
Typed lookups of environment variables.

Absent variables fall back to --default when given. A present value that
does not parse as the requested type is always an error.

EXIT CODES:
    0   value found (or defaulted)
    1   variable not found and no default given
    2   variable present but malformed
    64  usage error (bad default, unreadable env file)

EXAMPLES:
    envlookup get int NO_OF_STUDIO_ALBUMS --default 1
    envlookup get duration LONGEST_RECORDED_TRACK
    envlookup --env-file .env --isolated --format json get slice RECORD_LABELS
"#
)]
struct Args {
    /// Log level or filter directive (overrides ENVLOOKUP_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON (overrides ENVLOOKUP_JSON_LOGS)
    #[arg(long, global = true)]
    json_logs: bool,

    /// Output format (overrides ENVLOOKUP_OUTPUT)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Dotenv file to load before looking up (overrides ENVLOOKUP_ENV_FILE)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Look up only in the env file, ignoring the process environment
    #[arg(long, global = true)]
    isolated: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one variable as the given type
    Get {
        #[arg(value_enum)]
        kind: ValueKind,

        /// Variable name
        name: String,

        /// Value used when the variable is absent, parsed as KIND
        #[arg(short, long)]
        default: Option<String>,

        /// Abort instead of reporting when the lookup fails
        #[arg(long)]
        require: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(64)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let mut settings = Settings::from_env()?;
    if let Some(level) = args.log_level.clone() {
        settings.log_level = level;
    }
    if args.json_logs {
        settings.json_logs = true;
    }
    if let Some(format) = args.format {
        settings.output = format;
    }
    if let Some(path) = args.env_file.clone() {
        settings.env_file = Some(path);
    }
    settings.validate()?;

    init_tracing(&settings.log_level, settings.json_logs)?;

    if args.isolated {
        let path = settings
            .env_file
            .clone()
            .context("--isolated requires --env-file or ENVLOOKUP_ENV_FILE")?;
        let source = MapEnv::from_dotenv(&path)
            .with_context(|| format!("failed to read env file {}", path.display()))?;
        return execute(&Env::new(source), &settings, args.command);
    }

    if let Some(path) = &settings.env_file {
        dotenvy::from_path(path)
            .with_context(|| format!("failed to load env file {}", path.display()))?;
        tracing::debug!("Loaded env file {}", path.display());
    }

    execute(&Env::system(), &settings, args.command)
}

fn execute<E: ReadEnv>(env: &Env<E>, settings: &Settings, command: Command) -> Result<ExitCode> {
    match command {
        Command::Get {
            kind,
            name,
            default,
            require,
        } => {
            let result = kind
                .evaluate(env, &name, default.as_deref())
                .with_context(|| format!("default for {name} is not a valid {kind:?} value"))?;

            let result = if require {
                Ok(must(result))
            } else {
                result
            };

            let report = LookupReport::new(&name, kind, &result);
            match settings.output {
                OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
                OutputFormat::Text => match &result {
                    Ok(value) => {
                        let rendered = value.to_string();
                        if rendered.ends_with('\n') {
                            print!("{rendered}");
                        } else {
                            println!("{rendered}");
                        }
                    }
                    Err(e) => eprintln!("{e}"),
                },
            }

            Ok(exit_code(result.as_ref().err()))
        }
    }
}

fn exit_code(error: Option<&EnvError>) -> ExitCode {
    match error {
        None => ExitCode::SUCCESS,
        Some(e) if e.is_not_found() => ExitCode::from(1),
        Some(_) => ExitCode::from(2),
    }
}
