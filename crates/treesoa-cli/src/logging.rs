//! Log configuration and subscriber setup.
//!
//! Precedence, lowest first: defaults (`warn`, text), `TREESOA_LOG_LEVEL` /
//! `TREESOA_LOG_FORMAT`, then `--log-level` / `--log-format`. A `RUST_LOG`
//! filter replaces the level entirely.

use std::env;
use std::fmt;
use std::time::Duration;

pub const LEVEL_ENV: &str = "TREESOA_LOG_LEVEL";
pub const FORMAT_ENV: &str = "TREESOA_LOG_FORMAT";

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        })
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    }
}

/// Effective log configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl LogOptions {
    pub const DEFAULT: Self = Self {
        format: LogFormat::Text,
        level: LogLevel::Warn,
    };

    #[must_use]
    pub fn with_overrides(base: Self, overrides: LogSettings) -> Self {
        Self {
            format: overrides.format.unwrap_or(base.format),
            level: overrides.level.unwrap_or(base.level),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let format = env::var_os(FORMAT_ENV).map(|v| v.to_string_lossy().into_owned());
        let level = env::var_os(LEVEL_ENV).map(|v| v.to_string_lossy().into_owned());
        apply_env_overrides(Self::DEFAULT, format.as_deref(), level.as_deref())
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Command-line overrides for logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSettings {
    pub format: Option<LogFormat>,
    pub level: Option<LogLevel>,
}

impl LogSettings {
    #[must_use]
    pub fn merged_with_env(self) -> LogOptions {
        LogOptions::with_overrides(LogOptions::from_env(), self)
    }
}

/// Unparseable values are ignored.
pub(crate) fn apply_env_overrides(
    mut options: LogOptions,
    format: Option<&str>,
    level: Option<&str>,
) -> LogOptions {
    if let Some(spec) = format.and_then(LogFormat::parse) {
        options.format = spec;
    }
    if let Some(spec) = level.and_then(LogLevel::parse) {
        options.level = spec;
    }
    options
}

/// Install the global subscriber. Events go to stderr so plan output on
/// stdout stays clean. Later calls are no-ops.
pub fn init(options: &LogOptions) {
    use std::io::IsTerminal;
    use std::sync::OnceLock;
    use tracing_subscriber::EnvFilter;

    static INITIALISED: OnceLock<()> = OnceLock::new();

    let _ = INITIALISED.get_or_init(|| {
        let use_ansi = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(options.level.to_string()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        let _ = match options.format {
            LogFormat::Json => {
                tracing::subscriber::set_global_default(builder.json().finish())
            }
            LogFormat::Text => {
                tracing::subscriber::set_global_default(builder.compact().finish())
            }
        };
    });
}

pub fn log_run_start(command: &str, model: &str, options: &LogOptions) {
    tracing::info!(
        target: "treesoa",
        stage = "cli.run.start",
        command,
        model,
        log_level = %options.level,
        log_format = %options.format,
    );
}

/// Footer event of a run. The error itself is not logged; the CLI prints it.
pub fn log_run_complete<T, E>(command: &str, elapsed: Duration, result: &Result<T, E>) {
    let elapsed_ms = elapsed.as_millis() as u64;
    let status = if result.is_ok() { "ok" } else { "error" };
    tracing::info!(
        target: "treesoa",
        stage = "cli.run.footer",
        command,
        status,
        elapsed_ms
    );
}
