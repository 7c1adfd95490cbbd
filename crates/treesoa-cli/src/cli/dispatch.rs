//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap;
//! `Into<*Args>` impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::plan::{OutputFormat, PlanArgs};
use crate::logging::{LogFormat, LogLevel, LogSettings};

pub struct PlanParams {
    pub model_path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl PlanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            model_path: model_path(m),
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<PlanParams> for PlanArgs {
    fn from(p: PlanParams) -> Self {
        Self {
            model_path: p.model_path,
            format: p.format,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub model_path: PathBuf,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            model_path: model_path(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            model_path: p.model_path,
        }
    }
}

/// Logging overrides given on the command line. Global args, so any
/// subcommand's matches carry them.
pub struct LogParams {
    pub level: Option<LogLevel>,
    pub format: Option<LogFormat>,
}

impl LogParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            level: m
                .get_one::<String>("log_level")
                .and_then(|s| LogLevel::parse(s)),
            format: m
                .get_one::<String>("log_format")
                .and_then(|s| LogFormat::parse(s)),
        }
    }
}

impl From<LogParams> for LogSettings {
    fn from(p: LogParams) -> Self {
        Self {
            level: p.level,
            format: p.format,
        }
    }
}

fn model_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("model_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
