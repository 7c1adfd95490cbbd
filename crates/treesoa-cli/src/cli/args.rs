//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Grammar model file (positional, `-` for stdin).
pub fn model_path_arg() -> Arg {
    Arg::new("model_path")
        .value_name("MODEL")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Grammar model JSON file, or '-' to read stdin")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format: text listing or serialized plan")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Log verbosity (--log-level), global.
pub fn log_level_arg() -> Arg {
    Arg::new("log_level")
        .long("log-level")
        .value_name("LEVEL")
        .global(true)
        .value_parser(["error", "warn", "info", "debug", "trace"])
        .help("Log verbosity [env: TREESOA_LOG_LEVEL] (default: warn)")
}

/// Log output format (--log-format), global.
pub fn log_format_arg() -> Arg {
    Arg::new("log_format")
        .long("log-format")
        .value_name("FORMAT")
        .global(true)
        .value_parser(["text", "json"])
        .help("Log output format [env: TREESOA_LOG_FORMAT] (default: text)")
}
