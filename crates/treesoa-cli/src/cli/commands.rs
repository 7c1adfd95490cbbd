//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("treesoa")
        .about("Struct-of-arrays memory layout planning for attribute grammars")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(log_level_arg())
        .arg(log_format_arg())
        .subcommand(plan_command())
        .subcommand(check_command())
}

/// Plan a grammar model and print the layout.
pub fn plan_command() -> Command {
    Command::new("plan")
        .about("Plan buffer layout for a grammar model")
        .override_usage(
            "\
  treesoa plan <MODEL>
  treesoa plan <MODEL> --format json -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  treesoa plan grammar.json                   # buffers and fields listing
  treesoa plan grammar.json --format json     # serialized plan
  treesoa plan grammar.json -o layout.txt     # write to file
  cat grammar.json | treesoa plan -           # read model from stdin"#,
        )
        .arg(model_path_arg())
        .arg(format_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

/// Validate that a grammar model can be planned.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check that a grammar model can be planned")
        .after_help(
            r#"EXAMPLES:
  treesoa check grammar.json                  # prints a one-line summary
  treesoa check - < grammar.json              # read model from stdin"#,
        )
        .arg(model_path_arg())
}
