pub mod check;
pub mod model_loader;
pub mod plan;


use std::io;

use treesoa_core::ModelError;
use treesoa_planner::PlanError;

/// Failure of a CLI command. Printed as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid model '{path}': {source}")]
    Model { path: String, source: ModelError },

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write '{path}': {source}")]
    Write { path: String, source: io::Error },
}

/// Print the error and exit with status 1.
pub fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
