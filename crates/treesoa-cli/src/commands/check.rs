use std::path::PathBuf;
use std::time::Instant;

use super::model_loader::load_model;
use super::{CliError, fail};
use crate::logging::log_run_complete;

pub struct CheckArgs {
    pub model_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    let start = Instant::now();
    let result = execute(&args);
    log_run_complete("check", start.elapsed(), &result);

    match result {
        Ok(summary) => println!("{summary}"),
        Err(err) => fail(&err),
    }
}

/// Plan the model and summarize the result in one line.
pub fn execute(args: &CheckArgs) -> Result<String, CliError> {
    let model = load_model(&args.model_path)?;
    let plan = treesoa_planner::plan(&model.grammar, &model.schedule)?;
    Ok(format!(
        "ok: {} fields in {} buffers",
        plan.fields().len(),
        plan.buffer_count()
    ))
}
