use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use treesoa_core::Colors;
use treesoa_planner::{LayoutPlan, dump};

use super::model_loader::load_model;
use super::{CliError, fail};
use crate::logging::log_run_complete;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct PlanArgs {
    pub model_path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: PlanArgs) {
    let start = Instant::now();
    let result = execute(&args);
    log_run_complete("plan", start.elapsed(), &result);

    match result {
        Ok(Some(text)) => print!("{text}"),
        Ok(None) => {}
        Err(err) => fail(&err),
    }
}

/// Plan the model and write the rendering to `args.output`.
///
/// Returns the rendering instead when there is no output file.
pub fn execute(args: &PlanArgs) -> Result<Option<String>, CliError> {
    let model = load_model(&args.model_path)?;
    let plan = treesoa_planner::plan(&model.grammar, &model.schedule)?;

    // Files never get escape codes.
    let colors = Colors::new(args.color && args.output.is_none());
    let text = render(&plan, args.format, colors)?;

    match &args.output {
        Some(path) => {
            fs::write(path, text).map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })?;
            Ok(None)
        }
        None => Ok(Some(text)),
    }
}

pub fn render(
    plan: &LayoutPlan<'_>,
    format: OutputFormat,
    colors: Colors,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(dump(plan, colors)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(plan)?;
            json.push('\n');
            Ok(json)
        }
    }
}
