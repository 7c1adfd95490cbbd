mod cli;
mod commands;
mod logging;


use clap::ArgMatches;

use cli::{CheckParams, LogParams, PlanParams, build_cli};
use logging::{LogSettings, log_run_start};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("plan", m)) => {
            init_logging("plan", m);
            let params = PlanParams::from_matches(m);
            commands::plan::run(params.into());
        }
        Some(("check", m)) => {
            init_logging("check", m);
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_logging(command: &str, m: &ArgMatches) {
    let settings: LogSettings = LogParams::from_matches(m).into();
    let options = settings.merged_with_env();
    logging::init(&options);

    let model = m
        .get_one::<std::path::PathBuf>("model_path")
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    log_run_start(command, &model, &options);
}
