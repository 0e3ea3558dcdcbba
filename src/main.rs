use clap::Parser;
use sift_lines::args::Args;
use sift_lines::config::Config;
use sift_lines::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Argument errors exit here with usage, before any file is touched.
    let args = Args::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("{e}");
    }

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Application Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if config.inputs.is_empty() {
        tracing::warn!("no input files given");
    }

    match sift_lines_engine::run(&config) {
        Ok(result) => match presentation::print_results(&result, &config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Application Error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Application Error: {e}. The run was stopped.");
            ExitCode::FAILURE
        }
    }
}
