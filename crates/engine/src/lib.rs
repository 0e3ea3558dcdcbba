// crates/engine/src/lib.rs
use std::path::PathBuf;

pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod options;
pub mod processor;
pub mod sink;
pub mod source;
pub mod stats;

use crate::config::{Config, OutputTargets};
use crate::diagnostics::Diagnostics;
use crate::error::{EngineError, Result};
use crate::sink::OutputRouter;
use crate::source::MultiSourceReader;
use crate::stats::StatAccumulator;

/// Outcome of a complete run.
#[derive(Debug)]
pub struct RunResult {
    pub stats: StatAccumulator,
    /// Output files created or modified, in the order they were opened.
    pub outputs: Vec<PathBuf>,
    /// Recovered errors, in the order they occurred.
    pub errors: Vec<EngineError>,
}

/// Run the classification pipeline described by `config`.
///
/// Inputs are read round-robin, every non-empty line is classified,
/// counted and written to the file of its category. Inputs are closed
/// before outputs are flushed.
///
/// # Errors
///
/// Returns an error only when the configuration itself is unusable.
/// Failures while reading or writing individual files are collected in
/// `RunResult::errors` and the run continues.
pub fn run(config: &Config) -> Result<RunResult> {
    if config.prefix.contains('\0') {
        return Err(EngineError::Config("output prefix contains a NUL byte".into()));
    }
    if config.output_dir.as_os_str().is_empty() {
        return Err(EngineError::Config("output directory is empty".into()));
    }

    let targets = OutputTargets::from_config(config);
    let mut diagnostics = Diagnostics::new();
    let mut stats = StatAccumulator::new();
    let mut router = OutputRouter::new(targets, config.write_mode);

    {
        let reader = MultiSourceReader::open(&config.inputs, &mut diagnostics);
        for item in reader {
            match item {
                Ok(line) => processor::process_line(&line, &mut stats, &mut router, &mut diagnostics),
                Err(e) => diagnostics.report(e),
            }
        }
    }

    let outputs = router.close_all(&mut diagnostics);

    Ok(RunResult {
        stats,
        outputs,
        errors: diagnostics.into_errors(),
    })
}
