// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use sift_lines_engine::RunResult;
use sift_lines_engine::options::StatFormat;
use std::fmt::Write;

/// Render everything printed to stdout after a run.
///
/// # Errors
/// Fails only if the JSON statistics cannot be serialized.
pub fn render_results(result: &RunResult, config: &Config) -> Result<String> {
    let mut out = String::new();

    out.push_str("Result:\n");
    if result.outputs.is_empty() {
        out.push_str("    No output files were written.\n");
    } else {
        out.push_str("    Output files (created or modified):\n");
        for path in &result.outputs {
            let _ = writeln!(out, "        {}", path.display());
        }
    }

    let stats = render_stats(result, config)?;
    if !stats.is_empty() {
        out.push('\n');
        out.push_str(&stats);
    }

    if !result.errors.is_empty() {
        let _ = writeln!(
            out,
            "\n[sift_lines] {} problem(s) reported during the run.",
            result.errors.len()
        );
    }
    out.push_str("\n[sift_lines] Completed.\n");
    Ok(out)
}

fn render_stats(result: &RunResult, config: &Config) -> Result<String> {
    if !config.short_stats && !config.full_stats {
        return Ok(String::new());
    }
    let summary = result.stats.summary();
    match config.stat_format {
        StatFormat::Text => Ok(summary.render(config.short_stats, config.full_stats)),
        StatFormat::Json => {
            let json = if config.full_stats {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string_pretty(&summary.counts())?
            };
            Ok(json + "\n")
        }
    }
}

/// Write the rendered results to stdout.
///
/// # Errors
/// Fails if the statistics cannot be serialized or stdout is closed.
pub fn print_results(result: &RunResult, config: &Config) -> Result<()> {
    write_results(&mut std::io::stdout().lock(), result, config)
}

fn write_results<W: std::io::Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let text = render_results(result, config)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
