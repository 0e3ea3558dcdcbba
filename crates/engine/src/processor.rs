use crate::classify::{Classified, classify};
use crate::diagnostics::Diagnostics;
use crate::sink::OutputRouter;
use crate::stats::StatAccumulator;

/// Classify one line, record it and route it to its output.
///
/// Empty lines are neither counted nor written.
pub fn process_line(
    line: &str,
    stats: &mut StatAccumulator,
    router: &mut OutputRouter,
    diagnostics: &mut Diagnostics,
) {
    if line.is_empty() {
        return;
    }

    let classified = classify(line);
    match classified {
        Classified::Integer(n) => stats.update_integer(n),
        Classified::Float(f) => stats.update_float(f),
        Classified::Text(s) => stats.update_string(s),
    }
    router.write(classified.category(), &classified, diagnostics);
}
