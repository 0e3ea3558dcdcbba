//! Lazily created output files, one per destination path.

use crate::config::OutputTargets;
use crate::diagnostics::Diagnostics;
use crate::error::EngineError;
use crate::options::{Category, WriteMode};
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

enum SinkSlot {
    Open(BufWriter<File>),
    /// Creation failed once; writes to this path are dropped.
    Disabled,
}

pub struct OutputRouter {
    targets: OutputTargets,
    mode: WriteMode,
    sinks: HashMap<PathBuf, SinkSlot>,
    /// Paths in the order their sinks were opened.
    opened: Vec<PathBuf>,
}

impl OutputRouter {
    #[must_use]
    pub fn new(targets: OutputTargets, mode: WriteMode) -> Self {
        Self {
            targets,
            mode,
            sinks: HashMap::new(),
            opened: Vec::new(),
        }
    }

    /// Append `value` and a line terminator to the file of `category`.
    pub fn write(&mut self, category: Category, value: &dyn Display, diagnostics: &mut Diagnostics) {
        let path = self.targets.path(category).clone();
        self.write_to(&path, value, diagnostics);
    }

    fn write_to(&mut self, path: &Path, value: &dyn Display, diagnostics: &mut Diagnostics) {
        let Some(sink) = self.sink_for(path, diagnostics) else {
            return;
        };
        if let Err(source) = write!(sink, "{value}{LINE_ENDING}") {
            diagnostics.report(EngineError::LineWrite {
                value: value.to_string(),
                path: path.to_path_buf(),
                source,
            });
        }
    }

    /// Get or create the sink for `path`; `None` once the path is disabled.
    fn sink_for(&mut self, path: &Path, diagnostics: &mut Diagnostics) -> Option<&mut BufWriter<File>> {
        let slot = match self.sinks.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let slot = match create_sink(path, self.mode) {
                    Ok(writer) => {
                        tracing::debug!(path = %path.display(), "opened output");
                        self.opened.push(path.to_path_buf());
                        SinkSlot::Open(writer)
                    }
                    Err(source) => {
                        diagnostics.report(EngineError::SinkCreate {
                            path: path.to_path_buf(),
                            source,
                        });
                        SinkSlot::Disabled
                    }
                };
                entry.insert(slot)
            }
        };
        match slot {
            SinkSlot::Open(writer) => Some(writer),
            SinkSlot::Disabled => None,
        }
    }

    /// Flush and close every open sink. Returns the files that were
    /// created or modified during the run.
    pub fn close_all(mut self, diagnostics: &mut Diagnostics) -> Vec<PathBuf> {
        for path in &self.opened {
            if let Some(SinkSlot::Open(writer)) = self.sinks.remove(path) {
                close_sink(path, writer, diagnostics);
            }
        }
        self.opened
    }
}

fn close_sink(path: &Path, writer: BufWriter<File>, diagnostics: &mut Diagnostics) {
    if let Err(err) = writer.into_inner() {
        let source = err.into_error();
        diagnostics.report(EngineError::SinkClose {
            path: path.to_path_buf(),
            source,
        });
    }
}

/// Open `path` for writing, creating its parent directories and retrying
/// once if the first attempt fails.
fn create_sink(path: &Path, mode: WriteMode) -> io::Result<BufWriter<File>> {
    let open = || {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Overwrite => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        options.open(path).map(BufWriter::new)
    };

    match open() {
        Ok(writer) => Ok(writer),
        Err(first) => {
            let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
                return Err(first);
            };
            tracing::info!(dir = %parent.display(), "output directory not found, creating it");
            std::fs::create_dir_all(parent)?;
            open()
        }
    }
}
