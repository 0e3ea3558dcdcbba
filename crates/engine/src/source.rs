//! Fair, round-robin line reading over several inputs.
//!
//! Each pass reads one line from every active source in input order. A
//! source leaves the active set only when a read reports end of stream;
//! read failures and blank lines keep it in rotation.

use crate::diagnostics::Diagnostics;
use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

struct InputSource<R> {
    name: PathBuf,
    reader: R,
}

pub struct MultiSourceReader<R = BufReader<File>> {
    active: Vec<InputSource<R>>,
    cursor: usize,
    buf: Vec<u8>,
}

impl MultiSourceReader<BufReader<File>> {
    /// Open every path in order. Paths that cannot be opened are reported
    /// and skipped for the rest of the run.
    pub fn open<P: AsRef<Path>>(paths: &[P], diagnostics: &mut Diagnostics) -> Self {
        let mut readers = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            match open_input(path) {
                Ok(file) => {
                    tracing::debug!(path = %path.display(), "opened input");
                    readers.push((path.to_path_buf(), BufReader::new(file)));
                }
                Err(source) => diagnostics.report(EngineError::SourceOpen {
                    path: path.to_path_buf(),
                    source,
                }),
            }
        }
        Self::from_readers(readers)
    }
}

/// Open `path` as a readable file. A directory opens fine on some
/// platforms but fails every read, so it is rejected here.
fn open_input(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(io::ErrorKind::IsADirectory, "is a directory"));
    }
    Ok(file)
}

impl<R: BufRead> MultiSourceReader<R> {
    pub fn from_readers<N: Into<PathBuf>>(readers: impl IntoIterator<Item = (N, R)>) -> Self {
        let active = readers
            .into_iter()
            .map(|(name, reader)| InputSource {
                name: name.into(),
                reader,
            })
            .collect();
        Self {
            active,
            cursor: 0,
            buf: Vec::new(),
        }
    }

    /// Number of sources that have not reached end of stream yet.
    #[must_use]
    pub fn active_sources(&self) -> usize {
        self.active.len()
    }

    /// Read the next line of the source under the cursor.
    ///
    /// `Ok(None)` is end of stream. The bytes of a failed line are consumed,
    /// so the next attempt starts at the following line.
    fn read_current(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let source = &mut self.active[self.cursor];
        if source.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        String::from_utf8(std::mem::take(&mut self.buf))
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: BufRead> Iterator for MultiSourceReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.active.is_empty() {
            if self.cursor >= self.active.len() {
                self.cursor = 0;
            }
            match self.read_current() {
                Ok(Some(line)) => {
                    self.cursor += 1;
                    return Some(Ok(line));
                }
                Ok(None) => {
                    let done = self.active.remove(self.cursor);
                    tracing::debug!(source = %done.name.display(), "input exhausted");
                }
                Err(source) => {
                    let source_name = self.active[self.cursor].name.clone();
                    self.cursor += 1;
                    return Some(Err(EngineError::LineRead {
                        source_name,
                        source,
                    }));
                }
            }
        }
        None
    }
}
