//! Buffered output writer
//!
//! Appends raw record lines to the single output file of a run. The file is
//! created fresh (truncating any prior output) when the writer is built, and
//! every written line is terminated with a single `\n`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffered line writer for the run's output file
///
/// Call [`finish`](LineWriter::finish) when done: it flushes the buffer and
/// surfaces any flush error. The underlying handle is released when the
/// writer is dropped, on success and failure paths alike, so an abandoned
/// writer never leaks a handle (buffered bytes may be lost on an unflushed
/// drop, which is the intended fail-fast behavior).
#[derive(Debug)]
pub struct LineWriter {
    inner: BufWriter<File>,
}

impl LineWriter {
    /// Create (or truncate) the output file and wrap it in a buffer
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be created.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }

    /// Append one line, terminated by a single newline character
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    /// Flush buffered bytes and consume the writer
    ///
    /// A flush error is returned to the caller; the file handle is released
    /// either way when the writer is dropped at the end of this call.
    pub fn finish(mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
