//! Streaming line reader
//!
//! Yields one line at a time from an input file without loading the whole
//! file into memory. Memory usage is O(longest line), not O(file size).
//!
//! # Iterator Interface
//!
//! `LineReader` implements `Iterator<Item = io::Result<String>>`. Line
//! terminators (`\n`, and a preceding `\r` for CRLF input) are stripped from
//! the yielded text. A read error that occurs mid-stream is yielded as an
//! `Err` item in place of a line; iteration ends after it. The underlying
//! file handle is released when the reader is dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Streaming reader over the lines of one input file
#[derive(Debug)]
pub struct LineReader {
    inner: BufReader<File>,
    done: bool,
}

impl LineReader {
    /// Open a file for line-by-line streaming
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be opened.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            inner: BufReader::new(file),
            done: false,
        })
    }
}

impl Iterator for LineReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = String::new();
        match self.inner.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
