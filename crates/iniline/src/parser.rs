// Dweve IniLine - Streaming INI Line Parser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Streaming INI reader.
//!
//! [`IniReader`] pulls physical lines from a source, classifies each with a
//! shared [`PatternSet`], and hands back one [`Record`] per section header or
//! key-value line. Blank and comment lines are consumed silently inside the
//! same call, so the caller only ever observes a record, end of input, or an
//! error.
//!
//! # Design
//!
//! - **Constant memory**: only the current physical line is buffered, and the
//!   buffer is reused between reads
//! - **Iterative skipping**: runs of blank or comment lines are consumed in a
//!   loop, so input made of millions of them cannot grow the stack
//! - **Shared patterns**: the compiled rules live in an `Arc<PatternSet>` and
//!   can back any number of readers on any number of threads
//! - **Recoverable errors**: a malformed line fails only the call that read
//!   it; the next call continues with the following line. A failed read of
//!   the source itself is final
//!
//! # Basic Usage
//!
//! ```rust
//! use iniline::{IniReader, PatternSet, Record};
//! use std::io::Cursor;
//!
//! let input = "\
//! [owner]
//! name = John Doe
//!
//! [database]
//! port = 143
//! ";
//!
//! let reader = IniReader::new(Cursor::new(input), PatternSet::shared());
//! let records: Vec<Record> = reader.collect::<Result<_, _>>().unwrap();
//!
//! assert_eq!(records, vec![
//!     Record::section("owner"),
//!     Record::key_value("name", "John Doe"),
//!     Record::section("database"),
//!     Record::key_value("port", "143"),
//! ]);
//! ```

use crate::error::{IniError, IniResult};
use crate::patterns::{extract_capture, LineShape, PatternSet, ShapeKind};
use crate::reader::LineReader;
use crate::record::Record;
use std::fs::File;
use std::io::{self, Cursor, Read, Stdin, StdinLock};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Configuration options for [`IniReader`].
///
/// # Examples
///
/// ```rust
/// use iniline::ReaderConfig;
///
/// let config = ReaderConfig::default();
/// assert_eq!(config.buffer_size, 64 * 1024);
/// assert_eq!(config.max_line_length, None);
///
/// // Untrusted input: cap line length instead of buffering whatever arrives.
/// let config = ReaderConfig {
///     max_line_length: Some(64 * 1024),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Capacity of the read buffer in bytes.
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Maximum physical line length in bytes, excluding the line feed.
    ///
    /// `None` reads lines of any length. With a limit, a longer line fails
    /// with [`IniError::LineTooLong`] and is skipped; it is never truncated.
    ///
    /// Default: None
    pub max_line_length: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,
            max_line_length: None,
        }
    }
}

/// Outcome of a successful [`IniReader::read_next`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    /// The record was populated from a section or key-value line.
    Matched,
    /// The source is exhausted; the record is left unset.
    EndOfInput,
}

/// An input that can be closed explicitly.
///
/// [`IniReader::close`] releases its own buffers first and then calls
/// [`Source::close`], reporting a failure as [`IniError::Close`]. The default
/// implementation just drops the source.
pub trait Source: Read {
    /// Close the source.
    fn close(self) -> io::Result<()>
    where
        Self: Sized,
    {
        drop(self);
        Ok(())
    }
}

impl Source for File {}
impl Source for Stdin {}
impl Source for StdinLock<'_> {}
impl Source for &[u8] {}
impl<T: AsRef<[u8]>> Source for Cursor<T> {}
impl<S: Source> Source for Box<S> {
    fn close(self) -> io::Result<()> {
        (*self).close()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready,
    Done,
    Failed,
}

/// Streaming INI reader over any [`Read`] source.
///
/// # Examples
///
/// ## Reusing one record
///
/// ```rust
/// use iniline::{IniReader, PatternSet, ReadStatus, Record};
/// use std::io::Cursor;
///
/// let mut reader = IniReader::new(Cursor::new("# header\n[a]\nk=v\n"), PatternSet::shared());
/// let mut record = Record::new();
///
/// assert_eq!(reader.read_next(&mut record).unwrap(), ReadStatus::Matched);
/// assert_eq!(record, Record::section("a"));
/// assert_eq!(reader.read_next(&mut record).unwrap(), ReadStatus::Matched);
/// assert_eq!(record, Record::key_value("k", "v"));
/// assert_eq!(reader.read_next(&mut record).unwrap(), ReadStatus::EndOfInput);
/// assert!(!record.is_set());
/// ```
///
/// ## Skipping bad lines
///
/// ```rust
/// use iniline::{ErrorKind, IniReader, PatternSet};
/// use std::io::Cursor;
///
/// let reader = IniReader::new(Cursor::new("a=1\nbad line\nb=2\n"), PatternSet::shared());
///
/// let mut names = Vec::new();
/// for item in reader {
///     match item {
///         Ok(record) => names.push(record.name().unwrap_or_default().to_string()),
///         Err(e) if e.kind() == ErrorKind::MalformedLine => continue,
///         Err(e) => panic!("{}", e),
///     }
/// }
/// assert_eq!(names, ["a", "b"]);
/// ```
pub struct IniReader<R: Read> {
    reader: LineReader<R>,
    patterns: Arc<PatternSet>,
    state: State,
    records: usize,
    skipped: usize,
}

impl IniReader<File> {
    /// Open a file for reading with default configuration.
    pub fn open(path: impl AsRef<Path>, patterns: Arc<PatternSet>) -> IniResult<Self> {
        Self::open_with_config(path, patterns, ReaderConfig::default())
    }

    /// Open a file for reading with custom configuration.
    pub fn open_with_config(
        path: impl AsRef<Path>,
        patterns: Arc<PatternSet>,
        config: ReaderConfig,
    ) -> IniResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IniError::open(path, source))?;
        debug!(path = %path.display(), "opened INI source");
        Ok(Self::with_config(file, patterns, config))
    }
}

impl<R: Read> IniReader<R> {
    /// Create a reader over `source` with default configuration.
    pub fn new(source: R, patterns: Arc<PatternSet>) -> Self {
        Self::with_config(source, patterns, ReaderConfig::default())
    }

    /// Create a reader over `source` with custom configuration.
    pub fn with_config(source: R, patterns: Arc<PatternSet>, config: ReaderConfig) -> Self {
        Self {
            reader: LineReader::with_capacity(source, config.buffer_size)
                .with_max_line_length(config.max_line_length),
            patterns,
            state: State::Ready,
            records: 0,
            skipped: 0,
        }
    }

    /// Read the next section or key-value line into `record`.
    ///
    /// `record` is cleared first, whatever the outcome. Blank and comment
    /// lines are consumed without returning.
    ///
    /// # Errors
    ///
    /// - [`IniError::Read`]: the source failed; the reader is stopped and
    ///   every later call returns [`IniError::Halted`]
    /// - [`IniError::Utf8`]: a section or key-value line is not valid UTF-8
    /// - [`IniError::LineTooLong`]: the line exceeds the configured limit
    /// - [`IniError::Malformed`]: the line matches no shape
    /// - [`IniError::EmptyName`]: a section or key name trimmed to nothing
    ///
    /// After any other error the reader is still usable and resumes at the
    /// next physical line. End of input is final: once returned, every later
    /// call returns it again.
    pub fn read_next(&mut self, record: &mut Record) -> IniResult<ReadStatus> {
        record.clear();

        match self.state {
            State::Ready => {}
            State::Done => return Ok(ReadStatus::EndOfInput),
            State::Failed => {
                return Err(IniError::Halted {
                    line: self.reader.line_number(),
                })
            }
        }

        loop {
            let fetched = match self.reader.next_raw_line() {
                Ok(fetched) => fetched,
                Err(e) => {
                    if matches!(e, IniError::Read { .. }) {
                        self.state = State::Failed;
                        warn!(error = %e, "INI source failed, reader stopped");
                    }
                    return Err(e);
                }
            };
            let (line_num, raw) = match fetched {
                Some(fetched) => fetched,
                None => {
                    self.state = State::Done;
                    debug!(
                        lines = self.reader.line_number(),
                        records = self.records,
                        skipped = self.skipped,
                        "end of INI input"
                    );
                    return Ok(ReadStatus::EndOfInput);
                }
            };

            let line = match std::str::from_utf8(raw) {
                Ok(line) => line,
                Err(_) if self.patterns.is_skippable(raw) => {
                    self.skipped += 1;
                    trace!(line = line_num, "skipped non-UTF-8 blank or comment line");
                    continue;
                }
                Err(e) => return Err(IniError::utf8(line_num, e)),
            };

            match self.patterns.classify(line) {
                LineShape::Blank | LineShape::Comment => {
                    self.skipped += 1;
                    trace!(line = line_num, "skipped blank or comment line");
                }
                LineShape::Section { name } => {
                    let name = required(name, line_num, ShapeKind::Section)?;
                    record.set_section(name);
                    self.records += 1;
                    trace!(line = line_num, section = name, "section");
                    return Ok(ReadStatus::Matched);
                }
                LineShape::KeyValue { name, value } => {
                    let name = required(name, line_num, ShapeKind::KeyValue)?;
                    record.set_key_value(name, extract_capture(value));
                    self.records += 1;
                    trace!(line = line_num, key = name, "key-value");
                    return Ok(ReadStatus::Matched);
                }
                LineShape::Malformed => {
                    warn!(line = line_num, "malformed INI line");
                    return Err(IniError::malformed(line_num, line));
                }
            }
        }
    }

    /// Number of physical lines consumed so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.reader.line_number()
    }

    /// Number of records produced so far.
    #[inline]
    pub fn records_read(&self) -> usize {
        self.records
    }

    /// Number of blank and comment lines skipped so far.
    #[inline]
    pub fn lines_skipped(&self) -> usize {
        self.skipped
    }

    /// True once no further records can be produced: end of input was
    /// reached or the source failed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state != State::Ready
    }

    /// The pattern set this reader classifies with.
    #[inline]
    pub fn patterns(&self) -> &Arc<PatternSet> {
        &self.patterns
    }

    /// Release the line buffer and return the underlying source.
    pub fn into_inner(self) -> R {
        let mut reader = self.reader;
        reader.release();
        reader.into_inner()
    }

    /// Release the line buffer, then close the underlying source.
    ///
    /// The buffer is freed even when closing the source fails.
    pub fn close(self) -> IniResult<()>
    where
        R: Source,
    {
        debug!(
            lines = self.reader.line_number(),
            records = self.records,
            "closing INI source"
        );
        self.into_inner()
            .close()
            .map_err(|source| IniError::Close { source })
    }
}

fn required(span: &str, line: usize, shape: ShapeKind) -> IniResult<&str> {
    extract_capture(span).ok_or_else(|| {
        warn!(line, %shape, "empty name");
        IniError::empty_name(line, shape)
    })
}

impl<R: Read> Iterator for IniReader<R> {
    type Item = IniResult<Record>;

    /// Yields records until end of input. Line-level errors are yielded and
    /// iteration continues; an I/O failure of the source is yielded once and
    /// ends iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Failed {
            return None;
        }
        let mut record = Record::new();
        match self.read_next(&mut record) {
            Ok(ReadStatus::Matched) => Some(Ok(record)),
            Ok(ReadStatus::EndOfInput) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R: Read> std::iter::FusedIterator for IniReader<R> {}
