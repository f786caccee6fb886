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

//! Physical line reader.
//!
//! Fetches one physical line at a time into a single byte buffer that is
//! reused across reads. Lines are unbounded by default; a maximum length can
//! be configured, in which case an oversized line is reported and skipped
//! rather than truncated.
//!
//! This module is an implementation detail of [`IniReader`](crate::IniReader)
//! but is exposed for callers that want the same line handling without
//! classification.

use crate::error::{IniError, IniResult};
use std::io::{self, BufRead, BufReader, Read};

/// Buffered line reader with line number tracking.
///
/// Exactly one trailing `\n` is removed from each line; any other character,
/// including a preceding `\r`, is part of the line. A final line without a
/// terminator is still returned.
///
/// # Examples
///
/// ```rust
/// use iniline::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("line1\nline2"));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "line1")));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "line2")));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
    max_line_length: Option<usize>,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::new(),
            max_line_length: None,
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::new(),
            max_line_length: None,
        }
    }

    /// Reject lines longer than `limit` bytes (excluding the `\n`).
    pub fn with_max_line_length(mut self, limit: Option<usize>) -> Self {
        self.max_line_length = limit;
        self
    }

    /// Number of physical lines consumed so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, returning its 1-based number and its text.
    ///
    /// Returns `Ok(None)` at end of input. The returned text borrows the
    /// internal buffer and is valid until the next call.
    pub fn next_line(&mut self) -> IniResult<Option<(usize, &str)>> {
        match self.next_raw_line()? {
            Some((line, bytes)) => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(Some((line, text))),
                Err(e) => Err(IniError::utf8(line, e)),
            },
            None => Ok(None),
        }
    }

    /// Read the next line as raw bytes, without UTF-8 validation.
    ///
    /// A failed read may leave part of the line consumed; the reader should
    /// not be used afterwards.
    pub fn next_raw_line(&mut self) -> IniResult<Option<(usize, &[u8])>> {
        self.buffer.clear();

        let read = match self.max_line_length {
            None => self.reader.read_until(b'\n', &mut self.buffer),
            Some(limit) => {
                // One extra byte for the terminator, one more to detect overflow.
                let budget = (limit as u64).saturating_add(2);
                (&mut self.reader)
                    .take(budget)
                    .read_until(b'\n', &mut self.buffer)
            }
        };

        let read = read.map_err(|source| IniError::Read {
            line: self.line_number,
            source,
        })?;
        if read == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        let line = self.line_number;

        let terminated = self.buffer.last() == Some(&b'\n');
        if terminated {
            self.buffer.pop();
        }

        if let Some(limit) = self.max_line_length {
            if self.buffer.len() > limit {
                if !terminated {
                    self.skip_rest_of_line()
                        .map_err(|source| IniError::Read { line, source })?;
                }
                self.buffer.clear();
                return Err(IniError::LineTooLong { line, limit });
            }
        }

        Ok(Some((line, self.buffer.as_slice())))
    }

    /// Drop the line buffer's allocation.
    pub fn release(&mut self) {
        self.buffer = Vec::new();
    }

    /// Unwrap the underlying source. Buffered but unread input is discarded.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.reader.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.reader.consume(len);
                }
            }
        }
    }
}
