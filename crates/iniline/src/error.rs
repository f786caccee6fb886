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

//! Error types for the streaming INI parser.
//!
//! Every failing operation surfaces exactly one [`IniError`] to its immediate
//! caller. Nothing is retried internally; whether to skip a bad line and keep
//! reading or to abandon the source is the caller's decision.
//!
//! # Error Categories
//!
//! - **Open**: the source could not be opened for reading
//! - **Read**: the underlying read failed, which stops the reader, or the
//!   fetched line is not usable (a section or key-value line that is not
//!   UTF-8, configured length limit exceeded)
//! - **Malformed line**: the line matches none of the recognised shapes
//! - **Empty required capture**: a section or key name trimmed to nothing
//! - **Close**: releasing the underlying source failed
//!
//! # Example
//!
//! ```rust
//! use iniline::{ErrorKind, IniReader, PatternSet, Record};
//! use std::io::Cursor;
//!
//! let mut reader = IniReader::new(Cursor::new("]bad[\n"), PatternSet::shared());
//! let mut record = Record::new();
//!
//! let err = reader.read_next(&mut record).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedLine);
//! assert_eq!(err.line(), Some(1));
//! assert!(!record.is_set());
//! ```

use crate::patterns::ShapeKind;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Longest excerpt of an offending line kept in a [`IniError::Malformed`].
const MAX_EXCERPT_CHARS: usize = 64;

/// Errors produced while opening, reading, or closing an INI source.
#[derive(Error, Debug)]
pub enum IniError {
    /// The source could not be opened for reading.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The underlying read failed for a reason other than end of input.
    #[error("read error after line {line}: {source}")]
    Read {
        /// Last physical line successfully read before the failure.
        line: usize,
        #[source]
        source: io::Error,
    },

    /// An earlier [`IniError::Read`] left the source mid-line; no further
    /// lines are read from it.
    #[error("reader stopped after a read error following line {line}")]
    Halted { line: usize },

    /// A section or key-value line is not valid UTF-8. Blank and comment
    /// lines are skipped whatever bytes they hold.
    #[error("invalid UTF-8 at line {line}: {message}")]
    Utf8 { line: usize, message: String },

    /// The fetched line exceeds the configured maximum length.
    #[error("line {line} exceeds the maximum length of {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    /// The line matches none of the section, blank, comment or key-value shapes.
    #[error("malformed line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    /// A section or key-value line whose name is empty after trimming.
    ///
    /// The built-in name rule needs at least one name character, so lines
    /// classified by [`PatternSet`](crate::PatternSet) never produce this;
    /// it guards the record invariant that every record has a name.
    #[error("empty {shape} name at line {line}")]
    EmptyName { line: usize, shape: ShapeKind },

    /// Closing the underlying source failed. Owned buffers are released anyway.
    #[error("close error: {source}")]
    Close {
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of an [`IniError`], one per failing operation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`IniError::Open`].
    OpenFailure,
    /// See [`IniError::Read`], [`IniError::Halted`], [`IniError::Utf8`] and
    /// [`IniError::LineTooLong`].
    ReadFailure,
    /// See [`IniError::Malformed`].
    MalformedLine,
    /// See [`IniError::EmptyName`].
    EmptyRequiredCapture,
    /// See [`IniError::Close`].
    CloseFailure,
}

impl ErrorKind {
    /// Stable identifier used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenFailure => "open-failure",
            Self::ReadFailure => "read-failure",
            Self::MalformedLine => "malformed-line",
            Self::EmptyRequiredCapture => "empty-required-capture",
            Self::CloseFailure => "close-failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IniError {
    /// Create an open error.
    #[inline]
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-line error, keeping a bounded excerpt of the line.
    pub fn malformed(line: usize, content: &str) -> Self {
        let content = if content.chars().count() > MAX_EXCERPT_CHARS {
            let mut excerpt: String = content.chars().take(MAX_EXCERPT_CHARS).collect();
            excerpt.push_str("...");
            excerpt
        } else {
            content.to_string()
        };
        Self::Malformed { line, content }
    }

    pub(crate) fn utf8(line: usize, err: std::str::Utf8Error) -> Self {
        Self::Utf8 {
            line,
            message: err.to_string(),
        }
    }

    /// Create an empty-name error.
    #[inline]
    pub fn empty_name(line: usize, shape: ShapeKind) -> Self {
        Self::EmptyName { line, shape }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Open { .. } => ErrorKind::OpenFailure,
            Self::Read { .. }
            | Self::Halted { .. }
            | Self::Utf8 { .. }
            | Self::LineTooLong { .. } => ErrorKind::ReadFailure,
            Self::Malformed { .. } => ErrorKind::MalformedLine,
            Self::EmptyName { .. } => ErrorKind::EmptyRequiredCapture,
            Self::Close { .. } => ErrorKind::CloseFailure,
        }
    }

    /// Get the physical line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Read { line, .. }
            | Self::Halted { line }
            | Self::Utf8 { line, .. }
            | Self::LineTooLong { line, .. }
            | Self::Malformed { line, .. }
            | Self::EmptyName { line, .. } => Some(*line),
            Self::Open { .. } | Self::Close { .. } => None,
        }
    }
}

/// Result type for INI parsing operations.
pub type IniResult<T> = Result<T, IniError>;
