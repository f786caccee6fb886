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

//! Streaming INI Parser
//!
//! This crate reads INI-style configuration text one physical line at a time
//! and classifies every line as a section header, a key-value assignment, a
//! comment, a blank line, or an error. Only the current line is held in
//! memory, so arbitrarily large inputs are processed in constant space.
//!
//! # Line Grammar
//!
//! ```text
//! section-line   := ws* '[' ws* name ws* ']' ws*
//! blank-line     := ws*
//! comment-line   := ws* ('#' | ';') .*
//! keyvalue-line  := ws* name ws* '=' rest-of-line
//! name           := [A-Za-z0-9_-]+
//! ws             := ' ' | '\t'
//! ```
//!
//! Captured names and values are trimmed of plain spaces (not tabs) on both
//! ends; a value left empty by trimming is absent. Blank and comment lines
//! produce no output, whatever bytes a comment holds. Anything else is an
//! error.
//!
//! The parser only classifies lines. Tracking which section a key belongs to
//! is up to the consumer.
//!
//! # Components
//!
//! - [`PatternSet`]: compiled, immutable line-shape rules shared via `Arc`
//! - [`IniReader`]: per-source state machine producing [`Record`]s
//! - [`LineReader`]: the buffered physical-line fetcher underneath
//!
//! # Example
//!
//! ```rust,no_run
//! use iniline::{IniReader, PatternSet, Entry};
//!
//! # fn main() -> Result<(), iniline::IniError> {
//! let patterns = PatternSet::shared();
//! let reader = IniReader::open("settings.ini", patterns)?;
//!
//! let mut section = String::new();
//! for record in reader {
//!     match record?.entry() {
//!         Some(Entry::Section(name)) => section = name.to_string(),
//!         Some(Entry::KeyValue(key, value)) => {
//!             println!("{}.{} = {}", section, key, value.unwrap_or_default())
//!         }
//!         None => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! A [`PatternSet`] is read-only after construction and can back readers on
//! any number of threads. Each [`IniReader`] must be used by one thread at a
//! time.

mod error;
mod parser;
mod patterns;
mod reader;
mod record;

pub use error::{ErrorKind, IniError, IniResult};
pub use parser::{IniReader, ReadStatus, ReaderConfig, Source};
pub use patterns::{
    extract_capture, LineShape, PatternError, PatternSet, ShapeKind, BLANK_PATTERN,
    COMMENT_PATTERN, KEY_VALUE_PATTERN, SECTION_PATTERN,
};
pub use reader::LineReader;
pub use record::{Entry, Record};
