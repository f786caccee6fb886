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

//! Parsed line records.
//!
//! A [`Record`] is the output for one meaningful line: a section header or a
//! key-value assignment. Blank and comment lines never produce one.
//!
//! Records are reusable buffers. [`IniReader::read_next`](crate::IniReader::read_next)
//! clears the record it is given before reading, so a single record can be
//! threaded through a whole parse:
//!
//! ```rust
//! use iniline::{IniReader, PatternSet, ReadStatus, Record};
//! use std::io::Cursor;
//!
//! let mut reader = IniReader::new(Cursor::new("[db]\nport = 143\n"), PatternSet::shared());
//! let mut record = Record::new();
//!
//! while reader.read_next(&mut record)? == ReadStatus::Matched {
//!     if record.is_section() {
//!         println!("section {}", record.name().unwrap_or_default());
//!     } else {
//!         println!("{} = {}", record.name().unwrap_or_default(), record.value().unwrap_or_default());
//!     }
//! }
//! assert!(!record.is_set());
//! # Ok::<(), iniline::IniError>(())
//! ```

use std::fmt;

/// One classified, trimmed line of parser output.
///
/// Invariants:
/// - an unset record has neither name nor value;
/// - a section record has a name and no value;
/// - a key-value record has a name, and a value unless the text after `=`
///   is empty once spaces are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    is_section: bool,
    is_set: bool,
    name: Option<String>,
    value: Option<String>,
}

/// Borrowed view of a populated [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// `[name]`
    Section(&'a str),
    /// `name = value`; the value is `None` when nothing follows `=`.
    KeyValue(&'a str, Option<&'a str>),
}

impl Record {
    /// Create an empty, unset record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a populated section record.
    pub fn section(name: impl Into<String>) -> Self {
        Self {
            is_section: true,
            is_set: true,
            name: Some(name.into()),
            value: None,
        }
    }

    /// Create a populated key-value record.
    ///
    /// Accepts a plain `&str` or an `Option<&str>`; pass `None` for a key
    /// with no value.
    pub fn key_value<'v>(name: impl Into<String>, value: impl Into<Option<&'v str>>) -> Self {
        Self {
            is_section: false,
            is_set: true,
            name: Some(name.into()),
            value: value.into().map(str::to_owned),
        }
    }

    /// Release any held text and return to the unset state. Idempotent.
    pub fn clear(&mut self) {
        self.is_section = false;
        self.is_set = false;
        self.name = None;
        self.value = None;
    }

    pub(crate) fn set_section(&mut self, name: &str) {
        self.clear();
        self.is_section = true;
        self.name = Some(name.to_owned());
        self.is_set = true;
    }

    pub(crate) fn set_key_value(&mut self, name: &str, value: Option<&str>) {
        self.clear();
        self.name = Some(name.to_owned());
        self.value = value.map(str::to_owned);
        self.is_set = true;
    }

    /// True if this record is a section header.
    #[inline]
    pub fn is_section(&self) -> bool {
        self.is_section
    }

    /// True if this record is a key-value assignment.
    #[inline]
    pub fn is_key_value(&self) -> bool {
        self.is_set && !self.is_section
    }

    /// True once the record has been populated by a successful read.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Section name or key name.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Value of a key-value record; `None` for sections, unset records and
    /// keys with nothing after `=`.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Borrow the record as an [`Entry`], or `None` if it is unset.
    pub fn entry(&self) -> Option<Entry<'_>> {
        if !self.is_set {
            return None;
        }
        let name = self.name.as_deref()?;
        if self.is_section {
            Some(Entry::Section(name))
        } else {
            Some(Entry::KeyValue(name, self.value.as_deref()))
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry() {
            Some(Entry::Section(name)) => write!(f, "[{}]", name),
            Some(Entry::KeyValue(name, Some(value))) => write!(f, "{} = {}", name, value),
            Some(Entry::KeyValue(name, None)) => write!(f, "{} =", name),
            None => f.write_str("<unset>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction tests ====================

    #[test]
    fn test_new_is_unset() {
        let record = Record::new();
        assert!(!record.is_set());
        assert!(!record.is_section());
        assert!(!record.is_key_value());
        assert_eq!(record.name(), None);
        assert_eq!(record.value(), None);
        assert_eq!(record.entry(), None);
    }

    #[test]
    fn test_section_constructor() {
        let record = Record::section("owner");
        assert!(record.is_set());
        assert!(record.is_section());
        assert!(!record.is_key_value());
        assert_eq!(record.name(), Some("owner"));
        assert_eq!(record.value(), None);
    }

    #[test]
    fn test_key_value_constructor() {
        let record = Record::key_value("port", "143");
        assert!(record.is_set());
        assert!(!record.is_section());
        assert!(record.is_key_value());
        assert_eq!(record.name(), Some("port"));
        assert_eq!(record.value(), Some("143"));
    }

    // ==================== Lifecycle tests ====================

    #[test]
    fn test_clear_releases_everything() {
        let mut record = Record::key_value("a", "b");
        record.clear();
        assert_eq!(record, Record::new());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut record = Record::new();
        record.clear();
        record.clear();
        assert_eq!(record, Record::new());
    }

    #[test]
    fn test_set_section_drops_previous_value() {
        let mut record = Record::key_value("a", "b");
        record.set_section("s");
        assert_eq!(record, Record::section("s"));
        assert_eq!(record.value(), None);
    }

    #[test]
    fn test_set_key_value_overwrites_section() {
        let mut record = Record::section("s");
        record.set_key_value("k", None);
        assert_eq!(record, Record::key_value("k", None));
        assert!(record.is_key_value());
        assert_eq!(record.value(), None);
    }

    #[test]
    fn test_set_key_value_replaces_value() {
        let mut record = Record::key_value("a", "old");
        record.set_key_value("b", Some("new"));
        assert_eq!(record, Record::key_value("b", "new"));
    }

    // ==================== Entry and Display tests ====================

    #[test]
    fn test_entry_views() {
        assert_eq!(Record::section("db").entry(), Some(Entry::Section("db")));
        assert_eq!(
            Record::key_value("file", "\"payroll.dat\"").entry(),
            Some(Entry::KeyValue("file", Some("\"payroll.dat\"")))
        );
        assert_eq!(
            Record::key_value("empty", None).entry(),
            Some(Entry::KeyValue("empty", None))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Record::section("db").to_string(), "[db]");
        assert_eq!(Record::key_value("k", "v w").to_string(), "k = v w");
        assert_eq!(Record::key_value("k", None).to_string(), "k =");
        assert_eq!(Record::new().to_string(), "<unset>");
    }
}
