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

//! Line-shape patterns.
//!
//! A [`PatternSet`] holds the four compiled rules used to classify a single
//! physical line. Rules are tested in a fixed priority order and the first
//! match wins:
//!
//! 1. **Section**: `[name]`, optionally padded with spaces or tabs
//! 2. **Blank**: nothing but spaces or tabs
//! 3. **Comment**: optional spaces or tabs, then `#` or `;`
//! 4. **Key-value**: `name = rest of line`
//!
//! Names are one or more of `A-Z a-z 0-9 _ -`. A line matching none of the
//! rules is malformed.
//!
//! The blank and comment rules work on raw bytes, so a comment holding text
//! in another encoding is still recognised and skipped; see
//! [`PatternSet::is_skippable`].
//!
//! The set is immutable once built and is shared between readers through an
//! [`Arc`]. Building one is the only fallible step, so callers that want the
//! built-in rules without managing their lifetime can use
//! [`PatternSet::shared`].
//!
//! # Example
//!
//! ```rust
//! use iniline::{LineShape, PatternSet};
//!
//! let patterns = PatternSet::new().unwrap();
//!
//! assert_eq!(patterns.classify("[owner]"), LineShape::Section { name: "owner" });
//! assert_eq!(patterns.classify("  ; note"), LineShape::Comment);
//! assert_eq!(
//!     patterns.classify("port = 143"),
//!     LineShape::KeyValue { name: "port", value: " 143" },
//! );
//! assert_eq!(patterns.classify("a.b = c"), LineShape::Malformed);
//! ```

use once_cell::sync::Lazy;
use regex::{bytes, Regex};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Section header: `[` name `]`, whole line, spaces or tabs allowed around each part.
pub const SECTION_PATTERN: &str = r"^[ \t]*\[[ \t]*(?P<name>[A-Za-z0-9_-]+)[ \t]*\][ \t]*$";

/// Blank line: empty or horizontal whitespace only.
pub const BLANK_PATTERN: &str = r"^[ \t]*$";

/// Comment line: `#` or `;` after optional horizontal whitespace.
pub const COMMENT_PATTERN: &str = r"^[ \t]*[#;]";

/// Key-value line. The value capture is everything after the first `=`.
pub const KEY_VALUE_PATTERN: &str = r"^[ \t]*(?P<name>[A-Za-z0-9_-]+)[ \t]*=(?P<value>.*)$";

static SHARED: Lazy<Arc<PatternSet>> = Lazy::new(|| {
    // The built-in patterns are constants covered by unit tests.
    Arc::new(PatternSet::new().expect("built-in line patterns compile"))
});

/// The four recognised line categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Section,
    Blank,
    Comment,
    KeyValue,
}

impl ShapeKind {
    /// Every shape, in the order [`PatternSet::classify`] tries them.
    pub const PRIORITY: [ShapeKind; 4] = [
        ShapeKind::Section,
        ShapeKind::Blank,
        ShapeKind::Comment,
        ShapeKind::KeyValue,
    ];

    /// Human-readable name of the shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Blank => "blank",
            Self::Comment => "comment",
            Self::KeyValue => "key-value",
        }
    }

    /// Whether lines of this shape are skipped rather than turned into records.
    #[inline]
    pub fn is_skipped(self) -> bool {
        matches!(self, Self::Blank | Self::Comment)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one line.
///
/// Captured spans borrow from the classified line and are untrimmed; apply
/// [`extract_capture`] to get the text that ends up in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    /// A section header with its raw name span.
    Section { name: &'a str },
    /// An empty or whitespace-only line.
    Blank,
    /// A `#` or `;` comment line.
    Comment,
    /// A key-value line with its raw name and value spans.
    KeyValue { name: &'a str, value: &'a str },
    /// None of the shapes matched.
    Malformed,
}

impl LineShape<'_> {
    /// The shape category, or `None` for a malformed line.
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Self::Section { .. } => Some(ShapeKind::Section),
            Self::Blank => Some(ShapeKind::Blank),
            Self::Comment => Some(ShapeKind::Comment),
            Self::KeyValue { .. } => Some(ShapeKind::KeyValue),
            Self::Malformed => None,
        }
    }
}

/// A line pattern failed to compile.
#[derive(Error, Debug)]
#[error("invalid {shape} pattern: {source}")]
pub struct PatternError {
    pub shape: ShapeKind,
    #[source]
    pub source: regex::Error,
}

/// Compiled line-shape rules.
#[derive(Debug, Clone)]
pub struct PatternSet {
    section: Regex,
    blank: bytes::Regex,
    comment: bytes::Regex,
    key_value: Regex,
}

impl PatternSet {
    /// Compile the built-in patterns.
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            section: compile(ShapeKind::Section, SECTION_PATTERN)?,
            blank: compile_bytes(ShapeKind::Blank, BLANK_PATTERN)?,
            comment: compile_bytes(ShapeKind::Comment, COMMENT_PATTERN)?,
            key_value: compile(ShapeKind::KeyValue, KEY_VALUE_PATTERN)?,
        })
    }

    /// Process-wide instance of the built-in patterns, compiled on first use.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Classify one line (without its line terminator).
    ///
    /// Shapes are tried in [`ShapeKind::PRIORITY`] order; the first match wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineShape<'a> {
        ShapeKind::PRIORITY
            .iter()
            .find_map(|&shape| self.match_shape(shape, line))
            .unwrap_or(LineShape::Malformed)
    }

    /// True if the raw line is blank or a comment, whatever its encoding.
    ///
    /// A section header can never contain non-ASCII bytes, so for a line that
    /// is not valid UTF-8 this gives the same answer `classify` would.
    pub fn is_skippable(&self, line: &[u8]) -> bool {
        self.blank.is_match(line) || self.comment.is_match(line)
    }

    fn match_shape<'a>(&self, shape: ShapeKind, line: &'a str) -> Option<LineShape<'a>> {
        match shape {
            ShapeKind::Section => self.section.captures(line).map(|caps| LineShape::Section {
                name: caps.name("name").map_or("", |m| m.as_str()),
            }),
            ShapeKind::Blank => self.blank.is_match(line.as_bytes()).then_some(LineShape::Blank),
            ShapeKind::Comment => self
                .comment
                .is_match(line.as_bytes())
                .then_some(LineShape::Comment),
            ShapeKind::KeyValue => self.key_value.captures(line).map(|caps| LineShape::KeyValue {
                name: caps.name("name").map_or("", |m| m.as_str()),
                value: caps.name("value").map_or("", |m| m.as_str()),
            }),
        }
    }
}

fn compile(shape: ShapeKind, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError { shape, source })
}

fn compile_bytes(shape: ShapeKind, pattern: &str) -> Result<bytes::Regex, PatternError> {
    bytes::Regex::new(pattern).map_err(|source| PatternError { shape, source })
}

/// Trim a captured span for storage in a record.
///
/// Only ASCII space (0x20) is removed, from both ends; tabs and other
/// whitespace are kept. An empty result is reported as `None`.
#[inline]
pub fn extract_capture(span: &str) -> Option<&str> {
    let trimmed = span.trim_matches(' ');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PatternSet {
        PatternSet::new().unwrap()
    }

    // ==================== Compilation tests ====================

    #[test]
    fn test_builtin_patterns_compile() {
        assert!(PatternSet::new().is_ok());
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let a = PatternSet::shared();
        let b = PatternSet::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_pattern_error_names_shape() {
        let err = compile(ShapeKind::Comment, "[unclosed").unwrap_err();
        assert_eq!(err.shape, ShapeKind::Comment);
        assert!(err.to_string().starts_with("invalid comment pattern"));
    }

    // ==================== Section tests ====================

    #[test]
    fn test_section_plain() {
        assert_eq!(
            patterns().classify("[owner]"),
            LineShape::Section { name: "owner" }
        );
    }

    #[test]
    fn test_section_with_padding() {
        let p = patterns();
        assert_eq!(
            p.classify("  [  database  ]  "),
            LineShape::Section { name: "database" }
        );
        assert_eq!(
            p.classify("\t[\tdb_2-x\t]\t"),
            LineShape::Section { name: "db_2-x" }
        );
    }

    #[test]
    fn test_section_rejects_bad_names() {
        let p = patterns();
        assert_eq!(p.classify("[a.b]"), LineShape::Malformed);
        assert_eq!(p.classify("[a b]"), LineShape::Malformed);
        assert_eq!(p.classify("[]"), LineShape::Malformed);
        assert_eq!(p.classify("[ ]"), LineShape::Malformed);
    }

    #[test]
    fn test_section_must_span_whole_line() {
        let p = patterns();
        assert_eq!(p.classify("[owner] trailing"), LineShape::Malformed);
        assert_eq!(p.classify("x [owner]"), LineShape::Malformed);
        assert_eq!(p.classify("[owner"), LineShape::Malformed);
    }

    // ==================== Blank and comment tests ====================

    #[test]
    fn test_blank_lines() {
        let p = patterns();
        assert_eq!(p.classify(""), LineShape::Blank);
        assert_eq!(p.classify("    "), LineShape::Blank);
        assert_eq!(p.classify(" \t \t"), LineShape::Blank);
    }

    #[test]
    fn test_carriage_return_is_not_blank() {
        assert_eq!(patterns().classify("\r"), LineShape::Malformed);
    }

    #[test]
    fn test_comment_lines() {
        let p = patterns();
        assert_eq!(p.classify("# hash"), LineShape::Comment);
        assert_eq!(p.classify("; semicolon"), LineShape::Comment);
        assert_eq!(p.classify("   #indented"), LineShape::Comment);
        assert_eq!(p.classify("\t;tabbed"), LineShape::Comment);
        assert_eq!(p.classify("#"), LineShape::Comment);
    }

    #[test]
    fn test_comment_content_is_not_inspected() {
        assert_eq!(patterns().classify("# [section] key = value ]["), LineShape::Comment);
    }

    #[test]
    fn test_skippable_raw_lines() {
        let p = patterns();
        assert!(p.is_skippable(b"# caf\xe9"));
        assert!(p.is_skippable(b"  ;\xff\xfe"));
        assert!(p.is_skippable(b" \t"));
        assert!(!p.is_skippable(b"key = caf\xe9"));
        assert!(!p.is_skippable(b"[s]"));
    }

    // ==================== Key-value tests ====================

    #[test]
    fn test_key_value_raw_spans() {
        let p = patterns();
        assert_eq!(
            p.classify("name = John Doe"),
            LineShape::KeyValue { name: "name", value: " John Doe" }
        );
        assert_eq!(
            p.classify("\t key\t=value  "),
            LineShape::KeyValue { name: "key", value: "value  " }
        );
    }

    #[test]
    fn test_key_value_splits_on_first_equals() {
        assert_eq!(
            patterns().classify("expr = a=b"),
            LineShape::KeyValue { name: "expr", value: " a=b" }
        );
    }

    #[test]
    fn test_key_value_empty_value() {
        assert_eq!(
            patterns().classify("empty="),
            LineShape::KeyValue { name: "empty", value: "" }
        );
    }

    #[test]
    fn test_key_value_rejects_bad_names() {
        let p = patterns();
        assert_eq!(p.classify("a.b = c"), LineShape::Malformed);
        assert_eq!(p.classify("= value"), LineShape::Malformed);
        assert_eq!(p.classify("two words = x"), LineShape::Malformed);
        assert_eq!(p.classify("no equals here"), LineShape::Malformed);
    }

    #[test]
    fn test_malformed_brackets() {
        assert_eq!(patterns().classify("]bad["), LineShape::Malformed);
    }

    // ==================== Priority tests ====================

    #[test]
    fn test_section_wins_over_key_value() {
        // A bracketed line is never reinterpreted as anything else.
        assert!(matches!(
            patterns().classify("[k]"),
            LineShape::Section { .. }
        ));
    }

    #[test]
    fn test_comment_wins_over_key_value() {
        assert_eq!(patterns().classify("#key = value"), LineShape::Comment);
        assert_eq!(patterns().classify(";key = value"), LineShape::Comment);
    }

    #[test]
    fn test_priority_matches_classification() {
        let p = patterns();
        let lines = ["[k]", "", "#k=v", "k=v"];
        for (shape, line) in ShapeKind::PRIORITY.iter().zip(lines) {
            assert_eq!(p.classify(line).kind(), Some(*shape), "{line:?}");
        }
    }

    #[test]
    fn test_shape_kind_priority_and_skips() {
        assert_eq!(ShapeKind::PRIORITY[0], ShapeKind::Section);
        assert_eq!(ShapeKind::PRIORITY[3], ShapeKind::KeyValue);
        assert!(ShapeKind::Blank.is_skipped());
        assert!(ShapeKind::Comment.is_skipped());
        assert!(!ShapeKind::Section.is_skipped());
        assert!(!ShapeKind::KeyValue.is_skipped());
    }

    #[test]
    fn test_line_shape_kind() {
        assert_eq!(LineShape::Blank.kind(), Some(ShapeKind::Blank));
        assert_eq!(LineShape::Malformed.kind(), None);
        assert_eq!(
            LineShape::KeyValue { name: "a", value: "" }.kind(),
            Some(ShapeKind::KeyValue)
        );
    }

    // ==================== Extraction tests ====================

    #[test]
    fn test_extract_trims_spaces_only() {
        assert_eq!(extract_capture("  John Doe  "), Some("John Doe"));
        assert_eq!(extract_capture("\tvalue\t"), Some("\tvalue\t"));
        assert_eq!(extract_capture(" \tvalue "), Some("\tvalue"));
    }

    #[test]
    fn test_extract_keeps_inner_spaces() {
        assert_eq!(extract_capture(" a  b   c "), Some("a  b   c"));
        assert_eq!(
            extract_capture(" \"payroll.dat\""),
            Some("\"payroll.dat\"")
        );
    }

    #[test]
    fn test_extract_empty_is_absent() {
        assert_eq!(extract_capture(""), None);
        assert_eq!(extract_capture("     "), None);
    }

    #[test]
    fn test_extract_tab_only_is_present() {
        assert_eq!(extract_capture("\t"), Some("\t"));
    }
}
