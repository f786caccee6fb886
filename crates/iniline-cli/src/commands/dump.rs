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

//! Dump command - print parsed records

use super::for_each_record;
use crate::error::CliError;
use iniline::{Entry, Record};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonRecord<'a> {
    file: &'a str,
    line: usize,
    #[serde(flatten)]
    record: &'a Record,
}

/// Print every record of each file in order.
///
/// Text output matches the classic demonstration program:
///
/// ```text
/// Processing settings.ini
/// Now in section 'owner'
/// Read key 'name' with value 'John Doe'
/// ```
///
/// A key with nothing after `=` prints as `Read key 'k' with no value`.
///
/// With `json`, each record becomes one JSON object carrying the file name
/// and the physical line number.
///
/// # Errors
///
/// Returns the first open, read, or close failure. Records printed before
/// the failure stay printed.
pub fn dump(files: &[String], json: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for file in files {
        if !json {
            writeln!(out, "Processing {}", file)?;
        }

        for_each_record(file, |reader, record| {
            if json {
                let line = JsonRecord {
                    file: file.as_str(),
                    line: reader.line_number(),
                    record,
                };
                serde_json::to_writer(&mut out, &line)?;
                writeln!(out)?;
            } else {
                write_text(&mut out, record)?;
            }
            Ok(())
        })?;
    }

    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    match record.entry() {
        Some(Entry::Section(name)) => writeln!(out, "Now in section '{}'", name),
        Some(Entry::KeyValue(name, Some(value))) => {
            writeln!(out, "Read key '{}' with value '{}'", name, value)
        }
        Some(Entry::KeyValue(name, None)) => writeln!(out, "Read key '{}' with no value", name),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text_section() {
        let mut out = Vec::new();
        write_text(&mut out, &Record::section("owner")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Now in section 'owner'\n");
    }

    #[test]
    fn test_write_text_key_value() {
        let mut out = Vec::new();
        write_text(&mut out, &Record::key_value("name", "John Doe")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Read key 'name' with value 'John Doe'\n"
        );
    }

    #[test]
    fn test_write_text_key_without_value() {
        let mut out = Vec::new();
        write_text(&mut out, &Record::key_value("empty", None)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Read key 'empty' with no value\n"
        );
    }

    #[test]
    fn test_write_text_unset_prints_nothing() {
        let mut out = Vec::new();
        write_text(&mut out, &Record::new()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_record_shape() {
        let record = Record::key_value("port", "143");
        let json = serde_json::to_value(JsonRecord {
            file: "a.ini",
            line: 6,
            record: &record,
        })
        .unwrap();

        assert_eq!(json["file"], "a.ini");
        assert_eq!(json["line"], 6);
        assert_eq!(json["name"], "port");
        assert_eq!(json["value"], "143");
        assert_eq!(json["is_section"], false);
        assert_eq!(json["is_set"], true);
    }

    #[test]
    fn test_json_absent_value_is_null() {
        let record = Record::key_value("empty", None);
        let json = serde_json::to_value(JsonRecord {
            file: "a.ini",
            line: 1,
            record: &record,
        })
        .unwrap();

        assert_eq!(json["name"], "empty");
        assert!(json["value"].is_null());
    }
}
