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

//! CLI command implementations

mod check;
mod dump;

pub use check::check;
pub use dump::dump;

use crate::error::{CliError, Operation};
use iniline::{IniReader, PatternSet, ReadStatus, Record};
use std::fs::File;
use tracing::debug;

/// Stream every record of `path` through `visit`, then close the file.
///
/// Stops at the first error. A failure inside `visit` is returned as is; the
/// file is dropped without an explicit close in that case.
pub fn for_each_record<F>(path: &str, mut visit: F) -> Result<(), CliError>
where
    F: FnMut(&IniReader<File>, &Record) -> Result<(), CliError>,
{
    let mut reader = IniReader::open(path, PatternSet::shared())
        .map_err(|e| CliError::ini(Operation::Open, path, e))?;
    debug!(path, "processing");

    let mut record = Record::new();
    loop {
        match reader.read_next(&mut record) {
            Ok(ReadStatus::Matched) => visit(&reader, &record)?,
            Ok(ReadStatus::EndOfInput) => break,
            Err(e) => return Err(CliError::ini(Operation::Read, path, e)),
        }
    }

    reader
        .close()
        .map_err(|e| CliError::ini(Operation::Close, path, e))
}
