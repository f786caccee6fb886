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

//! Structured error types for the iniline CLI.

use iniline::IniError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The reader operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open,
    Read,
    Close,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Read => "read",
            Self::Close => "close",
        })
    }
}

/// The main error type for CLI operations.
///
/// Parsing stops at the first error; the message names the failing
/// operation, the file, and the error kind.
#[derive(Error, Debug)]
pub enum CliError {
    /// A reader operation on an input file failed.
    #[error("{operation} failed for '{}' [{}]: {source}", path.display(), source.kind())]
    Ini {
        operation: Operation,
        path: PathBuf,
        #[source]
        source: IniError,
    },

    /// Writing results to stdout failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// Serializing a record to JSON failed.
    #[error("JSON format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Wrap a reader error with the operation and file it came from.
    pub fn ini(operation: Operation, path: impl Into<PathBuf>, source: IniError) -> Self {
        Self::Ini {
            operation,
            path: path.into(),
            source,
        }
    }
}
