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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print every section and key-value record
    ///
    /// Files are processed in order. Each file is announced with a
    /// `Processing <file>` line, followed by one line per record.
    Dump {
        /// Input file paths
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Emit one JSON object per record instead of text
        #[arg(short, long)]
        json: bool,
    },

    /// Parse files and report section and key counts
    Check {
        /// Input file paths
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the first open, read, or close failure, or an output error.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Dump { files, json } => commands::dump(&files, json),
            Commands::Check { files } => commands::check(&files),
        }
    }
}
