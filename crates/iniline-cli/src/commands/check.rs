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

//! Check command - parse and summarise

use super::for_each_record;
use crate::error::CliError;
use colored::Colorize;

/// Parse each file completely and print how many sections and keys it has.
///
/// # Errors
///
/// Returns the first open, read, or close failure.
pub fn check(files: &[String]) -> Result<(), CliError> {
    for file in files {
        let mut sections = 0usize;
        let mut keys = 0usize;

        for_each_record(file, |_, record| {
            if record.is_section() {
                sections += 1;
            } else {
                keys += 1;
            }
            Ok(())
        })?;

        println!(
            "{} {}: {} sections, {} keys",
            "✓".green(),
            file,
            sections,
            keys
        );
    }
    Ok(())
}
