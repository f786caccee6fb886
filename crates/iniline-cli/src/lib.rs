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

//! iniline CLI library.
//!
//! Command implementations for the `iniline` binary, a reference consumer of
//! the [`iniline`] streaming parser.
//!
//! # Commands
//!
//! - **dump**: print every record of one or more files
//! - **check**: parse files fully and summarise what they contain
//!
//! Processing stops at the first error. The error message names the failing
//! operation (open, read, close), the file, and the error kind.

pub mod cli;
pub mod commands;
pub mod error;
