// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-line entry points
//!
//! One subcommand today:
//! - `Check`: read one or more CSDL files into a model and report the
//!   declared namespaces, or every issue the documents have.
//!
//! Commands return display lines instead of printing, so callers own
//! the output channel.

use crate::csdl::CsdlError;
use crate::csdl::CsdlReader;
use clap::Subcommand;
use std::fs::File;
use std::io::Error as IoError;
use std::io::Read as _;

/// Model checking commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check CSDL schemas.
    Check {
        /// CSDL documents to read. Documents may reference each other
        /// in any order.
        #[arg(required = true)]
        csdls: Vec<String>,
    },
}

/// Command processing errors.
#[derive(Debug)]
pub enum Error {
    AtLeastOneCsdlFileNeeded,
    Io(String, IoError),
    Csdl(String, CsdlError),
    Invalid(Vec<CsdlError>),
}

/// Process a command.
///
/// # Errors
///
/// Returns an error if command processing fails; `Error::Invalid`
/// carries every issue the documents produced.
pub fn process_command(command: &Commands) -> Result<Vec<String>, Error> {
    let mut display_output = Vec::new();
    match command {
        Commands::Check { csdls } => {
            if csdls.is_empty() {
                return Err(Error::AtLeastOneCsdlFileNeeded);
            }
            let mut reader = CsdlReader::new();
            for fname in csdls {
                let mut file = File::open(fname).map_err(|err| Error::Io(fname.clone(), err))?;
                let mut content = String::new();
                file.read_to_string(&mut content)
                    .map_err(|err| Error::Io(fname.clone(), err))?;
                reader
                    .add_document(&content)
                    .map_err(|err| Error::Csdl(fname.clone(), err))?;
            }
            let model = reader.finish().map_err(Error::Invalid)?;
            for name in model.names() {
                if let Some(handle) = model.get(name) {
                    display_output.push(format!("{}: {} types", name, handle.borrow().len()));
                }
            }
            Ok(display_output)
        }
    }
}
