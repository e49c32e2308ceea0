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

use clap::Parser;
use nv_odata_model::commands::process_command;
use nv_odata_model::commands::Commands;
use nv_odata_model::commands::Error;

/// Model checker CLI.
#[derive(Parser, Debug)]
#[command(name = "csdl-check")]
#[command(about = "OData CSDL schema checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let lines = process_command(&cli.command).inspect_err(|err| {
        if let Error::Invalid(issues) = err {
            for issue in issues {
                eprintln!("{issue}");
            }
        }
    })?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
