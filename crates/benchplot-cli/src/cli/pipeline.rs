// Dweve BenchPlot - Benchmark result post-processing toolkit
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

//! Pipeline commands operating on raw benchmark logs.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Raw log processing commands.
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Convert a raw benchmark log into a normalized CSV table
    ///
    /// The log starts with the variant name and the run configuration,
    /// followed by one header/data line pair per benchmark. Every timing
    /// sample becomes one row of the output table.
    Reshape {
        /// Raw benchmark log
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "sycl-bench.csv")]
        output: PathBuf,
    },
}

impl PipelineCommands {
    /// Execute the pipeline command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            PipelineCommands::Reshape { input, output } => commands::reshape(&input, &output),
        }
    }
}
