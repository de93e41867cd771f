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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by what they consume:
//!
//! - [`pipeline`]: raw log processing (reshape)
//! - [`plot`]: charts from normalized tables (compare, speedup, distribution)
//! - [`utility`]: shell completion

mod pipeline;
mod plot;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use pipeline::PipelineCommands;
pub use plot::PlotCommands;
pub use utility::UtilityCommands;

/// BenchPlot - benchmark result post-processing toolkit
///
/// # Examples
///
/// ```bash
/// # Normalize a raw benchmark log
/// benchplot reshape run.log -o acpp.csv
///
/// # Speedup of DPC++ over AdaptiveCpp per benchmark configuration
/// benchplot compare acpp.csv dpcpp.csv -n acpp -d dpcpp -c plot.json
///
/// # Two variants against a baseline, with geometric means
/// benchplot speedup *.csv -n acpp --d1 dpcpp --d2 acpp-generic -t 'Speedup\nA100'
/// ```
#[derive(Parser)]
#[command(name = "benchplot")]
#[command(author, version, about = "BenchPlot - benchmark result post-processing toolkit", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Pipeline (reshape)
/// ├── Plot (compare, speedup, distribution)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Pipeline commands - flattened to appear at top level
    #[command(flatten)]
    Pipeline(PipelineCommands),

    // Plot commands - flattened to appear at top level
    #[command(flatten)]
    Plot(PlotCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the first error of the command; nothing is written after it.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Pipeline(cmd) => cmd.execute(),
            Commands::Plot(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
