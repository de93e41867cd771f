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

//! Plot commands operating on normalized CSV tables.

use crate::commands::{self, ChartJob, SpeedupChart};
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Chart commands. Every input table is merged before plotting.
#[derive(Subcommand)]
pub enum PlotCommands {
    /// Plot the speedup of one variant over another per benchmark configuration
    Compare {
        /// Normalized CSV tables
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Output SVG path
        #[arg(short, long, default_value = "external.svg")]
        output: PathBuf,

        /// Compare kernel time instead of run time
        #[arg(long)]
        kernel_time: bool,

        /// JSON plot configuration (aliases and benchmark selection)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Baseline variant
        #[arg(short, long)]
        numerator: String,

        /// Compared variant
        #[arg(short, long)]
        denominator: String,

        /// Also write the plotted speedups to this CSV file
        #[arg(long, value_name = "CSV")]
        table: Option<PathBuf>,
    },

    /// Plot the speedups of two variants over a baseline per benchmark
    ///
    /// A final group shows the geometric mean of each variant's speedups;
    /// the geometric means are also printed.
    Speedup {
        /// Normalized CSV tables
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Output SVG path
        #[arg(short, long, default_value = "external.svg")]
        output: PathBuf,

        /// Compare kernel time instead of run time
        #[arg(long)]
        kernel_time: bool,

        /// JSON plot configuration (aliases and benchmark selection)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Baseline variant
        #[arg(short, long)]
        numerator: String,

        /// First compared variant
        #[arg(long, visible_alias = "d1")]
        denominator1: String,

        /// Second compared variant
        #[arg(long, visible_alias = "d2")]
        denominator2: String,

        /// Chart title (backslash escapes such as \n are resolved)
        #[arg(short, long)]
        title: Option<String>,

        /// Top of the y axis
        #[arg(short, long)]
        ylim: Option<f64>,

        /// Y axis label (backslash escapes such as \n are resolved)
        #[arg(short = 'l', long)]
        ylabel: Option<String>,

        /// Also write the plotted speedups to this CSV file
        #[arg(long, value_name = "CSV")]
        table: Option<PathBuf>,
    },

    /// Plot per-benchmark timing distributions as box plots
    ///
    /// One panel per benchmark with the problem/local sizes on the x axis and
    /// one box per variant. Runtime_* and Micro* benchmarks are skipped.
    Distribution {
        /// Normalized CSV tables
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Output SVG path
        #[arg(short, long, default_value = "internal.svg")]
        output: PathBuf,

        /// Plot kernel time instead of run time
        #[arg(long)]
        kernel_time: bool,
    },
}

impl PlotCommands {
    /// Execute the plot command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            PlotCommands::Compare {
                inputs,
                output,
                kernel_time,
                config,
                numerator,
                denominator,
                table,
            } => {
                let job = ChartJob {
                    inputs: &inputs,
                    config: config.as_deref(),
                    output: &output,
                    table: table.as_deref(),
                    kernel_time,
                };
                commands::compare(&job, &numerator, &denominator)
            }
            PlotCommands::Speedup {
                inputs,
                output,
                kernel_time,
                config,
                numerator,
                denominator1,
                denominator2,
                title,
                ylim,
                ylabel,
                table,
            } => {
                let job = ChartJob {
                    inputs: &inputs,
                    config: config.as_deref(),
                    output: &output,
                    table: table.as_deref(),
                    kernel_time,
                };
                let chart = SpeedupChart {
                    title,
                    y_label: ylabel,
                    y_limit: ylim,
                };
                commands::speedup(&job, &numerator, &denominator1, &denominator2, &chart)
            }
            PlotCommands::Distribution {
                inputs,
                output,
                kernel_time,
            } => commands::distribution(&inputs, &output, kernel_time),
        }
    }
}
