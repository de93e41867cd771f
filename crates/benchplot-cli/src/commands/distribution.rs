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

//! Distribution command - per-benchmark timing box plots

use super::load_tables;
use crate::error::CliError;
use benchplot_aggregate::{compute_distributions, DistributionRequest};
use benchplot_core::TimingKind;
use benchplot_render::{render_distributions, BoxPlotOptions};
use std::path::{Path, PathBuf};

/// Draw one box plot per benchmark from the merged `inputs`.
///
/// Benchmarks named `Runtime_*` or `Micro*` are left out.
pub fn distribution(inputs: &[PathBuf], output: &Path, kernel_time: bool) -> Result<(), CliError> {
    let table = load_tables(inputs)?;

    let timing = TimingKind::from_kernel_flag(kernel_time);
    let distributions = compute_distributions(&table, &DistributionRequest::new(timing));

    let options = BoxPlotOptions {
        y_label: timing.column_name().to_string(),
        ..BoxPlotOptions::default()
    };
    render_distributions(&distributions, output, &options)?;

    println!(
        "Plotted {} benchmarks to {}",
        distributions.len(),
        output.display()
    );
    Ok(())
}
