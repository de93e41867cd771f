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

//! Speedup commands - grouped bar charts of speedups over a baseline

use super::{load_tables, unescape};
use crate::error::CliError;
use benchplot_aggregate::{compute_speedups, SpeedupRequest, SpeedupTable};
use benchplot_core::TimingKind;
use benchplot_render::{render_speedup_chart, BarChartOptions};
use benchplot_select::Selector;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Files and timing column shared by the speedup charts.
#[derive(Debug, Clone, Copy)]
pub struct ChartJob<'a> {
    /// Normalized CSV tables, merged in order.
    pub inputs: &'a [PathBuf],
    /// Optional JSON plot configuration.
    pub config: Option<&'a Path>,
    /// SVG chart destination.
    pub output: &'a Path,
    /// Optional long-form CSV export of the plotted speedups.
    pub table: Option<&'a Path>,
    /// Compare kernel time instead of run time.
    pub kernel_time: bool,
}

impl ChartJob<'_> {
    fn timing(&self) -> TimingKind {
        TimingKind::from_kernel_flag(self.kernel_time)
    }
}

/// Labels of the three-way chart. Title and y label accept backslash escapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedupChart {
    /// Chart title.
    pub title: Option<String>,
    /// Y axis description.
    pub y_label: Option<String>,
    /// Fixed top of the y axis.
    pub y_limit: Option<f64>,
}

/// Plot the speedup of `denominator` over `numerator` per benchmark
/// configuration, with the value above every bar.
pub fn compare(job: &ChartJob<'_>, numerator: &str, denominator: &str) -> Result<(), CliError> {
    let request = SpeedupRequest::pairwise(numerator, denominator, job.timing());
    run(job, &request, |selector| {
        let num = selector.translate(numerator);
        let den = selector.translate(denominator);
        BarChartOptions {
            title: format!("Performance comparison\n{num} vs. {den}"),
            y_label: format!("Speedup of {den} over {num}"),
            value_labels: true,
            ..BarChartOptions::default()
        }
    })?;
    Ok(())
}

/// Plot the speedups of two variants over `numerator` per benchmark, with a
/// geometric mean group, and print the geometric means.
pub fn speedup(
    job: &ChartJob<'_>,
    numerator: &str,
    first: &str,
    second: &str,
    chart: &SpeedupChart,
) -> Result<(), CliError> {
    if let Some(limit) = chart.y_limit {
        if !(limit.is_finite() && limit > 0.0) {
            return Err(CliError::invalid_input(format!(
                "y-axis limit must be a positive number, got {limit}"
            )));
        }
    }

    let request = SpeedupRequest::three_way(numerator, first, second, job.timing());
    let speedups = run(job, &request, |_| BarChartOptions {
        title: chart.title.as_deref().map(unescape).unwrap_or_default(),
        y_label: chart.y_label.as_deref().map(unescape).unwrap_or_default(),
        y_limit: chart.y_limit,
        ..BarChartOptions::default()
    })?;

    println!("{:<12} {:<28} {:>10}", "Bench", "Implementation", "Speedup");
    for row in speedups.geo_means() {
        println!("{:<12} {:<28} {:>10.4}", row.category, row.series, row.speedup);
    }
    Ok(())
}

/// Load, aggregate, render and export in that order.
fn run(
    job: &ChartJob<'_>,
    request: &SpeedupRequest,
    options: impl FnOnce(&Selector) -> BarChartOptions,
) -> Result<SpeedupTable, CliError> {
    let table = load_tables(job.inputs)?;
    let selector = Selector::from_optional_path(job.config)?;

    let speedups = compute_speedups(&table, &selector, request)?;
    render_speedup_chart(&speedups, job.output, &options(&selector))?;

    if let Some(path) = job.table {
        let file = File::create(path).map_err(|e| CliError::io_error(path, e))?;
        speedups.write_csv(BufWriter::new(file))?;
    }

    println!(
        "Plotted {} categories to {}",
        speedups.order().len(),
        job.output.display()
    );
    Ok(speedups)
}
