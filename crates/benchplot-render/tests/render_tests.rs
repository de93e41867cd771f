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

//! Charts written to disk.

use benchplot_aggregate::{
    compute_distributions, compute_speedups, DistributionRequest, SpeedupRequest,
};
use benchplot_core::{BenchTable, NormalizedRecord, SampleMeta, TimingKind};
use benchplot_render::{render_distributions, render_speedup_chart, BarChartOptions, BoxPlotOptions};
use benchplot_select::Selector;
use std::fs;

fn record(bench: &str, name: &str, size: &str, value: f64) -> NormalizedRecord {
    SampleMeta {
        bench: bench.to_string(),
        name: name.to_string(),
        config: "default".to_string(),
        compiler: "acpp".to_string(),
        device: "gpu".to_string(),
        verified: true,
        problem_size: size.to_string(),
        local_size: "256".to_string(),
    }
    .run_time_sample(value)
}

fn table() -> BenchTable {
    let mut records = Vec::new();
    for (bench, base) in [("Sobel3", 4.0), ("NBody", 9.0), ("Kmeans", 2.0)] {
        for i in 0..5 {
            let jitter = i as f64 * 0.1;
            records.push(record(bench, "acpp", "1024", base + jitter));
            records.push(record(bench, "dpcpp", "1024", base / 2.0 + jitter));
            records.push(record(bench, "acpp-generic", "2048", base / 3.0 + jitter));
        }
    }
    records.into_iter().collect()
}

#[test]
fn test_three_way_chart_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("external.svg");

    let request = SpeedupRequest::three_way("acpp", "dpcpp", "acpp-generic", TimingKind::Runtime);
    let speedups = compute_speedups(&table(), &Selector::All, &request).unwrap();
    let options = BarChartOptions {
        title: "Speedup\nacpp baseline".to_string(),
        y_label: "Speedup over acpp".to_string(),
        y_limit: Some(5.0),
        value_labels: true,
        ..BarChartOptions::default()
    };
    render_speedup_chart(&speedups, &path, &options).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("acpp baseline"));
    assert!(svg.contains("dpcpp"));
}

#[test]
fn test_pairwise_chart_with_undefined_speedups() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compare.svg");

    // acpp-generic only ran at 2048, so every 1024 bar is missing.
    let request = SpeedupRequest::pairwise("acpp", "acpp-generic", TimingKind::Runtime);
    let speedups = compute_speedups(&table(), &Selector::All, &request).unwrap();
    assert!(speedups.rows().iter().all(|row| row.speedup.is_nan()));

    render_speedup_chart(&speedups, &path, &BarChartOptions::default()).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("<svg"));
}

#[test]
fn test_distribution_plots_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("internal.svg");

    let distributions = compute_distributions(&table(), &DistributionRequest::default());
    assert_eq!(distributions.len(), 3);
    render_distributions(&distributions, &path, &BoxPlotOptions::default()).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    for bench in ["Kmeans", "NBody", "Sobel3"] {
        assert!(svg.contains(bench), "missing panel title {bench}");
    }
}

#[test]
fn test_missing_directory_is_a_drawing_error() {
    let request = SpeedupRequest::pairwise("acpp", "dpcpp", TimingKind::Runtime);
    let speedups = compute_speedups(&table(), &Selector::All, &request).unwrap();
    let err = render_speedup_chart(
        &speedups,
        "/nonexistent/dir/chart.svg",
        &BarChartOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, benchplot_render::RenderError::Drawing(_)));
}

#[test]
fn test_empty_selection_still_writes_charts() {
    let dir = tempfile::tempdir().unwrap();

    let resolver = benchplot_select::Resolver::from_json_str("{}").unwrap();
    let request = SpeedupRequest::pairwise("acpp", "dpcpp", TimingKind::Runtime);
    let speedups = compute_speedups(&table(), &Selector::from(resolver), &request).unwrap();
    assert!(speedups.is_empty());
    let chart = dir.path().join("external.svg");
    render_speedup_chart(&speedups, &chart, &BarChartOptions::default()).unwrap();
    assert!(fs::read_to_string(&chart).unwrap().contains("Speedup"));

    let runtime_only: BenchTable = vec![
        record("Runtime_X", "acpp", "1024", 1.0),
        record("Runtime_X", "dpcpp", "1024", 2.0),
    ]
    .into_iter()
    .collect();
    let distributions = compute_distributions(&runtime_only, &DistributionRequest::default());
    assert!(distributions.is_empty());
    let boxes = dir.path().join("internal.svg");
    render_distributions(&distributions, &boxes, &BoxPlotOptions::default()).unwrap();
    assert!(fs::read_to_string(&boxes).unwrap().contains("<svg"));
}
