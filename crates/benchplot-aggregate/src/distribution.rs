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

//! Per-benchmark timing distributions for box plots.

use crate::stats::BoxStats;
use benchplot_core::{size_label, BenchTable, NormalizedRecord, TimingKind};
use std::collections::BTreeMap;
use tracing::debug;

/// Benchmark name prefixes left out of distribution plots by default.
pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 2] = ["Runtime_", "Micro"];

/// Which samples go into the distribution plots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRequest {
    /// Timing column to summarize.
    pub timing: TimingKind,
    /// Benchmarks starting with any of these are skipped.
    pub excluded_prefixes: Vec<String>,
}

impl Default for DistributionRequest {
    fn default() -> Self {
        Self {
            timing: TimingKind::default(),
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        }
    }
}

impl DistributionRequest {
    /// Default exclusions for the given timing column.
    pub fn new(timing: TimingKind) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    /// Whether `bench` is left out.
    pub fn excludes(&self, bench: &str) -> bool {
        self.excluded_prefixes
            .iter()
            .any(|prefix| bench.starts_with(prefix.as_str()))
    }
}

/// Samples of one variant at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionGroup {
    /// Size label `"{problem}x{local}"`.
    pub size: String,
    /// Variant name.
    pub series: String,
    /// Timing samples in input order.
    pub samples: Vec<f64>,
    /// Box summary of `samples`.
    pub stats: BoxStats,
}

/// Everything plotted in one benchmark panel.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkDistribution {
    /// Benchmark name.
    pub bench: String,
    /// Size labels in order of first appearance.
    pub sizes: Vec<String>,
    /// Variant names in order of first appearance.
    pub series: Vec<String>,
    /// One group per (size, variant) pair with samples.
    pub groups: Vec<DistributionGroup>,
}

impl BenchmarkDistribution {
    /// The group for `size` and `series`, if it has samples.
    pub fn group(&self, size: &str, series: &str) -> Option<&DistributionGroup> {
        self.groups
            .iter()
            .find(|group| group.size == size && group.series == series)
    }

    /// Smallest and largest drawn value over all groups.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.groups.iter().fold(None, |range, group| {
            let (low, high) = (group.stats.min(), group.stats.max());
            Some(match range {
                None => (low, high),
                Some((min, max)) => (f64::min(min, low), f64::max(max, high)),
            })
        })
    }
}

/// Group samples by benchmark, size and variant.
///
/// Benchmarks come out sorted by name. Benchmarks with an excluded prefix
/// or without any sample of the requested timing are skipped.
pub fn compute_distributions(
    table: &BenchTable,
    request: &DistributionRequest,
) -> Vec<BenchmarkDistribution> {
    let mut by_bench: BTreeMap<&str, Vec<&NormalizedRecord>> = BTreeMap::new();
    for record in table {
        by_bench.entry(record.bench.as_str()).or_default().push(record);
    }

    let mut distributions = Vec::new();
    for (bench, records) in by_bench {
        if request.excludes(bench) {
            debug!(bench, "excluded from distribution plots");
            continue;
        }

        let mut sizes: Vec<String> = Vec::new();
        let mut series: Vec<String> = Vec::new();
        let mut samples: BTreeMap<(usize, usize), Vec<f64>> = BTreeMap::new();
        for record in records {
            let Some(value) = request.timing.select(record) else {
                continue;
            };
            let size = size_label(&record.problem_size, &record.local_size);
            let size_index = position_or_push(&mut sizes, size);
            let series_index = position_or_push(&mut series, record.name.clone());
            samples.entry((size_index, series_index)).or_default().push(value);
        }

        if samples.is_empty() {
            debug!(bench, timing = request.timing.column_name(), "no samples");
            continue;
        }

        let groups = samples
            .into_iter()
            .filter_map(|((size_index, series_index), samples)| {
                let stats = BoxStats::from_samples(&samples)?;
                Some(DistributionGroup {
                    size: sizes[size_index].clone(),
                    series: series[series_index].clone(),
                    samples,
                    stats,
                })
            })
            .collect();

        distributions.push(BenchmarkDistribution {
            bench: bench.to_string(),
            sizes,
            series,
            groups,
        });
    }

    distributions
}

fn position_or_push(values: &mut Vec<String>, value: String) -> usize {
    match values.iter().position(|existing| *existing == value) {
        Some(index) => index,
        None => {
            values.push(value);
            values.len() - 1
        }
    }
}
