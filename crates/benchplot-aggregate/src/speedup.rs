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

//! Speedup aggregation.
//!
//! A speedup is the ratio of mean timings, `mean(numerator) /
//! mean(denominator)`, computed per category for each denominator variant.
//! Categories are either aliased benchmark names or benchmark configuration
//! keys, and only rows the selector plots take part.

use crate::error::{AggregateError, Result};
use crate::stats::{geometric_mean, mean};
use benchplot_core::{BenchTable, TimingKind};
use benchplot_select::Selector;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use tracing::{debug, warn};

/// Category of the per-denominator geometric mean row.
pub const GEO_MEAN_CATEGORY: &str = "geo.-mean";

/// What a speedup category is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// One category per aliased benchmark name.
    #[default]
    Benchmark,
    /// One category per benchmark configuration key.
    BenchConfig,
}

/// Parameters of one speedup computation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupRequest {
    /// Baseline variant (raw or display name).
    pub numerator: String,
    /// Compared variants, in output order.
    pub denominators: Vec<String>,
    /// Which timing column is compared.
    pub timing: TimingKind,
    /// How rows are grouped into categories.
    pub grouping: Grouping,
    /// Append a geometric mean row per denominator.
    pub geo_mean: bool,
}

impl SpeedupRequest {
    /// Build a request without geometric mean rows.
    ///
    /// # Errors
    ///
    /// Returns `AggregateError::NoDenominators` if `denominators` is empty.
    pub fn new(
        numerator: impl Into<String>,
        denominators: Vec<String>,
        timing: TimingKind,
        grouping: Grouping,
    ) -> Result<Self> {
        if denominators.is_empty() {
            return Err(AggregateError::NoDenominators);
        }
        Ok(Self {
            numerator: numerator.into(),
            denominators,
            timing,
            grouping,
            geo_mean: false,
        })
    }

    /// Two denominators per benchmark, with geometric means.
    pub fn three_way(
        numerator: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        timing: TimingKind,
    ) -> Self {
        Self {
            numerator: numerator.into(),
            denominators: vec![first.into(), second.into()],
            timing,
            grouping: Grouping::Benchmark,
            geo_mean: true,
        }
    }

    /// One denominator per benchmark configuration.
    pub fn pairwise(
        numerator: impl Into<String>,
        denominator: impl Into<String>,
        timing: TimingKind,
    ) -> Self {
        Self {
            numerator: numerator.into(),
            denominators: vec![denominator.into()],
            timing,
            grouping: Grouping::BenchConfig,
            geo_mean: false,
        }
    }

    /// Toggle geometric mean rows.
    pub fn with_geo_mean(mut self, geo_mean: bool) -> Self {
        self.geo_mean = geo_mean;
        self
    }
}

/// One speedup value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedupRow {
    /// Benchmark, configuration key or `geo.-mean`.
    pub category: String,
    /// Display name of the denominator variant.
    pub series: String,
    /// `mean(numerator) / mean(series)`; NaN when either group is empty.
    pub speedup: f64,
}

/// Result of a speedup computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedupTable {
    rows: Vec<SpeedupRow>,
    order: Vec<String>,
}

impl SpeedupTable {
    /// All rows, grouped by denominator and in category order within.
    pub fn rows(&self) -> &[SpeedupRow] {
        &self.rows
    }

    /// Category order: sorted categories, then `geo.-mean` if present.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Distinct series in request order.
    pub fn series(&self) -> Vec<&str> {
        let mut series: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !series.contains(&row.series.as_str()) {
                series.push(&row.series);
            }
        }
        series
    }

    /// Speedup of `series` in `category`.
    pub fn get(&self, category: &str, series: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.category == category && row.series == series)
            .map(|row| row.speedup)
    }

    /// Geometric mean rows.
    pub fn geo_means(&self) -> impl Iterator<Item = &SpeedupRow> {
        self.rows
            .iter()
            .filter(|row| row.category == GEO_MEAN_CATEGORY)
    }

    /// True if no category was selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the rows as long-form CSV (`category,series,speedup`).
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Compute speedups of every denominator over the numerator.
///
/// Variant names in the request are translated through the selector before
/// matching, so raw and display names both work.
///
/// # Examples
///
/// ```
/// use benchplot_aggregate::{compute_speedups, SpeedupRequest};
/// use benchplot_core::{BenchTable, SampleMeta, TimingKind};
/// use benchplot_select::Selector;
///
/// let meta = |name: &str| SampleMeta {
///     bench: "A".into(),
///     name: name.into(),
///     config: String::new(),
///     compiler: String::new(),
///     device: String::new(),
///     verified: true,
///     problem_size: "10".into(),
///     local_size: "2".into(),
/// };
/// let table: BenchTable = vec![
///     meta("v1").run_time_sample(10.0),
///     meta("v2").run_time_sample(5.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let request = SpeedupRequest::pairwise("v1", "v2", TimingKind::Runtime);
/// let speedups = compute_speedups(&table, &Selector::All, &request).unwrap();
/// assert_eq!(speedups.get("A (10x2)", "v2"), Some(2.0));
/// ```
pub fn compute_speedups(
    table: &BenchTable,
    selector: &Selector,
    request: &SpeedupRequest,
) -> Result<SpeedupTable> {
    if request.denominators.is_empty() {
        return Err(AggregateError::NoDenominators);
    }

    let numerator = selector.translate(&request.numerator);
    let denominators: Vec<&str> = request
        .denominators
        .iter()
        .map(|name| selector.translate(name))
        .collect();

    // category -> variant -> samples
    let mut groups: BTreeMap<String, HashMap<&str, Vec<f64>>> = BTreeMap::new();
    for record in table {
        let Some(value) = request.timing.select(record) else {
            continue;
        };
        let key = selector.bench_key(&record.bench, &record.problem_size, &record.local_size);
        if !selector.should_plot(&key) {
            continue;
        }
        let category = match request.grouping {
            Grouping::Benchmark => selector.translate(&record.bench).to_string(),
            Grouping::BenchConfig => key.into_string(),
        };
        groups
            .entry(category)
            .or_default()
            .entry(selector.translate(&record.name))
            .or_default()
            .push(value);
    }

    let group_mean = |variants: &HashMap<&str, Vec<f64>>, name: &str| {
        variants
            .get(name)
            .map_or(f64::NAN, |samples| mean(samples))
    };

    let mut rows = Vec::with_capacity(denominators.len() * (groups.len() + 1));
    for denominator in &denominators {
        let first = rows.len();
        for (category, variants) in &groups {
            let speedup = group_mean(variants, numerator) / group_mean(variants, denominator);
            if speedup.is_nan() {
                debug!(%category, numerator, denominator, "speedup undefined for empty group");
            }
            rows.push(SpeedupRow {
                category: category.clone(),
                series: denominator.to_string(),
                speedup,
            });
        }

        if request.geo_mean {
            let geo_mean = geometric_mean(rows[first..].iter().map(|row| row.speedup));
            if geo_mean.is_nan() {
                warn!(denominator, "geometric mean undefined, no speedup is defined");
            }
            rows.push(SpeedupRow {
                category: GEO_MEAN_CATEGORY.to_string(),
                series: denominator.to_string(),
                speedup: geo_mean,
            });
        }
    }

    let mut order: Vec<String> = groups.into_keys().collect();
    if request.geo_mean {
        order.push(GEO_MEAN_CATEGORY.to_string());
    }

    Ok(SpeedupTable { rows, order })
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_core::{NormalizedRecord, SampleMeta};
    use benchplot_select::Resolver;

    fn record(bench: &str, name: &str, size: &str, run_time: f64) -> NormalizedRecord {
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
        .run_time_sample(run_time)
    }

    #[test]
    fn test_ratio_of_means() {
        let table: BenchTable = vec![
            record("A", "v1", "1024", 8.0),
            record("A", "v1", "1024", 12.0),
            record("A", "v2", "1024", 4.0),
            record("A", "v2", "1024", 6.0),
        ]
        .into_iter()
        .collect();

        let request = SpeedupRequest::three_way("v1", "v2", "v2", TimingKind::Runtime);
        let speedups = compute_speedups(&table, &Selector::All, &request).unwrap();
        assert_eq!(speedups.get("A", "v2"), Some(2.0));
    }

    #[test]
    fn test_pairwise_groups_by_config() {
        let table: BenchTable = vec![
            record("A", "v1", "1024", 10.0),
            record("A", "v2", "1024", 5.0),
            record("A", "v1", "2048", 20.0),
            record("A", "v2", "2048", 40.0),
        ]
        .into_iter()
        .collect();

        let request = SpeedupRequest::pairwise("v1", "v2", TimingKind::Runtime);
        let speedups = compute_speedups(&table, &Selector::All, &request).unwrap();
        assert_eq!(speedups.order(), ["A (1024x256)", "A (2048x256)"]);
        assert_eq!(speedups.get("A (1024x256)", "v2"), Some(2.0));
        assert_eq!(speedups.get("A (2048x256)", "v2"), Some(0.5));
        assert_eq!(speedups.geo_means().count(), 0);
    }

    #[test]
    fn test_wrong_timing_is_ignored() {
        let table: BenchTable = vec![record("A", "v1", "1", 1.0), record("A", "v2", "1", 1.0)]
            .into_iter()
            .collect();

        let request = SpeedupRequest::pairwise("v1", "v2", TimingKind::Kernel);
        let speedups = compute_speedups(&table, &Selector::All, &request).unwrap();
        assert!(speedups.is_empty());
        assert!(speedups.order().is_empty());
    }

    #[test]
    fn test_names_are_translated() {
        let resolver = Resolver::from_json_str(
            r#"{"alias":{"acpp":"AdaptiveCpp","dpcpp":"DPC++","A_fp32":"A"},
                "benchmarks":[{"name":"A_fp32"}]}"#,
        )
        .unwrap();
        let table: BenchTable = vec![
            record("A_fp32", "acpp", "1", 9.0),
            record("A_fp32", "dpcpp", "1", 3.0),
            record("B", "dpcpp", "1", 3.0),
        ]
        .into_iter()
        .collect();

        // Raw and display names resolve to the same variant.
        let request = SpeedupRequest::three_way("acpp", "DPC++", "dpcpp", TimingKind::Runtime);
        let speedups = compute_speedups(&table, &Selector::from(resolver), &request).unwrap();
        assert_eq!(speedups.order(), ["A", GEO_MEAN_CATEGORY]);
        assert_eq!(speedups.get("A", "DPC++"), Some(3.0));
        assert_eq!(speedups.series(), ["DPC++"]);
    }

    #[test]
    fn test_rows_grouped_by_denominator() {
        let table: BenchTable = vec![
            record("B", "base", "1", 4.0),
            record("A", "base", "1", 4.0),
            record("A", "x", "1", 2.0),
            record("B", "x", "1", 1.0),
            record("A", "y", "1", 4.0),
            record("B", "y", "1", 8.0),
        ]
        .into_iter()
        .collect();

        let request = SpeedupRequest::three_way("base", "x", "y", TimingKind::Runtime);
        let speedups = compute_speedups(&table, &Selector::All, &request).unwrap();

        let layout: Vec<(&str, &str)> = speedups
            .rows()
            .iter()
            .map(|row| (row.series.as_str(), row.category.as_str()))
            .collect();
        assert_eq!(
            layout,
            [
                ("x", "A"),
                ("x", "B"),
                ("x", GEO_MEAN_CATEGORY),
                ("y", "A"),
                ("y", "B"),
                ("y", GEO_MEAN_CATEGORY),
            ]
        );
        assert_eq!(speedups.series(), ["x", "y"]);
        let geo_mean = speedups.get(GEO_MEAN_CATEGORY, "y").unwrap();
        assert!((geo_mean - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_all_undefined_geo_mean_is_nan() {
        let table: BenchTable = vec![record("A", "v1", "1", 1.0)].into_iter().collect();
        let request = SpeedupRequest::three_way("v1", "v2", "v3", TimingKind::Runtime);
        let speedups = compute_speedups(&table, &Selector::All, &request).unwrap();
        assert!(speedups.geo_means().all(|row| row.speedup.is_nan()));
    }

    #[test]
    fn test_new_requires_denominators() {
        let err = SpeedupRequest::new("v1", Vec::new(), TimingKind::Runtime, Grouping::Benchmark)
            .unwrap_err();
        assert!(matches!(err, AggregateError::NoDenominators));

        let request = SpeedupRequest::new(
            "v1",
            vec!["v2".to_string()],
            TimingKind::Runtime,
            Grouping::Benchmark,
        )
        .unwrap()
        .with_geo_mean(true);
        assert!(request.geo_mean);
    }

    #[test]
    fn test_write_csv() {
        let table: BenchTable = vec![record("A", "v1", "1", 10.0), record("A", "v2", "1", 4.0)]
            .into_iter()
            .collect();
        let request = SpeedupRequest::new(
            "v1",
            vec!["v2".to_string(), "v3".to_string()],
            TimingKind::Runtime,
            Grouping::Benchmark,
        )
        .unwrap();
        let speedups = compute_speedups(&table, &Selector::All, &request).unwrap();

        let mut out = Vec::new();
        speedups.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "category,series,speedup");
        assert_eq!(lines[1], "A,v2,2.5");
        assert_eq!(lines[2], "A,v3,NaN");
        assert_eq!(lines.len(), 3);
    }
}
