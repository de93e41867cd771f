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

//! Speedup and timing distribution aggregation.
//!
//! [`compute_speedups`] reduces a merged [`BenchTable`](benchplot_core::BenchTable)
//! to one speedup per category and denominator variant, optionally followed
//! by a geometric mean row. [`compute_distributions`] groups the raw samples
//! per benchmark, size and variant for box plots.
//!
//! Empty groups never fail: their speedups are NaN and the category keeps
//! its place in the order, so charts show a gap instead of dropping it.
//!
//! # Examples
//!
//! ```
//! use benchplot_aggregate::{compute_speedups, SpeedupRequest, GEO_MEAN_CATEGORY};
//! use benchplot_core::{BenchTable, SampleMeta, TimingKind};
//! use benchplot_select::Selector;
//!
//! let sample = |bench: &str, name: &str, value: f64| {
//!     SampleMeta {
//!         bench: bench.into(),
//!         name: name.into(),
//!         config: String::new(),
//!         compiler: String::new(),
//!         device: String::new(),
//!         verified: true,
//!         problem_size: "1".into(),
//!         local_size: "1".into(),
//!     }
//!     .run_time_sample(value)
//! };
//! let table: BenchTable = vec![
//!     sample("B", "base", 8.0),
//!     sample("B", "new", 1.0),
//!     sample("A", "base", 2.0),
//!     sample("A", "new", 1.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let request = SpeedupRequest::three_way("base", "new", "other", TimingKind::Runtime);
//! let speedups = compute_speedups(&table, &Selector::All, &request).unwrap();
//!
//! assert_eq!(speedups.order(), ["A", "B", GEO_MEAN_CATEGORY]);
//! let geo_mean = speedups.get(GEO_MEAN_CATEGORY, "new").unwrap();
//! assert!((geo_mean - 4.0).abs() < 1e-9);
//! assert!(speedups.get("A", "other").unwrap().is_nan());
//! ```

pub mod distribution;
mod error;
pub mod speedup;
pub mod stats;

pub use distribution::{
    compute_distributions, BenchmarkDistribution, DistributionGroup, DistributionRequest,
    DEFAULT_EXCLUDED_PREFIXES,
};
pub use error::{AggregateError, Result};
pub use speedup::{
    compute_speedups, Grouping, SpeedupRequest, SpeedupRow, SpeedupTable, GEO_MEAN_CATEGORY,
};
pub use stats::BoxStats;
