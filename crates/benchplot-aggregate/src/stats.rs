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

//! Summary statistics over timing samples.
//!
//! Undefined results are NaN rather than errors: the mean of nothing and
//! the geometric mean of no defined value are both NaN.

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Geometric mean of the non-NaN values; NaN when none remain.
///
/// # Examples
///
/// ```
/// use benchplot_aggregate::stats::geometric_mean;
///
/// assert!((geometric_mean([2.0, 8.0]) - 4.0).abs() < 1e-12);
/// assert!((geometric_mean([2.0, f64::NAN, 8.0]) - 4.0).abs() < 1e-12);
/// assert!(geometric_mean([f64::NAN]).is_nan());
/// ```
pub fn geometric_mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (log_sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v.ln(), n + 1));

    if count == 0 {
        f64::NAN
    } else {
        (log_sum / count as f64).exp()
    }
}

/// Percentile `p` (0.0..=1.0) of sorted values, linearly interpolated.
///
/// NaN for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = p.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64)
        }
    }
}

/// Whisker reach in interquartile ranges.
pub const WHISKER_IQR: f64 = 1.5;

/// Box-and-whisker summary of a sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Smallest sample within `q1 - 1.5 IQR`.
    pub lower_whisker: f64,
    /// Largest sample within `q3 + 1.5 IQR`.
    pub upper_whisker: f64,
    /// Samples beyond the whiskers.
    pub outliers: Vec<f64>,
    /// Number of samples summarized.
    pub count: usize,
}

impl BoxStats {
    /// Summarize `samples`, ignoring NaN. `None` when nothing remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_aggregate::stats::BoxStats;
    ///
    /// let stats = BoxStats::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.q1, 2.0);
    /// assert_eq!(stats.q3, 4.0);
    /// assert!(stats.outliers.is_empty());
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let reach = WHISKER_IQR * (q3 - q1);
        let (low_fence, high_fence) = (q1 - reach, q3 + reach);

        let inside = || sorted.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
        let lower_whisker = inside().fold(f64::INFINITY, f64::min);
        let upper_whisker = inside().fold(f64::NEG_INFINITY, f64::max);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
            count: sorted.len(),
        })
    }

    /// Lowest drawn value (whisker or outlier).
    pub fn min(&self) -> f64 {
        self.outliers
            .iter()
            .copied()
            .fold(self.lower_whisker, f64::min)
    }

    /// Highest drawn value (whisker or outlier).
    pub fn max(&self) -> f64 {
        self.outliers
            .iter()
            .copied()
            .fold(self.upper_whisker, f64::max)
    }
}
