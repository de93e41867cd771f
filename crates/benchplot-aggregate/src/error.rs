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

//! Error types for aggregation.
//!
//! Empty timing groups are not errors: they produce NaN speedups so the
//! remaining benchmarks still render.

use thiserror::Error;

/// Aggregation errors.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A speedup request needs at least one denominator variant.
    #[error("Speedup request needs at least one denominator")]
    NoDenominators,

    /// Error from the underlying CSV library while exporting a summary.
    #[error("CSV library error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while exporting a summary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for aggregation.
pub type Result<T> = std::result::Result<T, AggregateError>;
