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

//! Error types for normalized table operations.

use thiserror::Error;

/// Errors raised while reading or writing the normalized CSV.
///
/// # Examples
///
/// ```
/// use benchplot_core::CoreError;
///
/// let err = CoreError::InvalidRow {
///     row: 3,
///     reason: "both Kernel and Runtime are populated".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid row 3: both Kernel and Runtime are populated"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// I/O error while reading or writing a table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row violates the normalized schema.
    #[error("Invalid row {row}: {reason}")]
    InvalidRow {
        /// Data row number (1-based, header excluded).
        row: usize,
        /// Why the row was rejected.
        reason: String,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, CoreError>;
