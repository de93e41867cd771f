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

//! Error types for raw-log reshaping.

use thiserror::Error;

/// Raw-log reshaping errors.
///
/// Every variant is fatal: reshaping aborts and no normalized output is
/// produced. Benchmarks without timing samples are not errors; they are
/// reported through [`crate::Reshaped::skipped`].
///
/// # Examples
///
/// ```
/// use benchplot_reshape::ReshapeError;
///
/// let err = ReshapeError::MalformedInput { lines: 3, min: 4 };
/// assert_eq!(
///     err.to_string(),
///     "Malformed input: 3 lines found, at least 4 required (run header and one benchmark)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReshapeError {
    /// The log is too short to hold the run header and one benchmark pair.
    #[error("Malformed input: {lines} lines found, at least {min} required (run header and one benchmark)")]
    MalformedInput {
        /// Number of non-blank lines found.
        lines: usize,
        /// Minimum number of lines required.
        min: usize,
    },

    /// A benchmark header line lacks a required column.
    #[error("Missing required column '{column}' in header at line {line}")]
    MissingColumn {
        /// Line number of the header (1-based).
        line: usize,
        /// Name of the missing column.
        column: String,
    },

    /// A timing sample is not a number.
    #[error("Invalid timing sample '{value}' for benchmark '{benchmark}'")]
    InvalidSample {
        /// Benchmark the sample belongs to.
        benchmark: String,
        /// The offending token.
        value: String,
    },

    /// A header/data pair could not be parsed.
    #[error("Parse error at line {line}: {message}")]
    ParseError {
        /// Line number (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while reading the log.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reshaping.
pub type Result<T> = std::result::Result<T, ReshapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = ReshapeError::MissingColumn {
            line: 5,
            column: "device-name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required column 'device-name' in header at line 5"
        );
    }

    #[test]
    fn test_invalid_sample_display() {
        let err = ReshapeError::InvalidSample {
            benchmark: "Sobel3".to_string(),
            value: "fast".to_string(),
        };
        assert!(err.to_string().contains("'fast'"));
        assert!(err.to_string().contains("Sobel3"));
    }
}
