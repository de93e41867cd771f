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

//! Structured error types for the BenchPlot CLI.
//!
//! Library errors are flattened into display strings so that `CliError`
//! stays `Clone` and can be compared in tests.

use benchplot_aggregate::AggregateError;
use benchplot_core::CoreError;
use benchplot_render::RenderError;
use benchplot_reshape::ReshapeError;
use benchplot_select::SelectError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for BenchPlot CLI operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// I/O operation failed for a specific file.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Reading or writing a normalized CSV table failed.
    #[error("Table error for '{path}': {message}")]
    Table {
        /// The table file
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The raw benchmark log could not be reshaped.
    #[error("Reshape error: {0}")]
    Reshape(String),

    /// The plot configuration could not be loaded.
    #[error("Plot configuration error: {0}")]
    Config(String),

    /// Speedup aggregation failed.
    #[error("Aggregation error: {0}")]
    Aggregate(String),

    /// Chart rendering failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a table error with file path context.
    pub fn table_error(path: impl Into<PathBuf>, source: CoreError) -> Self {
        Self::Table {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ReshapeError> for CliError {
    fn from(err: ReshapeError) -> Self {
        CliError::Reshape(err.to_string())
    }
}

impl From<SelectError> for CliError {
    fn from(err: SelectError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<AggregateError> for CliError {
    fn from(err: AggregateError) -> Self {
        CliError::Aggregate(err.to_string())
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        CliError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "out.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error for 'out.csv': denied");
    }

    #[test]
    fn test_library_errors_convert() {
        let err: CliError = ReshapeError::MalformedInput { lines: 2, min: 4 }.into();
        assert!(matches!(err, CliError::Reshape(_)));

        let err: CliError = AggregateError::NoDenominators.into();
        assert_eq!(err.to_string(), "Aggregation error: Speedup request needs at least one denominator");
    }

    #[test]
    fn test_clone_preserves_message() {
        let err = CliError::invalid_input("bad");
        assert_eq!(err.clone(), err);
        assert_eq!(err.to_string(), "Invalid input: bad");
    }
}
