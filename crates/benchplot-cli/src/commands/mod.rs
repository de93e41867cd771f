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

//! CLI command implementations.
//!
//! Every command reads all of its inputs before computing anything and
//! writes its outputs last, so a failing run leaves no partial files.

mod completion;
mod distribution;
mod reshape;
mod speedup;

pub use completion::{installation_hint, write_completion};
pub use distribution::distribution;
pub use reshape::reshape;
pub use speedup::{compare, speedup, ChartJob, SpeedupChart};

use crate::error::CliError;
use benchplot_core::BenchTable;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read and concatenate the normalized CSV tables at `paths`.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` if `paths` is empty and
/// `CliError::Table` naming the first file that cannot be read.
pub fn load_tables(paths: &[PathBuf]) -> Result<BenchTable, CliError> {
    if paths.is_empty() {
        return Err(CliError::invalid_input("at least one input table is required"));
    }

    let tables = paths
        .iter()
        .map(|path| BenchTable::from_path(path).map_err(|e| CliError::table_error(path, e)))
        .collect::<Result<Vec<_>, _>>()?;
    let merged = BenchTable::merge(tables);

    info!(files = paths.len(), rows = merged.len(), "loaded benchmark tables");
    Ok(merged)
}

/// Write `table` to `path` as normalized CSV.
pub fn write_table(table: &BenchTable, path: &Path) -> Result<(), CliError> {
    table.to_path(path).map_err(|e| CliError::table_error(path, e))
}

/// Resolve backslash escapes (`\n`, `\t`, `\r`, `\\`, `\"`, `\'`).
///
/// Unknown escapes and a trailing backslash are kept as written.
///
/// # Examples
///
/// ```
/// use benchplot_cli::commands::unescape;
///
/// assert_eq!(unescape(r"Speedup\nover baseline"), "Speedup\nover baseline");
/// assert_eq!(unescape(r"a\\b"), r"a\b");
/// assert_eq!(unescape(r"keep \q"), r"keep \q");
/// ```
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"Line1\nLine2\tTab"), "Line1\nLine2\tTab");
        assert_eq!(unescape(r#"say \"hi\""#), "say \"hi\"");
        assert_eq!(unescape("trailing\\"), "trailing\\");
        assert_eq!(unescape("plain"), "plain");
    }

    #[test]
    fn test_load_tables_requires_input() {
        let err = load_tables(&[]).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_load_tables_reports_missing_file() {
        let err = load_tables(&[PathBuf::from("/nonexistent/bench.csv")]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bench.csv"));
    }

    proptest! {
        #[test]
        fn prop_unescape_without_backslash_is_identity(text in "[^\\\\]*") {
            prop_assert_eq!(unescape(&text), text);
        }

        #[test]
        fn prop_escaped_backslashes_collapse(text in "[a-z ]{0,12}") {
            let doubled = text.replace(' ', "\\\\");
            prop_assert_eq!(unescape(&doubled), text.replace(' ', "\\"));
        }
    }
}
