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

//! Reshape command - raw benchmark log to normalized CSV

use super::write_table;
use crate::error::CliError;
use benchplot_reshape::reshape_path;
use std::path::Path;

/// Reshape the raw log at `input` into the normalized table at `output`.
///
/// Benchmarks without samples are listed on stderr; the output is only
/// written when the whole log was reshaped.
///
/// # Errors
///
/// Returns `CliError::Reshape` for malformed logs and `CliError::Table`
/// if the output cannot be written.
pub fn reshape(input: &Path, output: &Path) -> Result<(), CliError> {
    let reshaped = reshape_path(input)?;

    for bench in &reshaped.skipped {
        eprintln!("Skipped {bench}: no kernel-time or run-time samples");
    }

    write_table(&reshaped.table, output)?;

    println!(
        "Reshaped {} ({}): {} samples written to {}",
        reshaped.run.name,
        reshaped.run.config,
        reshaped.table.len(),
        output.display()
    );
    Ok(())
}
