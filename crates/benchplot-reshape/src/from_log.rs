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

//! Convert raw benchmark logs into normalized tables.

use crate::error::{ReshapeError, Result};
use benchplot_core::{BenchTable, SampleMeta};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// A log needs the two run header lines plus one header/data pair.
pub const MIN_LINES: usize = 4;

/// Column holding the benchmark name.
pub const BENCHMARK_NAME: &str = "# Benchmark name";
/// Column holding the SYCL implementation (written as `Compiler`).
pub const SYCL_IMPLEMENTATION: &str = "sycl-implementation";
/// Column holding the device name.
pub const DEVICE_NAME: &str = "device-name";
/// Column holding the problem size.
pub const PROBLEM_SIZE: &str = "problem-size";
/// Column holding the local (work-group) size.
pub const LOCAL_SIZE: &str = "local-size";
/// Optional column with whitespace-separated kernel times.
pub const KERNEL_TIME_SAMPLES: &str = "kernel-time-samples";
/// Optional column with whitespace-separated run times.
pub const RUN_TIME_SAMPLES: &str = "run-time-samples";

/// Configuration for raw-log parsing.
///
/// # Examples
///
/// ```
/// use benchplot_reshape::ReshapeConfig;
///
/// let config = ReshapeConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert!(config.verified);
/// ```
#[derive(Debug, Clone)]
pub struct ReshapeConfig {
    /// Field delimiter of the header/data lines (default: `,`).
    pub delimiter: u8,

    /// Whether to trim whitespace around fields (default: `true`).
    pub trim: bool,

    /// Value written to the `Verify` column of every record (default: `true`).
    ///
    /// The raw logs only contain results that passed the benchmark's own
    /// verification step.
    pub verified: bool,
}

impl Default for ReshapeConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            verified: true,
        }
    }
}

/// Run-level identity parsed from the first two lines of a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    /// Variant name shared by every record of the run.
    pub name: String,
    /// Configuration label shared by every record of the run.
    pub config: String,
}

/// Result of reshaping one log.
#[derive(Debug, Clone)]
pub struct Reshaped {
    /// Run name and configuration.
    pub run: RunInfo,
    /// One record per timing sample, in input order.
    pub table: BenchTable,
    /// Benchmarks that carried no timing samples and were skipped.
    pub skipped: Vec<String>,
}

/// Reshape a raw log with default configuration.
///
/// # Log format
///
/// ```text
/// <run name>
/// <run configuration>
/// # Benchmark name,sycl-implementation,device-name,problem-size,local-size,kernel-time-samples,...
/// VectorAdd,dpcpp,A100,1024,256,"1.0 2.0 3.0",...
/// # Benchmark name,...            <- next header/data pair
/// ...
/// ```
///
/// # Errors
///
/// - `MalformedInput` when fewer than [`MIN_LINES`] non-blank lines exist
/// - `MissingColumn` when a header lacks one of the identity columns
/// - `InvalidSample` when a timing sample is not a number
///
/// # Examples
///
/// ```
/// use benchplot_reshape::reshape_str;
///
/// let log = "acpp\nomp\n\
///            ## Benchmark name,sycl-implementation,device-name,problem-size,local-size,kernel-time-samples\n\
///            VectorAdd,acpp,cpu,1024,256,\"1.0 2.0 3.0\"\n";
///
/// let reshaped = reshape_str(log).unwrap();
/// assert_eq!(reshaped.run.name, "acpp");
/// assert_eq!(reshaped.table.len(), 3);
/// assert!(reshaped.skipped.is_empty());
/// ```
pub fn reshape_str(input: &str) -> Result<Reshaped> {
    reshape_str_with_config(input, &ReshapeConfig::default())
}

/// Reshape a raw log with custom configuration.
pub fn reshape_str_with_config(input: &str, config: &ReshapeConfig) -> Result<Reshaped> {
    // Blank lines carry nothing; line numbers in errors still refer to the
    // original input.
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();

    if lines.len() < MIN_LINES {
        return Err(ReshapeError::MalformedInput {
            lines: lines.len(),
            min: MIN_LINES,
        });
    }

    let run = RunInfo {
        name: first_field(lines[0], config)?,
        config: first_field(lines[1], config)?,
    };
    info!(name = %run.name, config = %run.config, "parsed run header");

    let mut table = BenchTable::new();
    let mut skipped = Vec::new();

    let mut index = 2;
    while index + 1 < lines.len() {
        let row = BenchRow::parse(lines[index], lines[index + 1], config)?;
        let meta = row.meta(&run, config.verified)?;

        let mut emitted = false;
        if let Some(samples) = row.samples(KERNEL_TIME_SAMPLES, &meta.bench)? {
            table.extend(samples.into_iter().map(|v| meta.kernel_sample(v)));
            emitted = true;
        }
        if let Some(samples) = row.samples(RUN_TIME_SAMPLES, &meta.bench)? {
            table.extend(samples.into_iter().map(|v| meta.run_time_sample(v)));
            emitted = true;
        }

        if emitted {
            debug!(benchmark = %meta.bench, rows = table.len(), "reshaped benchmark");
        } else {
            warn!(benchmark = %meta.bench, "no timing samples, skipping benchmark");
            skipped.push(meta.bench);
        }

        index += 2;
    }

    Ok(Reshaped {
        run,
        table,
        skipped,
    })
}

/// Reshape a raw log read from `reader`.
pub fn reshape_reader<R: Read>(reader: R) -> Result<Reshaped> {
    reshape_reader_with_config(reader, &ReshapeConfig::default())
}

/// Reshape a raw log read from `reader` with custom configuration.
pub fn reshape_reader_with_config<R: Read>(mut reader: R, config: &ReshapeConfig) -> Result<Reshaped> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    reshape_str_with_config(&input, config)
}

/// Reshape the raw log at `path`.
pub fn reshape_path(path: impl AsRef<Path>) -> Result<Reshaped> {
    reshape_path_with_config(path, &ReshapeConfig::default())
}

/// Reshape the raw log at `path` with custom configuration.
pub fn reshape_path_with_config(path: impl AsRef<Path>, config: &ReshapeConfig) -> Result<Reshaped> {
    let input = fs::read_to_string(path.as_ref())?;
    reshape_str_with_config(&input, config)
}

/// First CSV field of a run header line.
fn first_field((line, text): (usize, &str), config: &ReshapeConfig) -> Result<String> {
    let mut reader = csv_reader(text, false, config);
    match reader.records().next() {
        Some(record) => Ok(record?.get(0).unwrap_or_default().to_string()),
        None => Err(ReshapeError::ParseError {
            line,
            message: "empty run header".to_string(),
        }),
    }
}

fn csv_reader<'a>(text: &'a str, has_headers: bool, config: &ReshapeConfig) -> csv::Reader<&'a [u8]> {
    csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(has_headers)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(text.as_bytes())
}

/// One benchmark result: the header line zipped with its data line.
struct BenchRow {
    header_line: usize,
    fields: Vec<(String, String)>,
}

impl BenchRow {
    fn parse(
        (header_line, header): (usize, &str),
        (data_line, data): (usize, &str),
        config: &ReshapeConfig,
    ) -> Result<Self> {
        let joined = format!("{header}\n{data}");
        let mut reader = csv_reader(&joined, true, config);
        let columns = reader.headers()?.clone();

        let values = match reader.records().next() {
            Some(record) => record?,
            None => {
                return Err(ReshapeError::ParseError {
                    line: data_line,
                    message: "missing benchmark data row".to_string(),
                })
            }
        };

        let fields = columns
            .iter()
            .zip(values.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();

        Ok(Self {
            header_line,
            fields,
        })
    }

    fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    fn require(&self, column: &str) -> Result<String> {
        self.get(column)
            .map(str::to_string)
            .ok_or_else(|| ReshapeError::MissingColumn {
                line: self.header_line,
                column: column.to_string(),
            })
    }

    fn meta(&self, run: &RunInfo, verified: bool) -> Result<SampleMeta> {
        Ok(SampleMeta {
            bench: self.require(BENCHMARK_NAME)?,
            name: run.name.clone(),
            config: run.config.clone(),
            compiler: self.require(SYCL_IMPLEMENTATION)?,
            device: self.require(DEVICE_NAME)?,
            verified,
            problem_size: self.require(PROBLEM_SIZE)?,
            local_size: self.require(LOCAL_SIZE)?,
        })
    }

    /// Timing values of a sample column; `None` when the column is absent or
    /// null.
    fn samples(&self, column: &str, benchmark: &str) -> Result<Option<Vec<f64>>> {
        match self.get(column) {
            Some(raw) => parse_samples(raw, benchmark),
            None => Ok(None),
        }
    }
}

/// Parse a packed sample list such as `"1.0 2.0 3.0"`.
///
/// Empty fields and `nan` are null.
fn parse_samples(raw: &str, benchmark: &str) -> Result<Option<Vec<f64>>> {
    let cleaned = raw.trim().trim_matches('"').trim();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    cleaned
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| ReshapeError::InvalidSample {
                    benchmark: benchmark.to_string(),
                    value: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_core::TimingKind;

    const HEADER: &str = "# Benchmark name,sycl-implementation,device-name,problem-size,local-size,kernel-time-samples,run-time-samples";

    fn log(pairs: &[&str]) -> String {
        let mut out = String::from("acpp-main\nomp-accelerated\n");
        for data in pairs {
            out.push_str(HEADER);
            out.push('\n');
            out.push_str(data);
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_too_few_lines() {
        let err = reshape_str("name\nconfig\nheader\n").unwrap_err();
        assert!(matches!(
            err,
            ReshapeError::MalformedInput { lines: 3, min: 4 }
        ));
    }

    #[test]
    fn test_blank_lines_do_not_count() {
        let err = reshape_str("name\n\nconfig\n\nheader\n\n").unwrap_err();
        assert!(matches!(err, ReshapeError::MalformedInput { lines: 3, .. }));
    }

    #[test]
    fn test_kernel_samples_expand_to_rows() {
        let input = log(&["VectorAdd,acpp,cpu,1024,256,\"1.0 2.0 3.0\","]);
        let reshaped = reshape_str(&input).unwrap();

        assert_eq!(reshaped.run.name, "acpp-main");
        assert_eq!(reshaped.run.config, "omp-accelerated");
        assert_eq!(reshaped.table.len(), 3);
        let kernels: Vec<_> = reshaped
            .table
            .iter()
            .map(|r| TimingKind::Kernel.select(r))
            .collect();
        assert_eq!(kernels, vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert!(reshaped.table.iter().all(|r| r.run_time().is_none()));
    }

    #[test]
    fn test_both_sample_columns_emit_both_row_sets() {
        let input = log(&["Sobel3,dpcpp,gpu,3072,256,\"1.0 2.0\",\"5.0\""]);
        let reshaped = reshape_str(&input).unwrap();

        assert_eq!(reshaped.table.len(), 3);
        let records = reshaped.table.records();
        assert_eq!(records[0].kernel_time(), Some(1.0));
        assert_eq!(records[1].kernel_time(), Some(2.0));
        assert_eq!(records[2].run_time(), Some(5.0));
    }

    #[test]
    fn test_pair_without_samples_is_skipped() {
        let input = log(&["Runtime_Init,acpp,cpu,1,1,,", "MatMul,acpp,cpu,64,8,,\"9.5\""]);
        let reshaped = reshape_str(&input).unwrap();

        assert_eq!(reshaped.skipped, vec!["Runtime_Init".to_string()]);
        assert_eq!(reshaped.table.len(), 1);
        assert_eq!(reshaped.table.records()[0].bench, "MatMul");
    }

    #[test]
    fn test_nan_is_null() {
        let input = log(&["MatMul,acpp,cpu,64,8,nan,\"9.5 9.7\""]);
        let reshaped = reshape_str(&input).unwrap();
        assert_eq!(reshaped.table.len(), 2);
        assert!(reshaped.table.iter().all(|r| r.kernel_time().is_none()));
    }

    #[test]
    fn test_metadata_mapping() {
        let input = log(&["MatMul,AdaptiveCpp,NVIDIA A100,64,8,\"1.0\","]);
        let reshaped = reshape_str(&input).unwrap();
        let rec = &reshaped.table.records()[0];

        assert_eq!(rec.bench, "MatMul");
        assert_eq!(rec.name, "acpp-main");
        assert_eq!(rec.config, "omp-accelerated");
        assert_eq!(rec.compiler, "AdaptiveCpp");
        assert_eq!(rec.device, "NVIDIA A100");
        assert_eq!(rec.problem_size, "64");
        assert_eq!(rec.local_size, "8");
        assert!(rec.verified);
    }

    #[test]
    fn test_missing_identity_column() {
        let input = "run\ncfg\n# Benchmark name,device-name\nA,gpu\n";
        let err = reshape_str(input).unwrap_err();
        match err {
            ReshapeError::MissingColumn { line, column } => {
                assert_eq!(line, 3);
                assert_eq!(column, SYCL_IMPLEMENTATION);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_sample() {
        let input = log(&["MatMul,acpp,cpu,64,8,\"1.0 oops\","]);
        let err = reshape_str(&input).unwrap_err();
        assert!(matches!(err, ReshapeError::InvalidSample { ref value, .. } if value == "oops"));
    }

    #[test]
    fn test_trailing_header_without_data_is_ignored() {
        let mut input = log(&["MatMul,acpp,cpu,64,8,\"1.0\","]);
        input.push_str(HEADER);
        input.push('\n');
        let reshaped = reshape_str(&input).unwrap();
        assert_eq!(reshaped.table.len(), 1);
    }

    #[test]
    fn test_custom_delimiter() {
        let input = "run\ncfg\n# Benchmark name;sycl-implementation;device-name;problem-size;local-size;run-time-samples\nA;acpp;cpu;1;1;\"4.0 5.0\"\n";
        let config = ReshapeConfig {
            delimiter: b';',
            ..Default::default()
        };
        let reshaped = reshape_str_with_config(input, &config).unwrap();
        assert_eq!(reshaped.table.len(), 2);
    }

    #[test]
    fn test_parse_samples_strips_quotes_and_spaces() {
        let parsed = parse_samples("\" 1.5  2.5 \"", "A").unwrap();
        assert_eq!(parsed, Some(vec![1.5, 2.5]));
        assert_eq!(parse_samples("", "A").unwrap(), None);
    }
}
