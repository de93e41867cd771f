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

//! The normalized benchmark table and its CSV form.

use crate::error::{CoreError, Result};
use crate::record::{NormalizedRecord, Timing};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column order of the normalized CSV.
pub const COLUMNS: [&str; 10] = [
    "Bench",
    "Name",
    "Config",
    "Compiler",
    "Device",
    "Verify",
    "Problem Size",
    "Local Size",
    "Kernel",
    "Runtime",
];

/// Serialized shape of one normalized CSV row.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Bench")]
    bench: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Config")]
    config: String,
    #[serde(rename = "Compiler")]
    compiler: String,
    #[serde(rename = "Device")]
    device: String,
    #[serde(rename = "Verify", with = "verify_flag")]
    verified: bool,
    #[serde(rename = "Problem Size")]
    problem_size: String,
    #[serde(rename = "Local Size")]
    local_size: String,
    #[serde(rename = "Kernel")]
    kernel: Option<f64>,
    #[serde(rename = "Runtime")]
    runtime: Option<f64>,
}

impl From<&NormalizedRecord> for CsvRow {
    fn from(record: &NormalizedRecord) -> Self {
        Self {
            bench: record.bench.clone(),
            name: record.name.clone(),
            config: record.config.clone(),
            compiler: record.compiler.clone(),
            device: record.device.clone(),
            verified: record.verified,
            problem_size: record.problem_size.clone(),
            local_size: record.local_size.clone(),
            kernel: record.kernel_time(),
            runtime: record.run_time(),
        }
    }
}

impl CsvRow {
    fn into_record(self, row: usize) -> Result<NormalizedRecord> {
        let timing = match (self.kernel, self.runtime) {
            (Some(k), None) => Timing::Kernel(k),
            (None, Some(r)) => Timing::Runtime(r),
            (Some(_), Some(_)) => {
                return Err(CoreError::InvalidRow {
                    row,
                    reason: "both Kernel and Runtime are populated".to_string(),
                })
            }
            (None, None) => {
                return Err(CoreError::InvalidRow {
                    row,
                    reason: "neither Kernel nor Runtime is populated".to_string(),
                })
            }
        };

        Ok(NormalizedRecord {
            bench: self.bench,
            name: self.name,
            config: self.config,
            compiler: self.compiler,
            device: self.device,
            verified: self.verified,
            problem_size: self.problem_size,
            local_size: self.local_size,
            timing,
        })
    }
}

/// `Verify` is written the way the benchmark tooling writes it (`True` /
/// `False`) and read case-insensitively.
mod verify_flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(de::Error::custom(format!("invalid Verify value '{other}'"))),
        }
    }
}

/// An ordered, in-memory collection of normalized records.
///
/// Row order is the order records were appended in; it carries no meaning
/// beyond reproducibility of the written CSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchTable {
    records: Vec<NormalizedRecord>,
}

impl BenchTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenates tables in order. Duplicate rows are kept.
    pub fn merge(tables: impl IntoIterator<Item = BenchTable>) -> Self {
        let mut merged = Self::new();
        for mut table in tables {
            merged.append(&mut table);
        }
        merged
    }

    /// Appends one record.
    pub fn push(&mut self, record: NormalizedRecord) {
        self.records.push(record);
    }

    /// Moves all records of `other` to the end of this table.
    pub fn append(&mut self, other: &mut BenchTable) {
        self.records.append(&mut other.records);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRecord> {
        self.records.iter()
    }

    /// Records as a slice.
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    /// Reads a normalized CSV (header row required).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Csv` for malformed CSV or unknown columns and
    /// `CoreError::InvalidRow` when a row does not hold exactly one timing
    /// value.
    pub fn read_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = Self::new();
        for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
            table.push(row?.into_record(index + 1)?);
        }
        Ok(table)
    }

    /// Reads a normalized CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::read_csv(file)
    }

    /// Writes the table as normalized CSV. The header is written even for an
    /// empty table.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(COLUMNS)?;
        for record in &self.records {
            csv_writer.serialize(CsvRow::from(record))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Writes the table to a file, replacing it.
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_csv(file)
    }

    /// Renders the normalized CSV into a string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| CoreError::InvalidRow {
            row: 0,
            reason: format!("non UTF-8 output: {e}"),
        })
    }
}

impl Extend<NormalizedRecord> for BenchTable {
    fn extend<T: IntoIterator<Item = NormalizedRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<NormalizedRecord> for BenchTable {
    fn from_iter<T: IntoIterator<Item = NormalizedRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BenchTable {
    type Item = &'a NormalizedRecord;
    type IntoIter = std::slice::Iter<'a, NormalizedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
