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

//! Normalized benchmark records and the tabular CSV form shared by every
//! BenchPlot pipeline.
//!
//! A raw benchmark log is reshaped into a [`BenchTable`] of
//! [`NormalizedRecord`]s, one per timing sample. The table is written as the
//! normalized CSV and read back (possibly from several files) by the
//! aggregation and plotting steps.
//!
//! # Normalized CSV
//!
//! The column order is fixed:
//!
//! ```text
//! Bench,Name,Config,Compiler,Device,Verify,Problem Size,Local Size,Kernel,Runtime
//! ```
//!
//! Exactly one of `Kernel` / `Runtime` is populated per row.
//!
//! # Examples
//!
//! ```
//! use benchplot_core::{BenchTable, SampleMeta, TimingKind};
//!
//! let meta = SampleMeta {
//!     bench: "VectorAdd".to_string(),
//!     name: "dpcpp".to_string(),
//!     config: "gpu".to_string(),
//!     compiler: "dpcpp".to_string(),
//!     device: "A100".to_string(),
//!     verified: true,
//!     problem_size: "1024".to_string(),
//!     local_size: "256".to_string(),
//! };
//!
//! let mut table = BenchTable::new();
//! table.push(meta.kernel_sample(1.5));
//! table.push(meta.run_time_sample(2.0));
//!
//! let csv = table.to_csv_string().unwrap();
//! let back = BenchTable::read_csv(csv.as_bytes()).unwrap();
//! assert_eq!(back.len(), 2);
//! assert_eq!(TimingKind::Kernel.select(&back.records()[0]), Some(1.5));
//! ```

mod error;
mod key;
mod record;
mod table;

pub use error::{CoreError, Result};
pub use key::{size_label, BenchConfigKey};
pub use record::{NormalizedRecord, SampleMeta, Timing, TimingKind};
pub use table::{BenchTable, COLUMNS};
