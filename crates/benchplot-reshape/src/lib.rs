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

//! Raw benchmark log → normalized table conversion.
//!
//! SYCL-Bench style logs start with two run-level lines (the variant name and
//! the run configuration) followed by one header/data line pair per
//! benchmark. Each data line packs its timing samples into a quoted,
//! whitespace-separated list. This crate expands every sample into one
//! [`benchplot_core::NormalizedRecord`].
//!
//! # Features
//!
//! - **Sample expansion**: one record per kernel-time and per run-time sample
//! - **Skip reporting**: benchmarks without samples are reported, not fatal
//! - **Configurable**: delimiter, trimming and verification flag
//!
//! # Examples
//!
//! ```
//! use benchplot_reshape::reshape_str;
//!
//! let log = "dpcpp\ndefault\n\
//!            ## Benchmark name,sycl-implementation,device-name,problem-size,local-size,run-time-samples\n\
//!            Sobel3,dpcpp,gpu,3072,256,\"0.5 0.6\"\n";
//!
//! let reshaped = reshape_str(log).unwrap();
//! let csv = reshaped.table.to_csv_string().unwrap();
//! assert!(csv.starts_with("Bench,Name,Config"));
//! assert_eq!(csv.lines().count(), 3);
//! ```

mod error;
mod from_log;

pub use error::{ReshapeError, Result};
pub use from_log::{
    reshape_path, reshape_path_with_config, reshape_reader, reshape_reader_with_config,
    reshape_str, reshape_str_with_config, ReshapeConfig, Reshaped, RunInfo, BENCHMARK_NAME, DEVICE_NAME, KERNEL_TIME_SAMPLES, LOCAL_SIZE, MIN_LINES,
    PROBLEM_SIZE, RUN_TIME_SAMPLES, SYCL_IMPLEMENTATION,
};
