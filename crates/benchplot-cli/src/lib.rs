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

//! BenchPlot CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **reshape**: raw benchmark log to normalized CSV table
//! - **compare**: speedup of one variant over another per configuration
//! - **speedup**: speedups of two variants over a baseline with geometric means
//! - **distribution**: per-benchmark timing box plots
//! - **completion**: shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Examples
//!
//! ```no_run
//! use benchplot_cli::commands::reshape;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchplot_cli::error::CliError> {
//! reshape(Path::new("run.log"), Path::new("sycl-bench.csv"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,benchplot_cli=info,benchplot_reshape=info,\
                                      benchplot_select=info,benchplot_aggregate=info,\
                                      benchplot_render=info";
