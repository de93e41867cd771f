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

//! Benchmark identity, aliasing and plot selection.
//!
//! A JSON plot configuration names the benchmarks (and optionally the exact
//! size configurations) to plot and maps raw benchmark / variant names to
//! display names. [`Resolver`] turns that document into an immutable alias
//! table and a list of [`InclusionRule`]s; [`Selector`] adds the
//! "no configuration" mode in which every row is plotted under its raw name.
//!
//! # Examples
//!
//! ```
//! use benchplot_core::BenchConfigKey;
//! use benchplot_select::Resolver;
//!
//! let resolver = Resolver::from_json_str(
//!     r#"{"benchmarks":[{"name":"X","configs":[{"problem-size":10,"local-size":2}]}]}"#,
//! ).unwrap();
//!
//! assert!(resolver.should_plot(&BenchConfigKey::new("X", "10", "2")));
//! assert!(!resolver.should_plot(&BenchConfigKey::new("X", "10", "3")));
//! ```

mod alias;
mod document;
mod error;
mod resolver;
mod rule;

pub use alias::AliasTable;
pub use document::{BenchmarkEntry, PlotConfigDocument, SizeEntry};
pub use error::{Result, SelectError};
pub use resolver::{Resolver, Selector};
pub use rule::InclusionRule;
