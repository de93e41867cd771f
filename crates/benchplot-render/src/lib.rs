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

//! SVG charts for BenchPlot.
//!
//! Speedup tables become grouped bar charts ([`render_speedup_chart`]) and
//! timing distributions become stacked per-benchmark box plots
//! ([`render_distributions`]). Both write a single SVG file through the
//! `plotters` SVG backend.

mod bar;
mod boxplot;
mod error;
mod layout;
mod options;
pub mod palette;

pub use bar::render_speedup_chart;
pub use boxplot::render_distributions;
pub use error::{RenderError, Result};
pub use options::{BarChartOptions, BoxPlotOptions};
