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

//! Chart options.

/// Options for grouped speedup bar charts.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartOptions {
    /// Title; each line is drawn on its own row.
    pub title: String,
    /// Y axis description.
    pub y_label: String,
    /// Fixed top of the y axis. Bars above it are cut off.
    pub y_limit: Option<f64>,
    /// Draw `"{:.2}x"` above every bar.
    pub value_labels: bool,
    /// Image size in pixels.
    pub size: (u32, u32),
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            y_label: "Speedup".to_string(),
            y_limit: None,
            value_labels: false,
            size: (1024, 640),
        }
    }
}

/// Options for per-benchmark box plots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxPlotOptions {
    /// Y axis description, usually the timing column.
    pub y_label: String,
    /// Size of one benchmark panel in pixels.
    pub panel_size: (u32, u32),
}

impl Default for BoxPlotOptions {
    fn default() -> Self {
        Self {
            y_label: "Runtime".to_string(),
            panel_size: (1024, 560),
        }
    }
}
