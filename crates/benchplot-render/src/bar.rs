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

//! Grouped speedup bar charts.

use crate::error::Result;
use crate::layout::{
    category_label, slot, titled, x_label_area_size, AXIS_LABEL_FONT_SIZE, DATA_LABEL_FONT_SIZE,
    LEGEND_FONT_SIZE, TICK_LABEL_FONT_SIZE,
};
use crate::options::BarChartOptions;
use crate::palette::series_color;
use benchplot_aggregate::SpeedupTable;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{info, warn};

/// Room above the tallest bar for its value label.
const HEADROOM: f64 = 1.15;

/// Draw one group of bars per category, one bar per series.
///
/// Categories follow the table order. Undefined (NaN) speedups leave a gap.
/// A legend is drawn when there is more than one series. An empty table
/// still yields the titled, labelled axes.
///
/// # Errors
///
/// `RenderError::Drawing` if the SVG cannot be written.
pub fn render_speedup_chart(
    table: &SpeedupTable,
    path: impl AsRef<Path>,
    options: &BarChartOptions,
) -> Result<()> {
    let path = path.as_ref();
    if table.is_empty() {
        warn!(path = %path.display(), "no benchmark matched the selection, drawing empty axes");
    }

    let categories = table.order();
    let slots = categories.len().max(1);
    let series = table.series();
    let top = y_top(table, options.y_limit);

    let root = SVGBackend::new(path, options.size).into_drawing_area();
    root.fill(&WHITE)?;
    let area = titled(&root, &options.title)?;

    let mut chart = ChartBuilder::on(&area)
        .margin(16)
        .x_label_area_size(x_label_area_size(categories))
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(slots as f64 - 0.5), 0.0..top)?;

    let x_formatter = |x: &f64| category_label(categories, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE).into_font())
        .x_labels(slots)
        .x_label_formatter(&x_formatter)
        .x_label_style(
            ("sans-serif", TICK_LABEL_FONT_SIZE)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_formatter(&|y| format!("{y:.1}"))
        .y_desc(options.y_label.replace('\n', " "))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE).into_font())
        .draw()?;

    for (series_index, name) in series.iter().enumerate() {
        let color = series_color(series_index);

        for row in table.rows().iter().filter(|row| row.series == *name) {
            if !row.speedup.is_finite() {
                continue;
            }
            let Some(category_index) = categories.iter().position(|c| *c == row.category) else {
                continue;
            };

            let (left, right) = slot(category_index, series_index, series.len());
            let height = row.speedup.min(top);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(left, 0.0), (right, height)],
                color.filled(),
            )))?;

            if options.value_labels {
                chart.draw_series(std::iter::once(Text::new(
                    format!("{:.2}x", row.speedup),
                    ((left + right) / 2.0, height),
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))?;
            }
        }
    }

    if series.len() > 1 {
        for (series_index, name) in series.iter().enumerate() {
            let color = series_color(series_index);
            chart
                .draw_series(std::iter::once(Circle::new((0.0, 0.0), 0, color.filled())))?
                .label(*name)
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", LEGEND_FONT_SIZE).into_font())
            .draw()?;
    }

    root.present()?;
    info!(
        path = %path.display(),
        categories = categories.len(),
        series = series.len(),
        "wrote speedup chart"
    );
    Ok(())
}

/// Top of the y axis: the configured limit, or the tallest bar plus headroom.
fn y_top(table: &SpeedupTable, y_limit: Option<f64>) -> f64 {
    if let Some(limit) = y_limit.filter(|limit| limit.is_finite() && *limit > 0.0) {
        return limit;
    }
    let tallest = table
        .rows()
        .iter()
        .map(|row| row.speedup)
        .filter(|speedup| speedup.is_finite())
        .fold(0.0, f64::max);
    if tallest > 0.0 {
        tallest * HEADROOM
    } else {
        1.0
    }
}
