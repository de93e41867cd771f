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

//! Per-benchmark timing box plots.

use crate::error::Result;
use crate::layout::{
    category_label, slot, x_label_area_size, AXIS_LABEL_FONT_SIZE, LEGEND_FONT_SIZE,
    TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::options::BoxPlotOptions;
use crate::palette::series_color;
use benchplot_aggregate::{BenchmarkDistribution, DistributionGroup};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

type Panel<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Draw one box plot panel per benchmark, stacked in a single SVG.
///
/// Each panel has the size labels on the x axis and one box per variant
/// in every size slot. Without distributions a blank page of one panel is
/// written.
pub fn render_distributions(
    distributions: &[BenchmarkDistribution],
    path: impl AsRef<Path>,
    options: &BoxPlotOptions,
) -> Result<()> {
    let path = path.as_ref();
    let (width, height) = options.panel_size;
    let panel_count = distributions.len().max(1) as u32;
    let root = SVGBackend::new(path, (width, height * panel_count)).into_drawing_area();
    root.fill(&WHITE)?;

    if distributions.is_empty() {
        root.present()?;
        warn!(path = %path.display(), "no benchmark has samples for the selected timing");
        return Ok(());
    }

    let panels = root.split_evenly((distributions.len(), 1));
    for (panel, distribution) in panels.iter().zip(distributions) {
        draw_panel(panel, distribution, options)?;
    }

    root.present()?;
    info!(
        path = %path.display(),
        benchmarks = distributions.len(),
        "wrote distribution plots"
    );
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    distribution: &BenchmarkDistribution,
    options: &BoxPlotOptions,
) -> Result<()> {
    let sizes = &distribution.sizes;
    let (low, high) = padded_range(distribution.value_range().unwrap_or((0.0, 1.0)));

    let mut chart = ChartBuilder::on(area)
        .caption(&distribution.bench, ("sans-serif", TITLE_FONT_SIZE).into_font())
        .margin(16)
        .x_label_area_size(x_label_area_size(sizes))
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5..(sizes.len() as f64 - 0.5), low..high)?;

    let x_formatter = |x: &f64| category_label(sizes, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE).into_font())
        .x_labels(sizes.len())
        .x_label_formatter(&x_formatter)
        .x_label_style(
            ("sans-serif", TICK_LABEL_FONT_SIZE)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc(options.y_label.as_str())
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE).into_font())
        .draw()?;

    for group in &distribution.groups {
        let (Some(size_index), Some(series_index)) = (
            sizes.iter().position(|size| *size == group.size),
            distribution.series.iter().position(|s| *s == group.series),
        ) else {
            continue;
        };
        let (left, right) = slot(size_index, series_index, distribution.series.len());
        draw_box(&mut chart, group, left, right, series_color(series_index))?;
    }

    if distribution.series.len() > 1 {
        for (series_index, name) in distribution.series.iter().enumerate() {
            let color = series_color(series_index);
            chart
                .draw_series(std::iter::once(Circle::new((0.0, low), 0, color.filled())))?
                .label(name.as_str())
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

    debug!(bench = %distribution.bench, groups = distribution.groups.len(), "drew panel");
    Ok(())
}

/// Box from q1 to q3 with a median line, whiskers with caps and outliers.
fn draw_box(
    chart: &mut Panel<'_, '_>,
    group: &DistributionGroup,
    left: f64,
    right: f64,
    color: RGBColor,
) -> Result<()> {
    let stats = &group.stats;
    let centre = (left + right) / 2.0;
    let cap = (right - left) / 4.0;
    let line = BLACK.stroke_width(1);

    chart.draw_series([
        Rectangle::new([(left, stats.q1), (right, stats.q3)], color.mix(0.85).filled()),
        Rectangle::new([(left, stats.q1), (right, stats.q3)], line),
    ])?;

    chart.draw_series([
        PathElement::new(vec![(centre, stats.lower_whisker), (centre, stats.q1)], line),
        PathElement::new(vec![(centre, stats.q3), (centre, stats.upper_whisker)], line),
        PathElement::new(
            vec![
                (centre - cap, stats.lower_whisker),
                (centre + cap, stats.lower_whisker),
            ],
            line,
        ),
        PathElement::new(
            vec![
                (centre - cap, stats.upper_whisker),
                (centre + cap, stats.upper_whisker),
            ],
            line,
        ),
        PathElement::new(
            vec![(left, stats.median), (right, stats.median)],
            BLACK.stroke_width(2),
        ),
    ])?;

    chart.draw_series(
        stats
            .outliers
            .iter()
            .map(|value| Circle::new((centre, *value), 3, line)),
    )?;

    Ok(())
}

/// Value range with a margin, never empty.
fn padded_range((low, high): (f64, f64)) -> (f64, f64) {
    let span = high - low;
    let pad = if span > 0.0 {
        span * 0.05
    } else if high.abs() > 0.0 {
        high.abs() * 0.5
    } else {
        1.0
    };
    (low - pad, high + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range((0.0, 10.0)), (-0.5, 10.5));
        assert_eq!(padded_range((2.0, 2.0)), (1.0, 3.0));
        assert_eq!(padded_range((0.0, 0.0)), (-1.0, 1.0));
    }

    #[test]
    fn test_no_distributions_writes_blank_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("internal.svg");
        render_distributions(&[], &path, &BoxPlotOptions::default()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("560"));
    }
}
