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

//! Layout shared by all charts.

use crate::error::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

pub(crate) const TITLE_FONT_SIZE: u32 = 24;
pub(crate) const AXIS_LABEL_FONT_SIZE: u32 = 18;
pub(crate) const TICK_LABEL_FONT_SIZE: u32 = 14;
pub(crate) const LEGEND_FONT_SIZE: u32 = 14;
pub(crate) const DATA_LABEL_FONT_SIZE: u32 = 12;

/// Fraction of a category slot covered by its bars or boxes.
pub(crate) const GROUP_WIDTH: f64 = 0.8;

const MIN_X_LABEL_AREA: u32 = 40;
const MAX_X_LABEL_AREA: u32 = 320;

/// Draw `title` one line per row and return the area below it.
pub(crate) fn titled<'a>(
    area: &DrawingArea<SVGBackend<'a>, Shift>,
    title: &str,
) -> Result<DrawingArea<SVGBackend<'a>, Shift>> {
    let mut area = area.clone();
    for line in title.lines() {
        area = area.titled(line, ("sans-serif", TITLE_FONT_SIZE).into_font())?;
    }
    Ok(area)
}

/// Height for rotated x labels, from the longest label.
pub(crate) fn x_label_area_size<S: AsRef<str>>(labels: &[S]) -> u32 {
    let longest = labels
        .iter()
        .map(|label| label.as_ref().chars().count())
        .max()
        .unwrap_or(0) as u32;
    (longest * TICK_LABEL_FONT_SIZE * 3 / 5 + 16).clamp(MIN_X_LABEL_AREA, MAX_X_LABEL_AREA)
}

/// Label of the category whose slot is centred at `x`, if `x` is a centre.
pub(crate) fn category_label<S: AsRef<str>>(labels: &[S], x: f64) -> String {
    let index = x.round();
    if index < 0.0 || (x - index).abs() > 0.3 {
        return String::new();
    }
    labels
        .get(index as usize)
        .map(|label| label.as_ref().to_string())
        .unwrap_or_default()
}

/// Horizontal extent `(left, right)` of member `member` of `members` in the
/// category slot at `category`.
pub(crate) fn slot(category: usize, member: usize, members: usize) -> (f64, f64) {
    let width = GROUP_WIDTH / members.max(1) as f64;
    let offset = (member as f64 - (members as f64 - 1.0) / 2.0) * width;
    let centre = category as f64 + offset;
    (centre - width / 2.0 + 0.02, centre + width / 2.0 - 0.02)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let labels = ["A", "B"];
        assert_eq!(category_label(&labels, 0.0), "A");
        assert_eq!(category_label(&labels, 1.1), "B");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -0.4), "");
    }

    #[test]
    fn test_slots_are_centred() {
        let (left, right) = slot(3, 0, 1);
        assert!(((left + right) / 2.0 - 3.0).abs() < 1e-12);

        let (first_left, _) = slot(0, 0, 2);
        let (_, second_right) = slot(0, 1, 2);
        assert!(first_left > -GROUP_WIDTH / 2.0);
        assert!(second_right < GROUP_WIDTH / 2.0);
        assert!(((first_left + second_right) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_x_label_area_grows_with_labels() {
        assert_eq!(x_label_area_size::<&str>(&[]), MIN_X_LABEL_AREA);
        let long = ["VectorAddition_fp32 (1048576x256)"];
        assert!(x_label_area_size(&long) > MIN_X_LABEL_AREA);
        assert!(x_label_area_size(&["x".repeat(500)]) <= MAX_X_LABEL_AREA);
    }
}
