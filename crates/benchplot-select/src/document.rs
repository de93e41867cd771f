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

//! Serde model of the plot configuration JSON.
//!
//! ```json
//! {
//!   "alias": { "VectorAddition_fp32": "VecAdd" },
//!   "benchmarks": [
//!     { "name": "VectorAddition_fp32",
//!       "configs": [ { "problem-size": 1048576, "local-size": 256 } ] },
//!     { "name": "Sobel" }
//!   ]
//! }
//! ```
//!
//! Both top-level sections are optional. Benchmark entries without a name
//! and size entries missing one of the two sizes are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level plot configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotConfigDocument {
    /// Raw name → display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<BTreeMap<String, String>>,

    /// Benchmarks to include in plots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<Vec<BenchmarkEntry>>,
}

/// One benchmark selection entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// Raw benchmark name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Allowed size configurations; absent or empty selects by name prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<SizeEntry>>,
}

/// A `(problem-size, local-size)` pair. Sizes may be numbers or strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeEntry {
    /// Problem size.
    #[serde(rename = "problem-size", default, skip_serializing_if = "Option::is_none")]
    pub problem_size: Option<Value>,

    /// Local size.
    #[serde(rename = "local-size", default, skip_serializing_if = "Option::is_none")]
    pub local_size: Option<Value>,
}

impl SizeEntry {
    /// Both sizes rendered as they appear in benchmark keys, or `None` when
    /// either is missing.
    pub fn sizes(&self) -> Option<(String, String)> {
        match (&self.problem_size, &self.local_size) {
            (Some(problem), Some(local)) => Some((size_text(problem), size_text(local))),
            _ => None,
        }
    }
}

/// Strings are used verbatim, everything else through its JSON form
/// (`10`, `1.5`).
fn size_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc: PlotConfigDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, PlotConfigDocument::default());
    }

    #[test]
    fn test_numeric_and_string_sizes() {
        let doc: PlotConfigDocument = serde_json::from_str(
            r#"{"benchmarks":[{"name":"X","configs":[
                {"problem-size":10,"local-size":"2"},
                {"problem-size":1.5,"local-size":4}
            ]}]}"#,
        )
        .unwrap();

        let configs = doc.benchmarks.unwrap()[0].configs.clone().unwrap();
        assert_eq!(configs[0].sizes(), Some(("10".to_string(), "2".to_string())));
        assert_eq!(configs[1].sizes(), Some(("1.5".to_string(), "4".to_string())));
    }

    #[test]
    fn test_incomplete_size_entry() {
        let entry: SizeEntry = serde_json::from_str(r#"{"problem-size":10}"#).unwrap();
        assert_eq!(entry.sizes(), None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let doc: PlotConfigDocument =
            serde_json::from_str(r#"{"title":"ignored","alias":{"a":"b"}}"#).unwrap();
        assert_eq!(doc.alias.unwrap().get("a").map(String::as_str), Some("b"));
    }
}
