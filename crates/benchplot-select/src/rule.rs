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

//! Inclusion rules.

use crate::alias::AliasTable;
use benchplot_core::BenchConfigKey;
use std::collections::BTreeSet;
use std::fmt;

/// Decides whether a benchmark configuration appears in a plot.
///
/// The mode is fixed when the rule is built: a configuration entry that lists
/// sizes becomes an exact allow-list, one that does not becomes a prefix
/// match on the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InclusionRule {
    /// Only the listed configurations.
    Exact(BTreeSet<BenchConfigKey>),
    /// Any key starting with the display name, whatever the sizes.
    Prefix(String),
}

impl InclusionRule {
    /// Build the rule for one benchmark entry.
    ///
    /// `sizes` holds the complete `(problem, local)` pairs of the entry; an
    /// empty slice selects prefix mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_core::BenchConfigKey;
    /// use benchplot_select::{AliasTable, InclusionRule};
    ///
    /// let aliases = AliasTable::default();
    /// let exact = InclusionRule::for_benchmark(&aliases, "X", &[("10".into(), "2".into())]);
    /// assert!(exact.matches(&BenchConfigKey::new("X", "10", "2")));
    /// assert!(!exact.matches(&BenchConfigKey::new("X", "10", "3")));
    ///
    /// let prefix = InclusionRule::for_benchmark(&aliases, "X", &[]);
    /// assert!(prefix.matches(&BenchConfigKey::new("X", "10", "3")));
    /// ```
    pub fn for_benchmark(aliases: &AliasTable, name: &str, sizes: &[(String, String)]) -> Self {
        let display = aliases.translate(name);
        if sizes.is_empty() {
            InclusionRule::Prefix(display.to_string())
        } else {
            InclusionRule::Exact(
                sizes
                    .iter()
                    .map(|(problem, local)| BenchConfigKey::new(display, problem, local))
                    .collect(),
            )
        }
    }

    /// Whether `key` is selected by this rule.
    ///
    /// Prefix rules test the full key string, size suffix included.
    pub fn matches(&self, key: &BenchConfigKey) -> bool {
        match self {
            InclusionRule::Exact(allowed) => allowed.contains(key),
            InclusionRule::Prefix(prefix) => key.as_str().starts_with(prefix.as_str()),
        }
    }
}

impl fmt::Display for InclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InclusionRule::Exact(allowed) => {
                for (i, key) in allowed.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(key.as_str())?;
                }
                Ok(())
            }
            InclusionRule::Prefix(prefix) => write!(f, "{prefix}*"),
        }
    }
}
