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

//! The benchmark identity resolver.

use crate::alias::AliasTable;
use crate::document::PlotConfigDocument;
use crate::error::{Result, SelectError};
use crate::rule::InclusionRule;
use benchplot_core::BenchConfigKey;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Aliases and inclusion rules loaded from one plot configuration.
///
/// Immutable once built. A resolver without rules selects nothing.
///
/// # Examples
///
/// ```
/// use benchplot_select::Resolver;
///
/// let resolver = Resolver::from_json_str(
///     r#"{"alias":{"VectorAddition_fp32":"VecAdd"},
///         "benchmarks":[{"name":"VectorAddition_fp32"}]}"#,
/// ).unwrap();
///
/// let key = resolver.bench_key("VectorAddition_fp32", "1024", "256");
/// assert_eq!(key.as_str(), "VecAdd (1024x256)");
/// assert!(resolver.should_plot(&key));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolver {
    aliases: AliasTable,
    rules: Vec<InclusionRule>,
}

impl Resolver {
    /// Resolve a parsed configuration document into rules.
    pub fn from_document(document: PlotConfigDocument) -> Self {
        let aliases = AliasTable::new(document.alias.unwrap_or_default());

        let rules = document
            .benchmarks
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| {
                let name = entry.name.as_deref()?;
                let sizes: Vec<(String, String)> = entry
                    .configs
                    .iter()
                    .flatten()
                    .filter_map(|size| size.sizes())
                    .collect();
                Some(InclusionRule::for_benchmark(&aliases, name, &sizes))
            })
            .collect();

        Self { aliases, rules }
    }

    /// Parse a JSON configuration string.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::Json` for invalid JSON or schema mismatches.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: PlotConfigDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Parse a JSON configuration from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: PlotConfigDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_document(document))
    }

    /// Load the JSON configuration file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| SelectError::io_error(path, e))?;
        let resolver = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            aliases = resolver.aliases.len(),
            rules = resolver.rules.len(),
            "loaded plot configuration"
        );
        debug!("{resolver}");

        Ok(resolver)
    }

    /// Display name of a benchmark or variant.
    pub fn translate<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.translate(name)
    }

    /// Key of a benchmark configuration, using the display name.
    pub fn bench_key(&self, bench: &str, problem_size: &str, local_size: &str) -> BenchConfigKey {
        BenchConfigKey::new(self.translate(bench), problem_size, local_size)
    }

    /// Whether any rule selects `key`.
    pub fn should_plot(&self, key: &BenchConfigKey) -> bool {
        self.rules.iter().any(|rule| rule.matches(key))
    }

    /// The alias table.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Inclusion rules in configuration order.
    pub fn rules(&self) -> &[InclusionRule] {
        &self.rules
    }
}

impl fmt::Display for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "aliases: {}, benchmarks:", self.aliases)?;
        for rule in &self.rules {
            writeln!(f, "  {rule}")?;
        }
        Ok(())
    }
}

/// Benchmark selection for one plotting run.
///
/// Without a configuration file nothing is aliased and every row is
/// plotted; this is distinct from a configuration that defines no rules,
/// which plots nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    /// No configuration: identity names, everything selected.
    #[default]
    All,
    /// Names and selection come from a resolver.
    Configured(Resolver),
}

impl Selector {
    /// `Configured` when a configuration path is given, `All` otherwise.
    pub fn from_optional_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Selector::Configured(Resolver::from_path(path)?)),
            None => Ok(Selector::All),
        }
    }

    /// Display name of a benchmark or variant.
    pub fn translate<'a>(&'a self, name: &'a str) -> &'a str {
        match self {
            Selector::All => name,
            Selector::Configured(resolver) => resolver.translate(name),
        }
    }

    /// Key of a benchmark configuration, using the display name.
    pub fn bench_key(&self, bench: &str, problem_size: &str, local_size: &str) -> BenchConfigKey {
        BenchConfigKey::new(self.translate(bench), problem_size, local_size)
    }

    /// Whether `key` is plotted.
    pub fn should_plot(&self, key: &BenchConfigKey) -> bool {
        match self {
            Selector::All => true,
            Selector::Configured(resolver) => resolver.should_plot(key),
        }
    }

    /// The resolver, if a configuration was loaded.
    pub fn resolver(&self) -> Option<&Resolver> {
        match self {
            Selector::All => None,
            Selector::Configured(resolver) => Some(resolver),
        }
    }
}

impl From<Resolver> for Selector {
    fn from(resolver: Resolver) -> Self {
        Selector::Configured(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_selects_nothing() {
        let resolver = Resolver::from_json_str("{}").unwrap();
        assert!(!resolver.should_plot(&BenchConfigKey::new("A", "1", "1")));
    }

    #[test]
    fn test_entries_without_name_are_ignored() {
        let resolver =
            Resolver::from_json_str(r#"{"benchmarks":[{"configs":[]},{"name":"A"}]}"#).unwrap();
        assert_eq!(resolver.rules().len(), 1);
    }

    #[test]
    fn test_incomplete_configs_fall_back_to_prefix() {
        let resolver = Resolver::from_json_str(
            r#"{"benchmarks":[{"name":"A","configs":[{"problem-size":10}]}]}"#,
        )
        .unwrap();
        assert_eq!(resolver.rules()[0], InclusionRule::Prefix("A".to_string()));
    }

    #[test]
    fn test_any_rule_matches() {
        let resolver = Resolver::from_json_str(
            r#"{"benchmarks":[
                {"name":"A","configs":[{"problem-size":1,"local-size":1}]},
                {"name":"B"}
            ]}"#,
        )
        .unwrap();
        assert!(resolver.should_plot(&BenchConfigKey::new("A", "1", "1")));
        assert!(!resolver.should_plot(&BenchConfigKey::new("A", "2", "1")));
        assert!(resolver.should_plot(&BenchConfigKey::new("B", "2", "1")));
    }

    #[test]
    fn test_selector_all_is_identity() {
        let selector = Selector::All;
        assert_eq!(selector.translate("acpp"), "acpp");
        assert!(selector.should_plot(&BenchConfigKey::new("any", "1", "1")));
        assert!(selector.resolver().is_none());
    }

    #[test]
    fn test_selector_configured_uses_resolver() {
        let resolver = Resolver::from_json_str(r#"{"alias":{"acpp":"AdaptiveCpp"}}"#).unwrap();
        let selector = Selector::from(resolver);
        assert_eq!(selector.translate("acpp"), "AdaptiveCpp");
        assert!(!selector.should_plot(&BenchConfigKey::new("any", "1", "1")));
    }

    #[test]
    fn test_display_lists_rules() {
        let resolver = Resolver::from_json_str(
            r#"{"alias":{"a":"A"},"benchmarks":[{"name":"a"}]}"#,
        )
        .unwrap();
        let text = resolver.to_string();
        assert!(text.contains("aliases: {a: A}"));
        assert!(text.contains("A*"));
    }
}
