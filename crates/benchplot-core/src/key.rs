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

//! Benchmark configuration identity.

use std::fmt;

/// Identity of one benchmark parameterization: `"{name} ({problem}x{local})"`.
///
/// The name is the display (aliased) benchmark name. Keys are used for
/// inclusion filtering and as plot categories, so two records of the same
/// benchmark and sizes but different variants share one key.
///
/// # Examples
///
/// ```
/// use benchplot_core::BenchConfigKey;
///
/// let key = BenchConfigKey::new("X", "10", "2");
/// assert_eq!(key.as_str(), "X (10x2)");
/// assert!(key.as_str().starts_with("X"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BenchConfigKey(String);

impl BenchConfigKey {
    /// Builds the key from a display name and the two size parameters.
    pub fn new(display_name: &str, problem_size: &str, local_size: &str) -> Self {
        Self(format!("{display_name} ({problem_size}x{local_size})"))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key, returning the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BenchConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BenchConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Size-only label `"{problem}x{local}"`, used where the benchmark is implied.
pub fn size_label(problem_size: &str, local_size: &str) -> String {
    format!("{problem_size}x{local_size}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let key = BenchConfigKey::new("Sobel3", "4096", "256");
        assert_eq!(key.to_string(), "Sobel3 (4096x256)");
    }

    #[test]
    fn test_same_sizes_same_key() {
        assert_eq!(
            BenchConfigKey::new("A", "1", "2"),
            BenchConfigKey::new("A", "1", "2")
        );
        assert_ne!(
            BenchConfigKey::new("A", "1", "2"),
            BenchConfigKey::new("A", "1", "3")
        );
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let mut keys = vec![
            BenchConfigKey::new("b", "1", "1"),
            BenchConfigKey::new("B", "1", "1"),
            BenchConfigKey::new("a", "1", "1"),
        ];
        keys.sort();
        let names: Vec<_> = keys.iter().map(BenchConfigKey::as_str).collect();
        assert_eq!(names, vec!["B (1x1)", "a (1x1)", "b (1x1)"]);
    }

    #[test]
    fn test_size_label() {
        assert_eq!(size_label("1024", "64"), "1024x64");
    }
}
