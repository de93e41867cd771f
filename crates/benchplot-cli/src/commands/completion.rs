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

//! Shell completion scripts for the `benchplot` binary.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write the completion script of `cmd` for `shell` to `out`.
pub fn write_completion(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// One-line hint on where to put the script for `shell`.
///
/// # Examples
///
/// ```
/// use benchplot_cli::commands::installation_hint;
/// use clap_complete::Shell;
///
/// assert!(installation_hint(Shell::Fish).starts_with("benchplot completion fish >"));
/// ```
pub fn installation_hint(shell: Shell) -> String {
    match shell {
        Shell::Bash => {
            "benchplot completion bash > ~/.local/share/bash-completion/completions/benchplot"
                .to_string()
        }
        Shell::Zsh => "benchplot completion zsh > \"${fpath[1]}/_benchplot\"".to_string(),
        Shell::Fish => {
            "benchplot completion fish > ~/.config/fish/completions/benchplot.fish".to_string()
        }
        other => format!("Load the output of `benchplot completion {other}` from your {other} profile"),
    }
}
