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

//! Normalized measurement records.

use crate::key::BenchConfigKey;

/// One timing value. A sample is either a kernel-time or a run-time sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    /// Kernel execution time.
    Kernel(f64),
    /// Whole-run wall time.
    Runtime(f64),
}

impl Timing {
    /// The sample kind.
    pub fn kind(&self) -> TimingKind {
        match self {
            Timing::Kernel(_) => TimingKind::Kernel,
            Timing::Runtime(_) => TimingKind::Runtime,
        }
    }

    /// The raw value regardless of kind.
    pub fn value(&self) -> f64 {
        match *self {
            Timing::Kernel(v) | Timing::Runtime(v) => v,
        }
    }
}

/// Which timing column an aggregation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimingKind {
    /// The `Kernel` column.
    Kernel,
    /// The `Runtime` column.
    #[default]
    Runtime,
}

impl TimingKind {
    /// `Kernel` when kernel time was requested, `Runtime` otherwise.
    pub fn from_kernel_flag(kernel_time: bool) -> Self {
        if kernel_time {
            TimingKind::Kernel
        } else {
            TimingKind::Runtime
        }
    }

    /// Normalized CSV column holding this kind of sample.
    pub fn column_name(&self) -> &'static str {
        match self {
            TimingKind::Kernel => "Kernel",
            TimingKind::Runtime => "Runtime",
        }
    }

    /// The record's value for this column, `None` when the record holds the
    /// other kind of sample.
    pub fn select(&self, record: &NormalizedRecord) -> Option<f64> {
        match (self, record.timing) {
            (TimingKind::Kernel, Timing::Kernel(v)) => Some(v),
            (TimingKind::Runtime, Timing::Runtime(v)) => Some(v),
            _ => None,
        }
    }
}

/// One measurement sample in normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// Raw benchmark identifier.
    pub bench: String,
    /// Variant (implementation / backend) being measured.
    pub name: String,
    /// Free-form run configuration label.
    pub config: String,
    /// Compiler / SYCL implementation.
    pub compiler: String,
    /// Device the benchmark ran on.
    pub device: String,
    /// Whether the result passed verification.
    pub verified: bool,
    /// Problem size parameter.
    pub problem_size: String,
    /// Local (work-group) size parameter.
    pub local_size: String,
    /// The sample value.
    pub timing: Timing,
}

impl NormalizedRecord {
    /// Kernel time, if this is a kernel-time sample.
    pub fn kernel_time(&self) -> Option<f64> {
        TimingKind::Kernel.select(self)
    }

    /// Run time, if this is a run-time sample.
    pub fn run_time(&self) -> Option<f64> {
        TimingKind::Runtime.select(self)
    }

    /// Configuration key using the raw benchmark name.
    pub fn bench_key(&self) -> BenchConfigKey {
        BenchConfigKey::new(&self.bench, &self.problem_size, &self.local_size)
    }
}

/// Metadata shared by every sample of one benchmark result row.
///
/// A raw log row carries a list of timing values; each of them becomes one
/// [`NormalizedRecord`] built from the same metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleMeta {
    /// Raw benchmark identifier.
    pub bench: String,
    /// Variant name.
    pub name: String,
    /// Run configuration label.
    pub config: String,
    /// Compiler / SYCL implementation.
    pub compiler: String,
    /// Device name.
    pub device: String,
    /// Verification flag.
    pub verified: bool,
    /// Problem size parameter.
    pub problem_size: String,
    /// Local size parameter.
    pub local_size: String,
}

impl SampleMeta {
    /// Record with the given timing.
    pub fn sample(&self, timing: Timing) -> NormalizedRecord {
        NormalizedRecord {
            bench: self.bench.clone(),
            name: self.name.clone(),
            config: self.config.clone(),
            compiler: self.compiler.clone(),
            device: self.device.clone(),
            verified: self.verified,
            problem_size: self.problem_size.clone(),
            local_size: self.local_size.clone(),
            timing,
        }
    }

    /// Kernel-time record.
    pub fn kernel_sample(&self, value: f64) -> NormalizedRecord {
        self.sample(Timing::Kernel(value))
    }

    /// Run-time record.
    pub fn run_time_sample(&self, value: f64) -> NormalizedRecord {
        self.sample(Timing::Runtime(value))
    }
}
