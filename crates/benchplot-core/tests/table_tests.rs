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

//! Normalized table file I/O and round-trip properties.

use benchplot_core::{BenchTable, NormalizedRecord, SampleMeta, Timing, COLUMNS};
use proptest::prelude::*;

fn meta(bench: &str, name: &str, problem: &str, local: &str) -> SampleMeta {
    SampleMeta {
        bench: bench.to_string(),
        name: name.to_string(),
        config: "default".to_string(),
        compiler: "AdaptiveCpp".to_string(),
        device: "NVIDIA A100".to_string(),
        verified: true,
        problem_size: problem.to_string(),
        local_size: local.to_string(),
    }
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("normalized.csv");

    let mut table = BenchTable::new();
    table.push(meta("VectorAddition_fp32", "acpp", "1048576", "256").kernel_sample(0.0125));
    table.push(meta("VectorAddition_fp32", "acpp", "1048576", "256").run_time_sample(0.25));
    table.push(meta("Sobel3", "dpcpp", "3072", "256").kernel_sample(1e-6));
    table.to_path(&path).unwrap();

    let back = BenchTable::from_path(&path).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_header_matches_column_order() {
    let csv = BenchTable::new().to_csv_string().unwrap();
    let header: Vec<&str> = csv.trim_end().split(',').collect();
    assert_eq!(header, COLUMNS.to_vec());
}

#[test]
fn test_quoted_device_names_survive() {
    let mut table = BenchTable::new();
    table.push(meta("A", "v1", "1", "1").kernel_sample(1.0));
    let mut rec = table.records()[0].clone();
    rec.device = "Intel(R) Xeon(R), 2 sockets".to_string();
    table.push(rec);

    let csv = table.to_csv_string().unwrap();
    let back = BenchTable::read_csv(csv.as_bytes()).unwrap();
    assert_eq!(back.records()[1].device, "Intel(R) Xeon(R), 2 sockets");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = BenchTable::from_path("/nonexistent/normalized.csv").unwrap_err();
    assert!(matches!(err, benchplot_core::CoreError::Io(_)));
}

fn arb_record() -> impl Strategy<Value = NormalizedRecord> {
    (
        "[A-Za-z][A-Za-z0-9_]{0,12}",
        "[a-z]{1,8}",
        1u32..100_000,
        1u32..1024,
        any::<bool>(),
        0.0f64..1e6,
    )
        .prop_map(|(bench, name, problem, local, kernel, value)| {
            let meta = meta(&bench, &name, &problem.to_string(), &local.to_string());
            if kernel {
                meta.sample(Timing::Kernel(value))
            } else {
                meta.sample(Timing::Runtime(value))
            }
        })
}

proptest! {
    #[test]
    fn prop_write_then_read_preserves_rows(records in prop::collection::vec(arb_record(), 0..40)) {
        let table: BenchTable = records.into_iter().collect();
        let csv = table.to_csv_string().unwrap();
        let back = BenchTable::read_csv(csv.as_bytes()).unwrap();
        prop_assert_eq!(back, table);
    }
}
