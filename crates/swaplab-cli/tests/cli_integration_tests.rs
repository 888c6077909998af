// Dweve SwapLab - Pairwise Swap Strategy Benchmarks
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

//! Integration tests driving the `swaplab` binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn swaplab_cmd() -> Command {
    Command::cargo_bin("swaplab").expect("Failed to find swaplab binary")
}

#[test]
fn list_prints_every_strategy() {
    swaplab_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("shift-pack"))
        .stdout(predicate::str::contains("xor-swap"))
        .stdout(predicate::str::contains("buffer-four-way"))
        .stdout(predicate::str::contains("raw-memory-rotate"));
}

#[test]
fn verify_passes_at_small_size() {
    swaplab_cmd()
        .args(["verify", "--size", "256", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("verified at size 256"));
}

#[test]
fn verify_single_strategy() {
    swaplab_cmd()
        .args(["verify", "--size", "64", "--strategy", "sub-swap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sub-swap"));
}

#[test]
fn verify_unknown_strategy_fails() {
    swaplab_cmd()
        .args(["verify", "--strategy", "quantum-swap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn run_small_trial_reports_rankings() {
    swaplab_cmd()
        .args(["run", "--sizes", "1024", "--reps", "1", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TRIAL: size 1024"))
        .stdout(predicate::str::contains("ns/ea"))
        .stdout(predicate::str::contains("SUMMARY"));
}

#[test]
fn run_quiet_prints_only_summary() {
    swaplab_cmd()
        .args([
            "run", "--sizes", "512", "--reps", "1", "--seed", "1", "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY"))
        .stdout(predicate::str::contains("TRIAL:").not());
}

#[test]
fn run_exports_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    swaplab_cmd()
        .args(["run", "--sizes", "256", "--reps", "1", "--quiet"])
        .arg("--json")
        .arg(&path)
        .assert()
        .success();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("xor-swap"));
    assert!(contents.contains("elapsed_ns"));
}

#[test]
fn run_rejects_undersized_trials() {
    swaplab_cmd()
        .args(["run", "--sizes", "1", "--reps", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn run_rejects_zero_reps() {
    swaplab_cmd()
        .args(["run", "--sizes", "64", "--reps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reps"));
}
