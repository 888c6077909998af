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

//! Trial reports and the console/JSON reporters.
//!
//! One [`TrialReport`] covers a single (size, repetition) pair: the ranked
//! timing records plus any per-strategy verification failures. The console
//! reporter prints the ranked table; JSON export is for downstream tooling.

use crate::error::{BenchError, Result};
use crate::timing::StrategyTiming;
use std::path::Path;
use swaplab_core::{RotationError, Strategy};

/// A named verification failure recorded for one strategy run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VerificationFailure {
    /// Strategy whose output violated the rotation invariant.
    pub strategy: Strategy,
    /// Trial array size.
    pub size: usize,
    /// Human-readable description of the violation.
    pub message: String,
}

impl VerificationFailure {
    /// Records a rotation error against a strategy and trial size.
    pub fn new(strategy: Strategy, size: usize, error: &RotationError) -> Self {
        Self {
            strategy,
            size,
            message: error.to_string(),
        }
    }
}

/// Results of one trial: one size, one repetition, every strategy.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrialReport {
    /// Number of elements in the trial array.
    pub size: usize,
    /// Zero-based repetition index.
    pub rep: u32,
    /// Timing records sorted ascending by elapsed time.
    pub timings: Vec<StrategyTiming>,
    /// Verification failures, empty on a clean trial.
    pub failures: Vec<VerificationFailure>,
}

impl TrialReport {
    /// Returns whether every strategy passed verification.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// The fastest timing, if any strategy produced a valid result.
    pub fn fastest(&self) -> Option<&StrategyTiming> {
        self.timings.first()
    }
}

/// Prints the ranked console report for a set of trials.
pub fn print_report(reports: &[TrialReport]) {
    for report in reports {
        println!("\n{}", "-".repeat(78));
        println!("TRIAL: size {} (rep {})", report.size, report.rep + 1);
        println!("{}", "-".repeat(78));

        for timing in &report.timings {
            println!(
                "{:<22} {:>10}: {:>14} ns  {:>12.3} iters/ms  {:>9.3} ns/ea",
                timing.strategy.name(),
                timing.size,
                timing.elapsed_ns,
                timing.iters_per_ms(),
                timing.ns_per_element(),
            );
        }

        for failure in &report.failures {
            println!(
                "{:<22} {:>10}: VERIFICATION FAILED - {}",
                failure.strategy.name(),
                failure.size,
                failure.message,
            );
        }
    }
    println!();
}

/// Prints a one-screen summary across all trials.
pub fn print_summary(reports: &[TrialReport]) {
    let failures: usize = reports.iter().map(|r| r.failures.len()).sum();
    println!("\n{}", "=".repeat(60));
    println!("SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Trials: {}", reports.len());
    println!("Verification failures: {}", failures);
    if let Some(winner) = reports
        .iter()
        .filter_map(TrialReport::fastest)
        .min_by(|a, b| a.ns_per_element().total_cmp(&b.ns_per_element()))
    {
        println!(
            "Best ns/element: {:.3} ({} at size {})",
            winner.ns_per_element(),
            winner.strategy.name(),
            winner.size
        );
    }
    println!("{}\n", "=".repeat(60));
}

/// Serializes trial reports to pretty-printed JSON.
pub fn to_json(reports: &[TrialReport]) -> Result<String> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| BenchError::SerializationFailed(e.to_string()))
}

/// Writes the JSON report to a file.
pub fn save_json(reports: &[TrialReport], path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(reports)?;
    std::fs::write(path, json).map_err(|e| BenchError::IoError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> TrialReport {
        TrialReport {
            size: 64,
            rep: 0,
            timings: vec![
                StrategyTiming::new(Strategy::XorSwap, 64, 100),
                StrategyTiming::new(Strategy::SubSwap, 64, 250),
            ],
            failures: vec![],
        }
    }

    #[test]
    fn test_passed_and_fastest() {
        let report = sample_report();
        assert!(report.passed());
        assert_eq!(report.fastest().unwrap().strategy, Strategy::XorSwap);

        let mut failing = sample_report();
        failing.failures.push(VerificationFailure {
            strategy: Strategy::ShiftPack,
            size: 64,
            message: "swap elevator failed".to_string(),
        });
        assert!(!failing.passed());
    }

    #[test]
    fn test_json_round_trip() {
        let reports = vec![sample_report()];
        let json = to_json(&reports).unwrap();
        let back: Vec<TrialReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(reports, back);
    }

    #[test]
    fn test_save_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        save_json(&[sample_report()], &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("xor-swap"));
    }

    #[test]
    fn test_print_does_not_panic() {
        let reports = vec![sample_report()];
        print_report(&reports);
        print_summary(&reports);
    }

    #[test]
    fn test_failure_message_names_strategy() {
        let err = RotationError::ElevatorFailed {
            strategy: Strategy::SubSwap,
            expected: 5,
            actual: 4,
        };
        let failure = VerificationFailure::new(Strategy::SubSwap, 64, &err);
        assert!(failure.message.contains("sub-swap"));
    }
}
