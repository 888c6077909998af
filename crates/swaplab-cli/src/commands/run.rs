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

//! The `run` command: execute benchmark trials and report rankings.

use crate::cli::RunArgs;
use crate::error::CliError;
use colored::Colorize;
use swaplab_bench::{print_report, print_summary, save_json, Driver, TrialConfig};

/// Builds the trial configuration from command-line arguments.
fn build_config(args: &RunArgs) -> TrialConfig {
    let mut config = TrialConfig::default();
    if !args.sizes.is_empty() {
        config = config.with_sizes(&args.sizes);
    }
    if let Some(reps) = args.reps {
        config = config.with_reps(reps);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config
}

/// Executes the benchmark run.
pub fn execute(args: RunArgs) -> Result<(), CliError> {
    let driver = Driver::new(build_config(&args))?;
    let reports = driver.run();

    if !args.quiet {
        print_report(&reports);
    }
    print_summary(&reports);

    if let Some(path) = &args.json {
        save_json(&reports, path)?;
        println!("Exported JSON: {}", path.display());
    }

    let failed: usize = reports.iter().map(|r| r.failures.len()).sum();
    if failed > 0 {
        for report in &reports {
            for failure in &report.failures {
                eprintln!(
                    "{} {} at size {}: {}",
                    "FAIL".red().bold(),
                    failure.strategy.name(),
                    failure.size,
                    failure.message
                );
            }
        }
        return Err(CliError::VerificationFailed { failed });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaplab_bench::{DEFAULT_REPS, DEFAULT_SEED, DEFAULT_SIZES};

    #[test]
    fn test_build_config_defaults() {
        let args = RunArgs {
            sizes: vec![],
            reps: None,
            seed: None,
            json: None,
            quiet: false,
        };
        let config = build_config(&args);
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(config.reps, DEFAULT_REPS);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_build_config_overrides() {
        let args = RunArgs {
            sizes: vec![64, 256],
            reps: Some(2),
            seed: Some(9),
            json: None,
            quiet: true,
        };
        let config = build_config(&args);
        assert_eq!(config.sizes, vec![64, 256]);
        assert_eq!(config.reps, 2);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_execute_small_run() {
        let args = RunArgs {
            sizes: vec![64],
            reps: Some(1),
            seed: Some(3),
            json: None,
            quiet: true,
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_execute_rejects_bad_sizes() {
        let args = RunArgs {
            sizes: vec![1],
            reps: Some(1),
            seed: None,
            json: None,
            quiet: true,
        };
        assert!(matches!(execute(args), Err(CliError::Config(_))));
    }
}
