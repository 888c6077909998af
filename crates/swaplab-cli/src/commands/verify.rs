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

//! The `verify` command: check the rotation invariant per strategy.

use crate::cli::VerifyArgs;
use crate::error::CliError;
use colored::Colorize;
use swaplab_bench::{random_array, validate_trial_size};
use swaplab_core::{verify_rotation, Strategy};

/// Runs the selected strategies once over the same fixture and prints
/// PASS/FAIL per strategy.
pub fn execute(args: VerifyArgs) -> Result<(), CliError> {
    validate_trial_size(args.size)?;
    let selected: Vec<Strategy> = match &args.strategy {
        Some(name) => {
            let strategy = Strategy::from_name(name).ok_or_else(|| CliError::UnknownStrategy {
                name: name.clone(),
            })?;
            vec![strategy]
        }
        None => Strategy::ALL.to_vec(),
    };
    let base = random_array(args.size, args.seed);

    let mut failed = 0usize;
    for strategy in selected.iter().copied() {
        let mut xs = base.clone();
        let first = xs[0];
        let second = xs[1];
        strategy.apply(&mut xs);

        match verify_rotation(strategy, first, second, &xs) {
            Ok(()) => println!("{} {}", "PASS".green(), strategy.name()),
            Err(err) => {
                failed += 1;
                println!("{} {}: {}", "FAIL".red().bold(), strategy.name(), err);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::VerificationFailed { failed });
    }
    println!(
        "All {} strategies verified at size {}",
        selected.len(),
        args.size
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_passes_at_small_size() {
        let args = VerifyArgs {
            size: 64,
            seed: 7,
            strategy: None,
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_execute_single_strategy() {
        let args = VerifyArgs {
            size: 64,
            seed: 7,
            strategy: Some("xor-swap".to_string()),
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_execute_rejects_unknown_strategy() {
        let args = VerifyArgs {
            size: 64,
            seed: 7,
            strategy: Some("quantum-swap".to_string()),
        };
        assert!(matches!(
            execute(args),
            Err(CliError::UnknownStrategy { .. })
        ));
    }

    #[test]
    fn test_execute_rejects_undersized() {
        let args = VerifyArgs {
            size: 1,
            seed: 7,
            strategy: None,
        };
        assert!(matches!(execute(args), Err(CliError::Config(_))));
    }
}
