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

//! SwapLab Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use swaplab_cli::cli::Commands;

/// SwapLab - pairwise swap strategy benchmarks
///
/// Compares data-movement idioms for the same adjacent-pair rotation over
/// large integer arrays, verifying correctness and ranking wall-clock cost.
///
/// # Examples
///
/// ```bash
/// # Run a small deterministic benchmark
/// swaplab run --sizes 1000000 --reps 3 --seed 42
///
/// # Export trial reports as JSON
/// swaplab run --sizes 1000000 --reps 1 --json report.json
///
/// # List the registered strategies
/// swaplab list
///
/// # Check the rotation invariant without timing anything
/// swaplab verify --size 65536
/// ```
#[derive(Parser)]
#[command(name = "swaplab")]
#[command(author, version, about = "SwapLab - pairwise swap strategy benchmarks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
