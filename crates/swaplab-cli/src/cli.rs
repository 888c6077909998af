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

//! CLI command definitions and argument parsing.

use crate::commands::{list, run, verify};
use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the swap-strategy benchmark trials and print a ranked report
    Run(RunArgs),
    /// List the registered swap strategies
    List,
    /// Check the rotation invariant for every strategy at a small size
    Verify(VerifyArgs),
}

/// Arguments for the `run` command.
#[derive(Args)]
pub struct RunArgs {
    /// Array sizes to benchmark (comma-separated); defaults to 10^6..10^9
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Number of repetitions of the full size progression
    #[arg(long)]
    pub reps: Option<u32>,

    /// Base RNG seed for fixture generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the trial reports as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Suppress the per-trial tables, print only the summary
    #[arg(long)]
    pub quiet: bool,
}

/// Arguments for the `verify` command.
#[derive(Args)]
pub struct VerifyArgs {
    /// Array size for the verification pass
    #[arg(long, default_value_t = 4_096)]
    pub size: usize,

    /// RNG seed for the verification fixture
    #[arg(long, default_value_t = swaplab_bench::DEFAULT_SEED)]
    pub seed: u64,

    /// Verify a single strategy by name instead of the whole registry
    #[arg(long)]
    pub strategy: Option<String>,
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration is invalid, the report export
    /// fails, or any strategy violates the rotation invariant.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Run(args) => run::execute(args),
            Commands::List => list::execute(),
            Commands::Verify(args) => verify::execute(args),
        }
    }
}
