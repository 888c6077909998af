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

//! Structured error types for the SwapLab CLI.
//!
//! All CLI commands return `Result<T, CliError>` for consistent error
//! reporting; the binary maps an error into a non-zero exit code.

use swaplab_bench::BenchError;
use thiserror::Error;

/// The main error type for SwapLab CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// The benchmark configuration was rejected before any trial ran.
    #[error("configuration error: {0}")]
    Config(String),

    /// One or more strategies violated the rotation invariant.
    ///
    /// The failures themselves are printed per strategy before this error
    /// surfaces; the variant exists so the process exits abnormally.
    #[error("verification failed for {failed} strategy run(s)")]
    VerificationFailed {
        /// Number of failing strategy runs across all trials
        failed: usize,
    },

    /// Report export (JSON serialization or file write) failed.
    #[error("report export error: {0}")]
    Export(String),

    /// A named strategy does not exist in the registry.
    #[error("unknown strategy '{name}' (see `swaplab list`)")]
    UnknownStrategy {
        /// The name that failed to resolve
        name: String,
    },
}

impl From<BenchError> for CliError {
    fn from(err: BenchError) -> Self {
        match err {
            BenchError::SerializationFailed(_) | BenchError::IoError(_) => {
                CliError::Export(err.to_string())
            }
            other => CliError::Config(other.to_string()),
        }
    }
}
