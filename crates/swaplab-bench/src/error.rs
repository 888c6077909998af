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

//! Error types for benchmark configuration and report export.
//!
//! Configuration problems are rejected before any trial runs. Rotation
//! verification failures are deliberately *not* errors at this level: the
//! driver records them per strategy in the trial report and keeps going, so
//! one broken strategy cannot abort a whole run.

use std::fmt;

/// Maximum elements per trial array (2 billion).
///
/// Keeps a single fixture under the practical allocation ceiling; a trial of
/// this size already occupies 8 GB per strategy copy.
pub const MAX_TRIAL_SIZE: usize = 2_000_000_000;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while configuring or exporting a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Trial size exceeds maximum allowed limit
    TrialTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Invalid configuration parameter
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Report serialization failed
    SerializationFailed(String),

    /// I/O error
    IoError(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::TrialTooLarge { requested, max } => {
                write!(
                    f,
                    "Trial size {} exceeds maximum allowed limit of {}",
                    requested, max
                )
            }
            BenchError::InvalidConfig { parameter, reason } => {
                write!(
                    f,
                    "Invalid configuration parameter '{}': {}",
                    parameter, reason
                )
            }
            BenchError::SerializationFailed(msg) => {
                write!(f, "Report serialization failed: {}", msg)
            }
            BenchError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BenchError {}

/// Validate that a trial size is usable: at least two elements (the rotation
/// invariant is meaningless below that) and within the allocation ceiling.
#[inline]
pub fn validate_trial_size(size: usize) -> Result<()> {
    if size < 2 {
        return Err(BenchError::InvalidConfig {
            parameter: "sizes".to_string(),
            reason: format!("trial size {} is below the minimum of 2", size),
        });
    }
    if size > MAX_TRIAL_SIZE {
        return Err(BenchError::TrialTooLarge {
            requested: size,
            max: MAX_TRIAL_SIZE,
        });
    }
    Ok(())
}
