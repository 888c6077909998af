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

//! Trial configuration for the benchmark driver.
//!
//! Sizes, repetition count, and the RNG seed are explicit parameters rather
//! than module-level constants, so tests can drive small deterministic
//! trials while the CLI keeps the full-scale defaults.

use crate::error::{validate_trial_size, BenchError, Result};

/// Default size progression: powers of ten from 10^6 to 10^9.
pub const DEFAULT_SIZES: &[usize] = &[1_000_000, 10_000_000, 100_000_000, 1_000_000_000];

/// Default repetition count per size.
pub const DEFAULT_REPS: u32 = 10;

/// Default RNG seed for fixture generation.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for a benchmark run.
///
/// # Example
///
/// ```
/// use swaplab_bench::config::TrialConfig;
///
/// let config = TrialConfig::new(&[1_024, 65_536])
///     .with_reps(3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialConfig {
    /// Array sizes to benchmark, in run order.
    pub sizes: Vec<usize>,
    /// Number of repetitions of the full size progression.
    pub reps: u32,
    /// Base seed for fixture generation.
    pub seed: u64,
}

impl TrialConfig {
    /// Creates a configuration with the given sizes and default reps/seed.
    pub fn new(sizes: &[usize]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            reps: DEFAULT_REPS,
            seed: DEFAULT_SEED,
        }
    }

    /// Replaces the size progression.
    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Sets the repetition count.
    pub fn with_reps(mut self, reps: u32) -> Self {
        self.reps = reps;
        self
    }

    /// Sets the base RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the configuration can actually run.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] for an empty size list, a zero
    /// repetition count, or an undersized trial, and
    /// [`BenchError::TrialTooLarge`] past the allocation ceiling.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig {
                parameter: "sizes".to_string(),
                reason: "at least one trial size is required".to_string(),
            });
        }
        if self.reps == 0 {
            return Err(BenchError::InvalidConfig {
                parameter: "reps".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        for &size in &self.sizes {
            validate_trial_size(size)?;
        }
        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MAX_TRIAL_SIZE;

    #[test]
    fn test_default_config() {
        let config = TrialConfig::default();
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(config.reps, DEFAULT_REPS);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = TrialConfig::new(&[100])
            .with_sizes(&[64, 256])
            .with_reps(5)
            .with_seed(99);
        assert_eq!(config.sizes, vec![64, 256]);
        assert_eq!(config.reps, 5);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_rejects_empty_sizes() {
        let config = TrialConfig::new(&[]);
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_reps() {
        let config = TrialConfig::new(&[128]).with_reps(0);
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_undersized_and_oversized_trials() {
        assert!(TrialConfig::new(&[1]).validate().is_err());
        assert_eq!(
            TrialConfig::new(&[MAX_TRIAL_SIZE + 1]).validate(),
            Err(BenchError::TrialTooLarge {
                requested: MAX_TRIAL_SIZE + 1,
                max: MAX_TRIAL_SIZE,
            })
        );
    }
}
