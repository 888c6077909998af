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

//! The swap benchmark driver.
//!
//! For each repetition and size, the driver generates one random fixture,
//! runs every registered strategy against its own copy of that fixture,
//! measures wall-clock time minus the strategy's acquisition overhead,
//! verifies the rotation invariant, and ranks the timings. Strategies run
//! strictly sequentially so measurements are never interleaved.
//!
//! A verification failure does not abort the run: it is recorded against the
//! offending strategy in the trial report and the remaining strategies still
//! execute.

use crate::config::TrialConfig;
use crate::error::Result;
use crate::generators::{random_array, trial_seed};
use crate::report::{TrialReport, VerificationFailure};
use crate::timing::{sort_ascending, StrategyTiming};
use std::time::Instant;
use swaplab_core::{verify_rotation, Strategy};

/// Executes benchmark trials for a validated configuration.
pub struct Driver {
    config: TrialConfig,
}

impl Driver {
    /// Creates a driver, validating the configuration up front.
    ///
    /// # Errors
    ///
    /// Returns the configuration error if sizes, reps, or limits are invalid.
    pub fn new(config: TrialConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this driver runs with.
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Runs the full progression: every size, every repetition.
    pub fn run(&self) -> Vec<TrialReport> {
        let mut reports =
            Vec::with_capacity(self.config.sizes.len() * self.config.reps as usize);
        for rep in 0..self.config.reps {
            for &size in &self.config.sizes {
                reports.push(self.run_trial(size, rep));
            }
        }
        reports
    }

    /// Runs one trial: every strategy once over copies of a single fixture.
    ///
    /// Callers reach this only through [`run`](Self::run), so `size` has
    /// already passed `validate_trial_size` and indexes 0 and 1 exist.
    fn run_trial(&self, size: usize, rep: u32) -> TrialReport {
        let base = random_array(size, trial_seed(self.config.seed, size, rep));
        let mut timings = Vec::with_capacity(Strategy::ALL.len());
        let mut failures = Vec::new();

        for strategy in Strategy::ALL {
            let mut xs = base.clone();
            let first = xs[0];
            let second = xs[1];

            let begin = Instant::now();
            let overhead = strategy.apply(&mut xs);
            let elapsed = begin.elapsed().saturating_sub(overhead);

            match verify_rotation(strategy, first, second, &xs) {
                Ok(()) => timings.push(StrategyTiming::new(
                    strategy,
                    size,
                    elapsed.as_nanos() as u64,
                )),
                Err(err) => failures.push(VerificationFailure::new(strategy, size, &err)),
            }
        }

        sort_ascending(&mut timings);
        TrialReport {
            size,
            rep,
            timings,
            failures,
        }
    }
}
