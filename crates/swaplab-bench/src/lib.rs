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

//! SwapLab Benchmark Framework
//!
//! Drives the swap-strategy comparison: fixture generation, sequential
//! trial execution, rotation verification, and ranked reporting.
//!
//! ## Usage
//!
//! ```
//! use swaplab_bench::{Driver, TrialConfig};
//!
//! let config = TrialConfig::new(&[1_024]).with_reps(1).with_seed(7);
//! let driver = Driver::new(config)?;
//! let reports = driver.run();
//! assert!(reports.iter().all(|r| r.passed()));
//! # Ok::<(), swaplab_bench::BenchError>(())
//! ```
//!
//! Run the criterion benchmarks:
//! ```bash
//! cargo bench --package swaplab-bench
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod generators;
pub mod report;
pub mod timing;

// Re-export key types for convenience
pub use config::{TrialConfig, DEFAULT_REPS, DEFAULT_SEED, DEFAULT_SIZES};
pub use driver::Driver;
pub use error::{validate_trial_size, BenchError, Result, MAX_TRIAL_SIZE};
pub use generators::{random_array, trial_seed};
pub use report::{print_report, print_summary, save_json, to_json, TrialReport, VerificationFailure};
pub use timing::{sort_ascending, StrategyTiming};
