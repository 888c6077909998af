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

//! Per-strategy timing records.
//!
//! A [`StrategyTiming`] is the (strategy, elapsed nanoseconds) pair produced
//! by one strategy run within a trial, with derived throughput metrics for
//! reporting. Records sort ascending by elapsed time with the strategy name
//! as tie-break, giving the ranked report a total order.

use std::cmp::Ordering;
use swaplab_core::Strategy;

/// Timing for one strategy over one trial array.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StrategyTiming {
    /// The strategy that was measured.
    pub strategy: Strategy,
    /// Number of elements in the trial array.
    pub size: usize,
    /// Wall-clock nanoseconds, acquisition overhead already subtracted.
    pub elapsed_ns: u64,
}

impl StrategyTiming {
    /// Creates a new timing record.
    pub fn new(strategy: Strategy, size: usize, elapsed_ns: u64) -> Self {
        Self {
            strategy,
            size,
            elapsed_ns,
        }
    }

    /// Throughput in elements per millisecond.
    pub fn iters_per_ms(&self) -> f64 {
        self.size as f64 * 1_000_000.0 / self.elapsed_ns.max(1) as f64
    }

    /// Cost per element in nanoseconds.
    pub fn ns_per_element(&self) -> f64 {
        self.elapsed_ns as f64 / self.size.max(1) as f64
    }
}

impl Ord for StrategyTiming {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elapsed_ns
            .cmp(&other.elapsed_ns)
            .then_with(|| self.strategy.name().cmp(other.strategy.name()))
            .then_with(|| self.size.cmp(&other.size))
    }
}

impl PartialOrd for StrategyTiming {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorts timing records ascending by elapsed time.
pub fn sort_ascending(timings: &mut [StrategyTiming]) {
    timings.sort();
}
