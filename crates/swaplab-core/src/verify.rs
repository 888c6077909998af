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

//! Rotation invariant verification.
//!
//! After a strategy's elevator pass, the element that started at index 0
//! must sit at the last index and the element that started at index 1 must
//! sit at index 0. Violations are reported as named per-strategy errors so a
//! driver can record the failure and keep running the remaining strategies.

use crate::strategy::Strategy;
use thiserror::Error;

/// A named rotation invariant violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    /// The original first element did not arrive at the last index.
    #[error("swap elevator failed in {strategy}: expected {expected} at the last index, found {actual}")]
    ElevatorFailed {
        /// Strategy that produced the result
        strategy: Strategy,
        /// Value that started at index 0
        expected: i32,
        /// Value found at the last index
        actual: i32,
    },

    /// The original second element did not arrive at index 0.
    #[error("swap results corrupted in {strategy}: expected {expected} at index 0, found {actual}")]
    ResultsCorrupted {
        /// Strategy that produced the result
        strategy: Strategy,
        /// Value that started at index 1
        expected: i32,
        /// Value found at index 0
        actual: i32,
    },

    /// The slice is too short for the invariant to be meaningful.
    #[error("slice of length {len} is too short to verify a rotation")]
    TooShort {
        /// Length of the verified slice
        len: usize,
    },
}

/// Checks the elevator invariant against a transformed slice.
///
/// `first` and `second` are the values that occupied indices 0 and 1 before
/// the transform ran.
pub fn verify_rotation(
    strategy: Strategy,
    first: i32,
    second: i32,
    after: &[i32],
) -> Result<(), RotationError> {
    let len = after.len();
    if len < 2 {
        return Err(RotationError::TooShort { len });
    }

    let last = after[len - 1];
    if last != first {
        return Err(RotationError::ElevatorFailed {
            strategy,
            expected: first,
            actual: last,
        });
    }
    if after[0] != second {
        return Err(RotationError::ResultsCorrupted {
            strategy,
            expected: second,
            actual: after[0],
        });
    }
    Ok(())
}
