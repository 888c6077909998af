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

//! Core swap strategies and rotation verification for SwapLab.
//!
//! Every strategy implements the same "swap elevator" pass over an `i32`
//! slice: adjacent pairs `(i, i + 1)` are swapped for `i` from `0` to
//! `len - 2`. Composed elementwise this is a single left rotation, so the
//! original first element ends up at the last index and the original second
//! element ends up at index 0. The strategies differ only in the data
//! movement idiom used to perform each swap.
//!
//! ## Usage
//!
//! ```
//! use swaplab_core::{verify_rotation, Strategy};
//!
//! let mut xs = vec![5, 9, 1, 7, 3];
//! let overhead = Strategy::SingleTemp.apply(&mut xs);
//! assert_eq!(xs, vec![9, 1, 7, 3, 5]);
//! assert!(verify_rotation(Strategy::SingleTemp, 5, 9, &xs).is_ok());
//! # let _ = overhead;
//! ```

pub mod raw;
pub mod strategy;
pub mod verify;
pub mod view;

// Re-export key types for convenience
pub use strategy::Strategy;
pub use verify::{verify_rotation, RotationError};
pub use view::IntView;
