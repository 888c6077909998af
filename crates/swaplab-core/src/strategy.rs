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

//! The closed registry of swap strategies.
//!
//! Each [`Strategy`] variant performs the same elevator pass (swap `(i, i+1)`
//! for `i` from `0` to `len - 2`) using a different data movement idiom.
//! The set is fixed and small, so it is a fieldless enum rather than a trait
//! object registry; benchmark drivers iterate [`Strategy::ALL`].

use crate::raw;
use crate::view::IntView;
use std::fmt;
use std::time::{Duration, Instant};

/// A named, stateless pairwise-swap strategy.
///
/// [`apply`](Strategy::apply) mutates the slice in place and returns the
/// strategy's acquisition overhead: the time it spent building a view or
/// staging buffer before any element moved. Callers measuring wall-clock
/// time subtract that overhead so strategies with setup cost compare fairly
/// against the plain in-place variants (which report zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Packs two adjacent 32-bit lanes into one `u64` and unpacks them in
    /// swapped order. Shows the bit-op overhead over the same swap without it.
    ShiftPack,
    /// Classic three-XOR in-place swap.
    XorSwap,
    /// Swap through wrapping addition and subtraction.
    SubSwap,
    /// One temporary holding the left value.
    SingleTemp,
    /// Two temporaries with alternate read/write ordering.
    DoubleTemp,
    /// XOR swap on two mutable temporaries, written back at the end.
    XorTemps,
    /// XOR swap through fresh intermediate values.
    XorVals,
    /// Absolute get/put on an [`IntView`].
    BufferRandomAccess,
    /// Mark/reset positional operations on an [`IntView`].
    BufferMarkReset,
    /// Explicit position manipulation on an [`IntView`].
    BufferPosition,
    /// Four forward-moving cursors: a read-ahead, a read-behind, and two
    /// writers committing the pair in swapped order.
    BufferFourWay,
    /// Staged rotation through an owned raw memory block; see [`raw`].
    RawMemoryRotate,
}

impl Strategy {
    /// All registered strategies, in registration order.
    pub const ALL: [Strategy; 12] = [
        Strategy::ShiftPack,
        Strategy::XorSwap,
        Strategy::SubSwap,
        Strategy::SingleTemp,
        Strategy::DoubleTemp,
        Strategy::XorTemps,
        Strategy::XorVals,
        Strategy::BufferRandomAccess,
        Strategy::BufferMarkReset,
        Strategy::BufferPosition,
        Strategy::BufferFourWay,
        Strategy::RawMemoryRotate,
    ];

    /// Stable identifier used in reports and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::ShiftPack => "shift-pack",
            Strategy::XorSwap => "xor-swap",
            Strategy::SubSwap => "sub-swap",
            Strategy::SingleTemp => "single-temp",
            Strategy::DoubleTemp => "double-temp",
            Strategy::XorTemps => "xor-temps",
            Strategy::XorVals => "xor-vals",
            Strategy::BufferRandomAccess => "buffer-random-access",
            Strategy::BufferMarkReset => "buffer-mark-reset",
            Strategy::BufferPosition => "buffer-position",
            Strategy::BufferFourWay => "buffer-four-way",
            Strategy::RawMemoryRotate => "raw-memory-rotate",
        }
    }

    /// One-line description of the technique.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::ShiftPack => "pack two lanes into a u64, unpack swapped",
            Strategy::XorSwap => "three-XOR swap in place",
            Strategy::SubSwap => "swap via wrapping add/subtract",
            Strategy::SingleTemp => "one temporary for the left value",
            Strategy::DoubleTemp => "two temporaries, alternate ordering",
            Strategy::XorTemps => "XOR on two temporaries, write back",
            Strategy::XorVals => "XOR through fresh intermediates",
            Strategy::BufferRandomAccess => "absolute get/put on a cursor view",
            Strategy::BufferMarkReset => "mark/reset cursor operations",
            Strategy::BufferPosition => "explicit cursor positioning",
            Strategy::BufferFourWay => "four forward-moving cursors",
            Strategy::RawMemoryRotate => "u64 rotate-left-32 on raw memory",
        }
    }

    /// Looks a strategy up by its stable name.
    pub fn from_name(name: &str) -> Option<Strategy> {
        Strategy::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Performs the elevator pass over `xs` in place.
    ///
    /// Returns the acquisition overhead to exclude from wall-clock timing.
    /// Slices shorter than two elements are left untouched.
    pub fn apply(&self, xs: &mut [i32]) -> Duration {
        if xs.len() < 2 {
            return Duration::ZERO;
        }
        match self {
            Strategy::ShiftPack => in_place(xs, shift_pack),
            Strategy::XorSwap => in_place(xs, xor_swap),
            Strategy::SubSwap => in_place(xs, sub_swap),
            Strategy::SingleTemp => in_place(xs, single_temp),
            Strategy::DoubleTemp => in_place(xs, double_temp),
            Strategy::XorTemps => in_place(xs, xor_temps),
            Strategy::XorVals => in_place(xs, xor_vals),
            Strategy::BufferRandomAccess => buffer_random_access(xs),
            Strategy::BufferMarkReset => buffer_mark_reset(xs),
            Strategy::BufferPosition => buffer_position(xs),
            Strategy::BufferFourWay => buffer_four_way(xs),
            Strategy::RawMemoryRotate => raw::rotate(xs),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs a plain in-place pass; these variants have no acquisition cost.
#[inline]
fn in_place(xs: &mut [i32], pass: fn(&mut [i32])) -> Duration {
    pass(xs);
    Duration::ZERO
}

fn shift_pack(xs: &mut [i32]) {
    for i in 0..xs.len() - 1 {
        let j = i + 1;
        let packed = ((xs[i] as u32 as u64) << 32) | (xs[j] as u32 as u64);
        xs[i] = (packed & 0xffff_ffff) as u32 as i32;
        xs[j] = (packed >> 32) as u32 as i32;
    }
}

fn xor_swap(xs: &mut [i32]) {
    for i in 0..xs.len() - 1 {
        let j = i + 1;
        xs[i] ^= xs[j];
        xs[j] ^= xs[i];
        xs[i] ^= xs[j];
    }
}

// Wrapping arithmetic: random i32 sums overflow routinely.
fn sub_swap(xs: &mut [i32]) {
    for i in 0..xs.len() - 1 {
        let j = i + 1;
        xs[i] = xs[i].wrapping_add(xs[j]);
        xs[j] = xs[i].wrapping_sub(xs[j]);
        xs[i] = xs[i].wrapping_sub(xs[j]);
    }
}

fn single_temp(xs: &mut [i32]) {
    for i in 0..xs.len() - 1 {
        let j = i + 1;
        let t = xs[i];
        xs[i] = xs[j];
        xs[j] = t;
    }
}

fn double_temp(xs: &mut [i32]) {
    for i in 0..xs.len() - 1 {
        let j = i + 1;
        let right = xs[j];
        let left = xs[i];
        xs[i] = right;
        xs[j] = left;
    }
}

fn xor_temps(xs: &mut [i32]) {
    for i in 0..xs.len() - 1 {
        let j = i + 1;
        let mut a = xs[i];
        let mut b = xs[j];
        a ^= b;
        b ^= a;
        a ^= b;
        xs[i] = a;
        xs[j] = b;
    }
}

fn xor_vals(xs: &mut [i32]) {
    for i in 0..xs.len() - 1 {
        let j = i + 1;
        let a = xs[i];
        let b = xs[j];
        let y1 = a ^ b;
        let y2 = b ^ y1;
        let z = y1 ^ y2;
        xs[i] = z;
        xs[j] = y2;
    }
}

fn buffer_random_access(xs: &mut [i32]) -> Duration {
    let acquire = Instant::now();
    let mut view = IntView::new(xs);
    let overhead = acquire.elapsed();

    for i in 0..view.capacity() - 1 {
        let j = i + 1;
        let left = view.get_at(i);
        let right = view.get_at(j);
        view.put_at(i, right);
        view.put_at(j, left);
    }
    overhead
}

fn buffer_mark_reset(xs: &mut [i32]) -> Duration {
    let acquire = Instant::now();
    let mut view = IntView::new(xs);
    let overhead = acquire.elapsed();

    while view.remaining() > 1 {
        view.mark();
        let left = view.get();
        let right = view.get();
        view.reset();
        view.put(right);
        view.mark();
        view.put(left);
        view.reset();
    }
    overhead
}

fn buffer_position(xs: &mut [i32]) -> Duration {
    let acquire = Instant::now();
    let mut view = IntView::new(xs);
    let overhead = acquire.elapsed();

    while view.remaining() > 1 {
        let at = view.position();
        let left = view.get();
        let right = view.get();
        view.set_position(at);
        view.put(right);
        view.put(left);
        view.set_position(at + 1);
    }
    overhead
}

/// Streaming rotation with four forward-only cursors over one storage.
///
/// `lead` reads one element ahead of the write front, `trail` re-reads the
/// element the previous iteration committed, and the two writers place the
/// pair in swapped order. Rust forbids four aliasing mutable views, so the
/// cursors are explicit indices into the single slice.
fn buffer_four_way(xs: &mut [i32]) -> Duration {
    let acquire = Instant::now();
    let len = xs.len();
    let mut lead = 1usize;
    let mut trail = 0usize;
    let mut write_back = 0usize;
    let mut write_ahead = 1usize;
    let overhead = acquire.elapsed();

    while write_ahead < len {
        let ahead = xs[lead];
        let behind = xs[trail];
        lead += 1;
        trail += 1;
        xs[write_back] = ahead;
        xs[write_ahead] = behind;
        write_back += 1;
        write_ahead += 1;
    }
    overhead
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        for (i, a) in Strategy::ALL.iter().enumerate() {
            for b in &Strategy::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_from_name_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(Strategy::from_name("no-such-strategy"), None);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Strategy::XorSwap.to_string(), "xor-swap");
        assert_eq!(Strategy::RawMemoryRotate.to_string(), "raw-memory-rotate");
    }

    #[test]
    fn test_concrete_rotation() {
        for strategy in Strategy::ALL {
            let mut xs = vec![5, 9, 1, 7, 3];
            strategy.apply(&mut xs);
            assert_eq!(xs, vec![9, 1, 7, 3, 5], "wrong rotation in {}", strategy);
        }
    }

    #[test]
    fn test_length_two_is_a_plain_swap() {
        for strategy in Strategy::ALL {
            let mut xs = vec![-7, 31];
            strategy.apply(&mut xs);
            assert_eq!(xs, vec![31, -7], "wrong pair swap in {}", strategy);
        }
    }

    #[test]
    fn test_short_slices_are_untouched() {
        for strategy in Strategy::ALL {
            let mut empty: Vec<i32> = vec![];
            assert_eq!(strategy.apply(&mut empty), Duration::ZERO);

            let mut single = vec![13];
            strategy.apply(&mut single);
            assert_eq!(single, vec![13], "singleton mutated by {}", strategy);
        }
    }

    #[test]
    fn test_not_an_involution() {
        // The pass is a rotation: applying it twice rotates by two, it does
        // not restore the input.
        for strategy in Strategy::ALL {
            let original = vec![5, 9, 1, 7, 3];
            let mut xs = original.clone();
            strategy.apply(&mut xs);
            strategy.apply(&mut xs);
            assert_ne!(xs, original, "{} behaved as its own inverse", strategy);
            assert_eq!(xs, vec![1, 7, 3, 5, 9], "{} double pass drifted", strategy);
        }
    }

    #[test]
    fn test_extreme_values() {
        for strategy in Strategy::ALL {
            let mut xs = vec![i32::MAX, i32::MIN, -1, 0, 1];
            strategy.apply(&mut xs);
            assert_eq!(
                xs,
                vec![i32::MIN, -1, 0, 1, i32::MAX],
                "value corruption in {}",
                strategy
            );
        }
    }

    #[test]
    fn test_strategies_agree_pairwise() {
        let fixture: Vec<i32> = (0..257).map(|i| i * 31 - 4000).collect();

        let mut reference = fixture.clone();
        Strategy::SingleTemp.apply(&mut reference);

        for strategy in Strategy::ALL {
            let mut xs = fixture.clone();
            strategy.apply(&mut xs);
            assert_eq!(xs, reference, "{} diverged from single-temp", strategy);
        }
    }
}
