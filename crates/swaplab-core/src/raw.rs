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

//! Raw-memory rotation strategy.
//!
//! Copies the slice into an owned, untracked allocation and performs the
//! elevator pass as 64-bit rotate-left-by-32 operations at each 4-byte
//! offset: the `u64` word starting at offset `4 * i` straddles lanes `i` and
//! `i + 1`, and rotating it by 32 bits exchanges the two lanes regardless of
//! host endianness. Sweeping `i` forward therefore reproduces the sequential
//! adjacent-pair swap.
//!
//! Copy-in and copy-out are bounds-checked (`copy_nonoverlapping` over the
//! exact byte length); only the rotate loop uses unchecked word access.

use std::alloc::{alloc, dealloc, Layout};
use std::mem;
use std::ptr;
use std::time::{Duration, Instant};

/// Largest byte length the strategy will stage in raw memory.
///
/// Mirrors a 32-bit signed addressable range: anything larger falls back to
/// the trivial endpoint swap instead of allocating.
pub const MAX_ADDRESSABLE_BYTES: usize = i32::MAX as usize;

/// Returns whether `len` elements fit inside the 32-bit addressable range.
pub fn fits_addressable_range(len: usize) -> bool {
    fits_within(len, MAX_ADDRESSABLE_BYTES)
}

fn fits_within(len: usize, max_bytes: usize) -> bool {
    len.checked_mul(mem::size_of::<i32>())
        .map(|bytes| bytes <= max_bytes)
        .unwrap_or(false)
}

/// An owned raw allocation released on drop.
struct RawBlock {
    ptr: *mut u8,
    layout: Layout,
}

impl RawBlock {
    /// Allocates `bytes` of 8-byte-aligned memory, or `None` on failure.
    fn allocate(bytes: usize) -> Option<Self> {
        debug_assert!(bytes > 0);
        let layout = Layout::from_size_align(bytes, mem::align_of::<u64>()).ok()?;
        // SAFETY: the layout has a non-zero size.
        let ptr = unsafe { alloc(layout) };
        if ptr.is_null() {
            None
        } else {
            Some(Self { ptr, layout })
        }
    }

    fn as_ptr(&self) -> *mut u8 {
        self.ptr
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        // SAFETY: `ptr` was allocated with exactly this layout.
        unsafe { dealloc(self.ptr, self.layout) }
    }
}

/// Performs the elevator pass through an owned raw memory block.
///
/// Returns the acquisition overhead: the time spent allocating the block and
/// copying the slice in. The rotate loop and the copy back out are charged
/// to the caller's wall clock.
///
/// If the byte length would overflow the 32-bit addressable range, or the
/// allocation fails, the strategy degrades to a single swap of the first and
/// last elements and returns immediately with zero overhead.
pub fn rotate(xs: &mut [i32]) -> Duration {
    rotate_with_limit(xs, MAX_ADDRESSABLE_BYTES)
}

/// The rotation with an explicit byte ceiling, so the degrade path can be
/// driven on a small slice.
fn rotate_with_limit(xs: &mut [i32], max_bytes: usize) -> Duration {
    let len = xs.len();
    if len < 2 {
        return Duration::ZERO;
    }
    if !fits_within(len, max_bytes) {
        xs.swap(0, len - 1);
        return Duration::ZERO;
    }
    let bytes = len * mem::size_of::<i32>();

    let acquire = Instant::now();
    let block = match RawBlock::allocate(bytes) {
        Some(block) => block,
        None => {
            xs.swap(0, len - 1);
            return Duration::ZERO;
        }
    };
    // SAFETY: the block spans `bytes` bytes and `xs` spans exactly as many.
    unsafe {
        ptr::copy_nonoverlapping(xs.as_ptr().cast::<u8>(), block.as_ptr(), bytes);
    }
    let overhead = acquire.elapsed();

    // SAFETY: every word read starts at offset `4 * i` with `i <= len - 2`,
    // so the 8 bytes accessed end at `4 * i + 8 <= 4 * len = bytes`.
    unsafe {
        let base = block.as_ptr();
        for i in 0..len - 1 {
            let word = base.add(i * mem::size_of::<i32>()).cast::<u64>();
            let rotated = ptr::read_unaligned(word).rotate_left(32);
            ptr::write_unaligned(word, rotated);
        }
        ptr::copy_nonoverlapping(block.as_ptr().cast_const(), xs.as_mut_ptr().cast::<u8>(), bytes);
    }

    overhead
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_small() {
        let mut xs = vec![5, 9, 1, 7, 3];
        rotate(&mut xs);
        assert_eq!(xs, vec![9, 1, 7, 3, 5]);
    }

    #[test]
    fn test_rotate_pair() {
        let mut xs = vec![-42, 17];
        rotate(&mut xs);
        assert_eq!(xs, vec![17, -42]);
    }

    #[test]
    fn test_rotate_short_slices_untouched() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(rotate(&mut empty), Duration::ZERO);

        let mut single = vec![7];
        assert_eq!(rotate(&mut single), Duration::ZERO);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_fits_addressable_range_boundaries() {
        assert!(fits_addressable_range(0));
        assert!(fits_addressable_range(1_000_000));
        // i32::MAX / 4 elements is the last length whose byte size fits.
        let limit = MAX_ADDRESSABLE_BYTES / mem::size_of::<i32>();
        assert!(fits_addressable_range(limit));
        assert!(!fits_addressable_range(limit + 1));
        assert!(!fits_addressable_range(usize::MAX));
    }

    #[test]
    fn test_rotate_degrades_past_byte_limit() {
        // Eight-byte ceiling: five elements need twenty bytes, so the
        // strategy must swap the endpoints only and report zero overhead.
        let mut xs = vec![5, 9, 1, 7, 3];
        let overhead = rotate_with_limit(&mut xs, 8);
        assert_eq!(xs, vec![3, 9, 1, 7, 5]);
        assert_eq!(overhead, Duration::ZERO);

        // A pair at the ceiling still takes the staged path.
        let mut pair = vec![4, -4];
        rotate_with_limit(&mut pair, 8);
        assert_eq!(pair, vec![-4, 4]);
    }

    #[test]
    fn test_rotate_negative_values() {
        let mut xs = vec![i32::MIN, -1, i32::MAX, 0];
        rotate(&mut xs);
        assert_eq!(xs, vec![-1, i32::MAX, 0, i32::MIN]);
    }
}
