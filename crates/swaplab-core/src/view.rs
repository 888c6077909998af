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

//! Positional cursor view over an `i32` slice.
//!
//! [`IntView`] gives the buffer-based strategies a stateful cursor API:
//! relative reads and writes that advance the position, absolute access by
//! index, and a mark/reset pair for revisiting an earlier position. All
//! access is bounds-checked through slice indexing.

/// A positional view over a mutable `i32` slice.
///
/// Invariants: `mark <= pos <= capacity` is not enforced for `mark` (a reset
/// may legitimately move the position backwards past writes), but `pos` and
/// every absolute index are bounds-checked on access.
#[derive(Debug)]
pub struct IntView<'a> {
    buf: &'a mut [i32],
    pos: usize,
    mark: usize,
}

impl<'a> IntView<'a> {
    /// Wraps a slice in a view with the position and mark at zero.
    pub fn new(buf: &'a mut [i32]) -> Self {
        Self { buf, pos: 0, mark: 0 }
    }

    /// Total number of elements in the underlying slice.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of elements between the position and the end.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to an absolute position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the end of the view.
    pub fn set_position(&mut self, pos: usize) {
        assert!(pos <= self.buf.len(), "position {} out of bounds", pos);
        self.pos = pos;
    }

    /// Remembers the current position for a later [`reset`](Self::reset).
    pub fn mark(&mut self) {
        self.mark = self.pos;
    }

    /// Rewinds the cursor to the most recently marked position.
    pub fn reset(&mut self) {
        self.pos = self.mark;
    }

    /// Reads the element at the cursor and advances by one.
    pub fn get(&mut self) -> i32 {
        let value = self.buf[self.pos];
        self.pos += 1;
        value
    }

    /// Writes at the cursor and advances by one.
    pub fn put(&mut self, value: i32) {
        self.buf[self.pos] = value;
        self.pos += 1;
    }

    /// Reads the element at an absolute index without moving the cursor.
    pub fn get_at(&self, index: usize) -> i32 {
        self.buf[index]
    }

    /// Writes at an absolute index without moving the cursor.
    pub fn put_at(&mut self, index: usize, value: i32) {
        self.buf[index] = value;
    }
}
