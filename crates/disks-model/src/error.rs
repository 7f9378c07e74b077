// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Errors raised by the fallible `DiskState` operations.
//!
//! The panicking accessors (`DiskState::new`, `get`, `swap`) treat these
//! conditions as precondition violations. The `try_*` counterparts surface
//! the same conditions as values so callers can decide how to react.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiskStateError {
    /// A row was requested with zero light disks.
    #[error("light count must be positive")]
    ZeroLightCount,

    /// A row was requested whose length `2 * light_count` does not fit `usize`.
    #[error("light count {light_count} is too large: row length overflows")]
    TooLarge { light_count: usize },

    /// A row was built from an empty color sequence.
    #[error("a row must contain at least two disks")]
    Empty,

    /// A row was built from a sequence whose light and dark counts differ.
    #[error("unbalanced row: {light} light and {dark} dark disks")]
    Unbalanced { light: usize, dark: usize },

    /// An index outside `[0, len)` was accessed.
    #[error("index {index} out of bounds for row of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A swap was requested whose right neighbor does not exist.
    #[error("cannot swap at {left_index}: no right neighbor in row of length {len}")]
    SwapOutOfBounds { left_index: usize, len: usize },

    /// A rendered row contained a symbol other than `L` or `D`.
    #[error("invalid disk symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: String, position: usize },
}
