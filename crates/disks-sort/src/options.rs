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

//! Run configuration shared by both sorters.
//!
//! None of the options changes the final row or the number of swaps. They
//! only control how much redundant work a run is allowed to skip.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOptions {
    /// Stop as soon as a full pass performs no swap.
    early_exit: bool,

    /// Let the lawnmower sorter narrow its window after every pass.
    shrink_window: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            early_exit: true,
            shrink_window: true,
        }
    }
}

impl SortOptions {
    /// Options that run the full, fixed pass budget over the full row.
    #[inline]
    pub const fn exhaustive() -> Self {
        Self {
            early_exit: false,
            shrink_window: false,
        }
    }

    #[inline]
    pub const fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    #[inline]
    pub const fn with_shrink_window(mut self, shrink_window: bool) -> Self {
        self.shrink_window = shrink_window;
        self
    }

    #[inline]
    pub const fn early_exit(&self) -> bool {
        self.early_exit
    }

    #[inline]
    pub const fn shrink_window(&self) -> bool {
        self.shrink_window
    }
}

impl Display for SortOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SortOptions(early_exit: {}, shrink_window: {})",
            self.early_exit, self.shrink_window
        )
    }
}
