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

//! # Disks Sort
//!
//! Two strategies for the alternating disks problem: turn a row of `2n`
//! alternating disks (L, D, L, D, ...) into the sorted row (all dark disks
//! left, all light disks right) using adjacent swaps only, and count the
//! swaps.
//!
//! Core flow
//! - Build a `disks_model::state::DiskState` (usually `DiskState::new(n)`).
//! - Call `sort_left_to_right` or `sort_lawnmower`, or use a
//!   `sorter::DiskSorter` implementation directly to pass `options::SortOptions`
//!   and a `monitor::sort_monitor::SortMonitor`.
//! - Inspect `result::SortedDisks::after` and `swap_count`.
//!
//! Every swap exchanges an adjacent (light, dark) pair and removes exactly
//! one inversion, so both strategies perform `n(n+1)/2` swaps on an
//! alternating row of `2n` disks and zero swaps on a sorted one.
//!
//! Module map
//! - `left_to_right`: repeated rightward passes over the whole row.
//! - `lawnmower`: passes of alternating direction over a shrinking window.
//! - `sweep`: the directional pass both strategies are built from.
//! - `sorter`: the `DiskSorter` trait and the input precondition.
//! - `monitor`: run observers (no-op, composite, tracing log, swap history).
//! - `options`: run configuration.
//! - `result`: sorting outcome with termination reason.
//! - `stats`: pass, comparison and swap counters.
//! - `error`: errors of the fallible entry points.
//!
//! ```rust
//! use disks_model::state::DiskState;
//! use disks_sort::{sort_lawnmower, sort_left_to_right};
//!
//! let left = sort_left_to_right(DiskState::new(3));
//! let lawn = sort_lawnmower(DiskState::new(3));
//! assert_eq!(left.after().to_string(), "D D D L L L");
//! assert_eq!(left.after(), lawn.after());
//! assert_eq!(left.swap_count(), 6);
//! assert_eq!(lawn.swap_count(), 6);
//! ```

pub mod error;
pub mod lawnmower;
pub mod left_to_right;
pub mod monitor;
pub mod options;
pub mod result;
pub mod sorter;
pub mod stats;
pub mod sweep;

use crate::{
    error::SortError, lawnmower::LawnmowerSorter, left_to_right::LeftToRightSorter,
    result::SortedDisks, sorter::DiskSorter,
};
use disks_model::state::DiskState;

/// Sorts `before` with the left-to-right strategy and default options.
///
/// # Panics
///
/// Panics if `before` is neither alternating nor sorted.
pub fn sort_left_to_right(before: DiskState) -> SortedDisks {
    try_sort_left_to_right(before)
        .unwrap_or_else(|e| panic!("called `sort_left_to_right` with an invalid row: {e}"))
}

/// Fallible version of [`sort_left_to_right`].
pub fn try_sort_left_to_right(before: DiskState) -> Result<SortedDisks, SortError> {
    LeftToRightSorter::default().sort(before)
}

/// Sorts `before` with the lawnmower strategy and default options.
///
/// # Panics
///
/// Panics if `before` is neither alternating nor sorted.
pub fn sort_lawnmower(before: DiskState) -> SortedDisks {
    try_sort_lawnmower(before)
        .unwrap_or_else(|e| panic!("called `sort_lawnmower` with an invalid row: {e}"))
}

/// Fallible version of [`sort_lawnmower`].
pub fn try_sort_lawnmower(before: DiskState) -> Result<SortedDisks, SortError> {
    LawnmowerSorter::default().sort(before)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "called `sort_left_to_right` with an invalid row")]
    fn test_sort_left_to_right_panics_on_invalid_row() {
        let _ = sort_left_to_right("L L D D".parse().unwrap());
    }

    #[test]
    #[should_panic(expected = "called `sort_lawnmower` with an invalid row")]
    fn test_sort_lawnmower_panics_on_invalid_row() {
        let _ = sort_lawnmower("L L D D".parse().unwrap());
    }

    #[test]
    fn test_try_variants_report_error() {
        let row: DiskState = "L D D L".parse().unwrap();
        assert!(matches!(
            try_sort_left_to_right(row.clone()),
            Err(SortError::PreconditionViolated { .. })
        ));
        assert!(matches!(
            try_sort_lawnmower(row),
            Err(SortError::PreconditionViolated { .. })
        ));
    }
}
