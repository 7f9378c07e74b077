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

//! One directional pass over a window of the row.
//!
//! Both sorters are built from the same step: walk the left indices of a
//! window in one direction and swap every adjacent (light, dark) pair met on
//! the way. The left-to-right sorter always walks rightwards over the whole
//! row; the lawnmower sorter alternates direction and narrows the window.

use crate::{monitor::sort_monitor::SortMonitor, stats::SortStatistics};
use disks_model::state::DiskState;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepDirection {
    LeftToRight,
    RightToLeft,
}

impl SweepDirection {
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            SweepDirection::LeftToRight => SweepDirection::RightToLeft,
            SweepDirection::RightToLeft => SweepDirection::LeftToRight,
        }
    }
}

impl std::fmt::Display for SweepDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepDirection::LeftToRight => write!(f, "left-to-right"),
            SweepDirection::RightToLeft => write!(f, "right-to-left"),
        }
    }
}

/// Runs one pass over the left indices in `window` and returns the number
/// of swaps it performed.
///
/// # Panics
///
/// Panics if `window` reaches the last index of the row, since that index has
/// no right neighbor.
pub(crate) fn sweep(
    state: &mut DiskState,
    window: Range<usize>,
    direction: SweepDirection,
    statistics: &mut SortStatistics,
    monitor: &mut dyn SortMonitor,
) -> u64 {
    debug_assert!(
        window.is_empty() || window.end < state.total_count(),
        "called `sweep` with a window that reaches past the last pair: the len is {} but the window is {:?}",
        state.total_count(),
        window
    );

    let pass = statistics.passes;
    statistics.on_pass();
    monitor.on_pass_start(pass, direction);

    let mut swaps: u64 = 0;
    match direction {
        SweepDirection::LeftToRight => {
            for left_index in window {
                swaps += step(state, left_index, statistics, monitor);
            }
        }
        SweepDirection::RightToLeft => {
            for left_index in window.rev() {
                swaps += step(state, left_index, statistics, monitor);
            }
        }
    }

    monitor.on_pass_end(state, swaps, statistics);
    swaps
}

#[inline(always)]
fn step(
    state: &mut DiskState,
    left_index: usize,
    statistics: &mut SortStatistics,
    monitor: &mut dyn SortMonitor,
) -> u64 {
    statistics.on_comparison();
    if state.get(left_index).is_light() && state.get(left_index + 1).is_dark() {
        state.swap(left_index);
        statistics.on_swap();
        monitor.on_swap(state, left_index, statistics);
        1
    } else {
        0
    }
}
