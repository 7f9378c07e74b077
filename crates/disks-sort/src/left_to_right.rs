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

//! Left-to-right sorting.
//!
//! Repeats a rightward pass over the whole row, swapping every adjacent
//! (light, dark) pair it meets. Each pass carries at least one light disk
//! past all dark disks that follow it, so `2n - 1` passes are enough for a
//! row of `2n` disks. With early exit enabled the run stops after the first
//! pass without a swap.

use crate::{
    error::SortError,
    monitor::sort_monitor::SortMonitor,
    options::SortOptions,
    result::{SortTerminationReason, SortedDisks},
    sorter::{DiskSorter, check_precondition, finish},
    stats::SortStatistics,
    sweep::{SweepDirection, sweep},
};
use disks_model::state::DiskState;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LeftToRightSorter {
    options: SortOptions,
}

impl LeftToRightSorter {
    /// Creates a left-to-right sorter with the given options.
    #[inline]
    pub fn new(options: SortOptions) -> Self {
        Self { options }
    }

    /// Returns the options this sorter runs with.
    #[inline]
    pub fn options(&self) -> &SortOptions {
        &self.options
    }
}

impl DiskSorter for LeftToRightSorter {
    fn name(&self) -> &str {
        "LeftToRightSorter"
    }

    fn sort_with_monitor(
        &self,
        before: DiskState,
        monitor: &mut dyn SortMonitor,
    ) -> Result<SortedDisks, SortError> {
        check_precondition(&before)?;

        let start_time = Instant::now();
        let mut state = before;
        let mut statistics = SortStatistics::default();
        debug!(
            sorter = self.name(),
            disks = state.total_count(),
            options = %self.options,
            "sort started"
        );
        monitor.on_start(&state);

        let last = state.total_count() - 1;
        let mut termination_reason = SortTerminationReason::PassLimitReached;
        for _ in 0..last {
            let swaps = sweep(
                &mut state,
                0..last,
                SweepDirection::LeftToRight,
                &mut statistics,
                monitor,
            );
            if swaps == 0 && self.options.early_exit() {
                termination_reason = SortTerminationReason::Converged;
                break;
            }
        }

        Ok(finish(
            self.name(),
            state,
            termination_reason,
            statistics,
            start_time,
            monitor,
        ))
    }
}
