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

//! The common interface of the two sorting strategies.
//!
//! A sorter takes ownership of its input row, so every run works on a private
//! copy and the caller's row is never aliased. Inputs must be alternating or
//! already sorted; anything else is rejected before the first swap.

use crate::{
    error::SortError,
    monitor::{no_op::NoOpMonitor, sort_monitor::SortMonitor},
    result::{SortTerminationReason, SortedDisks},
    stats::SortStatistics,
};
use disks_model::state::DiskState;
use std::time::Instant;
use tracing::debug;

pub trait DiskSorter {
    /// Returns the name of the sorter.
    fn name(&self) -> &str;

    /// Sorts `before`, reporting every event to `monitor`.
    fn sort_with_monitor(
        &self,
        before: DiskState,
        monitor: &mut dyn SortMonitor,
    ) -> Result<SortedDisks, SortError>;

    /// Sorts `before` without observing the run.
    fn sort(&self, before: DiskState) -> Result<SortedDisks, SortError> {
        self.sort_with_monitor(before, &mut NoOpMonitor)
    }
}

impl std::fmt::Debug for dyn DiskSorter + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiskSorter({})", self.name())
    }
}

/// Accepts alternating rows and rows that are already sorted.
pub fn check_precondition(state: &DiskState) -> Result<(), SortError> {
    if state.is_alternating() || state.is_sorted() {
        Ok(())
    } else {
        Err(SortError::PreconditionViolated {
            row: state.to_string(),
        })
    }
}

/// Closes a run: stamps the elapsed time, notifies the monitor and packs the
/// result.
pub(crate) fn finish(
    sorter: &str,
    state: DiskState,
    termination_reason: SortTerminationReason,
    mut statistics: SortStatistics,
    start_time: Instant,
    monitor: &mut dyn SortMonitor,
) -> SortedDisks {
    statistics.set_total_time(start_time.elapsed());
    debug_assert!(
        state.is_sorted(),
        "`{}` finished with an unsorted row: {}",
        sorter,
        state
    );

    monitor.on_end(&state, &statistics);
    debug!(
        sorter,
        swaps = statistics.swaps,
        passes = statistics.passes,
        %termination_reason,
        "sort finished"
    );

    SortedDisks::new(state, termination_reason, statistics)
}
