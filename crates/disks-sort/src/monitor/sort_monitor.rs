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

//! Monitoring interface for sorting runs.
//!
//! Sorters call these hooks at the start and end of a run, around every pass,
//! and after every swap. Monitors only observe: the row is handed out by
//! shared reference and cannot be changed from a callback.

use crate::{stats::SortStatistics, sweep::SweepDirection};
use disks_model::state::DiskState;

pub trait SortMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the first pass with the input row.
    fn on_start(&mut self, initial: &DiskState);

    /// Called before a pass. `pass` counts from zero.
    fn on_pass_start(&mut self, pass: u64, direction: SweepDirection);

    /// Called after the disks at `left_index` and `left_index + 1` were swapped.
    fn on_swap(&mut self, state: &DiskState, left_index: usize, statistics: &SortStatistics);

    /// Called after a pass with the number of swaps it performed.
    fn on_pass_end(&mut self, state: &DiskState, swaps_in_pass: u64, statistics: &SortStatistics);

    /// Called once with the final row.
    fn on_end(&mut self, result: &DiskState, statistics: &SortStatistics);
}

impl<M> SortMonitor for &mut M
where
    M: SortMonitor + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_start(&mut self, initial: &DiskState) {
        (**self).on_start(initial);
    }

    fn on_pass_start(&mut self, pass: u64, direction: SweepDirection) {
        (**self).on_pass_start(pass, direction);
    }

    fn on_swap(&mut self, state: &DiskState, left_index: usize, statistics: &SortStatistics) {
        (**self).on_swap(state, left_index, statistics);
    }

    fn on_pass_end(&mut self, state: &DiskState, swaps_in_pass: u64, statistics: &SortStatistics) {
        (**self).on_pass_end(state, swaps_in_pass, statistics);
    }

    fn on_end(&mut self, result: &DiskState, statistics: &SortStatistics) {
        (**self).on_end(result, statistics);
    }
}

impl std::fmt::Debug for dyn SortMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortMonitor {{ name: {} }}", self.name())
    }
}

impl std::fmt::Display for dyn SortMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortMonitor: {}", self.name())
    }
}
