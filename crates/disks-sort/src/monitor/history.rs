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

//! Swap recording and replay.
//!
//! `SwapHistoryMonitor` keeps the left index of every swap in the order the
//! sorter performed them, plus the number of swaps in each pass. Replaying
//! the recorded indices on the input row reproduces the final row, which
//! makes it possible to check a reported swap count against the swaps that
//! actually happened.

use crate::{monitor::sort_monitor::SortMonitor, stats::SortStatistics, sweep::SweepDirection};
use disks_model::{error::DiskStateError, state::DiskState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapHistoryMonitor {
    swaps: Vec<usize>,
    swaps_per_pass: Vec<u64>,
    directions: Vec<SweepDirection>,
}

impl SwapHistoryMonitor {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Left indices of all swaps, in execution order.
    #[inline]
    pub fn swaps(&self) -> &[usize] {
        &self.swaps
    }

    /// Number of swaps performed by each pass.
    #[inline]
    pub fn swaps_per_pass(&self) -> &[u64] {
        &self.swaps_per_pass
    }

    /// Direction of each pass.
    #[inline]
    pub fn directions(&self) -> &[SweepDirection] {
        &self.directions
    }

    /// Applies the recorded swaps to a copy of `initial`.
    ///
    /// Fails if a recorded index does not fit the given row, which happens
    /// when replaying on a row of a different length.
    pub fn replay(&self, initial: &DiskState) -> Result<DiskState, DiskStateError> {
        let mut state = initial.clone();
        for &left_index in &self.swaps {
            state.try_swap(left_index)?;
        }
        Ok(state)
    }
}

impl SortMonitor for SwapHistoryMonitor {
    fn name(&self) -> &str {
        "SwapHistoryMonitor"
    }

    fn on_start(&mut self, _initial: &DiskState) {
        self.swaps.clear();
        self.swaps_per_pass.clear();
        self.directions.clear();
    }

    fn on_pass_start(&mut self, _pass: u64, direction: SweepDirection) {
        self.directions.push(direction);
    }

    fn on_swap(&mut self, _state: &DiskState, left_index: usize, _statistics: &SortStatistics) {
        self.swaps.push(left_index);
    }

    fn on_pass_end(
        &mut self,
        _state: &DiskState,
        swaps_in_pass: u64,
        _statistics: &SortStatistics,
    ) {
        self.swaps_per_pass.push(swaps_in_pass);
    }

    fn on_end(&mut self, _result: &DiskState, _statistics: &SortStatistics) {}
}
