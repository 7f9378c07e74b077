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

//! Lawnmower sorting.
//!
//! Alternates the direction of its passes like a lawnmower going back and
//! forth: even passes walk rightwards and carry a light disk to the right
//! end, odd passes walk leftwards and carry a dark disk to the left end.
//! After a rightward pass the rightmost pair of the window is settled, after
//! a leftward pass the leftmost one is, so the window shrinks by one disk at
//! each end every two passes.
//!
//! For an alternating row of `2n` disks, `n` passes are enough. The swaps
//! performed are the same set of inversions the left-to-right sorter
//! resolves, only in a different order, so both report the same count.

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
pub struct LawnmowerSorter {
    options: SortOptions,
}

impl LawnmowerSorter {
    /// Creates a lawnmower sorter with the given options.
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

impl DiskSorter for LawnmowerSorter {
    fn name(&self) -> &str {
        "LawnmowerSorter"
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

        // Window of left indices still holding unsettled pairs.
        let mut lo = 0;
        let mut hi = state.total_count() - 1;
        let mut direction = SweepDirection::LeftToRight;
        let mut termination_reason = SortTerminationReason::PassLimitReached;

        for _ in 0..state.dark_count() {
            let swaps = sweep(&mut state, lo..hi, direction, &mut statistics, monitor);
            if swaps == 0 && self.options.early_exit() {
                termination_reason = SortTerminationReason::Converged;
                break;
            }

            if self.options.shrink_window() {
                match direction {
                    SweepDirection::LeftToRight => hi = hi.saturating_sub(1),
                    SweepDirection::RightToLeft => lo += 1,
                }
            }
            direction = direction.reversed();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::history::SwapHistoryMonitor;

    fn sort(before: &str) -> SortedDisks {
        LawnmowerSorter::default()
            .sort(before.parse().unwrap())
            .unwrap()
    }

    #[test]
    fn test_concrete_cases() {
        let cases = [
            ("L D", "D L", 1),
            ("L D L D", "D D L L", 3),
            ("L D L D L D", "D D D L L L", 6),
        ];
        for (before, after, swaps) in cases {
            let result = sort(before);
            assert_eq!(result.after().to_string(), after);
            assert_eq!(result.swap_count(), swaps, "input {before}");
        }
    }

    #[test]
    fn test_uses_n_passes_on_alternating_rows() {
        for n in 1..=16 {
            let result = LawnmowerSorter::default()
                .sort(DiskState::new(n))
                .unwrap();
            assert_eq!(result.statistics().passes, n as u64, "n = {n}");
            assert!(result.after().is_sorted());
        }
    }

    #[test]
    fn test_alternates_direction() {
        let mut history = SwapHistoryMonitor::new();
        LawnmowerSorter::default()
            .sort_with_monitor(DiskState::new(4), &mut history)
            .unwrap();

        assert_eq!(
            history.directions(),
            &[
                SweepDirection::LeftToRight,
                SweepDirection::RightToLeft,
                SweepDirection::LeftToRight,
                SweepDirection::RightToLeft,
            ]
        );
        assert_eq!(history.swaps_per_pass(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_shrinking_window_saves_comparisons_only() {
        let shrinking = LawnmowerSorter::default()
            .sort(DiskState::new(6))
            .unwrap();
        let full = LawnmowerSorter::new(SortOptions::default().with_shrink_window(false))
            .sort(DiskState::new(6))
            .unwrap();

        assert_eq!(shrinking.after(), full.after());
        assert_eq!(shrinking.swap_count(), full.swap_count());
        assert!(shrinking.statistics().comparisons < full.statistics().comparisons);
    }

    #[test]
    fn test_history_replays_to_result() {
        let before = DiskState::new(7);
        let mut history = SwapHistoryMonitor::new();
        let result = LawnmowerSorter::default()
            .sort_with_monitor(before.clone(), &mut history)
            .unwrap();

        assert_eq!(history.swaps().len() as u64, result.swap_count());
        assert_eq!(&history.replay(&before).unwrap(), result.after());
    }

    #[test]
    fn test_sorted_input_converges_immediately() {
        let result = sort("D D L L");
        assert_eq!(result.swap_count(), 0);
        assert_eq!(result.statistics().passes, 1);
        assert_eq!(
            result.termination_reason(),
            SortTerminationReason::Converged
        );
    }
}
