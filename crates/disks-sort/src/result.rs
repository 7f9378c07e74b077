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

//! Sorting outcome and termination reporting.
//!
//! `SortedDisks` bundles the final row of a run with its statistics and the
//! reason the run stopped. The swap count it reports is the number of
//! adjacent swaps that turned the input into `after()`.

use crate::stats::SortStatistics;
use disks_model::state::DiskState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortTerminationReason {
    /// A full pass performed no swap.
    Converged,

    /// The fixed pass budget of the algorithm was used up.
    PassLimitReached,
}

impl std::fmt::Display for SortTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortTerminationReason::Converged => write!(f, "Converged"),
            SortTerminationReason::PassLimitReached => write!(f, "Pass Limit Reached"),
        }
    }
}

/// The output of a sorter: the final row and how it was reached.
#[derive(Debug, Clone)]
pub struct SortedDisks {
    after: DiskState,
    termination_reason: SortTerminationReason,
    statistics: SortStatistics,
}

impl SortedDisks {
    #[inline]
    pub fn new(
        after: DiskState,
        termination_reason: SortTerminationReason,
        statistics: SortStatistics,
    ) -> Self {
        Self {
            after,
            termination_reason,
            statistics,
        }
    }

    /// Returns the final row.
    #[inline]
    pub fn after(&self) -> &DiskState {
        &self.after
    }

    /// Consumes the result and returns the final row.
    #[inline]
    pub fn into_after(self) -> DiskState {
        self.after
    }

    /// Returns the number of adjacent swaps performed.
    #[inline]
    pub fn swap_count(&self) -> u64 {
        self.statistics.swaps
    }

    #[inline]
    pub fn termination_reason(&self) -> SortTerminationReason {
        self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &SortStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for SortedDisks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sorted Disks")?;
        writeln!(f, "   After:       {}", self.after)?;
        writeln!(f, "   Swap Count:  {}", self.swap_count())?;
        writeln!(f, "   Termination: {}", self.termination_reason)?;
        Ok(())
    }
}
