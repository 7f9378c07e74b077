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

//! Statistics reporting for sorting runs.
//!
//! `SortStatistics` counts passes, comparisons of adjacent pairs, and
//! performed swaps while a sorter runs. Counters use saturating arithmetic so
//! the inner loop never traps on overflow. The swap counter is the single
//! source of the swap count reported in `SortedDisks`.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortStatistics {
    /// Number of sweeps over the row.
    pub passes: u64,

    /// Number of adjacent pairs inspected.
    pub comparisons: u64,

    /// Number of adjacent swaps performed.
    pub swaps: u64,

    /// Wall-clock time of the run.
    pub time_total: Duration,
}

impl SortStatistics {
    /// Called when a sweep starts.
    #[inline]
    pub fn on_pass(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    /// Called for every inspected pair.
    #[inline]
    pub fn on_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    /// Called for every performed swap.
    #[inline]
    pub fn on_swap(&mut self) {
        self.swaps = self.swaps.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Comparisons that did not lead to a swap.
    #[inline]
    pub fn idle_comparisons(&self) -> u64 {
        self.comparisons.saturating_sub(self.swaps)
    }
}

impl std::fmt::Display for SortStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sort Statistics:")?;
        writeln!(f, "   Passes:            {}", self.passes)?;
        writeln!(f, "   Comparisons:       {}", self.comparisons)?;
        writeln!(f, "   Swaps:             {}", self.swaps)?;
        writeln!(f, "   Idle Comparisons:  {}", self.idle_comparisons())?;
        writeln!(
            f,
            "   Total Time (secs): {:.3}",
            self.time_total.as_secs_f64()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_increment() {
        let mut stats = SortStatistics::default();
        stats.on_pass();
        stats.on_comparison();
        stats.on_comparison();
        stats.on_swap();

        assert_eq!(stats.passes, 1);
        assert_eq!(stats.comparisons, 2);
        assert_eq!(stats.swaps, 1);
        assert_eq!(stats.idle_comparisons(), 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SortStatistics {
            swaps: u64::MAX,
            ..Default::default()
        };
        stats.on_swap();
        assert_eq!(stats.swaps, u64::MAX);
    }

    #[test]
    fn test_display_contains_all_fields() {
        let stats = SortStatistics {
            passes: 3,
            comparisons: 12,
            swaps: 6,
            time_total: Duration::from_millis(1500),
        };

        let rendered = stats.to_string();
        assert!(rendered.contains("Sort Statistics:"), "missing header");
        assert!(rendered.contains("Passes:            3"));
        assert!(rendered.contains("Comparisons:       12"));
        assert!(rendered.contains("Swaps:             6"));
        assert!(rendered.contains("Idle Comparisons:  6"));
        assert!(rendered.contains("Total Time (secs): 1.500"));
    }
}
