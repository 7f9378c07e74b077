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

use crate::{monitor::sort_monitor::SortMonitor, stats::SortStatistics, sweep::SweepDirection};
use disks_model::state::DiskState;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Reports the progress of a run through `tracing`.
///
/// Run start and end are logged at `info`. Every `pass_interval`-th pass is
/// logged at `debug`, and single swaps at `trace`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    pass_interval: u64,
}

impl LogMonitor {
    pub fn new(pass_interval: u64) -> Self {
        Self {
            start_time: Instant::now(),
            pass_interval: pass_interval.max(1),
        }
    }

    #[inline]
    pub fn pass_interval(&self) -> u64 {
        self.pass_interval
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(1)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(pass_interval: {})", self.pass_interval)
    }
}

impl SortMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, initial: &DiskState) {
        self.start_time = Instant::now();
        info!(disks = initial.total_count(), row = %initial, "sort started");
    }

    fn on_pass_start(&mut self, pass: u64, direction: SweepDirection) {
        trace!(pass, %direction, "pass started");
    }

    fn on_swap(&mut self, _state: &DiskState, left_index: usize, statistics: &SortStatistics) {
        trace!(left_index, swaps = statistics.swaps, "swap");
    }

    fn on_pass_end(&mut self, state: &DiskState, swaps_in_pass: u64, statistics: &SortStatistics) {
        if statistics.passes % self.pass_interval == 0 {
            debug!(
                pass = statistics.passes,
                swaps_in_pass,
                swaps = statistics.swaps,
                row = %state,
                "pass finished"
            );
        }
    }

    fn on_end(&mut self, result: &DiskState, statistics: &SortStatistics) {
        info!(
            swaps = statistics.swaps,
            passes = statistics.passes,
            comparisons = statistics.comparisons,
            elapsed = ?self.start_time.elapsed(),
            sorted = result.is_sorted(),
            "sort finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        assert_eq!(LogMonitor::new(0).pass_interval(), 1);
        assert_eq!(LogMonitor::default().to_string(), "LogMonitor(pass_interval: 1)");
    }

    #[test]
    fn test_emits_start_and_end_events() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut monitor = LogMonitor::default();
            let mut state = DiskState::new(1);
            let mut stats = SortStatistics::default();
            monitor.on_start(&state);
            stats.on_pass();
            state.swap(0);
            stats.on_swap();
            monitor.on_pass_end(&state, 1, &stats);
            monitor.on_end(&state, &stats);
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("sort started"), "{output}");
        assert!(output.contains("pass finished"), "{output}");
        assert!(output.contains("sort finished"), "{output}");
        assert!(output.contains("sorted=true"), "{output}");
    }
}
