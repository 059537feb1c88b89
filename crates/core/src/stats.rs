//! Loop timing statistics
//!
//! The fixed-interval driver records one sample per iteration: how long the
//! task's `step` took compared with the tick interval.

/// Runtime statistics for one driver run
///
/// These statistics are updated after each `step` and returned to the
/// caller in a [`RunReport`](crate::driver::RunReport).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Last step time in microseconds
    pub last_step_us: u64,

    /// Average step time in microseconds (exponential moving average)
    ///
    /// Uses EMA with alpha = 0.1 to smooth out variations while remaining responsive
    /// to changes in step time.
    pub avg_step_us: u64,

    /// Maximum step time observed in microseconds
    pub max_step_us: u64,

    /// Number of steps that took longer than the tick interval
    pub overruns: u32,

    /// Total number of steps
    pub ticks: u64,
}

impl LoopStats {
    /// Update statistics with a new step measurement
    ///
    /// # Arguments
    ///
    /// * `step_us` - Duration of the step in microseconds
    /// * `interval_us` - Tick interval the step has to fit in
    ///
    /// # Returns
    ///
    /// `true` if the step overran the interval
    pub fn record(&mut self, step_us: u64, interval_us: u64) -> bool {
        self.last_step_us = step_us;
        self.ticks = self.ticks.saturating_add(1);

        // EMA formula: avg_new = alpha * value + (1 - alpha) * avg_old
        // Using fixed-point arithmetic: avg_new = (value + 9 * avg_old) / 10
        if self.avg_step_us == 0 {
            self.avg_step_us = step_us;
        } else {
            self.avg_step_us = (step_us + 9 * self.avg_step_us) / 10;
        }

        if step_us > self.max_step_us {
            self.max_step_us = step_us;
        }

        let overrun = step_us > interval_us;
        if overrun {
            self.overruns = self.overruns.saturating_add(1);
        }
        overrun
    }

    /// Reset all statistics to initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_stats_record() {
        let mut stats = LoopStats::default();

        assert!(!stats.record(1500, 20_000));
        assert_eq!(stats.last_step_us, 1500);
        assert_eq!(stats.avg_step_us, 1500);
        assert_eq!(stats.max_step_us, 1500);
        assert_eq!(stats.ticks, 1);

        assert!(!stats.record(1600, 20_000));
        assert_eq!(stats.avg_step_us, (1600 + 9 * 1500) / 10); // EMA
        assert_eq!(stats.max_step_us, 1600);
        assert_eq!(stats.overruns, 0);
    }

    #[test]
    fn test_loop_stats_overrun() {
        let mut stats = LoopStats::default();

        // Exactly the interval is not an overrun
        assert!(!stats.record(20_000, 20_000));
        assert!(stats.record(20_001, 20_000));
        assert!(stats.record(45_000, 20_000));

        assert_eq!(stats.overruns, 2);
        assert_eq!(stats.max_step_us, 45_000);
        assert_eq!(stats.ticks, 3);

        stats.reset();
        assert_eq!(stats, LoopStats::default());
    }
}
