use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopMetricsSnapshot {
    pub tps: f32,
    pub tick_work_ms: f32,
}

/// Counts ticks over a fixed interval so the loop can log its real rate.
#[derive(Debug)]
pub(crate) struct MetricsAccumulator {
    interval_start: Instant,
    interval: Duration,
    ticks: u32,
    work_time_sum: Duration,
}

impl MetricsAccumulator {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval_start: Instant::now(),
            interval,
            ticks: 0,
            work_time_sum: Duration::ZERO,
        }
    }

    /// `work` is the time the tick spent outside the clock wait.
    pub(crate) fn record_tick(&mut self, work: Duration) {
        self.ticks = self.ticks.saturating_add(1);
        self.work_time_sum = self.work_time_sum.saturating_add(work);
    }

    pub(crate) fn maybe_snapshot(&mut self, now: Instant) -> Option<LoopMetricsSnapshot> {
        let elapsed = now.saturating_duration_since(self.interval_start);
        if elapsed < self.interval {
            return None;
        }

        let elapsed_seconds = elapsed.as_secs_f32().max(f32::EPSILON);
        let tick_work_ms = if self.ticks == 0 {
            0.0
        } else {
            (self.work_time_sum.as_secs_f32() / self.ticks as f32) * 1000.0
        };

        let snapshot = LoopMetricsSnapshot {
            tps: self.ticks as f32 / elapsed_seconds,
            tick_work_ms,
        };

        self.interval_start = now;
        self.ticks = 0;
        self.work_time_sum = Duration::ZERO;

        Some(snapshot)
    }
}
