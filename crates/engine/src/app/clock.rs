use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate tick pacing. Each call to [`TickClock::wait`] sleeps until one
/// tick budget has passed since the previous call returned. Late ticks are not
/// made up for.
#[derive(Debug)]
pub struct TickClock {
    budget: Duration,
    last_tick: Option<Instant>,
}

impl TickClock {
    pub fn new(target_tps: u32) -> Self {
        Self {
            budget: tick_budget(target_tps),
            last_tick: None,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Blocks for the rest of the tick budget and returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let sleep = match self.last_tick {
            Some(last) => {
                compute_tick_sleep(Instant::now().saturating_duration_since(last), self.budget)
            }
            None => Duration::ZERO,
        };
        if sleep > Duration::ZERO {
            thread::sleep(sleep);
        }
        self.last_tick = Some(Instant::now());
        sleep
    }
}

pub(crate) fn tick_budget(target_tps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_tps.max(1) as f64)
}

pub(crate) fn compute_tick_sleep(elapsed: Duration, budget: Duration) -> Duration {
    budget.saturating_sub(elapsed)
}
