use legion::*;
use log::{debug, trace};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub fps: u32,
}

impl SimulationConfig {
    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(1000 / std::cmp::max(1, self.fps) as u64)
    }
}

/// Fixed-period frame timer. Measures the wall-clock delta between ticks and
/// reports how long to wait for the next tick boundary. Missed frames are not
/// caught up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    period: Duration,
    last_tick: Instant,
    delta: Duration,
    frames: u64,
}

impl FrameClock {
    pub fn new(config: SimulationConfig) -> FrameClock {
        FrameClock {
            period: config.frame_period(),
            last_tick: Instant::now(),
            delta: Duration::default(),
            frames: 0,
        }
    }

    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Duration {
        self.delta = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.frames += 1;
        self.delta
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    pub fn delta_seconds(&self) -> f64 {
        self.delta.as_secs_f64()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Instantaneous rate from the last delta; `None` before any time has passed.
    pub fn fps(&self) -> Option<f64> {
        if self.delta.as_nanos() == 0 {
            None
        } else {
            Some(1. / self.delta_seconds())
        }
    }
}

pub fn init_simulation(resources: &mut Resources, simulation_config: SimulationConfig) {
    resources.insert(FrameClock::new(simulation_config));
}

#[system]
pub fn tick_clock(#[resource] clock: &mut FrameClock) {
    let delta = clock.tick();
    debug!("Frame time: {} ms", delta.as_millis());
}

#[system]
pub fn pace_frame(#[resource] clock: &FrameClock) {
    let now = Instant::now();
    let remaining = clock.remaining_at(now);
    if remaining == Duration::default() {
        trace!(
            "Frame {} overran its {} ms budget",
            clock.frames(),
            clock.period().as_millis()
        );
        return;
    }
    std::thread::sleep(remaining);
}
