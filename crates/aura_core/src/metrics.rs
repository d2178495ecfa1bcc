//! Tick timing and structured logging setup.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Running counters for the simulation loop.
pub struct Metrics {
    tick_count: AtomicU64,
    fauna_count: AtomicU64,
    flora_count: AtomicU64,
    total_tick_nanos: AtomicU64,
    log_interval: u64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// `log_interval` of 0 disables the periodic summary.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            fauna_count: AtomicU64::new(0),
            flora_count: AtomicU64::new(0),
            total_tick_nanos: AtomicU64::new(0),
            log_interval,
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, fauna: usize, flora: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.fauna_count.store(fauna as u64, Ordering::Relaxed);
        self.flora_count.store(flora as u64, Ordering::Relaxed);
        self.total_tick_nanos.fetch_add(
            u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
            Ordering::Relaxed,
        );

        if self.log_interval > 0 && tick % self.log_interval == 0 {
            tracing::info!(
                tick,
                fauna,
                flora,
                duration_us = duration.as_micros() as u64,
                mean_tick_us = self.mean_tick().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn fauna_count(&self) -> u64 {
        self.fauna_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn flora_count(&self) -> u64 {
        self.flora_count.load(Ordering::Relaxed)
    }

    /// Mean wall time per recorded tick.
    #[must_use]
    pub fn mean_tick(&self) -> Duration {
        let ticks = self.tick_count();
        if ticks == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.total_tick_nanos.load(Ordering::Relaxed) / ticks)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over `level`.
/// Calling it twice is harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
