//! Cycle pacing and rate statistics.
//!
//! Portable pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between cycles.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::{Duration, Instant};

use crate::bridge::{CycleReport, LightsBridge};
use crate::{LightsOutput, LightsSource};

/// Default refresh rate (30 cycles per second).
pub const DEFAULT_CYCLE_RATE: u64 = 30;

/// Default cycle duration based on the refresh rate.
pub const DEFAULT_CYCLE_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_CYCLE_RATE);

/// Window over which the measured refresh rate is averaged.
pub const RATE_WINDOW: Duration = Duration::from_secs(5);

/// Result of a single paced cycle.
#[derive(Debug, Clone)]
pub struct CycleResult {
    /// The deadline for the next cycle.
    pub next_deadline: Instant,
    /// How long to wait until the next cycle (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Devices refreshed by this cycle.
    pub report: CycleReport,
}

/// Runs a [`LightsBridge`] at a fixed cadence.
///
/// This pacer:
/// - Tracks cycle timing with drift correction
/// - Runs one bridge cycle per tick
/// - Measures the achieved refresh rate
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut pacer = CyclePacer::new(bridge);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = pacer.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct CyclePacer<S: LightsSource, O: LightsOutput> {
    bridge: LightsBridge<S, O>,
    next_cycle: Instant,
    cycle_duration: Duration,

    // Rate statistics
    window_start: Option<Instant>,
    window_cycles: u32,
    last_rate: Option<u32>,
}

impl<S: LightsSource, O: LightsOutput> CyclePacer<S, O> {
    /// Create a new pacer running at `DEFAULT_CYCLE_RATE`.
    pub fn new(bridge: LightsBridge<S, O>) -> Self {
        Self::with_cycle_duration(bridge, DEFAULT_CYCLE_DURATION)
    }

    /// Create a new pacer with custom cycle duration.
    pub fn with_cycle_duration(bridge: LightsBridge<S, O>, cycle_duration: Duration) -> Self {
        Self {
            bridge,
            next_cycle: Instant::from_millis(0),
            cycle_duration,
            window_start: None,
            window_cycles: 0,
            last_rate: None,
        }
    }

    /// Run one cycle and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> CycleResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.cycle_duration.as_millis() * 2;
        if now.as_millis() > self.next_cycle.as_millis() + max_drift_ms {
            self.next_cycle = now;
        }

        let report = self.bridge.run_cycle();
        self.count_cycle(now);

        self.next_cycle += self.cycle_duration;

        let sleep_duration = if self.next_cycle.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_cycle.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        CycleResult {
            next_deadline: self.next_cycle,
            sleep_duration,
            report,
        }
    }

    /// Refresh rate measured over the last complete window, in cycles per second.
    pub fn last_rate(&self) -> Option<u32> {
        self.last_rate
    }

    pub fn cycle_duration(&self) -> Duration {
        self.cycle_duration
    }

    pub fn bridge(&self) -> &LightsBridge<S, O> {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut LightsBridge<S, O> {
        &mut self.bridge
    }

    fn count_cycle(&mut self, now: Instant) {
        // The cycle opening a window is its start point, not a counted cycle
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return;
        };
        let Some(elapsed) = now.checked_duration_since(start) else {
            // Clock went backwards, start over
            self.window_start = Some(now);
            self.window_cycles = 0;
            return;
        };

        self.window_cycles = self.window_cycles.saturating_add(1);
        if elapsed < RATE_WINDOW {
            return;
        }

        let rate = u64::from(self.window_cycles) * 1000 / elapsed.as_millis().max(1);
        let rate = u32::try_from(rate).unwrap_or(u32::MAX);
        #[cfg(feature = "esp32-log")]
        println!("[CyclePacer.count_cycle] lights rate: {} Hz", rate);

        self.last_rate = Some(rate);
        self.window_start = Some(now);
        self.window_cycles = 0;
    }
}
