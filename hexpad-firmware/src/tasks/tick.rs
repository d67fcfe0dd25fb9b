//! Tick source for the control-loop cadence
//!
//! Credits 7812 Hz hardware ticks to the shared counter. The task wakes
//! far less often than the tick rate and converts elapsed time instead,
//! carrying the sub-tick remainder so the long-term rate stays exact.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};
use portable_atomic::Ordering;

use hexpad_core::timing::TICK_HZ;

use crate::channels::TICKS;

/// Tick period: 128 us
const TICK_PERIOD_US: u64 = 1_000_000 / TICK_HZ as u64;

/// How often the task wakes to credit ticks
const WAKE_INTERVAL_MS: u64 = 10;

#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(WAKE_INTERVAL_MS));
    let mut last = Instant::now();

    loop {
        ticker.next().await;

        let elapsed_us = last.elapsed().as_micros();
        let ticks = elapsed_us / TICK_PERIOD_US;
        // Advance only by whole ticks; the remainder carries over
        last += Duration::from_micros(ticks * TICK_PERIOD_US);

        TICKS.fetch_add(ticks as u32, Ordering::Relaxed);
    }
}
