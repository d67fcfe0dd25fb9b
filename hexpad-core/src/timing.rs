//! Loop cadence constants and tick accumulation
//!
//! The hardware tick source runs much faster than the telemetry cadence;
//! the main loop drains whole 781-tick cycles from an accumulator, so a
//! slow render pass produces catch-up cycles instead of silently dropping
//! telemetry frames.

/// Hardware tick rate in Hz
pub const TICK_HZ: u32 = 7812;

/// Ticks per 10 Hz control/telemetry cycle
pub const TICKS_PER_TELEMETRY_CYCLE: u32 = 781;

/// Touch poll / backlight refresh rate in Hz
pub const TOUCH_POLL_HZ: u32 = 30;

/// Consecutive touch-poll ticks before a touch settles
pub const DEBOUNCE_TICKS: u16 = 3;

/// Accumulates hardware ticks and gates 10 Hz telemetry cycles
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickAccumulator {
    pending: u32,
}

impl TickAccumulator {
    pub const fn new() -> Self {
        Self { pending: 0 }
    }

    /// Add ticks reported by the tick source
    pub fn add(&mut self, ticks: u32) {
        self.pending = self.pending.saturating_add(ticks);
    }

    /// Drain one telemetry cycle if enough ticks have accumulated
    pub fn take_cycle(&mut self) -> bool {
        if self.pending >= TICKS_PER_TELEMETRY_CYCLE {
            self.pending -= TICKS_PER_TELEMETRY_CYCLE;
            true
        } else {
            false
        }
    }
}
