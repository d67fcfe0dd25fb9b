//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU32, AtomicU8};

use hexpad_core::geom::Point;

/// Channel capacity for touch samples
const TOUCH_CHANNEL_SIZE: usize = 4;

/// Poll-rate touch samples from the touch task (`None` = panel not pressed)
pub static TOUCH_SAMPLES: Channel<CriticalSectionRawMutex, Option<Point>, TOUCH_CHANNEL_SIZE> =
    Channel::new();

/// Battery status bytes from the hexapod (latest value wins)
pub static STATUS_BYTES: Signal<CriticalSectionRawMutex, u8> = Signal::new();

/// Hardware ticks accumulated since the controller last drained them
pub static TICKS: AtomicU32 = AtomicU32::new(0);

/// Backlight brightness percent, reloaded into the PWM every touch poll
pub static BRIGHTNESS: AtomicU8 = AtomicU8::new(100);
