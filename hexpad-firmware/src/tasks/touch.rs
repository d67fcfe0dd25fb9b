//! Touch panel polling task
//!
//! Samples the XPT2046 at the 30 Hz poll rate and feeds the controller.
//! Absent touches are reported too; the debouncer needs them to detect
//! releases. The backlight duty is reloaded on the same cadence.

use defmt::*;
use embassy_rp::peripherals::SPI1;
use embassy_rp::pwm::{Pwm, SetDutyCycle};
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use hexpad_core::timing::TOUCH_POLL_HZ;

use crate::channels::{BRIGHTNESS, TOUCH_SAMPLES};
use crate::drivers::Xpt2046;

#[embassy_executor::task]
pub async fn touch_task(
    mut touch: Xpt2046<'static, Spi<'static, SPI1, Blocking>>,
    mut backlight: Pwm<'static>,
) {
    info!("Touch task started");

    let mut ticker = Ticker::every(Duration::from_hz(TOUCH_POLL_HZ as u64));

    loop {
        ticker.next().await;

        let brightness = BRIGHTNESS.load(Ordering::Relaxed);
        if backlight.set_duty_cycle_percent(brightness).is_err() {
            warn!("Backlight duty update failed");
        }

        match touch.read() {
            Ok(sample) => {
                // Never stall the poll cadence; drop the oldest sample
                // if the controller has fallen behind
                if TOUCH_SAMPLES.try_send(sample).is_err() {
                    let _ = TOUCH_SAMPLES.try_receive();
                    let _ = TOUCH_SAMPLES.try_send(sample);
                }
            }
            Err(e) => warn!("Touch read failed: {}", e),
        }
    }
}
