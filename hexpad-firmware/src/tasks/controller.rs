//! Main control loop task
//!
//! Owns the [`Remote`] state, the renderer and the link TX half. Each
//! pass handles one input event (touch sample or status byte), drains
//! any due 10 Hz telemetry cycles, then runs a render pass.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::peripherals::{SPI0, UART0};
use embassy_rp::spi::{Blocking, Spi};
use embassy_rp::uart::{Async, UartTx};
use portable_atomic::Ordering;

use hexpad_core::{AnalogSample, Remote};
use hexpad_display::{EgBackend, Renderer};

use crate::channels::{STATUS_BYTES, TICKS, TOUCH_SAMPLES};
use crate::drivers::Ili9341;

/// The five analog inputs sampled each telemetry cycle
pub struct AnalogChannels {
    pub battery: Channel<'static>,
    pub left_x: Channel<'static>,
    pub left_y: Channel<'static>,
    pub right_x: Channel<'static>,
    pub right_y: Channel<'static>,
}

#[embassy_executor::task]
pub async fn controller_task(
    mut adc: Adc<'static, adc::Async>,
    mut analog: AnalogChannels,
    mut tx: UartTx<'static, UART0, Async>,
    display: Ili9341<'static, Spi<'static, SPI0, Blocking>>,
) {
    info!("Controller task started");

    let mut remote = Remote::new();
    let mut renderer = Renderer::new();
    let mut backend = EgBackend::new(display);

    loop {
        match select(TOUCH_SAMPLES.receive(), STATUS_BYTES.wait()).await {
            Either::First(sample) => {
                remote.poll_touch(sample);
                if remote.take_page_change() {
                    info!("Page switched to {}", remote.layout().active_page());
                    renderer.request_full_redraw();
                }
                // At most one committed press is dispatched per pass
                if let Some(color) = remote.dispatch_pending() {
                    info!("Eye color change: {}", color);
                    if let Err(e) = tx.write(&[color.to_byte()]).await {
                        warn!("Link TX failed: {}", e);
                    }
                }
            }
            Either::Second(status) => remote.ingest_status(status),
        }

        remote.add_ticks(TICKS.swap(0, Ordering::Relaxed));
        while remote.telemetry_due() {
            match read_sample(&mut adc, &mut analog).await {
                Ok(sample) => {
                    let frame = remote.telemetry_frame(&sample);
                    if let Err(e) = tx.write(&frame.to_bytes()).await {
                        warn!("Link TX failed: {}", e);
                    }
                }
                Err(e) => warn!("ADC read failed: {}", e),
            }
        }

        let touch = remote.touch();
        let hexapod = remote.hexapod_battery_percent();
        let local = remote.local_battery_percent();
        if let Err(e) = renderer.render(&mut backend, remote.layout_mut(), touch, hexapod, local) {
            warn!("Render failed: {}", e);
        }
    }
}

/// Read all five channels for one telemetry frame
async fn read_sample(
    adc: &mut Adc<'static, adc::Async>,
    analog: &mut AnalogChannels,
) -> Result<AnalogSample, adc::Error> {
    Ok(AnalogSample {
        battery: read10(adc, &mut analog.battery).await?,
        left_x: read10(adc, &mut analog.left_x).await?,
        left_y: read10(adc, &mut analog.left_y).await?,
        right_x: read10(adc, &mut analog.right_x).await?,
        right_y: read10(adc, &mut analog.right_y).await?,
    })
}

/// One conversion, scaled from the ADC's 12 bits to the 10-bit range
/// the control math works in
async fn read10(adc: &mut Adc<'static, adc::Async>, ch: &mut Channel<'static>) -> Result<u16, adc::Error> {
    Ok(adc.read(ch).await? >> 2)
}
