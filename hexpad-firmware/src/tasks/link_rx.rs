//! Telemetry link receive task
//!
//! The hexapod sends single-byte battery status reports; only the most
//! recent one matters, so they go through a signal rather than a queue.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Async, UartRx};

use crate::channels::STATUS_BYTES;

#[embassy_executor::task]
pub async fn link_rx_task(mut rx: UartRx<'static, UART0, Async>) {
    info!("Link RX task started");

    let mut byte = [0u8; 1];
    loop {
        match rx.read(&mut byte).await {
            Ok(()) => STATUS_BYTES.signal(byte[0]),
            Err(e) => warn!("Link RX error: {}", e),
        }
    }
}
