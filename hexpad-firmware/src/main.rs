//! Hexpad - Hexapod Remote Controller Firmware
//!
//! Main firmware binary for the RP2350B-based handheld remote: a 320x240
//! resistive touchscreen, two analog joysticks, and a 9600 baud radio
//! link carrying 10 Hz telemetry frames to the hexapod.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_rp::uart::{Config as UartConfig, InterruptHandler as UartInterruptHandler, Uart};
use {defmt_rtt as _, panic_probe as _};

use crate::drivers::{Ili9341, Xpt2046};
use crate::tasks::AnalogChannels;

mod channels;
mod drivers;
mod tasks;

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Program metadata for `picotool info`
#[link_section = ".bi_entries"]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"hexpad"),
    embassy_rp::binary_info::rp_program_description!(
        c"Handheld touchscreen remote for a hexapod walking robot"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    UART0_IRQ => UartInterruptHandler<UART0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hexpad firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Radio link to the hexapod (XBee transparent mode, 9600 baud)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 9600;
    let uart = Uart::new(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (tx, rx) = uart.split();
    info!("Link UART initialized");

    // TFT panel on SPI0
    let mut display_spi_config = SpiConfig::default();
    display_spi_config.frequency = 32_000_000;
    let display_spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, display_spi_config);
    let display_cs = Output::new(p.PIN_17, Level::High);
    let display_dc = Output::new(p.PIN_20, Level::Low);
    let display_rst = Output::new(p.PIN_21, Level::High);
    let mut display = Ili9341::new(display_spi, display_cs, display_dc, display_rst);
    match display.init().await {
        Ok(()) => info!("Display initialized"),
        Err(e) => error!("Display init failed: {}", e),
    }

    // Touch controller on SPI1; the XPT2046 needs a slow clock
    let mut touch_spi_config = SpiConfig::default();
    touch_spi_config.frequency = 2_000_000;
    let touch_spi = Spi::new_blocking(p.SPI1, p.PIN_10, p.PIN_11, p.PIN_12, touch_spi_config);
    let touch_cs = Output::new(p.PIN_13, Level::High);
    let touch_irq = Input::new(p.PIN_14, Pull::Up);
    let touch = Xpt2046::new(touch_spi, touch_cs, touch_irq);
    info!("Touch controller initialized");

    // Backlight PWM; the touch task reloads the duty each poll cycle
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = 100;
    pwm_config.compare_a = 100;
    let backlight = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_22, pwm_config);

    // Joystick and battery ADC inputs (RP2350B exposes enough channels
    // for all five on GPIO40-44)
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let analog = AnalogChannels {
        left_x: Channel::new_pin(p.PIN_40, Pull::None),
        left_y: Channel::new_pin(p.PIN_41, Pull::None),
        right_x: Channel::new_pin(p.PIN_42, Pull::None),
        right_y: Channel::new_pin(p.PIN_43, Pull::None),
        battery: Channel::new_pin(p.PIN_44, Pull::None),
    };
    info!("ADC initialized");

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::touch_task(touch, backlight)).unwrap();
    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner
        .spawn(tasks::controller_task(adc, analog, tx, display))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // All work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
