//! XPT2046 resistive touch controller driver
//!
//! Reads 12-bit X/Y conversions over SPI and maps them onto the panel's
//! 320x240 coordinate space. Touch presence comes from the PENIRQ line,
//! which the controller pulls low while the panel is pressed.

use embassy_rp::gpio::{Input, Output};
use embedded_hal::spi::SpiBus;

use hexpad_core::geom::{Point, SCREEN_HEIGHT, SCREEN_WIDTH};

#[allow(dead_code)]
mod cmd {
    pub const READ_X: u8 = 0xD0;
    pub const READ_Y: u8 = 0x90;
    pub const READ_Z1: u8 = 0xB0;
    pub const READ_Z2: u8 = 0xC0;
}

/// Raw ADC window mapped onto the screen
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    pub x_min: u16,
    pub x_max: u16,
    pub y_min: u16,
    pub y_max: u16,
}

impl Default for Calibration {
    fn default() -> Self {
        // Typical values for 320x240 resistive overlays
        Self {
            x_min: 200,
            x_max: 3800,
            y_min: 200,
            y_max: 3800,
        }
    }
}

/// XPT2046 driver over a blocking SPI bus
pub struct Xpt2046<'d, SPI> {
    spi: SPI,
    cs: Output<'d>,
    /// PENIRQ, low while the panel is pressed
    irq: Input<'d>,
    calibration: Calibration,
}

impl<'d, SPI> Xpt2046<'d, SPI>
where
    SPI: SpiBus<u8>,
{
    pub fn new(spi: SPI, cs: Output<'d>, irq: Input<'d>) -> Self {
        Self {
            spi,
            cs,
            irq,
            calibration: Calibration::default(),
        }
    }

    pub fn set_calibration(&mut self, calibration: Calibration) {
        self.calibration = calibration;
    }

    /// Sample the panel; `None` when nothing is pressed
    pub fn read(&mut self) -> Result<Option<Point>, SPI::Error> {
        if self.irq.is_high() {
            return Ok(None);
        }

        let raw_x = self.read_raw(cmd::READ_X)?;
        let raw_y = self.read_raw(cmd::READ_Y)?;

        // Pen lifted mid-conversion; the coordinates are garbage
        if self.irq.is_high() {
            return Ok(None);
        }

        let cal = self.calibration;
        let x = map_coordinate(raw_x, cal.x_min, cal.x_max, SCREEN_WIDTH - 1);
        let y = map_coordinate(raw_y, cal.y_min, cal.y_max, SCREEN_HEIGHT - 1);
        Ok(Some(Point::new(x, y)))
    }

    /// One 12-bit conversion: command byte, then the result in the
    /// following two bytes, MSB-aligned
    fn read_raw(&mut self, command: u8) -> Result<u16, SPI::Error> {
        let mut buf = [command, 0, 0];
        self.cs.set_low();
        let result = self.spi.transfer_in_place(&mut buf);
        self.cs.set_high();
        result?;
        Ok((((buf[1] as u16) << 8 | buf[2] as u16) >> 3) & 0x0FFF)
    }
}

fn map_coordinate(raw: u16, min: u16, max: u16, screen_max: i32) -> i32 {
    if raw <= min {
        return 0;
    }
    if raw >= max {
        return screen_max;
    }
    (raw - min) as i32 * screen_max / (max - min) as i32
}
