//! ILI9341 TFT panel driver
//!
//! Minimal blocking driver for the 320x240 panel, exposed as an
//! `embedded-graphics` draw target. Solid and contiguous fills stream
//! pixel data inside one memory-write transaction; arbitrary pixel
//! iterators fall back to one window per pixel.

use embassy_rp::gpio::Output;
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::spi::SpiBus;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

#[allow(dead_code)]
mod cmd {
    pub const SW_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const DISPLAY_OFF: u8 = 0x28;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR: u8 = 0x2A;
    pub const PAGE_ADDR: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const PIXEL_FORMAT: u8 = 0x3A;
}

/// Row/column exchange + BGR order: landscape with the origin top-left
const MADCTL_LANDSCAPE: u8 = 0x28;
/// 16 bits per pixel
const PIXEL_FORMAT_RGB565: u8 = 0x55;

/// ILI9341 driver over a blocking SPI bus
pub struct Ili9341<'d, SPI> {
    spi: SPI,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
}

impl<'d, SPI> Ili9341<'d, SPI>
where
    SPI: SpiBus<u8>,
{
    pub fn new(spi: SPI, cs: Output<'d>, dc: Output<'d>, rst: Output<'d>) -> Self {
        Self { spi, cs, dc, rst }
    }

    /// Hardware reset and panel configuration
    pub async fn init(&mut self) -> Result<(), SPI::Error> {
        self.rst.set_low();
        Timer::after_millis(10).await;
        self.rst.set_high();
        Timer::after_millis(120).await;

        self.command(cmd::SLEEP_OUT, &[])?;
        Timer::after_millis(120).await;
        self.command(cmd::PIXEL_FORMAT, &[PIXEL_FORMAT_RGB565])?;
        self.command(cmd::MADCTL, &[MADCTL_LANDSCAPE])?;
        self.command(cmd::DISPLAY_ON, &[])?;
        Ok(())
    }

    /// Send a command byte followed by its parameters
    fn command(&mut self, command: u8, args: &[u8]) -> Result<(), SPI::Error> {
        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.write(&[command]);
        if result.is_ok() && !args.is_empty() {
            self.dc.set_high();
            result = self.spi.write(args);
        }
        self.cs.set_high();
        result
    }

    /// Set the drawing window, corners inclusive
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), SPI::Error> {
        self.command(
            cmd::COLUMN_ADDR,
            &[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8],
        )?;
        self.command(
            cmd::PAGE_ADDR,
            &[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8],
        )
    }

    /// Stream `count` copies of one color into the current window
    fn write_pixels(&mut self, count: u32, color: Rgb565) -> Result<(), SPI::Error> {
        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.write(&[cmd::MEMORY_WRITE]);
        if result.is_ok() {
            self.dc.set_high();

            let bytes = color.into_storage().to_be_bytes();
            let mut chunk = [0u8; 64];
            for pair in chunk.chunks_exact_mut(2) {
                pair.copy_from_slice(&bytes);
            }

            let mut remaining = count as usize * 2;
            while remaining > 0 && result.is_ok() {
                let n = remaining.min(chunk.len());
                result = self.spi.write(&chunk[..n]);
                remaining -= n;
            }
        }
        self.cs.set_high();
        result
    }
}

impl<SPI> OriginDimensions for Ili9341<'_, SPI> {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl<SPI> DrawTarget for Ili9341<'_, SPI>
where
    SPI: SpiBus<u8>,
{
    type Color = Rgb565;
    type Error = SPI::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= WIDTH as i32 || point.y >= HEIGHT as i32 {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.set_window(x, y, x, y)?;
            self.write_pixels(1, color)?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let bounds = self.bounding_box();
        if !bounds.contains(area.top_left) || !bounds.contains(bottom_right) {
            // Partially off screen; let the pixel path do the clipping
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }

        self.set_window(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;

        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.write(&[cmd::MEMORY_WRITE]);
        if result.is_ok() {
            self.dc.set_high();
            for color in colors.into_iter().take(area.size.width as usize * area.size.height as usize) {
                result = self.spi.write(&color.into_storage().to_be_bytes());
                if result.is_err() {
                    break;
                }
            }
        }
        self.cs.set_high();
        result
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        self.set_window(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;
        self.write_pixels(area.size.width * area.size.height, color)
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        let full = self.bounding_box();
        self.fill_solid(&full, color)
    }
}
