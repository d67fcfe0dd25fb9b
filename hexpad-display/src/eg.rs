//! `embedded-graphics` adapter backend
//!
//! Wraps any RGB565 draw target (the firmware's TFT driver, a simulator,
//! a mock display) as a [`DisplayBackend`].

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyleBuilder},
    pixelcolor::{raw::RawU16, Rgb565 as EgRgb565},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use hexpad_core::color::Rgb565;

use crate::backend::{DisplayBackend, DisplayError};

/// Backend over any `embedded-graphics` draw target in RGB565
pub struct EgBackend<D> {
    target: D,
}

impl<D> EgBackend<D> {
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Give the draw target back
    pub fn release(self) -> D {
        self.target
    }
}

fn convert(color: Rgb565) -> EgRgb565 {
    EgRgb565::from(RawU16::new(color.raw()))
}

impl<D> EgBackend<D>
where
    D: DrawTarget<Color = EgRgb565>,
{
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Rgb565,
        alignment: Alignment,
    ) -> Result<(), DisplayError> {
        let character_style = MonoTextStyleBuilder::new()
            .font(&FONT_10X20)
            .text_color(convert(fg))
            .background_color(convert(bg))
            .build();
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(text, Point::new(x, y), character_style, text_style)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

impl<D> DisplayBackend for EgBackend<D>
where
    D: DrawTarget<Color = EgRgb565>,
{
    fn fill_screen(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        self.target
            .clear(convert(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_rect(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        // Inverted corners are an empty rectangle, not an error; the
        // battery gauge produces one when its bar is full
        if x2 < x1 || y2 < y1 {
            return Ok(());
        }
        Rectangle::with_corners(Point::new(x1, y1), Point::new(x2, y2))
            .into_styled(PrimitiveStyle::with_fill(convert(color)))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn text(&mut self, text: &str, x: i32, y: i32, fg: Rgb565, bg: Rgb565) -> Result<(), DisplayError> {
        self.draw_text(text, x, y, fg, bg, Alignment::Left)
    }

    fn centred_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DisplayError> {
        self.draw_text(text, x, y, fg, bg, Alignment::Center)
    }
}
