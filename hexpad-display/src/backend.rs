//! Display backend trait
//!
//! Defines the drawing interface the renderer targets.

use hexpad_core::color::Rgb565;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Coordinates outside the drawable area
    InvalidCoordinates,
}

/// Display backend trait
///
/// Provides a hardware-agnostic drawing interface for the 320x240 panel.
/// Rectangle coordinates are inclusive corners, matching the widget
/// geometry the layout is specified in.
pub trait DisplayBackend {
    /// Fill the entire panel with one color
    fn fill_screen(&mut self, color: Rgb565) -> Result<(), DisplayError>;

    /// Fill the rectangle spanning (x1, y1) to (x2, y2), corners inclusive
    fn fill_rect(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (x, y)
    fn text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw text horizontally centred on x, top edge at y
    fn centred_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DisplayError>;
}
