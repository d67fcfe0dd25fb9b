//! 16-bit RGB565 color values shared by the widget model and renderer
//!
//! Color format is RRRRR GGGGGG BBBBB, matching the panel's native encoding.

/// A packed 5-6-5 RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const GREEN: Rgb565 = Rgb565(0x07E0);
    pub const BLUE: Rgb565 = Rgb565(0x001F);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const PURPLE: Rgb565 = Rgb565(0xF11F);
    pub const YELLOW: Rgb565 = Rgb565(0xFFE0);
    pub const ORANGE: Rgb565 = Rgb565(0xFC00);
    pub const CYAN: Rgb565 = Rgb565(0x07FF);
    pub const DARK_GRAY: Rgb565 = Rgb565(0x38E7);
    pub const LIGHT_GRAY: Rgb565 = Rgb565(0x7BEF);

    /// Raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }
}
