//! On-board peripheral drivers
//!
//! The remote drives its panel and touch controller directly over SPI;
//! these are minimal blocking drivers for exactly what the UI needs.

pub mod ili9341;
pub mod xpt2046;

pub use ili9341::Ili9341;
pub use xpt2046::Xpt2046;
