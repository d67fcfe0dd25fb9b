//! Screen-space geometry
//!
//! The display and touch panel share one 320x240 coordinate space.
//! Signed coordinates keep intermediate widget math (handle offsets,
//! centered boxes) safe near the screen edges.

/// Display width in pixels
pub const SCREEN_WIDTH: i32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: i32 = 240;

/// A point in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
