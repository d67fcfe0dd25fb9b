//! Continuous-value drag sliders

use crate::color::Rgb565;
use crate::geom::Point;
use crate::ui::layout::Page;
use crate::ui::HIT_BAND;

/// Width reserved for the drag handle (half at each end of the track)
pub const HANDLE_MARGIN: i32 = 16;

/// Identifiers for every slider on the remote
///
/// Declaration order is hit-test iteration order, same rule as buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SliderId {
    FrontServo,
    BackServo,
}

impl SliderId {
    /// Number of sliders
    pub const COUNT: usize = 2;

    /// All sliders in declaration (hit-test) order
    pub const ALL: [SliderId; Self::COUNT] = [SliderId::FrontServo, SliderId::BackServo];

    /// Array index for enum-keyed storage
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A touchscreen slider
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slider {
    /// Horizontal center
    pub x: i32,
    /// Top edge
    pub y: i32,
    pub width: i32,
    pub color: Rgb565,
    /// Current position, 0-100
    pub value: i8,
    /// Value at last redraw; -1 forces the initial draw
    pub old_value: i8,
    /// Page the slider belongs to
    pub page: Page,
}

impl Slider {
    pub const fn new(x: i32, y: i32, width: i32, color: Rgb565, value: i8, page: Page) -> Self {
        Self {
            x,
            y,
            width,
            color,
            value,
            old_value: -1,
            page,
        }
    }

    /// Whether a touch point lands on this slider (same rule as buttons)
    pub fn hit_test(&self, point: Point, active_page: Page) -> bool {
        point.x >= self.x - self.width / 2
            && point.x <= self.x + self.width / 2
            && point.y >= self.y
            && point.y <= self.y + HIT_BAND
            && self.page == active_page
    }

    /// Track width usable by the handle center
    pub const fn usable_width(&self) -> i32 {
        self.width - HANDLE_MARGIN
    }

    /// Convert a touch x position into a percentage along the track
    ///
    /// Integer truncation is intentional; the result is clamped to [0, 100]
    /// so dragging past either end pegs the value.
    pub fn value_from_x(&self, x: i32) -> i8 {
        let usable = self.usable_width();
        let value = 100 * (x - (self.x - usable / 2)) / usable;
        value.clamp(0, 100) as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slider_at(x: i32, width: i32) -> Slider {
        Slider::new(x, 70, width, Rgb565::CYAN, 50, Page::Servo)
    }

    #[test]
    fn test_value_at_track_center() {
        let slider = slider_at(160, 280);
        assert_eq!(slider.value_from_x(160), 50);
    }

    #[test]
    fn test_value_at_ends() {
        let slider = slider_at(160, 280);
        let usable = slider.usable_width();
        assert_eq!(slider.value_from_x(160 - usable / 2), 0);
        assert_eq!(slider.value_from_x(160 + usable / 2), 100);
    }

    #[test]
    fn test_value_clamped_far_outside() {
        let slider = slider_at(160, 280);
        assert_eq!(slider.value_from_x(-5000), 0);
        assert_eq!(slider.value_from_x(5000), 100);
    }

    #[test]
    fn test_value_truncates() {
        // usable = 84, one pixel in from the left end: 100*1/84 = 1 (truncated)
        let slider = slider_at(100, 100);
        let left = 100 - slider.usable_width() / 2;
        assert_eq!(slider.value_from_x(left + 1), 1);
    }

    proptest! {
        #[test]
        fn prop_value_always_in_range(x in -10_000i32..10_000) {
            let slider = slider_at(160, 280);
            let value = slider.value_from_x(x);
            prop_assert!((0..=100).contains(&value));
        }
    }
}
