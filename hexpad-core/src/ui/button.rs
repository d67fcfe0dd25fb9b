//! Push buttons with group-exclusive selection

use crate::color::Rgb565;
use crate::geom::Point;
use crate::ui::layout::Page;
use crate::ui::HIT_BAND;

/// Identifiers for every button on the remote
///
/// Declaration order is also hit-test iteration order: when regions
/// overlap, the last matching button wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    WalkMode,
    WiggleMode,
    TripodGait,
    RippleGait,
    LowBody,
    HighBody,
    LowStep,
    HighStep,
    LongStep,
    QuickStep,
    RedEyes,
    GreenEyes,
    BlueEyes,
}

impl ButtonId {
    /// Number of buttons
    pub const COUNT: usize = 13;

    /// All buttons in declaration (hit-test) order
    pub const ALL: [ButtonId; Self::COUNT] = [
        ButtonId::WalkMode,
        ButtonId::WiggleMode,
        ButtonId::TripodGait,
        ButtonId::RippleGait,
        ButtonId::LowBody,
        ButtonId::HighBody,
        ButtonId::LowStep,
        ButtonId::HighStep,
        ButtonId::LongStep,
        ButtonId::QuickStep,
        ButtonId::RedEyes,
        ButtonId::GreenEyes,
        ButtonId::BlueEyes,
    ];

    /// Array index for enum-keyed storage
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A touchscreen button
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    /// Horizontal center
    pub x: i32,
    /// Top edge
    pub y: i32,
    pub width: i32,
    pub color: Rgb565,
    pub label: &'static str,
    /// Finger currently over the button (recomputed every render pass)
    pub highlighted: bool,
    /// Group-exclusive selection state
    pub selected: bool,
    /// Rendered state is stale and must be redrawn
    pub needs_redraw: bool,
    /// Page the button belongs to
    pub page: Page,
}

impl Button {
    pub const fn new(
        x: i32,
        y: i32,
        width: i32,
        color: Rgb565,
        label: &'static str,
        selected: bool,
        page: Page,
    ) -> Self {
        Self {
            x,
            y,
            width,
            color,
            label,
            highlighted: false,
            selected,
            needs_redraw: true,
            page,
        }
    }

    /// Whether a touch point lands on this button
    ///
    /// The point must be within the horizontal half-width around the
    /// center, within the 32-unit band below the top edge, and the button
    /// must belong to the active page.
    pub fn hit_test(&self, point: Point, active_page: Page) -> bool {
        point.x >= self.x - self.width / 2
            && point.x <= self.x + self.width / 2
            && point.y >= self.y
            && point.y <= self.y + HIT_BAND
            && self.page == active_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_at(x: i32, y: i32, width: i32) -> Button {
        Button::new(x, y, width, Rgb565::BLUE, "Test", false, Page::Main)
    }

    #[test]
    fn test_hit_inside() {
        let button = button_at(140, 30, 100);
        assert!(button.hit_test(Point::new(140, 45), Page::Main));
        assert!(button.hit_test(Point::new(90, 30), Page::Main));
        assert!(button.hit_test(Point::new(190, 62), Page::Main));
    }

    #[test]
    fn test_miss_outside_band() {
        let button = button_at(140, 30, 100);
        assert!(!button.hit_test(Point::new(140, 29), Page::Main));
        assert!(!button.hit_test(Point::new(140, 63), Page::Main));
        assert!(!button.hit_test(Point::new(89, 45), Page::Main));
        assert!(!button.hit_test(Point::new(191, 45), Page::Main));
    }

    #[test]
    fn test_miss_wrong_page() {
        let button = button_at(140, 30, 100);
        assert!(!button.hit_test(Point::new(140, 45), Page::Servo));
    }
}
