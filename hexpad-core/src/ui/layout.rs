//! Static widget layout and the selection model

use core::ops::{Index, IndexMut};

use crate::color::Rgb565;
use crate::geom::Point;
use crate::ui::button::{Button, ButtonId};
use crate::ui::slider::{Slider, SliderId};

/// UI pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Walking mode/gait/body/step buttons and eye colors
    Main,
    /// Front/back servo trim sliders
    Servo,
}

/// The complete widget set, keyed by id
///
/// Widgets are created once at startup and live for the program duration;
/// lookup by id is O(1) through enum-indexed arrays.
pub struct Layout {
    buttons: [Button; ButtonId::COUNT],
    sliders: [Slider; SliderId::COUNT],
    active_page: Page,
}

impl Layout {
    /// Build the hexpad remote layout with its initial selections
    /// (walk mode, tripod gait, low body, low step, long step, green eyes)
    pub fn hexpad() -> Self {
        use ButtonId::*;
        let b = |x, y, w, color, label, selected| {
            Button::new(x, y, w, color, label, selected, Page::Main)
        };

        let buttons = [
            b(140, 30, 100, Rgb565::BLUE, "Walk", true),
            b(260, 30, 100, Rgb565::BLUE, "Wiggle", false),
            b(140, 65, 100, Rgb565::BLUE, "Tripod", true),
            b(260, 65, 100, Rgb565::BLUE, "Ripple", false),
            b(140, 100, 100, Rgb565::BLUE, "Low", true),
            b(260, 100, 100, Rgb565::BLUE, "High", false),
            b(140, 135, 100, Rgb565::BLUE, "Low", true),
            b(260, 135, 100, Rgb565::BLUE, "High", false),
            b(140, 170, 100, Rgb565::BLUE, "Long", true),
            b(260, 170, 100, Rgb565::BLUE, "Quick", false),
            b(122, 205, 64, Rgb565::RED, "Red", false),
            b(200, 205, 70, Rgb565::GREEN, "Green", true),
            b(278, 205, 64, Rgb565::BLUE, "Blue", false),
        ];
        debug_assert!(buttons[WalkMode.index()].label == "Walk");
        debug_assert!(buttons[BlueEyes.index()].label == "Blue");

        let sliders = [
            Slider::new(160, 70, 280, Rgb565::CYAN, 50, Page::Servo),
            Slider::new(160, 140, 280, Rgb565::CYAN, 50, Page::Servo),
        ];

        Self {
            buttons,
            sliders,
            active_page: Page::Main,
        }
    }

    /// Currently displayed page
    pub fn active_page(&self) -> Page {
        self.active_page
    }

    /// Switch pages, dirtying every widget so the next pass redraws them
    pub fn set_active_page(&mut self, page: Page) {
        if self.active_page != page {
            self.active_page = page;
            for button in &mut self.buttons {
                button.needs_redraw = true;
            }
            for slider in &mut self.sliders {
                slider.old_value = -1;
            }
        }
    }

    /// Hit-test all buttons on the active page
    ///
    /// The last button in declaration order whose test passes wins;
    /// overlap ties break by declaration order, not z-order.
    pub fn hit_button(&self, point: Point) -> Option<ButtonId> {
        let mut hit = None;
        for id in ButtonId::ALL {
            if self[id].hit_test(point, self.active_page) {
                hit = Some(id);
            }
        }
        hit
    }

    /// Hit-test all sliders on the active page (same last-wins rule)
    pub fn hit_slider(&self, point: Point) -> Option<SliderId> {
        let mut hit = None;
        for id in SliderId::ALL {
            if self[id].hit_test(point, self.active_page) {
                hit = Some(id);
            }
        }
        hit
    }

    /// Select a button, deselecting up to two siblings of its group
    ///
    /// The layout does not know the groups; callers pass the correct
    /// sibling id(s). All touched buttons are marked for redraw.
    pub fn select_button(&mut self, new: ButtonId, old: ButtonId, other_old: Option<ButtonId>) {
        self[new].selected = true;
        self[new].needs_redraw = true;
        self[old].selected = false;
        self[old].needs_redraw = true;
        if let Some(other) = other_old {
            self[other].selected = false;
            self[other].needs_redraw = true;
        }
    }
}

impl Index<ButtonId> for Layout {
    type Output = Button;

    fn index(&self, id: ButtonId) -> &Button {
        &self.buttons[id.index()]
    }
}

impl IndexMut<ButtonId> for Layout {
    fn index_mut(&mut self, id: ButtonId) -> &mut Button {
        &mut self.buttons[id.index()]
    }
}

impl Index<SliderId> for Layout {
    type Output = Slider;

    fn index(&self, id: SliderId) -> &Slider {
        &self.sliders[id.index()]
    }
}

impl IndexMut<SliderId> for Layout {
    fn index_mut(&mut self, id: SliderId) -> &mut Slider {
        &mut self.sliders[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_selection_per_group() {
        let layout = Layout::hexpad();

        assert!(layout[ButtonId::WalkMode].selected);
        assert!(!layout[ButtonId::WiggleMode].selected);
        assert!(layout[ButtonId::TripodGait].selected);
        assert!(layout[ButtonId::LowBody].selected);
        assert!(layout[ButtonId::LowStep].selected);
        assert!(layout[ButtonId::LongStep].selected);
        assert!(layout[ButtonId::GreenEyes].selected);
        assert!(!layout[ButtonId::RedEyes].selected);
        assert!(!layout[ButtonId::BlueEyes].selected);
    }

    #[test]
    fn test_select_pair_group() {
        let mut layout = Layout::hexpad();

        layout.select_button(ButtonId::WiggleMode, ButtonId::WalkMode, None);

        assert!(layout[ButtonId::WiggleMode].selected);
        assert!(layout[ButtonId::WiggleMode].needs_redraw);
        assert!(!layout[ButtonId::WalkMode].selected);
        assert!(layout[ButtonId::WalkMode].needs_redraw);
    }

    #[test]
    fn test_select_triple_group_exactly_one() {
        let mut layout = Layout::hexpad();

        layout.select_button(
            ButtonId::BlueEyes,
            ButtonId::RedEyes,
            Some(ButtonId::GreenEyes),
        );

        let eyes = [ButtonId::RedEyes, ButtonId::GreenEyes, ButtonId::BlueEyes];
        let selected = eyes.iter().filter(|&&id| layout[id].selected).count();
        assert_eq!(selected, 1);
        assert!(layout[ButtonId::BlueEyes].selected);
    }

    #[test]
    fn test_hit_button_on_active_page() {
        let layout = Layout::hexpad();
        assert_eq!(layout.hit_button(Point::new(140, 45)), Some(ButtonId::WalkMode));
        assert_eq!(layout.hit_button(Point::new(278, 220)), Some(ButtonId::BlueEyes));
        assert_eq!(layout.hit_button(Point::new(10, 10)), None);
    }

    #[test]
    fn test_hit_slider_requires_servo_page() {
        let mut layout = Layout::hexpad();
        let point = Point::new(160, 80);

        assert_eq!(layout.hit_slider(point), None);

        layout.set_active_page(Page::Servo);
        assert_eq!(layout.hit_slider(point), Some(SliderId::FrontServo));
        assert_eq!(layout.hit_button(point), None);
    }

    #[test]
    fn test_overlapping_buttons_last_wins() {
        let mut layout = Layout::hexpad();
        // Move Wiggle directly over Walk; later declaration wins the tie
        layout[ButtonId::WiggleMode].x = layout[ButtonId::WalkMode].x;
        layout[ButtonId::WiggleMode].y = layout[ButtonId::WalkMode].y;

        assert_eq!(layout.hit_button(Point::new(140, 45)), Some(ButtonId::WiggleMode));
    }

    #[test]
    fn test_page_change_dirties_widgets() {
        let mut layout = Layout::hexpad();
        layout[ButtonId::WalkMode].needs_redraw = false;
        layout[SliderId::FrontServo].old_value = 50;

        layout.set_active_page(Page::Servo);

        assert!(layout[ButtonId::WalkMode].needs_redraw);
        assert_eq!(layout[SliderId::FrontServo].old_value, -1);
    }
}
