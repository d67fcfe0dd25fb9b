//! Touch debouncing state machine
//!
//! Converts raw per-poll-tick touch samples into stable press/drag/release
//! events. A touch must persist for [`DEBOUNCE_TICKS`] consecutive ~30 Hz
//! polls before anything is armed; shorter sessions are discarded as noise.

use crate::geom::Point;
use crate::timing::DEBOUNCE_TICKS;
use crate::ui::{ButtonId, Layout, SliderId};

/// The widget fixed by hit-testing at the debounce-settle tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmedWidget {
    Button(ButtonId),
    Slider(SliderId),
}

/// One debounced touch event per poll tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    /// Nothing noteworthy this tick
    Idle,
    /// The touch settled; hit-testing armed a widget (or nothing)
    Down(Option<ArmedWidget>),
    /// An armed slider was dragged to a new value
    Drag { slider: SliderId, value: i8 },
    /// Touch released after settling; carries the committed button, if any
    Up(Option<ButtonId>),
}

/// Live touch state for the renderer's highlight recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSnapshot {
    /// Latest raw position, while the finger is down
    pub point: Option<Point>,
    /// Button armed by the settle-tick hit-test
    pub armed_button: Option<ButtonId>,
}

/// Debouncing state machine fed once per ~30 Hz poll tick
#[derive(Debug, Default)]
pub struct TouchDebouncer {
    /// Consecutive ticks the touch has been present
    ticks: u16,
    /// Last position seen while the finger was down
    point: Option<Point>,
    armed_button: Option<ButtonId>,
    armed_slider: Option<SliderId>,
}

impl TouchDebouncer {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            point: None,
            armed_button: None,
            armed_slider: None,
        }
    }

    /// Live state for highlight recomputation
    pub fn snapshot(&self) -> TouchSnapshot {
        TouchSnapshot {
            point: self.point,
            armed_button: self.armed_button,
        }
    }

    /// Feed one poll tick's sample (`None` = touch absent)
    ///
    /// Slider drag values are written into the layout as a side effect,
    /// mirroring how the renderer picks them up through change detection.
    pub fn poll(&mut self, sample: Option<Point>, layout: &mut Layout) -> TouchEvent {
        match sample {
            Some(point) => self.touch_present(point, layout),
            None => self.touch_absent(layout),
        }
    }

    fn touch_present(&mut self, point: Point, layout: &mut Layout) -> TouchEvent {
        self.point = Some(point);
        self.ticks = self.ticks.saturating_add(1);

        if self.ticks == DEBOUNCE_TICKS {
            // Hand has settled: hit-test once and fix the armed widget for
            // the rest of this touch-down. A slider wins over a button.
            if let Some(id) = layout.hit_slider(point) {
                self.armed_slider = Some(id);
                TouchEvent::Down(Some(ArmedWidget::Slider(id)))
            } else if let Some(id) = layout.hit_button(point) {
                self.armed_button = Some(id);
                TouchEvent::Down(Some(ArmedWidget::Button(id)))
            } else {
                TouchEvent::Down(None)
            }
        } else if self.ticks > DEBOUNCE_TICKS {
            self.drag(point, layout)
        } else {
            TouchEvent::Idle
        }
    }

    fn drag(&mut self, point: Point, layout: &mut Layout) -> TouchEvent {
        let active_page = layout.active_page();
        if let Some(id) = self.armed_slider {
            let slider = &mut layout[id];
            if slider.hit_test(point, active_page) {
                let value = slider.value_from_x(point.x);
                slider.value = value;
                return TouchEvent::Drag { slider: id, value };
            }
        }
        TouchEvent::Idle
    }

    fn touch_absent(&mut self, layout: &mut Layout) -> TouchEvent {
        let held = self.ticks;
        self.ticks = 0;

        if held == 0 {
            return TouchEvent::Idle;
        }

        // Too-fast touches are noise: no commit, no arming happened
        if held < DEBOUNCE_TICKS {
            self.point = None;
            return TouchEvent::Idle;
        }

        // Commit only if the finger's last position is still on the button
        let committed = self.armed_button.filter(|&id| {
            self.point
                .map(|p| layout[id].hit_test(p, layout.active_page()))
                .unwrap_or(false)
        });

        self.armed_button = None;
        self.armed_slider = None;
        self.point = None;

        TouchEvent::Up(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Page;

    const WALK: Point = Point::new(140, 45);
    const OUTSIDE: Point = Point::new(10, 10);

    fn hold(debouncer: &mut TouchDebouncer, layout: &mut Layout, point: Point, ticks: u16) {
        for _ in 0..ticks {
            debouncer.poll(Some(point), layout);
        }
    }

    #[test]
    fn test_short_touch_discarded() {
        let mut layout = Layout::hexpad();
        let mut debouncer = TouchDebouncer::new();

        hold(&mut debouncer, &mut layout, WALK, 2);
        let event = debouncer.poll(None, &mut layout);

        assert_eq!(event, TouchEvent::Idle);
        assert_eq!(debouncer.snapshot().armed_button, None);
    }

    #[test]
    fn test_arms_at_settle_tick_only() {
        let mut layout = Layout::hexpad();
        let mut debouncer = TouchDebouncer::new();

        assert_eq!(debouncer.poll(Some(WALK), &mut layout), TouchEvent::Idle);
        assert_eq!(debouncer.poll(Some(WALK), &mut layout), TouchEvent::Idle);
        assert_eq!(
            debouncer.poll(Some(WALK), &mut layout),
            TouchEvent::Down(Some(ArmedWidget::Button(ButtonId::WalkMode)))
        );
    }

    #[test]
    fn test_commit_on_release_inside() {
        let mut layout = Layout::hexpad();
        let mut debouncer = TouchDebouncer::new();

        hold(&mut debouncer, &mut layout, WALK, 5);
        let event = debouncer.poll(None, &mut layout);

        assert_eq!(event, TouchEvent::Up(Some(ButtonId::WalkMode)));
    }

    #[test]
    fn test_no_commit_when_released_outside() {
        let mut layout = Layout::hexpad();
        let mut debouncer = TouchDebouncer::new();

        hold(&mut debouncer, &mut layout, WALK, 4);
        // Finger slides off the button before lifting
        debouncer.poll(Some(OUTSIDE), &mut layout);
        let event = debouncer.poll(None, &mut layout);

        assert_eq!(event, TouchEvent::Up(None));
    }

    #[test]
    fn test_armed_widget_fixed_at_settle() {
        let mut layout = Layout::hexpad();
        let mut debouncer = TouchDebouncer::new();

        hold(&mut debouncer, &mut layout, WALK, 3);
        // Sliding onto a different button does not re-arm
        let wiggle = Point::new(260, 45);
        debouncer.poll(Some(wiggle), &mut layout);
        let event = debouncer.poll(None, &mut layout);

        // Last position is on Wiggle, not the armed Walk, so no commit
        assert_eq!(event, TouchEvent::Up(None));
    }

    #[test]
    fn test_slider_drag_updates_value() {
        let mut layout = Layout::hexpad();
        layout.set_active_page(Page::Servo);
        let mut debouncer = TouchDebouncer::new();

        let start = Point::new(100, 80);
        hold(&mut debouncer, &mut layout, start, 3);

        // Drag to the track midpoint
        let mid = Point::new(160, 80);
        let event = debouncer.poll(Some(mid), &mut layout);

        assert_eq!(
            event,
            TouchEvent::Drag {
                slider: SliderId::FrontServo,
                value: 50
            }
        );
        assert_eq!(layout[SliderId::FrontServo].value, 50);
    }

    #[test]
    fn test_slider_value_unchanged_before_settle() {
        let mut layout = Layout::hexpad();
        layout.set_active_page(Page::Servo);
        let mut debouncer = TouchDebouncer::new();
        let initial = layout[SliderId::FrontServo].value;

        hold(&mut debouncer, &mut layout, Point::new(250, 80), 2);
        debouncer.poll(None, &mut layout);

        assert_eq!(layout[SliderId::FrontServo].value, initial);
    }

    #[test]
    fn test_slider_release_commits_no_button() {
        let mut layout = Layout::hexpad();
        layout.set_active_page(Page::Servo);
        let mut debouncer = TouchDebouncer::new();

        hold(&mut debouncer, &mut layout, Point::new(160, 80), 6);
        let event = debouncer.poll(None, &mut layout);

        assert_eq!(event, TouchEvent::Up(None));
    }

    #[test]
    fn test_snapshot_cleared_after_release() {
        let mut layout = Layout::hexpad();
        let mut debouncer = TouchDebouncer::new();

        hold(&mut debouncer, &mut layout, WALK, 4);
        assert_eq!(debouncer.snapshot().armed_button, Some(ButtonId::WalkMode));

        debouncer.poll(None, &mut layout);
        let snapshot = debouncer.snapshot();
        assert_eq!(snapshot.armed_button, None);
        assert_eq!(snapshot.point, None);
    }
}
