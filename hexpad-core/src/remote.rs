//! The top-level remote controller object
//!
//! [`Remote`] owns the widget layout, the touch debouncer, the control
//! bitfield and the battery monitors, and exposes the per-cycle operations
//! the firmware's main loop drives: poll touch, dispatch one committed
//! press, ingest hexapod status, and build 10 Hz telemetry frames.

use hexpad_protocol::{EyeColor, TelemetryFrame};

use crate::control::{bits, ControlFlags};
use crate::geom::Point;
use crate::input::{TouchDebouncer, TouchEvent, TouchSnapshot};
use crate::power::{battery_percent_from_adc, joystick_byte, BatteryMonitor};
use crate::timing::TickAccumulator;
use crate::ui::{ButtonId, Layout, Page};

/// Vertical extent of the title bar; a settled tap released here with no
/// widget armed flips the active page
const PAGE_TAP_BAND: i32 = 24;

/// One set of raw 10-bit ADC readings, taken at the telemetry cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogSample {
    /// Remote battery through the divider
    pub battery: u16,
    pub left_x: u16,
    pub left_y: u16,
    pub right_x: u16,
    pub right_y: u16,
}

/// Application state for the hexpad remote
pub struct Remote {
    layout: Layout,
    debouncer: TouchDebouncer,
    control: ControlFlags,
    ticks: TickAccumulator,
    local_battery: BatteryMonitor,
    hexapod_battery: BatteryMonitor,
    /// Committed but not yet dispatched button press; at most one is
    /// handled per main-loop pass
    pending_press: Option<ButtonId>,
    /// The current touch-down armed a widget at its settle tick
    armed_this_touch: bool,
    /// Page flipped since the flag was last taken
    page_changed: bool,
}

impl Default for Remote {
    fn default() -> Self {
        Self::new()
    }
}

impl Remote {
    pub fn new() -> Self {
        Self {
            layout: Layout::hexpad(),
            debouncer: TouchDebouncer::new(),
            control: ControlFlags::new(),
            ticks: TickAccumulator::new(),
            local_battery: BatteryMonitor::new(),
            hexapod_battery: BatteryMonitor::new(),
            pending_press: None,
            armed_this_touch: false,
            page_changed: false,
        }
    }

    /// Feed one ~30 Hz touch sample through the debouncer
    ///
    /// A committed button press is latched until [`Self::dispatch_pending`]
    /// picks it up; a second commit before then replaces the first. A
    /// settled tap that armed nothing and ended in the title bar flips
    /// the active page.
    pub fn poll_touch(&mut self, sample: Option<Point>) -> TouchEvent {
        let last_point = self.debouncer.snapshot().point;
        let event = self.debouncer.poll(sample, &mut self.layout);
        match event {
            TouchEvent::Down(armed) => self.armed_this_touch = armed.is_some(),
            TouchEvent::Up(Some(id)) => {
                self.pending_press = Some(id);
                self.armed_this_touch = false;
            }
            TouchEvent::Up(None) => {
                let in_title_band =
                    last_point.map(|p| p.y < PAGE_TAP_BAND).unwrap_or(false);
                if !self.armed_this_touch && in_title_band {
                    let next = match self.layout.active_page() {
                        Page::Main => Page::Servo,
                        Page::Servo => Page::Main,
                    };
                    self.set_active_page(next);
                }
                self.armed_this_touch = false;
            }
            _ => {}
        }
        event
    }

    /// Apply the latched button press, if any
    ///
    /// Updates the selection model and control bitfield; an eye-color
    /// press additionally returns the sideband byte to send.
    pub fn dispatch_pending(&mut self) -> Option<EyeColor> {
        use ButtonId::*;

        let id = self.pending_press.take()?;
        match id {
            WalkMode => {
                self.control.clear(bits::WIGGLE);
                self.layout.select_button(WalkMode, WiggleMode, None);
            }
            WiggleMode => {
                self.control.set(bits::WIGGLE);
                self.layout.select_button(WiggleMode, WalkMode, None);
            }
            TripodGait => {
                self.control.clear(bits::RIPPLE);
                self.layout.select_button(TripodGait, RippleGait, None);
            }
            RippleGait => {
                self.control.set(bits::RIPPLE);
                self.layout.select_button(RippleGait, TripodGait, None);
            }
            LowBody => {
                self.control.clear(bits::HIGH_BODY);
                self.layout.select_button(LowBody, HighBody, None);
            }
            HighBody => {
                self.control.set(bits::HIGH_BODY);
                self.layout.select_button(HighBody, LowBody, None);
            }
            LowStep => {
                self.control.clear(bits::HIGH_STEP);
                self.layout.select_button(LowStep, HighStep, None);
            }
            HighStep => {
                self.control.set(bits::HIGH_STEP);
                self.layout.select_button(HighStep, LowStep, None);
            }
            LongStep => {
                self.control.clear(bits::QUICK_STEP);
                self.layout.select_button(LongStep, QuickStep, None);
            }
            QuickStep => {
                self.control.set(bits::QUICK_STEP);
                self.layout.select_button(QuickStep, LongStep, None);
            }
            RedEyes => {
                self.layout.select_button(RedEyes, GreenEyes, Some(BlueEyes));
                return Some(EyeColor::Red);
            }
            GreenEyes => {
                self.layout.select_button(GreenEyes, RedEyes, Some(BlueEyes));
                return Some(EyeColor::Green);
            }
            BlueEyes => {
                self.layout.select_button(BlueEyes, RedEyes, Some(GreenEyes));
                return Some(EyeColor::Blue);
            }
        }
        None
    }

    /// Feed one hexapod battery status byte from the radio link
    ///
    /// Values above 100 are corrupt and ignored.
    pub fn ingest_status(&mut self, percent: u8) {
        if percent <= 100 {
            self.hexapod_battery.update(percent);
        }
    }

    /// Credit ticks from the hardware tick source
    pub fn add_ticks(&mut self, ticks: u32) {
        self.ticks.add(ticks);
    }

    /// Drain one 10 Hz telemetry cycle if due
    pub fn telemetry_due(&mut self) -> bool {
        self.ticks.take_cycle()
    }

    /// Build the telemetry frame for this cycle from fresh ADC readings
    ///
    /// Also folds the battery reading into the local monitor, so the
    /// rendered percentage tracks the same samples the frame was built on.
    pub fn telemetry_frame(&mut self, sample: &AnalogSample) -> TelemetryFrame {
        self.local_battery
            .update(battery_percent_from_adc(sample.battery));

        TelemetryFrame {
            control_bits: self.control.bits(),
            left_x: joystick_byte(sample.left_x),
            left_y: joystick_byte(sample.left_y),
            right_x: joystick_byte(sample.right_x),
            right_y: joystick_byte(sample.right_y),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    /// Live touch state for the renderer's highlight pass
    pub fn touch(&self) -> TouchSnapshot {
        self.debouncer.snapshot()
    }

    pub fn control_bits(&self) -> u8 {
        self.control.bits()
    }

    pub fn local_battery_percent(&self) -> u8 {
        self.local_battery.percent()
    }

    pub fn hexapod_battery_percent(&self) -> u8 {
        self.hexapod_battery.percent()
    }

    pub fn set_active_page(&mut self, page: Page) {
        if self.layout.active_page() != page {
            self.page_changed = true;
        }
        self.layout.set_active_page(page);
    }

    /// One-shot page-change flag; the caller schedules a full redraw
    /// when it comes back true
    pub fn take_page_change(&mut self) -> bool {
        core::mem::take(&mut self.page_changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SliderId;

    fn press(remote: &mut Remote, point: Point, ticks: u16) {
        for _ in 0..ticks {
            remote.poll_touch(Some(point));
        }
        remote.poll_touch(None);
    }

    #[test]
    fn test_wiggle_press_sets_bit_and_selection() {
        let mut remote = Remote::new();

        press(&mut remote, Point::new(260, 45), 5);
        let sideband = remote.dispatch_pending();

        assert_eq!(sideband, None);
        assert_eq!(remote.control_bits(), bits::WIGGLE);
        assert!(remote.layout()[ButtonId::WiggleMode].selected);
        assert!(!remote.layout()[ButtonId::WalkMode].selected);
    }

    #[test]
    fn test_walk_press_clears_wiggle() {
        let mut remote = Remote::new();

        press(&mut remote, Point::new(260, 45), 5);
        remote.dispatch_pending();
        press(&mut remote, Point::new(140, 45), 5);
        remote.dispatch_pending();

        assert_eq!(remote.control_bits(), 0);
        assert!(remote.layout()[ButtonId::WalkMode].selected);
    }

    #[test]
    fn test_eye_press_returns_sideband_byte() {
        let mut remote = Remote::new();

        press(&mut remote, Point::new(122, 220), 4);
        let sideband = remote.dispatch_pending();

        assert_eq!(sideband, Some(EyeColor::Red));
        assert!(remote.layout()[ButtonId::RedEyes].selected);
        assert!(!remote.layout()[ButtonId::GreenEyes].selected);
        assert!(!remote.layout()[ButtonId::BlueEyes].selected);
        assert_eq!(remote.control_bits(), 0);
    }

    #[test]
    fn test_noise_touch_dispatches_nothing() {
        let mut remote = Remote::new();

        press(&mut remote, Point::new(260, 45), 2);

        assert_eq!(remote.dispatch_pending(), None);
        assert_eq!(remote.control_bits(), 0);
    }

    #[test]
    fn test_one_press_dispatched_once() {
        let mut remote = Remote::new();

        press(&mut remote, Point::new(260, 185), 5);
        assert_eq!(remote.dispatch_pending(), None);
        assert_eq!(remote.control_bits(), bits::QUICK_STEP);

        // Second pass with no new press is a no-op
        assert_eq!(remote.dispatch_pending(), None);
        assert_eq!(remote.control_bits(), bits::QUICK_STEP);
    }

    #[test]
    fn test_telemetry_frame_carries_control_bits() {
        let mut remote = Remote::new();

        press(&mut remote, Point::new(260, 115), 5);
        remote.dispatch_pending();

        let sample = AnalogSample {
            battery: 650,
            left_x: 512,
            left_y: 0,
            right_x: 1023,
            right_y: 300,
        };
        let frame = remote.telemetry_frame(&sample);

        assert_eq!(frame.control_bits, bits::HIGH_BODY);
        assert_eq!(frame.left_x, 128);
        assert_eq!(frame.left_y, 0);
        assert_eq!(frame.right_x, 255);
        assert_eq!(frame.right_y, 75);
    }

    #[test]
    fn test_telemetry_frame_updates_local_battery() {
        let mut remote = Remote::new();
        let sample = AnalogSample {
            battery: 575,
            ..AnalogSample::default()
        };

        remote.telemetry_frame(&sample);

        assert_eq!(remote.local_battery_percent(), 50);
    }

    #[test]
    fn test_status_ingest_filters_corrupt_bytes() {
        let mut remote = Remote::new();

        remote.ingest_status(80);
        remote.ingest_status(200);
        remote.ingest_status(90);

        assert_eq!(remote.hexapod_battery_percent(), 80);
    }

    #[test]
    fn test_telemetry_cadence() {
        let mut remote = Remote::new();

        remote.add_ticks(780);
        assert!(!remote.telemetry_due());

        remote.add_ticks(782);
        assert!(remote.telemetry_due());
        assert!(remote.telemetry_due());
        assert!(!remote.telemetry_due());
    }

    #[test]
    fn test_title_tap_toggles_page() {
        let mut remote = Remote::new();

        press(&mut remote, Point::new(100, 10), 4);

        assert_eq!(remote.layout().active_page(), Page::Servo);
        assert!(remote.take_page_change());
        assert!(!remote.take_page_change());

        press(&mut remote, Point::new(100, 10), 4);
        assert_eq!(remote.layout().active_page(), Page::Main);
    }

    #[test]
    fn test_short_title_tap_ignored() {
        let mut remote = Remote::new();

        press(&mut remote, Point::new(100, 10), 2);

        assert_eq!(remote.layout().active_page(), Page::Main);
        assert!(!remote.take_page_change());
    }

    #[test]
    fn test_armed_button_released_in_title_bar_keeps_page() {
        let mut remote = Remote::new();

        // Settle on Walk, slide up into the title bar, lift
        for _ in 0..4 {
            remote.poll_touch(Some(Point::new(140, 45)));
        }
        remote.poll_touch(Some(Point::new(140, 10)));
        remote.poll_touch(None);

        assert_eq!(remote.layout().active_page(), Page::Main);
        assert!(!remote.take_page_change());
        assert_eq!(remote.dispatch_pending(), None);
    }

    #[test]
    fn test_slider_drag_does_not_latch_press() {
        let mut remote = Remote::new();
        remote.set_active_page(Page::Servo);

        for _ in 0..3 {
            remote.poll_touch(Some(Point::new(100, 80)));
        }
        remote.poll_touch(Some(Point::new(160, 80)));
        remote.poll_touch(None);

        assert_eq!(remote.layout()[SliderId::FrontServo].value, 50);
        assert_eq!(remote.dispatch_pending(), None);
    }
}
