//! Dirty-flag rendering pass over the widget layout
//!
//! One `render` call per main-loop pass. Static chrome is drawn only when
//! a full redraw is pending; buttons repaint when their highlight or
//! selection state changed; sliders repaint when their value moved since
//! the last pass. Battery gauges are cheap and repaint every pass.

use hexpad_core::color::Rgb565;
use hexpad_core::input::TouchSnapshot;
use hexpad_core::ui::{ButtonId, Layout, Page, SliderId};

use crate::backend::{DisplayBackend, DisplayError};

/// Button box height below the top edge
const BUTTON_HEIGHT: i32 = 28;

/// Battery gauge fill width at 100%
const BATTERY_BAR_WIDTH: i32 = 30;

/// The rendering pass state
pub struct Renderer {
    full_redraw: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Start with a full redraw pending so the first pass paints everything
    pub const fn new() -> Self {
        Self { full_redraw: true }
    }

    /// Request chrome and screen background repaint on the next pass
    pub fn request_full_redraw(&mut self) {
        self.full_redraw = true;
    }

    /// Bring the panel in sync with the widget layout
    ///
    /// `touch` is the live debouncer snapshot; button highlights are
    /// recomputed from it here so a finger sliding off an armed button
    /// un-highlights it on the next pass.
    pub fn render<B: DisplayBackend>(
        &mut self,
        backend: &mut B,
        layout: &mut Layout,
        touch: TouchSnapshot,
        hexapod_battery: u8,
        local_battery: u8,
    ) -> Result<(), DisplayError> {
        self.render_chrome(backend, layout.active_page())?;
        self.draw_battery(backend, 200, 5, hexapod_battery)?;
        self.draw_battery(backend, 276, 5, local_battery)?;
        self.render_buttons(backend, layout, touch)?;
        self.render_sliders(backend, layout)?;
        self.full_redraw = false;
        Ok(())
    }

    fn render_chrome<B: DisplayBackend>(
        &self,
        backend: &mut B,
        page: Page,
    ) -> Result<(), DisplayError> {
        if !self.full_redraw {
            return Ok(());
        }

        backend.fill_screen(Rgb565::BLACK)?;
        backend.text("Ian's Hexapod", 2, 3, Rgb565::BLUE, Rgb565::BLACK)?;
        // Battery gauge tags: H for the hexapod, C for the controller
        backend.text("H", 182, 3, Rgb565::LIGHT_GRAY, Rgb565::BLACK)?;
        backend.text("C", 258, 3, Rgb565::LIGHT_GRAY, Rgb565::BLACK)?;

        match page {
            Page::Main => {
                backend.text("Mode:", 2, 36, Rgb565::WHITE, Rgb565::BLACK)?;
                backend.text("Gait:", 2, 71, Rgb565::WHITE, Rgb565::BLACK)?;
                backend.text("Body:", 2, 106, Rgb565::WHITE, Rgb565::BLACK)?;
                backend.text("Step:", 2, 141, Rgb565::WHITE, Rgb565::BLACK)?;
                backend.text("Eyes:", 2, 211, Rgb565::WHITE, Rgb565::BLACK)?;
            }
            Page::Servo => {
                backend.text("Front:", 2, 76, Rgb565::WHITE, Rgb565::BLACK)?;
                backend.text("Back:", 2, 146, Rgb565::WHITE, Rgb565::BLACK)?;
            }
        }

        backend.fill_rect(0, 24, 319, 25, Rgb565::LIGHT_GRAY)
    }

    fn render_buttons<B: DisplayBackend>(
        &self,
        backend: &mut B,
        layout: &mut Layout,
        touch: TouchSnapshot,
    ) -> Result<(), DisplayError> {
        let active_page = layout.active_page();

        for id in ButtonId::ALL {
            let over = touch
                .point
                .map(|p| layout[id].hit_test(p, active_page))
                .unwrap_or(false);
            let highlighted = over && touch.armed_button == Some(id);

            let button = &mut layout[id];
            let was_highlighted = button.highlighted;
            button.highlighted = highlighted;

            if button.page != active_page {
                continue;
            }
            if was_highlighted == highlighted && !button.needs_redraw && !self.full_redraw {
                continue;
            }

            let fill = if highlighted || button.selected {
                button.color
            } else {
                Rgb565::BLACK
            };
            let left = button.x - button.width / 2;
            let right = button.x + button.width / 2;
            border_box(
                backend,
                left,
                button.y,
                right,
                button.y + BUTTON_HEIGHT,
                button.color,
                fill,
            )?;

            let text_color = if fill == Rgb565::DARK_GRAY {
                Rgb565::DARK_GRAY
            } else {
                Rgb565::WHITE
            };
            backend.centred_text(button.label, button.x, button.y + 6, text_color, fill)?;

            button.needs_redraw = false;
        }
        Ok(())
    }

    fn render_sliders<B: DisplayBackend>(
        &self,
        backend: &mut B,
        layout: &mut Layout,
    ) -> Result<(), DisplayError> {
        let active_page = layout.active_page();

        for id in SliderId::ALL {
            let slider = &mut layout[id];
            if slider.page != active_page {
                continue;
            }
            if slider.old_value == slider.value && !self.full_redraw {
                continue;
            }

            let usable = slider.usable_width();
            let middle = slider.x - usable / 2 + usable * slider.value as i32 / 100;
            let left = slider.x - slider.width / 2;
            let right = slider.x + slider.width / 2;

            // Track with the handle painted over it; the thin black bands
            // above and below erase the handle's previous position
            backend.fill_rect(left, slider.y, right, slider.y + 8, Rgb565::BLACK)?;
            backend.fill_rect(left, slider.y + 8, right, slider.y + 24, Rgb565::DARK_GRAY)?;
            backend.fill_rect(left, slider.y + 24, right, slider.y + 32, Rgb565::BLACK)?;
            backend.fill_rect(middle - 8, slider.y, middle + 8, slider.y + 32, slider.color)?;

            slider.old_value = slider.value;
        }
        Ok(())
    }

    /// Battery gauge: outline with a nub, fill bar colored by charge level
    fn draw_battery<B: DisplayBackend>(
        &self,
        backend: &mut B,
        x: i32,
        y: i32,
        percentage: u8,
    ) -> Result<(), DisplayError> {
        if self.full_redraw {
            backend.fill_rect(x, y, x + 34, y + 12, Rgb565::LIGHT_GRAY)?;
            backend.fill_rect(x + 34, y + 4, x + 36, y + 8, Rgb565::LIGHT_GRAY)?;
        }

        let color = if percentage < 20 {
            Rgb565::RED
        } else if percentage < 50 {
            Rgb565::YELLOW
        } else {
            Rgb565::GREEN
        };

        // Keep a sliver of bar visible even when flat
        let width = (percentage as i32 * BATTERY_BAR_WIDTH / 100).max(3);

        backend.fill_rect(x + 2, y + 2, x + 2 + width, y + 10, color)?;
        backend.fill_rect(x + 2 + width + 1, y + 2, x + 32, y + 10, Rgb565::BLACK)
    }
}

/// Outline rectangle with a 2-unit frame and filled interior
fn border_box<B: DisplayBackend>(
    backend: &mut B,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    frame: Rgb565,
    fill: Rgb565,
) -> Result<(), DisplayError> {
    backend.fill_rect(x1, y1, x2, y2, frame)?;
    backend.fill_rect(x1 + 2, y1 + 2, x2 - 2, y2 - 2, fill)
}
