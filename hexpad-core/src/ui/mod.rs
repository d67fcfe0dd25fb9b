//! Widget model
//!
//! Buttons, sliders, and the page layout they live on. Widgets are
//! statically allocated at startup and never destroyed; all mutation is
//! selection state, drag values, and redraw dirty flags.

pub mod button;
pub mod layout;
pub mod slider;

pub use button::{Button, ButtonId};
pub use layout::{Layout, Page};
pub use slider::{Slider, SliderId};

/// Height of the touch-sensitive band below a widget's top edge
///
/// Shared by buttons and sliders; note buttons draw only 28 pixels tall,
/// so the bottom 4 pixels of the band are invisible but still touchable.
pub const HIT_BAND: i32 = 32;
