//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod link_rx;
pub mod tick;
pub mod touch;

pub use controller::{controller_task, AnalogChannels};
pub use link_rx::link_rx_task;
pub use tick::tick_task;
pub use touch::touch_task;
