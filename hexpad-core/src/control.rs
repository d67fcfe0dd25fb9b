//! Walking-mode control bitfield
//!
//! The wire bit assignments live in [`hexpad_protocol::frame::bits`];
//! this type owns the current state and the set/clear plumbing.

pub use hexpad_protocol::frame::bits;

/// Current walking-mode flags, sent as the second frame byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlFlags(u8);

impl ControlFlags {
    /// All flags cleared: walk mode, tripod gait, low body, normal steps
    pub const fn new() -> Self {
        Self(0)
    }

    /// Raw bitfield for the telemetry frame
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn set(&mut self, bit: u8) {
        self.0 |= bit;
    }

    pub fn clear(&mut self, bit: u8) {
        self.0 &= !bit;
    }

    pub const fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }
}
