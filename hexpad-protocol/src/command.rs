//! Sideband command bytes sent outside the telemetry frame cadence

/// Eye LED color selected on the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EyeColor {
    Red,
    Green,
    Blue,
}

// Wire format values
const CMD_RED_EYES: u8 = b'r';
const CMD_GREEN_EYES: u8 = b'g';
const CMD_BLUE_EYES: u8 = b'b';

impl EyeColor {
    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_RED_EYES => Some(EyeColor::Red),
            CMD_GREEN_EYES => Some(EyeColor::Green),
            CMD_BLUE_EYES => Some(EyeColor::Blue),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            EyeColor::Red => CMD_RED_EYES,
            EyeColor::Green => CMD_GREEN_EYES,
            EyeColor::Blue => CMD_BLUE_EYES,
        }
    }
}
