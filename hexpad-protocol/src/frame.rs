//! Telemetry frame encoding and decoding.
//!
//! Frame format (7 bytes, fixed length):
//! - COMMAND (1 byte): `b'c'` control-state command character
//! - BITS (1 byte): walking-mode bitfield
//! - LEFT_X, LEFT_Y, RIGHT_X, RIGHT_Y (4 bytes): 8-bit joystick samples
//! - CHECKSUM (1 byte): wrapping sum of BITS and the four axis bytes

/// Frame command/synchronization byte
pub const FRAME_COMMAND: u8 = b'c';

/// Complete frame size (COMMAND + BITS + 4 axes + CHECKSUM)
pub const FRAME_LEN: usize = 7;

/// Payload bytes between COMMAND and CHECKSUM
const BODY_LEN: usize = 5;

/// Control bitfield bit assignments
pub mod bits {
    /// Bit 0: wiggle mode instead of walk
    pub const WIGGLE: u8 = 0b0000_0001;
    /// Bit 1: high step instead of normal
    pub const HIGH_STEP: u8 = 0b0000_0010;
    /// Bit 2: high body instead of normal
    pub const HIGH_BODY: u8 = 0b0000_0100;
    /// Bit 3: quick (shorter) steps instead of long
    pub const QUICK_STEP: u8 = 0b0000_1000;
    /// Bit 4: ripple gait instead of tripod
    pub const RIPPLE: u8 = 0b0001_0000;
}

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Checksum mismatch
    InvalidChecksum,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// One control-state frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryFrame {
    /// Walking-mode bitfield (see [`bits`])
    pub control_bits: u8,
    /// Left joystick X axis
    pub left_x: u8,
    /// Left joystick Y axis
    pub left_y: u8,
    /// Right joystick X axis
    pub right_x: u8,
    /// Right joystick Y axis
    pub right_y: u8,
}

impl TelemetryFrame {
    /// Create a new frame
    pub const fn new(control_bits: u8, left_x: u8, left_y: u8, right_x: u8, right_y: u8) -> Self {
        Self {
            control_bits,
            left_x,
            left_y,
            right_x,
            right_y,
        }
    }

    /// Calculate the checksum over the body bytes
    pub fn checksum(&self) -> u8 {
        self.control_bits
            .wrapping_add(self.left_x)
            .wrapping_add(self.left_y)
            .wrapping_add(self.right_x)
            .wrapping_add(self.right_y)
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written (always [`FRAME_LEN`] on success).
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        if buffer.len() < FRAME_LEN {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[0] = FRAME_COMMAND;
        buffer[1] = self.control_bits;
        buffer[2] = self.left_x;
        buffer[3] = self.left_y;
        buffer[4] = self.right_x;
        buffer[5] = self.right_y;
        buffer[6] = self.checksum();

        Ok(FRAME_LEN)
    }

    /// Encode this frame into a fixed array
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let mut buffer = [0u8; FRAME_LEN];
        // Cannot fail: buffer is exactly FRAME_LEN
        let _ = self.encode(&mut buffer);
        buffer
    }
}

/// State machine for parsing incoming frames byte by byte
///
/// Used on the hexapod side and in tests. Unrecognized bytes while waiting
/// for the command byte are skipped, which lets the parser resynchronize
/// after line garbage.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    body: [u8; BODY_LEN],
    received: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for the COMMAND byte
    WaitingForCommand,
    /// Reading body bytes
    ReadingBody,
    /// Waiting for CHECKSUM
    WaitingForChecksum,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new frame parser
    pub const fn new() -> Self {
        Self {
            state: ParseState::WaitingForCommand,
            body: [0; BODY_LEN],
            received: 0,
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForCommand;
        self.received = 0;
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on checksum mismatch.
    pub fn feed(&mut self, byte: u8) -> Result<Option<TelemetryFrame>, FrameError> {
        match self.state {
            ParseState::WaitingForCommand => {
                if byte == FRAME_COMMAND {
                    self.received = 0;
                    self.state = ParseState::ReadingBody;
                }
                // Silently ignore other bytes while waiting
                Ok(None)
            }
            ParseState::ReadingBody => {
                self.body[self.received] = byte;
                self.received += 1;
                if self.received == BODY_LEN {
                    self.state = ParseState::WaitingForChecksum;
                }
                Ok(None)
            }
            ParseState::WaitingForChecksum => {
                let frame = TelemetryFrame::new(
                    self.body[0],
                    self.body[1],
                    self.body[2],
                    self.body[3],
                    self.body[4],
                );

                self.reset();

                if byte != frame.checksum() {
                    return Err(FrameError::InvalidChecksum);
                }

                Ok(Some(frame))
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<TelemetryFrame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_frame_encode() {
        let frame = TelemetryFrame::new(bits::WIGGLE | bits::RIPPLE, 10, 20, 30, 40);
        let bytes = frame.to_bytes();

        assert_eq!(bytes[0], FRAME_COMMAND);
        assert_eq!(bytes[1], 0b0001_0001);
        assert_eq!(&bytes[2..6], &[10, 20, 30, 40]);
        // (17 + 10 + 20 + 30 + 40) mod 256 = 117
        assert_eq!(bytes[6], 117);
    }

    #[test]
    fn test_checksum_wraps() {
        let frame = TelemetryFrame::new(0xFF, 0xFF, 0xFF, 0xFF, 0xFF);
        assert_eq!(frame.checksum(), 0xFB);
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let frame = TelemetryFrame::default();
        let mut buffer = [0u8; FRAME_LEN - 1];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_frame_roundtrip() {
        let original = TelemetryFrame::new(0b0000_0110, 128, 64, 200, 12);
        let bytes = original.to_bytes();

        let mut parser = FrameParser::new();
        let parsed = parser.feed_bytes(&bytes).unwrap().unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parser_invalid_checksum() {
        let frame = TelemetryFrame::new(1, 2, 3, 4, 5);
        let mut bytes = frame.to_bytes();
        bytes[6] ^= 0xFF;

        let mut parser = FrameParser::new();
        assert_eq!(parser.feed_bytes(&bytes), Err(FrameError::InvalidChecksum));
    }

    #[test]
    fn test_parser_resync_after_garbage() {
        let frame = TelemetryFrame::new(bits::HIGH_BODY, 1, 2, 3, 4);
        let bytes = frame.to_bytes();

        let mut data = [0u8; FRAME_LEN + 3];
        data[..3].copy_from_slice(&[0x00, 0xFF, 0x12]);
        data[3..].copy_from_slice(&bytes);

        let mut parser = FrameParser::new();
        let parsed = parser.feed_bytes(&data).unwrap().unwrap();

        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_parser_recovers_after_error() {
        let good = TelemetryFrame::new(0, 9, 8, 7, 6);
        let mut corrupted = good.to_bytes();
        corrupted[6] = corrupted[6].wrapping_add(1);

        let mut parser = FrameParser::new();
        assert!(parser.feed_bytes(&corrupted).is_err());

        // Parser must accept a clean frame after the failure
        let parsed = parser.feed_bytes(&good.to_bytes()).unwrap().unwrap();
        assert_eq!(parsed, good);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(control in any::<u8>(), lx in any::<u8>(), ly in any::<u8>(),
                          rx in any::<u8>(), ry in any::<u8>()) {
            let frame = TelemetryFrame::new(control, lx, ly, rx, ry);
            let mut parser = FrameParser::new();
            let parsed = parser.feed_bytes(&frame.to_bytes()).unwrap().unwrap();
            prop_assert_eq!(parsed, frame);
        }

        #[test]
        fn prop_checksum_is_wrapping_sum(control in any::<u8>(), lx in any::<u8>(),
                                         ly in any::<u8>(), rx in any::<u8>(), ry in any::<u8>()) {
            let frame = TelemetryFrame::new(control, lx, ly, rx, ry);
            let expected = (control as u32 + lx as u32 + ly as u32 + rx as u32 + ry as u32) % 256;
            prop_assert_eq!(frame.checksum() as u32, expected);
        }
    }
}
