//! Hexapod Telemetry Protocol
//!
//! This crate defines the one-way UART protocol between the hexpad remote
//! (handheld controller) and the hexapod robot. The remote streams control
//! state at 10 Hz; the robot answers with nothing but a single battery
//! status byte.
//!
//! # Protocol Overview
//!
//! Control state is sent as a fixed 7-byte frame:
//! ```text
//! ┌─────────┬──────┬────────┬────────┬─────────┬─────────┬──────────┐
//! │ COMMAND │ BITS │ LEFT_X │ LEFT_Y │ RIGHT_X │ RIGHT_Y │ CHECKSUM │
//! │ b'c'    │ 1B   │ 1B     │ 1B     │ 1B      │ 1B      │ 1B       │
//! └─────────┴──────┴────────┴────────┴─────────┴─────────┴──────────┘
//! ```
//!
//! Eye-color changes are sent as single sideband bytes (`b'r'`/`b'g'`/`b'b'`)
//! outside the frame cadence. There is no negotiation and no retransmission.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;

pub use command::EyeColor;
pub use frame::{FrameError, FrameParser, TelemetryFrame, FRAME_COMMAND, FRAME_LEN};
