//! Board-agnostic core logic for the hexpad remote firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Widget model (buttons, sliders, pages, hit-testing)
//! - Touch debouncing state machine
//! - Control bitfield and button-press dispatch
//! - Battery estimation with monotonic-decrease filtering
//! - Tick accumulation for the 10 Hz telemetry cadence
//! - The top-level [`Remote`] controller object

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod control;
pub mod geom;
pub mod input;
pub mod power;
pub mod remote;
pub mod timing;
pub mod ui;

pub use remote::{AnalogSample, Remote};
