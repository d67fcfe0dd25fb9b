//! Display backend trait and renderer for the hexpad remote
//!
//! This crate provides:
//! - `DisplayBackend` trait the renderer draws through
//! - `Renderer`, the dirty-flag rendering pass over the widget layout
//! - `EgBackend`, an adapter onto any `embedded-graphics` draw target
//!
//! # Architecture
//!
//! The renderer never talks to hardware directly. Each main-loop pass it
//! walks the widget layout and emits only the drawing calls needed to
//! bring the panel in sync: buttons redraw when their highlight or
//! selection changed, sliders when their value moved, and the static page
//! chrome only on a full redraw. The firmware wires `EgBackend` over its
//! TFT driver; host tests substitute a recording backend.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod eg;
pub mod render;

pub use backend::{DisplayBackend, DisplayError};
pub use eg::EgBackend;
pub use render::Renderer;
