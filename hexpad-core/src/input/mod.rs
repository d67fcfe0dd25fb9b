//! Touch input handling

pub mod debounce;

pub use debounce::{ArmedWidget, TouchDebouncer, TouchEvent, TouchSnapshot};
