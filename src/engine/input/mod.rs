//! Input handling module
//! Keyboard state tracking and directional key bindings.

pub mod handler;

pub use handler::{DirectionalInput, InputHandler, KeyBindings};
