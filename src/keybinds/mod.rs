//! Key bindings for the lookup view.
//!
//! Bindings are key names (`"Escape"`, `"["`) compared against the key a
//! front end reports, without modifiers.

pub mod actions;
pub mod config;

pub use actions::KeyAction;
pub use config::KeyBindings;
