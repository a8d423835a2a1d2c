//! tally — calculator engine and input tables
//!
//! The egui shell lives in the binary; everything here is plain data and
//! state transitions.

pub mod action;
pub mod engine;
pub mod format;
pub mod keymap;
pub mod layout;

pub use action::{Action, ButtonKind, Operation};
pub use engine::{Calculator, DisplayState};
pub use format::{format_number, DisplaySettings};
