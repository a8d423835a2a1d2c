//! tallycore — shared pieces of the tally calculator
//!
//! Theme palettes, configuration, logging setup and button press feedback.
//! Nothing in here knows about arithmetic.

pub mod config;
pub mod feedback;
pub mod logging;
pub mod theme;

pub use config::AppConfig;
pub use feedback::PressFeedback;
pub use theme::{Theme, ThemeKind};
