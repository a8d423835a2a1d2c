//! Tally - a themed desktop calculator
//!
//! Add, subtract, multiply, divide, percent. Mouse or keyboard.

mod app;

use app::TallyApp;
use eframe::NativeOptions;
use egui::viewport::WindowLevel;
use tallycore::{logging, AppConfig};

fn main() -> eframe::Result<()> {
    // Logging depends on the config, so a bad config file is reported after
    // the subscriber is up.
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init(&config.development) {
        eprintln!("[tally] logging unavailable: {}", e);
    }
    if let Some(e) = config_error {
        tracing::warn!(
            path = %AppConfig::config_path().display(),
            error = %e,
            "ignoring config file, using defaults"
        );
    }

    let window = &config.window;
    let level = if window.always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_resizable(window.resizable)
            .with_decorations(window.frame)
            .with_window_level(level)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| Box::new(TallyApp::new(cc, config))),
    )
}
