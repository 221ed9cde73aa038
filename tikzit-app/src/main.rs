//! TikZiT - GUI application entry point.
//!
//! Constructs the application controller, wires OS-level open-file events to
//! it, and forwards a single optional command-line file argument at startup.

mod app;
mod fonts;
mod preferences;

use std::path::PathBuf;

use app::TikzitApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Check for command-line file argument. This is opened exactly once,
    // inside the app constructor, before the event loop runs.
    let initial_file: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("TikZiT"),
        vsync: false,
        ..Default::default()
    };

    eframe::run_native(
        "TikZiT",
        options,
        Box::new(move |cc| Ok(Box::new(TikzitApp::new(cc, initial_file)))),
    )
}
