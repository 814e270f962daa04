//! calcpad - a four-function desktop calculator
//!
//! Digit entry, chained arithmetic, sign negation and backspace editing.

mod app;
mod fit;
mod theme;

use app::CalcApp;
use calccore::CalcConfig;
use eframe::NativeOptions;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = CalcConfig::load_or_default();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            theme::CalcTheme::default().apply(&cc.egui_ctx, config.font_path.as_deref());
            Box::new(CalcApp::new(cc, config))
        }),
    )
}
