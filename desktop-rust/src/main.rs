mod app;
mod io;
mod model;

use anyhow::Result;
use app::{DesktopApp, configure_fonts};
use eframe::egui;

fn main() -> Result<()> {
    alert_timeline::logging::init(false);

    let app = DesktopApp::new()?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Alert Timeline",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {e}"))
}
