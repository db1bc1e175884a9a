mod app;
mod color;
mod config;
mod data;
mod format;
mod state;
mod ui;

use app::RiaDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_args(std::env::args().skip(1));
    log::info!("Data file: {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Opportunities Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(RiaDashboardApp::new(&config)))),
    )
}
