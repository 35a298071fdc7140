mod app;
mod config;
mod upload;
mod utils;

use app::DocxUploaderApp;
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([540.0, 600.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Details Analyser",
        options,
        Box::new(move |cc| Box::new(DocxUploaderApp::new(cc, config))),
    )
}
