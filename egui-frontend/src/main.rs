use eframe::egui;
use log::{error, info};

mod app;
mod backend;
mod ui;

use app::AttendanceTrackerApp;
use backend::AppConfig;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Attendance Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 520.0])
            .with_min_inner_size([360.0, 440.0])
            .with_title("Attendance Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Attendance Tracker",
        options,
        Box::new(|_cc| {
            let config = match AppConfig::load_default() {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to load configuration: {}", e);
                    return Err(format!("Failed to load configuration: {}", e).into());
                }
            };

            match AttendanceTrackerApp::new(config) {
                Ok(app) => {
                    info!("Successfully initialized Attendance Tracker app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
