use eframe::egui;
use log::{error, info, warn};

use holiday_calendar_egui::config::ClientConfig;
use holiday_calendar_egui::ui::HolidayCalendarApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Holiday Calendar egui application");

    let config = ClientConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load client config, using defaults: {:#}", e);
        ClientConfig::default().with_env_override(|key| std::env::var(key).ok())
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Holiday Calendar")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Holiday Calendar",
        options,
        Box::new(move |cc| match HolidayCalendarApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized Holiday Calendar app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
