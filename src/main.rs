//! Main application entry point.
//!
//! Uses eframe to own the window and GPU context; the Application from
//! src/ui/app.rs is driven once per frame.

use anyhow::{anyhow, Result};
use eframe::egui;
use log::info;

use dockshell::cli;
use dockshell::ui::Application;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();
    let config = args.startup_config();
    info!("Settings file: {}", config.settings_path.display());

    let settings = config.settings;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("dockshell")
            .with_inner_size([settings.window_width as f32, settings.window_height as f32])
            .with_maximized(settings.maximized),
        vsync: true,
        ..Default::default()
    };

    let settings_path = config.settings_path;
    eframe::run_native(
        "dockshell",
        native_options,
        Box::new(move |cc| {
            Box::new(Application::from_creation_context(
                cc,
                settings,
                settings_path,
            ))
        }),
    )
    .map_err(|err| anyhow!("Failed to run the application: {err}"))?;

    info!("dockshell exiting");
    Ok(())
}
