//! FileHelper -- scan a folder, spot big archives, delete what you no longer need.
//!
//! Thin binary entry point. All logic lives in the `filehelper-core`
//! and `filehelper-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use filehelper_core::HelperConfig;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("FileHelper starting");

    // A broken config file is not fatal: fall back to the defaults.
    let config = HelperConfig::load_or_default().unwrap_or_else(|e| {
        tracing::warn!("{e} -- using default configuration");
        HelperConfig::default()
    });
    if let Some(log_file) = &config.log_file {
        tracing::info!("Activity log: {}", log_file.display());
    }

    let state = filehelper_gui::state::AppState::new(config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FileHelper")
            .with_inner_size([900.0, 500.0])
            .with_min_inner_size([640.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FileHelper",
        options,
        Box::new(|cc| {
            Ok(Box::new(filehelper_gui::FileHelperApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
