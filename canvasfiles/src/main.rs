//! canvasfiles — a spatial file canvas
//!
//! Files are cards you can drag anywhere on a grid, or rows in a list.

mod app;
mod canvas;
mod interaction;
mod kind;
mod list;
mod menu;
mod registry;
mod seed;
mod settings;
mod sidebar;

use app::CanvasFilesApp;
use eframe::NativeOptions;
use registry::{Registry, RegistryError};
use settings::AppSettings;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum LaunchError {
    #[error("could not build the file registry: {0}")]
    Registry(#[from] RegistryError),
    #[error("window failed: {0}")]
    Ui(#[from] eframe::Error),
}

fn main() -> Result<(), LaunchError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = AppSettings::load();
    let registry = Registry::new(seed::default_records())?;
    tracing::info!(files = registry.len(), view = ?settings.default_view, "starting");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title(settings.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        settings::APP_NAME,
        options,
        Box::new(move |cc| {
            canvascore::CanvasTheme::default().apply(&cc.egui_ctx);
            Box::new(CanvasFilesApp::new(cc, settings, registry))
        }),
    )?;
    Ok(())
}
