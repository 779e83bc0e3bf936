mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;
mod view;

use std::path::Path;

use anyhow::{Context, Result};
use app::SalesDashboardApp;
use config::{CONFIG_FILE, DashboardConfig};
use eframe::egui;
use state::{AppState, Session};

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))?;

    // The dataset is required; nothing is shown if it cannot be read.
    let table = data::loader::load_file(&config.data_path, config.encoding).with_context(|| {
        format!(
            "cannot start without the sales dataset at {}",
            config.data_path.display()
        )
    })?;

    let state = AppState::new(Session {
        table,
        source: config.data_path,
        encoding: config.encoding,
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        app::TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(SalesDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
