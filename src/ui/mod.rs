pub mod metrics;
pub mod panels;
pub mod plot;

use eframe::egui::{Color32, RichText, Ui};

use crate::error::DashboardError;

/// Show a pipeline error in place of the widget that failed.
pub fn error_label(ui: &mut Ui, err: &DashboardError) {
    ui.label(RichText::new(format!("Error: {err}")).color(Color32::RED));
}
