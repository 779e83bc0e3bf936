use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::CellValue;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Widgets only read state; the click is applied after the panel is drawn.
    let mut toggled: Option<(&'static str, CellValue)> = None;
    let mut cleared: Option<&'static str> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for opts in &state.filter_options {
                let values = match &opts.values {
                    Ok(values) => values,
                    Err(e) => {
                        ui.strong(opts.label);
                        super::error_label(ui, e);
                        continue;
                    }
                };

                let n_selected = state
                    .selection
                    .selected(opts.column)
                    .map_or(0, |set| set.len());
                let header_text = format!("{}  ({n_selected}/{})", opts.label, values.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(opts.column)
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        if ui.small_button("Clear").clicked() {
                            cleared = Some(opts.column);
                        }
                        for val in values {
                            let mut checked = state.selection.is_selected(opts.column, val);
                            if ui.checkbox(&mut checked, val.to_string()).changed() {
                                toggled = Some((opts.column, val.clone()));
                            }
                        }
                    });
            }
        });

    if let Some(column) = cleared {
        state.clear_filter(column);
    }
    if let Some((column, value)) = toggled {
        state.toggle_filter_value(column, &value);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} rows loaded, {} visible",
            state.dashboard.total_rows, state.dashboard.visible_rows
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
