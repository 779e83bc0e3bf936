use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{metrics, panels, plot};

pub const TITLE: &str = "Amazon Sales Dashboard";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesDashboardApp {
    pub state: AppState,
}

impl SalesDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SalesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: cards and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading(TITLE);
                    ui.add_space(8.0);

                    let dashboard = &self.state.dashboard;
                    metrics::metric_cards(ui, &dashboard.cards);
                    ui.add_space(12.0);

                    for (slot, chart) in dashboard.charts.iter().enumerate() {
                        plot::chart(ui, slot, chart);
                        ui.add_space(16.0);
                    }
                });
        });
    }
}
