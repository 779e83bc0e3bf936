//! Presentation data: everything the window shows, built without touching egui.
//!
//! One call to [`render`] is one full pass of the dashboard pipeline:
//! ```text
//!   SalesTable + FilterSelection
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  keep rows matching the selection
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ summarize │  totals, growth, top SKU
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────────────┐
//!   │ cards + charts    │  MetricCard ×5, ChartSpec ×4
//!   └──────────────────┘
//! ```
//! Nothing is carried over between passes.

pub mod cards;
pub mod charts;
pub mod format;

use crate::data::filter::{FilterSelection, filter};
use crate::data::model::SalesTable;
use crate::data::summary::{SalesSummary, summarize};
use crate::error::DashboardError;

use cards::{MetricCard, metric_cards};
use charts::ChartSpec;

/// Output of one pipeline pass.
///
/// Cards and each chart carry their own `Result` so a schema problem in one
/// widget is reported in place while the rest still draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total_rows: usize,
    pub visible_rows: usize,
    pub summary: Result<SalesSummary, DashboardError>,
    pub cards: Result<Vec<MetricCard>, DashboardError>,
    pub charts: Vec<Result<ChartSpec, DashboardError>>,
}

/// Run filter → summarize → build cards and charts.
pub fn render(table: &SalesTable, selection: &FilterSelection) -> Dashboard {
    let view = filter(table, selection);
    let summary = summarize(&view);
    let cards = summary.as_ref().map(metric_cards).map_err(Clone::clone);

    let gauge = summary
        .as_ref()
        .map(|s| charts::growth_gauge(&view, s.growth_pct))
        .map_err(Clone::clone);

    let charts = vec![
        charts::forecast_vs_sales(&view),
        gauge,
        charts::stock_breakdown(&view),
        charts::secondary_forecast(&view),
    ];

    log::debug!(
        "Rendered dashboard: {} of {} rows visible",
        view.len(),
        table.len()
    );
    if let Ok(s) = &summary {
        log::debug!(
            "Growth {:.2}% from 7-day sum {} against 30-day sum {}",
            s.growth_pct,
            s.sales_7d.value,
            s.sales_30d.value
        );
    }

    Dashboard {
        total_rows: table.len(),
        visible_rows: view.len(),
        summary,
        cards,
        charts,
    }
}
