use std::ops::RangeInclusive;

use crate::data::filter::FilteredTable;
use crate::data::model::{
    ASIN, AVG_SALES, AVG_SALES_2, FBA_PENDING, FBA_STOCK, FORECAST, FORECAST_2, TPL_STOCK,
};
use crate::data::summary::{label_column, numeric_column};
use crate::error::DashboardError;

/// Title every chart falls back to when no row passes the filters.
pub const NO_DATA_TITLE: &str = "No Data Available";

pub const FORECAST_VS_SALES: &str = "Forecast vs. Avg Sales by SKU";
pub const GROWTH_GAUGE: &str = "7-day vs. 30-day Growth %";
pub const STOCK_BREAKDOWN: &str = "FBA Stock, FBA Pending & 3PL Stock by SKU";
pub const SECONDARY_FORECAST: &str = "Forecast.2 vs. Avg Sales.2 by SKU";

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    /// Series side by side within each category.
    Grouped,
    /// Series stacked on top of each other.
    Stacked,
}

/// One named bar series, one value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub title: &'static str,
    pub mode: BarMode,
    /// One label per filtered row, in row order. Labels may repeat.
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub title: &'static str,
    pub value: f64,
    pub range: RangeInclusive<f64>,
}

/// What to draw in one chart slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Bars(BarChartSpec),
    Gauge(GaugeSpec),
    /// Placeholder with a title and no series.
    Empty { title: &'static str },
}

impl ChartSpec {
    pub fn title(&self) -> &'static str {
        match self {
            ChartSpec::Bars(b) => b.title,
            ChartSpec::Gauge(g) => g.title,
            ChartSpec::Empty { title } => *title,
        }
    }

    fn no_data() -> Self {
        ChartSpec::Empty {
            title: NO_DATA_TITLE,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn bar_chart(
    view: &FilteredTable<'_>,
    title: &'static str,
    mode: BarMode,
    columns: &[(&'static str, &str)],
) -> Result<ChartSpec, DashboardError> {
    if view.is_empty() {
        return Ok(ChartSpec::no_data());
    }
    let categories = label_column(view, ASIN)?;
    let series = columns
        .iter()
        .map(|&(name, column)| {
            Ok(Series {
                name,
                values: numeric_column(view, column)?
                    .into_iter()
                    .map(|n| n.value)
                    .collect(),
            })
        })
        .collect::<Result<Vec<_>, DashboardError>>()?;

    Ok(ChartSpec::Bars(BarChartSpec {
        title,
        mode,
        categories,
        series,
    }))
}

/// Grouped forecast and average sales per SKU.
pub fn forecast_vs_sales(view: &FilteredTable<'_>) -> Result<ChartSpec, DashboardError> {
    bar_chart(
        view,
        FORECAST_VS_SALES,
        BarMode::Grouped,
        &[("Forecasted Sales", FORECAST), ("Average Sales", AVG_SALES)],
    )
}

/// Speedometer of the growth percentage on a fixed [-100, 100] axis.
pub fn growth_gauge(view: &FilteredTable<'_>, growth_pct: f64) -> ChartSpec {
    if view.is_empty() {
        return ChartSpec::no_data();
    }
    ChartSpec::Gauge(GaugeSpec {
        title: GROWTH_GAUGE,
        value: growth_pct,
        range: -100.0..=100.0,
    })
}

/// Stacked FBA, 3PL and pending stock per SKU.
pub fn stock_breakdown(view: &FilteredTable<'_>) -> Result<ChartSpec, DashboardError> {
    bar_chart(
        view,
        STOCK_BREAKDOWN,
        BarMode::Stacked,
        &[
            ("FBA Stock", FBA_STOCK),
            ("3PL Stock", TPL_STOCK),
            ("FBA Pending", FBA_PENDING),
        ],
    )
}

/// Grouped secondary forecast and average sales per SKU.
pub fn secondary_forecast(view: &FilteredTable<'_>) -> Result<ChartSpec, DashboardError> {
    bar_chart(
        view,
        SECONDARY_FORECAST,
        BarMode::Grouped,
        &[("Forecast.2 Sales", FORECAST_2), ("AvgSales.2", AVG_SALES_2)],
    )
}
