use crate::error::DashboardError;

use super::filter::FilteredTable;
use super::model::{
    ASIN, AVG_SALES, DAILY_SALES_30D, DAILY_SALES_7D, FBA_STOCK, FORECAST, Number, TPL_STOCK,
};

/// Placeholder shown as top SKU when no row passes the filters.
pub const NO_DATA: &str = "No Data";

// ---------------------------------------------------------------------------
// Column access
// ---------------------------------------------------------------------------

/// Numeric values of `column` for every row of the view.
///
/// Nulls read as zero; anything else non-numeric is an error naming the row.
pub fn numeric_column(view: &FilteredTable<'_>, column: &str) -> Result<Vec<Number>, DashboardError> {
    let idx = view.table.column_index(column)?;
    view.rows()
        .map(|(row, rec)| {
            let cell = &rec.cells[idx];
            cell.as_number().ok_or_else(|| DashboardError::NonNumeric {
                column: column.to_string(),
                row,
                value: cell.to_string(),
            })
        })
        .collect()
}

/// Cells of `column` rendered as text, in view order.
pub fn label_column(view: &FilteredTable<'_>, column: &str) -> Result<Vec<String>, DashboardError> {
    let idx = view.table.column_index(column)?;
    Ok(view.rows().map(|(_, rec)| rec.cells[idx].to_string()).collect())
}

/// Column total; `integral` stays true only if every summand was an integer.
pub fn column_sum(view: &FilteredTable<'_>, column: &str) -> Result<Number, DashboardError> {
    let values = numeric_column(view, column)?;
    Ok(Number {
        value: values.iter().map(|n| n.value).sum(),
        integral: values.iter().all(|n| n.integral),
    })
}

// ---------------------------------------------------------------------------
// Summary values
// ---------------------------------------------------------------------------

/// Scalar summary of a filtered table.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub total_sales: Number,
    pub total_forecast: Number,
    /// Sum of the per-row 7-day daily averages (not an average itself).
    pub sales_7d: Number,
    /// Sum of the per-row 30-day daily averages.
    pub sales_30d: Number,
    pub growth_pct: f64,
    /// FBA + 3PL stock; FBA pending is not counted.
    pub total_stock: Number,
    pub top_sku: String,
}

impl SalesSummary {
    /// The summary of an empty view.
    pub fn empty() -> Self {
        let zero = Number::integer(0.0);
        Self {
            total_sales: zero,
            total_forecast: zero,
            sales_7d: zero,
            sales_30d: zero,
            growth_pct: 0.0,
            total_stock: zero,
            top_sku: NO_DATA.to_string(),
        }
    }
}

/// Percentage change of the 7-day sum against the 30-day sum.
/// A zero 30-day sum yields exactly 0.
pub fn growth_percentage(sales_7d: f64, sales_30d: f64) -> f64 {
    if sales_30d != 0.0 {
        (sales_7d - sales_30d) / sales_30d * 100.0
    } else {
        0.0
    }
}

/// Identifier of the row with the highest average sales.
///
/// Ties go to the earliest row. NaN never beats a real number.
pub fn top_selling(view: &FilteredTable<'_>) -> Result<Option<String>, DashboardError> {
    let sales = numeric_column(view, AVG_SALES)?;
    let ids = label_column(view, ASIN)?;

    let mut best: Option<(usize, f64)> = None;
    for (i, n) in sales.iter().enumerate() {
        let replace = match best {
            None => true,
            Some((_, b)) => n.value > b || (b.is_nan() && !n.value.is_nan()),
        };
        if replace {
            best = Some((i, n.value));
        }
    }
    Ok(best.map(|(i, _)| ids[i].clone()))
}

/// Compute every summary value for the view.
pub fn summarize(view: &FilteredTable<'_>) -> Result<SalesSummary, DashboardError> {
    if view.is_empty() {
        return Ok(SalesSummary::empty());
    }

    let total_sales = column_sum(view, AVG_SALES)?;
    let total_forecast = column_sum(view, FORECAST)?;
    let sales_7d = column_sum(view, DAILY_SALES_7D)?;
    let sales_30d = column_sum(view, DAILY_SALES_30D)?;
    let fba = column_sum(view, FBA_STOCK)?;
    let tpl = column_sum(view, TPL_STOCK)?;
    let top_sku = top_selling(view)?.unwrap_or_else(|| NO_DATA.to_string());

    Ok(SalesSummary {
        total_sales,
        total_forecast,
        sales_7d,
        sales_30d,
        growth_pct: growth_percentage(sales_7d.value, sales_30d.value),
        total_stock: Number {
            value: fba.value + tpl.value,
            integral: fba.integral && tpl.integral,
        },
        top_sku,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{FilterSelection, filter};
    use crate::data::model::{CellValue, Record, SalesTable};

    fn s(v: &str) -> CellValue {
        CellValue::String(v.to_string())
    }

    #[test]
    fn unfiltered_two_row_scenario() {
        let t = fixtures::two_rows();
        let summary = summarize(&filter(&t, &FilterSelection::default())).unwrap();

        assert_eq!(summary.total_sales, Number::integer(30.0));
        assert_eq!(summary.total_forecast, Number::integer(23.0));
        assert_eq!(summary.sales_7d.value, 11.0);
        assert_eq!(summary.sales_30d.value, 12.0);
        assert!((summary.growth_pct - (11.0 - 12.0) / 12.0 * 100.0).abs() < 1e-9);
        assert_eq!(summary.total_stock, Number::integer(8.0));
        assert_eq!(summary.top_sku, "A2");
    }

    #[test]
    fn brand_filter_scenario() {
        let t = fixtures::two_rows();
        let summary = summarize(&filter(&t, &FilterSelection::new([s("X")], []))).unwrap();

        assert_eq!(summary.total_sales.value, 10.0);
        assert_eq!(summary.top_sku, "A1");
        assert_eq!(summary.total_stock.value, 3.0);
    }

    #[test]
    fn empty_view_yields_zeros_and_sentinel() {
        let t = fixtures::two_rows();
        let summary = summarize(&filter(&t, &FilterSelection::new([], [s("Z")]))).unwrap();
        assert_eq!(summary, SalesSummary::empty());
        assert_eq!(summary.top_sku, "No Data");
        assert_eq!(summary.growth_pct, 0.0);
    }

    #[test]
    fn empty_view_never_touches_columns() {
        let t = SalesTable::default();
        let summary = summarize(&filter(&t, &FilterSelection::default())).unwrap();
        assert_eq!(summary, SalesSummary::empty());
    }

    #[test]
    fn growth_is_zero_without_thirty_day_sales() {
        assert_eq!(growth_percentage(42.0, 0.0), 0.0);
        assert_eq!(growth_percentage(0.0, 0.0), 0.0);
        assert!((growth_percentage(15.0, 10.0) - 50.0).abs() < 1e-9);
        assert!((growth_percentage(5.0, 10.0) + 50.0).abs() < 1e-9);
    }

    #[test]
    fn top_sku_tie_goes_to_first_row() {
        let t = fixtures::table(&[
            ("X", "B1", [5, 0, 0, 0, 0, 0, 0, 0, 0]),
            ("X", "B2", [9, 0, 0, 0, 0, 0, 0, 0, 0]),
            ("Y", "B3", [9, 0, 0, 0, 0, 0, 0, 0, 0]),
        ]);
        let view = filter(&t, &FilterSelection::default());
        assert_eq!(top_selling(&view).unwrap().as_deref(), Some("B2"));
    }

    #[test]
    fn stock_excludes_pending() {
        let t = fixtures::table(&[("X", "C1", [0, 0, 0, 0, 4, 6, 100, 0, 0])]);
        let summary = summarize(&filter(&t, &FilterSelection::default())).unwrap();
        assert_eq!(summary.total_stock.value, 10.0);
    }

    #[test]
    fn nulls_sum_as_zero_and_floats_clear_integral() {
        let mut t = fixtures::two_rows();
        let avg = t.column_index(AVG_SALES).unwrap();
        t.records[0].cells[avg] = CellValue::Null;
        t.records[1].cells[avg] = CellValue::Float(2.5);

        let summary = summarize(&filter(&t, &FilterSelection::default())).unwrap();
        assert_eq!(summary.total_sales, Number::float(2.5));
    }

    #[test]
    fn missing_markers_and_nan_sum_as_zero() {
        let mut t = fixtures::two_rows();
        let avg = t.column_index(AVG_SALES).unwrap();
        let fc = t.column_index(FORECAST).unwrap();
        t.records[0].cells[fc] = CellValue::from_text("NA");
        t.records[1].cells[avg] = CellValue::from_text("NaN");

        let summary = summarize(&filter(&t, &FilterSelection::default())).unwrap();
        assert_eq!(summary.total_sales, Number::integer(10.0));
        assert_eq!(summary.total_forecast, Number::integer(15.0));
        assert_eq!(summary.top_sku, "A1");

        t.records[1].cells[avg] = CellValue::Float(f64::NAN);
        let summary = summarize(&filter(&t, &FilterSelection::default())).unwrap();
        assert_eq!(summary.total_sales, Number::float(10.0));
        assert_eq!(summary.top_sku, "A1");
    }

    #[test]
    fn missing_column_fails_at_use() {
        let t = SalesTable::new(
            vec![ASIN.into(), AVG_SALES.into()],
            vec![Record { cells: vec![s("A1"), CellValue::Integer(1)] }],
        );
        let err = summarize(&filter(&t, &FilterSelection::default())).unwrap_err();
        assert_eq!(err, DashboardError::MissingColumn(FORECAST.into()));
    }

    #[test]
    fn text_in_numeric_column_is_reported() {
        let mut t = fixtures::two_rows();
        let fc = t.column_index(FORECAST).unwrap();
        t.records[1].cells[fc] = s("abc");

        let err = summarize(&filter(&t, &FilterSelection::default())).unwrap_err();
        assert_eq!(
            err,
            DashboardError::NonNumeric {
                column: FORECAST.into(),
                row: 1,
                value: "abc".into(),
            }
        );
    }
}
