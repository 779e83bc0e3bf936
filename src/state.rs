use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::filter::FilterSelection;
use crate::data::loader::{TextEncoding, load_file};
use crate::data::model::{ASIN, BRAND, CellValue, SalesTable};
use crate::error::DashboardError;
use crate::view::{Dashboard, render};

// ---------------------------------------------------------------------------
// Session context
// ---------------------------------------------------------------------------

/// The loaded table and where it came from.
pub struct Session {
    pub table: SalesTable,
    pub source: PathBuf,
    pub encoding: TextEncoding,
}

/// Choices offered by one multi-select, taken from the full table.
pub struct FilterOptions {
    pub column: &'static str,
    pub label: &'static str,
    pub values: Result<Vec<CellValue>, DashboardError>,
}

impl FilterOptions {
    fn from_table(table: &SalesTable, column: &'static str, label: &'static str) -> Self {
        Self {
            column,
            label,
            values: table.distinct_values(column),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub session: Session,

    /// Current brand / ASIN selection. Survives reloads.
    pub selection: FilterSelection,

    /// Brand and ASIN option lists.
    pub filter_options: Vec<FilterOptions>,

    /// Output of the last pipeline pass.
    pub dashboard: Dashboard,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let selection = FilterSelection::default();
        let dashboard = render(&session.table, &selection);
        let filter_options = Self::options_for(&session.table);
        Self {
            session,
            selection,
            filter_options,
            dashboard,
            status_message: None,
        }
    }

    fn options_for(table: &SalesTable) -> Vec<FilterOptions> {
        vec![
            FilterOptions::from_table(table, BRAND, "Select Brand"),
            FilterOptions::from_table(table, ASIN, "Select ASIN"),
        ]
    }

    /// Re-run the pipeline for the current table and selection.
    pub fn rerender(&mut self) {
        self.dashboard = render(&self.session.table, &self.selection);
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: &str, value: &CellValue) {
        self.selection.toggle(column, value);
        self.rerender();
    }

    /// Lift the filter on one column.
    pub fn clear_filter(&mut self, column: &str) {
        self.selection.clear(column);
        self.rerender();
    }

    /// Swap in a freshly loaded table and rebuild everything derived from it.
    fn set_table(&mut self, table: SalesTable) {
        self.filter_options = Self::options_for(&table);
        self.session.table = table;
        self.status_message = None;
        self.rerender();
    }

    /// Re-read the current source file, keeping the selection.
    /// On failure the previous table stays in place.
    pub fn reload(&mut self) {
        let source = self.session.source.clone();
        if let Err(e) = self.try_load(&source) {
            log::error!("Failed to reload {}: {e:#}", source.display());
            self.status_message = Some(format!("Error: {e:#}"));
        }
    }

    /// Load a different file; the selection starts over.
    pub fn open(&mut self, path: &Path) {
        match self.try_load(path) {
            Ok(()) => {
                self.session.source = path.to_path_buf();
                self.selection = FilterSelection::default();
                self.rerender();
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn try_load(&mut self, path: &Path) -> Result<()> {
        let table = load_file(path, self.session.encoding)?;
        self.set_table(table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::summary::fixtures;

    fn s(v: &str) -> CellValue {
        CellValue::String(v.to_string())
    }

    fn state_with(table: SalesTable, source: PathBuf) -> AppState {
        AppState::new(Session {
            table,
            source,
            encoding: TextEncoding::Latin1,
        })
    }

    const CSV: &str = "Brand,ASIN,based on Avg Sales,based on forecast,avg. Daily sales (7 days),\
avg. Daily sales (30 days),FBA Stock,3PL Stock,FBA Pending,basedonforecast.2,basedonAvgSales.2\n\
X,A1,10,8,5,4,2,1,0,7,9\n\
Y,A2,20,15,6,8,3,2,1,12,18\n";

    #[test]
    fn options_come_from_full_table() {
        let mut state = state_with(fixtures::two_rows(), PathBuf::from("unused.csv"));
        state.toggle_filter_value(BRAND, &s("X"));

        assert_eq!(state.dashboard.visible_rows, 1);
        let brands = state.filter_options[0].values.as_ref().unwrap();
        assert_eq!(brands, &vec![s("X"), s("Y")]);
    }

    #[test]
    fn toggling_and_clearing_rerun_the_pipeline() {
        let mut state = state_with(fixtures::two_rows(), PathBuf::from("unused.csv"));
        state.toggle_filter_value(ASIN, &s("A1"));
        assert_eq!(state.dashboard.cards.as_ref().unwrap()[0].value, "10");

        state.clear_filter(ASIN);
        assert_eq!(state.dashboard.cards.as_ref().unwrap()[0].value, "30");
    }

    #[test]
    fn reload_keeps_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        std::fs::write(&path, CSV).unwrap();

        let mut state = state_with(SalesTable::default(), path.clone());
        state.toggle_filter_value(BRAND, &s("Y"));
        assert_eq!(state.dashboard.visible_rows, 0);

        state.reload();
        assert!(state.status_message.is_none());
        assert_eq!(state.dashboard.total_rows, 2);
        assert_eq!(state.dashboard.visible_rows, 1);
        assert!(state.selection.is_selected(BRAND, &s("Y")));
    }

    #[test]
    fn exported_missing_markers_and_book_asins_reach_the_cards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let csv = CSV
            .replace("X,A1,10,8,", "X,0451526538,10,NA,")
            .replace("Y,A2,20,", "Y,B07XYZ,NaN,");
        std::fs::write(&path, csv).unwrap();

        let mut state = state_with(SalesTable::default(), path);
        state.reload();
        assert!(state.status_message.is_none());

        let asins = state.filter_options[1].values.as_ref().unwrap();
        assert_eq!(asins, &vec![s("0451526538"), s("B07XYZ")]);

        let cards = state.dashboard.cards.as_ref().unwrap();
        assert_eq!(cards[0].value, "10");
        assert_eq!(cards[1].value, "15");
        assert_eq!(cards[4].value, "0451526538");
    }

    #[test]
    fn failed_open_keeps_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with(fixtures::two_rows(), PathBuf::from("unused.csv"));

        state.open(&dir.path().join("missing.csv"));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert_eq!(state.dashboard.total_rows, 2);
        assert_eq!(state.session.source, PathBuf::from("unused.csv"));
    }

    #[test]
    fn open_resets_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.csv");
        std::fs::write(&path, CSV).unwrap();

        let mut state = state_with(fixtures::two_rows(), PathBuf::from("unused.csv"));
        state.toggle_filter_value(BRAND, &s("X"));
        state.open(&path);

        assert_eq!(state.session.source, path);
        assert_eq!(state.selection, FilterSelection::default());
        assert_eq!(state.dashboard.visible_rows, 2);
    }
}
