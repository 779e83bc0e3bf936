use std::collections::{BTreeMap, BTreeSet};

use super::model::{ASIN, BRAND, CellValue, Record, SalesTable};

// ---------------------------------------------------------------------------
// Filter selection: which values are chosen per column
// ---------------------------------------------------------------------------

/// Per-column selection state: maps column name → set of selected values.
/// A column that is absent or has an empty set is not filtered at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    selected: BTreeMap<String, BTreeSet<CellValue>>,
}

impl FilterSelection {
    /// Selection over the dashboard's two filter columns.
    pub fn new(brands: impl IntoIterator<Item = CellValue>, asins: impl IntoIterator<Item = CellValue>) -> Self {
        let mut sel = Self::default();
        sel.selected.insert(BRAND.to_string(), brands.into_iter().collect());
        sel.selected.insert(ASIN.to_string(), asins.into_iter().collect());
        sel
    }

    /// Values currently selected for `column` (empty means "no filter").
    pub fn selected(&self, column: &str) -> Option<&BTreeSet<CellValue>> {
        self.selected.get(column)
    }

    pub fn is_selected(&self, column: &str, value: &CellValue) -> bool {
        self.selected
            .get(column)
            .is_some_and(|set| set.contains(value))
    }

    /// Toggle a single value in a column's selection.
    pub fn toggle(&mut self, column: &str, value: &CellValue) {
        let set = self.selected.entry(column.to_string()).or_default();
        if !set.remove(value) {
            set.insert(value.clone());
        }
    }

    /// Drop every selected value for `column`, lifting its filter.
    pub fn clear(&mut self, column: &str) {
        self.selected.remove(column);
    }

    /// Columns with at least one selected value.
    fn active(&self) -> impl Iterator<Item = (&String, &BTreeSet<CellValue>)> {
        self.selected.iter().filter(|(_, set)| !set.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Rows of a [`SalesTable`] that pass a [`FilterSelection`], in table order.
#[derive(Debug, Clone)]
pub struct FilteredTable<'a> {
    pub table: &'a SalesTable,
    pub indices: Vec<usize>,
}

impl<'a> FilteredTable<'a> {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate `(row index in the full table, record)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a Record)> + '_ {
        let table = self.table;
        self.indices.iter().map(move |&i| (i, &table.records[i]))
    }
}

/// Keep rows that satisfy every active column filter.
///
/// Within one column a row passes when its value is any of the selected
/// values; across columns all filters must pass. A row missing a filtered
/// column only passes if `Null` is selected.
pub fn filter<'a>(table: &'a SalesTable, selection: &FilterSelection) -> FilteredTable<'a> {
    let active: Vec<(Option<usize>, &BTreeSet<CellValue>)> = selection
        .active()
        .map(|(col, set)| (table.column_index(col).ok(), set))
        .collect();

    let indices = table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            active.iter().all(|(idx, set)| match idx {
                Some(i) => set.contains(&rec.cells[*i]),
                None => set.contains(&CellValue::Null),
            })
        })
        .map(|(i, _)| i)
        .collect();

    FilteredTable { table, indices }
}
