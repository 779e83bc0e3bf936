use std::collections::BTreeSet;
use std::fmt;

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Column names of the sales export
// ---------------------------------------------------------------------------

pub const BRAND: &str = "Brand";
pub const ASIN: &str = "ASIN";
pub const AVG_SALES: &str = "based on Avg Sales";
pub const FORECAST: &str = "based on forecast";
pub const DAILY_SALES_7D: &str = "avg. Daily sales (7 days)";
pub const DAILY_SALES_30D: &str = "avg. Daily sales (30 days)";
pub const FBA_STOCK: &str = "FBA Stock";
pub const TPL_STOCK: &str = "3PL Stock";
pub const FBA_PENDING: &str = "FBA Pending";
pub const FORECAST_2: &str = "basedonforecast.2";
pub const AVG_SALES_2: &str = "basedonAvgSales.2";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, typed by inspection at load time.
/// Filter selections live in `BTreeSet`s, so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn rank(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

/// Text the CSV loader reads as a missing value (pandas' default `na_values`).
const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Digits that only make sense as an identifier, e.g. the ISBN-style ASIN
/// `0451526538`: more than one digit before the point and a leading zero.
fn has_leading_zero(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    let int_part = digits.split(['.', 'e', 'E']).next().unwrap_or("");
    int_part.len() > 1 && int_part.starts_with('0')
}

impl CellValue {
    /// Type a raw text cell the way the CSV loader sees it.
    pub fn from_text(s: &str) -> Self {
        if MISSING_TOKENS.contains(&s) {
            return CellValue::Null;
        }
        if has_leading_zero(s) {
            return CellValue::String(s.to_string());
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    /// Numeric view of the cell. Nulls and NaN count as zero; zero-padded
    /// digit strings still read as their number.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            CellValue::Integer(i) => Some(Number::integer(*i as f64)),
            CellValue::Float(v) if v.is_nan() => Some(Number::float(0.0)),
            CellValue::Float(v) => Some(Number::float(*v)),
            CellValue::Null => Some(Number::integer(0.0)),
            CellValue::String(s) if has_leading_zero(s) => {
                if let Ok(i) = s.parse::<i64>() {
                    Some(Number::integer(i as f64))
                } else {
                    s.parse::<f64>().ok().map(Number::float)
                }
            }
            _ => None,
        }
    }
}

/// A numeric cell value that remembers whether it came from an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    pub value: f64,
    pub integral: bool,
}

impl Number {
    pub fn integer(value: f64) -> Self {
        Self { value, integral: true }
    }

    pub fn float(value: f64) -> Self {
        Self { value, integral: false }
    }
}

// ---------------------------------------------------------------------------
// SalesTable – the complete loaded table
// ---------------------------------------------------------------------------

/// One row of the source table, cells in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub cells: Vec<CellValue>,
}

/// The full parsed table. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    /// Column names in file order.
    pub column_names: Vec<String>,
    /// All rows in file order.
    pub records: Vec<Record>,
}

impl SalesTable {
    /// Build a table, padding short rows with nulls.
    pub fn new(column_names: Vec<String>, mut records: Vec<Record>) -> Self {
        let width = column_names.len();
        for rec in &mut records {
            rec.cells.resize(width, CellValue::Null);
        }
        SalesTable {
            column_names,
            records,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a column, or a schema error naming it.
    pub fn column_index(&self, column: &str) -> Result<usize, DashboardError> {
        self.column_names
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| DashboardError::MissingColumn(column.to_string()))
    }

    /// Distinct values of a column in first-occurrence order.
    pub fn distinct_values(&self, column: &str) -> Result<Vec<CellValue>, DashboardError> {
        let idx = self.column_index(column)?;
        let mut seen = BTreeSet::new();
        Ok(self
            .records
            .iter()
            .map(|rec| &rec.cells[idx])
            .filter(|v| seen.insert((*v).clone()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SalesTable {
        SalesTable::new(
            vec![BRAND.into(), ASIN.into()],
            vec![
                Record { cells: vec![CellValue::from_text("Y"), CellValue::from_text("A2")] },
                Record { cells: vec![CellValue::from_text("X"), CellValue::from_text("A1")] },
                Record { cells: vec![CellValue::from_text("Y")] },
            ],
        )
    }

    #[test]
    fn cells_are_typed_by_inspection() {
        assert_eq!(CellValue::from_text(""), CellValue::Null);
        assert_eq!(CellValue::from_text("42"), CellValue::Integer(42));
        assert_eq!(CellValue::from_text("-1.5"), CellValue::Float(-1.5));
        assert_eq!(CellValue::from_text("true"), CellValue::Bool(true));
        assert_eq!(CellValue::from_text("B07X"), CellValue::String("B07X".into()));
    }

    #[test]
    fn null_counts_as_integer_zero() {
        assert_eq!(CellValue::Null.as_number(), Some(Number::integer(0.0)));
        assert_eq!(CellValue::Float(f64::NAN).as_number(), Some(Number::float(0.0)));
        assert_eq!(CellValue::String("B07X".into()).as_number(), None);
    }

    #[test]
    fn missing_value_tokens_read_as_null() {
        for token in ["NaN", "nan", "NA", "N/A", "n/a", "null", "NULL", "None", "#N/A", "<NA>"] {
            assert_eq!(CellValue::from_text(token), CellValue::Null, "{token}");
        }
        assert_eq!(CellValue::from_text("Nancy"), CellValue::String("Nancy".into()));
    }

    #[test]
    fn zero_padded_identifiers_keep_their_text() {
        let asin = CellValue::from_text("0451526538");
        assert_eq!(asin, CellValue::String("0451526538".into()));
        assert_eq!(asin.to_string(), "0451526538");
        assert_eq!(asin.as_number(), Some(Number::integer(451526538.0)));

        assert_eq!(CellValue::from_text("0"), CellValue::Integer(0));
        assert_eq!(CellValue::from_text("0.5"), CellValue::Float(0.5));
        assert_eq!(CellValue::from_text("-0.25"), CellValue::Float(-0.25));
    }

    #[test]
    fn short_rows_are_padded_with_null() {
        let t = table();
        assert_eq!(t.records[2].cells, vec![CellValue::String("Y".into()), CellValue::Null]);
    }

    #[test]
    fn distinct_values_keep_first_occurrence_order() {
        let brands = table().distinct_values(BRAND).unwrap();
        assert_eq!(
            brands,
            vec![CellValue::String("Y".into()), CellValue::String("X".into())]
        );
    }

    #[test]
    fn unknown_column_is_a_schema_error() {
        let err = table().column_index(FBA_STOCK).unwrap_err();
        assert_eq!(err, DashboardError::MissingColumn(FBA_STOCK.into()));
    }
}
