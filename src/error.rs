use thiserror::Error;

/// Errors raised while turning a loaded table into dashboard output.
///
/// These surface at the point of use: a table loads without any schema
/// check, and a column is only looked up when a card or chart needs it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' holds non-numeric value '{value}'")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
}
