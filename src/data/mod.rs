//! Data layer: core types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → SalesTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ SalesTable  │  column names + Vec<Record>
//!   └────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  brand / ASIN selection → FilteredTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ summary   │  totals, growth %, top SKU
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
